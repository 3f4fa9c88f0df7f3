//! Data models
//!
//! Backend-owned records mirrored by the admin views. Denormalized
//! lead contact fields on approvals and follow-ups are deliberate
//! read-model projections, never the authoritative lead entity.

pub mod approval;
pub mod follow_up;
pub mod lead;
pub mod stats;

// Re-exports
pub use approval::*;
pub use follow_up::*;
pub use lead::*;
pub use stats::*;
