//! Shared types for the lead console
//!
//! Data models and API DTOs shared between the client core and any
//! presentation layer. These are read-model projections of backend
//! records; nothing here performs I/O.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::*;
pub use models::*;
