//! View synchronization
//!
//! A generic polling primitive parameterized by view source, filter,
//! and refresh interval, scoped to view lifetime with explicit
//! start/stop. Each mounted view owns exactly one synchronizer; views
//! never share state and poll independently.

mod filter;
mod synchronizer;
mod views;

pub use filter::{FollowUpBucket, FollowUpFilter};
pub use synchronizer::{Synchronizer, ViewSource, ViewState};
pub use views::{
    ApprovalQueue, ApprovalSource, Dashboard, DashboardSource, FollowUpQueue, FollowUpSource,
};

use std::time::Duration;

/// Periodic refresh interval for mounted admin views
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);
