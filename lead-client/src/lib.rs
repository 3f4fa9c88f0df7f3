//! Lead Client - HTTP client and view synchronizer for the lead console
//!
//! Keeps the admin views (dashboard, approval queue, follow-up queue)
//! consistent with the backend within a bounded staleness window:
//! periodic polling, push-triggered invalidation, and an immediate
//! out-of-band refresh after every successful mutating action.

pub mod actions;
pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod http;
pub mod leads;
pub mod push;
pub mod sync;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use events::UiEvent;
pub use http::HttpClient;

// API surface
pub use api::{AnalyticsApi, ApprovalApi, FollowUpApi, LeadApi};

// Synchronizer core
pub use sync::{
    ApprovalQueue, Dashboard, FollowUpBucket, FollowUpFilter, FollowUpQueue, Synchronizer,
    ViewSource, ViewState, REFRESH_INTERVAL,
};

// Mutating actions
pub use actions::{parse_snooze_hours, ActionOutcome, InputDialog};

// Push channel
pub use push::{ChangeEvent, ChangeKind, LeadChangeFeed, PushListener};

// Re-export shared types for convenience
pub use shared::client::{
    ActionResponse, ApproveRequest, CompleteRequest, HealthResponse, RejectRequest, SnoozeRequest,
};
pub use shared::models::{
    Approval, ApprovalStats, ApprovalStatus, ConversionFunnel, DashboardStats, FollowUp,
    FollowUpStats, FollowUpStatus, FunnelStage, Lead, LeadStatus, LeadSubmission, Priority,
};
