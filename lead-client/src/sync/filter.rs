//! View filters
//!
//! Status-valued filters are backend-indexed and select the endpoint
//! path; priority-valued follow-up filters are applied locally over
//! the already-fetched pending set, since priority is a metadata
//! property the backend does not index separately.

use serde::{Deserialize, Serialize};
use shared::models::{FollowUp, Priority};

/// Server-side follow-up list buckets (endpoint path segments)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpBucket {
    Pending,
    Completed,
    Snoozed,
}

impl FollowUpBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpBucket::Pending => "pending",
            FollowUpBucket::Completed => "completed",
            FollowUpBucket::Snoozed => "snoozed",
        }
    }
}

impl std::fmt::Display for FollowUpBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active filter for the follow-up queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FollowUpFilter {
    Pending,
    Completed,
    Snoozed,
    /// Priority filters read the pending bucket and filter in memory
    Priority(Priority),
}

impl Default for FollowUpFilter {
    fn default() -> Self {
        Self::Pending
    }
}

impl FollowUpFilter {
    /// Which server bucket this filter reads from
    pub fn bucket(&self) -> FollowUpBucket {
        match self {
            FollowUpFilter::Pending | FollowUpFilter::Priority(_) => FollowUpBucket::Pending,
            FollowUpFilter::Completed => FollowUpBucket::Completed,
            FollowUpFilter::Snoozed => FollowUpBucket::Snoozed,
        }
    }

    /// Local predicate applied after the fetch
    pub fn matches(&self, follow_up: &FollowUp) -> bool {
        match self {
            FollowUpFilter::Priority(priority) => follow_up.priority() == Some(*priority),
            _ => true,
        }
    }

    /// Queue heading, e.g. "Pending" or "High Priority"
    pub fn heading(&self) -> String {
        match self {
            FollowUpFilter::Pending => "Pending".to_string(),
            FollowUpFilter::Completed => "Completed".to_string(),
            FollowUpFilter::Snoozed => "Snoozed".to_string(),
            FollowUpFilter::Priority(priority) => {
                let p = priority.as_str();
                let mut heading = String::new();
                heading.push_str(&p[..1].to_uppercase());
                heading.push_str(&p[1..]);
                heading.push_str(" Priority");
                heading
            }
        }
    }
}
