//! Client-related types shared between backend and client
//!
//! Request/response DTOs for the mutating admin actions and the
//! liveness probe.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback notes when the operator approves without typing any
pub const DEFAULT_APPROVAL_NOTES: &str = "Approved from admin panel";

/// Approve request body (POST /api/approvals/{id}/approve)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveRequest {
    pub notes: String,
}

impl ApproveRequest {
    /// Empty or missing notes fall back to the fixed placeholder
    pub fn new(notes: Option<String>) -> Self {
        let notes = notes.filter(|n| !n.trim().is_empty());
        Self {
            notes: notes.unwrap_or_else(|| DEFAULT_APPROVAL_NOTES.to_string()),
        }
    }
}

/// Reject request body (POST /api/approvals/{id}/reject)
///
/// The reason is mandatory; construction fails on empty input so the
/// precondition is checked before any request exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

impl RejectRequest {
    pub fn new(reason: impl Into<String>) -> Option<Self> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return None;
        }
        Some(Self { reason })
    }
}

/// Complete request body (POST /api/follow-ups/{id}/complete)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteRequest {
    pub notes: String,
}

impl CompleteRequest {
    pub fn new(notes: Option<String>) -> Self {
        Self {
            notes: notes.unwrap_or_default(),
        }
    }
}

/// Snooze request body (POST /api/follow-ups/{id}/snooze)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnoozeRequest {
    /// Absolute deferral deadline, RFC 3339 UTC
    pub snooze_until: DateTime<Utc>,
}

impl SnoozeRequest {
    /// Deadline is exactly `hours` after `now`; zero hours is not a snooze
    pub fn from_hours(now: DateTime<Utc>, hours: u32) -> Option<Self> {
        if hours == 0 {
            return None;
        }
        Some(Self {
            snooze_until: now + Duration::hours(i64::from(hours)),
        })
    }
}

/// Generic write acknowledgement returned by all four actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Liveness probe response (GET /health)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    #[serde(default)]
    pub services: HashMap<String, String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn approve_defaults_placeholder_notes() {
        assert_eq!(ApproveRequest::new(None).notes, DEFAULT_APPROVAL_NOTES);
        assert_eq!(
            ApproveRequest::new(Some("  ".to_string())).notes,
            DEFAULT_APPROVAL_NOTES
        );
        assert_eq!(
            ApproveRequest::new(Some("looks good".to_string())).notes,
            "looks good"
        );
    }

    #[test]
    fn reject_requires_non_empty_reason() {
        assert!(RejectRequest::new("").is_none());
        assert!(RejectRequest::new("   ").is_none());
        assert!(RejectRequest::new("duplicate inquiry").is_some());
    }

    #[test]
    fn snooze_deadline_is_exactly_n_hours_later() {
        let t = Utc.with_ymd_and_hms(2025, 9, 12, 10, 30, 0).unwrap();
        let req = SnoozeRequest::from_hours(t, 2).unwrap();
        assert_eq!(req.snooze_until, t + Duration::hours(2));

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["snooze_until"], "2025-09-12T12:30:00Z");
    }

    #[test]
    fn snooze_rejects_zero_hours() {
        assert!(SnoozeRequest::from_hours(Utc::now(), 0).is_none());
    }
}
