//! Follow-up Model
//!
//! A scheduled outreach task tied to a lead. pending -> completed is
//! terminal; `snoozed` is a reversible metadata flag that defers
//! urgency without changing status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::approval::Priority;
use super::lead::LeadStatus;

/// Follow-up status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpStatus {
    Pending,
    Completed,
}

impl Default for FollowUpStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl FollowUpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpStatus::Pending => "pending",
            FollowUpStatus::Completed => "completed",
        }
    }
}

/// Follow-up metadata
///
/// Carries the snooze flag, priority, and backend bookkeeping fields
/// the client passes through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowUpMetadata {
    #[serde(default)]
    pub snoozed: bool,
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snoozed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_notes: Option<String>,
    /// Unrecognized backend fields, preserved as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Follow-up entity, enriched server-side with lead contact fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUp {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub lead_name: String,
    pub lead_email: Option<String>,
    pub lead_phone: Option<String>,
    pub lead_company: Option<String>,
    pub lead_role: Option<String>,
    #[serde(default)]
    pub lead_status: LeadStatus,
    pub message: Option<String>,
    pub scheduled_for: Option<DateTime<Utc>>,
    /// call, email, site_visit, ...
    pub action: Option<String>,
    pub reason: Option<String>,
    #[serde(default)]
    pub products: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: FollowUpStatus,
    #[serde(default)]
    pub metadata: FollowUpMetadata,
}

impl FollowUp {
    pub fn priority(&self) -> Option<Priority> {
        self.metadata.priority
    }

    pub fn is_snoozed(&self) -> bool {
        self.metadata.snoozed
    }
}
