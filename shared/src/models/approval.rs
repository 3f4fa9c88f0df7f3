//! Approval Model
//!
//! A pending decision gate requiring human sign-off before an
//! automated action proceeds. Created by backend automation;
//! transitions pending -> approved/rejected exactly once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Approval status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl ApprovalStatus {
    /// Wire representation, also the endpoint path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Approval subtype - decides which detail fields are populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalKind {
    LargeQuantityOrder,
    HighPriorityProfessional,
    BulkDiscountRequest,
    #[serde(other)]
    Other,
}

impl ApprovalKind {
    /// Human-readable title shown in the queue
    pub fn title(&self) -> &'static str {
        match self {
            ApprovalKind::LargeQuantityOrder => "Large Quantity Order",
            ApprovalKind::HighPriorityProfessional => "High-Priority Professional",
            ApprovalKind::BulkDiscountRequest => "Bulk Discount Request",
            ApprovalKind::Other => "Approval Required",
        }
    }
}

/// Priority attached to approvals and follow-ups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detail payload - shape varies by approval subtype
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApprovalDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Large quantity order: units requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_quantity: Option<i64>,
    /// Large quantity order: threshold that was crossed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<String>,
    /// High-priority professional: role that triggered the gate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Bulk discount request: matched keywords
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords_found: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_snippet: Option<String>,
}

/// Denormalized lead contact fields plus detail payload
///
/// Read-model projection so the queue can display contact info
/// without a join; never the authoritative lead record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalMetadata {
    pub approval_type: ApprovalKind,
    pub lead_name: String,
    pub lead_email: String,
    pub lead_phone: Option<String>,
    pub lead_role: Option<String>,
    pub lead_company: Option<String>,
    pub priority: Option<Priority>,
    #[serde(default)]
    pub details: ApprovalDetails,
}

/// Approval entity (from backend)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Approval {
    pub id: Uuid,
    pub lead_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub status: ApprovalStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub metadata: ApprovalMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_kind_uses_snake_case_wire_names() {
        let json = serde_json::to_string(&ApprovalKind::LargeQuantityOrder).unwrap();
        assert_eq!(json, "\"large_quantity_order\"");
    }

    #[test]
    fn unknown_approval_kind_falls_back_to_other() {
        let kind: ApprovalKind = serde_json::from_str("\"something_new\"").unwrap();
        assert_eq!(kind, ApprovalKind::Other);
        assert_eq!(kind.title(), "Approval Required");
    }

    #[test]
    fn details_deserialize_with_missing_fields() {
        let details: ApprovalDetails = serde_json::from_str("{}").unwrap();
        assert!(details.total_quantity.is_none());
        assert!(details.products.is_empty());
        assert!(details.keywords_found.is_empty());
    }
}
