//! Aggregate stat projections
//!
//! Recomputed server-side on every read; the client only displays the
//! latest fetched snapshot.

use serde::{Deserialize, Serialize};

use super::lead::LeadStatus;

/// Approval queue counters (GET /api/approvals/stats)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStats {
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub total: u64,
}

/// Follow-up queue counters (GET /api/follow-ups/stats)
///
/// `snoozed` tasks are pending tasks with the snooze flag set, so
/// they are not included in `pending`. Priority counts cover the
/// pending set only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpStats {
    pub pending: u64,
    pub completed: u64,
    pub snoozed: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub total: u64,
}

/// Dashboard headline numbers (GET /api/analytics/dashboard)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_leads: u64,
    pub new_leads_today: u64,
    pub pending_follow_ups: u64,
    pub pending_approvals: u64,
    pub sla_violations: u64,
    pub avg_response_time_minutes: f64,
    pub conversion_rate: f64,
}

/// Lead counts per lifecycle stage (GET /api/analytics/conversion)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionFunnel {
    pub new: u64,
    pub contacted: u64,
    pub nurturing: u64,
    pub qualified: u64,
    pub converted: u64,
    pub lost: u64,
}

/// One funnel stage, for ordered chart rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: LeadStatus,
    pub count: u64,
}

impl ConversionFunnel {
    /// Stages in lifecycle order, lost last
    pub fn stages(&self) -> Vec<FunnelStage> {
        LeadStatus::all()
            .into_iter()
            .map(|stage| FunnelStage {
                stage,
                count: self.count_for(stage),
            })
            .collect()
    }

    pub fn count_for(&self, status: LeadStatus) -> u64 {
        match status {
            LeadStatus::New => self.new,
            LeadStatus::Contacted => self.contacted,
            LeadStatus::Nurturing => self.nurturing,
            LeadStatus::Qualified => self.qualified,
            LeadStatus::Converted => self.converted,
            LeadStatus::Lost => self.lost,
        }
    }
}
