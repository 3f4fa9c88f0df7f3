//! Typed backend API surface
//!
//! Traits at the seam so view sources and tests can substitute
//! in-memory fakes; [`HttpClient`] is the production implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::sync::FollowUpBucket;
use crate::{ClientResult, HttpClient};
use shared::client::{
    ActionResponse, ApproveRequest, CompleteRequest, RejectRequest, SnoozeRequest,
};
use shared::models::{
    Approval, ApprovalStats, ApprovalStatus, ConversionFunnel, DashboardStats, FollowUp,
    FollowUpStats, Lead, LeadStatus, LeadSubmission,
};

/// Lead endpoints
#[async_trait]
pub trait LeadApi: Send + Sync + 'static {
    /// List leads, optionally restricted to one status (server-side filter)
    async fn list_leads(&self, status: Option<LeadStatus>) -> ClientResult<Vec<Lead>>;

    /// Create a lead from a public form submission
    async fn create_lead(&self, submission: &LeadSubmission) -> ClientResult<serde_json::Value>;
}

/// Approval queue endpoints
#[async_trait]
pub trait ApprovalApi: Send + Sync + 'static {
    async fn approval_stats(&self) -> ClientResult<ApprovalStats>;

    /// Filtered approval list; the status picks the endpoint path
    async fn approvals(&self, status: ApprovalStatus) -> ClientResult<Vec<Approval>>;

    async fn approve(&self, id: Uuid, request: &ApproveRequest) -> ClientResult<ActionResponse>;

    async fn reject(&self, id: Uuid, request: &RejectRequest) -> ClientResult<ActionResponse>;
}

/// Follow-up queue endpoints
#[async_trait]
pub trait FollowUpApi: Send + Sync + 'static {
    async fn follow_up_stats(&self) -> ClientResult<FollowUpStats>;

    /// Filtered follow-up list; the bucket picks the endpoint path
    async fn follow_ups(&self, bucket: FollowUpBucket) -> ClientResult<Vec<FollowUp>>;

    async fn complete(&self, id: Uuid, request: &CompleteRequest) -> ClientResult<ActionResponse>;

    async fn snooze(&self, id: Uuid, request: &SnoozeRequest) -> ClientResult<ActionResponse>;
}

/// Dashboard analytics endpoints
#[async_trait]
pub trait AnalyticsApi: Send + Sync + 'static {
    async fn dashboard_stats(&self) -> ClientResult<DashboardStats>;

    async fn conversion_funnel(&self) -> ClientResult<ConversionFunnel>;
}

// ========== HTTP implementations ==========

#[async_trait]
impl LeadApi for HttpClient {
    async fn list_leads(&self, status: Option<LeadStatus>) -> ClientResult<Vec<Lead>> {
        let path = match status {
            Some(status) => format!("/api/leads?status={status}"),
            None => "/api/leads".to_string(),
        };
        self.get(&path).await
    }

    async fn create_lead(&self, submission: &LeadSubmission) -> ClientResult<serde_json::Value> {
        self.post("/api/leads", submission).await
    }
}

#[async_trait]
impl ApprovalApi for HttpClient {
    async fn approval_stats(&self) -> ClientResult<ApprovalStats> {
        self.get("/api/approvals/stats").await
    }

    async fn approvals(&self, status: ApprovalStatus) -> ClientResult<Vec<Approval>> {
        self.get(&format!("/api/approvals/{status}")).await
    }

    async fn approve(&self, id: Uuid, request: &ApproveRequest) -> ClientResult<ActionResponse> {
        self.post(&format!("/api/approvals/{id}/approve"), request)
            .await
    }

    async fn reject(&self, id: Uuid, request: &RejectRequest) -> ClientResult<ActionResponse> {
        self.post(&format!("/api/approvals/{id}/reject"), request)
            .await
    }
}

#[async_trait]
impl FollowUpApi for HttpClient {
    async fn follow_up_stats(&self) -> ClientResult<FollowUpStats> {
        self.get("/api/follow-ups/stats").await
    }

    async fn follow_ups(&self, bucket: FollowUpBucket) -> ClientResult<Vec<FollowUp>> {
        self.get(&format!("/api/follow-ups/{}", bucket.as_str())).await
    }

    async fn complete(&self, id: Uuid, request: &CompleteRequest) -> ClientResult<ActionResponse> {
        self.post(&format!("/api/follow-ups/{id}/complete"), request)
            .await
    }

    async fn snooze(&self, id: Uuid, request: &SnoozeRequest) -> ClientResult<ActionResponse> {
        self.post(&format!("/api/follow-ups/{id}/snooze"), request)
            .await
    }
}

#[async_trait]
impl AnalyticsApi for HttpClient {
    async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.get("/api/analytics/dashboard").await
    }

    async fn conversion_funnel(&self) -> ClientResult<ConversionFunnel> {
        self.get("/api/analytics/conversion").await
    }
}
