//! Admin view sources and bundles
//!
//! One [`ViewSource`] per admin view, generic over the API traits so
//! tests can drive them with in-memory fakes. The view bundles
//! (`ApprovalQueue`, `FollowUpQueue`, `Dashboard`) pair a source's
//! synchronizer with the view's mutating actions.

use async_trait::async_trait;
use std::sync::Arc;

use super::filter::FollowUpFilter;
use super::synchronizer::{Synchronizer, ViewSource};
use crate::api::{AnalyticsApi, ApprovalApi, FollowUpApi};
use crate::{ClientResult, HttpClient};
use shared::models::{
    Approval, ApprovalStats, ApprovalStatus, DashboardStats, FollowUp, FollowUpStats, FunnelStage,
};

// ========== Approval queue ==========

pub struct ApprovalSource<A: ApprovalApi> {
    api: Arc<A>,
}

#[async_trait]
impl<A: ApprovalApi> ViewSource for ApprovalSource<A> {
    type Stats = ApprovalStats;
    type Item = Approval;
    type Filter = ApprovalStatus;

    fn name(&self) -> &'static str {
        "approvals"
    }

    async fn fetch_stats(&self) -> ClientResult<ApprovalStats> {
        self.api.approval_stats().await
    }

    async fn fetch_items(&self, filter: &ApprovalStatus) -> ClientResult<Vec<Approval>> {
        self.api.approvals(*filter).await
    }
}

/// Approval queue view: synchronized state plus approve/reject
pub struct ApprovalQueue<A: ApprovalApi> {
    pub(crate) api: Arc<A>,
    sync: Synchronizer<ApprovalSource<A>>,
}

impl<A: ApprovalApi> ApprovalQueue<A> {
    pub fn new(api: Arc<A>) -> Self {
        let sync = Synchronizer::new(ApprovalSource { api: api.clone() });
        Self { api, sync }
    }

    pub fn sync(&self) -> &Synchronizer<ApprovalSource<A>> {
        &self.sync
    }
}

// ========== Follow-up queue ==========

pub struct FollowUpSource<A: FollowUpApi> {
    api: Arc<A>,
}

#[async_trait]
impl<A: FollowUpApi> ViewSource for FollowUpSource<A> {
    type Stats = FollowUpStats;
    type Item = FollowUp;
    type Filter = FollowUpFilter;

    fn name(&self) -> &'static str {
        "follow-ups"
    }

    async fn fetch_stats(&self) -> ClientResult<FollowUpStats> {
        self.api.follow_up_stats().await
    }

    /// Status filters pick the endpoint; priority filters read the
    /// pending bucket and apply a local predicate
    async fn fetch_items(&self, filter: &FollowUpFilter) -> ClientResult<Vec<FollowUp>> {
        let mut items = self.api.follow_ups(filter.bucket()).await?;
        items.retain(|fu| filter.matches(fu));
        Ok(items)
    }
}

/// Follow-up queue view: synchronized state plus complete/snooze
pub struct FollowUpQueue<A: FollowUpApi> {
    pub(crate) api: Arc<A>,
    sync: Synchronizer<FollowUpSource<A>>,
}

impl<A: FollowUpApi> FollowUpQueue<A> {
    pub fn new(api: Arc<A>) -> Self {
        let sync = Synchronizer::new(FollowUpSource { api: api.clone() });
        Self { api, sync }
    }

    pub fn sync(&self) -> &Synchronizer<FollowUpSource<A>> {
        &self.sync
    }
}

// ========== Dashboard ==========

pub struct DashboardSource<A: AnalyticsApi> {
    api: Arc<A>,
}

#[async_trait]
impl<A: AnalyticsApi> ViewSource for DashboardSource<A> {
    type Stats = DashboardStats;
    type Item = FunnelStage;
    type Filter = ();

    fn name(&self) -> &'static str {
        "dashboard"
    }

    async fn fetch_stats(&self) -> ClientResult<DashboardStats> {
        self.api.dashboard_stats().await
    }

    /// The funnel read, projected into ordered stages for charting
    async fn fetch_items(&self, _filter: &()) -> ClientResult<Vec<FunnelStage>> {
        Ok(self.api.conversion_funnel().await?.stages())
    }
}

/// Dashboard view: headline stats plus the conversion funnel; no
/// filter and no mutating actions, but the push listener attaches here
pub struct Dashboard<A: AnalyticsApi> {
    sync: Synchronizer<DashboardSource<A>>,
}

impl<A: AnalyticsApi> Dashboard<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            sync: Synchronizer::new(DashboardSource { api }),
        }
    }

    pub fn sync(&self) -> &Synchronizer<DashboardSource<A>> {
        &self.sync
    }
}

/// Convenience constructors for the production HTTP client
impl ApprovalQueue<HttpClient> {
    pub fn over_http(client: HttpClient) -> Self {
        Self::new(Arc::new(client))
    }
}

impl FollowUpQueue<HttpClient> {
    pub fn over_http(client: HttpClient) -> Self {
        Self::new(Arc::new(client))
    }
}

impl Dashboard<HttpClient> {
    pub fn over_http(client: HttpClient) -> Self {
        Self::new(Arc::new(client))
    }
}
