//! Lead capture and browsing
//!
//! The public form submission path and the admin lead browser. The
//! browser refetches on status-filter change only (no periodic
//! timer); the search term is a pure local predicate over the
//! already-fetched list.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::LeadApi;
use crate::{ClientError, ClientResult};
use shared::models::{Lead, LeadStatus, LeadSubmission};

/// Validate and submit a public form capture
///
/// Required-field presence (name, email) is the only client-side
/// validation; incomplete product rows are dropped before the
/// request. Backend rejection text comes back in the error for the
/// form's inline banner.
pub async fn submit_lead<A: LeadApi>(
    api: &A,
    mut submission: LeadSubmission,
) -> ClientResult<serde_json::Value> {
    if submission.name.trim().is_empty() {
        return Err(ClientError::Validation("Name is required".to_string()));
    }
    if submission.email.trim().is_empty() {
        return Err(ClientError::Validation("Email is required".to_string()));
    }

    submission.product_interests.retain(|p| p.is_complete());

    api.create_lead(&submission).await
}

/// Admin lead browser state
///
/// Status filter goes to the server; the search term filters the
/// fetched list in memory, case-insensitively over name and email.
pub struct LeadDirectory<A: LeadApi> {
    api: Arc<A>,
    leads: RwLock<Vec<Lead>>,
    status_filter: RwLock<Option<LeadStatus>>,
    search_term: RwLock<String>,
}

impl<A: LeadApi> LeadDirectory<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            leads: RwLock::new(Vec::new()),
            status_filter: RwLock::new(None),
            search_term: RwLock::new(String::new()),
        }
    }

    /// Refetch the list with the current status filter
    pub async fn refresh(&self) -> ClientResult<()> {
        let status = *self.status_filter.read().await;
        let fetched = self.api.list_leads(status).await.map_err(|e| {
            tracing::error!(error = %e, "failed to fetch leads");
            e
        })?;
        *self.leads.write().await = fetched;
        Ok(())
    }

    /// Change the server-side status filter and refetch
    pub async fn set_status_filter(&self, status: Option<LeadStatus>) -> ClientResult<()> {
        *self.status_filter.write().await = status;
        self.refresh().await
    }

    /// Change the local search term; no network traffic
    pub async fn set_search_term(&self, term: impl Into<String>) {
        *self.search_term.write().await = term.into();
    }

    /// Leads matching the current search term
    pub async fn visible(&self) -> Vec<Lead> {
        let term = self.search_term.read().await.clone();
        self.leads
            .read()
            .await
            .iter()
            .filter(|lead| lead.matches_search(&term))
            .cloned()
            .collect()
    }

    /// Full fetched list, unfiltered
    pub async fn all(&self) -> Vec<Lead> {
        self.leads.read().await.clone()
    }
}
