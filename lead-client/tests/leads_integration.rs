// lead-client/tests/leads_integration.rs
// Lead capture validation and browser filtering over an in-memory fake

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use lead_client::leads::{submit_lead, LeadDirectory};
use lead_client::{
    ClientError, ClientResult, Lead, LeadApi, LeadStatus, LeadSubmission,
};
use shared::models::ProductInterest;

fn lead(name: &str, email: &str, status: LeadStatus) -> Lead {
    Lead {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        company: None,
        role: None,
        location: None,
        message: None,
        source: "website_form".to_string(),
        status,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        first_response_at: None,
        last_contact_at: None,
        conversion_date: None,
    }
}

#[derive(Default)]
struct MockLeadApi {
    leads: Mutex<Vec<Lead>>,
    list_calls: AtomicUsize,
    submissions: Mutex<Vec<LeadSubmission>>,
}

#[async_trait]
impl LeadApi for MockLeadApi {
    async fn list_leads(&self, status: Option<LeadStatus>) -> ClientResult<Vec<Lead>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let leads = self.leads.lock().unwrap();
        Ok(leads
            .iter()
            .filter(|l| status.is_none_or(|s| l.status == s))
            .cloned()
            .collect())
    }

    async fn create_lead(&self, submission: &LeadSubmission) -> ClientResult<serde_json::Value> {
        if submission.email == "taken@example.com" {
            return Err(ClientError::Validation(
                "A lead with this email already exists".to_string(),
            ));
        }
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(serde_json::json!({"success": true}))
    }
}

#[tokio::test]
async fn submission_requires_name_and_email_before_any_request() {
    let api = MockLeadApi::default();

    let missing_name = LeadSubmission {
        email: "someone@example.com".to_string(),
        ..Default::default()
    };
    let err = submit_lead(&api, missing_name).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    let missing_email = LeadSubmission {
        name: "Vikas Pathak".to_string(),
        ..Default::default()
    };
    assert!(submit_lead(&api, missing_email).await.is_err());

    assert!(api.submissions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn incomplete_product_rows_are_dropped_before_submit() {
    let api = MockLeadApi::default();
    let submission = LeadSubmission {
        name: "Vikas Pathak".to_string(),
        email: "vikas@example.com".to_string(),
        product_interests: vec![
            ProductInterest {
                category: "Flooring".to_string(),
                product: "Oak Planks".to_string(),
                quantity: Some("500 sq ft".to_string()),
            },
            ProductInterest {
                category: "Lighting".to_string(),
                product: String::new(),
                quantity: None,
            },
            ProductInterest {
                category: String::new(),
                product: String::new(),
                quantity: None,
            },
        ],
        ..Default::default()
    };

    submit_lead(&api, submission).await.unwrap();

    let sent = api.submissions.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].product_interests.len(), 1);
    assert_eq!(sent[0].product_interests[0].product, "Oak Planks");
}

#[tokio::test]
async fn backend_rejection_surfaces_as_validation_error() {
    let api = MockLeadApi::default();
    let submission = LeadSubmission {
        name: "Vikas Pathak".to_string(),
        email: "taken@example.com".to_string(),
        ..Default::default()
    };

    let err = submit_lead(&api, submission).await.unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[tokio::test]
async fn status_filter_refetches_but_search_is_local() {
    let api = Arc::new(MockLeadApi::default());
    {
        let mut leads = api.leads.lock().unwrap();
        leads.push(lead("Vikas Pathak", "vikas@example.com", LeadStatus::New));
        leads.push(lead("Arun Mehta", "arun@example.com", LeadStatus::New));
        leads.push(lead("Priya Shah", "priya@example.com", LeadStatus::Qualified));
    }

    let directory = LeadDirectory::new(api.clone());
    directory.refresh().await.unwrap();
    assert_eq!(directory.all().await.len(), 3);

    directory
        .set_status_filter(Some(LeadStatus::New))
        .await
        .unwrap();
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
    assert_eq!(directory.all().await.len(), 2);

    let calls_before = api.list_calls.load(Ordering::SeqCst);
    directory.set_search_term("vik").await;
    assert_eq!(api.list_calls.load(Ordering::SeqCst), calls_before);

    let visible = directory.visible().await;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Vikas Pathak");

    directory.set_search_term("").await;
    assert_eq!(directory.visible().await.len(), 2);
}
