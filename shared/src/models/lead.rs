//! Lead Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lead lifecycle status
///
/// Status is mutated only by backend-side automation; the client
/// never transitions a lead itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Nurturing,
    Qualified,
    Converted,
    Lost,
}

impl Default for LeadStatus {
    fn default() -> Self {
        Self::New
    }
}

impl LeadStatus {
    /// Wire representation, also used as a query-string value
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Nurturing => "nurturing",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Lost => "lost",
        }
    }

    /// All stages in funnel order (lost last, as the absorbing alternative)
    pub fn all() -> [LeadStatus; 6] {
        [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Nurturing,
            LeadStatus::Qualified,
            LeadStatus::Converted,
            LeadStatus::Lost,
        ]
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lead entity (from backend)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    /// Home Owner, Architect, Builder, Contractor
    pub role: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub first_response_at: Option<DateTime<Utc>>,
    pub last_contact_at: Option<DateTime<Utc>>,
    pub conversion_date: Option<DateTime<Utc>>,
}

fn default_source() -> String {
    "website_form".to_string()
}

impl Lead {
    /// Case-insensitive substring match on name or email
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }
}

/// Product interest row on the public capture form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInterest {
    /// Flooring, Wall Panels, Lighting, Laminates
    pub category: String,
    pub product: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl ProductInterest {
    /// A row counts only when both category and product were chosen
    pub fn is_complete(&self) -> bool {
        !self.category.is_empty() && !self.product.is_empty()
    }
}

/// Public form submission payload (POST /api/leads)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub product_interests: Vec<ProductInterest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, email: &str) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            company: None,
            role: None,
            location: None,
            message: None,
            source: default_source(),
            status: LeadStatus::New,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            first_response_at: None,
            last_contact_at: None,
            conversion_date: None,
        }
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let l = lead("Vikas Pathak", "vikas@example.com");
        assert!(l.matches_search("vik"));
        assert!(l.matches_search("VIK"));
        assert!(l.matches_search("pathak"));
    }

    #[test]
    fn search_matches_email() {
        let l = lead("Someone Else", "vikas@example.com");
        assert!(l.matches_search("vik"));
    }

    #[test]
    fn search_excludes_non_matching() {
        let l = lead("Arun Mehta", "arun@example.com");
        assert!(!l.matches_search("vik"));
    }

    #[test]
    fn empty_term_matches_everything() {
        let l = lead("Arun Mehta", "arun@example.com");
        assert!(l.matches_search(""));
    }

    #[test]
    fn status_round_trips_through_wire_format() {
        let json = serde_json::to_string(&LeadStatus::Nurturing).unwrap();
        assert_eq!(json, "\"nurturing\"");
        let back: LeadStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LeadStatus::Nurturing);
    }
}
