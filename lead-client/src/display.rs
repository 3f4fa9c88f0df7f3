//! Display helpers
//!
//! Pure functions of synchronized state: per-filter empty states,
//! count summaries, status color classes, and IST timestamp
//! formatting. No independent logic beyond string mapping.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::sync::FollowUpFilter;
use shared::models::{ApprovalStatus, LeadStatus, Priority};

// ========== Empty states ==========

/// Zero-results headline for the approval queue, distinct per filter
pub fn approval_empty_title(filter: ApprovalStatus) -> String {
    format!("No {filter} approvals")
}

/// Zero-results detail line for the approval queue
pub fn approval_empty_detail(filter: ApprovalStatus) -> &'static str {
    match filter {
        ApprovalStatus::Pending => "All approval requests have been processed!",
        ApprovalStatus::Approved => "No approvals have been granted yet.",
        ApprovalStatus::Rejected => "No approvals have been rejected yet.",
    }
}

/// Zero-results headline for the follow-up queue, distinct per filter
pub fn follow_up_empty_title(filter: FollowUpFilter) -> String {
    format!("No {} follow-ups", filter.heading().to_lowercase())
}

/// Zero-results detail line for the follow-up queue
pub fn follow_up_empty_detail(filter: FollowUpFilter) -> &'static str {
    match filter {
        FollowUpFilter::Pending => "You're all caught up!",
        FollowUpFilter::Completed => "No follow-ups have been completed yet.",
        FollowUpFilter::Snoozed => "Nothing is snoozed right now.",
        FollowUpFilter::Priority(_) => "No pending follow-ups at this priority.",
    }
}

// ========== Count summaries ==========

/// Header count line, e.g. "0 pending approvals" or "1 rejected approval"
pub fn approval_summary(filter: ApprovalStatus, count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {filter} approval{plural}")
}

/// Header count line for the follow-up queue
pub fn follow_up_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} follow-up{plural}")
}

// ========== Placeholders ==========

/// Literal placeholder for a missing optional field, e.g. "No phone"
pub fn or_placeholder(value: Option<&str>, placeholder: &'static str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

// ========== Color classes ==========

/// Badge color classes per lead status
pub fn lead_status_color(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::New => "bg-blue-100 text-blue-800",
        LeadStatus::Contacted => "bg-purple-100 text-purple-800",
        LeadStatus::Nurturing => "bg-yellow-100 text-yellow-800",
        LeadStatus::Qualified => "bg-green-100 text-green-800",
        LeadStatus::Converted => "bg-emerald-100 text-emerald-800",
        LeadStatus::Lost => "bg-red-100 text-red-800",
    }
}

/// Badge color classes per priority
pub fn priority_color(priority: Option<Priority>) -> &'static str {
    match priority {
        Some(Priority::High) => "bg-red-100 text-red-800",
        Some(Priority::Medium) => "bg-yellow-100 text-yellow-800",
        Some(Priority::Low) => "bg-green-100 text-green-800",
        None => "bg-gray-100 text-gray-800",
    }
}

/// Card border accent per approval status
pub fn approval_border_color(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::Pending => "border-yellow-400",
        ApprovalStatus::Approved => "border-green-400",
        ApprovalStatus::Rejected => "border-red-400",
    }
}

// ========== Timestamps ==========

/// IST offset (UTC + 5:30)
fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 1800).unwrap_or(Utc.fix())
}

/// Date and time in IST, "N/A" when missing
pub fn format_ist(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts
            .with_timezone(&ist())
            .format("%d %b %Y, %I:%M %P IST")
            .to_string(),
        None => "N/A".to_string(),
    }
}

/// Date only in IST, "N/A" when missing
pub fn format_date_ist(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.with_timezone(&ist()).format("%d %b %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Parse-and-format for raw backend strings; "Invalid Date" when
/// unparseable, "N/A" when empty
pub fn format_ist_str(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return "N/A".to_string();
    }
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(ts) => format_ist(Some(&ts.with_timezone(&Utc))),
        Err(_) => "Invalid Date".to_string(),
    }
}
