//! Mutating admin actions
//!
//! Single-shot writes (approve, reject, complete, snooze). On
//! success the owning view refreshes immediately, out of band of the
//! periodic timer; on failure an alert event is emitted and local
//! state is left untouched. No optimistic pre-update, no retry.
//!
//! Operator input goes through [`InputDialog`], a modal abstraction
//! that returns the entered text or a cancellation; empty or
//! cancelled input aborts client-side before any request is issued.

use chrono::Utc;
use uuid::Uuid;

use crate::api::{ApprovalApi, FollowUpApi};
use crate::sync::{ApprovalQueue, FollowUpQueue};
use crate::{ClientResult, UiEvent};
use shared::client::{ApproveRequest, CompleteRequest, RejectRequest, SnoozeRequest};

/// Snooze prompt default, in hours
pub const DEFAULT_SNOOZE_HOURS: u32 = 2;

/// What became of a requested action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The write succeeded and a refresh was triggered
    Applied,
    /// Aborted client-side (cancelled dialog or failed precondition);
    /// no request was issued
    Cancelled,
}

/// Modal input dialog
///
/// Replaces browser-native blocking prompts: returns `Some(text)` on
/// confirmation or `None` when the operator cancels.
pub trait InputDialog: Send + Sync {
    fn input(&self, prompt: &str, default: Option<&str>) -> Option<String>;
}

/// Parse the snooze-hours dialog input; empty, non-numeric, and zero
/// values are not a snooze
pub fn parse_snooze_hours(input: &str) -> Option<u32> {
    input.trim().parse().ok().filter(|&h| h > 0)
}

impl<A: ApprovalApi> ApprovalQueue<A> {
    /// Approve one request; missing notes fall back to the placeholder
    pub async fn approve(&self, id: Uuid, notes: Option<String>) -> ClientResult<ActionOutcome> {
        let request = ApproveRequest::new(notes);
        match self.api.approve(id, &request).await {
            Ok(_) => {
                self.sync().refresh().await;
                Ok(ActionOutcome::Applied)
            }
            Err(e) => Err(self.alert("approve", e)),
        }
    }

    /// Reject one request; an empty reason aborts without a request
    pub async fn reject(&self, id: Uuid, reason: &str) -> ClientResult<ActionOutcome> {
        let Some(request) = RejectRequest::new(reason) else {
            return Ok(ActionOutcome::Cancelled);
        };
        match self.api.reject(id, &request).await {
            Ok(_) => {
                self.sync().refresh().await;
                Ok(ActionOutcome::Applied)
            }
            Err(e) => Err(self.alert("reject", e)),
        }
    }

    /// Approve with operator-entered notes
    pub async fn approve_with_dialog(
        &self,
        id: Uuid,
        dialog: &dyn InputDialog,
    ) -> ClientResult<ActionOutcome> {
        match dialog.input("Enter approval notes (optional):", None) {
            Some(notes) => self.approve(id, Some(notes)).await,
            None => Ok(ActionOutcome::Cancelled),
        }
    }

    /// Reject with an operator-entered reason; cancel aborts
    pub async fn reject_with_dialog(
        &self,
        id: Uuid,
        dialog: &dyn InputDialog,
    ) -> ClientResult<ActionOutcome> {
        match dialog.input("Enter rejection reason (required):", None) {
            Some(reason) => self.reject(id, &reason).await,
            None => Ok(ActionOutcome::Cancelled),
        }
    }

    fn alert(&self, action: &'static str, error: crate::ClientError) -> crate::ClientError {
        tracing::error!(action, error = %error, "approval action failed");
        let _ = self.sync().event_sender().send(UiEvent::ActionFailed {
            action,
            message: error.to_string(),
        });
        error
    }
}

impl<A: FollowUpApi> FollowUpQueue<A> {
    /// Mark one follow-up completed
    pub async fn complete(&self, id: Uuid, notes: Option<String>) -> ClientResult<ActionOutcome> {
        let request = CompleteRequest::new(notes);
        match self.api.complete(id, &request).await {
            Ok(_) => {
                self.sync().refresh().await;
                Ok(ActionOutcome::Applied)
            }
            Err(e) => Err(self.alert("complete", e)),
        }
    }

    /// Defer one follow-up by `hours` from now; zero hours aborts
    pub async fn snooze(&self, id: Uuid, hours: u32) -> ClientResult<ActionOutcome> {
        let Some(request) = SnoozeRequest::from_hours(Utc::now(), hours) else {
            return Ok(ActionOutcome::Cancelled);
        };
        match self.api.snooze(id, &request).await {
            Ok(_) => {
                self.sync().refresh().await;
                Ok(ActionOutcome::Applied)
            }
            Err(e) => Err(self.alert("snooze", e)),
        }
    }

    /// Complete with operator-entered notes
    pub async fn complete_with_dialog(
        &self,
        id: Uuid,
        dialog: &dyn InputDialog,
    ) -> ClientResult<ActionOutcome> {
        match dialog.input("Enter completion notes (optional):", None) {
            Some(notes) => self.complete(id, Some(notes)).await,
            None => Ok(ActionOutcome::Cancelled),
        }
    }

    /// Snooze with operator-entered hours; cancel, empty, and
    /// non-numeric input all abort before any request
    pub async fn snooze_with_dialog(
        &self,
        id: Uuid,
        dialog: &dyn InputDialog,
    ) -> ClientResult<ActionOutcome> {
        let default = DEFAULT_SNOOZE_HOURS.to_string();
        let Some(input) = dialog.input("Snooze for how many hours?", Some(&default)) else {
            return Ok(ActionOutcome::Cancelled);
        };
        match parse_snooze_hours(&input) {
            Some(hours) => self.snooze(id, hours).await,
            None => Ok(ActionOutcome::Cancelled),
        }
    }

    fn alert(&self, action: &'static str, error: crate::ClientError) -> crate::ClientError {
        tracing::error!(action, error = %error, "follow-up action failed");
        let _ = self.sync().event_sender().send(UiEvent::ActionFailed {
            action,
            message: error.to_string(),
        });
        error
    }
}
