//! Push channel listener
//!
//! A change feed on the lead collection, used purely as an
//! invalidation hint: any event triggers the same refresh path as
//! the periodic timer, with no attempt to merge the changed record.
//! Correctness (eventual consistency) over precision.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::sync::{Synchronizer, ViewSource};

/// Kind of backend record change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// One change notification; the payload is carried but never parsed
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub payload: serde_json::Value,
}

impl ChangeEvent {
    pub fn new(kind: ChangeKind) -> Self {
        Self {
            kind,
            payload: serde_json::Value::Null,
        }
    }
}

/// Broadcast feed of lead-collection changes
///
/// The transport feeding this (websocket, server-sent events) lives
/// outside this crate; anything holding the feed can emit into it.
#[derive(Debug, Clone)]
pub struct LeadChangeFeed {
    tx: broadcast::Sender<ChangeEvent>,
}

impl LeadChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }

    /// Emit a change; returns the number of live subscribers
    pub fn emit(&self, event: ChangeEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }
}

impl Default for LeadChangeFeed {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Listens on a change feed for the lifetime of one view
pub struct PushListener;

impl PushListener {
    /// Subscribe the view to the feed
    ///
    /// Runs until the view's synchronizer shuts down or the feed
    /// closes; the subscription is released with the view. A lagged
    /// receiver just refreshes - the events carry no state anyway.
    pub fn spawn<S: ViewSource>(
        sync: Synchronizer<S>,
        mut rx: broadcast::Receiver<ChangeEvent>,
    ) -> JoinHandle<()> {
        let shutdown = sync.shutdown_token();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    result = rx.recv() => match result {
                        Ok(event) => {
                            tracing::debug!(view = sync.view_name(), kind = ?event.kind, "change event, refreshing");
                            sync.refresh().await;
                        }
                        Err(broadcast::error::RecvError::Lagged(n)) => {
                            tracing::warn!(view = sync.view_name(), lagged = n, "change feed lagged, refreshing");
                            sync.refresh().await;
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            tracing::info!(view = sync.view_name(), "change feed closed");
                            break;
                        }
                    },
                }
            }
        })
    }
}
