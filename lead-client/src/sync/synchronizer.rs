//! Synchronizer core
//!
//! Owns one view's refresh cycle: an aggregate-stats read and a
//! filtered-collection read, issued together on mount, on filter
//! change, every [`REFRESH_INTERVAL`](super::REFRESH_INTERVAL) tick,
//! and immediately after a successful mutation. Local state is a
//! possibly-stale mirror of server state, replaced atomically per
//! half-cycle.
//!
//! Every cycle carries a sequence number and the filter generation it
//! was issued under; a response is discarded when a newer cycle has
//! already applied or the filter changed while it was in flight, so
//! overlapping cycles can never overwrite newer state with older.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::{RwLock, broadcast};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{ClientError, ClientResult, UiEvent};

/// One view's two reads, keyed by the active filter
#[async_trait]
pub trait ViewSource: Send + Sync + 'static {
    type Stats: Clone + Send + Sync + 'static;
    type Item: Clone + Send + Sync + 'static;
    type Filter: Clone + Default + Send + Sync + 'static;

    /// View name for logging and UI events
    fn name(&self) -> &'static str;

    /// Aggregate-stats read
    async fn fetch_stats(&self) -> ClientResult<Self::Stats>;

    /// Filtered-collection read
    async fn fetch_items(&self, filter: &Self::Filter) -> ClientResult<Vec<Self::Item>>;
}

/// Snapshot of a view's synchronized state
#[derive(Debug, Clone)]
pub struct ViewState<Stats, Item> {
    /// Latest aggregate snapshot; None until the first successful read
    pub stats: Option<Stats>,
    pub items: Vec<Item>,
    /// True until the first cycle completes (success or failure)
    pub loading: bool,
    pub last_refresh: Option<DateTime<Utc>>,
}

impl<Stats, Item> Default for ViewState<Stats, Item> {
    fn default() -> Self {
        Self {
            stats: None,
            items: Vec::new(),
            loading: true,
            last_refresh: None,
        }
    }
}

struct SyncShared<S: ViewSource> {
    source: S,
    state: RwLock<ViewState<S::Stats, S::Item>>,
    filter: RwLock<S::Filter>,
    /// Bumped on every filter change; in-flight cycles issued under
    /// an older generation are dropped on arrival
    filter_gen: AtomicU64,
    /// Next cycle sequence number
    cycle_seq: AtomicU64,
    /// Highest cycle whose stats half has been applied
    applied_stats: AtomicU64,
    /// Highest cycle whose items half has been applied
    applied_items: AtomicU64,
    started: AtomicBool,
    events: broadcast::Sender<UiEvent>,
    shutdown: CancellationToken,
}

/// Keeps one view's displayed collection and aggregate stats
/// consistent with the backend within a bounded staleness window
pub struct Synchronizer<S: ViewSource> {
    inner: Arc<SyncShared<S>>,
}

impl<S: ViewSource> Clone for Synchronizer<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: ViewSource> Synchronizer<S> {
    pub fn new(source: S) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            inner: Arc::new(SyncShared {
                source,
                state: RwLock::new(ViewState::default()),
                filter: RwLock::new(S::Filter::default()),
                filter_gen: AtomicU64::new(0),
                cycle_seq: AtomicU64::new(0),
                applied_stats: AtomicU64::new(0),
                applied_items: AtomicU64::new(0),
                started: AtomicBool::new(false),
                events,
                shutdown: CancellationToken::new(),
            }),
        }
    }

    /// View name, as reported in events and logs
    pub fn view_name(&self) -> &'static str {
        self.inner.source.name()
    }

    /// Subscribe to refresh/action events for banners and alerts
    pub fn subscribe_events(&self) -> broadcast::Receiver<UiEvent> {
        self.inner.events.subscribe()
    }

    pub(crate) fn event_sender(&self) -> broadcast::Sender<UiEvent> {
        self.inner.events.clone()
    }

    /// Token that fires when the view unmounts
    pub fn shutdown_token(&self) -> CancellationToken {
        self.inner.shutdown.clone()
    }

    /// Current state snapshot
    pub async fn state(&self) -> ViewState<S::Stats, S::Item> {
        self.inner.state.read().await.clone()
    }

    /// Current filter
    pub async fn filter(&self) -> S::Filter {
        self.inner.filter.read().await.clone()
    }

    /// Start the periodic refresh loop for this view
    ///
    /// The first cycle runs immediately. Exactly one timer may be
    /// live per view; a second call is refused. The loop stops when
    /// [`Self::shutdown`] is called, with no pending-callback leak.
    pub fn spawn(&self, interval: std::time::Duration) -> Option<JoinHandle<()>> {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            tracing::warn!(view = self.view_name(), "refresh loop already running");
            return None;
        }

        let sync = self.clone();
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = sync.inner.shutdown.cancelled() => break,
                    _ = ticker.tick() => sync.refresh().await,
                }
            }
            tracing::debug!(view = sync.view_name(), "refresh loop stopped");
        }))
    }

    /// Stop the refresh loop; in-flight requests resolve into the
    /// sequence guard and are dropped if stale
    pub fn shutdown(&self) {
        self.inner.shutdown.cancel();
    }

    /// Replace the active filter and run one new cycle with it
    pub async fn set_filter(&self, filter: S::Filter) {
        {
            let mut current = self.inner.filter.write().await;
            *current = filter;
        }
        self.inner.filter_gen.fetch_add(1, Ordering::SeqCst);
        self.refresh().await;
    }

    /// Run one refresh cycle now, out of band of the periodic timer
    ///
    /// Both reads are issued concurrently and applied independently;
    /// a failure in one never rolls back the other. Failures are
    /// logged and surfaced as events; the previous snapshot stays.
    pub async fn refresh(&self) {
        let seq = self.inner.cycle_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let filter = self.inner.filter.read().await.clone();
        let generation = self.inner.filter_gen.load(Ordering::SeqCst);

        tracing::debug!(view = self.view_name(), seq, "refresh cycle");

        let (stats, items) = tokio::join!(
            self.inner.source.fetch_stats(),
            self.inner.source.fetch_items(&filter),
        );

        let mut applied = false;
        applied |= self.apply_stats(seq, generation, stats).await;
        applied |= self.apply_items(seq, generation, items).await;

        {
            let mut state = self.inner.state.write().await;
            state.loading = false;
        }

        if applied {
            let _ = self.inner.events.send(UiEvent::Refreshed {
                view: self.view_name(),
            });
        }
    }

    async fn apply_stats(&self, seq: u64, generation: u64, result: ClientResult<S::Stats>) -> bool {
        let stats = match result {
            Ok(stats) => stats,
            Err(e) => {
                self.report_failure("stats", e);
                return false;
            }
        };

        let mut state = self.inner.state.write().await;
        if !self.still_current(seq, generation, &self.inner.applied_stats) {
            tracing::debug!(view = self.view_name(), seq, "dropping stale stats response");
            return false;
        }
        state.stats = Some(stats);
        state.last_refresh = Some(Utc::now());
        true
    }

    async fn apply_items(&self, seq: u64, generation: u64, result: ClientResult<Vec<S::Item>>) -> bool {
        let items = match result {
            Ok(items) => items,
            Err(e) => {
                self.report_failure("items", e);
                return false;
            }
        };

        let mut state = self.inner.state.write().await;
        if !self.still_current(seq, generation, &self.inner.applied_items) {
            tracing::debug!(view = self.view_name(), seq, "dropping stale items response");
            return false;
        }
        state.items = items;
        state.last_refresh = Some(Utc::now());
        true
    }

    /// Must hold the state write lock: the generation check and the
    /// applied-sequence advance have to be atomic with the write
    fn still_current(&self, seq: u64, generation: u64, applied: &AtomicU64) -> bool {
        if self.inner.filter_gen.load(Ordering::SeqCst) != generation {
            return false;
        }
        applied.fetch_max(seq, Ordering::SeqCst) < seq
    }

    fn report_failure(&self, half: &'static str, error: ClientError) {
        tracing::error!(view = self.view_name(), half, error = %error, "refresh read failed");
        let _ = self.inner.events.send(UiEvent::RefreshFailed {
            view: self.view_name(),
            error: error.to_string(),
        });
    }
}
