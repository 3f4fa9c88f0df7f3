//! Events surfaced to the presentation layer
//!
//! The rendering layer subscribes to these to show banners and modal
//! alerts; nothing here blocks the refresh loop.

/// Event emitted by the synchronizer and the mutating actions
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A refresh cycle applied fresh data for a view
    Refreshed { view: &'static str },

    /// A read failed; the view keeps its last successful snapshot
    /// and self-heals on the next cycle
    RefreshFailed { view: &'static str, error: String },

    /// A mutating action failed; rendered as a modal alert, local
    /// state untouched
    ActionFailed { action: &'static str, message: String },
}
