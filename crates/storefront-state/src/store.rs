//! State ownership with a teardown guard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::event::ViewEvent;
use crate::state::{reduce, ViewState};

/// Cancellation token tied to one view instance.
///
/// A fetch completion that fires after the view was torn down must not
/// mutate state; the store checks this token before applying any event.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Create a live token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning view as torn down.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether the owning view has been torn down.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Owns the view state for one mounted page instance.
#[derive(Debug, Default)]
pub struct ViewStore {
    state: ViewState,
    token: CancellationToken,
}

impl ViewStore {
    /// Create a store at mount: initial status, quantity one.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// A token the fetcher can hold across its suspension point.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Apply an event through the reducer. Events arriving after teardown
    /// are dropped.
    pub fn dispatch(&mut self, event: ViewEvent) {
        if self.token.is_cancelled() {
            return;
        }
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    /// Tear the view down; later events are ignored.
    pub fn teardown(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{ApiStatus, FailureKind};

    #[test]
    fn test_dispatch_runs_reducer() {
        let mut store = ViewStore::new();
        store.dispatch(ViewEvent::FetchStarted);
        assert_eq!(store.state().status, ApiStatus::InProgress);
    }

    #[test]
    fn test_late_completion_ignored_after_teardown() {
        let mut store = ViewStore::new();
        store.dispatch(ViewEvent::FetchStarted);
        store.teardown();
        store.dispatch(ViewEvent::FetchFailed(FailureKind::Network));
        // the in-flight completion fired after unmount and was dropped
        assert_eq!(store.state().status, ApiStatus::InProgress);
    }

    #[test]
    fn test_token_observes_teardown() {
        let mut store = ViewStore::new();
        let token = store.token();
        assert!(!token.is_cancelled());
        store.teardown();
        assert!(token.is_cancelled());
    }
}
