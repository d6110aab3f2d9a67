//! Session-scoped access to the timer store

use tracing::info;

use crate::error::StoreError;
use super::TimerStore;

/// Slot that owns the store for the lifetime of a session
///
/// Consumers reach the store through [`TimersContext::store`], which fails with
/// [`StoreError::UninitializedContext`] until a store has been provided.
#[derive(Debug, Default)]
pub struct TimersContext {
    store: Option<TimerStore>,
}

impl TimersContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Create a context that already holds `store`
    pub fn with_store(store: TimerStore) -> Self {
        Self { store: Some(store) }
    }

    /// Install the session store, replacing any previous one
    pub fn provide(&mut self, store: TimerStore) {
        info!("Timer store provided to context");
        self.store = Some(store);
    }

    pub fn store(&self) -> Result<&TimerStore, StoreError> {
        self.store.as_ref().ok_or(StoreError::UninitializedContext)
    }

    /// End the session, handing back the store if there was one
    pub fn teardown(&mut self) -> Option<TimerStore> {
        self.store.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Timer;

    #[test]
    fn test_empty_context_is_uninitialized() {
        let context = TimersContext::new();
        assert_eq!(context.store().err(), Some(StoreError::UninitializedContext));
    }

    #[test]
    fn test_provided_store_is_reachable() {
        let mut context = TimersContext::new();
        context.provide(TimerStore::new());

        let store = context.store().unwrap();
        assert!(store.is_running());
        assert!(store.timers().is_empty());
    }

    #[test]
    fn test_teardown_discards_the_store() {
        let mut context = TimersContext::with_store(TimerStore::new());
        context.store().unwrap().add_timer(Timer::new("Tea", 1.0));

        let store = context.teardown().unwrap();
        assert_eq!(store.timers().len(), 1);
        assert_eq!(context.store().err(), Some(StoreError::UninitializedContext));
        assert!(context.teardown().is_none());
    }
}
