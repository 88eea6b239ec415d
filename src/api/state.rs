//! Application state for the API server.

use std::sync::Arc;

use crate::db::TodoStore;

/// Shared application state.
///
/// Generic over `S: TodoStore` so any store implementation can back the
/// handlers. The concrete store is injected via the constructor at startup,
/// never resolved globally.
pub struct AppState<S: TodoStore> {
    store: Arc<S>,
}

// Manual Clone impl - we only need the Arc to be cloneable, not S.
impl<S: TodoStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: TodoStore> AppState<S> {
    /// Create a new AppState around the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
