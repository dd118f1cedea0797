use std::sync::Arc;

use tasklist_domain::TaskStore;

// =============================================================================
// AppState
// =============================================================================

/// Shared application state injected into every handler.
///
/// The store is constructed once at process start and passed by handle, so
/// the lifetime of the shared task sequence and its lock is explicit.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<TaskStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    #[must_use]
    pub fn from_arc(store: Arc<TaskStore>) -> Self {
        Self { store }
    }
}

// =============================================================================
// Tests
// =============================================================================
