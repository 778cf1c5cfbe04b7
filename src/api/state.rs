//! Application state for the payroll service API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ErrorPolicy;
use crate::storage::PayrollStore;

/// Shared application state.
///
/// Holds the storage handle every handler issues its statement through,
/// and the policy the error middleware renders failures with.
#[derive(Clone)]
pub struct AppState {
    /// The storage-handle provider.
    store: Arc<dyn PayrollStore>,
    /// How failures map to status codes.
    error_policy: ErrorPolicy,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: Arc<dyn PayrollStore>, error_policy: ErrorPolicy) -> Self {
        Self {
            store,
            error_policy,
        }
    }

    /// Returns the store.
    pub fn store(&self) -> &dyn PayrollStore {
        self.store.as_ref()
    }

    /// Returns the error policy.
    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::new(Arc::new(MemoryStore::new()), ErrorPolicy::Classified);
        let cloned = state.clone();

        assert!(std::ptr::addr_eq(state.store(), cloned.store()));
        assert_eq!(cloned.error_policy(), ErrorPolicy::Classified);
    }
}
