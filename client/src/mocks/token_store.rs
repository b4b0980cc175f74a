//! Mock token store for testing.

use crate::providers::token_store::TokenStore;
use crate::state::SessionToken;
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory token store recording every write.
#[derive(Clone, Debug, Default)]
pub struct MockTokenStore {
    token: Arc<Mutex<Option<SessionToken>>>,
    writes: Arc<Mutex<Vec<SessionToken>>>,
}

impl MockTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every token that was written, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<SessionToken> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TokenStore for MockTokenStore {
    fn set(&self, token: &SessionToken) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(token.clone());
    }

    fn get(&self) -> Option<SessionToken> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
