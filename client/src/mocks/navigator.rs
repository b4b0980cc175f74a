//! Mock navigator for testing.

use crate::providers::navigator::{Navigator, View};
use std::sync::{Arc, Mutex, PoisonError};

/// Navigator recording every requested transition in order.
#[derive(Clone, Debug, Default)]
pub struct MockNavigator {
    visits: Arc<Mutex<Vec<View>>>,
}

impl MockNavigator {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every requested transition so far, in order.
    #[must_use]
    pub fn visits(&self) -> Vec<View> {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for MockNavigator {
    fn go_to(&self, view: View) {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(view);
    }
}
