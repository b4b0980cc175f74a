//! Mock notifier for testing.

use crate::providers::notifier::{NoticeTone, Notifier};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// One recorded notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotice {
    /// Displayed text.
    pub text: String,

    /// Requested display duration.
    pub duration: Duration,

    /// Requested tone.
    pub tone: NoticeTone,
}

/// Notifier recording every notice in display order.
#[derive(Clone, Debug, Default)]
pub struct MockNotifier {
    notices: Arc<Mutex<Vec<RecordedNotice>>>,
}

impl MockNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notice shown so far, in order.
    #[must_use]
    pub fn notices(&self) -> Vec<RecordedNotice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Just the notice texts, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.text).collect()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, text: &str, duration: Duration, tone: NoticeTone) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedNotice {
                text: text.to_owned(),
                duration,
                tone,
            });
    }
}
