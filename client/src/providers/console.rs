//! Console collaborators for development and testing.
//!
//! These implementations log through `tracing` instead of driving a real
//! UI. Useful for demos and for wiring the flows before an embedding
//! application provides its own notifier and router.

use crate::providers::navigator::{Navigator, View};
use crate::providers::notifier::{NoticeTone, Notifier};
use std::time::Duration;

/// Notifier that logs notices instead of rendering toasts.
#[derive(Clone, Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Create a new console notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, text: &str, duration: Duration, tone: NoticeTone) {
        let duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        match tone {
            NoticeTone::Success => {
                tracing::info!(duration_ms, "🔔 {text}");
            },
            NoticeTone::Error => {
                tracing::warn!(duration_ms, "🔔 {text}");
            },
        }
    }
}

/// Navigator that logs transition requests instead of routing.
#[derive(Clone, Debug, Default)]
pub struct ConsoleNavigator;

impl ConsoleNavigator {
    /// Create a new console navigator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Navigator for ConsoleNavigator {
    fn go_to(&self, view: View) {
        tracing::info!(?view, "Navigation requested");
    }
}
