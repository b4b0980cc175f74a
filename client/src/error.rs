//! Failure types for collaborator calls and their classification.
//!
//! A [`FailureDetail`] is only ever produced from a collaborator failure
//! (an HTTP error status or a transport fault) - the client never invents
//! one locally. Local pre-network validation produces plain
//! [`FieldError`] messages and never reaches this type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One field-level message, either from local validation or from a
/// server-side validation response (HTTP 400).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field (may be empty when the server omits it).
    pub field: String,

    /// Human-readable message for that field.
    pub message: String,
}

impl FieldError {
    /// Create a new field-level message.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The message payload a failing collaborator call carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureMessage {
    /// A single human-readable message (401, 409, transport faults).
    Text(String),

    /// An ordered sequence of per-field messages (server-side validation).
    Fields(Vec<FieldError>),
}

impl std::fmt::Display for FailureMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Fields(fields) => write!(f, "{} field error(s)", fields.len()),
        }
    }
}

/// A failed collaborator call: the HTTP status (when one was received) and
/// the message payload it carried.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct FailureDetail {
    /// HTTP status code; `None` for transport faults that never produced a
    /// response.
    pub status_code: Option<u16>,

    /// Message payload.
    pub message: FailureMessage,
}

impl FailureDetail {
    /// A failure carrying a single server-provided message.
    #[must_use]
    pub fn text(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code: Some(status_code),
            message: FailureMessage::Text(message.into()),
        }
    }

    /// A failure carrying a sequence of field-level messages.
    #[must_use]
    pub const fn fields(status_code: u16, fields: Vec<FieldError>) -> Self {
        Self {
            status_code: Some(status_code),
            message: FailureMessage::Fields(fields),
        }
    }

    /// A transport-level fault (no response, or an unusable one).
    ///
    /// Transport faults carry no status code and always classify as
    /// [`FailureKind::Unknown`].
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            message: FailureMessage::Text(message.into()),
        }
    }

    /// Classify this failure per the status table.
    ///
    /// Evaluated in priority order; any shape the table does not list
    /// (including a 400 without field entries or a missing status) lands on
    /// [`FailureKind::Unknown`] rather than failing.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match (self.status_code, &self.message) {
            (Some(400), FailureMessage::Fields(fields)) if !fields.is_empty() => {
                FailureKind::FieldErrors
            },
            (Some(401), FailureMessage::Text(_)) => FailureKind::Auth,
            (Some(409), FailureMessage::Text(_)) => FailureKind::Conflict,
            _ => FailureKind::Unknown,
        }
    }
}

/// Failure categories driving how a failure is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Server-side validation: every field message is surfaced, in order.
    FieldErrors,

    /// Authentication rejection: the server message is surfaced verbatim.
    Auth,

    /// Conflict (e.g. duplicate account): the server message is surfaced
    /// verbatim.
    Conflict,

    /// Anything else: a generic retry-later notice is surfaced.
    Unknown,
}
