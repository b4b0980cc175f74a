//! File-backed token store.

use crate::providers::token_store::TokenStore;
use crate::state::SessionToken;
use std::path::PathBuf;
use std::sync::Arc;

/// Token store persisting to a single file.
///
/// The process analog of browser local storage: the token survives
/// restarts, and writes are best-effort - a failed write is logged, never
/// propagated, matching the fire-and-forget contract of the store.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: Arc<PathBuf>,
}

impl FileTokenStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn set(&self, token: &SessionToken) {
        if let Some(parent) = self.path.parent() {
            if let Err(error) = std::fs::create_dir_all(parent) {
                tracing::warn!(
                    error = %error,
                    path = %parent.display(),
                    "Failed to create token store directory"
                );
                return;
            }
        }

        if let Err(error) = std::fs::write(self.path.as_ref(), token.as_str()) {
            tracing::warn!(
                error = %error,
                path = %self.path.display(),
                "Failed to persist session token"
            );
        }
    }

    fn get(&self) -> Option<SessionToken> {
        match std::fs::read_to_string(self.path.as_ref()) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(SessionToken::new(token))
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => None,
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    path = %self.path.display(),
                    "Failed to read session token"
                );
                None
            },
        }
    }
}
