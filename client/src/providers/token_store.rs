//! Token store collaborator trait.

use crate::state::SessionToken;

/// Session token store.
///
/// The process-wide analog of browser local storage: synchronous, shared,
/// and persistent across restarts. It is written exactly once per
/// successful authentication and read by whatever attaches the token to
/// authenticated requests; authentication failures never write.
pub trait TokenStore: Send + Sync {
    /// Persist the session token, replacing any previous value.
    fn set(&self, token: &SessionToken);

    /// Read the persisted token, if any.
    fn get(&self) -> Option<SessionToken>;
}
