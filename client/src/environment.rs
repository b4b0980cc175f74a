//! Client environment.
//!
//! This module defines the environment type for dependency injection in
//! the client reducers. Everything the flows touch beyond their own state
//! - the HTTP API, the token store, the notifier, the router - is an
//! injected collaborator, never an ambient global.

use crate::providers::{Navigator, Notifier, RecipeApi, TokenStore};

/// Client environment.
///
/// Contains all external collaborators needed by the auth and
/// recipe-listing reducers.
///
/// # Type Parameters
///
/// - `A`: Recipe API collaborator
/// - `T`: Token store
/// - `N`: Notifier
/// - `V`: Navigator
#[derive(Clone)]
pub struct ClientEnvironment<A, T, N, V>
where
    A: RecipeApi + Clone,
    T: TokenStore + Clone,
    N: Notifier + Clone,
    V: Navigator + Clone,
{
    /// Recipe API collaborator.
    pub api: A,

    /// Session token store (written only on successful authentication).
    pub tokens: T,

    /// Transient notice display.
    pub notifier: N,

    /// View-transition requests.
    pub navigator: V,
}

impl<A, T, N, V> ClientEnvironment<A, T, N, V>
where
    A: RecipeApi + Clone,
    T: TokenStore + Clone,
    N: Notifier + Clone,
    V: Navigator + Clone,
{
    /// Create a new client environment.
    #[must_use]
    pub const fn new(api: A, tokens: T, notifier: N, navigator: V) -> Self {
        Self {
            api,
            tokens,
            notifier,
            navigator,
        }
    }
}
