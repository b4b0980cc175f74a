//! # Platewise Client
//!
//! Client-side state synchronization for the Platewise recipe platform.
//!
//! This crate mediates between user-initiated actions - sign up, sign in,
//! list recipes, mark a favourite - and the remote HTTP API, maintaining a
//! consistent local view of authentication and recipe-listing state across
//! asynchronous, possibly-failing network calls.
//!
//! ## Architecture
//!
//! The flows are implemented as reducers and effects:
//!
//! ```text
//! Action → Reducer → (State, Effects) → Effect Execution → More Actions
//! ```
//!
//! User input dispatches a command; the reducer validates it, transitions
//! the request status, and describes the network call as an effect; the
//! effect resolves to a terminal event that the reducer folds back into
//! the slice. Reducers never perform I/O and never throw: every
//! collaborator failure becomes a terminal `Failed` status plus whatever
//! the classification table says the user should see.
//!
//! ## Example: signing in
//!
//! ```rust,ignore
//! use platewise_client::*;
//! use platewise_runtime::Store;
//!
//! let env = ClientEnvironment::new(
//!     HttpRecipeApi::new(ClientConfig::default()),
//!     FileTokenStore::new("/tmp/platewise/token"),
//!     ConsoleNotifier::new(),
//!     ConsoleNavigator::new(),
//! );
//!
//! let store = Store::new(AppState::default(), AppReducer::new(), env);
//!
//! store.send(AppAction::Auth(AuthAction::SignIn {
//!     credentials: SigninCredentials {
//!         email: "ada@example.com".into(),
//!         password: "secret-pass".into(),
//!     },
//! })).await?;
//! ```

// Public modules
pub mod actions;
pub mod app;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod listing;
pub mod providers;
pub mod reducers;
pub mod state;
pub mod validate;

/// Mock collaborators, available with the `test-utils` feature (default).
#[cfg(feature = "test-utils")]
pub mod mocks;

// Re-export main types for convenience
pub use actions::{AuthAction, RecipeAction};
pub use app::{AppAction, AppReducer, AppState};
pub use config::ClientConfig;
pub use environment::ClientEnvironment;
pub use error::{FailureDetail, FailureKind, FailureMessage, FieldError};
pub use providers::{
    AuthSuccess, ConsoleNavigator, ConsoleNotifier, FileTokenStore, HttpRecipeApi, Navigator,
    NoticeTone, Notifier, RecipeApi, RecipePage, TokenStore, View,
};
pub use reducers::{AuthReducer, RecipeReducer};
pub use state::{
    AuthState, RecipeId, RecipeListState, RecipeSummary, RequestStatus, Session, SessionToken,
    SigninCredentials, SignupCredentials, User, UserId,
};
