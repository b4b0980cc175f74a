//! Collaborator traits and their production implementations.
//!
//! Every external dependency of the flows is abstracted behind a trait and
//! injected through [`crate::environment::ClientEnvironment`], so the
//! reducers stay pure and testable with the mocks in [`crate::mocks`].

pub mod api;
pub mod console;
pub mod http;
pub mod navigator;
pub mod notifier;
pub mod token_file;
pub mod token_store;

pub use api::{AuthSuccess, RecipeApi, RecipePage};
pub use console::{ConsoleNavigator, ConsoleNotifier};
pub use http::HttpRecipeApi;
pub use navigator::{Navigator, View};
pub use notifier::{NoticeTone, Notifier};
pub use token_file::FileTokenStore;
pub use token_store::TokenStore;
