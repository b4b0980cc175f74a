//! Reducers for the client state slices.

pub mod auth;
pub mod recipes;

pub use auth::AuthReducer;
pub use recipes::RecipeReducer;
