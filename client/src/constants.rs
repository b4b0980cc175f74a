//! Client constants.
//!
//! This module contains constant values used throughout the client:
//! API endpoint paths and the user-facing notice texts and durations.

use std::time::Duration;

/// API endpoint paths.
pub mod endpoints {
    /// Account creation endpoint.
    pub const SIGNUP: &str = "/api/v1/users/signup";

    /// Sign-in endpoint.
    pub const SIGNIN: &str = "/api/v1/users/signin";

    /// Paged recipe listing endpoint.
    pub const RECIPES: &str = "/api/v1/recipes";
}

/// User-facing notice texts.
pub mod notices {
    /// Shown after a successful signup.
    pub const SIGNUP_SUCCESS: &str = "Account created successfully";

    /// Shown after a successful sign-in.
    pub const SIGNIN_SUCCESS: &str = "Signed in successfully";

    /// Generic retry notice for unclassified signup failures.
    pub const SIGNUP_RETRY: &str = "Error signing up, please try again later";

    /// Generic retry notice for unclassified sign-in failures.
    pub const SIGNIN_RETRY: &str = "Error signing in, please try again later";

    /// Shown after a recipe is added to the favourite list.
    pub const FAVORITE_SAVED: &str = "Added to favourite list";
}

/// How long authentication notices stay on screen.
pub const AUTH_NOTICE_DURATION: Duration = Duration::from_secs(5);

/// How long local validation messages stay on screen.
pub const VALIDATION_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// How long the favourite confirmation stays on screen.
pub const FAVORITE_NOTICE_DURATION: Duration = Duration::from_secs(3);
