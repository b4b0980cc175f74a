//! Actions for the authentication and recipe-listing slices.
//!
//! Each enum combines commands (user intent, dispatched by the
//! presentation layer) and events (what a collaborator call produced,
//! dispatched by effects). Commands validate and transition to `InFlight`;
//! events apply the terminal transition.

use crate::error::FailureDetail;
use crate::state::{
    RecipeId, RecipeSummary, SessionToken, SigninCredentials, SignupCredentials, User, UserId,
};

/// Actions processed by the authentication reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    // ========== Commands ==========
    /// Command: create an account with the given form values.
    SignUp {
        /// Signup form values.
        credentials: SignupCredentials,
    },

    /// Command: sign in with the given form values.
    SignIn {
        /// Sign-in form values.
        credentials: SigninCredentials,
    },

    // ========== Events ==========
    /// Event: the signup request succeeded.
    SignUpSucceeded {
        /// Session token returned by the server.
        token: SessionToken,
        /// Authenticated user returned by the server.
        user: User,
    },

    /// Event: the signup request failed.
    SignUpFailed {
        /// What the collaborator reported.
        failure: FailureDetail,
    },

    /// Event: the sign-in request succeeded.
    SignInSucceeded {
        /// Session token returned by the server.
        token: SessionToken,
        /// Authenticated user returned by the server.
        user: User,
    },

    /// Event: the sign-in request failed.
    SignInFailed {
        /// What the collaborator reported.
        failure: FailureDetail,
    },
}

impl AuthAction {
    /// Whether this action is a command (user intent).
    #[must_use]
    pub const fn is_command(&self) -> bool {
        matches!(self, Self::SignUp { .. } | Self::SignIn { .. })
    }

    /// Whether this action is an event (collaborator outcome).
    #[must_use]
    pub const fn is_event(&self) -> bool {
        !self.is_command()
    }
}

/// Actions processed by the recipe-listing reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeAction {
    // ========== Commands ==========
    /// Command: fetch one page of the listing.
    FetchPage {
        /// Page number to fetch (>= 1; lower values are clamped).
        page: u32,
    },

    /// Command: associate a recipe with the authenticated user's
    /// favourites.
    ToggleFavorite {
        /// Recipe to favourite.
        recipe_id: RecipeId,
        /// Authenticated user performing the action.
        user_id: UserId,
    },

    // ========== Events ==========
    /// Event: a page fetch succeeded.
    PageLoaded {
        /// Page this response belongs to.
        page: u32,
        /// Recipes of that page, in server order.
        items: Vec<RecipeSummary>,
        /// Total pages reported alongside the items.
        total_pages: u32,
    },

    /// Event: a page fetch failed.
    PageLoadFailed {
        /// What the collaborator reported.
        failure: FailureDetail,
    },

    /// Event: a favourite-toggle request succeeded.
    FavoriteSaved {
        /// Recipe that was favourited.
        recipe_id: RecipeId,
    },

    /// Event: a favourite-toggle request failed.
    FavoriteFailed {
        /// Recipe the request was for.
        recipe_id: RecipeId,
        /// What the collaborator reported.
        failure: FailureDetail,
    },
}

impl RecipeAction {
    /// Whether this action is a command (user intent).
    #[must_use]
    pub const fn is_command(&self) -> bool {
        matches!(self, Self::FetchPage { .. } | Self::ToggleFavorite { .. })
    }

    /// Whether this action is an event (collaborator outcome).
    #[must_use]
    pub const fn is_event(&self) -> bool {
        !self.is_command()
    }
}
