//! Recipe API collaborator trait.

use crate::error::FailureDetail;
use crate::state::{RecipeId, RecipeSummary, SessionToken, SigninCredentials, SignupCredentials, User, UserId};
use serde::Deserialize;
use std::future::Future;

/// Payload of a successful authentication response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthSuccess {
    /// Opaque session token to persist and forward.
    pub token: SessionToken,

    /// The authenticated user record.
    pub user: User,
}

/// One page of the recipe listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipePage {
    /// Recipes of this page, in server order.
    #[serde(rename = "data")]
    pub items: Vec<RecipeSummary>,

    /// Total number of pages.
    pub pages: u32,
}

/// Recipe API collaborator.
///
/// This trait abstracts over the remote HTTP API. Implementations must
/// never panic on a failure: every fault, including transport errors and
/// unusable response bodies, is reported as a [`FailureDetail`].
pub trait RecipeApi: Send + Sync {
    /// Create an account.
    ///
    /// `POST /api/v1/users/signup` with the credentials as the exact body.
    ///
    /// # Errors
    ///
    /// Returns the failure the server or transport reported.
    fn signup(
        &self,
        credentials: &SignupCredentials,
    ) -> impl Future<Output = Result<AuthSuccess, FailureDetail>> + Send;

    /// Sign in.
    ///
    /// `POST /api/v1/users/signin` with the credentials as the exact body;
    /// only email and password are transmitted.
    ///
    /// # Errors
    ///
    /// Returns the failure the server or transport reported.
    fn signin(
        &self,
        credentials: &SigninCredentials,
    ) -> impl Future<Output = Result<AuthSuccess, FailureDetail>> + Send;

    /// Fetch one page of the recipe listing.
    ///
    /// `GET /api/v1/recipes?page=N`.
    ///
    /// # Errors
    ///
    /// Returns the failure the server or transport reported.
    fn recipes_page(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<RecipePage, FailureDetail>> + Send;

    /// Associate a recipe with the user's favourites.
    ///
    /// `POST /api/v1/users/{user_id}/recipes` with body `{"recipeId": ...}`
    /// and the stored token attached as the authenticated-request headers.
    /// Idempotent on the server side for a given `(user_id, recipe_id)`
    /// pair; the client does not deduplicate.
    ///
    /// # Errors
    ///
    /// Returns the failure the server or transport reported.
    fn add_favorite(
        &self,
        user_id: &UserId,
        recipe_id: &RecipeId,
        token: Option<&SessionToken>,
    ) -> impl Future<Output = Result<(), FailureDetail>> + Send;
}
