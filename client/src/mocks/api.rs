//! Mock recipe API for testing.

use crate::error::FailureDetail;
use crate::providers::api::{AuthSuccess, RecipeApi, RecipePage};
use crate::state::{RecipeId, SessionToken, SigninCredentials, SignupCredentials, UserId};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Scripted outcome for one intercepted request.
#[derive(Debug, Clone)]
pub struct Scripted<T> {
    /// How long the mock waits before resolving.
    pub delay: Duration,

    /// The outcome to resolve with.
    pub result: Result<T, FailureDetail>,
}

impl<T> Scripted<T> {
    /// An outcome resolved without delay.
    #[must_use]
    pub const fn ready(result: Result<T, FailureDetail>) -> Self {
        Self {
            delay: Duration::ZERO,
            result,
        }
    }

    /// An outcome resolved after the given delay.
    ///
    /// Delays order concurrent completions deterministically, which is how
    /// tests drive the out-of-order response scenarios.
    #[must_use]
    pub const fn delayed(delay: Duration, result: Result<T, FailureDetail>) -> Self {
        Self { delay, result }
    }
}

/// Record of one request the mock served, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// A signup request.
    Signup {
        /// Email the request carried.
        email: String,
    },

    /// A sign-in request.
    Signin {
        /// Email the request carried.
        email: String,
    },

    /// A listing-page request.
    RecipesPage {
        /// Requested page number.
        page: u32,
    },

    /// A favourite-toggle request.
    AddFavorite {
        /// User the recipe is favourited for.
        user_id: UserId,
        /// Favourited recipe.
        recipe_id: RecipeId,
        /// Token attached to the request, if any.
        token: Option<SessionToken>,
    },
}

/// Mock recipe API serving scripted responses.
///
/// Signup and sign-in responses are consumed from queues in script order.
/// Page responses are keyed by page number so concurrent fetches resolve
/// deterministically. Favourite requests share one persistent outcome
/// (success by default), matching the server-side idempotence of the
/// operation.
#[derive(Clone, Debug, Default)]
pub struct MockRecipeApi {
    signup_responses: Arc<Mutex<VecDeque<Scripted<AuthSuccess>>>>,
    signin_responses: Arc<Mutex<VecDeque<Scripted<AuthSuccess>>>>,
    page_responses: Arc<Mutex<HashMap<u32, Scripted<RecipePage>>>>,
    favorite_response: Arc<Mutex<Option<Scripted<()>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockRecipeApi {
    /// Create a new mock with nothing scripted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next unscripted signup request.
    pub fn script_signup(&self, scripted: Scripted<AuthSuccess>) {
        lock(&self.signup_responses).push_back(scripted);
    }

    /// Queue the outcome of the next unscripted sign-in request.
    pub fn script_signin(&self, scripted: Scripted<AuthSuccess>) {
        lock(&self.signin_responses).push_back(scripted);
    }

    /// Script the outcome of fetches for the given page (persistent).
    pub fn script_page(&self, page: u32, scripted: Scripted<RecipePage>) {
        lock(&self.page_responses).insert(page, scripted);
    }

    /// Script the outcome of favourite requests (persistent; defaults to
    /// immediate success when nothing is scripted).
    pub fn script_favorite(&self, scripted: Scripted<()>) {
        *lock(&self.favorite_response) = Some(scripted);
    }

    /// The requests served so far, in arrival order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: RecordedCall) {
        lock(&self.calls).push(call);
    }

    async fn resolve<T>(scripted: Scripted<T>) -> Result<T, FailureDetail> {
        if scripted.delay > Duration::ZERO {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.result
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The failure a request gets when nothing was scripted for it.
fn unscripted(what: &str) -> FailureDetail {
    FailureDetail::transport(format!("no scripted response for {what}"))
}

impl RecipeApi for MockRecipeApi {
    async fn signup(
        &self,
        credentials: &SignupCredentials,
    ) -> Result<AuthSuccess, FailureDetail> {
        self.record(RecordedCall::Signup {
            email: credentials.email.clone(),
        });

        let scripted = lock(&self.signup_responses).pop_front();
        match scripted {
            Some(scripted) => Self::resolve(scripted).await,
            None => Err(unscripted("signup")),
        }
    }

    async fn signin(
        &self,
        credentials: &SigninCredentials,
    ) -> Result<AuthSuccess, FailureDetail> {
        self.record(RecordedCall::Signin {
            email: credentials.email.clone(),
        });

        let scripted = lock(&self.signin_responses).pop_front();
        match scripted {
            Some(scripted) => Self::resolve(scripted).await,
            None => Err(unscripted("signin")),
        }
    }

    async fn recipes_page(&self, page: u32) -> Result<RecipePage, FailureDetail> {
        self.record(RecordedCall::RecipesPage { page });

        let scripted = lock(&self.page_responses).get(&page).cloned();
        match scripted {
            Some(scripted) => Self::resolve(scripted).await,
            None => Err(unscripted("page")),
        }
    }

    async fn add_favorite(
        &self,
        user_id: &UserId,
        recipe_id: &RecipeId,
        token: Option<&SessionToken>,
    ) -> Result<(), FailureDetail> {
        self.record(RecordedCall::AddFavorite {
            user_id: user_id.clone(),
            recipe_id: recipe_id.clone(),
            token: token.cloned(),
        });

        let scripted = lock(&self.favorite_response)
            .clone()
            .unwrap_or_else(|| Scripted::ready(Ok(())));
        Self::resolve(scripted).await
    }
}
