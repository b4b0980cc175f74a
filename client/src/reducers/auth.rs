//! Authentication reducer.
//!
//! Orchestrates signup and sign-in against the remote API. Both modes run
//! the same protocol, differing only in payload and endpoint:
//!
//! 1. Validate the credentials locally. On any violation, surface the
//!    messages and stop - no status transition, no network contact.
//! 2. Mark the operation `InFlight` and reset the session, then issue the
//!    request as a single effect resolving to the terminal event.
//! 3. On success: mark `Succeeded`, install the session, persist the token,
//!    show the success notice, request navigation to the profile view.
//! 4. On failure: mark `Failed`, leave the session unauthenticated, never
//!    write a token, and surface the failure per its classification.
//!
//! Because step 1 short-circuits before step 2, an `InFlight` status is
//! only ever observed for a request that was actually sent, and it is
//! always observed before that request's terminal event.

use crate::actions::AuthAction;
use crate::constants::{
    AUTH_NOTICE_DURATION, VALIDATION_NOTICE_DURATION, notices,
};
use crate::environment::ClientEnvironment;
use crate::error::{FailureDetail, FailureKind, FailureMessage, FieldError};
use crate::providers::{Navigator, NoticeTone, Notifier, RecipeApi, TokenStore, View};
use crate::state::{AuthState, RequestStatus, Session, SessionToken};
use crate::validate;
use platewise_core::effect::Effect;
use platewise_core::reducer::Reducer;
use platewise_core::{SmallVec, smallvec};

/// Authentication reducer.
///
/// Generic over the collaborator implementations carried by the
/// environment.
#[derive(Debug, Clone)]
pub struct AuthReducer<A, T, N, V> {
    /// Phantom data to hold type parameters.
    _phantom: std::marker::PhantomData<(A, T, N, V)>,
}

impl<A, T, N, V> AuthReducer<A, T, N, V> {
    /// Create a new authentication reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, T, N, V> Default for AuthReducer<A, T, N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, N, V> AuthReducer<A, T, N, V>
where
    A: RecipeApi + Clone + 'static,
    T: TokenStore + Clone + 'static,
    N: Notifier + Clone + 'static,
    V: Navigator + Clone + 'static,
{
    /// Surface local validation messages, one notice per violation, in
    /// field order.
    fn validation_notices(
        env: &ClientEnvironment<A, T, N, V>,
        messages: Vec<FieldError>,
    ) -> Effect<AuthAction> {
        let notifier = env.notifier.clone();
        Effect::Future(Box::pin(async move {
            for message in &messages {
                notifier.notify(&message.message, VALIDATION_NOTICE_DURATION, NoticeTone::Error);
            }
            None
        }))
    }

    /// Post-success side effects: persist the token, confirm, navigate.
    fn authenticated(
        env: &ClientEnvironment<A, T, N, V>,
        token: SessionToken,
        notice: &'static str,
    ) -> Effect<AuthAction> {
        let tokens = env.tokens.clone();
        let notifier = env.notifier.clone();
        let navigator = env.navigator.clone();
        Effect::Future(Box::pin(async move {
            tokens.set(&token);
            notifier.notify(notice, AUTH_NOTICE_DURATION, NoticeTone::Success);
            navigator.go_to(View::Profile);
            None
        }))
    }

    /// Surface a server or transport failure per its classification:
    /// every field message for 400, the server string for 401/409, the
    /// generic retry notice for everything else.
    fn failure_notices(
        env: &ClientEnvironment<A, T, N, V>,
        failure: FailureDetail,
        retry_notice: &'static str,
    ) -> Effect<AuthAction> {
        let notifier = env.notifier.clone();
        Effect::Future(Box::pin(async move {
            match (failure.kind(), &failure.message) {
                (FailureKind::FieldErrors, FailureMessage::Fields(entries)) => {
                    for entry in entries {
                        notifier.notify(&entry.message, AUTH_NOTICE_DURATION, NoticeTone::Error);
                    }
                },
                (FailureKind::Auth | FailureKind::Conflict, FailureMessage::Text(text)) => {
                    notifier.notify(text, AUTH_NOTICE_DURATION, NoticeTone::Error);
                },
                _ => {
                    notifier.notify(retry_notice, AUTH_NOTICE_DURATION, NoticeTone::Error);
                },
            }
            None
        }))
    }
}

impl<A, T, N, V> Reducer for AuthReducer<A, T, N, V>
where
    A: RecipeApi + Clone + 'static,
    T: TokenStore + Clone + 'static,
    N: Notifier + Clone + 'static,
    V: Navigator + Clone + 'static,
{
    type State = AuthState;
    type Action = AuthAction;
    type Environment = ClientEnvironment<A, T, N, V>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════
            // SignUp: validate, go in flight, issue the request
            // ═══════════════════════════════════════════════════════════
            AuthAction::SignUp { credentials } => {
                let messages = validate::validate_signup(&credentials);
                if !messages.is_empty() {
                    // Local pre-check failed: the request is never sent and
                    // the status machine is not touched.
                    return smallvec![Self::validation_notices(env, messages)];
                }

                state.signup = RequestStatus::InFlight;
                state.session = Session::default();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.signup(&credentials).await {
                        Ok(success) => AuthAction::SignUpSucceeded {
                            token: success.token,
                            user: success.user,
                        },
                        Err(failure) => AuthAction::SignUpFailed { failure },
                    })
                }))]
            },

            // ═══════════════════════════════════════════════════════════
            // SignIn: same protocol, sign-in payload and endpoint
            // ═══════════════════════════════════════════════════════════
            AuthAction::SignIn { credentials } => {
                let messages = validate::validate_signin(&credentials);
                if !messages.is_empty() {
                    return smallvec![Self::validation_notices(env, messages)];
                }

                state.signin = RequestStatus::InFlight;
                state.session = Session::default();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.signin(&credentials).await {
                        Ok(success) => AuthAction::SignInSucceeded {
                            token: success.token,
                            user: success.user,
                        },
                        Err(failure) => AuthAction::SignInFailed { failure },
                    })
                }))]
            },

            // ═══════════════════════════════════════════════════════════
            // Terminal events
            // ═══════════════════════════════════════════════════════════
            AuthAction::SignUpSucceeded { token, user } => {
                state.signup = RequestStatus::Succeeded;
                state.session = Session::authenticated(token.clone(), user);
                smallvec![Self::authenticated(env, token, notices::SIGNUP_SUCCESS)]
            },

            AuthAction::SignInSucceeded { token, user } => {
                state.signin = RequestStatus::Succeeded;
                state.session = Session::authenticated(token.clone(), user);
                smallvec![Self::authenticated(env, token, notices::SIGNIN_SUCCESS)]
            },

            AuthAction::SignUpFailed { failure } => {
                state.signup = RequestStatus::Failed(failure.clone());
                state.session = Session::default();
                smallvec![Self::failure_notices(env, failure, notices::SIGNUP_RETRY)]
            },

            AuthAction::SignInFailed { failure } => {
                state.signin = RequestStatus::Failed(failure.clone());
                state.session = Session::default();
                smallvec![Self::failure_notices(env, failure, notices::SIGNIN_RETRY)]
            },
        }
    }
}
