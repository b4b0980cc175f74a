//! Composed application state.
//!
//! [`AppState`] is the canonical mapping of named slices to their current
//! value, and [`AppReducer`] is the only way it changes: it routes each
//! dispatched action to its slice's reducer and lifts the child effects
//! into [`AppAction`]. An action addressed to one slice leaves every other
//! slice untouched, and an action a slice reducer does not recognize is an
//! explicit no-op arm inside that reducer - reduction never fails.

use crate::actions::{AuthAction, RecipeAction};
use crate::environment::ClientEnvironment;
use crate::providers::{Navigator, Notifier, RecipeApi, TokenStore};
use crate::reducers::{AuthReducer, RecipeReducer};
use crate::state::{AuthState, RecipeListState};
use platewise_core::effect::Effect;
use platewise_core::reducer::Reducer;
use platewise_core::SmallVec;
use serde::{Deserialize, Serialize};

/// The full client state: one named slice per feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Authentication slice.
    pub auth: AuthState,

    /// Recipe-listing slice.
    pub recipes: RecipeListState,
}

/// Union of all slice actions, tagged by slice.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// An action for the authentication slice.
    Auth(AuthAction),

    /// An action for the recipe-listing slice.
    Recipes(RecipeAction),
}

/// Reducer for the composed application state.
#[derive(Debug, Clone)]
pub struct AppReducer<A, T, N, V> {
    auth: AuthReducer<A, T, N, V>,
    recipes: RecipeReducer<A, T, N, V>,
}

impl<A, T, N, V> AppReducer<A, T, N, V> {
    /// Create a new application reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            auth: AuthReducer::new(),
            recipes: RecipeReducer::new(),
        }
    }
}

impl<A, T, N, V> Default for AppReducer<A, T, N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, N, V> Reducer for AppReducer<A, T, N, V>
where
    A: RecipeApi + Clone + 'static,
    T: TokenStore + Clone + 'static,
    N: Notifier + Clone + 'static,
    V: Navigator + Clone + 'static,
{
    type State = AppState;
    type Action = AppAction;
    type Environment = ClientEnvironment<A, T, N, V>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        // Each arm reduces exactly one slice; the other slice is untouched.
        match action {
            AppAction::Auth(action) => self
                .auth
                .reduce(&mut state.auth, action, env)
                .into_iter()
                .map(|effect| effect.map(AppAction::Auth))
                .collect(),
            AppAction::Recipes(action) => self
                .recipes
                .reduce(&mut state.recipes, action, env)
                .into_iter()
                .map(|effect| effect.map(AppAction::Recipes))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockNavigator, MockNotifier, MockRecipeApi, MockTokenStore};
    use crate::state::RequestStatus;
    use platewise_testing::ReducerTest;

    type TestReducer = AppReducer<MockRecipeApi, MockTokenStore, MockNotifier, MockNavigator>;
    type TestEnv = ClientEnvironment<MockRecipeApi, MockTokenStore, MockNotifier, MockNavigator>;

    fn test_env() -> TestEnv {
        ClientEnvironment::new(
            MockRecipeApi::new(),
            MockTokenStore::default(),
            MockNotifier::default(),
            MockNavigator::default(),
        )
    }

    #[test]
    fn recipe_actions_leave_the_auth_slice_unchanged() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::Recipes(RecipeAction::FetchPage { page: 2 }))
            .then_state(|state| {
                assert_eq!(state.recipes.current_page, 2);
                // The auth slice saw nothing it recognizes: untouched
                assert_eq!(state.auth, AuthState::default());
            })
            .run();
    }

    #[test]
    fn auth_actions_leave_the_recipes_slice_unchanged() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::Auth(AuthAction::SignInFailed {
                failure: crate::error::FailureDetail::transport("boom"),
            }))
            .then_state(|state| {
                assert!(matches!(state.auth.signin, RequestStatus::Failed(_)));
                assert_eq!(state.recipes, RecipeListState::default());
            })
            .run();
    }
}
