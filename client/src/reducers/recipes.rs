//! Recipe-listing reducer.
//!
//! Fetches pages of the recipe listing and issues favourite-toggle
//! requests against the authenticated user's record.
//!
//! The listing path deliberately fails quietly: a failed fetch keeps the
//! previously loaded page on screen (stale-but-valid beats a blanked
//! view) and is only logged. Responses install their whole payload in one
//! reduction, so even when two fetches race, the state always corresponds
//! to exactly one response - whichever reduces last wins.

use crate::actions::RecipeAction;
use crate::constants::{FAVORITE_NOTICE_DURATION, notices};
use crate::environment::ClientEnvironment;
use crate::providers::{Navigator, NoticeTone, Notifier, RecipeApi, TokenStore};
use crate::state::{RecipeListState, RequestStatus};
use platewise_core::effect::Effect;
use platewise_core::reducer::Reducer;
use platewise_core::{SmallVec, smallvec};

/// Recipe-listing reducer.
///
/// Generic over the collaborator implementations carried by the
/// environment.
#[derive(Debug, Clone)]
pub struct RecipeReducer<A, T, N, V> {
    /// Phantom data to hold type parameters.
    _phantom: std::marker::PhantomData<(A, T, N, V)>,
}

impl<A, T, N, V> RecipeReducer<A, T, N, V> {
    /// Create a new recipe-listing reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, T, N, V> Default for RecipeReducer<A, T, N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, N, V> Reducer for RecipeReducer<A, T, N, V>
where
    A: RecipeApi + Clone + 'static,
    T: TokenStore + Clone + 'static,
    N: Notifier + Clone + 'static,
    V: Navigator + Clone + 'static,
{
    type State = RecipeListState;
    type Action = RecipeAction;
    type Environment = ClientEnvironment<A, T, N, V>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════
            // FetchPage: optimistic page selection + the listing request
            // ═══════════════════════════════════════════════════════════
            RecipeAction::FetchPage { page } => {
                let page = page.max(1);

                state.fetch = RequestStatus::InFlight;
                // The selector highlights the requested page before the
                // response returns; the loaded items may briefly belong to
                // another page.
                state.current_page = page;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.recipes_page(page).await {
                        Ok(loaded) => RecipeAction::PageLoaded {
                            page,
                            items: loaded.items,
                            total_pages: loaded.pages.max(1),
                        },
                        Err(failure) => RecipeAction::PageLoadFailed { failure },
                    })
                }))]
            },

            RecipeAction::PageLoaded {
                page,
                items,
                total_pages,
            } => {
                state.fetch = RequestStatus::Succeeded;
                // One response installs the whole triple; items and
                // pagination metadata are never mixed across responses.
                state.items = items;
                state.total_pages = total_pages;
                state.current_page = page.min(total_pages);
                SmallVec::new()
            },

            RecipeAction::PageLoadFailed { failure } => {
                // Keep the stale listing; the read path stays quiet toward
                // the user.
                tracing::warn!(
                    status_code = ?failure.status_code,
                    "Recipe page fetch failed"
                );
                state.fetch = RequestStatus::Failed(failure);
                SmallVec::new()
            },

            // ═══════════════════════════════════════════════════════════
            // ToggleFavorite: fire-and-forget with respect to the listing
            // ═══════════════════════════════════════════════════════════
            RecipeAction::ToggleFavorite { recipe_id, user_id } => {
                state.favorite = RequestStatus::InFlight;

                let api = env.api.clone();
                let tokens = env.tokens.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    let token = tokens.get();
                    Some(match api.add_favorite(&user_id, &recipe_id, token.as_ref()).await {
                        Ok(()) => RecipeAction::FavoriteSaved { recipe_id },
                        Err(failure) => RecipeAction::FavoriteFailed { recipe_id, failure },
                    })
                }))]
            },

            RecipeAction::FavoriteSaved { recipe_id } => {
                tracing::debug!(recipe_id = %recipe_id, "Recipe favourited");
                state.favorite = RequestStatus::Succeeded;

                let notifier = env.notifier.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    notifier.notify(
                        notices::FAVORITE_SAVED,
                        FAVORITE_NOTICE_DURATION,
                        NoticeTone::Success,
                    );
                    None
                }))]
            },

            RecipeAction::FavoriteFailed { recipe_id, failure } => {
                tracing::warn!(
                    recipe_id = %recipe_id,
                    status_code = ?failure.status_code,
                    "Favourite toggle failed"
                );
                state.favorite = RequestStatus::Failed(failure);
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureDetail;
    use crate::mocks::{MockNavigator, MockNotifier, MockRecipeApi, MockTokenStore};
    use crate::state::{RecipeId, RecipeSummary, UserId};
    use platewise_testing::{ReducerTest, assertions};

    type TestReducer = RecipeReducer<MockRecipeApi, MockTokenStore, MockNotifier, MockNavigator>;
    type TestEnv = ClientEnvironment<MockRecipeApi, MockTokenStore, MockNotifier, MockNavigator>;

    fn test_env() -> TestEnv {
        ClientEnvironment::new(
            MockRecipeApi::new(),
            MockTokenStore::default(),
            MockNotifier::default(),
            MockNavigator::default(),
        )
    }

    fn summaries(count: usize) -> Vec<RecipeSummary> {
        (0..count)
            .map(|i| RecipeSummary {
                id: RecipeId::new(i.to_string()),
                title: format!("Recipe {i}"),
                description: String::new(),
                user_id: UserId::new("1"),
            })
            .collect()
    }

    #[test]
    fn fetch_page_is_optimistic_about_the_current_page() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(RecipeListState::default())
            .when_action(RecipeAction::FetchPage { page: 3 })
            .then_state(|state| {
                assert!(state.fetch.is_in_flight());
                // Selected before the response returns
                assert_eq!(state.current_page, 3);
                // The loaded data is untouched until a response lands
                assert!(state.items.is_empty());
                assert_eq!(state.total_pages, 1);
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn fetch_page_clamps_page_zero() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(RecipeListState::default())
            .when_action(RecipeAction::FetchPage { page: 0 })
            .then_state(|state| {
                assert_eq!(state.current_page, 1);
            })
            .run();
    }

    #[test]
    fn page_loaded_replaces_items_and_pagination_together() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(RecipeListState {
                items: summaries(2),
                current_page: 2,
                total_pages: 2,
                fetch: RequestStatus::InFlight,
                favorite: RequestStatus::Idle,
            })
            .when_action(RecipeAction::PageLoaded {
                page: 2,
                items: summaries(7),
                total_pages: 4,
            })
            .then_state(|state| {
                assert_eq!(state.fetch, RequestStatus::Succeeded);
                assert_eq!(state.items.len(), 7);
                assert_eq!(state.total_pages, 4);
                assert_eq!(state.current_page, 2);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn page_loaded_clamps_current_page_to_total_pages() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(RecipeListState {
                current_page: 9,
                fetch: RequestStatus::InFlight,
                ..RecipeListState::default()
            })
            .when_action(RecipeAction::PageLoaded {
                page: 9,
                items: summaries(1),
                total_pages: 3,
            })
            .then_state(|state| {
                assert_eq!(state.current_page, 3);
                assert_eq!(state.total_pages, 3);
            })
            .run();
    }

    #[test]
    fn fetch_failure_keeps_the_stale_listing() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(RecipeListState {
                items: summaries(3),
                current_page: 2,
                total_pages: 5,
                fetch: RequestStatus::InFlight,
                favorite: RequestStatus::Idle,
            })
            .when_action(RecipeAction::PageLoadFailed {
                failure: FailureDetail::transport("connection refused"),
            })
            .then_state(|state| {
                // Stale-but-valid data preferred over a blanked view
                assert_eq!(state.items.len(), 3);
                assert_eq!(state.total_pages, 5);
                assert!(state.fetch.failure().is_some());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn toggle_favorite_goes_in_flight_without_touching_items() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(RecipeListState {
                items: summaries(3),
                ..RecipeListState::default()
            })
            .when_action(RecipeAction::ToggleFavorite {
                recipe_id: RecipeId::new("7"),
                user_id: UserId::new("1"),
            })
            .then_state(|state| {
                assert!(state.favorite.is_in_flight());
                assert_eq!(state.items.len(), 3);
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn favorite_saved_confirms_without_mutating_the_listing() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(RecipeListState {
                items: summaries(3),
                favorite: RequestStatus::InFlight,
                ..RecipeListState::default()
            })
            .when_action(RecipeAction::FavoriteSaved {
                recipe_id: RecipeId::new("7"),
            })
            .then_state(|state| {
                assert_eq!(state.favorite, RequestStatus::Succeeded);
                assert_eq!(state.items.len(), 3);
            })
            .then_effects(|effects| {
                // The confirmation notice
                assertions::assert_effects_count(effects, 1);
            })
            .run();
    }

    #[test]
    fn favorite_failure_is_status_only() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(RecipeListState {
                favorite: RequestStatus::InFlight,
                ..RecipeListState::default()
            })
            .when_action(RecipeAction::FavoriteFailed {
                recipe_id: RecipeId::new("7"),
                failure: FailureDetail::text(500, "boom"),
            })
            .then_state(|state| {
                assert!(state.favorite.failure().is_some());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
