//! Integration tests for the recipe-listing flow.
//!
//! These drive a real store with mock collaborators and cover the paging
//! contract: atomic page installation, stale-keep on failure, the
//! documented out-of-order response behavior, and fire-and-forget
//! favourite toggling.

#![allow(clippy::panic)] // Tests are allowed to panic on failures

use platewise_client::mocks::{
    MockNavigator, MockNotifier, MockRecipeApi, MockTokenStore, RecordedCall, Scripted,
};
use platewise_client::{
    AppAction, AppReducer, AppState, ClientEnvironment, FailureDetail, RecipeAction, RecipeId,
    RecipePage, RecipeSummary, RequestStatus, SessionToken, TokenStore, UserId,
};
use platewise_runtime::Store;
use std::time::Duration;

type TestEnv = ClientEnvironment<MockRecipeApi, MockTokenStore, MockNotifier, MockNavigator>;
type TestReducer = AppReducer<MockRecipeApi, MockTokenStore, MockNotifier, MockNavigator>;
type TestStore = Store<AppState, AppAction, TestEnv, TestReducer>;

struct Harness {
    api: MockRecipeApi,
    tokens: MockTokenStore,
    notifier: MockNotifier,
    store: TestStore,
}

fn harness() -> Harness {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let api = MockRecipeApi::new();
    let tokens = MockTokenStore::new();
    let notifier = MockNotifier::new();
    let navigator = MockNavigator::new();

    let env = ClientEnvironment::new(api.clone(), tokens.clone(), notifier.clone(), navigator);
    let store = Store::new(AppState::default(), AppReducer::new(), env);

    Harness {
        api,
        tokens,
        notifier,
        store,
    }
}

fn summaries(prefix: &str, count: usize) -> Vec<RecipeSummary> {
    (0..count)
        .map(|i| RecipeSummary {
            id: RecipeId::new(format!("{prefix}-{i}")),
            title: format!("Recipe {prefix}-{i}"),
            description: "Tried and tested".to_string(),
            user_id: UserId::new("1"),
        })
        .collect()
}

async fn send_and_wait(harness: &Harness, action: AppAction) {
    let mut handle = harness
        .store
        .send(action)
        .await
        .unwrap_or_else(|e| panic!("send failed: {e}"));
    handle
        .wait_with_timeout(Duration::from_secs(5))
        .await
        .unwrap_or_else(|e| panic!("effects did not settle: {e}"));
}

#[tokio::test]
async fn fetch_installs_one_coherent_page() {
    let harness = harness();
    harness.api.script_page(
        2,
        Scripted::ready(Ok(RecipePage {
            items: summaries("p2", 7),
            pages: 4,
        })),
    );

    send_and_wait(&harness, AppAction::Recipes(RecipeAction::FetchPage { page: 2 })).await;

    let recipes = harness.store.state(|s| s.recipes.clone()).await;
    assert_eq!(recipes.fetch, RequestStatus::Succeeded);
    assert_eq!(recipes.current_page, 2);
    assert_eq!(recipes.total_pages, 4);
    assert_eq!(recipes.items.len(), 7);
    assert_eq!(recipes.items[0].id, RecipeId::new("p2-0"));
}

#[tokio::test]
async fn fetch_failure_keeps_the_stale_page_and_stays_quiet() {
    let harness = harness();
    harness.api.script_page(
        1,
        Scripted::ready(Ok(RecipePage {
            items: summaries("p1", 3),
            pages: 5,
        })),
    );

    send_and_wait(&harness, AppAction::Recipes(RecipeAction::FetchPage { page: 1 })).await;

    // Second fetch fails; the loaded page survives
    harness.api.script_page(
        2,
        Scripted::ready(Err(FailureDetail::transport("connection refused"))),
    );
    send_and_wait(&harness, AppAction::Recipes(RecipeAction::FetchPage { page: 2 })).await;

    let recipes = harness.store.state(|s| s.recipes.clone()).await;
    assert!(matches!(recipes.fetch, RequestStatus::Failed(_)));
    assert_eq!(recipes.items.len(), 3);
    assert_eq!(recipes.items[0].id, RecipeId::new("p1-0"));
    assert_eq!(recipes.total_pages, 5);
    // The selector still shows the page the user asked for
    assert_eq!(recipes.current_page, 2);

    // The read path fails silently toward the user
    assert!(harness.notifier.texts().is_empty());
}

#[tokio::test]
async fn out_of_order_responses_settle_on_a_single_response() {
    let harness = harness();

    // Page 1 answers slowly, page 2 quickly: the page-1 response arrives
    // after the later request's response.
    harness.api.script_page(
        1,
        Scripted::delayed(
            Duration::from_millis(80),
            Ok(RecipePage {
                items: summaries("p1", 3),
                pages: 5,
            }),
        ),
    );
    harness.api.script_page(
        2,
        Scripted::delayed(
            Duration::from_millis(10),
            Ok(RecipePage {
                items: summaries("p2", 2),
                pages: 4,
            }),
        ),
    );

    let mut first = harness
        .store
        .send(AppAction::Recipes(RecipeAction::FetchPage { page: 1 }))
        .await
        .unwrap_or_else(|e| panic!("send failed: {e}"));
    let mut second = harness
        .store
        .send(AppAction::Recipes(RecipeAction::FetchPage { page: 2 }))
        .await
        .unwrap_or_else(|e| panic!("send failed: {e}"));

    first
        .wait_with_timeout(Duration::from_secs(5))
        .await
        .unwrap_or_else(|e| panic!("effects did not settle: {e}"));
    second
        .wait_with_timeout(Duration::from_secs(5))
        .await
        .unwrap_or_else(|e| panic!("effects did not settle: {e}"));

    // Documented behavior: the response that reduces last wins wholesale.
    // The stale page-1 response arrived after page 2's, so the state is
    // page 1's response - all three fields from the same response, never
    // a mix.
    let recipes = harness.store.state(|s| s.recipes.clone()).await;
    assert_eq!(recipes.current_page, 1);
    assert_eq!(recipes.total_pages, 5);
    assert_eq!(recipes.items.len(), 3);
    assert!(recipes.items.iter().all(|item| item.id.as_str().starts_with("p1-")));
    assert_eq!(recipes.fetch, RequestStatus::Succeeded);
}

#[tokio::test]
async fn duplicate_favorite_toggles_each_confirm_independently() {
    let harness = harness();
    harness.api.script_page(
        1,
        Scripted::ready(Ok(RecipePage {
            items: summaries("p1", 3),
            pages: 1,
        })),
    );
    send_and_wait(&harness, AppAction::Recipes(RecipeAction::FetchPage { page: 1 })).await;

    let toggle = AppAction::Recipes(RecipeAction::ToggleFavorite {
        recipe_id: RecipeId::new("p1-0"),
        user_id: UserId::new("1"),
    });

    // Rapid duplicate toggles: no client-side deduplication
    let mut first = harness
        .store
        .send(toggle.clone())
        .await
        .unwrap_or_else(|e| panic!("send failed: {e}"));
    let mut second = harness
        .store
        .send(toggle)
        .await
        .unwrap_or_else(|e| panic!("send failed: {e}"));

    first
        .wait_with_timeout(Duration::from_secs(5))
        .await
        .unwrap_or_else(|e| panic!("effects did not settle: {e}"));
    second
        .wait_with_timeout(Duration::from_secs(5))
        .await
        .unwrap_or_else(|e| panic!("effects did not settle: {e}"));

    // Two independent confirmations, and the listing is untouched
    assert_eq!(
        harness.notifier.texts(),
        vec!["Added to favourite list", "Added to favourite list"]
    );

    let recipes = harness.store.state(|s| s.recipes.clone()).await;
    assert_eq!(recipes.items.len(), 3);
    assert_eq!(recipes.favorite, RequestStatus::Succeeded);

    let favorite_calls = harness
        .api
        .calls()
        .into_iter()
        .filter(|call| matches!(call, RecordedCall::AddFavorite { .. }))
        .count();
    assert_eq!(favorite_calls, 2);
}

#[tokio::test]
async fn favorite_requests_carry_the_stored_token() {
    let harness = harness();
    harness.tokens.set(&SessionToken::new("stored-token"));

    send_and_wait(
        &harness,
        AppAction::Recipes(RecipeAction::ToggleFavorite {
            recipe_id: RecipeId::new("42"),
            user_id: UserId::new("7"),
        }),
    )
    .await;

    let calls = harness.api.calls();
    assert_eq!(
        calls,
        vec![RecordedCall::AddFavorite {
            user_id: UserId::new("7"),
            recipe_id: RecipeId::new("42"),
            token: Some(SessionToken::new("stored-token")),
        }]
    );
}
