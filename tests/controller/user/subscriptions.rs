//! Tests for the subscriptions listing endpoint.

use axum::{
    body::to_bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder::{
    controller::user::{get_subscriptions, SubscriptionParams},
    model::{
        api::Paginated, app::AppState, session::SessionUserId, user::UserWithRecipesDto,
    },
};
use larder_test_utils::prelude::*;

/// Expect the followed authors with their recipes and counts
#[tokio::test]
async fn lists_followed_authors_with_recipes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    let author = test.user().insert_user(2).await?;
    test.user().insert_subscription(user.id, author.id).await?;
    test.recipe().insert_recipe(author.id, 1).await?;
    test.recipe().insert_recipe(author.id, 2).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = get_subscriptions(
        State(state),
        test.session.clone(),
        Query(SubscriptionParams {
            limit: None,
            offset: None,
            recipes_limit: Some(1),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let page: Paginated<UserWithRecipesDto> = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.results.len(), 1);

    let entry = &page.results[0];
    assert_eq!(entry.id, author.id);
    assert!(entry.is_subscribed);
    // recipes_limit truncates the embedded recipes, not the count
    assert_eq!(entry.recipes.len(), 1);
    assert_eq!(entry.recipes_count, 2);

    Ok(())
}

/// Expect 401 for an anonymous caller
#[tokio::test]
async fn rejects_anonymous_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let state: AppState = test.to_app_state();
    let result = get_subscriptions(
        State(state),
        test.session.clone(),
        Query(SubscriptionParams {
            limit: None,
            offset: None,
            recipes_limit: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
