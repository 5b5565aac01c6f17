//! Tests for the favorite endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder::{
    controller::recipe::{add_favorite, remove_favorite},
    model::{app::AppState, session::SessionUserId},
};
use larder_test_utils::prelude::*;

/// Expect 201 on the first add and 400 on the duplicate
#[tokio::test]
async fn add_twice_reports_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    let author = test.user().insert_user(2).await?;
    let recipe = test.recipe().insert_recipe(author.id, 1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = add_favorite(State(state), test.session.clone(), Path(recipe.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let state: AppState = test.to_app_state();
    let retry = add_favorite(State(state), test.session.clone(), Path(recipe.id)).await;

    assert!(retry.is_err());
    let resp = retry.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when favoriting an unknown recipe
#[tokio::test]
async fn unknown_recipe_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = add_favorite(State(state), test.session.clone(), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 for an anonymous caller
#[tokio::test]
async fn rejects_anonymous_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let author = test.user().insert_user(1).await?;
    let recipe = test.recipe().insert_recipe(author.id, 1).await?;

    let state: AppState = test.to_app_state();
    let result = add_favorite(State(state), test.session.clone(), Path(recipe.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 204 on removal and 400 when the row is already gone
#[tokio::test]
async fn remove_then_retry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    let author = test.user().insert_user(2).await?;
    let recipe = test.recipe().insert_recipe(author.id, 1).await?;
    test.recipe().insert_favorite(user.id, recipe.id).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = remove_favorite(State(state), test.session.clone(), Path(recipe.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let state: AppState = test.to_app_state();
    let retry = remove_favorite(State(state), test.session.clone(), Path(recipe.id)).await;

    assert!(retry.is_err());
    let resp = retry.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
