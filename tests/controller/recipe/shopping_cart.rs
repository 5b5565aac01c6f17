//! Tests for the shopping-cart endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder::{
    controller::recipe::{add_to_cart, remove_from_cart},
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
    let result = add_to_cart(State(state), test.session.clone(), Path(recipe.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let state: AppState = test.to_app_state();
    let retry = add_to_cart(State(state), test.session.clone(), Path(recipe.id)).await;

    assert!(retry.is_err());
    let resp = retry.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when removing a recipe that is not in the cart
#[tokio::test]
async fn remove_absent_entry_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    let author = test.user().insert_user(2).await?;
    let recipe = test.recipe().insert_recipe(author.id, 1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = remove_from_cart(State(state), test.session.clone(), Path(recipe.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
