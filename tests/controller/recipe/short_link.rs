//! Tests for the short-link endpoints.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder::{
    controller::recipe::{get_short_link, short_link_redirect},
    model::app::AppState,
};
use larder_test_utils::prelude::*;

/// Expect the short link to point at the redirect route
#[tokio::test]
async fn returns_short_link() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let author = test.user().insert_user(1).await?;
    let recipe = test.recipe().insert_recipe(author.id, 1).await?;

    let state: AppState = test.to_app_state();
    let result = get_short_link(State(state), Path(recipe.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["short-link"], format!("/s/{}", recipe.id));

    Ok(())
}

/// Expect 404 for an unknown recipe
#[tokio::test]
async fn unknown_recipe_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let state: AppState = test.to_app_state();
    let result = get_short_link(State(state), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the redirect route to send the caller to the recipe page
#[tokio::test]
async fn redirects_to_recipe() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let author = test.user().insert_user(1).await?;
    let recipe = test.recipe().insert_recipe(author.id, 1).await?;

    let state: AppState = test.to_app_state();
    let result = short_link_redirect(State(state), Path(recipe.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(axum::http::header::LOCATION).unwrap(),
        &format!("/recipes/{}", recipe.id)
    );

    Ok(())
}
