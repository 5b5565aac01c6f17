//! Tests for the recipe creation endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use larder::{
    controller::recipe::create_recipe,
    model::{
        app::AppState,
        recipe::{IngredientAmountDto, RecipePayloadDto},
        session::SessionUserId,
    },
};
use larder_test_utils::prelude::*;

fn payload(ingredients: Vec<(i32, i32)>) -> RecipePayloadDto {
    RecipePayloadDto {
        ingredients: ingredients
            .into_iter()
            .map(|(id, amount)| IngredientAmountDto { id, amount })
            .collect(),
        name: "Bread".to_string(),
        image: Some(TEST_IMAGE_DATA_URI.to_string()),
        text: "Mix and bake.".to_string(),
        cooking_time: 45,
    }
}

/// Expect 201 for a valid submission from a logged-in user
#[tokio::test]
async fn success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    let flour = test.recipe().insert_ingredient("flour", "g").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = create_recipe(
        State(state),
        test.session.clone(),
        Json(payload(vec![(flour.id, 200)])),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 401 for an anonymous caller
#[tokio::test]
async fn rejects_anonymous_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let flour = test.recipe().insert_ingredient("flour", "g").await?;

    let state: AppState = test.to_app_state();
    let result = create_recipe(
        State(state),
        test.session.clone(),
        Json(payload(vec![(flour.id, 200)])),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 for an empty ingredient list
#[tokio::test]
async fn rejects_empty_ingredients() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = create_recipe(State(state), test.session.clone(), Json(payload(vec![]))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for duplicate ingredient ids
#[tokio::test]
async fn rejects_duplicate_ingredients() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    let flour = test.recipe().insert_ingredient("flour", "g").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = create_recipe(
        State(state),
        test.session.clone(),
        Json(payload(vec![(flour.id, 200), (flour.id, 100)])),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
