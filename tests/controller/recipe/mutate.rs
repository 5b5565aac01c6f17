//! Tests for the recipe update and delete endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder::{
    controller::recipe::{delete_recipe, update_recipe},
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
        name: "Renamed".to_string(),
        image: None,
        text: "Changed.".to_string(),
        cooking_time: 20,
    }
}

/// Expect 200 when the author updates their recipe
#[tokio::test]
async fn author_can_update() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let author = test.user().insert_user(1).await?;
    let flour = test.recipe().insert_ingredient("flour", "g").await?;
    let recipe = test
        .recipe()
        .insert_recipe_with_ingredients(author.id, 1, &[(flour.id, 200)])
        .await?;
    SessionUserId::insert(&test.session, author.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = update_recipe(
        State(state),
        test.session.clone(),
        Path(recipe.id),
        Json(payload(vec![(flour.id, 50)])),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 when a non-author updates a recipe
#[tokio::test]
async fn foreign_update_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let author = test.user().insert_user(1).await?;
    let intruder = test.user().insert_user(2).await?;
    let flour = test.recipe().insert_ingredient("flour", "g").await?;
    let recipe = test
        .recipe()
        .insert_recipe_with_ingredients(author.id, 1, &[(flour.id, 200)])
        .await?;
    SessionUserId::insert(&test.session, intruder.id)
        .await
        .unwrap();

    let state: AppState = test.to_app_state();
    let result = update_recipe(
        State(state),
        test.session.clone(),
        Path(recipe.id),
        Json(payload(vec![(flour.id, 50)])),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 204 when the author deletes their recipe
#[tokio::test]
async fn author_can_delete() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let author = test.user().insert_user(1).await?;
    let recipe = test.recipe().insert_recipe(author.id, 1).await?;
    SessionUserId::insert(&test.session, author.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = delete_recipe(State(state), test.session.clone(), Path(recipe.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 403 when a non-author deletes a recipe
#[tokio::test]
async fn foreign_delete_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let author = test.user().insert_user(1).await?;
    let intruder = test.user().insert_user(2).await?;
    let recipe = test.recipe().insert_recipe(author.id, 1).await?;
    SessionUserId::insert(&test.session, intruder.id)
        .await
        .unwrap();

    let state: AppState = test.to_app_state();
    let result = delete_recipe(State(state), test.session.clone(), Path(recipe.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 when deleting an unknown recipe
#[tokio::test]
async fn delete_unknown_recipe() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = delete_recipe(State(state), test.session.clone(), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
