//! Tests for the shopping-list download endpoint.

use axum::{
    body::to_bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use larder::{
    controller::recipe::download_shopping_cart,
    model::{app::AppState, session::SessionUserId},
};
use larder_test_utils::prelude::*;

/// Expect a text attachment with summed per-ingredient totals
#[tokio::test]
async fn downloads_aggregated_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    let flour = test.recipe().insert_ingredient("flour", "g").await?;
    let sugar = test.recipe().insert_ingredient("sugar", "g").await?;

    let bread = test
        .recipe()
        .insert_recipe_with_ingredients(user.id, 1, &[(flour.id, 200), (sugar.id, 50)])
        .await?;
    let cake = test
        .recipe()
        .insert_recipe_with_ingredients(user.id, 2, &[(flour.id, 100)])
        .await?;
    test.recipe().insert_cart_entry(user.id, bread.id).await?;
    test.recipe().insert_cart_entry(user.id, cake.id).await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = download_shopping_cart(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"shopping_list.txt\""
    );

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();

    assert_eq!(body, "Shopping list:\n\n- flour (g): 300\n- sugar (g): 50\n");

    Ok(())
}

/// Expect 200 with a JSON detail body when the cart is empty
#[tokio::test]
async fn empty_cart_reports_detail() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = download_shopping_cart(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(body.contains("Shopping cart is empty."));

    Ok(())
}

/// Expect 401 for an anonymous caller
#[tokio::test]
async fn rejects_anonymous_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let state: AppState = test.to_app_state();
    let result = download_shopping_cart(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
