//! Tests for the subscribe and unsubscribe endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder::{
    controller::user::{subscribe, unsubscribe, RecipesLimitParams},
    model::{app::AppState, session::SessionUserId},
};
use larder_test_utils::prelude::*;

fn no_limit() -> Query<RecipesLimitParams> {
    Query(RecipesLimitParams {
        recipes_limit: None,
    })
}

/// Expect 201 when following another user
#[tokio::test]
async fn success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    let author = test.user().insert_user(2).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = subscribe(
        State(state),
        test.session.clone(),
        Path(author.id),
        no_limit(),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 when following yourself
#[tokio::test]
async fn self_follow_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = subscribe(
        State(state),
        test.session.clone(),
        Path(user.id),
        no_limit(),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when following the same author twice
#[tokio::test]
async fn duplicate_follow_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    let author = test.user().insert_user(2).await?;
    test.user().insert_subscription(user.id, author.id).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = subscribe(
        State(state),
        test.session.clone(),
        Path(author.id),
        no_limit(),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 for an unknown author
#[tokio::test]
async fn unknown_author_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = subscribe(State(state), test.session.clone(), Path(42), no_limit()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 204 when unfollowing, then 400 on the retry
#[tokio::test]
async fn unsubscribe_then_retry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    let author = test.user().insert_user(2).await?;
    test.user().insert_subscription(user.id, author.id).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = unsubscribe(State(state), test.session.clone(), Path(author.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let state: AppState = test.to_app_state();
    let retry = unsubscribe(State(state), test.session.clone(), Path(author.id)).await;

    assert!(retry.is_err());
    let resp = retry.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
