//! Tests for the current-user endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use larder::{
    controller::user::get_me,
    model::{app::AppState, session::SessionUserId},
};
use larder_test_utils::prelude::*;

/// Expect 200 for a logged-in user
#[tokio::test]
async fn success_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = get_me(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 for an anonymous caller
#[tokio::test]
async fn rejects_anonymous_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let state: AppState = test.to_app_state();
    let result = get_me(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 404 and a cleared session when the session references a deleted
/// user
#[tokio::test]
async fn clears_session_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let state: AppState = test.to_app_state();
    let result = get_me(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user.is_none());

    Ok(())
}
