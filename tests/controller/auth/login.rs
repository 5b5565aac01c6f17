//! Tests for the login endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use larder::{
    controller::auth::login,
    model::{app::AppState, session::SessionUserId, user::LoginDto},
};
use larder_test_utils::prelude::*;

/// Expect 200 and a session user id after logging in with the registered
/// password
#[tokio::test]
async fn success_sets_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user(1).await?;

    let state: AppState = test.to_app_state();
    let result = login(
        State(state),
        test.session.clone(),
        Json(LoginDto {
            email: "user1@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user, Some(user.id));

    Ok(())
}

/// Expect 400 and no session user for a wrong password
#[tokio::test]
async fn wrong_password_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    test.user().insert_user(1).await?;

    let state: AppState = test.to_app_state();
    let result = login(
        State(state),
        test.session.clone(),
        Json(LoginDto {
            email: "user1@example.com".to_string(),
            password: "wrong password".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user.is_none());

    Ok(())
}

/// Expect 400 for an email with no account
#[tokio::test]
async fn unknown_email_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let state: AppState = test.to_app_state();
    let result = login(
        State(state),
        test.session.clone(),
        Json(LoginDto {
            email: "nobody@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
