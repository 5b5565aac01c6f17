//! Tests for the logout endpoint.

use axum::{http::StatusCode, response::IntoResponse};
use larder::{controller::auth::logout, model::session::SessionUserId};
use larder_test_utils::prelude::*;

/// Expect 204 and a cleared session for a logged-in user
#[tokio::test]
async fn clears_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user.is_none());

    Ok(())
}

/// Expect 204 for an anonymous caller as well
#[tokio::test]
async fn anonymous_logout_is_a_noop() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
