//! Tests for the registration endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use larder::{
    controller::user::register,
    model::{app::AppState, user::RegisterUserDto},
};
use larder_test_utils::prelude::*;

fn payload(n: u32) -> RegisterUserDto {
    RegisterUserDto {
        email: format!("user{}@example.com", n),
        username: format!("user{}", n),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// Expect 201 for a valid registration
#[tokio::test]
async fn success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let state: AppState = test.to_app_state();
    let result = register(State(state), Json(payload(1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 for a duplicate email
#[tokio::test]
async fn duplicate_email_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    test.user().insert_user(1).await?;

    let state: AppState = test.to_app_state();
    let mut duplicate = payload(2);
    duplicate.email = "user1@example.com".to_string();
    let result = register(State(state), Json(duplicate)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for a username with forbidden characters
#[tokio::test]
async fn invalid_username_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let state: AppState = test.to_app_state();
    let mut invalid = payload(1);
    invalid.username = "bad name!".to_string();
    let result = register(State(state), Json(invalid)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
