//! Login and logout routes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{api::ErrorDto, app::AppState, session::SessionUserId, user::LoginDto, user::UserDto},
    service::user::UserService,
};

/// OpenAPI tag for authentication routes.
pub static AUTH_TAG: &str = "auth";

/// Logs a user in with email and password
///
/// Verifies the credentials and stores the user id in the session cookie.
///
/// # Responses
/// - 200 (OK): Successful login, returns the logged-in user
/// - 400 (Bad Request): Unknown email or wrong password
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = UserDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(UserService::to_dto(user, false))).into_response())
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 204 (No Content): Session cleared; a no-op for anonymous callers
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Successfully logged out"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    SessionUserId::clear(&session).await;

    Ok(StatusCode::NO_CONTENT.into_response())
}
