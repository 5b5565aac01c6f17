//! User account errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by registration validation, profile lookups and avatar
/// updates.
#[derive(Error, Debug)]
pub enum UserError {
    /// Referenced user does not exist.
    #[error("User ID {0:?} not found")]
    NotFound(i32),
    /// Registration email collides with an existing account.
    #[error("A user with this email already exists")]
    EmailTaken,
    /// Registration username collides with an existing account.
    #[error("A user with this username already exists")]
    UsernameTaken,
    /// Username contains characters outside the allowed pattern.
    #[error("Username may only contain letters, digits and @/./+/-/_ characters")]
    InvalidUsername,
    /// Email is not a plausible address.
    #[error("Enter a valid email address")]
    InvalidEmail,
    /// A text field exceeds its maximum length.
    #[error("Field {0:?} must be at most {1} characters")]
    FieldTooLong(&'static str, usize),
    /// Avatar update submitted without an image payload.
    #[error("The avatar field is required")]
    MissingAvatar,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
