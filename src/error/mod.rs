//! Error types for the Larder server application.
//!
//! Domain-specific error enums (authentication, users, recipes, user-recipe
//! relations, image handling) aggregate into a single [`Error`] type. All
//! errors implement `IntoResponse` for Axum and use `thiserror` for their
//! `Display` and `Error` implementations. Every error is scoped to the
//! request that raised it; none are retried and none are fatal to the
//! process.

pub mod auth;
pub mod image;
pub mod recipe;
pub mod relation;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        auth::AuthError, image::ImageError, recipe::RecipeError, relation::RelationError,
        user::UserError,
    },
    model::api::ErrorDto,
};

/// Main error type for the Larder server application.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified error, with `thiserror`'s `#[from]` enabling `?`
/// conversion throughout the controller and service layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (login, session resolution).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// User account error (registration validation, lookups, avatar).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Recipe error (structural validation, ownership, lookups).
    #[error(transparent)]
    RecipeError(#[from] RecipeError),
    /// Favorite/shopping-cart/subscription relation error.
    #[error(transparent)]
    RelationError(#[from] RelationError),
    /// Uploaded image decoding or media storage error.
    #[error(transparent)]
    ImageError(#[from] ImageError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Larder's code.
    #[error("Internal error with Larder's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Filesystem error outside media handling (startup directory creation).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::RecipeError(err) => err.into_response(),
            Self::RelationError(err) => err.into_response(),
            Self::ImageError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic error
/// body so implementation details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
