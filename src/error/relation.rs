//! Favorite, shopping-cart and subscription relation errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, relation::RelationKind};

/// Errors raised by the relationship-invariant guard.
///
/// Every variant maps to 400: the referenced entities exist, the caller's
/// requested state transition is what is invalid.
#[derive(Error, Debug)]
pub enum RelationError {
    /// The (user, recipe) row already exists for this collection.
    #[error("Recipe is already in {}", .0.collection_name())]
    AlreadyExists(RelationKind),
    /// Removal of a (user, recipe) row that is not present.
    #[error("Recipe is not in {}", .0.collection_name())]
    NotInCollection(RelationKind),
    /// A user attempted to follow themselves.
    #[error("You cannot subscribe to yourself")]
    SelfSubscription,
    /// The subscription already exists.
    #[error("You are already subscribed to this user")]
    AlreadySubscribed,
    /// Unsubscribe without an existing subscription.
    #[error("You are not subscribed to this user")]
    NotSubscribed,
}

impl IntoResponse for RelationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
