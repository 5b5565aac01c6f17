//! Recipe validation and ownership errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    constant::{MAX_COOKING_TIME, MAX_INGREDIENT_AMOUNT, MIN_COOKING_TIME, MIN_INGREDIENT_AMOUNT},
    model::api::ErrorDto,
};

/// Errors raised while validating or mutating recipes.
///
/// Structural validation runs before any write so a malformed submission
/// never reaches the storage layer's constraints.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Referenced recipe does not exist.
    #[error("Recipe ID {0:?} not found")]
    NotFound(i32),
    /// A non-author attempted to update or delete a recipe.
    #[error("You do not have permission to modify this recipe")]
    PermissionDenied,
    /// Submission carried no ingredient line items.
    #[error("At least one ingredient is required")]
    EmptyIngredients,
    /// The same ingredient appeared more than once in a submission.
    #[error("Ingredients must not repeat within a recipe")]
    DuplicateIngredients,
    /// A line item referenced an ingredient that does not exist.
    #[error("Ingredient ID {0:?} not found")]
    UnknownIngredient(i32),
    /// Direct catalog lookup of an ingredient that does not exist.
    #[error("Ingredient ID {0:?} not found")]
    IngredientNotFound(i32),
    /// A line item amount fell outside the allowed bounds.
    #[error(
        "Ingredient amount {0} must be between {min} and {max}",
        min = MIN_INGREDIENT_AMOUNT,
        max = MAX_INGREDIENT_AMOUNT
    )]
    AmountOutOfRange(i32),
    /// Cooking time fell outside the allowed bounds.
    #[error(
        "Cooking time {0} must be between {min} and {max} minutes",
        min = MIN_COOKING_TIME,
        max = MAX_COOKING_TIME
    )]
    CookingTimeOutOfRange(i32),
    /// Recipe creation submitted without an image.
    #[error("An image is required")]
    MissingImage,
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) | Self::IngredientNotFound(_) => StatusCode::NOT_FOUND,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
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
