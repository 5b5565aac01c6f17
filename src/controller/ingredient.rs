//! Ingredient catalog routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    data::IngredientRepository,
    error::{recipe::RecipeError, Error},
    model::{api::ErrorDto, app::AppState, recipe::IngredientDto},
};

/// OpenAPI tag for ingredient routes.
pub static INGREDIENT_TAG: &str = "ingredients";

/// Ingredient search parameters.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct IngredientSearchParams {
    /// Case-insensitive substring to match ingredient names against.
    pub name: Option<String>,
}

fn to_dto(ingredient: entity::ingredient::Model) -> IngredientDto {
    IngredientDto {
        id: ingredient.id,
        name: ingredient.name,
        measurement_unit: ingredient.measurement_unit,
    }
}

/// Lists ingredients ordered by name, optionally narrowed by a name search
///
/// Unpaginated: clients load the catalog once for autocomplete.
///
/// # Responses
/// - 200 (OK): The matching ingredients
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    params(IngredientSearchParams),
    responses(
        (status = 200, description = "Matching ingredients", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
    Query(params): Query<IngredientSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let ingredients = IngredientRepository::new(&state.db)
        .search(params.name.as_deref())
        .await?;

    let dtos: Vec<IngredientDto> = ingredients.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

/// Retrieves a single ingredient by id
///
/// # Responses
/// - 200 (OK): The ingredient
/// - 404 (Not Found): No ingredient with this id
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient id")),
    responses(
        (status = 200, description = "The ingredient", body = IngredientDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(ingredient_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let ingredient = IngredientRepository::new(&state.db)
        .get_by_id(ingredient_id)
        .await?
        .ok_or(RecipeError::IngredientNotFound(ingredient_id))?;

    Ok((StatusCode::OK, Json(to_dto(ingredient))).into_response())
}
