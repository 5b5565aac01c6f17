//! Recipe CRUD, favorite/cart actions, shopping-list download and short
//! links.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    controller::util::{current_user_id, require_user_id},
    data::RecipeRepository,
    error::{recipe::RecipeError, Error},
    model::{
        api::{DetailDto, ErrorDto, Paginated},
        app::AppState,
        recipe::{RecipeDto, RecipePayloadDto, ShortLinkDto},
        relation::RelationKind,
    },
    service::{RecipeListQuery, RecipeService, RelationService, ShoppingListService},
    util::pagination::{paginate, PageParams},
};

/// OpenAPI tag for recipe routes.
pub static RECIPE_TAG: &str = "recipes";

/// Recipe listing parameters: the pagination window plus viewer-scoped
/// filters.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct RecipeListParams {
    /// Page size.
    pub limit: Option<u64>,
    /// Number of rows to skip.
    pub offset: Option<u64>,
    /// Only recipes by this author.
    pub author: Option<i32>,
    /// `1` narrows to the viewer's favorites, `0` excludes them; ignored for
    /// anonymous callers.
    pub is_favorited: Option<String>,
    /// `1` narrows to the viewer's cart, `0` excludes it; ignored for
    /// anonymous callers.
    pub is_in_shopping_cart: Option<String>,
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}

/// Lists recipes, newest first
///
/// # Responses
/// - 200 (OK): A page of recipes projected for the viewer
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    params(RecipeListParams),
    responses(
        (status = 200, description = "A page of recipes", body = Paginated<RecipeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RecipeListParams>,
) -> Result<impl IntoResponse, Error> {
    let viewer = current_user_id(&session).await?;

    let query = RecipeListQuery {
        author: params.author,
        is_favorited: parse_flag(params.is_favorited.as_deref()),
        is_in_shopping_cart: parse_flag(params.is_in_shopping_cart.as_deref()),
    };
    let page = PageParams {
        limit: params.limit,
        offset: params.offset,
    };

    let (recipes, count) = RecipeService::new(&state.db)
        .list(viewer, &query, page.limit(), page.offset())
        .await?;

    Ok((
        StatusCode::OK,
        Json(paginate("/api/recipes", &page, count, recipes)),
    )
        .into_response())
}

/// Publishes a new recipe
///
/// # Responses
/// - 201 (Created): The recipe projected for its author
/// - 400 (Bad Request): Structural validation failure (ingredients, bounds,
///   image)
/// - 401 (Unauthorized): No authenticated session
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    request_body = RecipePayloadDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RecipePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let recipe = RecipeService::new(&state.db)
        .create(&state.media, user_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)).into_response())
}

/// Retrieves a recipe by id
///
/// # Responses
/// - 200 (OK): The recipe projected for the viewer
/// - 404 (Not Found): No recipe with this id
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The recipe", body = RecipeDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = current_user_id(&session).await?;

    let recipe = RecipeService::new(&state.db).get(viewer, recipe_id).await?;

    Ok((StatusCode::OK, Json(recipe)).into_response())
}

/// Updates a recipe
///
/// Author-only; the submitted ingredient list replaces the stored one, and
/// an omitted image keeps the stored file.
///
/// # Responses
/// - 200 (OK): The updated recipe
/// - 400 (Bad Request): Structural validation failure
/// - 401 (Unauthorized): No authenticated session
/// - 403 (Forbidden): Caller is not the author
/// - 404 (Not Found): No recipe with this id
#[utoipa::path(
    patch,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe id")),
    request_body = RecipePayloadDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
    Json(payload): Json<RecipePayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let recipe = RecipeService::new(&state.db)
        .update(&state.media, user_id, recipe_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(recipe)).into_response())
}

/// Deletes a recipe
///
/// Author-only; line items, favorites and cart entries cascade.
///
/// # Responses
/// - 204 (No Content): Recipe deleted
/// - 401 (Unauthorized): No authenticated session
/// - 403 (Forbidden): Caller is not the author
/// - 404 (Not Found): No recipe with this id
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    RecipeService::new(&state.db).delete(user_id, recipe_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn add_relation(
    state: &AppState,
    session: &Session,
    recipe_id: i32,
    kind: RelationKind,
) -> Result<axum::response::Response, Error> {
    let user_id = require_user_id(session).await?;

    RelationService::new(&state.db)
        .add(kind, user_id, recipe_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DetailDto {
            detail: format!("Recipe added to {}.", kind.collection_name()),
        }),
    )
        .into_response())
}

async fn remove_relation(
    state: &AppState,
    session: &Session,
    recipe_id: i32,
    kind: RelationKind,
) -> Result<axum::response::Response, Error> {
    let user_id = require_user_id(session).await?;

    RelationService::new(&state.db)
        .remove(kind, user_id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Adds a recipe to the current user's favorites
///
/// # Responses
/// - 201 (Created): Added
/// - 400 (Bad Request): Already favorited
/// - 401 (Unauthorized): No authenticated session
/// - 404 (Not Found): No recipe with this id
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 201, description = "Added to favorites", body = DetailDto),
        (status = 400, description = "Already favorited", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    add_relation(&state, &session, recipe_id, RelationKind::Favorite).await
}

/// Removes a recipe from the current user's favorites
///
/// # Responses
/// - 204 (No Content): Removed
/// - 400 (Bad Request): Not in favorites
/// - 401 (Unauthorized): No authenticated session
/// - 404 (Not Found): No recipe with this id
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Removed from favorites"),
        (status = 400, description = "Not in favorites", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    remove_relation(&state, &session, recipe_id, RelationKind::Favorite).await
}

/// Adds a recipe to the current user's shopping cart
///
/// # Responses
/// - 201 (Created): Added
/// - 400 (Bad Request): Already in the cart
/// - 401 (Unauthorized): No authenticated session
/// - 404 (Not Found): No recipe with this id
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 201, description = "Added to the shopping cart", body = DetailDto),
        (status = 400, description = "Already in the shopping cart", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    add_relation(&state, &session, recipe_id, RelationKind::ShoppingCart).await
}

/// Removes a recipe from the current user's shopping cart
///
/// # Responses
/// - 204 (No Content): Removed
/// - 400 (Bad Request): Not in the cart
/// - 401 (Unauthorized): No authenticated session
/// - 404 (Not Found): No recipe with this id
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Removed from the shopping cart"),
        (status = 400, description = "Not in the shopping cart", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    remove_relation(&state, &session, recipe_id, RelationKind::ShoppingCart).await
}

/// Downloads the aggregated shopping list as a text file
///
/// Sums ingredient amounts across every recipe in the viewer's cart,
/// grouped by ingredient and sorted by name.
///
/// # Responses
/// - 200 (OK): The plain-text list, or a JSON detail when the cart is empty
/// - 401 (Unauthorized): No authenticated session
#[utoipa::path(
    get,
    path = "/api/recipes/download_shopping_cart",
    tag = RECIPE_TAG,
    responses(
        (status = 200, description = "The aggregated shopping list"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_shopping_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let items = ShoppingListService::new(&state.db).aggregate(user_id).await?;

    if items.is_empty() {
        return Ok((
            StatusCode::OK,
            Json(DetailDto {
                detail: "Shopping cart is empty.".to_string(),
            }),
        )
            .into_response());
    }

    let body = ShoppingListService::render(&items);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"shopping_list.txt\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// Returns a short link for a recipe
///
/// # Responses
/// - 200 (OK): The short link
/// - 404 (Not Found): No recipe with this id
#[utoipa::path(
    get,
    path = "/api/recipes/{id}/get_short_link",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The short link", body = ShortLinkDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_short_link(
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    RecipeRepository::new(&state.db)
        .get_by_id(recipe_id)
        .await?
        .ok_or(RecipeError::NotFound(recipe_id))?;

    Ok((
        StatusCode::OK,
        Json(ShortLinkDto {
            short_link: format!("/s/{}", recipe_id),
        }),
    )
        .into_response())
}

/// Redirects a short link to the recipe page
pub async fn short_link_redirect(
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    RecipeRepository::new(&state.db)
        .get_by_id(recipe_id)
        .await?
        .ok_or(RecipeError::NotFound(recipe_id))?;

    Ok(Redirect::temporary(&format!("/recipes/{}", recipe_id)))
}
