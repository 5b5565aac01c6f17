//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! collected into a unified document served by Swagger UI at `/api/docs`.
//! The short-link redirect and media file serving sit outside the OpenAPI
//! surface.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be
/// given state and a session layer.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Larder", description = "Larder API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "User, profile, and subscription API routes"),
        (name = controller::ingredient::INGREDIENT_TAG, description = "Ingredient catalog API routes"),
        (name = controller::recipe::RECIPE_TAG, description = "Recipe, favorite, and shopping cart API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::user::register,
            controller::user::list_users
        ))
        .routes(routes!(controller::user::get_me))
        .routes(routes!(
            controller::user::update_avatar,
            controller::user::delete_avatar
        ))
        .routes(routes!(controller::user::get_subscriptions))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(
            controller::user::subscribe,
            controller::user::unsubscribe
        ))
        .routes(routes!(controller::ingredient::list_ingredients))
        .routes(routes!(controller::ingredient::get_ingredient))
        .routes(routes!(
            controller::recipe::list_recipes,
            controller::recipe::create_recipe
        ))
        .routes(routes!(controller::recipe::download_shopping_cart))
        .routes(routes!(
            controller::recipe::get_recipe,
            controller::recipe::update_recipe,
            controller::recipe::delete_recipe
        ))
        .routes(routes!(
            controller::recipe::add_favorite,
            controller::recipe::remove_favorite
        ))
        .routes(routes!(
            controller::recipe::add_to_cart,
            controller::recipe::remove_from_cart
        ))
        .routes(routes!(controller::recipe::get_short_link))
        .split_for_parts();

    let routes = routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route("/s/{id}", get(controller::recipe::short_link_redirect))
        .route("/media/{*path}", get(controller::media::serve_media));

    routes
}
