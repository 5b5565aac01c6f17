//! User account, profile, avatar and subscription routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    constant::DEFAULT_RECIPES_LIMIT,
    controller::util::{current_user_id, require_user_id},
    error::{auth::AuthError, user::UserError, Error},
    model::{
        api::{ErrorDto, Paginated},
        app::AppState,
        user::{AvatarDto, RegisterUserDto, SetAvatarDto, UserDto, UserWithRecipesDto},
    },
    service::user::UserService,
    service::relation::RelationService,
    util::pagination::{paginate, PageParams},
};

/// OpenAPI tag for user routes.
pub static USER_TAG: &str = "users";

/// Pagination window plus the per-author recipe truncation limit.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct SubscriptionParams {
    /// Page size for the author listing.
    pub limit: Option<u64>,
    /// Number of authors to skip.
    pub offset: Option<u64>,
    /// Maximum recipes embedded per author; defaults to 10.
    pub recipes_limit: Option<u64>,
}

/// Per-author recipe truncation limit.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct RecipesLimitParams {
    /// Maximum recipes embedded in the response; defaults to 10.
    pub recipes_limit: Option<u64>,
}

/// Registers a new user account
///
/// # Responses
/// - 201 (Created): The created user
/// - 400 (Bad Request): Validation failure (lengths, username pattern,
///   duplicate email or username)
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(UserService::to_dto(user, false))).into_response())
}

/// Lists users ordered by username
///
/// # Responses
/// - 200 (OK): A page of users projected for the viewer
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "A page of users", body = Paginated<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let viewer = current_user_id(&session).await?;

    let (users, count) = UserService::new(&state.db)
        .list(viewer, params.limit(), params.offset())
        .await?;

    Ok((
        StatusCode::OK,
        Json(paginate("/api/users", &params, count, users)),
    )
        .into_response())
}

/// Retrieves the currently logged-in user
///
/// # Responses
/// - 200 (OK): The current user
/// - 401 (Unauthorized): No authenticated session
/// - 404 (Not Found): Session references a deleted user; the session is
///   cleared
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let user = match UserService::new(&state.db).get_user(user_id).await? {
        Some(user) => user,
        None => {
            // Clear session for user not found in database
            session.clear().await;

            tracing::warn!(
                "Failed to find user ID {} in database despite having an active session;
                cleared session for user, they will need to relog to fix",
                user_id
            );

            return Err(AuthError::UserNotInDatabase(user_id).into());
        }
    };

    Ok((StatusCode::OK, Json(UserService::to_dto(user, false))).into_response())
}

/// Retrieves a user profile by id
///
/// `is_subscribed` reflects whether the viewer follows this user.
///
/// # Responses
/// - 200 (OK): The profile
/// - 404 (Not Found): No user with this id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The profile", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = current_user_id(&session).await?;

    let profile = UserService::new(&state.db).profile(viewer, user_id).await?;

    Ok((StatusCode::OK, Json(profile)).into_response())
}

/// Replaces the current user's avatar with a base64-encoded image
///
/// # Responses
/// - 200 (OK): The stored avatar URL
/// - 400 (Bad Request): Missing or undecodable image payload
/// - 401 (Unauthorized): No authenticated session
#[utoipa::path(
    put,
    path = "/api/users/me/avatar",
    tag = USER_TAG,
    request_body = SetAvatarDto,
    responses(
        (status = 200, description = "Avatar stored", body = AvatarDto),
        (status = 400, description = "Missing or invalid image", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_avatar(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetAvatarDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let data_uri = payload.avatar.as_deref().ok_or(UserError::MissingAvatar)?;

    let url = UserService::new(&state.db)
        .set_avatar(&state.media, user_id, data_uri)
        .await?;

    Ok((StatusCode::OK, Json(AvatarDto { avatar: Some(url) })).into_response())
}

/// Removes the current user's avatar
///
/// # Responses
/// - 204 (No Content): Avatar removed; a no-op when none was set
/// - 401 (Unauthorized): No authenticated session
#[utoipa::path(
    delete,
    path = "/api/users/me/avatar",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Avatar removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_avatar(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    UserService::new(&state.db)
        .delete_avatar(&state.media, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Subscribes the current user to an author
///
/// # Responses
/// - 201 (Created): The author with their recipes
/// - 400 (Bad Request): Self-subscription or duplicate subscription
/// - 401 (Unauthorized): No authenticated session
/// - 404 (Not Found): No user with this id
#[utoipa::path(
    post,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Author id"), RecipesLimitParams),
    responses(
        (status = 201, description = "Subscribed", body = UserWithRecipesDto),
        (status = 400, description = "Self or duplicate subscription", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
    Query(params): Query<RecipesLimitParams>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let author = RelationService::new(&state.db)
        .follow(user_id, author_id)
        .await?;

    let recipes_limit = params.recipes_limit.unwrap_or(DEFAULT_RECIPES_LIMIT);
    let dto = UserService::new(&state.db)
        .with_recipes(author, true, recipes_limit)
        .await?;

    Ok((StatusCode::CREATED, Json(dto)).into_response())
}

/// Unsubscribes the current user from an author
///
/// # Responses
/// - 204 (No Content): Subscription removed
/// - 400 (Bad Request): Not subscribed to this author
/// - 401 (Unauthorized): No authenticated session
/// - 404 (Not Found): No user with this id
#[utoipa::path(
    delete,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 204, description = "Unsubscribed"),
        (status = 400, description = "Not subscribed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    RelationService::new(&state.db)
        .unfollow(user_id, author_id)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Lists the authors the current user follows
///
/// Each author carries their recipes truncated to `recipes_limit` and the
/// total recipe count.
///
/// # Responses
/// - 200 (OK): A page of followed authors
/// - 401 (Unauthorized): No authenticated session
#[utoipa::path(
    get,
    path = "/api/users/subscriptions",
    tag = USER_TAG,
    params(SubscriptionParams),
    responses(
        (status = 200, description = "A page of followed authors", body = Paginated<UserWithRecipesDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SubscriptionParams>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&session).await?;

    let page = PageParams {
        limit: params.limit,
        offset: params.offset,
    };
    let recipes_limit = params.recipes_limit.unwrap_or(DEFAULT_RECIPES_LIMIT);

    let (authors, count) = UserService::new(&state.db)
        .subscriptions(user_id, recipes_limit, page.limit(), page.offset())
        .await?;

    Ok((
        StatusCode::OK,
        Json(paginate("/api/users/subscriptions", &page, count, authors)),
    )
        .into_response())
}
