//! User-facing DTOs for accounts, profiles and subscriptions.

use serde::{Deserialize, Serialize};

use crate::model::recipe::RecipeSummaryDto;

/// A user profile as seen by a particular viewer.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the viewer follows this user; always false for anonymous
    /// viewers.
    pub is_subscribed: bool,
    /// URL of the avatar image, when one was uploaded.
    pub avatar: Option<String>,
}

/// A followed author together with their recipes.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserWithRecipesDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub avatar: Option<String>,
    /// The author's recipes, truncated to the caller's `recipes_limit`.
    pub recipes: Vec<RecipeSummaryDto>,
    /// Total number of recipes the author has published.
    pub recipes_count: u64,
}

/// Registration payload.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct RegisterUserDto {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Login payload.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Avatar update payload: a base64 data-URI image.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SetAvatarDto {
    pub avatar: Option<String>,
}

/// Avatar update response carrying the stored image URL.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AvatarDto {
    pub avatar: Option<String>,
}
