//! Recipe and ingredient DTOs.

use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// An ingredient from the catalog.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

/// A recipe line item: ingredient identity, unit and quantity.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeIngredientDto {
    /// The ingredient id.
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// An ingredient reference within a recipe submission.
#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct IngredientAmountDto {
    /// The ingredient id.
    pub id: i32,
    pub amount: i32,
}

/// A full recipe as seen by a particular viewer.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub author: UserDto,
    pub ingredients: Vec<RecipeIngredientDto>,
    /// Whether the viewer has favorited this recipe; false for anonymous
    /// viewers.
    pub is_favorited: bool,
    /// Whether the recipe sits in the viewer's shopping cart; false for
    /// anonymous viewers.
    pub is_in_shopping_cart: bool,
    pub name: String,
    /// URL of the recipe image.
    pub image: String,
    pub text: String,
    /// Minutes.
    pub cooking_time: i32,
}

/// The short recipe form embedded in subscription payloads.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeSummaryDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

/// Create/update recipe submission.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct RecipePayloadDto {
    pub ingredients: Vec<IngredientAmountDto>,
    pub name: String,
    /// Base64 data-URI image. Required on create; an update without it keeps
    /// the stored image.
    pub image: Option<String>,
    pub text: String,
    pub cooking_time: i32,
}

/// Response of the short-link endpoint.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShortLinkDto {
    #[serde(rename = "short-link")]
    pub short_link: String,
}
