//! Recipe service: structural validation, ownership checks and per-viewer
//! projection.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::{
    constant::{MAX_COOKING_TIME, MAX_INGREDIENT_AMOUNT, MIN_COOKING_TIME, MIN_INGREDIENT_AMOUNT},
    data::{
        recipe::RecipeWrite, IngredientRepository, RecipeListFilter, RecipeRepository,
        RelationRepository, SubscriptionRepository,
    },
    error::{recipe::RecipeError, Error},
    model::{
        recipe::{RecipeDto, RecipeIngredientDto, RecipePayloadDto, RecipeSummaryDto},
        relation::RelationKind,
    },
    service::user::UserService,
    util::image::MediaStore,
};

/// Caller-facing narrowing of the recipe listing.
#[derive(Default)]
pub struct RecipeListQuery {
    /// Only recipes by this author.
    pub author: Option<i32>,
    /// Only recipes the viewer has (true) or has not (false) favorited.
    pub is_favorited: Option<bool>,
    /// Only recipes in (true) or out of (false) the viewer's cart.
    pub is_in_shopping_cart: Option<bool>,
}

/// Service for recipe reads and author-gated mutations.
pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of [`RecipeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a recipe owned by `author_id` after validating the
    /// submission, returning it projected for the author.
    pub async fn create(
        &self,
        media: &MediaStore,
        author_id: i32,
        payload: RecipePayloadDto,
    ) -> Result<RecipeDto, Error> {
        let line_items = self.validate_payload(&payload).await?;

        let image_uri = payload.image.as_deref().ok_or(RecipeError::MissingImage)?;
        let image = media.save_data_uri("recipes/images", image_uri).await?;

        let recipe = RecipeRepository::new(self.db)
            .create(
                author_id,
                RecipeWrite {
                    name: payload.name,
                    image,
                    text: payload.text,
                    cooking_time: payload.cooking_time,
                    line_items,
                },
            )
            .await?;

        self.get(Some(author_id), recipe.id).await
    }

    /// Updates a recipe, replacing its ingredient line items.
    ///
    /// Only the author may update; an omitted image keeps the stored one.
    pub async fn update(
        &self,
        media: &MediaStore,
        actor_id: i32,
        recipe_id: i32,
        payload: RecipePayloadDto,
    ) -> Result<RecipeDto, Error> {
        let recipe_repository = RecipeRepository::new(self.db);

        let recipe = recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::NotFound(recipe_id))?;

        if recipe.author_id != actor_id {
            return Err(RecipeError::PermissionDenied.into());
        }

        let line_items = self.validate_payload(&payload).await?;

        let image = match payload.image.as_deref() {
            Some(image_uri) => media.save_data_uri("recipes/images", image_uri).await?,
            None => recipe.image.clone(),
        };

        recipe_repository
            .update(
                recipe,
                RecipeWrite {
                    name: payload.name,
                    image,
                    text: payload.text,
                    cooking_time: payload.cooking_time,
                    line_items,
                },
            )
            .await?;

        self.get(Some(actor_id), recipe_id).await
    }

    /// Deletes a recipe; only the author may delete. Line items, favorites
    /// and cart entries cascade.
    pub async fn delete(&self, actor_id: i32, recipe_id: i32) -> Result<(), Error> {
        let recipe_repository = RecipeRepository::new(self.db);

        let recipe = recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::NotFound(recipe_id))?;

        if recipe.author_id != actor_id {
            return Err(RecipeError::PermissionDenied.into());
        }

        recipe_repository.delete(recipe_id).await?;

        Ok(())
    }

    /// Retrieves a recipe projected for the given viewer.
    pub async fn get(&self, viewer: Option<i32>, recipe_id: i32) -> Result<RecipeDto, Error> {
        let recipe_repository = RecipeRepository::new(self.db);

        let (recipe, maybe_author) = recipe_repository
            .get_with_author(recipe_id)
            .await?
            .ok_or(RecipeError::NotFound(recipe_id))?;

        let author = maybe_author.ok_or_else(|| {
            // Would only occur if the foreign key constraint tying recipes to
            // their authors is not enforced
            Error::InternalError(format!(
                "Failed to find author ID {} for recipe ID {}",
                recipe.author_id, recipe.id
            ))
        })?;

        let line_items = recipe_repository.line_items(recipe_id).await?;

        let (is_favorited, is_in_shopping_cart, is_subscribed) = match viewer {
            Some(viewer_id) => {
                let relation_repository = RelationRepository::new(self.db);
                (
                    relation_repository
                        .exists(RelationKind::Favorite, viewer_id, recipe_id)
                        .await?,
                    relation_repository
                        .exists(RelationKind::ShoppingCart, viewer_id, recipe_id)
                        .await?,
                    SubscriptionRepository::new(self.db)
                        .exists(viewer_id, recipe.author_id)
                        .await?,
                )
            }
            None => (false, false, false),
        };

        let ingredients = line_items
            .into_iter()
            .map(|(line_item, maybe_ingredient)| {
                to_line_item_dto(line_item, maybe_ingredient)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self::to_dto(
            recipe,
            UserService::to_dto(author, is_subscribed),
            ingredients,
            is_favorited,
            is_in_shopping_cart,
        ))
    }

    /// Lists recipes newest-first, projected for the given viewer.
    ///
    /// The `is_favorited`/`is_in_shopping_cart` flags are viewer-scoped and
    /// ignored for anonymous callers.
    pub async fn list(
        &self,
        viewer: Option<i32>,
        query: &RecipeListQuery,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<RecipeDto>, u64), Error> {
        let mut filter = RecipeListFilter {
            author_id: query.author,
            ..Default::default()
        };

        if let Some(viewer_id) = viewer {
            match query.is_favorited {
                Some(true) => filter.favorited_by = Some(viewer_id),
                Some(false) => filter.not_favorited_by = Some(viewer_id),
                None => {}
            }
            match query.is_in_shopping_cart {
                Some(true) => filter.in_cart_of = Some(viewer_id),
                Some(false) => filter.not_in_cart_of = Some(viewer_id),
                None => {}
            }
        }

        let recipe_repository = RecipeRepository::new(self.db);

        let (rows, count) = recipe_repository.list(&filter, limit, offset).await?;

        let recipe_ids: Vec<i32> = rows.iter().map(|(recipe, _)| recipe.id).collect();
        let mut lines_by_recipe: HashMap<i32, Vec<RecipeIngredientDto>> = HashMap::new();
        for (line_item, maybe_ingredient) in recipe_repository
            .line_items_for_recipes(&recipe_ids)
            .await?
        {
            let recipe_id = line_item.recipe_id;
            let dto = to_line_item_dto(line_item, maybe_ingredient)?;
            lines_by_recipe.entry(recipe_id).or_default().push(dto);
        }

        let (favorites, cart, followed) = match viewer {
            Some(viewer_id) => {
                let relation_repository = RelationRepository::new(self.db);
                (
                    relation_repository
                        .recipe_id_set(RelationKind::Favorite, viewer_id)
                        .await?,
                    relation_repository
                        .recipe_id_set(RelationKind::ShoppingCart, viewer_id)
                        .await?,
                    SubscriptionRepository::new(self.db)
                        .author_id_set(viewer_id)
                        .await?,
                )
            }
            None => (HashSet::new(), HashSet::new(), HashSet::new()),
        };

        let mut recipes = Vec::with_capacity(rows.len());
        for (recipe, maybe_author) in rows {
            let author = maybe_author.ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find author ID {} for recipe ID {}",
                    recipe.author_id, recipe.id
                ))
            })?;

            let is_subscribed = followed.contains(&author.id);
            let is_favorited = favorites.contains(&recipe.id);
            let is_in_shopping_cart = cart.contains(&recipe.id);
            let ingredients = lines_by_recipe.remove(&recipe.id).unwrap_or_default();

            recipes.push(Self::to_dto(
                recipe,
                UserService::to_dto(author, is_subscribed),
                ingredients,
                is_favorited,
                is_in_shopping_cart,
            ));
        }

        Ok((recipes, count))
    }

    /// Projects a recipe row and its pre-resolved viewer relations into the
    /// full DTO.
    pub fn to_dto(
        recipe: entity::recipe::Model,
        author: crate::model::user::UserDto,
        ingredients: Vec<RecipeIngredientDto>,
        is_favorited: bool,
        is_in_shopping_cart: bool,
    ) -> RecipeDto {
        RecipeDto {
            id: recipe.id,
            author,
            ingredients,
            is_favorited,
            is_in_shopping_cart,
            name: recipe.name,
            image: MediaStore::url(&recipe.image),
            text: recipe.text,
            cooking_time: recipe.cooking_time,
        }
    }

    /// Projects recipe rows into the short form embedded in subscription
    /// payloads.
    pub fn summaries(recipes: Vec<entity::recipe::Model>) -> Vec<RecipeSummaryDto> {
        recipes
            .into_iter()
            .map(|recipe| RecipeSummaryDto {
                id: recipe.id,
                name: recipe.name,
                image: MediaStore::url(&recipe.image),
                cooking_time: recipe.cooking_time,
            })
            .collect()
    }

    /// Checks the structural invariants of a submission and resolves the
    /// line items, without writing anything.
    async fn validate_payload(&self, payload: &RecipePayloadDto) -> Result<Vec<(i32, i32)>, Error> {
        if payload.ingredients.is_empty() {
            return Err(RecipeError::EmptyIngredients.into());
        }

        let mut seen = HashSet::new();
        for line_item in &payload.ingredients {
            if !seen.insert(line_item.id) {
                return Err(RecipeError::DuplicateIngredients.into());
            }
            if !(MIN_INGREDIENT_AMOUNT..=MAX_INGREDIENT_AMOUNT).contains(&line_item.amount) {
                return Err(RecipeError::AmountOutOfRange(line_item.amount).into());
            }
        }

        if !(MIN_COOKING_TIME..=MAX_COOKING_TIME).contains(&payload.cooking_time) {
            return Err(RecipeError::CookingTimeOutOfRange(payload.cooking_time).into());
        }

        let ids: Vec<i32> = payload.ingredients.iter().map(|i| i.id).collect();
        let existing: HashSet<i32> = IngredientRepository::new(self.db)
            .get_by_ids(&ids)
            .await?
            .into_iter()
            .map(|ingredient| ingredient.id)
            .collect();

        if let Some(missing) = ids.iter().find(|id| !existing.contains(id)) {
            return Err(RecipeError::UnknownIngredient(*missing).into());
        }

        Ok(payload
            .ingredients
            .iter()
            .map(|line_item| (line_item.id, line_item.amount))
            .collect())
    }
}

fn to_line_item_dto(
    line_item: entity::recipe_ingredient::Model,
    maybe_ingredient: Option<entity::ingredient::Model>,
) -> Result<RecipeIngredientDto, Error> {
    let ingredient = maybe_ingredient.ok_or_else(|| {
        Error::InternalError(format!(
            "Failed to find ingredient ID {} for recipe ID {}",
            line_item.ingredient_id, line_item.recipe_id
        ))
    })?;

    Ok(RecipeIngredientDto {
        id: ingredient.id,
        name: ingredient.name,
        measurement_unit: ingredient.measurement_unit,
        amount: line_item.amount,
    })
}
