//! Repository for the user-recipe relation tables.
//!
//! Favorites and shopping-cart entries have an identical (user, recipe)
//! shape; every query takes the [`RelationKind`] as a parameter instead of
//! existing twice.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QuerySelect,
};

use crate::model::relation::RelationKind;

/// Repository for favorite and shopping-cart rows.
pub struct RelationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelationRepository<'a> {
    /// Creates a new instance of [`RelationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns true when the (user, recipe) row exists for the kind
    pub async fn exists(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<bool, DbErr> {
        let found = match kind {
            RelationKind::Favorite => entity::prelude::FavoriteRecipe::find_by_id((
                user_id, recipe_id,
            ))
            .one(self.db)
            .await?
            .is_some(),
            RelationKind::ShoppingCart => entity::prelude::ShoppingCart::find_by_id((
                user_id, recipe_id,
            ))
            .one(self.db)
            .await?
            .is_some(),
        };

        Ok(found)
    }

    /// Inserts the (user, recipe) row for the kind.
    ///
    /// A concurrent duplicate insert fails on the composite primary key; the
    /// caller turns that constraint violation into AlreadyExists.
    pub async fn add(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<(), DbErr> {
        match kind {
            RelationKind::Favorite => {
                entity::favorite_recipe::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    recipe_id: ActiveValue::Set(recipe_id),
                }
                .insert(self.db)
                .await?;
            }
            RelationKind::ShoppingCart => {
                entity::shopping_cart::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    recipe_id: ActiveValue::Set(recipe_id),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Deletes the (user, recipe) row for the kind.
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn remove(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        match kind {
            RelationKind::Favorite => {
                entity::prelude::FavoriteRecipe::delete_by_id((user_id, recipe_id))
                    .exec(self.db)
                    .await
            }
            RelationKind::ShoppingCart => {
                entity::prelude::ShoppingCart::delete_by_id((user_id, recipe_id))
                    .exec(self.db)
                    .await
            }
        }
    }

    /// Lists the recipe ids in the user's collection of the kind
    pub async fn recipe_ids(
        &self,
        kind: RelationKind,
        user_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        match kind {
            RelationKind::Favorite => {
                entity::prelude::FavoriteRecipe::find()
                    .filter(entity::favorite_recipe::Column::UserId.eq(user_id))
                    .select_only()
                    .column(entity::favorite_recipe::Column::RecipeId)
                    .into_tuple()
                    .all(self.db)
                    .await
            }
            RelationKind::ShoppingCart => {
                entity::prelude::ShoppingCart::find()
                    .filter(entity::shopping_cart::Column::UserId.eq(user_id))
                    .select_only()
                    .column(entity::shopping_cart::Column::RecipeId)
                    .into_tuple()
                    .all(self.db)
                    .await
            }
        }
    }

    /// The user's collection of the kind as a set, for per-viewer projection
    pub async fn recipe_id_set(
        &self,
        kind: RelationKind,
        user_id: i32,
    ) -> Result<HashSet<i32>, DbErr> {
        Ok(self.recipe_ids(kind, user_id).await?.into_iter().collect())
    }
}
