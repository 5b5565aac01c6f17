//! Recipe and recipe line-item repository.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Column values shared by recipe create and update.
pub struct RecipeWrite {
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
    /// (ingredient_id, amount) line items; the caller has already validated
    /// them.
    pub line_items: Vec<(i32, i32)>,
}

/// Viewer-independent narrowing of the recipe listing.
#[derive(Default)]
pub struct RecipeListFilter {
    pub author_id: Option<i32>,
    pub favorited_by: Option<i32>,
    pub not_favorited_by: Option<i32>,
    pub in_cart_of: Option<i32>,
    pub not_in_cart_of: Option<i32>,
}

/// Repository for recipe rows and their ingredient line items.
pub struct RecipeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeRepository<'a> {
    /// Creates a new instance of [`RecipeRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a recipe and its line items
    pub async fn create(
        &self,
        author_id: i32,
        write: RecipeWrite,
    ) -> Result<entity::recipe::Model, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            name: ActiveValue::Set(write.name),
            image: ActiveValue::Set(write.image),
            text: ActiveValue::Set(write.text),
            cooking_time: ActiveValue::Set(write.cooking_time),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let recipe = recipe.insert(self.db).await?;

        self.insert_line_items(recipe.id, &write.line_items).await?;

        Ok(recipe)
    }

    /// Updates a recipe's columns and replaces its line items
    pub async fn update(
        &self,
        recipe: entity::recipe::Model,
        write: RecipeWrite,
    ) -> Result<entity::recipe::Model, DbErr> {
        let recipe_id = recipe.id;

        let mut active: entity::recipe::ActiveModel = recipe.into();
        active.name = ActiveValue::Set(write.name);
        active.image = ActiveValue::Set(write.image);
        active.text = ActiveValue::Set(write.text);
        active.cooking_time = ActiveValue::Set(write.cooking_time);

        let recipe = active.update(self.db).await?;

        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        self.insert_line_items(recipe_id, &write.line_items).await?;

        Ok(recipe)
    }

    async fn insert_line_items(
        &self,
        recipe_id: i32,
        line_items: &[(i32, i32)],
    ) -> Result<(), DbErr> {
        let rows: Vec<entity::recipe_ingredient::ActiveModel> = line_items
            .iter()
            .map(|&(ingredient_id, amount)| entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                ingredient_id: ActiveValue::Set(ingredient_id),
                amount: ActiveValue::Set(amount),
            })
            .collect();

        if rows.is_empty() {
            return Ok(());
        }

        entity::prelude::RecipeIngredient::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds a recipe by id
    pub async fn get_by_id(&self, recipe_id: i32) -> Result<Option<entity::recipe::Model>, DbErr> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .one(self.db)
            .await
    }

    /// Finds a recipe together with its author
    pub async fn get_with_author(
        &self,
        recipe_id: i32,
    ) -> Result<Option<(entity::recipe::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Lists recipes newest-first with their authors, returning the window
    /// and the total count
    pub async fn list(
        &self,
        filter: &RecipeListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<(entity::recipe::Model, Option<entity::user::Model>)>, u64), DbErr> {
        let mut query = entity::prelude::Recipe::find();

        if let Some(author_id) = filter.author_id {
            query = query.filter(entity::recipe::Column::AuthorId.eq(author_id));
        }
        if let Some(user_id) = filter.favorited_by {
            query = query.filter(
                entity::recipe::Column::Id.in_subquery(favorite_recipe_ids_subquery(user_id)),
            );
        }
        if let Some(user_id) = filter.not_favorited_by {
            query = query.filter(
                entity::recipe::Column::Id.not_in_subquery(favorite_recipe_ids_subquery(user_id)),
            );
        }
        if let Some(user_id) = filter.in_cart_of {
            query = query
                .filter(entity::recipe::Column::Id.in_subquery(cart_recipe_ids_subquery(user_id)));
        }
        if let Some(user_id) = filter.not_in_cart_of {
            query = query.filter(
                entity::recipe::Column::Id.not_in_subquery(cart_recipe_ids_subquery(user_id)),
            );
        }

        let count = query.clone().count(self.db).await?;
        let recipes = query
            .order_by_desc(entity::recipe::Column::CreatedAt)
            .order_by_desc(entity::recipe::Column::Id)
            .offset(offset)
            .limit(limit)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok((recipes, count))
    }

    /// Lists an author's recipes newest-first, truncated to `limit`
    pub async fn list_by_author(
        &self,
        author_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::recipe::Model>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::recipe::Column::CreatedAt)
            .order_by_desc(entity::recipe::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Counts an author's recipes
    pub async fn count_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await
    }

    /// Deletes a recipe; line items, favorites and cart entries cascade at
    /// the storage layer.
    ///
    /// Returns OK regardless of the recipe existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Recipe::delete_by_id(recipe_id)
            .exec(self.db)
            .await
    }

    /// Fetches a recipe's line items with their ingredients
    pub async fn line_items(
        &self,
        recipe_id: i32,
    ) -> Result<
        Vec<(
            entity::recipe_ingredient::Model,
            Option<entity::ingredient::Model>,
        )>,
        DbErr,
    > {
        self.line_items_for_recipes(&[recipe_id]).await
    }

    /// Fetches the line items of all given recipes with their ingredients
    pub async fn line_items_for_recipes(
        &self,
        recipe_ids: &[i32],
    ) -> Result<
        Vec<(
            entity::recipe_ingredient::Model,
            Option<entity::ingredient::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::RecipeIngredient::find()
            .filter(
                entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids.iter().copied()),
            )
            .order_by_asc(entity::recipe_ingredient::Column::RecipeId)
            .order_by_asc(entity::recipe_ingredient::Column::IngredientId)
            .find_also_related(entity::prelude::Ingredient)
            .all(self.db)
            .await
    }
}

fn favorite_recipe_ids_subquery(user_id: i32) -> sea_orm::sea_query::SelectStatement {
    Query::select()
        .column(entity::favorite_recipe::Column::RecipeId)
        .from(entity::prelude::FavoriteRecipe)
        .and_where(Expr::col(entity::favorite_recipe::Column::UserId).eq(user_id))
        .to_owned()
}

fn cart_recipe_ids_subquery(user_id: i32) -> sea_orm::sea_query::SelectStatement {
    Query::select()
        .column(entity::shopping_cart::Column::RecipeId)
        .from(entity::prelude::ShoppingCart)
        .and_where(Expr::col(entity::shopping_cart::Column::UserId).eq(user_id))
        .to_owned()
}
