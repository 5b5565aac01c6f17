//! Recipe, ingredient and relation fixtures.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{error::TestError, TestContext};

/// Inserts recipe-side rows with deterministic test values.
pub struct RecipeFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl TestContext {
    /// Access recipe fixtures
    pub fn recipe(&self) -> RecipeFixtures<'_> {
        RecipeFixtures { db: &self.db }
    }
}

impl<'a> RecipeFixtures<'a> {
    /// Insert an ingredient.
    pub async fn insert_ingredient(
        &self,
        name: &str,
        measurement_unit: &str,
    ) -> Result<entity::ingredient::Model, TestError> {
        let ingredient = entity::ingredient::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            measurement_unit: ActiveValue::Set(measurement_unit.to_string()),
            ..Default::default()
        };

        Ok(ingredient.insert(self.db).await?)
    }

    /// Insert recipe `n` owned by `author_id`, without line items.
    pub async fn insert_recipe(
        &self,
        author_id: i32,
        n: u32,
    ) -> Result<entity::recipe::Model, TestError> {
        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            name: ActiveValue::Set(format!("Recipe {}", n)),
            image: ActiveValue::Set(format!("recipes/images/fixture{}.png", n)),
            text: ActiveValue::Set("Mix everything and cook.".to_string()),
            cooking_time: ActiveValue::Set(30),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(recipe.insert(self.db).await?)
    }

    /// Insert recipe `n` owned by `author_id` with the given
    /// (ingredient_id, amount) line items.
    pub async fn insert_recipe_with_ingredients(
        &self,
        author_id: i32,
        n: u32,
        line_items: &[(i32, i32)],
    ) -> Result<entity::recipe::Model, TestError> {
        let recipe = self.insert_recipe(author_id, n).await?;

        for &(ingredient_id, amount) in line_items {
            self.insert_line_item(recipe.id, ingredient_id, amount).await?;
        }

        Ok(recipe)
    }

    /// Insert a single (recipe, ingredient, amount) line item.
    pub async fn insert_line_item(
        &self,
        recipe_id: i32,
        ingredient_id: i32,
        amount: i32,
    ) -> Result<entity::recipe_ingredient::Model, TestError> {
        let line_item = entity::recipe_ingredient::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            ingredient_id: ActiveValue::Set(ingredient_id),
            amount: ActiveValue::Set(amount),
        };

        Ok(line_item.insert(self.db).await?)
    }

    /// Insert a favorite row for (user, recipe).
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<entity::favorite_recipe::Model, TestError> {
        let favorite = entity::favorite_recipe::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
        };

        Ok(favorite.insert(self.db).await?)
    }

    /// Insert a shopping-cart row for (user, recipe).
    pub async fn insert_cart_entry(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<entity::shopping_cart::Model, TestError> {
        let cart_entry = entity::shopping_cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
        };

        Ok(cart_entry.insert(self.db).await?)
    }
}
