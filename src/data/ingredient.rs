//! Ingredient catalog repository.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository for ingredient rows.
pub struct IngredientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientRepository<'a> {
    /// Creates a new instance of [`IngredientRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new ingredient
    pub async fn create(
        &self,
        name: &str,
        measurement_unit: &str,
    ) -> Result<entity::ingredient::Model, DbErr> {
        let ingredient = entity::ingredient::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            measurement_unit: ActiveValue::Set(measurement_unit.to_string()),
            ..Default::default()
        };

        ingredient.insert(self.db).await
    }

    /// Finds an ingredient by id
    pub async fn get_by_id(
        &self,
        ingredient_id: i32,
    ) -> Result<Option<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find_by_id(ingredient_id)
            .one(self.db)
            .await
    }

    /// Finds all ingredients matching the given ids
    pub async fn get_by_ids(
        &self,
        ingredient_ids: &[i32],
    ) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Id.is_in(ingredient_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Lists ingredients ordered by name, optionally narrowed to names
    /// containing `name` (case-insensitive)
    pub async fn search(&self, name: Option<&str>) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        let mut query = entity::prelude::Ingredient::find();

        if let Some(name) = name {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::prelude::Ingredient,
                    entity::ingredient::Column::Name,
                ))))
                .like(format!("%{}%", name.to_lowercase())),
            );
        }

        query
            .order_by_asc(entity::ingredient::Column::Name)
            .all(self.db)
            .await
    }
}
