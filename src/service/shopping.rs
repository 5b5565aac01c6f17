//! Shopping-list aggregation.
//!
//! Collects every ingredient line item reachable through the user's cart,
//! groups by ingredient identity and sums the amounts. Grouping keys on the
//! ingredient id, never the name string: two ingredients that share a name
//! but differ in unit stay separate lines.

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::{RecipeRepository, RelationRepository},
    error::Error,
    model::{relation::RelationKind, shopping::ShoppingListItem},
};

/// Service computing the aggregated shopping list.
pub struct ShoppingListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingListService<'a> {
    /// Creates a new instance of [`ShoppingListService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregates the user's cart into summed per-ingredient totals, sorted
    /// by ingredient name (measurement unit as tiebreak).
    ///
    /// An empty cart yields an empty list. The result is independent of the
    /// order recipes were added to the cart.
    pub async fn aggregate(&self, user_id: i32) -> Result<Vec<ShoppingListItem>, Error> {
        let cart_recipe_ids = RelationRepository::new(self.db)
            .recipe_ids(RelationKind::ShoppingCart, user_id)
            .await?;

        if cart_recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        let line_items = RecipeRepository::new(self.db)
            .line_items_for_recipes(&cart_recipe_ids)
            .await?;

        let mut totals: BTreeMap<i32, ShoppingListItem> = BTreeMap::new();
        for (line_item, maybe_ingredient) in line_items {
            let ingredient = maybe_ingredient.ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find ingredient ID {} for recipe ID {}",
                    line_item.ingredient_id, line_item.recipe_id
                ))
            })?;

            totals
                .entry(ingredient.id)
                .and_modify(|item| item.total_amount += i64::from(line_item.amount))
                .or_insert(ShoppingListItem {
                    name: ingredient.name,
                    measurement_unit: ingredient.measurement_unit,
                    total_amount: i64::from(line_item.amount),
                });
        }

        let mut items: Vec<ShoppingListItem> = totals.into_values().collect();
        items.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.measurement_unit.cmp(&b.measurement_unit))
        });

        Ok(items)
    }

    /// Renders the aggregate as the plain-text download body.
    pub fn render(items: &[ShoppingListItem]) -> String {
        let mut text = String::from("Shopping list:\n\n");
        for item in items {
            text.push_str(&format!(
                "- {} ({}): {}\n",
                item.name, item.measurement_unit, item.total_amount
            ));
        }

        text
    }
}
