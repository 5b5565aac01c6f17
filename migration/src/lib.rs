pub use sea_orm_migration::prelude::*;

mod m20260612_000001_larder_user;
mod m20260612_000002_ingredient;
mod m20260612_000003_recipe;
mod m20260612_000004_recipe_ingredient;
mod m20260612_000005_favorite_recipe;
mod m20260612_000006_shopping_cart;
mod m20260612_000007_subscription;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260612_000001_larder_user::Migration),
            Box::new(m20260612_000002_ingredient::Migration),
            Box::new(m20260612_000003_recipe::Migration),
            Box::new(m20260612_000004_recipe_ingredient::Migration),
            Box::new(m20260612_000005_favorite_recipe::Migration),
            Box::new(m20260612_000006_shopping_cart::Migration),
            Box::new(m20260612_000007_subscription::Migration),
        ]
    }
}
