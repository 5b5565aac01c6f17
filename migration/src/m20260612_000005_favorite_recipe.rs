use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260612_000001_larder_user::LarderUser, m20260612_000003_recipe::Recipe};

static FK_FAVORITE_RECIPE_USER_ID: &str = "fk-favorite_recipe-user_id";
static FK_FAVORITE_RECIPE_RECIPE_ID: &str = "fk-favorite_recipe-recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteRecipe::Table)
                    .if_not_exists()
                    .col(integer(FavoriteRecipe::UserId))
                    .col(integer(FavoriteRecipe::RecipeId))
                    .primary_key(
                        Index::create()
                            .col(FavoriteRecipe::UserId)
                            .col(FavoriteRecipe::RecipeId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_RECIPE_USER_ID)
                    .from_tbl(FavoriteRecipe::Table)
                    .from_col(FavoriteRecipe::UserId)
                    .to_tbl(LarderUser::Table)
                    .to_col(LarderUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_RECIPE_RECIPE_ID)
                    .from_tbl(FavoriteRecipe::Table)
                    .from_col(FavoriteRecipe::RecipeId)
                    .to_tbl(Recipe::Table)
                    .to_col(Recipe::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_RECIPE_RECIPE_ID)
                    .table(FavoriteRecipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_RECIPE_USER_ID)
                    .table(FavoriteRecipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteRecipe::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FavoriteRecipe {
    Table,
    UserId,
    RecipeId,
}
