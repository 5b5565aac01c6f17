use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LarderUser::Table)
                    .if_not_exists()
                    .col(pk_auto(LarderUser::Id))
                    .col(string_len_uniq(LarderUser::Email, 254))
                    .col(string_len_uniq(LarderUser::Username, 150))
                    .col(string_len(LarderUser::FirstName, 150))
                    .col(string_len(LarderUser::LastName, 150))
                    .col(string(LarderUser::PasswordHash))
                    .col(string_null(LarderUser::Avatar))
                    .col(timestamp(LarderUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LarderUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LarderUser {
    Table,
    Id,
    Email,
    Username,
    FirstName,
    LastName,
    PasswordHash,
    Avatar,
    CreatedAt,
}
