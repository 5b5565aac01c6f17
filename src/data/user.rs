//! User table repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Column values for a new user row.
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

/// Repository for user rows.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user
    pub async fn create(&self, new_user: NewUser) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(new_user.email),
            username: ActiveValue::Set(new_user.username),
            first_name: ActiveValue::Set(new_user.first_name),
            last_name: ActiveValue::Set(new_user.last_name),
            password_hash: ActiveValue::Set(new_user.password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Finds a user by id
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user by email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a user by username
    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Lists users ordered by username, returning the window and the total
    /// count
    pub async fn list(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let query = entity::prelude::User::find();

        let count = query.clone().count(self.db).await?;
        let users = query
            .order_by_asc(entity::user::Column::Username)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok((users, count))
    }

    /// Replaces the user's avatar path
    pub async fn set_avatar(
        &self,
        user: entity::user::Model,
        avatar: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let mut user: entity::user::ActiveModel = user.into();
        user.avatar = ActiveValue::Set(avatar);

        user.update(self.db).await
    }
}
