//! User and subscription fixtures.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{constant::TEST_PASSWORD, error::TestError, TestContext};

/// Inserts user rows with deterministic test values.
pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl TestContext {
    /// Access user fixtures
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { db: &self.db }
    }
}

impl<'a> UserFixtures<'a> {
    /// Insert user `n` with the standard test password.
    ///
    /// The email is `user{n}@example.com` and the username `user{n}`.
    pub async fn insert_user(&self, n: u32) -> Result<entity::user::Model, TestError> {
        self.insert_user_with_password(n, TEST_PASSWORD).await
    }

    /// Insert user `n` registered with the given password.
    pub async fn insert_user_with_password(
        &self,
        n: u32,
        password: &str,
    ) -> Result<entity::user::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("Failed to hash fixture password")
            .to_string();

        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(format!("user{}@example.com", n)),
            username: ActiveValue::Set(format!("user{}", n)),
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set(format!("User{}", n)),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    /// Insert a subscription from `user_id` to `author_id`.
    pub async fn insert_subscription(
        &self,
        user_id: i32,
        author_id: i32,
    ) -> Result<entity::subscription::Model, TestError> {
        let subscription = entity::subscription::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            author_id: ActiveValue::Set(author_id),
        };

        Ok(subscription.insert(self.db).await?)
    }
}
