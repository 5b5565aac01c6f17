//! Relationship-invariant guard for favorites, cart entries and
//! subscriptions.
//!
//! Every operation pre-checks the relation state for a clear error, then
//! leans on the storage layer's composite primary keys as the backstop:
//! when two identical adds race, the loser's insert fails the unique
//! constraint and is reported exactly like the pre-checked duplicate.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::{RecipeRepository, RelationRepository, SubscriptionRepository, UserRepository},
    error::{recipe::RecipeError, relation::RelationError, user::UserError, Error},
    model::relation::RelationKind,
};

/// Service enforcing the favorite/cart/subscription invariants.
pub struct RelationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelationService<'a> {
    /// Creates a new instance of [`RelationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a recipe to the user's collection of the given kind.
    ///
    /// Fails with AlreadyExists when the row is present, whether observed by
    /// the pre-check or by losing a race on the storage constraint.
    pub async fn add(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<(), Error> {
        RecipeRepository::new(self.db)
            .get_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::NotFound(recipe_id))?;

        let relation_repository = RelationRepository::new(self.db);

        if relation_repository.exists(kind, user_id, recipe_id).await? {
            return Err(RelationError::AlreadyExists(kind).into());
        }

        match relation_repository.add(kind, user_id, recipe_id).await {
            Ok(()) => Ok(()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(RelationError::AlreadyExists(kind).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a recipe from the user's collection of the given kind.
    pub async fn remove(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<(), Error> {
        RecipeRepository::new(self.db)
            .get_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::NotFound(recipe_id))?;

        let result = RelationRepository::new(self.db)
            .remove(kind, user_id, recipe_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(RelationError::NotInCollection(kind).into());
        }

        Ok(())
    }

    /// Subscribes `user_id` to `author_id`, returning the author.
    pub async fn follow(
        &self,
        user_id: i32,
        author_id: i32,
    ) -> Result<entity::user::Model, Error> {
        let author = UserRepository::new(self.db)
            .get_by_id(author_id)
            .await?
            .ok_or(UserError::NotFound(author_id))?;

        if user_id == author_id {
            return Err(RelationError::SelfSubscription.into());
        }

        let subscription_repository = SubscriptionRepository::new(self.db);

        if subscription_repository.exists(user_id, author_id).await? {
            return Err(RelationError::AlreadySubscribed.into());
        }

        match subscription_repository.add(user_id, author_id).await {
            Ok(()) => Ok(author),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(RelationError::AlreadySubscribed.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the subscription from `user_id` to `author_id`.
    pub async fn unfollow(&self, user_id: i32, author_id: i32) -> Result<(), Error> {
        UserRepository::new(self.db)
            .get_by_id(author_id)
            .await?
            .ok_or(UserError::NotFound(author_id))?;

        let result = SubscriptionRepository::new(self.db)
            .remove(user_id, author_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(RelationError::NotSubscribed.into());
        }

        Ok(())
    }
}
