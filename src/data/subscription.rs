//! Subscription (user follows author) repository.

use std::collections::HashSet;

use sea_orm::{
    sea_query::{Expr, ExprTrait, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository for subscription rows.
pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    /// Creates a new instance of [`SubscriptionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns true when `user_id` follows `author_id`
    pub async fn exists(&self, user_id: i32, author_id: i32) -> Result<bool, DbErr> {
        let found = entity::prelude::Subscription::find_by_id((user_id, author_id))
            .one(self.db)
            .await?;

        Ok(found.is_some())
    }

    /// Inserts a subscription row.
    ///
    /// A concurrent duplicate insert fails on the composite primary key; the
    /// caller turns that constraint violation into AlreadySubscribed.
    pub async fn add(&self, user_id: i32, author_id: i32) -> Result<(), DbErr> {
        entity::subscription::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            author_id: ActiveValue::Set(author_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a subscription row.
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn remove(&self, user_id: i32, author_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Subscription::delete_by_id((user_id, author_id))
            .exec(self.db)
            .await
    }

    /// The set of author ids the user follows, for per-viewer projection
    pub async fn author_id_set(&self, user_id: i32) -> Result<HashSet<i32>, DbErr> {
        let ids: Vec<i32> = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .select_only()
            .column(entity::subscription::Column::AuthorId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Lists the authors the user follows, returning the window and the
    /// total count
    pub async fn list_authors(
        &self,
        user_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let subquery = Query::select()
            .column(entity::subscription::Column::AuthorId)
            .from(entity::prelude::Subscription)
            .and_where(Expr::col(entity::subscription::Column::UserId).eq(user_id))
            .to_owned();

        let query = entity::prelude::User::find()
            .filter(entity::user::Column::Id.in_subquery(subquery));

        let count = query.clone().count(self.db).await?;
        let authors = query
            .order_by_asc(entity::user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok((authors, count))
    }
}

#[cfg(test)]
mod tests {
    use larder_test_utils::prelude::*;

    use crate::data::subscription::SubscriptionRepository;

    /// Expect add + exists + remove round trip
    #[tokio::test]
    async fn test_add_exists_remove() -> Result<(), TestError> {
        let test = TestBuilder::new().with_core_tables().build().await?;
        let follower = test.user().insert_user(1).await?;
        let author = test.user().insert_user(2).await?;
        let subscription_repository = SubscriptionRepository::new(&test.db);

        assert!(!subscription_repository.exists(follower.id, author.id).await?);

        subscription_repository.add(follower.id, author.id).await?;
        assert!(subscription_repository.exists(follower.id, author.id).await?);

        let result = subscription_repository
            .remove(follower.id, author.id)
            .await?;
        assert_eq!(result.rows_affected, 1);
        assert!(!subscription_repository.exists(follower.id, author.id).await?);

        Ok(())
    }

    /// Expect the subscription to be directed: following does not imply
    /// being followed
    #[tokio::test]
    async fn test_subscription_is_directed() -> Result<(), TestError> {
        let test = TestBuilder::new().with_core_tables().build().await?;
        let follower = test.user().insert_user(1).await?;
        let author = test.user().insert_user(2).await?;
        let subscription_repository = SubscriptionRepository::new(&test.db);

        subscription_repository.add(follower.id, author.id).await?;

        assert!(subscription_repository.exists(follower.id, author.id).await?);
        assert!(!subscription_repository.exists(author.id, follower.id).await?);

        Ok(())
    }

    /// Expect list_authors to window over followed authors only
    #[tokio::test]
    async fn test_list_authors() -> Result<(), TestError> {
        let test = TestBuilder::new().with_core_tables().build().await?;
        let follower = test.user().insert_user(1).await?;
        let author_a = test.user().insert_user(2).await?;
        let author_b = test.user().insert_user(3).await?;
        let ignored = test.user().insert_user(4).await?;
        let subscription_repository = SubscriptionRepository::new(&test.db);

        subscription_repository.add(follower.id, author_a.id).await?;
        subscription_repository.add(follower.id, author_b.id).await?;
        subscription_repository.add(ignored.id, follower.id).await?;

        let (authors, count) = subscription_repository
            .list_authors(follower.id, 10, 0)
            .await?;

        assert_eq!(count, 2);
        let ids: Vec<i32> = authors.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![author_a.id, author_b.id]);

        Ok(())
    }
}
