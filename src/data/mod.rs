//! Database repositories.
//!
//! Each repository wraps a borrowed [`sea_orm::DatabaseConnection`] and
//! exposes the queries one table (or one tightly-coupled pair of tables)
//! needs. Business rules live in the service layer; repositories only talk
//! SQL.

pub mod ingredient;
pub mod recipe;
pub mod relation;
pub mod subscription;
pub mod user;

pub use ingredient::IngredientRepository;
pub use recipe::{RecipeListFilter, RecipeRepository};
pub use relation::RelationRepository;
pub use subscription::SubscriptionRepository;
pub use user::UserRepository;
