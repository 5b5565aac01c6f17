//! Business logic services.
//!
//! Services validate input, enforce ownership and relationship invariants,
//! and project entities into viewer-specific DTOs. They coordinate the
//! repositories in [`crate::data`] and never touch HTTP concerns.

pub mod recipe;
pub mod relation;
pub mod shopping;
pub mod user;

pub use recipe::{RecipeListQuery, RecipeService};
pub use relation::RelationService;
pub use shopping::ShoppingListService;
pub use user::UserService;
