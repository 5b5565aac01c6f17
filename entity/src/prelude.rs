pub use super::favorite_recipe::Entity as FavoriteRecipe;
pub use super::ingredient::Entity as Ingredient;
pub use super::recipe::Entity as Recipe;
pub use super::recipe_ingredient::Entity as RecipeIngredient;
pub use super::shopping_cart::Entity as ShoppingCart;
pub use super::subscription::Entity as Subscription;
pub use super::user::Entity as User;
