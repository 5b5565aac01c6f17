//! User-recipe relation kinds.

/// Which user-recipe collection an operation targets.
///
/// Favorites and shopping-cart entries share their add/remove shape, so the
/// repositories and services take the kind as a parameter instead of
/// duplicating per-collection methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationKind {
    /// The user's favorite recipes.
    Favorite,
    /// The user's shopping cart.
    ShoppingCart,
}

impl RelationKind {
    /// Human-readable collection name used in detail and error messages.
    pub fn collection_name(self) -> &'static str {
        match self {
            Self::Favorite => "favorites",
            Self::ShoppingCart => "the shopping cart",
        }
    }
}
