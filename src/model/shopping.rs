//! Shopping-list aggregation output.

use serde::{Deserialize, Serialize};

/// One aggregated shopping-list line: an ingredient and the summed amount
/// across every recipe in the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShoppingListItem {
    pub name: String,
    pub measurement_unit: String,
    /// Sum of line-item amounts; i64 so large carts cannot overflow the
    /// per-item i32 range.
    pub total_amount: i64,
}
