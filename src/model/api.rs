//! Cross-cutting API envelope types.

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Human-readable outcome of a collection action (favorite, cart,
/// subscription add/remove).
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DetailDto {
    /// The outcome message
    pub detail: String,
}

/// Limit/offset pagination envelope for list endpoints.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct Paginated<T> {
    /// Total number of rows matching the query, ignoring the window.
    pub count: u64,
    /// Link to the next window, when one exists.
    pub next: Option<String>,
    /// Link to the previous window, when one exists.
    pub previous: Option<String>,
    /// Rows within the requested window.
    pub results: Vec<T>,
}
