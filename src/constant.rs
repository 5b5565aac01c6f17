//! Product-chosen bounds shared between validation and pagination.

/// Default page size for list endpoints.
pub const PAGE_SIZE: u64 = 6;
/// Upper bound a caller-provided `limit` is clamped to.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Minimum recipe cooking time, in minutes.
pub const MIN_COOKING_TIME: i32 = 1;
/// Maximum recipe cooking time, in minutes.
pub const MAX_COOKING_TIME: i32 = 600;
/// Minimum amount for a recipe ingredient line item.
pub const MIN_INGREDIENT_AMOUNT: i32 = 1;
/// Maximum amount for a recipe ingredient line item.
pub const MAX_INGREDIENT_AMOUNT: i32 = 1000;

/// Default number of recipes embedded per author in subscription payloads.
pub const DEFAULT_RECIPES_LIMIT: u64 = 10;

/// Maximum email length.
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Maximum length for username, first name and last name.
pub const MAX_NAME_LENGTH: usize = 150;

/// Returns true when `username` matches the allowed pattern: letters,
/// digits and the `@`, `.`, `+`, `-`, `_` symbols.
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

#[cfg(test)]
mod tests {
    use super::is_valid_username;

    #[test]
    fn accepts_typical_usernames() {
        assert!(is_valid_username("chef_anna"));
        assert!(is_valid_username("user.name+tag@host"));
        assert!(is_valid_username("a-b_c.d"));
    }

    #[test]
    fn rejects_empty_and_forbidden_characters() {
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username("semi;colon"));
        assert!(!is_valid_username("slash/name"));
    }
}
