//! Limit/offset pagination over list endpoints.

use serde::Deserialize;

use crate::{
    constant::{MAX_PAGE_SIZE, PAGE_SIZE},
    model::api::Paginated,
};

/// Caller-provided pagination window.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct PageParams {
    /// Page size; defaults to [`PAGE_SIZE`], clamped to [`MAX_PAGE_SIZE`].
    pub limit: Option<u64>,
    /// Number of rows to skip.
    pub offset: Option<u64>,
}

impl PageParams {
    /// Effective page size after defaulting and clamping.
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(PAGE_SIZE).min(MAX_PAGE_SIZE)
    }

    /// Effective offset.
    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}

/// Wraps a result window in the `{count, next, previous, results}` envelope,
/// deriving the neighbouring window links from `path` and the effective
/// limit/offset.
pub fn paginate<T>(path: &str, params: &PageParams, count: u64, results: Vec<T>) -> Paginated<T> {
    let limit = params.limit();
    let offset = params.offset();

    let next = if offset + limit < count {
        Some(format!(
            "{}?limit={}&offset={}",
            path,
            limit,
            offset + limit
        ))
    } else {
        None
    };

    let previous = if offset > 0 {
        let prev_offset = offset.saturating_sub(limit);
        if prev_offset > 0 {
            Some(format!("{}?limit={}&offset={}", path, limit, prev_offset))
        } else {
            Some(format!("{}?limit={}", path, limit))
        }
    } else {
        None
    };

    Paginated {
        count,
        next,
        previous,
        results,
    }
}
