//! Pagination math shared by list endpoints.
//!
//! Pages are 1-based. Limits are clamped so a caller cannot request an
//! unbounded page.

/// Default page size when none is given.
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest page size a caller may request.
pub const MAX_LIMIT: i64 = 100;

/// Normalized pagination input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    pub page: i64,
    /// Page size, clamped to `1..=MAX_LIMIT`.
    pub limit: i64,
}

impl PageParams {
    /// Normalize raw query values: missing/invalid page falls back to 1,
    /// limit falls back to [`DEFAULT_LIMIT`] and is clamped.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        PageParams { page, limit }
    }

    /// Row offset for the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Total page count: `ceil(total / limit)`. Zero rows means zero pages.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    debug_assert!(limit > 0);
    (total + limit - 1) / limit
}
