//! Paginated response envelope.

use daybook_core::pagination::total_pages;
use serde::Serialize;

/// One page of results plus paging metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub list: Vec<T>,
    pub total: i64,
    /// 1-based page number.
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(list: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        Page {
            list,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }
}
