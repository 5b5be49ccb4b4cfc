//! Shared query parameter types for API handlers.

use daybook_core::types::DbId;
use serde::Deserialize;

/// Generic pagination parameters (`?page=&limit=`).
///
/// `page` is 1-based. Values are normalized and clamped via
/// `daybook_core::pagination::PageParams`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for the active diary listing (`?page=&limit=&category_id=`).
#[derive(Debug, Deserialize)]
pub struct DiaryListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category_id: Option<DbId>,
}

/// Query parameters for diary search (`?keyword=&page=&limit=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: String,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
