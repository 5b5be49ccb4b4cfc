//! Category models and DTOs.

use daybook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_default: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating or updating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertCategory {
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// One entry of a batch sort-order update.
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySortItem {
    pub id: DbId,
    pub sort_order: i32,
}

/// DTO for the batch sort-order update request.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategorySort {
    pub sort_list: Vec<CategorySortItem>,
}

// ---------------------------------------------------------------------------
// Result structs (handler responses)
// ---------------------------------------------------------------------------

/// Per-category usage statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStats {
    /// Non-trashed diaries in the category.
    pub total_count: i64,
    /// Most recent non-trashed diary, if any.
    pub recent_diary: Option<RecentDiary>,
}

/// Id and creation time of the most recent diary in a category.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentDiary {
    pub id: DbId,
    pub created_at: Timestamp,
}
