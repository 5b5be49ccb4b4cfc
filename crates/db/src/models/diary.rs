//! Diary models and DTOs.

use daybook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::attachment::Attachment;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `diaries` table.
///
/// Trash invariant (also enforced by a schema CHECK): `deleted_at` is
/// non-null exactly when `is_deleted` is true.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Diary {
    pub id: DbId,
    pub owner_id: DbId,
    pub category_id: DbId,
    pub content: String,
    pub content_html: Option<String>,
    pub is_deleted: bool,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating or updating a diary.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertDiary {
    pub category_id: DbId,
    pub content: String,
    pub content_html: Option<String>,
}

/// DTO for backdating a diary's creation time.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDiaryTime {
    pub created_at: Timestamp,
}

/// DTO for batch soft-delete.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchDeleteDiaries {
    pub ids: Vec<DbId>,
}

/// DTO for batch restore from trash.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRestoreDiaries {
    pub ids: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// Result structs (handler responses)
// ---------------------------------------------------------------------------

/// A diary joined with its ordered attachment list, assembled at response
/// time (never stored denormalized).
#[derive(Debug, Clone, Serialize)]
pub struct DiaryWithAttachments {
    #[serde(flatten)]
    pub diary: Diary,
    pub attachments: Vec<Attachment>,
}
