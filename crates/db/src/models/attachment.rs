//! Attachment models and DTOs.

use daybook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `attachments` table.
///
/// Attachments carry no owner id; they are scoped through their diary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attachment {
    pub id: DbId,
    pub diary_id: DbId,
    pub url: String,
    pub created_at: Timestamp,
}

/// DTO for attaching an uploaded image to a diary.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttachment {
    pub diary_id: DbId,
    pub url: String,
}

/// DTO for attaching several uploads at once.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchCreateAttachments {
    pub urls: Vec<String>,
}

/// DTO for removing several attachments at once.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchDeleteAttachments {
    pub ids: Vec<DbId>,
}
