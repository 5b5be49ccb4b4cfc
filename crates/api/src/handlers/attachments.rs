//! Handlers for diary attachments.
//!
//! Attachments have no owner of their own; every operation first resolves
//! the parent diary through an owner-scoped lookup, so a foreign diary's
//! attachments read as absent.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use daybook_core::error::CoreError;
use daybook_core::storage::ObjectStorage;
use daybook_core::types::DbId;
use daybook_db::models::attachment::{
    Attachment, BatchCreateAttachments, BatchDeleteAttachments, CreateAttachment,
};
use daybook_db::repositories::{AttachmentRepo, DiaryRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthOwner;
use crate::response::DataResponse;
use crate::state::AppState;

/// Delete attachment files from object storage, best-effort.
///
/// Failures are logged and swallowed so the caller's row deletion always
/// proceeds; a storage orphan is preferable to a dangling metadata row.
pub(crate) async fn delete_storage_objects(storage: &dyn ObjectStorage, attachments: &[Attachment]) {
    for attachment in attachments {
        if let Err(err) = storage.delete(&attachment.url).await {
            tracing::warn!(
                attachment_id = attachment.id,
                url = %attachment.url,
                error = %err,
                "Object storage delete failed, keeping going",
            );
        }
    }
}

/// GET /api/v1/diaries/{id}/attachments
///
/// List a diary's attachments, creation time ascending. Works on trashed
/// diaries too.
pub async fn list_by_diary(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(diary_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    DiaryRepo::find_any(&state.pool, owner_id, diary_id)
        .await?
        .ok_or_else(|| CoreError::not_found("diary", diary_id))?;

    let attachments = AttachmentRepo::list_by_diary(&state.pool, diary_id).await?;
    Ok(Json(DataResponse { data: attachments }))
}

/// GET /api/v1/attachments/{id}
pub async fn get_one(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let attachment = AttachmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("attachment", id))?;

    // Mask attachments hanging off foreign diaries as absent.
    DiaryRepo::find_any(&state.pool, owner_id, attachment.diary_id)
        .await?
        .ok_or_else(|| CoreError::not_found("attachment", id))?;

    Ok(Json(DataResponse { data: attachment }))
}

/// POST /api/v1/attachments
///
/// Associate an already-uploaded file URL with an owned diary.
pub async fn create(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Json(input): Json<CreateAttachment>,
) -> AppResult<impl IntoResponse> {
    DiaryRepo::find_any(&state.pool, owner_id, input.diary_id)
        .await?
        .ok_or_else(|| CoreError::not_found("diary", input.diary_id))?;

    let attachment = AttachmentRepo::create(&state.pool, input.diary_id, &input.url).await?;

    Ok(Json(DataResponse { data: attachment }))
}

/// POST /api/v1/diaries/{id}/attachments/batch
///
/// Associate several uploaded URLs with one owned diary.
pub async fn batch_create(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(diary_id): Path<DbId>,
    Json(input): Json<BatchCreateAttachments>,
) -> AppResult<impl IntoResponse> {
    DiaryRepo::find_any(&state.pool, owner_id, diary_id)
        .await?
        .ok_or_else(|| CoreError::not_found("diary", diary_id))?;

    let attachments = AttachmentRepo::batch_create(&state.pool, diary_id, &input.urls).await?;

    Ok(Json(DataResponse { data: attachments }))
}

/// DELETE /api/v1/attachments/{id}
///
/// Delete one attachment: storage best-effort, then the row regardless.
pub async fn delete_one(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let attachment = AttachmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("attachment", id))?;

    // Mask attachments hanging off foreign diaries as absent.
    DiaryRepo::find_any(&state.pool, owner_id, attachment.diary_id)
        .await?
        .ok_or_else(|| CoreError::not_found("attachment", id))?;

    delete_storage_objects(state.storage.as_ref(), std::slice::from_ref(&attachment)).await;
    AttachmentRepo::delete_by_id(&state.pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/attachments/batch-delete
///
/// Delete several attachments, each as in [`delete_one`]. Stops at the
/// first id that is absent or hangs off a foreign diary; already-deleted
/// rows before the miss stay deleted.
pub async fn batch_delete(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Json(input): Json<BatchDeleteAttachments>,
) -> AppResult<impl IntoResponse> {
    for id in &input.ids {
        let attachment = AttachmentRepo::find_by_id(&state.pool, *id)
            .await?
            .ok_or_else(|| CoreError::not_found("attachment", *id))?;

        DiaryRepo::find_any(&state.pool, owner_id, attachment.diary_id)
            .await?
            .ok_or_else(|| CoreError::not_found("attachment", *id))?;

        delete_storage_objects(state.storage.as_ref(), std::slice::from_ref(&attachment)).await;
        AttachmentRepo::delete_by_id(&state.pool, *id).await?;
    }

    tracing::info!(owner_id, count = input.ids.len(), "Attachments deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/diaries/{id}/attachments
///
/// Delete all of a diary's attachments: storage best-effort per file,
/// then the rows.
pub async fn delete_by_diary(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(diary_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    DiaryRepo::find_any(&state.pool, owner_id, diary_id)
        .await?
        .ok_or_else(|| CoreError::not_found("diary", diary_id))?;

    let attachments = AttachmentRepo::list_by_diary(&state.pool, diary_id).await?;
    delete_storage_objects(state.storage.as_ref(), &attachments).await;
    let removed = AttachmentRepo::delete_by_diary(&state.pool, diary_id).await?;

    tracing::info!(owner_id, diary_id, removed, "Diary attachments deleted");

    Ok(StatusCode::NO_CONTENT)
}
