//! Handlers for the trash: list, restore, purge, clear.
//!
//! Purge is the only terminal transition. Attachment files are removed
//! from object storage best-effort before the rows go; a storage failure
//! is logged and never blocks row deletion (see `handlers::attachments`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use daybook_core::error::CoreError;
use daybook_core::pagination::PageParams;
use daybook_core::types::DbId;
use daybook_db::models::diary::BatchRestoreDiaries;
use daybook_db::models::page::Page;
use daybook_db::repositories::{AttachmentRepo, DiaryRepo};

use crate::error::AppResult;
use crate::handlers::attachments::delete_storage_objects;
use crate::middleware::auth::AuthOwner;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trash
///
/// Page of trashed diaries, most recently deleted first.
pub async fn list(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let page = PageParams::new(params.page, params.limit);
    let total = DiaryRepo::count_trash(&state.pool, owner_id).await?;
    let diaries = DiaryRepo::list_trash(&state.pool, owner_id, page.limit, page.offset()).await?;

    Ok(Json(DataResponse {
        data: Page::new(diaries, total, page.page, page.limit),
    }))
}

/// PUT /api/v1/trash/{id}/restore
///
/// Trashed -> Active. Attachments were never touched, so nothing to
/// restore besides the flags.
pub async fn restore(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !DiaryRepo::restore(&state.pool, owner_id, id).await? {
        return Err(CoreError::not_found("diary", id).into());
    }

    tracing::info!(owner_id, diary_id = id, "Diary restored from trash");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/trash/batch-restore
///
/// Restore several trashed diaries. Stops at the first id that is absent,
/// foreign, or not in trash.
pub async fn batch_restore(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Json(input): Json<BatchRestoreDiaries>,
) -> AppResult<impl IntoResponse> {
    for id in &input.ids {
        if !DiaryRepo::restore(&state.pool, owner_id, *id).await? {
            return Err(CoreError::not_found("diary", *id).into());
        }
    }

    tracing::info!(owner_id, count = input.ids.len(), "Diaries restored from trash");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/trash/{id}
///
/// Purge one trashed diary: storage objects best-effort, then attachment
/// rows and the diary row atomically.
pub async fn purge(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let diary = DiaryRepo::find_trashed(&state.pool, owner_id, id)
        .await?
        .ok_or_else(|| CoreError::not_found("diary", id))?;

    let attachments = AttachmentRepo::list_by_diary(&state.pool, diary.id).await?;
    delete_storage_objects(state.storage.as_ref(), &attachments).await;
    // A restore racing in since the lookup makes the delete miss.
    if !DiaryRepo::purge_rows(&state.pool, owner_id, diary.id).await? {
        return Err(CoreError::not_found("diary", id).into());
    }

    tracing::info!(
        owner_id,
        diary_id = id,
        attachments = attachments.len(),
        "Diary purged",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/trash
///
/// Purge every trashed diary of the owner, sequentially. A storage
/// failure on one diary's attachments never blocks that diary's row
/// deletion or the remaining diaries.
pub async fn clear(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let diaries = DiaryRepo::list_trash_all(&state.pool, owner_id).await?;

    for diary in &diaries {
        let attachments = AttachmentRepo::list_by_diary(&state.pool, diary.id).await?;
        delete_storage_objects(state.storage.as_ref(), &attachments).await;
        // Skip diaries restored while the clear was iterating.
        if !DiaryRepo::purge_rows(&state.pool, owner_id, diary.id).await? {
            tracing::debug!(owner_id, diary_id = diary.id, "Diary left trash mid-clear, skipping");
        }
    }

    tracing::info!(owner_id, count = diaries.len(), "Trash cleared");

    Ok(StatusCode::NO_CONTENT)
}
