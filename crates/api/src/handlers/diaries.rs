//! Handlers for the diary lifecycle: create, update, backdate, list,
//! search, and the Active -> Trashed transition.
//!
//! Restore and purge (the other half of the state machine) live in
//! `handlers::trash`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use daybook_core::error::CoreError;
use daybook_core::pagination::PageParams;
use daybook_core::search::like_pattern;
use daybook_core::types::DbId;
use daybook_db::models::diary::{
    BatchDeleteDiaries, Diary, DiaryWithAttachments, UpdateDiaryTime, UpsertDiary,
};
use daybook_db::models::page::Page;
use daybook_db::repositories::{AttachmentRepo, CategoryRepo, DiaryRepo};
use daybook_db::DbPool;

use crate::error::AppResult;
use crate::middleware::auth::AuthOwner;
use crate::query::{DiaryListParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Join each diary with its ordered attachment list.
///
/// Assembled per response; attachments are never stored denormalized on
/// the diary row.
async fn with_attachments(
    pool: &DbPool,
    diaries: Vec<Diary>,
) -> Result<Vec<DiaryWithAttachments>, sqlx::Error> {
    let mut out = Vec::with_capacity(diaries.len());
    for diary in diaries {
        let attachments = AttachmentRepo::list_by_diary(pool, diary.id).await?;
        out.push(DiaryWithAttachments { diary, attachments });
    }
    Ok(out)
}

/// GET /api/v1/diaries
///
/// Page of active diaries, newest first, optionally filtered by category.
pub async fn list(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Query(params): Query<DiaryListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(category_id) = params.category_id {
        CategoryRepo::find_by_owner(&state.pool, owner_id, category_id)
            .await?
            .ok_or_else(|| CoreError::not_found("category", category_id))?;
    }

    let page = PageParams::new(params.page, params.limit);
    let total = DiaryRepo::count_active(&state.pool, owner_id, params.category_id).await?;
    let diaries = DiaryRepo::list_active(
        &state.pool,
        owner_id,
        params.category_id,
        page.limit,
        page.offset(),
    )
    .await?;
    let list = with_attachments(&state.pool, diaries).await?;

    Ok(Json(DataResponse {
        data: Page::new(list, total, page.page, page.limit),
    }))
}

/// GET /api/v1/diaries/{id}
pub async fn get_one(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let diary = DiaryRepo::find_active(&state.pool, owner_id, id)
        .await?
        .ok_or_else(|| CoreError::not_found("diary", id))?;
    let attachments = AttachmentRepo::list_by_diary(&state.pool, diary.id).await?;

    Ok(Json(DataResponse {
        data: DiaryWithAttachments { diary, attachments },
    }))
}

/// POST /api/v1/diaries
///
/// Create an active diary in an owned category.
pub async fn create(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Json(input): Json<UpsertDiary>,
) -> AppResult<impl IntoResponse> {
    CategoryRepo::find_by_owner(&state.pool, owner_id, input.category_id)
        .await?
        .ok_or_else(|| CoreError::not_found("category", input.category_id))?;

    let diary = DiaryRepo::create(&state.pool, owner_id, &input).await?;

    tracing::info!(owner_id, diary_id = diary.id, category_id = diary.category_id, "Diary created");

    Ok(Json(DataResponse { data: diary }))
}

/// PUT /api/v1/diaries/{id}
///
/// Update content and category of an active diary. A changed category must
/// exist and belong to the acting owner. Trash state is untouched.
pub async fn update(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertDiary>,
) -> AppResult<impl IntoResponse> {
    let diary = DiaryRepo::find_active(&state.pool, owner_id, id)
        .await?
        .ok_or_else(|| CoreError::not_found("diary", id))?;

    if input.category_id != diary.category_id {
        CategoryRepo::find_by_owner(&state.pool, owner_id, input.category_id)
            .await?
            .ok_or_else(|| CoreError::not_found("category", input.category_id))?;
    }

    let updated = DiaryRepo::update(&state.pool, owner_id, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("diary", id))?;

    Ok(Json(DataResponse { data: updated }))
}

/// PUT /api/v1/diaries/{id}/time
///
/// Overwrite the stored creation timestamp, for backdating entries.
pub async fn update_time(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDiaryTime>,
) -> AppResult<impl IntoResponse> {
    let updated = DiaryRepo::update_created_at(&state.pool, owner_id, id, input.created_at)
        .await?
        .ok_or_else(|| CoreError::not_found("diary", id))?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/diaries/{id}
///
/// Active -> Trashed. An already-trashed or foreign diary reads as absent.
pub async fn soft_delete(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !DiaryRepo::soft_delete(&state.pool, owner_id, id).await? {
        return Err(CoreError::not_found("diary", id).into());
    }

    tracing::info!(owner_id, diary_id = id, "Diary moved to trash");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/diaries/batch-delete
///
/// Soft-delete several diaries. Stops at the first id that is absent,
/// foreign, or already trashed.
pub async fn batch_delete(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Json(input): Json<BatchDeleteDiaries>,
) -> AppResult<impl IntoResponse> {
    for id in &input.ids {
        if !DiaryRepo::soft_delete(&state.pool, owner_id, *id).await? {
            return Err(CoreError::not_found("diary", *id).into());
        }
    }

    tracing::info!(owner_id, count = input.ids.len(), "Diaries moved to trash");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/diaries/search
///
/// Substring match on diary content over active diaries, newest first.
pub async fn search(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let pattern = like_pattern(&params.keyword);
    let page = PageParams::new(params.page, params.limit);

    let total = DiaryRepo::count_search(&state.pool, owner_id, &pattern).await?;
    let diaries =
        DiaryRepo::search(&state.pool, owner_id, &pattern, page.limit, page.offset()).await?;
    let list = with_attachments(&state.pool, diaries).await?;

    Ok(Json(DataResponse {
        data: Page::new(list, total, page.page, page.limit),
    }))
}
