//! Handlers for the category lifecycle.
//!
//! The default category is special throughout: it is provisioned once per
//! owner, cannot be renamed or deleted, and is the reassignment target when
//! another category is removed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use daybook_core::category::validate_name;
use daybook_core::error::CoreError;
use daybook_core::types::DbId;
use daybook_db::models::category::{CategoryStats, UpdateCategorySort, UpsertCategory};
use daybook_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthOwner;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// List the owner's categories, sort order ascending, creation time
/// breaking ties.
pub async fn list(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_by_owner(&state.pool, owner_id).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
///
/// Create a non-default category. The new category's sort order is the
/// current count of the owner's categories, placing it last.
pub async fn create(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Json(input): Json<UpsertCategory>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name)?;

    if CategoryRepo::name_exists(&state.pool, owner_id, &input.name).await? {
        return Err(CoreError::Conflict(format!(
            "Category name '{}' already exists",
            input.name
        ))
        .into());
    }

    let sort_order = CategoryRepo::count_by_owner(&state.pool, owner_id).await? as i32;
    let category = CategoryRepo::create(&state.pool, owner_id, &input, sort_order).await?;

    tracing::info!(owner_id, category_id = category.id, name = %category.name, "Category created");

    Ok(Json(DataResponse { data: category }))
}

/// GET /api/v1/categories/{id}
pub async fn get_one(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_owner(&state.pool, owner_id, id)
        .await?
        .ok_or_else(|| CoreError::not_found("category", id))?;

    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/v1/categories/{id}
///
/// Update name, icon, and color. The default category keeps its name;
/// icon and color are updatable on any category.
pub async fn update(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_owner(&state.pool, owner_id, id)
        .await?
        .ok_or_else(|| CoreError::not_found("category", id))?;

    let renaming = input.name != category.name;
    if renaming {
        if category.is_default {
            return Err(CoreError::InvalidOperation(
                "The default category cannot be renamed".into(),
            )
            .into());
        }
        validate_name(&input.name)?;
        if CategoryRepo::name_exists(&state.pool, owner_id, &input.name).await? {
            return Err(CoreError::Conflict(format!(
                "Category name '{}' already exists",
                input.name
            ))
            .into());
        }
    }

    let updated = CategoryRepo::update(
        &state.pool,
        owner_id,
        id,
        &input.name,
        input.icon.as_deref(),
        input.color.as_deref(),
    )
    .await?
    .ok_or_else(|| CoreError::not_found("category", id))?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/categories/{id}
///
/// Delete a non-default category. Every diary referencing it, trashed or
/// not, is atomically reassigned to the owner's default category; diaries
/// that were active are moved to trash in the same step.
pub async fn delete(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_owner(&state.pool, owner_id, id)
        .await?
        .ok_or_else(|| CoreError::not_found("category", id))?;

    if category.is_default {
        return Err(CoreError::InvalidOperation(
            "The default category cannot be deleted".into(),
        )
        .into());
    }

    // A missing default category is a provisioning bug, not a user error.
    let default = CategoryRepo::find_default(&state.pool, owner_id)
        .await?
        .ok_or_else(|| {
            CoreError::Internal(format!("Owner {owner_id} has no default category"))
        })?;

    let rewritten = CategoryRepo::delete_reassign(&state.pool, owner_id, id, default.id).await?;

    tracing::info!(
        owner_id,
        category_id = id,
        name = %category.name,
        diaries_reassigned = rewritten,
        "Category deleted, diaries reassigned to default",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/categories/sort
///
/// Batch sort-order update. All-or-nothing: an absent or foreign id rolls
/// the whole batch back. Ties are allowed; listing breaks them by creation
/// time.
pub async fn update_sort(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Json(input): Json<UpdateCategorySort>,
) -> AppResult<impl IntoResponse> {
    CategoryRepo::update_sort(&state.pool, owner_id, &input.sort_list).await?;

    tracing::info!(owner_id, count = input.sort_list.len(), "Category sort updated");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/categories/{id}/stats
///
/// Non-trashed diary count for the category plus the most recent such
/// diary, if any.
pub async fn stats(
    AuthOwner(owner_id): AuthOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CategoryRepo::find_by_owner(&state.pool, owner_id, id)
        .await?
        .ok_or_else(|| CoreError::not_found("category", id))?;

    let total_count = CategoryRepo::count_diaries(&state.pool, owner_id, id).await?;
    let recent_diary = CategoryRepo::recent_diary(&state.pool, owner_id, id).await?;

    Ok(Json(DataResponse {
        data: CategoryStats {
            total_count,
            recent_diary,
        },
    }))
}
