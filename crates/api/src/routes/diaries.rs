//! Route definitions for the `/diaries` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{attachments, diaries};
use crate::state::AppState;

/// Routes mounted at `/diaries`.
///
/// ```text
/// GET    /                        -> list (active, ?page=&limit=&category_id=)
/// POST   /                        -> create
/// GET    /search                  -> search (?keyword=&page=&limit=)
/// POST   /batch-delete            -> batch soft-delete
/// GET    /{id}                    -> get one (active)
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> soft-delete (move to trash)
/// PUT    /{id}/time               -> backdate created_at
/// GET    /{id}/attachments        -> list attachments
/// POST   /{id}/attachments/batch  -> batch-create attachments
/// DELETE /{id}/attachments        -> delete all attachments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(diaries::list).post(diaries::create))
        .route("/search", get(diaries::search))
        .route("/batch-delete", post(diaries::batch_delete))
        .route(
            "/{id}",
            get(diaries::get_one)
                .put(diaries::update)
                .delete(diaries::soft_delete),
        )
        .route("/{id}/time", put(diaries::update_time))
        .route(
            "/{id}/attachments",
            get(attachments::list_by_diary).delete(attachments::delete_by_diary),
        )
        .route("/{id}/attachments/batch", post(attachments::batch_create))
}
