//! Route definitions for the `/attachments` resource.
//!
//! Diary-scoped attachment routes (list, batch-create, delete-all) live
//! under `/diaries/{id}/attachments`; see `routes::diaries`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::attachments;
use crate::state::AppState;

/// Routes mounted at `/attachments`.
///
/// ```text
/// POST   /              -> create (associate an uploaded URL with a diary)
/// POST   /batch-delete  -> delete several
/// GET    /{id}          -> get one
/// DELETE /{id}          -> delete one (storage best-effort, then row)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(attachments::create))
        .route("/batch-delete", post(attachments::batch_delete))
        .route(
            "/{id}",
            get(attachments::get_one).delete(attachments::delete_one),
        )
}
