//! Route definitions for the `/trash` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::trash;
use crate::state::AppState;

/// Routes mounted at `/trash`.
///
/// ```text
/// GET    /               -> list (?page=&limit=)
/// DELETE /               -> clear (purge everything)
/// POST   /batch-restore  -> restore several
/// PUT    /{id}/restore   -> restore to active
/// DELETE /{id}           -> purge one (permanent)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trash::list).delete(trash::clear))
        .route("/batch-restore", post(trash::batch_restore))
        .route("/{id}/restore", put(trash::restore))
        .route("/{id}", delete(trash::purge))
}
