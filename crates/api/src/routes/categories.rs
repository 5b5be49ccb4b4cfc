//! Route definitions for the `/categories` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// PUT    /sort          -> update_sort (batch)
/// GET    /{id}          -> get one
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete (cascade-reassigns diaries)
/// GET    /{id}/stats    -> stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list).post(categories::create))
        .route("/sort", put(categories::update_sort))
        .route(
            "/{id}",
            get(categories::get_one)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route("/{id}/stats", get(categories::stats))
}
