pub mod attachments;
pub mod categories;
pub mod diaries;
pub mod health;
pub mod trash;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /categories                  list, create; batch sort update
/// /categories/{id}             update, delete; stats
/// /diaries                     list, create, search
/// /diaries/{id}                get, update, soft-delete; time, attachments
/// /trash                       list, restore, purge, clear
/// /attachments                 create, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/diaries", diaries::router())
        .nest("/trash", trash::router())
        .nest("/attachments", attachments::router())
}
