pub mod health;
pub mod notes;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the note API route tree, mounted under the configured prefix.
///
/// Route hierarchy:
///
/// ```text
/// /                 service info
/// /notes            list, create
/// /notes/{id}       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::service_info))
        .nest("/notes", notes::router())
}
