pub mod health;
pub mod project;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects            GET list, POST create
/// /projects/{id}       GET, PUT, DELETE
/// /upload              POST multipart upload
/// /upload/token        POST issue presigned ticket
/// /upload/complete     POST completion callback
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/upload", upload::router())
}
