//! Route definitions for the `/upload` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST /           -> upload (multipart proxy)
/// POST /token      -> issue_token (direct-upload handshake)
/// POST /complete   -> complete (callback, logged only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload))
        .route("/token", post(upload::issue_token))
        .route("/complete", post(upload::complete))
}
