//! Shared response envelope types for API handlers.
//!
//! Project payloads are returned bare (an object or an array); these types
//! cover the small confirmation-style responses so handlers do not build
//! ad-hoc `serde_json::json!` bodies.

use serde::Serialize;

/// `{ "message": ... }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{ "url": ... }` body returned by the upload endpoint.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}
