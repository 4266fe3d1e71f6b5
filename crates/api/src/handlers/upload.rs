//! Handlers for the `/upload` resource.
//!
//! Two upload paths exist:
//! - `POST /upload` streams the file through this server into blob storage.
//! - `POST /upload/token` + `POST /upload/complete` authorize a direct
//!   browser upload via a presigned ticket, bypassing this server's body
//!   limits entirely.
//!
//! Validation (MIME allow-list, size ceiling) runs before any storage call.

use std::time::Duration;

use atelier_core::{media, naming};
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, UploadResponse};
use crate::state::AppState;

/// POST /api/upload
///
/// Accepts `multipart/form-data` with a `file` field and returns the public
/// URL of the stored image.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field.bytes().await.map_err(map_multipart_error)?;
            file = Some((filename, content_type, data.to_vec()));
        }
        // Unknown fields are ignored.
    }

    let (filename, content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    media::validate_content_type(&content_type)?;
    media::validate_size(data.len() as u64, state.config.max_upload_bytes)?;

    let key = naming::image_key(&filename);
    let size = data.len();
    let url = state.blob.put(&key, &content_type, data).await?;

    tracing::info!(%key, size, %content_type, "Image uploaded");
    Ok(Json(UploadResponse { url }))
}

/// Body of the token-issuance handshake.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTokenRequest {
    pub file_name: String,
    pub content_type: String,
    /// Declared size in bytes; checked against the ceiling when present.
    #[serde(default)]
    pub size: Option<u64>,
}

/// POST /api/upload/token
///
/// Authorizes a direct browser upload: validates the payload metadata and
/// returns a short-lived presigned ticket.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(input): Json<UploadTokenRequest>,
) -> AppResult<Json<atelier_storage::UploadTicket>> {
    media::validate_content_type(&input.content_type)?;
    if let Some(size) = input.size {
        media::validate_size(size, state.config.max_upload_bytes)?;
    }

    let key = naming::image_key(&input.file_name);
    let ttl = Duration::from_secs(state.config.upload_token_ttl_secs);
    let ticket = state.blob.presign_put(&key, &input.content_type, ttl).await?;

    tracing::info!(%key, content_type = %input.content_type, "Upload ticket issued");
    Ok(Json(ticket))
}

/// Completion callback body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadCompleteRequest {
    pub key: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// POST /api/upload/complete
///
/// The browser reports a finished direct upload. Logged only; the server
/// does not act on it.
pub async fn complete(
    Json(input): Json<UploadCompleteRequest>,
) -> AppResult<Json<MessageResponse>> {
    tracing::info!(key = %input.key, url = ?input.url, "Client upload completed");
    Ok(Json(MessageResponse {
        message: "Upload recorded".to_string(),
    }))
}

/// Map multipart parsing failures, keeping body-limit rejections as 413.
fn map_multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(
            "Request too large. Please try a smaller file or check file size limits.".to_string(),
        )
    } else {
        AppError::BadRequest(err.to_string())
    }
}
