//! Upload validation rules for gallery images.
//!
//! Both the server upload endpoint and the token-issuance handshake run
//! these checks before anything touches blob storage, so a bad file is
//! rejected with no network effect.

use crate::error::CoreError;

/// MIME types accepted for gallery and thumbnail images.
pub const ALLOWED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Default upload size ceiling (50 MB). Overridable via `MAX_UPLOAD_BYTES`.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Check a content type against the image allow-list.
pub fn validate_content_type(content_type: &str) -> Result<(), CoreError> {
    if ALLOWED_IMAGE_TYPES.contains(&content_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Invalid file type. Please upload JPEG, PNG, or WebP images.".to_string(),
        ))
    }
}

/// Check a payload size against the configured ceiling.
pub fn validate_size(size: u64, max_bytes: u64) -> Result<(), CoreError> {
    if size <= max_bytes {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "File too large. Maximum size is {}MB.",
            max_bytes / (1024 * 1024)
        )))
    }
}
