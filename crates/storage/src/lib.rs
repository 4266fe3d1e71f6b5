//! Blob storage for uploaded gallery images.
//!
//! The API server talks to storage through the [`BlobStore`] trait. Two
//! backends exist: [`s3::S3BlobStore`] for production (any S3-compatible
//! endpoint) and [`memory::MemoryBlobStore`] for tests and local runs.
//!
//! Uploaded objects live in a single flat namespace; nothing here deletes
//! them. Files uploaded but never attached to a project are orphaned.

pub mod config;
pub mod memory;
pub mod s3;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use config::StorageConfig;
pub use memory::MemoryBlobStore;
pub use s3::S3BlobStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Invalid storage configuration: {0}")]
    Config(String),
}

/// A short-lived authorization for a direct browser upload.
///
/// The browser PUTs the file bytes to `upload_url` and references the image
/// afterwards via `public_url`, bypassing the API server's body limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTicket {
    pub key: String,
    pub upload_url: String,
    pub public_url: String,
    pub expires_in_secs: u64,
}

/// Write access to the image blob store.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Store an object and return its public URL.
    async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;

    /// Issue a presigned PUT ticket valid for `ttl`.
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<UploadTicket, StorageError>;
}
