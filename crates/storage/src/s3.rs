//! S3 blob store backend.

use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;

use crate::config::StorageConfig;
use crate::{BlobStore, StorageError, UploadTicket};

/// Blob store backed by S3 or any S3-compatible service.
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    config: StorageConfig,
}

impl S3BlobStore {
    /// Build a client from the given configuration, resolving credentials
    /// through the standard AWS provider chain.
    pub async fn new(config: StorageConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            config,
        }
    }
}

#[async_trait::async_trait]
impl BlobStore for S3BlobStore {
    async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        tracing::debug!(%key, size, "Stored object in S3");
        Ok(self.config.public_url(key))
    }

    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<UploadTicket, StorageError> {
        let presigning = PresigningConfig::expires_in(ttl)
            .map_err(|e| StorageError::Config(e.to_string()))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        Ok(UploadTicket {
            key: key.to_string(),
            upload_url: presigned.uri().to_string(),
            public_url: self.config.public_url(key),
            expires_in_secs: ttl.as_secs(),
        })
    }
}
