//! In-memory blob store for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::{BlobStore, StorageError, UploadTicket};

struct StoredObject {
    content_type: String,
    bytes: Vec<u8>,
}

/// Blob store holding objects in a process-local map.
///
/// Upload tests assert against `object_count` to prove a rejected file
/// never reached storage.
pub struct MemoryBlobStore {
    base_url: String,
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl MemoryBlobStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored objects.
    pub fn object_count(&self) -> usize {
        self.objects.lock().expect("blob store lock poisoned").len()
    }

    /// Whether an object with the given key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.objects
            .lock()
            .expect("blob store lock poisoned")
            .contains_key(key)
    }

    /// Content type and size of a stored object, if present.
    pub fn object_info(&self, key: &str) -> Option<(String, usize)> {
        self.objects
            .lock()
            .expect("blob store lock poisoned")
            .get(key)
            .map(|o| (o.content_type.clone(), o.bytes.len()))
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new("memory://images")
    }
}

#[async_trait::async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        self.objects.lock().expect("blob store lock poisoned").insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(format!("{}/{key}", self.base_url))
    }

    async fn presign_put(
        &self,
        key: &str,
        _content_type: &str,
        ttl: Duration,
    ) -> Result<UploadTicket, StorageError> {
        Ok(UploadTicket {
            key: key.to_string(),
            upload_url: format!("{}/{key}?signature=local", self.base_url),
            public_url: format!("{}/{key}", self.base_url),
            expires_in_secs: ttl.as_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_returns_public_url_and_stores_object() {
        let store = MemoryBlobStore::default();
        let url = store
            .put("123-abc.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();

        assert_eq!(url, "memory://images/123-abc.png");
        assert_eq!(store.object_count(), 1);
        assert_eq!(
            store.object_info("123-abc.png"),
            Some(("image/png".to_string(), 3))
        );
    }

    #[tokio::test]
    async fn presign_ticket_carries_key_and_ttl() {
        let store = MemoryBlobStore::default();
        let ticket = store
            .presign_put("123-abc.jpg", "image/jpeg", Duration::from_secs(300))
            .await
            .unwrap();

        assert_eq!(ticket.key, "123-abc.jpg");
        assert_eq!(ticket.expires_in_secs, 300);
        assert!(ticket.upload_url.contains("signature"));
        assert_eq!(ticket.public_url, "memory://images/123-abc.jpg");
        assert_eq!(store.object_count(), 0);
    }
}
