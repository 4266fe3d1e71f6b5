//! Admin session handling.
//!
//! Replaces the old boolean "authenticated" flag with an explicit session
//! that carries issued-at and expiry timestamps. This is session state
//! only; real authentication lives behind the server and is out of scope
//! here.

use std::fs;
use std::path::PathBuf;

use atelier_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Default session lifetime: 12 hours.
pub const DEFAULT_SESSION_HOURS: i64 = 12;

/// An admin-manager session with an explicit expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

impl AdminSession {
    /// Start a new session valid for `ttl`.
    pub fn start(ttl: chrono::Duration) -> Self {
        let issued_at = chrono::Utc::now();
        Self {
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    /// Whether the session is still valid.
    pub fn is_active(&self) -> bool {
        chrono::Utc::now() < self.expires_at
    }
}

/// Persists the current session in a single file next to the project cache.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the current session, dropping it if expired.
    pub fn load(&self) -> Result<Option<AdminSession>, ClientError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)?;
        let session: AdminSession = serde_json::from_slice(&bytes)?;
        if session.is_active() {
            Ok(Some(session))
        } else {
            tracing::debug!("Admin session expired, clearing");
            self.clear()?;
            Ok(None)
        }
    }

    pub fn save(&self, session: &AdminSession) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec(session)?)?;
        Ok(())
    }

    /// Log out: remove the session file if present.
    pub fn clear(&self) -> Result<(), ClientError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
