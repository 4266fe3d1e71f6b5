use atelier_core::media::DEFAULT_MAX_UPLOAD_BYTES;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upload size ceiling in bytes (default: 50 MB).
    pub max_upload_bytes: u64,
    /// Lifetime of presigned upload tickets in seconds (default: `300`).
    pub upload_token_ttl_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `MAX_UPLOAD_BYTES`      | `52428800`                 |
    /// | `UPLOAD_TOKEN_TTL_SECS` | `300`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: u64 = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid u64");

        let upload_token_ttl_secs: u64 = std::env::var("UPLOAD_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("UPLOAD_TOKEN_TTL_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            upload_token_ttl_secs,
        }
    }

    /// Request body limit: the upload ceiling plus headroom for multipart
    /// framing. Bodies beyond this are rejected during parsing with 413.
    pub fn body_limit_bytes(&self) -> usize {
        (self.max_upload_bytes as usize).saturating_add(1024 * 1024)
    }
}
