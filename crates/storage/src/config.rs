/// Blob storage configuration loaded from environment variables.
///
/// AWS credentials come from the standard SDK provider chain
/// (`AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`, profiles, IMDS).
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Bucket holding all uploaded images.
    pub bucket: String,
    /// Bucket region (default: `us-east-1`).
    pub region: String,
    /// Optional custom endpoint for S3-compatible providers.
    pub endpoint: Option<String>,
    /// Base URL images are served from, without a trailing slash.
    pub public_base_url: String,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Default                                |
    /// |-------------------|----------------------------------------|
    /// | `BLOB_BUCKET`     | (required)                             |
    /// | `BLOB_REGION`     | `us-east-1`                            |
    /// | `BLOB_ENDPOINT`   | (none)                                 |
    /// | `BLOB_PUBLIC_URL` | `https://{bucket}.s3.amazonaws.com`    |
    pub fn from_env() -> Self {
        let bucket = std::env::var("BLOB_BUCKET").expect("BLOB_BUCKET must be set");
        let region = std::env::var("BLOB_REGION").unwrap_or_else(|_| "us-east-1".into());
        let endpoint = std::env::var("BLOB_ENDPOINT").ok();
        let public_base_url = std::env::var("BLOB_PUBLIC_URL")
            .unwrap_or_else(|_| format!("https://{bucket}.s3.amazonaws.com"))
            .trim_end_matches('/')
            .to_string();

        Self {
            bucket,
            region,
            endpoint,
            public_base_url,
        }
    }

    /// Public URL for an object key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base_url)
    }
}
