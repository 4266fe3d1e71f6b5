#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Cache unavailable: {0}")]
    Cache(#[from] std::io::Error),

    #[error("Malformed cached data: {0}")]
    CacheFormat(#[from] serde_json::Error),

    #[error("Image processing failed: {0}")]
    Image(#[from] image::ImageError),
}
