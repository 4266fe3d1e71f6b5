#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
