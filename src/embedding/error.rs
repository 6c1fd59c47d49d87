use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("embedding request to '{endpoint}' failed: {message}")]
    RequestFailed { endpoint: String, message: String },

    #[error("invalid embedding response: {reason}")]
    InvalidResponse { reason: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
