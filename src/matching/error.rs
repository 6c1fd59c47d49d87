use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::vectordb::VectorDbError;

#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("startup query has no text to embed")]
    EmptyQuery,

    #[error("invalid startup query: {reason}")]
    InvalidQuery { reason: String },

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("vector database error: {0}")]
    VectorDb(#[from] VectorDbError),
}
