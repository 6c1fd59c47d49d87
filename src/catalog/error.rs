use std::path::PathBuf;

use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::vectordb::VectorDbError;

#[derive(Debug, Error)]
/// Errors returned by catalog loading and sync.
pub enum CatalogError {
    /// A record failed validation at ingestion.
    #[error("invalid investor record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },

    /// Source file could not be read.
    #[error("failed to read investor source '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file was not valid investor JSON.
    #[error("failed to parse investor source '{path}': {source}")]
    SourceParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Metadata encoding failed.
    #[error("failed to encode investor metadata: {reason}")]
    Encode { reason: String },

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("vector database error: {0}")]
    VectorDb(#[from] VectorDbError),
}
