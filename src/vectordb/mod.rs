//! Qdrant vector index integration.
//!
//! Scores returned by every [`VectorIndex`] are similarities: higher means closer.
//! Hits come back in descending score order.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;


pub use client::{QdrantIndex, VectorIndex};
pub use error::VectorDbError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockVectorIndex, cosine_similarity};
pub use model::{IndexPoint, Metadata, MetadataValue, SearchHit, StoredPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteConsistency {
    /// Wait for the operation to be fully indexed and searchable.
    /// Maps to `wait=true`.
    Strong,
    /// Return immediately after the server acknowledges receipt.
    /// Maps to `wait=false`.
    Eventual,
}

impl From<WriteConsistency> for bool {
    fn from(c: WriteConsistency) -> bool {
        matches!(c, WriteConsistency::Strong)
    }
}
