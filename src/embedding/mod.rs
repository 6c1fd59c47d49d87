//! Embedding gateway: text in, fixed-length vector out.
//!
//! - [`StubEmbedder`] produces deterministic hash-seeded vectors (tests, offline runs).
//! - [`HttpEmbedder`] calls an OpenAI-compatible `/embeddings` endpoint.
//!
//! Both are wrapped by [`EmbedderBackend`] so the binary can pick one at startup.

mod error;
/// OpenAI-compatible HTTP embedder.
pub mod http;
/// Deterministic stub embedder.
pub mod stub;

#[cfg(test)]
mod tests;

use std::future::Future;

pub use error::EmbeddingError;
pub use http::HttpEmbedder;
pub use stub::StubEmbedder;

/// Minimal async interface used by catalog sync and recommendation.
///
/// Implementations must be deterministic for a fixed model version.
pub trait EmbeddingGateway: Send + Sync {
    /// Length of every vector returned by [`embed`](EmbeddingGateway::embed).
    fn dimension(&self) -> usize;

    /// Embeds a single string.
    fn embed(&self, text: &str) -> impl Future<Output = Result<Vec<f32>, EmbeddingError>> + Send;
}

/// Runtime-selected embedder.
#[derive(Debug)]
pub enum EmbedderBackend {
    Stub(StubEmbedder),
    Http(HttpEmbedder),
}

impl EmbedderBackend {
    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self, EmbedderBackend::Stub(_))
    }
}

impl EmbeddingGateway for EmbedderBackend {
    fn dimension(&self) -> usize {
        match self {
            EmbedderBackend::Stub(e) => e.dimension(),
            EmbedderBackend::Http(e) => e.dimension(),
        }
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match self {
            EmbedderBackend::Stub(e) => e.embed(text).await,
            EmbedderBackend::Http(e) => e.embed(text).await,
        }
    }
}

/// Scales `embedding` to unit length in place (zero vectors are left as-is).
pub fn l2_normalize(embedding: &mut [f32]) {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in embedding.iter_mut() {
            *x /= norm;
        }
    }
}
