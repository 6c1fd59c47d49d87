use tracing::debug;

use super::{EmbeddingError, EmbeddingGateway, l2_normalize};
use crate::hashing::hash_to_u64;

/// Deterministic embedder seeded from a BLAKE3 hash of the input.
///
/// Identical texts map to identical unit vectors. Distinct texts map to
/// effectively unrelated vectors, so similarity carries no meaning.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    dimension: usize,
}

impl StubEmbedder {
    pub fn new(dimension: usize) -> Result<Self, EmbeddingError> {
        if dimension == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding dimension must be > 0".to_string(),
            });
        }
        Ok(Self { dimension })
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        debug!(text_len = text.len(), "Generating stub embedding");

        let mut state = hash_to_u64(text.as_bytes());
        let mut embedding = Vec::with_capacity(self.dimension);

        for _ in 0..self.dimension {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        l2_normalize(&mut embedding);
        embedding
    }
}

impl EmbeddingGateway for StubEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.embed_stub(text))
    }
}
