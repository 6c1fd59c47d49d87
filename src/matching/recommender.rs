use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::error::MatchingError;
use super::filter::filter_candidates;
use super::query::StartupQuery;
use super::types::CandidateMatch;
use crate::constants::DEFAULT_OVERFETCH_FACTOR;
use crate::embedding::EmbeddingGateway;
use crate::vectordb::VectorIndex;

/// Embeds a startup query, retrieves similar investors and filters them.
pub struct Recommender<E, V> {
    embedder: Arc<E>,
    index: Arc<V>,
    collection: String,
    overfetch_factor: usize,
}

impl<E, V> std::fmt::Debug for Recommender<E, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("collection", &self.collection)
            .field("overfetch_factor", &self.overfetch_factor)
            .finish_non_exhaustive()
    }
}

impl<E: EmbeddingGateway, V: VectorIndex> Recommender<E, V> {
    pub fn new(embedder: Arc<E>, index: Arc<V>, collection: impl Into<String>) -> Self {
        Self {
            embedder,
            index,
            collection: collection.into(),
            overfetch_factor: DEFAULT_OVERFETCH_FACTOR,
        }
    }

    pub fn with_overfetch_factor(mut self, factor: usize) -> Self {
        self.overfetch_factor = factor.max(1);
        self
    }

    pub fn overfetch_factor(&self) -> usize {
        self.overfetch_factor
    }

    /// Returns at most `count` admissible investors, most similar first.
    ///
    /// Embedding and index failures propagate unchanged.
    #[instrument(skip(self, startup), fields(count = count, stage = ?startup.stage()))]
    pub async fn recommend(
        &self,
        startup: &StartupQuery,
        count: usize,
    ) -> Result<Vec<CandidateMatch>, MatchingError> {
        startup.validate()?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let query_text = startup.query_text();
        if query_text.is_empty() {
            return Err(MatchingError::EmptyQuery);
        }

        debug!(query_len = query_text.len(), "Embedding startup query");
        let query_vector = self.embedder.embed(&query_text).await?;

        let limit = count.saturating_mul(self.overfetch_factor) as u64;
        let hits = self
            .index
            .search(&self.collection, query_vector, limit)
            .await?;
        let retrieved = hits.len();

        let candidates: Vec<CandidateMatch> = hits.into_iter().map(CandidateMatch::from).collect();
        let admitted = filter_candidates(startup, candidates, count);

        info!(
            retrieved,
            admitted = admitted.len(),
            best_similarity = admitted.first().map(|c| c.similarity),
            "Recommendation complete"
        );

        Ok(admitted)
    }
}
