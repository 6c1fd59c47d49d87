use crate::catalog::{StoredInvestor, decode_metadata};
use crate::vectordb::SearchHit;

/// An investor returned by similarity search, with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMatch {
    pub investor: StoredInvestor,
    /// Higher is more similar.
    pub similarity: f32,
}

impl CandidateMatch {
    pub fn new(investor: StoredInvestor, similarity: f32) -> Self {
        Self {
            investor,
            similarity,
        }
    }
}

impl From<SearchHit> for CandidateMatch {
    fn from(hit: SearchHit) -> Self {
        Self::new(decode_metadata(&hit.metadata), hit.score)
    }
}
