//! Cross-cutting, shared constants.
//!
//! Scoring constants are tied to the 1-5 rubric scale: a criterion score multiplied by
//! [`SCORE_SCALE`] lands in `[20, 100]`, so the weighted aggregate is a 0-100 figure.

/// Output dimension of `bge-small-en`, the default embedding model.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

pub const DEFAULT_COLLECTION_NAME: &str = "investors";

/// Hits requested from the index per wanted recommendation.
pub const DEFAULT_OVERFETCH_FACTOR: usize = 3;

pub const DEFAULT_RESULT_COUNT: usize = 3;

pub const DEFAULT_SYNC_CONCURRENCY: usize = 8;

pub const MIN_CRITERION_SCORE: u8 = 1;
pub const MAX_CRITERION_SCORE: u8 = 5;
pub const NEUTRAL_CRITERION_SCORE: u8 = 3;

pub const SCORE_SCALE: f64 = 20.0;
