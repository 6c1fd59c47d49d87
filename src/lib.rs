//! pitchmatch library crate (used by the CLI and integration tests).
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Matching
//! - [`CatalogSync`], [`InvestorSource`], [`JsonInvestorSource`] - Keep the index in step with investor records
//! - [`Recommender`], [`StartupQuery`], [`CandidateMatch`] - Similarity retrieval plus hard-constraint filtering
//! - [`filter_candidates`], [`check_admissible`] - The ticket/stage filter on its own
//!
//! ## Scoring
//! - [`RubricEngine`], [`ScoringFramework`], [`ScoreReport`] - Weighted 0-100 pitch scoring
//! - [`VaderAnalyzer`], [`PolarityAnalyzer`] - Sentiment polarity
//! - [`Thresholds`], [`extract_currency`] - Quantitative criteria
//!
//! ## Infrastructure
//! - [`Config`], [`ConfigError`] - Environment configuration
//! - [`EmbeddingGateway`], [`StubEmbedder`], [`HttpEmbedder`] - Embedding generation
//! - [`VectorIndex`], [`QdrantIndex`] - Vector index access
//! - Hashing functions for point ids and record fingerprints
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod hashing;
pub mod matching;
pub mod scoring;
pub mod vectordb;

pub use catalog::{
    CatalogError, CatalogSync, Investor, InvestorRecord, InvestorSource, JsonInvestorSource,
    StoredInvestor, SyncOutcome, SyncReport, TicketRange,
};
pub use config::{Config, ConfigError};
pub use embedding::{EmbedderBackend, EmbeddingError, EmbeddingGateway, HttpEmbedder, StubEmbedder};
pub use hashing::{fingerprint_fields, hash_to_u64, investor_point_id};
pub use matching::{
    CandidateMatch, MatchingError, Recommender, Rejection, StartupQuery, check_admissible,
    filter_candidates,
};
#[cfg(any(test, feature = "mock"))]
pub use scoring::FixedPolarity;
pub use scoring::{
    AnalysisSource, CriterionType, ExtractedFacts, FrameworkRow, PitchCategory, PolarityAnalyzer,
    QuantitativeFact, RubricEngine, ScoreReport, ScoringDetail, ScoringError, ScoringFramework,
    Thresholds, VaderAnalyzer, extract_currency, score_pitch,
};
#[cfg(any(test, feature = "mock"))]
pub use vectordb::MockVectorIndex;
pub use vectordb::{
    IndexPoint, Metadata, MetadataValue, QdrantIndex, SearchHit, StoredPoint, VectorDbError,
    VectorIndex, WriteConsistency,
};
