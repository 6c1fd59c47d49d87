//! Rubric scoring of a pitch against a weighted framework.
//!
//! Each framework row is scored 1-5 and the weighted aggregate is scaled to 0-100:
//!
//! - Qualitative rows: sentiment bucket of the matching analysis text, adjusted by
//!   keyword signals, rounded half-to-even and clamped to `[1, 5]`.
//! - Quantitative rows: routed by element keyword (market before traction) to a currency
//!   figure pulled from the extracted facts, mapped through
//!   [`Thresholds`]. Market-size figures are gated by the confidence of the market analysis.
//! - Anything that cannot be computed scores a neutral 3.

pub mod category;
pub mod engine;
pub mod error;
pub mod extraction;
pub mod keywords;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod sentiment;
pub mod thresholds;
pub mod types;

#[cfg(test)]
mod tests;

pub use category::{PitchCategory, QuantitativeFact};
pub use engine::{Criterion, RubricEngine, ScoringFramework, score_pitch};
pub use error::ScoringError;
pub use extraction::{AnalysisSource, ExtractedFacts, FactValue, extract_currency};
pub use keywords::{NEGATIVE_SIGNALS, POSITIVE_SIGNALS, keyword_adjustment};
#[cfg(any(test, feature = "mock"))]
pub use mock::FixedPolarity;
pub use sentiment::{PolarityAnalyzer, VaderAnalyzer, sentiment_bucket};
pub use thresholds::{Thresholds, gate_by_confidence};
pub use types::{CriterionType, FrameworkRow, ScoreReport, ScoringDetail};
