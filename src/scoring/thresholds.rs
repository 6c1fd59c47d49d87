use super::error::ScoringError;
use crate::constants::{MAX_CRITERION_SCORE, MIN_CRITERION_SCORE, NEUTRAL_CRITERION_SCORE};

/// Market size in billions of USD.
const MARKET_SIZE_BUCKETS: [(f64, u8); 4] = [(1.0, 1), (5.0, 3), (10.0, 4), (100.0, 5)];

/// Monthly recurring revenue in USD.
const TRACTION_REVENUE_BUCKETS: [(f64, u8); 4] = [
    (10_000.0, 1),
    (50_000.0, 3),
    (100_000.0, 4),
    (1_000_000.0, 5),
];

/// Ascending `(upper_bound, score)` buckets.
///
/// A value takes the score of the first bucket whose bound is `>=` it; values above every
/// bound take the last bucket's score.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    buckets: Vec<(f64, u8)>,
}

impl Thresholds {
    pub fn new(buckets: Vec<(f64, u8)>) -> Result<Self, ScoringError> {
        if buckets.is_empty() {
            return Err(ScoringError::InvalidThresholds {
                reason: "at least one bucket is required".to_string(),
            });
        }

        for &(bound, score) in &buckets {
            if bound.is_nan() {
                return Err(ScoringError::InvalidThresholds {
                    reason: "bucket bound is NaN".to_string(),
                });
            }
            if !(MIN_CRITERION_SCORE..=MAX_CRITERION_SCORE).contains(&score) {
                return Err(ScoringError::InvalidThresholds {
                    reason: format!("bucket score {score} outside 1-5"),
                });
            }
        }

        if buckets.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(ScoringError::InvalidThresholds {
                reason: "bucket bounds must be strictly ascending".to_string(),
            });
        }

        Ok(Self { buckets })
    }

    pub fn market_size() -> Self {
        Self {
            buckets: MARKET_SIZE_BUCKETS.to_vec(),
        }
    }

    pub fn traction_revenue() -> Self {
        Self {
            buckets: TRACTION_REVENUE_BUCKETS.to_vec(),
        }
    }

    pub fn buckets(&self) -> &[(f64, u8)] {
        &self.buckets
    }

    pub fn score(&self, value: f64) -> u8 {
        self.buckets
            .iter()
            .find(|(bound, _)| value <= *bound)
            .or_else(|| self.buckets.last())
            .map(|&(_, score)| score)
            .unwrap_or(NEUTRAL_CRITERION_SCORE)
    }
}

/// Applies a confidence bucket to a threshold-mapped score.
///
/// Confident text (4-5) passes the score through, neutral text (3) caps it at 3, and
/// anything lower forces 2 regardless of the figure.
pub fn gate_by_confidence(confidence_bucket: u8, mapped_score: u8) -> u8 {
    match confidence_bucket {
        4.. => mapped_score,
        3 => mapped_score.min(3),
        _ => 2,
    }
}
