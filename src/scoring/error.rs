use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid weight {weight} for '{element}': must be within [0, 1]")]
    InvalidWeight { element: String, weight: f64 },

    #[error("framework row '{element}' has no weight")]
    MissingWeight { element: String },

    #[error("framework row '{element}' cannot be scored: {reason}")]
    UnmappedCriterion { element: String, reason: String },

    #[error("invalid thresholds: {reason}")]
    InvalidThresholds { reason: String },

    #[error("failed to parse scoring input: {0}")]
    Parse(#[from] serde_json::Error),
}
