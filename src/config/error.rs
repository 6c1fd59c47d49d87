//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Boolean variable was not one of the accepted spellings.
    #[error("invalid boolean {name}='{value}': expected true/false/1/0/yes/no/on/off")]
    InvalidBool { name: &'static str, value: String },

    /// A setting that must be positive was zero.
    #[error("{name} must be greater than zero")]
    ZeroValue { name: &'static str },

    /// A setting that must be non-empty was blank.
    #[error("{name} must not be empty")]
    EmptyValue { name: &'static str },
}
