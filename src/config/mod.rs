//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `PITCHMATCH_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::constants::{
    DEFAULT_COLLECTION_NAME, DEFAULT_EMBEDDING_DIM, DEFAULT_OVERFETCH_FACTOR,
    DEFAULT_SYNC_CONCURRENCY,
};

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PITCHMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Qdrant endpoint URL. Default: `http://localhost:6334`.
    pub qdrant_url: String,

    /// Collection holding investor vectors. Default: `investors`.
    pub collection_name: String,

    /// Embedding vector dimension. Default: `384`.
    pub embedding_dim: usize,

    /// OpenAI-compatible embeddings base URL. `None` selects the stub embedder.
    pub embedding_url: Option<String>,

    /// Model name sent to the embeddings endpoint.
    pub embedding_model: String,

    /// Bearer token for the embeddings endpoint.
    pub embedding_api_key: Option<String>,

    /// Index hits requested per wanted recommendation. Default: `3`.
    pub overfetch_factor: usize,

    /// Max investors synced concurrently. Default: `8`.
    pub sync_concurrency: usize,

    /// Reject framework rows that map to no pitch category. Default: `false`.
    pub strict_framework: bool,
}

/// Default Qdrant URL used when `PITCHMATCH_QDRANT_URL` is not set.
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6334";

/// Default embedding model name.
pub const DEFAULT_EMBEDDING_MODEL: &str = "BAAI/bge-small-en";

impl Default for Config {
    fn default() -> Self {
        Self {
            qdrant_url: DEFAULT_QDRANT_URL.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            embedding_url: None,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_api_key: None,
            overfetch_factor: DEFAULT_OVERFETCH_FACTOR,
            sync_concurrency: DEFAULT_SYNC_CONCURRENCY,
            strict_framework: false,
        }
    }
}

impl Config {
    const ENV_QDRANT_URL: &'static str = "PITCHMATCH_QDRANT_URL";
    const ENV_COLLECTION: &'static str = "PITCHMATCH_COLLECTION";
    const ENV_EMBEDDING_DIM: &'static str = "PITCHMATCH_EMBEDDING_DIM";
    const ENV_EMBEDDING_URL: &'static str = "PITCHMATCH_EMBEDDING_URL";
    const ENV_EMBEDDING_MODEL: &'static str = "PITCHMATCH_EMBEDDING_MODEL";
    const ENV_EMBEDDING_API_KEY: &'static str = "PITCHMATCH_EMBEDDING_API_KEY";
    const ENV_OVERFETCH_FACTOR: &'static str = "PITCHMATCH_OVERFETCH_FACTOR";
    const ENV_SYNC_CONCURRENCY: &'static str = "PITCHMATCH_SYNC_CONCURRENCY";
    const ENV_STRICT_FRAMEWORK: &'static str = "PITCHMATCH_STRICT_FRAMEWORK";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let qdrant_url = Self::parse_string_from_env(Self::ENV_QDRANT_URL, defaults.qdrant_url);
        let collection_name =
            Self::parse_string_from_env(Self::ENV_COLLECTION, defaults.collection_name);
        let embedding_dim =
            Self::parse_usize_from_env(Self::ENV_EMBEDDING_DIM, defaults.embedding_dim)?;
        let embedding_url = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_URL);
        let embedding_model =
            Self::parse_string_from_env(Self::ENV_EMBEDDING_MODEL, defaults.embedding_model);
        let embedding_api_key = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_API_KEY);
        let overfetch_factor =
            Self::parse_usize_from_env(Self::ENV_OVERFETCH_FACTOR, defaults.overfetch_factor)?;
        let sync_concurrency =
            Self::parse_usize_from_env(Self::ENV_SYNC_CONCURRENCY, defaults.sync_concurrency)?;
        let strict_framework =
            Self::parse_bool_from_env(Self::ENV_STRICT_FRAMEWORK, defaults.strict_framework)?;

        Ok(Self {
            qdrant_url,
            collection_name,
            embedding_dim,
            embedding_url,
            embedding_model,
            embedding_api_key,
            overfetch_factor,
            sync_concurrency,
            strict_framework,
        })
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collection_name.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_COLLECTION,
            });
        }

        if self.embedding_dim == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_EMBEDDING_DIM,
            });
        }

        if self.overfetch_factor == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_OVERFETCH_FACTOR,
            });
        }

        if self.sync_concurrency == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_SYNC_CONCURRENCY,
            });
        }

        if self.embedding_url.is_some() && self.embedding_model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_EMBEDDING_MODEL,
            });
        }

        Ok(())
    }

    /// Returns `true` when no embeddings endpoint is configured.
    pub fn uses_stub_embedder(&self) -> bool {
        self.embedding_url.is_none()
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }
}
