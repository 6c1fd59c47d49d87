use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{EmbeddingError, EmbeddingGateway};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Embeddings client for OpenAI-compatible endpoints.
///
/// Failures are returned as-is; there is no retry loop.
#[derive(Clone)]
pub struct HttpEmbedder {
    client: Client,
    endpoint: String,
    model: String,
    dimension: usize,
}

impl std::fmt::Debug for HttpEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEmbedder")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl HttpEmbedder {
    /// Builds a client for `{base_url}/embeddings`.
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: Option<&str>,
        dimension: usize,
    ) -> Result<Self, EmbeddingError> {
        if model.trim().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "missing embedding model name".to_string(),
            });
        }
        if dimension == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding dimension must be > 0".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
            let auth = HeaderValue::from_str(&format!("Bearer {key}")).map_err(|e| {
                EmbeddingError::InvalidConfig {
                    reason: format!("invalid API key header: {e}"),
                }
            })?;
            headers.insert(AUTHORIZATION, auth);
        }

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| EmbeddingError::InvalidConfig {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/embeddings", base_url.trim_end_matches('/')),
            model: model.to_string(),
            dimension,
        })
    }

    /// Returns the full embeddings URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_failed(&self, message: impl ToString) -> EmbeddingError {
        EmbeddingError::RequestFailed {
            endpoint: self.endpoint.clone(),
            message: message.to_string(),
        }
    }
}

impl EmbeddingGateway for HttpEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        debug!(text_len = text.len(), endpoint = %self.endpoint, "Requesting embedding");

        let input = [text];
        let request = EmbeddingRequest {
            model: &self.model,
            input: &input,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.request_failed(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(self.request_failed(format!("{status}: {body}")));
        }

        let parsed: EmbeddingResponse =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        extract_single_embedding(parsed, self.dimension)
    }
}

fn extract_single_embedding(
    mut parsed: EmbeddingResponse,
    dimension: usize,
) -> Result<Vec<f32>, EmbeddingError> {
    parsed.data.sort_by_key(|entry| entry.index);
    let embedding = parsed
        .data
        .into_iter()
        .next()
        .map(|entry| entry.embedding)
        .ok_or_else(|| EmbeddingError::InvalidResponse {
            reason: "response contained no embeddings".to_string(),
        })?;

    if embedding.len() != dimension {
        return Err(EmbeddingError::DimensionMismatch {
            expected: dimension,
            actual: embedding.len(),
        });
    }

    Ok(embedding)
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}
