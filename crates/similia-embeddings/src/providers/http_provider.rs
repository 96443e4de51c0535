//! HTTP embedding service provider.
//!
//! Speaks a minimal JSON contract: POST `{"model", "input"}` to the
//! configured endpoint, receive `{"embedding": [...]}`
//! (or `{"embeddings": [[...]]}` for batches).

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use similia_core::config::EmbeddingConfig;
use similia_core::errors::{EmbeddingError, SimiliaError, SimiliaResult};
use similia_core::text::truncate_chars;
use similia_core::EmbeddingProvider;

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

#[derive(Deserialize)]
struct EmbedBatchResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Client for the external text→vector service.
///
/// The request timeout is set on the underlying client. A timed-out or
/// refused call surfaces as `ServiceUnavailable` and is never retried
/// here; the engine's one-way downgrade handles it.
pub struct HttpProvider {
    client: reqwest::blocking::Client,
    config: EmbeddingConfig,
    /// Result of the one-time availability probe.
    available: OnceLock<bool>,
}

impl HttpProvider {
    pub fn new(config: EmbeddingConfig) -> SimiliaResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmbeddingError::ClientBuild {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            config,
            available: OnceLock::new(),
        })
    }

    /// An unreachable or timed-out service is a different failure class
    /// than a reachable one returning garbage.
    fn transport_error(&self, e: reqwest::Error) -> SimiliaError {
        if e.is_connect() || e.is_timeout() {
            EmbeddingError::ServiceUnavailable {
                endpoint: self.config.endpoint.clone(),
            }
            .into()
        } else {
            EmbeddingError::RequestFailed {
                reason: e.to_string(),
            }
            .into()
        }
    }

    fn request_one(&self, text: &str) -> SimiliaResult<Vec<f32>> {
        let body = serde_json::json!({
            "model": self.config.model,
            "input": truncate_chars(text, self.config.max_chars),
        });

        let response: EmbedResponse = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.transport_error(e))?
            .json()
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: format!("malformed response: {e}"),
            })?;

        self.check_dimensions(response.embedding.len())?;
        Ok(response.embedding)
    }

    fn check_dimensions(&self, actual: usize) -> SimiliaResult<()> {
        if actual != self.config.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.config.dimensions,
                actual,
            }
            .into());
        }
        Ok(())
    }
}

impl EmbeddingProvider for HttpProvider {
    fn embed(&self, text: &str) -> SimiliaResult<Vec<f32>> {
        self.request_one(text)
    }

    fn embed_batch(&self, texts: &[String]) -> SimiliaResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let inputs: Vec<&str> = texts
            .iter()
            .map(|t| truncate_chars(t, self.config.max_chars))
            .collect();
        let body = serde_json::json!({
            "model": self.config.model,
            "input": inputs,
        });

        let response: EmbedBatchResponse = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.transport_error(e))?
            .json()
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: format!("malformed response: {e}"),
            })?;

        if response.embeddings.len() != texts.len() {
            return Err(EmbeddingError::RequestFailed {
                reason: format!(
                    "service returned {} embeddings for {} inputs",
                    response.embeddings.len(),
                    texts.len()
                ),
            }
            .into());
        }
        for vec in &response.embeddings {
            self.check_dimensions(vec.len())?;
        }
        Ok(response.embeddings)
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn name(&self) -> &str {
        &self.config.model
    }

    /// One probe request, evaluated once per provider lifetime. The mode
    /// decision happens once at engine construction.
    fn is_available(&self) -> bool {
        *self.available.get_or_init(|| match self.request_one("ping") {
            Ok(_) => {
                debug!(endpoint = %self.config.endpoint, "embedding service reachable");
                true
            }
            Err(e) => {
                warn!(
                    endpoint = %self.config.endpoint,
                    error = %e,
                    "embedding service unreachable"
                );
                false
            }
        })
    }
}
