//! Embedding capability: optional semantic backend for the match scorer.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

pub type Embedding = Vec<f32>;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Embedding API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Cannot embed empty text")]
    EmptyInput,

    #[error("Embedding backend returned an empty vector")]
    EmptyVector,
}

// ────────────────────────────────────────────────────────────────────────────
// Embedder trait
// ────────────────────────────────────────────────────────────────────────────

/// Capability interface over an embedding model. `similarity` defaults to
/// cosine; backends (or test stubs) may override it.
#[async_trait]
pub trait Embedder: Send + Sync {
    fn name(&self) -> &str;

    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError>;

    /// Embeds each text independently; one failure does not affect the others.
    async fn embed_batch(&self, texts: &[String]) -> Vec<Result<Embedding, EmbeddingError>> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.embed(text).await);
        }
        out
    }

    fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }
}

/// Cosine similarity in [-1, 1]. Zero when either vector is all zeros or the
/// dimensions differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

// ────────────────────────────────────────────────────────────────────────────
// Startup capability
// ────────────────────────────────────────────────────────────────────────────

/// Whether semantic matching can run. Logged at startup; the scorer branches
/// on this instead of null-checking a backend.
#[derive(Clone)]
pub enum EmbeddingCapability {
    Available(Arc<dyn Embedder>),
    Unavailable { reason: String },
}

impl EmbeddingCapability {
    pub fn available(embedder: Arc<dyn Embedder>) -> Self {
        info!("Embedding capability available (backend: {})", embedder.name());
        Self::Available(embedder)
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        warn!("Embedding capability unavailable: {reason}. Matching falls back to lexical only.");
        Self::Unavailable { reason }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn embedder(&self) -> Option<&Arc<dyn Embedder>> {
        match self {
            Self::Available(embedder) => Some(embedder),
            Self::Unavailable { .. } => None,
        }
    }

    /// "available" / "unavailable", for status reporting.
    pub fn state(&self) -> &'static str {
        if self.is_available() {
            "available"
        } else {
            "unavailable"
        }
    }
}

impl fmt::Debug for EmbeddingCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(embedder) => write!(f, "Available({})", embedder.name()),
            Self::Unavailable { reason } => write!(f, "Unavailable({reason})"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ollama-compatible HTTP backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}

/// Client for an Ollama-compatible `/api/embeddings` endpoint.
pub struct OllamaEmbedder {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaEmbedder {
    pub fn new(base_url: &str, model: &str) -> Result<Self, EmbeddingError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
        })
    }
}

#[async_trait]
impl Embedder for OllamaEmbedder {
    fn name(&self) -> &str {
        &self.model
    }

    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        let url = format!("{}/api/embeddings", self.base_url);
        debug!("Requesting embedding from {url} ({} chars)", text.len());

        let response = self
            .client
            .post(&url)
            .json(&EmbeddingRequest {
                model: &self.model,
                prompt: text,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: EmbeddingResponse = response.json().await?;
        if parsed.embedding.is_empty() {
            return Err(EmbeddingError::EmptyVector);
        }
        Ok(parsed.embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.3, 0.4, 0.5];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_and_opposite() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_unavailable_capability_state() {
        let capability = EmbeddingCapability::unavailable("EMBEDDING_URL not set");
        assert!(!capability.is_available());
        assert!(capability.embedder().is_none());
        assert_eq!(capability.state(), "unavailable");
    }

    #[test]
    fn test_ollama_embedder_trims_base_url() {
        let embedder = OllamaEmbedder::new("http://localhost:11434/", "mxbai-embed-large").unwrap();
        assert_eq!(embedder.base_url, "http://localhost:11434");
        assert_eq!(embedder.name(), "mxbai-embed-large");
    }

    #[tokio::test]
    async fn test_ollama_embedder_rejects_blank_text() {
        let embedder = OllamaEmbedder::new("http://localhost:11434", "mxbai-embed-large").unwrap();
        let result = embedder.embed("   ").await;
        assert!(matches!(result, Err(EmbeddingError::EmptyInput)));
    }
}
