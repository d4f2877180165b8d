//! Improvement suggestions: builds an advisor prompt from the JD, the résumé
//! text and the JD keywords, then asks the LLM. Failures never propagate; the
//! caller always gets a message string back.

pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::llm_client::prompts::ADVISOR_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

pub use prompts::build_prompt;

pub const UNAVAILABLE_MESSAGE: &str =
    "Suggestion service is currently unavailable or not configured.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub resume_id: String,
    pub suggestions: String,
    /// The exact prompt sent to the LLM, for debugging.
    pub prompt_used: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Backend seam
// ────────────────────────────────────────────────────────────────────────────

/// Text generation backend. `LlmClient` in production; stubs in tests.
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl SuggestionBackend for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.complete(prompt, ADVISOR_SYSTEM).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SuggestionEngine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SuggestionEngine {
    backend: Option<Arc<dyn SuggestionBackend>>,
}

impl SuggestionEngine {
    pub fn new(backend: Option<Arc<dyn SuggestionBackend>>) -> Self {
        Self { backend }
    }

    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn suggest(
        &self,
        resume_id: &str,
        jd_text: &str,
        resume_text: &str,
        keywords: &[String],
    ) -> SuggestionResponse {
        let prompt = build_prompt(jd_text, resume_text, keywords);
        let suggestions = self.generate(&prompt).await;

        SuggestionResponse {
            resume_id: resume_id.to_string(),
            suggestions,
            prompt_used: prompt,
        }
    }

    async fn generate(&self, prompt: &str) -> String {
        let Some(backend) = &self.backend else {
            info!("No LLM configured, returning unavailable message");
            return UNAVAILABLE_MESSAGE.to_string();
        };

        match backend.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!("Suggestion generation failed: {e}");
                format!("An error occurred while generating suggestions: {e}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoBackend;

    #[async_trait]
    impl SuggestionBackend for EchoBackend {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            Ok(format!("{} chars received", prompt.len()))
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl SuggestionBackend for FailingBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 401,
                message: "invalid x-api-key".to_string(),
            })
        }
    }

    fn keywords() -> Vec<String> {
        vec!["kafka".to_string()]
    }

    #[tokio::test]
    async fn test_unavailable_engine_returns_message() {
        let engine = SuggestionEngine::unavailable();
        assert!(!engine.is_available());
        let response = engine.suggest("r1", "JD text", "Résumé text", &keywords()).await;
        assert_eq!(response.suggestions, UNAVAILABLE_MESSAGE);
        assert_eq!(response.resume_id, "r1");
        assert!(response.prompt_used.contains("kafka"));
    }

    #[tokio::test]
    async fn test_backend_output_returned() {
        let engine = SuggestionEngine::new(Some(Arc::new(EchoBackend)));
        let response = engine.suggest("r2", "JD text", "Résumé text", &keywords()).await;
        assert_eq!(
            response.suggestions,
            format!("{} chars received", response.prompt_used.len())
        );
    }

    #[tokio::test]
    async fn test_backend_failure_absorbed_into_message() {
        let engine = SuggestionEngine::new(Some(Arc::new(FailingBackend)));
        let response = engine.suggest("r3", "JD text", "Résumé text", &[]).await;
        assert!(response.suggestions.starts_with("An error occurred while generating suggestions"));
        assert!(response.suggestions.contains("invalid x-api-key"));
    }
}
