use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::extraction::{KeywordExtractor, NoiseLists, SkillVocabulary};
use crate::llm_client::{self, LlmClient};
use crate::matching::{EmbeddingCapability, MatchScorer, OllamaEmbedder};
use crate::nlp::{LanguageModel, RuleTagger};
use crate::suggestions::{SuggestionBackend, SuggestionEngine};

/// Shared, read-only state built once at startup. Every component inside is
/// immutable after construction, so clones share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub extractor: KeywordExtractor,
    pub scorer: MatchScorer,
    pub suggestions: SuggestionEngine,
}

impl AppState {
    /// Fails only for unusable configuration or a missing tagging model. A
    /// missing embedding backend or LLM key degrades instead.
    pub fn build(config: &Config) -> Result<Self, AppError> {
        if !(0.0..=1.0).contains(&config.similarity_threshold) {
            return Err(AppError::Config(format!(
                "similarity threshold must be within [0, 1], got {}",
                config.similarity_threshold
            )));
        }

        let model: Arc<dyn LanguageModel> = Arc::new(RuleTagger::new()?);
        info!("Language model initialized (backend: {})", model.name());

        let mut vocabulary = SkillVocabulary::builtin()?;
        if let Some(path) = &config.skills_file {
            vocabulary
                .extend_from_file(path)
                .map_err(|e| AppError::Config(format!("{e:#}")))?;
        }
        let noise = NoiseLists::builtin();
        info!(
            "Skill vocabulary: {} terms; noise lists: {} words, {} phrases",
            vocabulary.len(),
            noise.word_count(),
            noise.phrase_count()
        );

        let extractor = KeywordExtractor::new(model.clone(), Arc::new(vocabulary), Arc::new(noise));

        let embeddings = build_embeddings(config);
        let scorer = MatchScorer::new(model, embeddings, config.similarity_threshold);
        info!(
            "Match scorer: backend={}, threshold={}",
            scorer.backend(),
            scorer.threshold()
        );

        let suggestions = match &config.anthropic_api_key {
            Some(key) => {
                let client = LlmClient::new(key.clone())?;
                info!("LLM client initialized (model: {})", llm_client::MODEL);
                SuggestionEngine::new(Some(Arc::new(client) as Arc<dyn SuggestionBackend>))
            }
            None => {
                info!("ANTHROPIC_API_KEY not set; suggestions unavailable");
                SuggestionEngine::unavailable()
            }
        };

        Ok(Self {
            config: config.clone(),
            extractor,
            scorer,
            suggestions,
        })
    }
}

fn build_embeddings(config: &Config) -> EmbeddingCapability {
    let Some(url) = &config.embedding_url else {
        return EmbeddingCapability::unavailable("EMBEDDING_URL not set");
    };
    match OllamaEmbedder::new(url, &config.embedding_model) {
        Ok(embedder) => EmbeddingCapability::available(Arc::new(embedder)),
        Err(e) => EmbeddingCapability::unavailable(format!("failed to build embedding client: {e}")),
    }
}
