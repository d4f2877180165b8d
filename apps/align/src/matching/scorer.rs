//! Match Scorer: résumé text vs a JD keyword set.
//!
//! Two tiers per keyword:
//! 1. lexical: the keyword is a literal substring of the lowercased résumé
//! 2. semantic: only when embeddings are available, the best cosine similarity
//!    between the keyword and any résumé sentence reaches the threshold
//!
//! score = matched / total × 100, rounded to 2 decimals.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::matching::embeddings::{Embedder, Embedding, EmbeddingCapability};
use crate::nlp::LanguageModel;

// ────────────────────────────────────────────────────────────────────────────
// Report data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Lexical,
    Semantic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub tier: MatchTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: f64, // 0 – 100, 2 decimals
    pub matched: Vec<KeywordMatch>,
    pub missing: Vec<String>,
    pub recommendation: String,
    pub scorer_backend: String, // "lexical" | "lexical+embedding"
}

// ────────────────────────────────────────────────────────────────────────────
// MatchScorer: lexical tier, then optional semantic tier
// ────────────────────────────────────────────────────────────────────────────

/// Holds the shared tagging model (for sentence splitting), the embedding
/// capability and the similarity threshold. Cheap to clone.
#[derive(Clone)]
pub struct MatchScorer {
    model: Arc<dyn LanguageModel>,
    embeddings: EmbeddingCapability,
    threshold: f32,
}

impl MatchScorer {
    pub fn new(model: Arc<dyn LanguageModel>, embeddings: EmbeddingCapability, threshold: f32) -> Self {
        Self {
            model,
            embeddings,
            threshold,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn embeddings(&self) -> &EmbeddingCapability {
        &self.embeddings
    }

    pub fn backend(&self) -> &'static str {
        if self.embeddings.is_available() {
            "lexical+embedding"
        } else {
            "lexical"
        }
    }

    pub async fn score(&self, resume_text: &str, keywords: &[String]) -> f64 {
        self.evaluate(resume_text, keywords).await.score
    }

    /// Full per-keyword breakdown. Never fails: empty inputs score 0.0 and
    /// embedding errors count as "no match" for the affected phrase.
    pub async fn evaluate(&self, resume_text: &str, keywords: &[String]) -> MatchReport {
        let keywords = normalize_keywords(keywords);

        if keywords.is_empty() {
            return MatchReport {
                score: 0.0,
                matched: vec![],
                missing: vec![],
                recommendation: "No keywords found in the job description, cannot score fit.".to_string(),
                scorer_backend: self.backend().to_string(),
            };
        }

        let resume_lower = resume_text.to_lowercase();
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();

        if resume_lower.trim().is_empty() {
            unmatched = keywords.clone();
        } else {
            for keyword in &keywords {
                if resume_lower.contains(keyword.as_str()) {
                    matched.push(KeywordMatch {
                        keyword: keyword.clone(),
                        tier: MatchTier::Lexical,
                        similarity: None,
                    });
                } else {
                    unmatched.push(keyword.clone());
                }
            }
        }
        let lexical_hits = matched.len();

        let missing = match self.embeddings.embedder() {
            Some(embedder) if !unmatched.is_empty() && !resume_lower.trim().is_empty() => {
                let (semantic, missing) = self.semantic_pass(embedder, resume_text, unmatched).await;
                matched.extend(semantic);
                missing
            }
            _ => unmatched,
        };

        let score = round2(matched.len() as f64 / keywords.len() as f64 * 100.0);

        debug!(
            total = keywords.len(),
            lexical_hits,
            semantic_hits = matched.len() - lexical_hits,
            lexical_only = !self.embeddings.is_available(),
            score,
            "Match scoring finished"
        );

        MatchReport {
            score,
            recommendation: build_recommendation(score, &missing),
            matched,
            missing,
            scorer_backend: self.backend().to_string(),
        }
    }

    /// Embeds the résumé sentences once, then each unmatched keyword. Returns
    /// (semantic matches, still missing).
    async fn semantic_pass(
        &self,
        embedder: &Arc<dyn Embedder>,
        resume_text: &str,
        unmatched: Vec<String>,
    ) -> (Vec<KeywordMatch>, Vec<String>) {
        let sentences = self.model.sentences(resume_text);
        let sentence_vectors: Vec<Embedding> = embedder
            .embed_batch(&sentences)
            .await
            .into_iter()
            .filter_map(|result| match result {
                Ok(vector) => Some(vector),
                Err(e) => {
                    warn!("Failed to embed résumé sentence: {e}");
                    None
                }
            })
            .collect();

        if sentence_vectors.is_empty() {
            warn!("No résumé sentence could be embedded; semantic pass skipped");
            return (vec![], unmatched);
        }

        let mut semantic = Vec::new();
        let mut missing = Vec::new();

        for keyword in unmatched {
            let phrase_vector = match embedder.embed(&keyword).await {
                Ok(vector) => vector,
                Err(e) => {
                    warn!("Failed to embed keyword '{keyword}': {e}");
                    missing.push(keyword);
                    continue;
                }
            };

            let best = sentence_vectors
                .iter()
                .map(|sentence| embedder.similarity(&phrase_vector, sentence))
                .fold(f32::NEG_INFINITY, f32::max);

            if best >= self.threshold {
                semantic.push(KeywordMatch {
                    keyword,
                    tier: MatchTier::Semantic,
                    similarity: Some(best),
                });
            } else {
                missing.push(keyword);
            }
        }

        (semantic, missing)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Trims, lowercases, drops empties and collapses duplicates (first
/// occurrence wins the position).
pub fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Builds a human-readable recommendation string from score and missing keywords.
fn build_recommendation(score: f64, missing: &[String]) -> String {
    let top_missing: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();

    if score >= 80.0 {
        "Strong fit. Your résumé directly covers the key JD requirements.".to_string()
    } else if score >= 60.0 {
        format!(
            "Moderate fit ({score}/100). Consider adding evidence for: {}.",
            top_missing.join(", ")
        )
    } else {
        format!(
            "Low fit ({score}/100). Significant gaps: {}. Consider tailoring your résumé before applying.",
            top_missing.join(", ")
        )
    }
}
