//! Keyword Extraction Pipeline: tags a JD once, gathers candidates from every
//! source, then runs the noise & dedup filter.

use std::sync::Arc;

use tracing::debug;

use crate::extraction::candidates::{CandidateSet, Provenance};
use crate::extraction::entities::filter_entities;
use crate::extraction::noise::{filter_candidates, NoiseLists};
use crate::extraction::noun_phrases::extract_noun_phrases;
use crate::extraction::skills::SkillVocabulary;
use crate::nlp::{LanguageModel, PosTag, TaggedDoc};

/// Stateless per call; shares the read-only model, vocabulary and noise lists.
#[derive(Clone)]
pub struct KeywordExtractor {
    model: Arc<dyn LanguageModel>,
    vocabulary: Arc<SkillVocabulary>,
    noise: Arc<NoiseLists>,
}

impl KeywordExtractor {
    pub fn new(
        model: Arc<dyn LanguageModel>,
        vocabulary: Arc<SkillVocabulary>,
        noise: Arc<NoiseLists>,
    ) -> Self {
        Self {
            model,
            vocabulary,
            noise,
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Sorted, de-duplicated lowercase keywords for a JD. Blank input yields
    /// an empty list; finding nothing is not an error.
    pub fn extract(&self, jd_text: &str) -> Vec<String> {
        if jd_text.trim().is_empty() {
            return Vec::new();
        }

        let doc = self.model.tag(jd_text);
        let candidates = self.collect_candidates(&doc);
        let (keywords, stats) = filter_candidates(&candidates, &self.vocabulary, &self.noise);

        debug!(
            dictionary = candidates.count_by(Provenance::Dictionary),
            entity = candidates.count_by(Provenance::Entity),
            noun_phrase = candidates.count_by(Provenance::NounPhrase),
            single_token = candidates.count_by(Provenance::SingleToken),
            dropped_noise_phrases = stats.noise_phrases,
            dropped_noise_words = stats.noise_words,
            dropped_contained = stats.contained,
            kept = keywords.len(),
            "Keyword extraction finished"
        );

        keywords
    }

    fn collect_candidates(&self, doc: &TaggedDoc) -> CandidateSet {
        let mut candidates = CandidateSet::new();
        candidates.extend(self.vocabulary.match_tokens(&doc.tokens), Provenance::Dictionary);
        candidates.extend(
            filter_entities(doc, &self.vocabulary, self.model.as_ref()),
            Provenance::Entity,
        );
        candidates.extend(extract_noun_phrases(doc), Provenance::NounPhrase);
        candidates.extend(single_tokens(doc), Provenance::SingleToken);
        candidates
    }
}

/// Lemmas of content tokens (nouns, proper nouns, adjectives).
fn single_tokens(doc: &TaggedDoc) -> Vec<String> {
    doc.tokens
        .iter()
        .filter(|t| matches!(t.pos, PosTag::Noun | PosTag::Propn | PosTag::Adj))
        .filter(|t| !t.is_stop && !t.is_punct && !t.is_space && !t.is_numeric)
        .map(|t| t.lemma.trim().to_string())
        .filter(|lemma| lemma.chars().count() >= 2 && lemma.chars().any(|c| c.is_alphabetic()))
        .collect()
}
