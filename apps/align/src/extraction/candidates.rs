//! Candidate keywords keyed by phrase. Each phrase remembers the strongest
//! source that produced it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Which candidate source produced a phrase. Ordered by precedence: when the
/// same phrase arrives from several sources, the highest one is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    SingleToken,
    NounPhrase,
    Entity,
    Dictionary,
}

/// Candidate phrases for one JD, keyed by lowercased lemma text.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    phrases: HashMap<String, Provenance>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a phrase, keeping the higher-precedence provenance on collision.
    /// Blank phrases are ignored.
    pub fn insert(&mut self, phrase: &str, provenance: Provenance) {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() {
            return;
        }
        self.phrases
            .entry(phrase)
            .and_modify(|p| *p = (*p).max(provenance))
            .or_insert(provenance);
    }

    pub fn extend<I, S>(&mut self, phrases: I, provenance: Provenance)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for phrase in phrases {
            self.insert(phrase.as_ref(), provenance);
        }
    }

    pub fn provenance(&self, phrase: &str) -> Option<Provenance> {
        self.phrases.get(phrase).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Provenance)> {
        self.phrases.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn count_by(&self, provenance: Provenance) -> usize {
        self.phrases.values().filter(|p| **p == provenance).count()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
