//! Skill vocabulary and the dictionary phrase matcher built on it.
//!
//! Entries and matched text share one canonical shape: lowercased word tokens,
//! each reduced to its singular form, joined by single spaces. "Microservices"
//! and "microservice" are therefore one entry.

use std::collections::HashSet;
use std::path::Path;

use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};
use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::extraction::skill_list::DEFAULT_SKILLS;
use crate::nlp::lemma::noun_lemma;
use crate::nlp::tokenizer::normalize_phrase;
use crate::nlp::Token;

/// Canonical form of a vocabulary entry or lookup phrase.
pub fn canonical_phrase(text: &str) -> String {
    normalize_phrase(text)
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(noun_lemma)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed set of known technical terms. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    terms: HashSet<String>,
    /// Sorted copy of `terms`; pattern ids index into it.
    patterns: Vec<String>,
    matcher: Option<AhoCorasick>,
}

impl SkillVocabulary {
    pub fn builtin() -> Result<Self> {
        Self::from_terms(DEFAULT_SKILLS.iter().copied())
    }

    pub fn from_terms<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        for term in terms {
            vocabulary.insert(term.as_ref());
        }
        vocabulary.rebuild_matcher()?;
        Ok(vocabulary)
    }

    /// Merges a newline-delimited term file into the vocabulary. Blank lines and
    /// `#` comments are skipped. Returns the number of new entries.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skills file '{}'", path.display()))?;
        let before = self.terms.len();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.insert(line);
        }
        self.rebuild_matcher()?;
        let added = self.terms.len() - before;
        info!("Loaded {added} extra skill terms from {}", path.display());
        Ok(added)
    }

    fn insert(&mut self, term: &str) {
        let canonical = canonical_phrase(term);
        if !canonical.is_empty() {
            self.terms.insert(canonical);
        }
    }

    // Patterns carry a trailing space and the haystack ends every token with
    // one, so a hit can only end on a token boundary. Searches are anchored
    // at token starts.
    fn rebuild_matcher(&mut self) -> Result<()> {
        let mut patterns: Vec<String> = self.terms.iter().cloned().collect();
        patterns.sort();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .start_kind(StartKind::Anchored)
            .build(patterns.iter().map(|p| format!("{p} ")))
            .context("Failed to build skill matcher")?;
        debug!("Skill matcher built over {} patterns", patterns.len());
        self.patterns = patterns;
        self.matcher = Some(matcher);
        Ok(())
    }

    /// Case- and inflection-insensitive membership test.
    pub fn contains(&self, phrase: &str) -> bool {
        self.entry_for(phrase).is_some()
    }

    /// The vocabulary entry `phrase` normalizes to, if any.
    pub fn entry_for(&self, phrase: &str) -> Option<String> {
        let canonical = canonical_phrase(phrase);
        self.terms.contains(&canonical).then_some(canonical)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Dictionary phrase matching over tagged tokens.
    ///
    /// The longest entry starting at each token is collected first; overlapping
    /// hits are then resolved by span length (longest wins, earlier start on
    /// ties), so "spring boot" beats "spring" regardless of list order.
    /// Returns the canonical vocabulary entries that matched.
    pub fn match_tokens(&self, tokens: &[Token]) -> Vec<String> {
        let Some(matcher) = &self.matcher else {
            return Vec::new();
        };

        let mut haystack = String::new();
        let mut starts = Vec::with_capacity(tokens.len());
        for token in tokens {
            starts.push(haystack.len());
            haystack.push_str(&noun_lemma(&token.text.to_lowercase()));
            haystack.push(' ');
        }

        // (first token, end token, pattern id)
        let mut hits: Vec<(usize, usize, usize)> = Vec::new();
        for (i, &offset) in starts.iter().enumerate() {
            let input = Input::new(&haystack)
                .range(offset..)
                .anchored(Anchored::Yes);
            if let Ok(Some(hit)) = matcher.try_find(input) {
                let end = starts.partition_point(|&s| s < hit.end());
                hits.push((i, end, hit.pattern().as_usize()));
            }
        }

        hits.sort_by(|a, b| (b.1 - b.0).cmp(&(a.1 - a.0)).then(a.0.cmp(&b.0)));

        let mut taken = vec![false; tokens.len()];
        let mut matched = Vec::new();
        for (start, end, pattern) in hits {
            if taken[start..end].iter().any(|t| *t) {
                continue;
            }
            taken[start..end].iter_mut().for_each(|t| *t = true);
            matched.push(self.patterns[pattern].clone());
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{LanguageModel, RuleTagger};
    use std::io::Write;

    fn match_text(vocabulary: &SkillVocabulary, text: &str) -> Vec<String> {
        let tagger = RuleTagger::with_stopwords(["the", "and"]).unwrap();
        let doc = tagger.tag(text);
        let mut matched = vocabulary.match_tokens(&doc.tokens);
        matched.sort();
        matched
    }

    #[test]
    fn test_builtin_vocabulary_is_normalized() {
        let vocabulary = SkillVocabulary::builtin().unwrap();
        assert!(vocabulary.len() > 300, "vocabulary has {} entries", vocabulary.len());
        assert!(vocabulary.contains("python"));
        assert!(vocabulary.contains("spring boot"));
        assert!(vocabulary.contains("node.js"));
        assert!(vocabulary.contains("c++"));
        assert!(vocabulary.contains("Python"));
        assert!(!vocabulary.contains("cobra"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let vocabulary = SkillVocabulary::builtin().unwrap();
        let matched = match_text(&vocabulary, "Looking for a Python and React developer with AWS experience.");
        assert_eq!(matched, vec!["aws", "python", "react"]);
    }

    #[test]
    fn test_longest_match_wins() {
        let vocabulary = SkillVocabulary::from_terms(["spring", "spring boot", "boot camp"]).unwrap();
        let matched = match_text(&vocabulary, "We use Spring Boot daily");
        assert_eq!(matched, vec!["spring boot"]);
    }

    #[test]
    fn test_overlap_resolved_by_length_not_order() {
        let vocabulary = SkillVocabulary::from_terms(["machine learning", "learning platform ops"]).unwrap();
        let matched = match_text(&vocabulary, "machine learning platform ops");
        assert_eq!(matched, vec!["learning platform ops"]);
    }

    #[test]
    fn test_symbol_terms_match() {
        let vocabulary = SkillVocabulary::builtin().unwrap();
        let matched = match_text(&vocabulary, "Strong C++ and Node.js skills, CI/CD pipelines.");
        assert_eq!(matched, vec!["c++", "ci/cd", "node.js"]);
    }

    #[test]
    fn test_plural_and_singular_entries_collapse() {
        let vocabulary = SkillVocabulary::from_terms(["microservice", "microservices", "Neural Networks"]).unwrap();
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("neural network"));

        let matched = match_text(&vocabulary, "Microservices and neural networks; one microservice.");
        assert_eq!(matched, vec!["microservice", "microservice", "neural network"]);
    }

    #[test]
    fn test_builtin_plurals_match_singular_entries() {
        let vocabulary = SkillVocabulary::builtin().unwrap();
        let matched = match_text(&vocabulary, "Design REST APIs and WebSockets for our microservices.");
        assert_eq!(matched, vec!["microservice", "rest api", "websocket"]);
    }

    #[test]
    fn test_match_respects_token_boundaries() {
        let vocabulary = SkillVocabulary::from_terms(["rust", "go"]).unwrap();
        let matched = match_text(&vocabulary, "We trust Rust over Golang and google it");
        assert_eq!(matched, vec!["rust"]);
    }

    #[test]
    fn test_empty_vocabulary_matches_nothing() {
        let vocabulary = SkillVocabulary::default();
        assert!(match_text(&vocabulary, "Python and Rust").is_empty());
    }

    #[test]
    fn test_extend_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# internal tools").unwrap();
        writeln!(file, "Bazel").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "python").unwrap();
        writeln!(file, "Bazel Rules").unwrap();

        let mut vocabulary = SkillVocabulary::builtin().unwrap();
        let before = vocabulary.len();
        let added = vocabulary.extend_from_file(file.path()).unwrap();
        assert_eq!(added, 2);
        assert_eq!(vocabulary.len(), before + 2);
        assert!(vocabulary.contains("bazel"));
        assert_eq!(match_text(&vocabulary, "We build with Bazel rules"), vec!["bazel rule"]);
    }

    #[test]
    fn test_extend_from_missing_file_errors() {
        let mut vocabulary = SkillVocabulary::builtin().unwrap();
        let result = vocabulary.extend_from_file(Path::new("/nonexistent/skills.txt"));
        assert!(result.is_err());
    }
}
