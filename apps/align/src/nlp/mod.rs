//! Lexical Tagger: tokens with lemmas and POS tags, plus entity and noun-chunk spans.
//!
//! Everything above this layer talks to a `LanguageModel` trait object, so the
//! rule-based backend can be swapped for a statistical one (or a stub in tests)
//! without touching extraction or scoring.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod lemma;
pub mod lexicon;
pub mod tagger;
pub mod tokenizer;

pub use tagger::RuleTagger;

/// Coarse universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    Propn,
    Adj,
    Verb,
    Adv,
    Aux,
    Det,
    Adp,
    Cconj,
    Sconj,
    Pron,
    Part,
    Num,
    Punct,
    Space,
}

/// A single token of tagged text. Produced per call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Lowercased base form.
    pub lemma: String,
    pub pos: PosTag,
    pub is_stop: bool,
    pub is_punct: bool,
    pub is_space: bool,
    pub is_numeric: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Org,
    Product,
    Language,
    WorkOfArt,
    Gpe,
    Date,
    Cardinal,
    Percent,
    Money,
}

/// Half-open token range `[start, end)` into `TaggedDoc::tokens`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    pub span: Span,
    pub label: EntityLabel,
    /// Surface text of the span, tokens joined by single spaces.
    pub text: String,
}

/// Output of one tagging call.
#[derive(Debug, Clone, Default)]
pub struct TaggedDoc {
    pub tokens: Vec<Token>,
    pub entities: Vec<EntitySpan>,
    pub noun_chunks: Vec<Span>,
}

impl TaggedDoc {
    pub fn tokens_in(&self, span: Span) -> &[Token] {
        &self.tokens[span.start..span.end.min(self.tokens.len())]
    }
}

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("language resource '{0}' is empty or missing")]
    MissingResource(&'static str),
}

/// Capability interface over the tagging model.
///
/// Implementations hold only immutable state loaded at construction, so a
/// single instance is shared across threads behind an `Arc`.
pub trait LanguageModel: Send + Sync {
    /// Backend name, for logging.
    fn name(&self) -> &str;

    /// Normalizes whitespace and tags the text.
    fn tag(&self, text: &str) -> TaggedDoc;

    /// Splits raw text into sentences (line breaks are hard boundaries).
    fn sentences(&self, text: &str) -> Vec<String>;

    fn is_stopword(&self, word: &str) -> bool;
}

/// Collapses every newline variant and whitespace run into a single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True for tokens made only of digits and numeric punctuation (`3`, `2.5`, `1,000`).
pub fn is_numeric_like(text: &str) -> bool {
    let mut has_digit = false;
    for c in text.chars() {
        if c.is_ascii_digit() {
            has_digit = true;
        } else if !matches!(c, '.' | ',' | '%' | '+' | '-') {
            return false;
        }
    }
    has_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace_collapses_newlines() {
        let text = "Senior\r\nRust   Engineer\rRemote\n\n\tUS ";
        assert_eq!(normalize_whitespace(text), "Senior Rust Engineer Remote US");
    }

    #[test]
    fn test_normalize_whitespace_blank() {
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_is_numeric_like() {
        assert!(is_numeric_like("2024"));
        assert!(is_numeric_like("3.5"));
        assert!(is_numeric_like("5+"));
        assert!(is_numeric_like("1,000"));
        assert!(!is_numeric_like("python3"));
        assert!(!is_numeric_like("+"));
    }

    #[test]
    fn test_span_len() {
        let span = Span { start: 2, end: 5 };
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
    }
}
