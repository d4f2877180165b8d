//! Noun-phrase candidates: noun chunks with determiners, stopwords and numbers
//! stripped, lemmatized and length-bounded.

use crate::nlp::{is_numeric_like, TaggedDoc, Token};

const MIN_PHRASE_CHARS: usize = 3;
const MAX_PHRASE_CHARS: usize = 50;

/// Cleans every noun chunk into a lemma phrase and keeps the plausible ones.
pub fn extract_noun_phrases(doc: &TaggedDoc) -> Vec<String> {
    doc.noun_chunks
        .iter()
        .filter_map(|span| clean_chunk(doc.tokens_in(*span)))
        .collect()
}

/// Drops stopword, punctuation, whitespace and numeric tokens, then joins the
/// remaining lemmas. Keeps phrases strictly between 3 and 50 characters that
/// contain at least one letter.
pub fn clean_chunk(tokens: &[Token]) -> Option<String> {
    let phrase = tokens
        .iter()
        .filter(|t| !t.is_stop && !t.is_punct && !t.is_space && !t.is_numeric)
        .map(|t| t.lemma.trim().to_lowercase())
        .filter(|lemma| !lemma.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let len = phrase.chars().count();
    let keep = len > MIN_PHRASE_CHARS
        && len < MAX_PHRASE_CHARS
        && !is_numeric_like(&phrase.replace(' ', ""))
        && phrase.chars().any(|c| c.is_alphabetic());
    keep.then_some(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{LanguageModel, PosTag, RuleTagger};

    fn token(text: &str, lemma: &str, is_stop: bool) -> Token {
        Token {
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos: PosTag::Noun,
            is_stop,
            is_punct: false,
            is_space: false,
            is_numeric: text.chars().all(|c| c.is_ascii_digit()),
        }
    }

    #[test]
    fn test_clean_chunk_strips_stopwords_and_lemmatizes() {
        let tokens = vec![
            token("the", "the", true),
            token("data", "data", false),
            token("analysis", "analysis", false),
            token("skills", "skill", false),
        ];
        assert_eq!(clean_chunk(&tokens).as_deref(), Some("data analysis skill"));
    }

    #[test]
    fn test_clean_chunk_drops_numbers() {
        let tokens = vec![token("5", "5", false), token("years", "year", false)];
        assert_eq!(clean_chunk(&tokens).as_deref(), Some("year"));
    }

    #[test]
    fn test_clean_chunk_length_bounds_are_exclusive() {
        // exactly 3 characters is rejected
        assert_eq!(clean_chunk(&[token("API", "api", false)]), None);
        assert_eq!(clean_chunk(&[token("Tools", "tool", false)]).as_deref(), Some("tool"));

        let long = "x".repeat(50);
        assert_eq!(clean_chunk(&[token(&long, &long, false)]), None);
        let almost = "x".repeat(49);
        assert_eq!(clean_chunk(&[token(&almost, &almost, false)]), Some(almost));
    }

    #[test]
    fn test_clean_chunk_all_stopwords_is_none() {
        let tokens = vec![token("the", "the", true), token("our", "our", true)];
        assert_eq!(clean_chunk(&tokens), None);
    }

    #[test]
    fn test_extract_from_tagged_doc() {
        let tagger = RuleTagger::with_stopwords(["a", "the", "with", "in"]).unwrap();
        let doc = tagger.tag("Experience with distributed systems in a cloud environment");
        let phrases = extract_noun_phrases(&doc);
        assert!(phrases.contains(&"distributed system".to_string()), "{phrases:?}");
        assert!(phrases.contains(&"cloud environment".to_string()), "{phrases:?}");
    }
}
