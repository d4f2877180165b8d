use std::sync::Arc;

use proptest::prelude::*;
use resume_align::extraction::noise::contains_words;
use resume_align::extraction::{KeywordExtractor, NoiseLists, SkillVocabulary};
use resume_align::nlp::RuleTagger;

const WORDS: &[&str] = &[
    "Python", "Kubernetes", "Docker", "microservices", "APIs", "REST", "KPIs", "know", "Spring",
    "Boot", "engineers", "data", "pipelines", "teams", "Node.js", "C++", ".NET", "analysis",
    "Go", "Rust", "cloud", "scheduler", "ecosystem", "Senior", "building", "scalable", "systems",
];

// Glued separators reproduce possessives ("Python's", "Kubernetes'") and
// ellipses ("know...Python").
const SEPARATORS: &[&str] = &[" ", ", ", "...", ". ", "'s ", "' ", " and ", "; ", "\n"];

fn extractor() -> KeywordExtractor {
    KeywordExtractor::new(
        Arc::new(RuleTagger::new().unwrap()),
        Arc::new(SkillVocabulary::builtin().unwrap()),
        Arc::new(NoiseLists::builtin()),
    )
}

fn jd_text() -> impl Strategy<Value = String> {
    prop::collection::vec((prop::sample::select(WORDS), prop::sample::select(SEPARATORS)), 1..40)
        .prop_map(|parts| parts.into_iter().map(|(word, sep)| format!("{word}{sep}")).collect())
}

fn assert_keyword_set(keywords: &[String]) -> Result<(), TestCaseError> {
    for pair in keywords.windows(2) {
        prop_assert!(pair[0] < pair[1], "not sorted and distinct: {:?}", keywords);
    }
    for keyword in keywords {
        prop_assert!(!keyword.trim().is_empty());
        prop_assert_eq!(keyword, &keyword.to_lowercase());
        for other in keywords {
            prop_assert!(!contains_words(other, keyword), "'{}' inside '{}'", keyword, other);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn keyword_set_invariants_hold(text in jd_text()) {
        let keywords = extractor().extract(&text);
        assert_keyword_set(&keywords)?;
    }

    #[test]
    fn possessives_and_ellipses_never_leak(text in jd_text()) {
        let vocabulary = SkillVocabulary::builtin().unwrap();
        let keywords = extractor().extract(&text);
        for keyword in &keywords {
            prop_assert!(!keyword.contains('\''), "apostrophe in '{}'", keyword);
            let first_word = keyword.split(' ').next().unwrap_or_default();
            prop_assert!(
                !first_word.starts_with('.') || vocabulary.contains(first_word),
                "stray leading dot in '{}'", keyword
            );
        }
    }

    #[test]
    fn vocabulary_words_survive_punctuation(word in prop::sample::select(&["Python", "Docker", "Kubernetes", "Rust"][..]),
                                            sep in prop::sample::select(SEPARATORS)) {
        let text = format!("Must know{sep}{word}{sep}daily");
        let keywords = extractor().extract(&text);
        prop_assert!(keywords.contains(&word.to_lowercase()), "{} missing from {:?}", word, keywords);
    }

    #[test]
    fn extraction_is_deterministic(text in "[a-zA-Z0-9 .,'+#/()\n-]{0,200}") {
        let extractor = extractor();
        let first = extractor.extract(&text);
        prop_assert_eq!(&first, &extractor.extract(&text));
        assert_keyword_set(&first)?;
    }
}
