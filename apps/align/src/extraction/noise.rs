//! Noise & dedup filter: drops JD boilerplate and phrases already covered by a longer one.
//!
//! Rules, applied in order:
//! 1. exact match against the noise-phrase list
//! 2. single words in the noise-word list
//! 3. containment dedup at word-token granularity, longest first
//!
//! Vocabulary terms are exempt from rules 1 and 2. In rule 3 they are only
//! deduplicated against each other; a non-vocabulary phrase that overlaps a
//! retained vocabulary term by containment is the one that goes.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::extraction::candidates::{CandidateSet, Provenance};
use crate::extraction::skills::SkillVocabulary;
use crate::nlp::lemma::noun_lemma;

const NOISE_WORDS: &[&str] = &[
    "experience", "year", "years", "team", "work", "skill", "skills", "ability", "strong",
    "excellent", "good", "great", "knowledge", "understanding", "responsibility",
    "requirement", "candidate", "role", "position", "company", "opportunity", "job", "plus",
    "degree", "bachelor", "master", "field", "environment", "way", "day", "time", "part",
    "level", "area", "type", "thing", "lot", "need", "new", "able", "key", "various",
    "related", "relevant", "preferred", "required", "qualification", "benefit", "salary",
    "applicant", "employer", "employee", "people", "member", "culture", "mission", "value",
    "world", "us", "looking", "developer", "engineer", "professional", "familiarity",
    "proficiency", "background", "track", "record", "equivalent", "similar", "solid",
    "proven", "deep", "high", "ideal", "passion", "success", "growth", "impact", "detail",
    "fast", "dynamic", "product", "business", "customer", "client", "user", "stakeholder",
    "communication", "collaboration", "problem", "solution", "feature", "application",
    "project", "task", "tool", "technology", "platform", "system", "service", "process",
    "quality", "best", "practice", "etc", "e.g", "i.e", "remote", "hybrid", "onsite",
    "full-time", "part-time", "hour", "week", "month", "location", "office",
];

const NOISE_PHRASES: &[&str] = &[
    "years of experience", "year experience", "years experience", "team player",
    "equal opportunity employer", "equal opportunity", "fast paced environment",
    "fast-paced environment", "communication skills", "written communication",
    "verbal communication", "interpersonal skills", "problem solving skills",
    "problem-solving skills", "attention to detail", "self starter", "self-starter",
    "work independently", "cross-functional teams", "cross-functional team",
    "strong understanding", "excellent communication", "ability to work",
    "bachelor's degree", "master's degree", "related field", "computer science degree",
    "competitive salary", "health insurance", "paid time off", "job description",
    "job title", "nice to have", "great team", "team members", "team member",
    "our team", "your role", "new features", "strong experience", "hands-on experience",
    "proven track record", "track record", "work experience", "professional experience",
    "industry experience", "relevant experience", "full time", "part time",
];

/// Fixed boilerplate lists. Multi-word phrases are stored with each word
/// singularized so they compare equal to cleaned noun phrases.
#[derive(Debug, Clone)]
pub struct NoiseLists {
    words: HashSet<String>,
    phrases: HashSet<String>,
}

impl NoiseLists {
    pub fn builtin() -> Self {
        Self::new(NOISE_WORDS.iter().copied(), NOISE_PHRASES.iter().copied())
    }

    pub fn new<W, P, S, T>(words: W, phrases: P) -> Self
    where
        W: IntoIterator<Item = S>,
        P: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let phrases = phrases
            .into_iter()
            .flat_map(|p| {
                let raw = p.as_ref().trim().to_lowercase();
                let lemmatized = raw.split_whitespace().map(noun_lemma).collect::<Vec<_>>().join(" ");
                [raw, lemmatized]
            })
            .filter(|p| !p.is_empty())
            .collect();
        Self { words, phrases }
    }

    pub fn is_noise_phrase(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    pub fn is_noise_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

/// Per-rule drop counts, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub noise_phrases: usize,
    pub noise_words: usize,
    pub contained: usize,
}

/// Applies all three rules to the candidate set. The result is sorted ascending.
pub fn filter_candidates(
    candidates: &CandidateSet,
    vocabulary: &SkillVocabulary,
    noise: &NoiseLists,
) -> (Vec<String>, FilterStats) {
    let mut stats = FilterStats::default();
    let mut anchors = Vec::new();
    let mut others = Vec::new();

    for (phrase, provenance) in candidates.iter() {
        let protected = provenance == Provenance::Dictionary || vocabulary.contains(phrase);
        if protected {
            anchors.push(phrase.to_string());
            continue;
        }
        if noise.is_noise_phrase(phrase) {
            stats.noise_phrases += 1;
            continue;
        }
        if !phrase.contains(' ') && noise.is_noise_word(phrase) {
            stats.noise_words += 1;
            continue;
        }
        others.push(phrase.to_string());
    }

    let before = anchors.len() + others.len();
    let mut keywords = dedup_with_anchors(anchors, others);
    stats.contained = before - keywords.len();
    keywords.sort();
    (keywords, stats)
}

/// Containment dedup: longest phrase first, ties broken lexicographically. A
/// phrase is discarded when its words appear as a contiguous run inside an
/// already retained phrase ("python" inside "python developer"; "py" is never
/// inside "python").
pub fn dedup_by_containment(phrases: Vec<String>) -> Vec<String> {
    let mut retained: Vec<String> = Vec::new();
    for phrase in sorted_longest_first(phrases) {
        if !retained.iter().any(|kept| contains_words(kept, &phrase)) {
            retained.push(phrase);
        }
    }
    retained
}

/// Dedup where `anchors` (vocabulary terms) outrank everything else: anchors
/// are deduplicated among themselves, then any other phrase that contains or
/// is contained by a retained anchor, or sits inside a longer retained
/// phrase, is dropped.
pub fn dedup_with_anchors(anchors: Vec<String>, others: Vec<String>) -> Vec<String> {
    let mut retained = dedup_by_containment(anchors);
    let anchor_count = retained.len();

    for phrase in sorted_longest_first(others) {
        let overlaps_anchor = retained[..anchor_count]
            .iter()
            .any(|a| contains_words(a, &phrase) || contains_words(&phrase, a));
        let inside_other = retained[anchor_count..]
            .iter()
            .any(|kept| contains_words(kept, &phrase));
        if !overlaps_anchor && !inside_other {
            retained.push(phrase);
        }
    }
    retained
}

fn sorted_longest_first(mut phrases: Vec<String>) -> Vec<String> {
    phrases.sort_by(|a, b| match b.chars().count().cmp(&a.chars().count()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    });
    phrases.dedup();
    phrases
}

/// True when `needle`'s words form a contiguous run of `haystack`'s words and
/// the two phrases differ.
pub fn contains_words(haystack: &str, needle: &str) -> bool {
    if haystack == needle {
        return false;
    }
    let hay: Vec<&str> = haystack.split_whitespace().collect();
    let pin: Vec<&str> = needle.split_whitespace().collect();
    if pin.is_empty() || pin.len() > hay.len() {
        return false;
    }
    hay.windows(pin.len()).any(|w| w == pin.as_slice())
}
