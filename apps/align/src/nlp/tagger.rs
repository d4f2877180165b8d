//! `RuleTagger`: deterministic English tagger built from lexicons and suffix rules.
//!
//! It is not a statistical model: POS tags come from closed-class lists, a verb
//! lexicon with left-context rules, adjective suffixes, and capitalization.
//! That is enough for the extraction pipeline, which only needs to tell
//! content words (nouns, proper nouns, adjectives) from function words and to
//! find noun-phrase and proper-noun spans.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::lemma::{noun_lemma, verb_lemma};
use super::lexicon;
use super::tokenizer::{tokenize, RawKind};
use super::{
    is_numeric_like, normalize_whitespace, EntityLabel, EntitySpan, LanguageModel, PosTag, Span,
    TaggedDoc, TaggerError, Token,
};

pub struct RuleTagger {
    stopwords: HashSet<String>,
}

impl RuleTagger {
    /// Loads the English stopword list. Fails if the resource is empty.
    pub fn new() -> Result<Self, TaggerError> {
        Self::with_stopwords(get(LANGUAGE::English).iter().map(|s| s.to_string()))
    }

    pub fn with_stopwords<I, S>(words: I) -> Result<Self, TaggerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stopwords: HashSet<String> = words
            .into_iter()
            .map(|w| w.into().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        if stopwords.is_empty() {
            return Err(TaggerError::MissingResource("english stopwords"));
        }
        debug!("RuleTagger loaded {} stopwords", stopwords.len());
        Ok(Self { stopwords })
    }

    fn assign_pos(&self, words: &[(&str, RawKind)]) -> Vec<PosTag> {
        let mut tags: Vec<PosTag> = Vec::with_capacity(words.len());

        for (i, (text, kind)) in words.iter().enumerate() {
            let lower = text.to_lowercase();
            let prev = if i > 0 { Some(tags[i - 1]) } else { None };
            let sentence_start = i == 0 || matches!(words[i - 1].0, "." | "!" | "?" | ":" | ";");
            let tag = if *kind == RawKind::Punct {
                PosTag::Punct
            } else if is_numeric_like(text) || lexicon::is_number_word(&lower) {
                PosTag::Num
            } else if is_all_caps(text) {
                PosTag::Propn
            } else if let Some(closed) = lexicon::closed_class(&lower) {
                closed
            } else if is_technical(text) || has_internal_caps(text) {
                PosTag::Propn
            } else if lexicon::is_known_adjective(&lower) {
                PosTag::Adj
            } else if is_capitalized(text) && (!sentence_start || lexicon::is_natural_language(&lower)) {
                PosTag::Propn
            } else if lexicon::irregular_verb(&lower).is_some() {
                PosTag::Verb
            } else if lexicon::is_known_verb(&verb_lemma(&lower)) {
                verb_in_context(&lower, prev, sentence_start, last_content_tag(&tags))
            } else if lexicon::has_adjective_suffix(&lower) {
                PosTag::Adj
            } else if lower.len() > 4 && lower.ends_with("ly") {
                PosTag::Adv
            } else {
                PosTag::Noun
            };
            tags.push(tag);
        }
        tags
    }

    fn find_entities(&self, tokens: &[Token]) -> Vec<EntitySpan> {
        let mut entities = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            match token.pos {
                PosTag::Propn => {
                    let start = i;
                    while i < tokens.len() && tokens[i].pos == PosTag::Propn {
                        i += 1;
                    }
                    let mut end = i;
                    let label = if lexicon::is_month(&tokens[start].lemma) {
                        // "March 2024"
                        if end < tokens.len() && tokens[end].pos == PosTag::Num {
                            end += 1;
                            i = end;
                        }
                        EntityLabel::Date
                    } else {
                        label_proper_run(tokens, Span { start, end })
                    };
                    entities.push(make_entity(tokens, Span { start, end }, label));
                }
                PosTag::Num => {
                    let start = i;
                    i += 1;
                    let money = start > 0 && matches!(tokens[start - 1].text.as_str(), "$" | "€" | "£");
                    let (span, label) = if i < tokens.len() && tokens[i].text == "%" {
                        i += 1;
                        (Span { start, end: i }, EntityLabel::Percent)
                    } else if money {
                        (Span { start: start - 1, end: i }, EntityLabel::Money)
                    } else {
                        (Span { start, end: i }, EntityLabel::Cardinal)
                    };
                    entities.push(make_entity(tokens, span, label));
                }
                _ => i += 1,
            }
        }
        entities
    }
}

impl LanguageModel for RuleTagger {
    fn name(&self) -> &str {
        "rule-based-en"
    }

    fn tag(&self, text: &str) -> TaggedDoc {
        let normalized = normalize_whitespace(text);
        if normalized.is_empty() {
            return TaggedDoc::default();
        }

        let raw: Vec<(&str, RawKind)> = tokenize(&normalized)
            .into_iter()
            .map(|t| (t.text, t.kind))
            .collect();
        let tags = self.assign_pos(&raw);

        let tokens: Vec<Token> = raw
            .iter()
            .zip(tags)
            .map(|((text, kind), pos)| {
                let lower = text.to_lowercase();
                let lemma = match pos {
                    PosTag::Noun => noun_lemma(&lower),
                    PosTag::Verb | PosTag::Aux => verb_lemma(&lower),
                    PosTag::Propn if is_acronym_plural(text) => noun_lemma(&lower),
                    _ => lower.clone(),
                };
                Token {
                    is_stop: self.stopwords.contains(&lower),
                    is_punct: *kind == RawKind::Punct,
                    is_space: text.trim().is_empty(),
                    is_numeric: is_numeric_like(text),
                    text: text.to_string(),
                    lemma,
                    pos,
                }
            })
            .collect();

        let entities = self.find_entities(&tokens);
        let noun_chunks = noun_chunks(&tokens);

        TaggedDoc {
            tokens,
            entities,
            noun_chunks,
        }
    }

    fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        for line in text.lines() {
            let line = line.trim().trim_start_matches(['-', '*', '•', '·']);
            let mut current = String::new();
            let mut chars = line.chars().peekable();
            while let Some(c) = chars.next() {
                current.push(c);
                let boundary = matches!(c, '.' | '!' | '?')
                    && chars.peek().map_or(true, |next| next.is_whitespace());
                if boundary {
                    push_sentence(&mut sentences, &current);
                    current.clear();
                }
            }
            push_sentence(&mut sentences, &current);
        }
        sentences
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let sentence = normalize_whitespace(raw);
    if sentence.chars().any(|c| c.is_alphanumeric()) {
        sentences.push(sentence);
    }
}

/// Known verbs double as nouns ("design", "support", "learning"); left context decides.
fn verb_in_context(
    lower: &str,
    prev: Option<PosTag>,
    sentence_start: bool,
    last_content: Option<PosTag>,
) -> PosTag {
    let after_verb_list = matches!(prev, Some(PosTag::Cconj) | Some(PosTag::Punct))
        && last_content == Some(PosTag::Verb);
    let verbal_context = sentence_start
        || after_verb_list
        || matches!(
            prev,
            Some(PosTag::Pron) | Some(PosTag::Aux) | Some(PosTag::Part) | Some(PosTag::Adv)
        );

    if verbal_context {
        PosTag::Verb
    } else if lower.ends_with("ed") {
        // "automated testing", "distributed systems"
        PosTag::Adj
    } else {
        PosTag::Noun
    }
}

fn last_content_tag(tags: &[PosTag]) -> Option<PosTag> {
    tags.iter()
        .rev()
        .find(|t| !matches!(t, PosTag::Punct | PosTag::Cconj))
        .copied()
}

fn label_proper_run(tokens: &[Token], span: Span) -> EntityLabel {
    let run = &tokens[span.start..span.end];
    let joined = run
        .iter()
        .map(|t| t.lemma.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let quoted = span.start > 0
        && span.end < tokens.len()
        && is_quote(&tokens[span.start - 1].text)
        && is_quote(&tokens[span.end].text);

    if quoted {
        EntityLabel::WorkOfArt
    } else if run.len() > 1 && run.last().is_some_and(|t| lexicon::is_org_suffix(&t.lemma)) {
        EntityLabel::Org
    } else if run.len() == 1 && lexicon::is_natural_language(&joined) {
        EntityLabel::Language
    } else if lexicon::is_place(&joined) {
        EntityLabel::Gpe
    } else if run.iter().any(|t| is_technical(&t.text) || has_internal_caps(&t.text)) {
        EntityLabel::Product
    } else {
        EntityLabel::Org
    }
}

fn make_entity(tokens: &[Token], span: Span, label: EntityLabel) -> EntitySpan {
    let text = tokens[span.start..span.end]
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    EntitySpan { span, label, text }
}

/// Maximal DET/NUM/ADJ/NOUN/PROPN runs, trimmed to end at the last noun.
/// A determiner after a noun starts a new chunk.
fn noun_chunks(tokens: &[Token]) -> Vec<Span> {
    let mut chunks = Vec::new();
    let mut start: Option<usize> = None;
    let mut last_noun: Option<usize> = None;

    let mut flush = |start: &mut Option<usize>, last_noun: &mut Option<usize>| {
        if let (Some(s), Some(n)) = (*start, *last_noun) {
            chunks.push(Span { start: s, end: n + 1 });
        }
        *start = None;
        *last_noun = None;
    };

    for (i, token) in tokens.iter().enumerate() {
        let nominal = matches!(token.pos, PosTag::Noun | PosTag::Propn);
        let modifier = matches!(token.pos, PosTag::Det | PosTag::Num | PosTag::Adj);

        if token.pos == PosTag::Det && last_noun.is_some() {
            flush(&mut start, &mut last_noun);
        }
        if nominal || modifier {
            start.get_or_insert(i);
            if nominal {
                last_noun = Some(i);
            }
        } else {
            flush(&mut start, &mut last_noun);
        }
    }
    flush(&mut start, &mut last_noun);
    chunks
}

fn is_quote(text: &str) -> bool {
    matches!(text, "\"" | "“" | "”" | "'")
}

fn is_capitalized(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_uppercase())
}

fn is_all_caps(text: &str) -> bool {
    text.chars().filter(|c| c.is_alphabetic()).count() > 1
        && text.chars().all(|c| !c.is_lowercase())
}

/// "APIs", "KPIs", "SDKs": an upper-case acronym with a plural `s`.
fn is_acronym_plural(text: &str) -> bool {
    text.strip_suffix('s').is_some_and(|stem| {
        stem.chars().count() >= 2
            && stem.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    })
}

fn has_internal_caps(text: &str) -> bool {
    text.chars().skip(1).any(|c| c.is_uppercase()) && text.chars().any(|c| c.is_lowercase())
}

/// Tokens like node.js, c++, ci/cd, gpt-4, python3.
fn is_technical(text: &str) -> bool {
    let has_alpha = text.chars().any(|c| c.is_alphabetic());
    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    let symbol = text.contains(['+', '#', '.', '/', '_']);
    has_alpha && (symbol || has_digit)
}
