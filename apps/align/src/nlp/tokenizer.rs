use once_cell::sync::Lazy;
use regex::Regex;

// Word tokens keep internal joiners (node.js, ci/cd, scikit-learn, don't) and
// trailing +/# (c++, c#). A leading dot is kept for names like .net; see
// `split_word` for where it is allowed.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<word>\.?[\p{L}\p{N}]+(?:[./'’_\-][\p{L}\p{N}]+)*[+#]*)|(?P<punct>[^\s\p{L}\p{N}])")
        .expect("token pattern is valid")
});

const POSSESSIVES: [&str; 4] = ["'s", "'S", "’s", "’S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKind {
    Word,
    Punct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub text: &'a str,
    pub kind: RawKind,
}

pub fn tokenize(text: &str) -> Vec<RawToken<'_>> {
    let mut tokens = Vec::new();
    for caps in TOKEN_RE.captures_iter(text) {
        if let Some(m) = caps.name("word") {
            split_word(&text[..m.start()], m.as_str(), &mut tokens);
        } else if let Some(m) = caps.name("punct") {
            tokens.push(RawToken {
                text: m.as_str(),
                kind: RawKind::Punct,
            });
        }
    }
    tokens
}

/// Pushes one word match, peeling off a leading dot that does not begin a word
/// ("know...Python") and a possessive clitic ("Python's" -> "Python", "'s").
fn split_word<'a>(before: &str, word: &'a str, tokens: &mut Vec<RawToken<'a>>) {
    let mut word = word;
    if word.starts_with('.') && !at_word_start(before) {
        tokens.push(RawToken {
            text: &word[..1],
            kind: RawKind::Punct,
        });
        word = &word[1..];
    }

    let clitic = POSSESSIVES
        .iter()
        .find(|p| word.len() > p.len() && word.ends_with(**p))
        .map(|p| word.len() - p.len());
    match clitic {
        Some(at) => {
            tokens.push(RawToken {
                text: &word[..at],
                kind: RawKind::Word,
            });
            tokens.push(RawToken {
                text: &word[at..],
                kind: RawKind::Word,
            });
        }
        None => tokens.push(RawToken {
            text: word,
            kind: RawKind::Word,
        }),
    }
}

/// Start of text, after whitespace, or after an opening bracket or quote.
fn at_word_start(before: &str) -> bool {
    before
        .chars()
        .next_back()
        .map_or(true, |c| c.is_whitespace() || matches!(c, '(' | '[' | '{' | '"' | '\'' | '“'))
}

/// Lowercased word tokens joined by single spaces. Used to put vocabulary
/// entries and matched text into the same shape.
pub fn normalize_phrase(text: &str) -> String {
    tokenize(text)
        .into_iter()
        .filter(|t| t.kind == RawKind::Word)
        .map(|t| t.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
