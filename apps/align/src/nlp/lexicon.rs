//! Closed-class word lists and small open-class lexicons used by `RuleTagger`.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use super::PosTag;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "any", "some", "all",
    "no", "our", "your", "their", "its", "his", "her", "my", "another", "such", "both", "either",
    "neither", "whose",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "with", "for", "of", "from", "by", "about", "as", "into", "through", "over",
    "under", "across", "within", "without", "between", "including", "via", "per", "among",
    "around", "against", "during", "toward", "towards", "upon", "onto", "like", "than", "beyond",
    "throughout", "after", "before", "since", "until", "above", "below", "behind", "alongside",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "&", "plus"];

const SUBORDINATORS: &[&str] = &[
    "if", "because", "while", "although", "though", "whether", "unless", "whereas", "so",
    "once", "where", "when",
];

const PRONOUNS: &[&str] = &[
    "i", "we", "you", "they", "he", "she", "it", "us", "them", "me", "him", "who", "whom",
    "which", "what", "yourself", "ourselves", "themselves", "itself", "someone", "anyone",
    "everyone", "something", "anything", "everything", "mine", "ours", "yours", "theirs",
];

const AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "will", "would", "can", "could",
    "should", "must", "may", "might", "shall", "have", "has", "had", "having", "do", "does",
    "did",
];

const PARTICLES: &[&str] = &["to", "not", "n't", "'s", "’s"];

const ADVERBS: &[&str] = &[
    "very", "also", "well", "too", "often", "always", "never", "already", "still", "just",
    "even", "ideally", "preferably", "currently", "together", "closely", "daily", "quickly",
    "more", "most", "less", "least", "here", "there", "then", "now", "again", "etc",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "fifteen", "twenty", "thirty", "fifty", "hundred", "thousand",
    "million", "billion",
];

/// Base forms of verbs common in job descriptions and résumés.
const VERBS: &[&str] = &[
    "look", "seek", "join", "work", "build", "design", "develop", "maintain", "write", "lead",
    "manage", "collaborate", "create", "deliver", "drive", "own", "ship", "deploy", "implement",
    "improve", "optimize", "scale", "support", "ensure", "help", "mentor", "partner", "define",
    "architect", "integrate", "test", "debug", "analyze", "research", "evaluate", "review",
    "communicate", "coordinate", "contribute", "use", "apply", "require", "prefer", "include",
    "provide", "participate", "establish", "automate", "monitor", "troubleshoot", "launch",
    "migrate", "refactor", "document", "research", "learn", "grow", "solve", "execute",
    "translate", "identify", "enable", "empower", "shape", "plan", "run", "make", "take", "get",
    "give", "know", "think", "see", "want", "need", "thrive", "enjoy", "love", "reduce",
    "increase", "achieve", "spearhead", "establish", "operate", "train", "publish", "investigate",
    "collect", "present", "report", "hire", "interview", "ensure", "tackle", "craft", "wrangle",
    "move", "bring", "become", "keep", "set", "stay", "serve", "meet", "exceed", "handle",
];

/// Irregular past / participle forms → lemma.
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("am", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("built", "build"),
    ("led", "lead"),
    ("wrote", "write"),
    ("written", "write"),
    ("ran", "run"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("got", "get"),
    ("gotten", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("saw", "see"),
    ("seen", "see"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("brought", "bring"),
    ("became", "become"),
    ("kept", "keep"),
    ("met", "meet"),
    ("sought", "seek"),
    ("taught", "teach"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("shipped", "ship"),
    ("planned", "plan"),
    ("running", "run"),
    ("planning", "plan"),
    ("shipping", "ship"),
];

const ADJECTIVES: &[&str] = &[
    "strong", "excellent", "good", "great", "new", "senior", "junior", "large", "small",
    "modern", "relevant", "solid", "deep", "broad", "fast", "remote", "hybrid", "full",
    "preferred", "required", "proven", "complex", "high", "low", "key", "core", "hands-on",
    "cross-functional", "distributed", "related", "equivalent", "similar", "various", "diverse",
    "open", "real", "clean", "robust", "reliable", "secure", "mobile", "native", "agile",
    "backend", "frontend", "front-end", "back-end", "end-to-end", "best", "better", "top",
    "bachelor's", "master's", "detail-oriented", "self-motivated", "fast-paced", "dynamic",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "ical", "less", "ish"];

/// Nouns that end in -s but are already singular, or technical plurals kept verbatim.
const SINGULAR_S_NOUNS: &[&str] = &[
    "analysis", "basis", "business", "status", "campus", "bonus", "process", "access", "class",
    "success", "address", "news", "series", "species", "physics", "mathematics", "economics",
    "statistics", "analytics", "ethics", "logistics", "kubernetes", "pandas", "redis", "ios",
    "devops", "mlops", "finops", "secops", "aws", "gis", "cms", "css", "sass", "less", "postgres",
    "express", "numpy", "jenkins", "sales", "hours", "canvas", "corpus", "thesis", "focus",
    "consensus", "chaos", "bias", "alias", "atlas", "plus", "us", "gas", "axis", "crisis",
    "diagnosis", "emphasis", "hypothesis", "synopsis", "genesis", "tennis", "kinesis", "metastasis",
    "prognosis", "parenthesis", "keras", "rails", "windows", "macos", "nats", "robotics",
    "graphics", "electronics", "genomics", "semantics", "kinematics", "aesthetics", "metrics",
    "databricks", "travis", "winforms",
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("people", "people"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("analyses", "analysis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("criteria", "criterion"),
    ("data", "data"),
    ("media", "media"),
];

const NATURAL_LANGUAGES: &[&str] = &[
    "english", "spanish", "french", "german", "mandarin", "chinese", "cantonese", "japanese",
    "korean", "portuguese", "italian", "russian", "arabic", "hindi", "dutch", "swedish",
    "polish", "turkish", "vietnamese", "thai", "hebrew", "greek", "bengali", "urdu",
];

const PLACES: &[&str] = &[
    "san francisco", "new york", "london", "berlin", "paris", "toronto", "seattle", "austin",
    "boston", "chicago", "los angeles", "singapore", "tokyo", "bangalore", "dublin",
    "amsterdam", "sydney", "california", "texas", "washington", "ca", "ny", "usa", "us", "uk",
    "canada", "germany", "india", "europe", "emea", "apac",
];

const ORG_SUFFIXES: &[&str] = &[
    "inc", "corp", "corporation", "llc", "ltd", "gmbh", "company", "co", "technologies",
    "labs", "group", "university", "institute", "foundation", "bank",
];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static CLOSED_CLASS: Lazy<HashMap<&'static str, PosTag>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (words, tag) in [
        (ADVERBS, PosTag::Adv),
        (SUBORDINATORS, PosTag::Sconj),
        (PRONOUNS, PosTag::Pron),
        (AUXILIARIES, PosTag::Aux),
        (PARTICLES, PosTag::Part),
        (COORDINATORS, PosTag::Cconj),
        (DETERMINERS, PosTag::Det),
        (ADPOSITIONS, PosTag::Adp),
    ] {
        for w in words {
            map.insert(*w, tag);
        }
    }
    map
});

static VERB_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set(VERBS));
static IRREGULAR_VERB_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| IRREGULAR_VERBS.iter().copied().collect());
static ADJECTIVE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set(ADJECTIVES));
static SINGULAR_S_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set(SINGULAR_S_NOUNS));
static IRREGULAR_NOUN_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| IRREGULAR_NOUNS.iter().copied().collect());
static NUMBER_WORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set(NUMBER_WORDS));
static LANGUAGE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set(NATURAL_LANGUAGES));
static PLACE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set(PLACES));
static ORG_SUFFIX_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set(ORG_SUFFIXES));
static MONTH_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set(MONTHS));

pub fn closed_class(lower: &str) -> Option<PosTag> {
    CLOSED_CLASS.get(lower).copied()
}

pub fn is_known_verb(lemma: &str) -> bool {
    VERB_SET.contains(lemma)
}

pub fn irregular_verb(lower: &str) -> Option<&'static str> {
    IRREGULAR_VERB_MAP.get(lower).copied()
}

pub fn is_known_adjective(lower: &str) -> bool {
    ADJECTIVE_SET.contains(lower)
}

pub fn has_adjective_suffix(lower: &str) -> bool {
    lower.len() > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

pub fn is_singular_s_noun(lower: &str) -> bool {
    SINGULAR_S_SET.contains(lower)
}

pub fn irregular_noun(lower: &str) -> Option<&'static str> {
    IRREGULAR_NOUN_MAP.get(lower).copied()
}

pub fn is_number_word(lower: &str) -> bool {
    NUMBER_WORD_SET.contains(lower)
}

pub fn is_natural_language(lower: &str) -> bool {
    LANGUAGE_SET.contains(lower)
}

pub fn is_place(lower: &str) -> bool {
    PLACE_SET.contains(lower)
}

pub fn is_org_suffix(lower: &str) -> bool {
    ORG_SUFFIX_SET.contains(lower.trim_end_matches('.'))
}

pub fn is_month(lower: &str) -> bool {
    MONTH_SET.contains(lower)
}
