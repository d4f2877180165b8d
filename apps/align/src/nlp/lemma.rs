//! Rule-based English lemmatizer. Operates on lowercased input only.

use super::lexicon;

/// Singular base form of a common noun.
pub fn noun_lemma(lower: &str) -> String {
    if let Some(base) = lexicon::irregular_noun(lower) {
        return base.to_string();
    }
    // Only the head of a hyphenated compound inflects: "data-pipelines" -> "data-pipeline".
    if let Some((head, tail)) = lower.rsplit_once('-') {
        if !head.is_empty() && !tail.is_empty() {
            return format!("{head}-{}", noun_lemma(tail));
        }
    }
    if lexicon::is_singular_s_noun(lower)
        || lower.len() <= 3
        || !lower.chars().all(|c| c.is_alphabetic())
    {
        return lower.to_string();
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        if stem.len() > 1 {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "xes", "ches", "shes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    // Latin -is singulars (analysis, hypothesis) are listed in the lexicon.
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("js") {
        return lower.to_string();
    }
    match lower.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => lower.to_string(),
    }
}

/// Base form of a verb. Known verbs are resolved exactly; unknown ones fall
/// back to suffix stripping.
pub fn verb_lemma(lower: &str) -> String {
    if let Some(base) = lexicon::irregular_verb(lower) {
        return base.to_string();
    }
    if lexicon::is_known_verb(lower) || lower.len() <= 3 {
        return lower.to_string();
    }

    if let Some(stem) = lower.strip_suffix("ies").or_else(|| lower.strip_suffix("ied")) {
        return format!("{stem}y");
    }
    if let Some(stem) = lower.strip_suffix("ing") {
        return resolve_stem(stem).unwrap_or_else(|| stem.to_string());
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        if let Some(known) = resolve_stem(stem) {
            return known;
        }
        return lower[..lower.len() - 1].to_string();
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if lexicon::is_known_verb(stem) {
            return stem.to_string();
        }
    }
    match lower.strip_suffix('s') {
        Some(stem) if !stem.ends_with('s') => stem.to_string(),
        _ => lower.to_string(),
    }
}

/// Maps a suffix-stripped stem back to a known verb: "design", "creat" + e,
/// or a doubled final consonant ("debugg" -> "debug").
fn resolve_stem(stem: &str) -> Option<String> {
    if lexicon::is_known_verb(stem) {
        return Some(stem.to_string());
    }
    let with_e = format!("{stem}e");
    if lexicon::is_known_verb(&with_e) {
        return Some(with_e);
    }
    let mut chars = stem.chars().rev();
    if let (Some(last), Some(prev)) = (chars.next(), chars.next()) {
        if last == prev {
            let undoubled = &stem[..stem.len() - last.len_utf8()];
            if lexicon::is_known_verb(undoubled) {
                return Some(undoubled.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_plurals() {
        assert_eq!(noun_lemma("skills"), "skill");
        assert_eq!(noun_lemma("services"), "service");
        assert_eq!(noun_lemma("libraries"), "library");
        assert_eq!(noun_lemma("approaches"), "approach");
        assert_eq!(noun_lemma("classes"), "class");
        assert_eq!(noun_lemma("apis"), "api");
        assert_eq!(noun_lemma("kpis"), "kpi");
        assert_eq!(noun_lemma("sdks"), "sdk");
    }

    #[test]
    fn test_noun_is_singulars_unchanged() {
        assert_eq!(noun_lemma("analysis"), "analysis");
        assert_eq!(noun_lemma("hypothesis"), "hypothesis");
        assert_eq!(noun_lemma("kinesis"), "kinesis");
        assert_eq!(noun_lemma("redis"), "redis");
        assert_eq!(noun_lemma("vuejs"), "vuejs");
    }

    #[test]
    fn test_noun_exceptions_unchanged() {
        assert_eq!(noun_lemma("kubernetes"), "kubernetes");
        assert_eq!(noun_lemma("analytics"), "analytics");
        assert_eq!(noun_lemma("business"), "business");
        assert_eq!(noun_lemma("status"), "status");
        assert_eq!(noun_lemma("data"), "data");
        assert_eq!(noun_lemma("aws"), "aws");
    }

    #[test]
    fn test_noun_hyphenated_head() {
        assert_eq!(noun_lemma("data-pipelines"), "data-pipeline");
    }

    #[test]
    fn test_noun_symbols_untouched() {
        assert_eq!(noun_lemma("node.js"), "node.js");
        assert_eq!(noun_lemma("ci/cd"), "ci/cd");
    }

    #[test]
    fn test_verb_forms() {
        assert_eq!(verb_lemma("designed"), "design");
        assert_eq!(verb_lemma("created"), "create");
        assert_eq!(verb_lemma("building"), "build");
        assert_eq!(verb_lemma("debugging"), "debug");
        assert_eq!(verb_lemma("applies"), "apply");
        assert_eq!(verb_lemma("built"), "build");
        assert_eq!(verb_lemma("was"), "be");
        assert_eq!(verb_lemma("manages"), "manage");
    }
}
