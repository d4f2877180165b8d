use crate::extraction::skills::SkillVocabulary;
use crate::nlp::{is_numeric_like, EntityLabel, LanguageModel, TaggedDoc};

/// Keeps named entities that can carry a skill signal.
///
/// Products, languages and creative works pass when their text is longer than
/// two characters, not numeric and not a stopword. Organizations pass only
/// when they are already vocabulary terms ("Docker", "Kafka"). Every other
/// label is dropped. Entities that name a vocabulary term are emitted in the
/// term's canonical form ("REST APIs" -> "rest api").
pub fn filter_entities(
    doc: &TaggedDoc,
    vocabulary: &SkillVocabulary,
    model: &dyn LanguageModel,
) -> Vec<String> {
    doc.entities
        .iter()
        .filter_map(|entity| {
            let text = entity.text.trim().to_lowercase();
            let entry = vocabulary.entry_for(&text);
            let keep = match entity.label {
                EntityLabel::Product | EntityLabel::Language | EntityLabel::WorkOfArt => {
                    text.chars().count() > 2 && !is_numeric_like(&text) && !model.is_stopword(&text)
                }
                EntityLabel::Org => entry.is_some(),
                _ => false,
            };
            keep.then(|| entry.unwrap_or(text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{EntitySpan, RuleTagger, Span};

    fn doc_with(entities: &[(&str, EntityLabel)]) -> TaggedDoc {
        TaggedDoc {
            tokens: vec![],
            entities: entities
                .iter()
                .map(|(text, label)| EntitySpan {
                    span: Span { start: 0, end: 0 },
                    label: *label,
                    text: text.to_string(),
                })
                .collect(),
            noun_chunks: vec![],
        }
    }

    #[test]
    fn test_allowed_labels_pass() {
        let tagger = RuleTagger::with_stopwords(["the"]).unwrap();
        let doc = doc_with(&[
            ("PostgreSQL", EntityLabel::Product),
            ("Mandarin", EntityLabel::Language),
            ("Clean Code", EntityLabel::WorkOfArt),
        ]);
        let kept = filter_entities(&doc, &SkillVocabulary::default(), &tagger);
        assert_eq!(kept, vec!["postgresql", "mandarin", "clean code"]);
    }

    #[test]
    fn test_short_numeric_and_stopword_entities_dropped() {
        let tagger = RuleTagger::with_stopwords(["the"]).unwrap();
        let doc = doc_with(&[
            ("Go", EntityLabel::Product),
            ("2024", EntityLabel::Product),
            ("The", EntityLabel::WorkOfArt),
        ]);
        let kept = filter_entities(&doc, &SkillVocabulary::default(), &tagger);
        assert!(kept.is_empty(), "unexpected: {kept:?}");
    }

    #[test]
    fn test_org_requires_vocabulary_membership() {
        let tagger = RuleTagger::with_stopwords(["the"]).unwrap();
        let vocabulary = SkillVocabulary::from_terms(["docker"]).unwrap();
        let doc = doc_with(&[("Docker", EntityLabel::Org), ("Acme Corp", EntityLabel::Org)]);
        let kept = filter_entities(&doc, &vocabulary, &tagger);
        assert_eq!(kept, vec!["docker"]);
    }

    #[test]
    fn test_vocabulary_entities_use_canonical_entry() {
        let tagger = RuleTagger::with_stopwords(["the"]).unwrap();
        let vocabulary = SkillVocabulary::from_terms(["rest api", "microservice"]).unwrap();
        let doc = doc_with(&[
            ("REST APIs", EntityLabel::Product),
            ("Microservices", EntityLabel::Org),
            ("GraphQL", EntityLabel::Product),
        ]);
        let kept = filter_entities(&doc, &vocabulary, &tagger);
        assert_eq!(kept, vec!["rest api", "microservice", "graphql"]);
    }

    #[test]
    fn test_other_labels_discarded() {
        let tagger = RuleTagger::with_stopwords(["the"]).unwrap();
        let doc = doc_with(&[
            ("Jane Doe", EntityLabel::Person),
            ("London", EntityLabel::Gpe),
            ("March 2024", EntityLabel::Date),
            ("five", EntityLabel::Cardinal),
        ]);
        let kept = filter_entities(&doc, &SkillVocabulary::from_terms(["london"]).unwrap(), &tagger);
        assert!(kept.is_empty());
    }
}
