// Keyword extraction: dictionary hits, entities, noun phrases and single
// tokens are gathered from one tagging pass, then filtered for noise and
// collapsed by containment into the final keyword set for a JD.

pub mod candidates;
pub mod entities;
pub mod noise;
pub mod noun_phrases;
pub mod pipeline;
pub mod skill_list;
pub mod skills;

pub use noise::NoiseLists;
pub use pipeline::KeywordExtractor;
pub use skills::SkillVocabulary;
