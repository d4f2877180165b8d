// Matching: lexical containment first, embedding similarity as the fallback
// tier for phrases the résumé paraphrases.

pub mod embeddings;
pub mod scorer;

pub use embeddings::{Embedder, EmbeddingCapability, OllamaEmbedder};
pub use scorer::{MatchReport, MatchScorer};
