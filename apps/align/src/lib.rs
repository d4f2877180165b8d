//! Résumé ↔ job-description alignment: keyword extraction from JDs, two-tier
//! match scoring and LLM-backed improvement suggestions.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod llm_client;
pub mod matching;
pub mod models;
pub mod nlp;
pub mod service;
pub mod state;
pub mod suggestions;

pub use config::Config;
pub use errors::AppError;
pub use service::AlignService;
pub use state::AppState;
