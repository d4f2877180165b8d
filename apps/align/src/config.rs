use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.55;
pub const DEFAULT_EMBEDDING_MODEL: &str = "mxbai-embed-large";
pub const DEFAULT_KEYWORD_TTL_HOURS: u32 = 24;
/// Ten years. Longer retention should use 0 (no expiry).
pub const MAX_KEYWORD_TTL_HOURS: u32 = 87_600;

/// Application configuration loaded from environment variables.
/// Everything is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub similarity_threshold: f32,
    pub embedding_url: Option<String>,
    pub embedding_model: String,
    pub anthropic_api_key: Option<String>,
    pub keyword_ttl_hours: u32,
    pub skills_file: Option<PathBuf>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            embedding_url: None,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            anthropic_api_key: None,
            keyword_ttl_hours: DEFAULT_KEYWORD_TTL_HOURS,
            skills_file: None,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            similarity_threshold: match optional_env("SIMILARITY_THRESHOLD") {
                Some(raw) => parse_threshold(&raw)?,
                None => defaults.similarity_threshold,
            },
            embedding_url: optional_env("EMBEDDING_URL"),
            embedding_model: optional_env("EMBEDDING_MODEL").unwrap_or(defaults.embedding_model),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            keyword_ttl_hours: match optional_env("KEYWORD_TTL_HOURS") {
                Some(raw) => parse_ttl_hours(&raw)?,
                None => defaults.keyword_ttl_hours,
            },
            skills_file: optional_env("SKILLS_FILE").map(PathBuf::from),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn parse_threshold(raw: &str) -> Result<f32> {
    let value = raw
        .trim()
        .parse::<f32>()
        .with_context(|| format!("SIMILARITY_THRESHOLD '{raw}' is not a number"))?;
    if !(0.0..=1.0).contains(&value) {
        bail!("SIMILARITY_THRESHOLD must be within [0, 1], got {value}");
    }
    Ok(value)
}

pub fn parse_ttl_hours(raw: &str) -> Result<u32> {
    let hours = raw
        .trim()
        .parse::<u32>()
        .context("KEYWORD_TTL_HOURS must be a non-negative whole number")?;
    if hours > MAX_KEYWORD_TTL_HOURS {
        bail!("KEYWORD_TTL_HOURS must be at most {MAX_KEYWORD_TTL_HOURS} (0 disables expiry), got {hours}");
    }
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.similarity_threshold, 0.55);
        assert_eq!(config.embedding_model, "mxbai-embed-large");
        assert_eq!(config.keyword_ttl_hours, 24);
        assert!(config.embedding_url.is_none());
        assert!(config.anthropic_api_key.is_none());
        assert!(config.skills_file.is_none());
    }

    #[test]
    fn test_parse_threshold_accepts_bounds() {
        assert_eq!(parse_threshold("0").unwrap(), 0.0);
        assert_eq!(parse_threshold(" 0.5 ").unwrap(), 0.5);
        assert_eq!(parse_threshold("1.0").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_threshold_rejects_out_of_range() {
        assert!(parse_threshold("1.01").is_err());
        assert!(parse_threshold("-0.1").is_err());
        assert!(parse_threshold("NaN").is_err());
    }

    #[test]
    fn test_parse_threshold_rejects_garbage() {
        let err = parse_threshold("high").unwrap_err();
        assert!(err.to_string().contains("not a number"), "{err}");
    }

    #[test]
    fn test_parse_ttl_hours_bounds() {
        assert_eq!(parse_ttl_hours("0").unwrap(), 0);
        assert_eq!(parse_ttl_hours(" 48 ").unwrap(), 48);
        assert_eq!(parse_ttl_hours("87600").unwrap(), MAX_KEYWORD_TTL_HOURS);
        assert!(parse_ttl_hours("87601").is_err());
        assert!(parse_ttl_hours("4294967295").is_err());
        assert!(parse_ttl_hours("-1").is_err());
        assert!(parse_ttl_hours("a day").is_err());
    }
}
