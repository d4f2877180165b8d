//! Async facade over the core: resolves the JD source, runs extraction on
//! the blocking pool and scores résumés. This is the layer an HTTP front-end
//! would call.

use anyhow::Context;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::matching::MatchReport;
use crate::models::{JdSource, ProcessedJd, ResumeDocument};
use crate::state::AppState;
use crate::suggestions::SuggestionResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeMatchResult {
    pub resume_id: String,
    pub resume_title: Option<String>,
    pub original_file_name: String,
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub job_description_keywords: Vec<String>,
    pub match_results: Vec<ResumeMatchResult>,
}

/// A JD ready for matching: its text and keyword set.
struct ResolvedJd {
    text: String,
    keywords: Vec<String>,
}

#[derive(Clone)]
pub struct AlignService {
    state: AppState,
}

impl AlignService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Extracts keywords on the blocking pool so tagging never stalls the runtime.
    pub async fn extract_keywords(&self, jd_text: &str) -> Result<Vec<String>, AppError> {
        let extractor = self.state.extractor.clone();
        let text = jd_text.to_string();
        let keywords = tokio::task::spawn_blocking(move || extractor.extract(&text))
            .await
            .context("keyword extraction task failed")?;
        Ok(keywords)
    }

    /// Extracts keywords and wraps them in a record for an external store.
    pub async fn process_jd(&self, jd_text: &str) -> Result<ProcessedJd, AppError> {
        if jd_text.trim().is_empty() {
            return Err(AppError::Validation(
                "Job description text cannot be empty.".to_string(),
            ));
        }

        let keywords = self.extract_keywords(jd_text).await?;
        let processed = ProcessedJd::new(
            jd_text.to_string(),
            keywords,
            self.state.config.keyword_ttl_hours,
            Utc::now(),
        );
        info!(
            "Processed JD {} ({} keywords)",
            processed.id,
            processed.keywords.len()
        );
        Ok(processed)
    }

    /// Scores each résumé against the JD's keywords. Résumés without text
    /// score 0.0; a JD with no keywords yields no results at all.
    pub async fn match_resumes(
        &self,
        source: JdSource,
        resumes: &[ResumeDocument],
    ) -> Result<MatchResponse, AppError> {
        if resumes.is_empty() {
            return Err(AppError::Validation(
                "Resume list cannot be empty.".to_string(),
            ));
        }

        let jd = self.resolve(source).await?;
        if jd.keywords.is_empty() {
            return Ok(MatchResponse {
                job_description_keywords: vec![],
                match_results: vec![],
            });
        }

        let mut match_results = Vec::with_capacity(resumes.len());
        for resume in resumes {
            let match_score = match resume.usable_text() {
                Some(text) => self.state.scorer.score(text, &jd.keywords).await,
                None => {
                    warn!("Resume {} has no text content for matching", resume.id);
                    0.0
                }
            };
            match_results.push(ResumeMatchResult {
                resume_id: resume.id.clone(),
                resume_title: resume.title.clone(),
                original_file_name: resume.file_name.clone(),
                match_score,
            });
        }

        Ok(MatchResponse {
            job_description_keywords: jd.keywords,
            match_results,
        })
    }

    /// Full per-keyword report for one résumé.
    pub async fn report(&self, source: JdSource, resume_text: &str) -> Result<MatchReport, AppError> {
        let jd = self.resolve(source).await?;
        Ok(self.state.scorer.evaluate(resume_text, &jd.keywords).await)
    }

    pub async fn suggest(
        &self,
        source: JdSource,
        resume_id: &str,
        resume_text: &str,
    ) -> Result<SuggestionResponse, AppError> {
        if resume_text.trim().is_empty() {
            return Err(AppError::Validation(
                "Resume has no text content to analyze.".to_string(),
            ));
        }

        let jd = self.resolve(source).await?;
        Ok(self
            .state
            .suggestions
            .suggest(resume_id, &jd.text, resume_text, &jd.keywords)
            .await)
    }

    async fn resolve(&self, source: JdSource) -> Result<ResolvedJd, AppError> {
        match source {
            JdSource::Text { jd_text } => {
                if jd_text.trim().is_empty() {
                    return Err(AppError::Validation(
                        "Job description text cannot be empty.".to_string(),
                    ));
                }
                let keywords = self.extract_keywords(&jd_text).await?;
                Ok(ResolvedJd {
                    text: jd_text,
                    keywords,
                })
            }
            JdSource::Processed(processed) => {
                if processed.is_expired(Utc::now()) {
                    return Err(AppError::Validation(format!(
                        "Processed JD {} has expired; submit the JD text again.",
                        processed.id
                    )));
                }
                Ok(ResolvedJd {
                    text: processed.jd_text,
                    keywords: processed.keywords,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::Duration;

    const JD: &str = "Looking for a Python and React developer with AWS experience.";

    fn service() -> AlignService {
        AlignService::new(AppState::build(&Config::default()).unwrap())
    }

    fn resume(id: &str, text: Option<&str>) -> ResumeDocument {
        ResumeDocument {
            id: id.to_string(),
            title: Some(format!("Resume {id}")),
            file_name: format!("{id}.pdf"),
            text: text.map(str::to_string),
        }
    }

    fn text_source(jd: &str) -> JdSource {
        JdSource::Text {
            jd_text: jd.to_string(),
        }
    }

    #[tokio::test]
    async fn test_process_jd_rejects_blank_text() {
        let err = service().process_jd("   \n").await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_process_jd_sets_expiry() {
        let processed = service().process_jd(JD).await.unwrap();
        assert!(processed.keywords.contains(&"python".to_string()));
        assert_eq!(
            processed.expire_at,
            Some(processed.created_at + Duration::hours(24))
        );
    }

    #[tokio::test]
    async fn test_match_resumes_scores_each_resume() {
        let service = service();
        let resumes = vec![
            resume("a", Some("Python, React and AWS in production.")),
            resume("b", None),
        ];
        let response = service.match_resumes(text_source(JD), &resumes).await.unwrap();

        assert!(!response.job_description_keywords.is_empty());
        assert_eq!(response.match_results.len(), 2);
        assert!(response.match_results[0].match_score > 0.0);
        assert_eq!(response.match_results[1].match_score, 0.0);
        assert_eq!(response.match_results[1].original_file_name, "b.pdf");
    }

    #[tokio::test]
    async fn test_match_resumes_reuses_processed_keywords() {
        let service = service();
        let processed = ProcessedJd::new(
            "ignored".to_string(),
            vec!["rust".to_string(), "kafka".to_string()],
            24,
            Utc::now(),
        );
        let response = service
            .match_resumes(JdSource::Processed(processed), &[resume("a", Some("Rust services"))])
            .await
            .unwrap();
        assert_eq!(response.job_description_keywords, vec!["rust", "kafka"]);
        assert_eq!(response.match_results[0].match_score, 50.0);
    }

    #[tokio::test]
    async fn test_no_keywords_yields_no_results() {
        let processed = ProcessedJd::new("JD".to_string(), vec![], 24, Utc::now());
        let response = service()
            .match_resumes(JdSource::Processed(processed), &[resume("a", Some("Rust"))])
            .await
            .unwrap();
        assert!(response.job_description_keywords.is_empty());
        assert!(response.match_results.is_empty());
    }

    #[tokio::test]
    async fn test_expired_record_rejected() {
        let processed = ProcessedJd::new(
            "JD".to_string(),
            vec!["rust".to_string()],
            1,
            Utc::now() - Duration::hours(2),
        );
        let err = service()
            .match_resumes(JdSource::Processed(processed), &[resume("a", Some("Rust"))])
            .await
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_empty_resume_list_rejected() {
        let err = service().match_resumes(text_source(JD), &[]).await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_suggest_without_llm_returns_unavailable_message() {
        let response = service()
            .suggest(text_source(JD), "a", "I build React frontends.")
            .await
            .unwrap();
        assert_eq!(response.resume_id, "a");
        assert_eq!(response.suggestions, crate::suggestions::UNAVAILABLE_MESSAGE);
        assert!(response.prompt_used.contains("python"));
    }

    #[tokio::test]
    async fn test_report_lists_missing_keywords() {
        let report = service()
            .report(text_source(JD), "Python scripts only.")
            .await
            .unwrap();
        assert!(report.missing.contains(&"aws".to_string()), "{report:?}");
        assert!(report.score < 100.0);
    }
}
