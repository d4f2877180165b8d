use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A JD after keyword extraction. This is the record an external store
/// persists and later resolves by `id`; the core never stores it itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedJd {
    pub id: Uuid,
    pub jd_text: String,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// None when expiry is disabled (TTL of 0 hours) or falls past the
    /// representable date range.
    pub expire_at: Option<DateTime<Utc>>,
}

impl ProcessedJd {
    pub fn new(jd_text: String, keywords: Vec<String>, ttl_hours: u32, now: DateTime<Utc>) -> Self {
        let expire_at = if ttl_hours > 0 {
            now.checked_add_signed(Duration::hours(i64::from(ttl_hours)))
        } else {
            None
        };
        Self {
            id: Uuid::new_v4(),
            jd_text,
            keywords,
            created_at: now,
            expire_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expire_at.map_or(false, |expire_at| now >= expire_at)
    }
}

/// Where a request's JD comes from: fresh text, or a record processed earlier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum JdSource {
    Text { jd_text: String },
    Processed(ProcessedJd),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_applied_from_ttl() {
        let now = Utc::now();
        let jd = ProcessedJd::new("JD".to_string(), vec![], 24, now);
        assert_eq!(jd.expire_at, Some(now + Duration::hours(24)));
        assert!(!jd.is_expired(now + Duration::hours(23)));
        assert!(jd.is_expired(now + Duration::hours(24)));
    }

    #[test]
    fn test_zero_ttl_never_expires() {
        let now = Utc::now();
        let jd = ProcessedJd::new("JD".to_string(), vec![], 0, now);
        assert!(jd.expire_at.is_none());
        assert!(!jd.is_expired(now + Duration::days(3650)));
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let now = Utc::now();
        let jd = ProcessedJd::new("JD".to_string(), vec![], u32::MAX, now);
        assert!(jd.expire_at.is_none());
        assert!(!jd.is_expired(now + Duration::days(3650)));

        let far = DateTime::<Utc>::MAX_UTC - Duration::hours(1);
        let jd = ProcessedJd::new("JD".to_string(), vec![], 2, far);
        assert!(jd.expire_at.is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let now = Utc::now();
        let a = ProcessedJd::new("JD".to_string(), vec![], 1, now);
        let b = ProcessedJd::new("JD".to_string(), vec![], 1, now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_jd_source_serde_tagging() {
        let source = JdSource::Text {
            jd_text: "Rust engineer".to_string(),
        };
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["jd_text"], "Rust engineer");
    }
}
