use serde::{Deserialize, Serialize};

/// A résumé whose text has already been decoded from its file upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub id: String,
    pub title: Option<String>,
    pub file_name: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl ResumeDocument {
    /// Text to score; None when missing or blank.
    pub fn usable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: Option<&str>) -> ResumeDocument {
        ResumeDocument {
            id: "r1".to_string(),
            title: None,
            file_name: "cv.pdf".to_string(),
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn test_usable_text() {
        assert_eq!(doc(Some("Rust")).usable_text(), Some("Rust"));
        assert_eq!(doc(Some("  \n")).usable_text(), None);
        assert_eq!(doc(None).usable_text(), None);
    }
}
