use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output of the external text/layout extractor for one uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub file_name: String,
    pub pages: Vec<ExtractedPage>,
}

/// Text lines and positioned words captured from a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPage {
    pub height: f32,
    pub lines: Vec<String>,
    #[serde(default)]
    pub words: Vec<PageWord>,
}

/// A word token and its distance from the top of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageWord {
    pub text: String,
    pub top: f32,
}

impl ExtractedDocument {
    /// Parse an extraction export from JSON.
    pub fn from_json(raw: &str) -> Result<Self, ExtractionError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read an extraction export from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExtractionError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Accepts only uploads whose file name carries a recognized document extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    allowed_extensions: Vec<String>,
}

impl UploadPolicy {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed_extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { allowed_extensions }
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    pub fn validate(&self, file_name: &str) -> Result<(), ExtractionError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension {
            Some(ext) if self.allowed_extensions.iter().any(|allowed| *allowed == ext) => Ok(()),
            _ => Err(ExtractionError::UnsupportedFormat {
                file_name: file_name.to_string(),
                allowed: self.allowed_extensions.join(", "),
            }),
        }
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(["pdf"])
    }
}

/// Failures that happen before a document can be scored.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported file type for '{file_name}' (accepted: {allowed})")]
    UnsupportedFormat { file_name: String, allowed: String },
    #[error("document contains no pages")]
    EmptyDocument,
    #[error("failed to read extraction export: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed extraction export: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_accepts_recognized_extension_case_insensitively() {
        let policy = UploadPolicy::default();
        assert!(policy.validate("resume.pdf").is_ok());
        assert!(policy.validate("Jane_Doe.PDF").is_ok());
    }

    #[test]
    fn policy_rejects_unknown_or_missing_extension() {
        let policy = UploadPolicy::default();
        match policy.validate("resume.docx") {
            Err(ExtractionError::UnsupportedFormat { file_name, allowed }) => {
                assert_eq!(file_name, "resume.docx");
                assert_eq!(allowed, "pdf");
            }
            other => panic!("expected unsupported format, got {other:?}"),
        }
        assert!(policy.validate("resume").is_err());
    }

    #[test]
    fn policy_normalizes_configured_extensions() {
        let policy = UploadPolicy::new([" .PDF", "", "txt"]);
        assert_eq!(policy.allowed_extensions(), ["pdf", "txt"]);
    }

    #[test]
    fn export_words_default_to_empty() {
        let document = ExtractedDocument::from_json(
            r#"{"file_name":"cv.pdf","pages":[{"height":792.0,"lines":["JANE DOE"]}]}"#,
        )
        .expect("export parses");
        assert_eq!(document.pages.len(), 1);
        assert!(document.pages[0].words.is_empty());
    }
}
