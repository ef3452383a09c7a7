//! Resume structure detection, rule evaluation, and ATS scoring.

pub mod document;
pub mod recommendations;
pub mod resume;
pub mod router;
pub mod rules;
pub mod scorer;
pub mod sections;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use document::{ExtractedDocument, ExtractedPage, ExtractionError, PageWord, UploadPolicy};
pub use recommendations::{group_by_priority, Recommendation};
pub use resume::ResumeData;
pub use router::analysis_router;
pub use rules::{Category, Issue, Priority, RuleId};
pub use scorer::{evaluate, AtsStatus, ScoreReport};
pub use sections::{detect_sections, is_heading, normalize_section_name, SectionMap};

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Stateless analyzer that validates an extraction export and scores it.
#[derive(Debug, Clone, Default)]
pub struct ResumeAnalyzer {
    policy: UploadPolicy,
}

impl ResumeAnalyzer {
    pub fn new(policy: UploadPolicy) -> Self {
        Self { policy }
    }

    pub fn analyze(&self, document: &ExtractedDocument) -> Result<AnalysisOutcome, ExtractionError> {
        self.policy.validate(&document.file_name)?;
        if document.pages.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        let resume = ResumeData::from_pages(&document.pages);
        debug!(
            file_name = %document.file_name,
            lines = resume.lines.len(),
            bullets = resume.bullets.len(),
            sections = resume.sections.len(),
            "resume model assembled"
        );

        let summary = DocumentSummary {
            file_name: document.file_name.clone(),
            page_count: document.pages.len(),
            line_count: resume.lines.len(),
            word_count: resume.word_count,
            sections: resume.sections.labels().map(str::to_string).collect(),
        };

        let outcome = AnalysisOutcome::from_report(evaluate(&resume), summary);
        info!(
            file_name = %outcome.document.file_name,
            score = outcome.report.score,
            status = outcome.report.status.label(),
            issues = outcome.report.issues.len(),
            "resume analyzed"
        );

        Ok(outcome)
    }
}

/// Shape of the analyzed document, echoed back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub file_name: String,
    pub page_count: usize,
    pub line_count: usize,
    pub word_count: usize,
    pub sections: Vec<String>,
}

/// Scored report plus the priority-grouped presentation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisOutcome {
    #[serde(flatten)]
    pub report: ScoreReport,
    pub recommendations: BTreeMap<Priority, Vec<Recommendation>>,
    pub document: DocumentSummary,
}

impl AnalysisOutcome {
    pub fn from_report(report: ScoreReport, document: DocumentSummary) -> Self {
        let recommendations = group_by_priority(&report.issues);
        Self {
            report,
            recommendations,
            document,
        }
    }
}
