use clap::Args;
use resume_ats::analysis::{ExtractedDocument, Priority, Recommendation};
use resume_ats::config::AppConfig;
use resume_ats::error::AppError;
use resume_ats::{AnalysisOutcome, ResumeAnalyzer};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Extraction export (JSON) produced by the PDF extractor
    pub(crate) export: PathBuf,
    /// Print the full analysis outcome as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Append recommendations grouped by priority
    #[arg(long)]
    pub(crate) grouped: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        export,
        json,
        grouped,
    } = args;

    let config = AppConfig::load()?;
    let analyzer = ResumeAnalyzer::new(config.intake.upload_policy());

    let document = ExtractedDocument::from_path(&export)?;
    let outcome = analyzer.analyze(&document)?;

    if json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", format_report(&outcome, grouped));
    }

    Ok(())
}

pub(crate) fn format_report(outcome: &AnalysisOutcome, grouped: bool) -> String {
    let report = &outcome.report;
    let mut out = String::new();

    let _ = writeln!(out, "ATS report for {}", outcome.document.file_name);
    let _ = writeln!(
        out,
        "Score: {} / 100 ({})",
        report.score,
        report.status.label()
    );

    let _ = writeln!(out, "\nCategory scores");
    for (category, score) in &report.category_scores {
        let max = report.category_max_scores.get(category).copied().unwrap_or(0);
        let _ = writeln!(out, "  {:<16} {score} / {max}", category.label());
    }

    if report.issues.is_empty() {
        let _ = writeln!(out, "\nIssues: none");
    } else {
        let _ = writeln!(out, "\nIssues");
        for (index, issue) in report.issues.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. [{} Priority] ({}) {}",
                index + 1,
                issue.priority.label(),
                issue.category.label(),
                issue.message
            );
            let _ = writeln!(out, "     Why: {}", issue.reason);
            let _ = writeln!(out, "     Fix: {}", issue.fix);
        }
    }

    if grouped {
        write_recommendations(&mut out, &outcome.recommendations);
    }

    out
}

fn write_recommendations(out: &mut String, groups: &BTreeMap<Priority, Vec<Recommendation>>) {
    if groups.is_empty() {
        let _ = writeln!(out, "\nRecommendations: none");
        return;
    }

    let _ = writeln!(out, "\nRecommendations");
    for (priority, recommendations) in groups {
        let _ = writeln!(out, "  {} priority", priority.label());
        for recommendation in recommendations {
            let _ = writeln!(
                out,
                "    - ({}) {}: {}",
                recommendation.category.label(),
                recommendation.message,
                recommendation.fix
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"{
        "file_name": "john.pdf",
        "pages": [{
            "height": 792.0,
            "lines": ["JOHN SMITH", "Software Engineer", "EDUCATION", "BS CS 2020", "SKILLS", "Python, SQL"],
            "words": [{"text": "JOHN", "top": 30.0}, {"text": "SMITH", "top": 30.0}]
        }]
    }"#;

    fn outcome() -> AnalysisOutcome {
        let document = ExtractedDocument::from_json(EXPORT).expect("export parses");
        ResumeAnalyzer::default()
            .analyze(&document)
            .expect("analysis succeeds")
    }

    #[test]
    fn report_lists_score_gauges_and_numbered_issues() {
        let text = format_report(&outcome(), false);

        assert!(text.starts_with("ATS report for john.pdf\n"));
        assert!(text.contains("Score: 65 / 100 (Borderline)"));
        assert!(text.contains("Tailoring        15 / 45"));
        assert!(text.contains("ATS Essentials   0 / 45"));
        assert!(text.contains("  1. [High Priority] (Tailoring) "));
        assert!(text.contains("  5. [Medium Priority] (ATS Essentials) Incomplete contact information"));
        assert!(!text.contains("Recommendations"));
    }

    #[test]
    fn grouped_report_appends_recommendations_by_priority() {
        let text = format_report(&outcome(), true);

        let high = text.find("  High priority").expect("high group");
        let medium = text.find("  Medium priority").expect("medium group");
        assert!(high < medium);
        assert!(!text.contains("  Low priority"));
    }

    #[test]
    fn clean_outcome_reports_no_issues() {
        let mut outcome = outcome();
        outcome.report.issues.clear();
        outcome.recommendations.clear();

        let text = format_report(&outcome, true);

        assert!(text.contains("Issues: none"));
        assert!(text.contains("Recommendations: none"));
    }
}
