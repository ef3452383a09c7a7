use crate::analysis::document::{ExtractedDocument, ExtractedPage, PageWord};
use crate::analysis::resume::ResumeData;
use crate::analysis::rules::{Category, Issue, Priority, RuleId};

pub(super) const PAGE_HEIGHT: f32 = 792.0;

pub(super) fn resume(lines: &[&str]) -> ResumeData {
    ResumeData::from_lines(lines)
}

/// Single page whose header band holds `header`.
pub(super) fn page(lines: &[&str], header: &str) -> ExtractedPage {
    let mut words: Vec<PageWord> = header
        .split_whitespace()
        .map(|text| PageWord {
            text: text.to_string(),
            top: 24.0,
        })
        .collect();
    words.push(PageWord {
        text: "body".to_string(),
        top: PAGE_HEIGHT / 2.0,
    });

    ExtractedPage {
        height: PAGE_HEIGHT,
        lines: lines.iter().map(|line| line.to_string()).collect(),
        words,
    }
}

pub(super) fn resume_with_header(lines: &[&str], header: &str) -> ResumeData {
    ResumeData::from_pages(&[page(lines, header)])
}

pub(super) fn document(file_name: &str, lines: &[&str], header: &str) -> ExtractedDocument {
    ExtractedDocument {
        file_name: file_name.to_string(),
        pages: vec![page(lines, header)],
    }
}

pub(super) const STRONG_HEADER: &str = "Jane Doe Backend Software Engineer";

/// A resume that satisfies every rule.
pub(super) fn strong_resume_lines() -> Vec<String> {
    let verbs = ["Developed", "Built", "Designed", "Implemented", "Led", "Optimized"];

    let mut lines = vec![
        "JANE DOE".to_string(),
        "jane@doe.dev | 9876543210".to_string(),
        "SUMMARY".to_string(),
        "Backend engineer focused on reliable data systems.".to_string(),
        "SKILLS".to_string(),
        "Rust, Python, SQL, communication, leadership, teamwork".to_string(),
        "EXPERIENCE".to_string(),
        "Backend engineer at Acme Corp, Jan 2020 - Present".to_string(),
        "Data engineer at Initech, Jun 2017 - Dec 2019".to_string(),
    ];

    for index in 0..12 {
        lines.push(format!(
            "• {} the billing service pipeline that reduced settlement errors by {}% across regions",
            verbs[index % verbs.len()],
            10 + index
        ));
    }

    lines.extend([
        "PROJECTS".to_string(),
        "• Built a dashboard service that improved on-call response time by 40%".to_string(),
        "EDUCATION".to_string(),
        "Bachelor of Science in computer science, 2017".to_string(),
    ]);

    lines
}

pub(super) fn strong_resume() -> ResumeData {
    let lines = strong_resume_lines();
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    resume_with_header(&lines, STRONG_HEADER)
}

pub(super) fn issue(id: RuleId, category: Category, penalty: u32) -> Issue {
    Issue {
        id,
        category,
        priority: Priority::High,
        penalty,
        message: format!("{id:?} triggered"),
        reason: "fixture".to_string(),
        fix: "fixture fix".to_string(),
    }
}

pub(super) fn fired(resume: &ResumeData) -> Vec<RuleId> {
    crate::analysis::rules::run_rules(resume)
        .iter()
        .map(|issue| issue.id)
        .collect()
}
