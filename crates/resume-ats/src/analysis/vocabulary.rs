use regex::Regex;
use std::sync::OnceLock;

/// Glyphs that mark a line as a bullet point.
pub const BULLET_GLYPHS: [char; 6] = ['•', '-', '–', '—', '●', '▪'];

/// Canonical section labels, in match-priority order.
pub const CANONICAL_SECTIONS: [&str; 9] = [
    "education",
    "experience",
    "projects",
    "skills",
    "certifications",
    "summary",
    "objective",
    "internships",
    "achievements",
];

/// Section labels an ATS parser recognizes without guessing.
pub const STANDARD_SECTIONS: [&str; 7] = [
    "education",
    "skills",
    "experience",
    "projects",
    "certifications",
    "summary",
    "languages",
];

pub const REQUIRED_SECTIONS: [&str; 3] = ["education", "skills", "experience"];

/// Preferred top-to-bottom flow of the core sections.
pub const EXPECTED_ORDER: [&str; 5] = ["summary", "skills", "experience", "projects", "education"];

pub const ACTION_VERBS: [&str; 10] = [
    "developed",
    "built",
    "designed",
    "implemented",
    "led",
    "managed",
    "created",
    "optimized",
    "analyzed",
    "engineered",
];

pub const SOFT_SKILLS: [&str; 6] = [
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "adaptability",
    "collaboration",
];

pub const TECH_OBJECTS: [&str; 9] = [
    "model",
    "system",
    "pipeline",
    "api",
    "application",
    "database",
    "dashboard",
    "algorithm",
    "service",
];

pub const IMPACT_KEYWORDS: [&str; 11] = [
    "increased",
    "reduced",
    "improved",
    "optimized",
    "achieved",
    "delivered",
    "boosted",
    "accuracy",
    "performance",
    "%",
    "percent",
];

pub const TITLE_KEYWORDS: [&str; 4] = ["engineer", "analyst", "developer", "scientist"];

pub fn is_action_verb(word: &str) -> bool {
    ACTION_VERBS.contains(&word)
}

pub(crate) fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w+\b").expect("word pattern compiles"))
}

pub(crate) fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec|\d{4})")
            .expect("date pattern compiles")
    })
}

pub(crate) fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d{10}").expect("phone pattern compiles"))
}
