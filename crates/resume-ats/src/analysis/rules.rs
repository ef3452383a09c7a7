use super::resume::ResumeData;
use super::vocabulary::{
    date_pattern, is_action_verb, phone_pattern, BULLET_GLYPHS, EXPECTED_ORDER, IMPACT_KEYWORDS,
    REQUIRED_SECTIONS, SOFT_SKILLS, STANDARD_SECTIONS, TECH_OBJECTS, TITLE_KEYWORDS,
};
use serde::Serialize;

/// Scoring bucket an issue is charged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Tailoring,
    Content,
    Sections,
    #[serde(rename = "ATS Essentials")]
    AtsEssentials,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tailoring,
        Category::Content,
        Category::Sections,
        Category::AtsEssentials,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tailoring => "Tailoring",
            Self::Content => "Content",
            Self::Sections => "Sections",
            Self::AtsEssentials => "ATS Essentials",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Stable identifier of the rule that produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    SoftSkills,
    ActionVerbs,
    TailoredTitle,
    SectionOrder,
    ExperienceDensity,
    BulletQuality,
    TimelineConsistency,
    AtsFailureModes,
    MissingSections,
    FragmentedStructure,
    HeaderNoise,
    ContactInfo,
}

/// Finding emitted by a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub id: RuleId,
    pub category: Category,
    pub priority: Priority,
    pub penalty: u32,
    pub message: String,
    pub reason: String,
    pub fix: String,
}

pub type Rule = fn(&ResumeData) -> Option<Issue>;

/// Every rule, in evaluation order.
pub const RULES: [Rule; 12] = [
    soft_skills,
    action_verbs,
    tailored_title,
    section_order,
    experience_density,
    bullet_quality,
    timeline_consistency,
    ats_failure_modes,
    missing_sections,
    fragmented_structure,
    header_noise,
    contact_info,
];

const HEADER_WORD_LIMIT: usize = 10;

pub fn run_rules(resume: &ResumeData) -> Vec<Issue> {
    RULES.iter().filter_map(|rule| rule(resume)).collect()
}

fn issue(
    id: RuleId,
    category: Category,
    priority: Priority,
    penalty: u32,
    message: impl Into<String>,
    reason: &str,
    fix: impl Into<String>,
) -> Issue {
    Issue {
        id,
        category,
        priority,
        penalty,
        message: message.into(),
        reason: reason.to_string(),
        fix: fix.into(),
    }
}

/// First word of a bullet with its glyph stripped, lower-cased.
fn leading_word(bullet: &str) -> String {
    bullet
        .trim_matches(|ch: char| ch == ' ' || BULLET_GLYPHS.contains(&ch))
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

fn fraction(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64
}

pub fn soft_skills(resume: &ResumeData) -> Option<Issue> {
    let text = resume.raw_text.to_lowercase();
    let found = SOFT_SKILLS
        .iter()
        .filter(|skill| text.contains(*skill))
        .count();

    (found < 3).then(|| {
        issue(
            RuleId::SoftSkills,
            Category::Tailoring,
            Priority::High,
            5,
            "Limited soft skills detected",
            "ATS favors resumes that balance technical and interpersonal skills",
            "Integrate soft skills like leadership or communication into experience bullets",
        )
    })
}

pub fn action_verbs(resume: &ResumeData) -> Option<Issue> {
    if resume.bullets.is_empty() {
        return None;
    }

    let weak = resume
        .bullets
        .iter()
        .filter(|bullet| !is_action_verb(&leading_word(bullet)))
        .count();

    (fraction(weak, resume.bullets.len()) > 0.6).then(|| {
        issue(
            RuleId::ActionVerbs,
            Category::Tailoring,
            Priority::High,
            5,
            "Bullet points lack strong action verbs",
            "ATS prefers accomplishment-driven bullet points",
            "Start bullets with action verbs like Developed, Built, Led, or Analyzed",
        )
    })
}

pub fn tailored_title(resume: &ResumeData) -> Option<Issue> {
    let header = resume.header_text.to_lowercase();
    let titled = TITLE_KEYWORDS.iter().any(|title| header.contains(*title));

    (!titled).then(|| {
        issue(
            RuleId::TailoredTitle,
            Category::Tailoring,
            Priority::High,
            5,
            "No clear professional title detected",
            "ATS uses job titles to classify candidate profiles",
            "Add a clear professional title below your name (e.g., Data Analyst)",
        )
    })
}

/// Sum of index differences between the expected flow and the order in which
/// the core sections actually appear.
pub fn section_disorder(resume: &ResumeData) -> Option<usize> {
    let actual: Vec<&str> = resume
        .sections
        .labels()
        .filter(|label| EXPECTED_ORDER.contains(label))
        .collect();

    if actual.len() < 3 {
        return None;
    }

    let disorder = actual
        .iter()
        .enumerate()
        .filter_map(|(actual_index, label)| {
            EXPECTED_ORDER
                .iter()
                .position(|expected| expected == label)
                .map(|expected_index| expected_index.abs_diff(actual_index))
        })
        .sum();

    Some(disorder)
}

pub fn section_order(resume: &ResumeData) -> Option<Issue> {
    let disorder = section_disorder(resume)?;

    (disorder >= 6).then(|| {
        issue(
            RuleId::SectionOrder,
            Category::Sections,
            Priority::Medium,
            6,
            "Suboptimal section order detected",
            "ATS scores resumes higher when sections follow a predictable flow",
            "Reorder sections as: Summary → Skills → Experience → Projects → Education",
        )
    })
}

pub fn experience_density(resume: &ResumeData) -> Option<Issue> {
    let labels = ["experience", "projects"];
    if labels
        .iter()
        .all(|label| resume.sections.lines(label).is_empty())
    {
        return None;
    }

    let experience_words = resume.section_word_count(&labels);
    let ratio = fraction(experience_words, resume.word_count.max(1));

    (ratio < 0.25).then(|| {
        issue(
            RuleId::ExperienceDensity,
            Category::Content,
            Priority::High,
            7,
            "Low experience signal density detected",
            "ATS favors resumes where experience forms a strong portion of content",
            "Expand experience and project sections with concrete responsibilities and outcomes",
        )
    })
}

/// Points for verb, technical object and measurable impact.
pub fn bullet_strength(bullet: &str) -> u8 {
    let lowered = bullet.to_lowercase();
    // Raw first token, so a leading glyph never reads as a verb.
    let has_verb = lowered.split_whitespace().next().is_some_and(is_action_verb);
    let has_object = TECH_OBJECTS.iter().any(|object| lowered.contains(*object));
    let has_impact = IMPACT_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(*keyword));

    [has_verb, has_object, has_impact]
        .into_iter()
        .filter(|signal| *signal)
        .count() as u8
}

pub fn bullet_quality(resume: &ResumeData) -> Option<Issue> {
    if resume.bullets.is_empty() {
        return None;
    }

    let weak = resume
        .bullets
        .iter()
        .filter(|bullet| bullet_strength(bullet) < 2)
        .count();

    (fraction(weak, resume.bullets.len()) > 0.4).then(|| {
        issue(
            RuleId::BulletQuality,
            Category::Content,
            Priority::High,
            8,
            "Bullet points lack clear impact or technical focus",
            "ATS and recruiters favor bullets showing action, scope, and results",
            "Rewrite bullets using Verb + Technical Object + Measurable Impact",
        )
    })
}

pub fn timeline_consistency(resume: &ResumeData) -> Option<Issue> {
    let experience = resume.sections.lines("experience");
    if experience.is_empty() {
        return None;
    }

    let dated = experience
        .iter()
        .filter(|line| date_pattern().is_match(line))
        .count();

    (dated < 2).then(|| {
        issue(
            RuleId::TimelineConsistency,
            Category::Content,
            Priority::High,
            7,
            "Experience entries missing clear dates",
            "ATS relies on timelines to assess career progression",
            "Add start and end dates for each role (Month Year – Month Year)",
        )
    })
}

/// Parsing hazards that commonly derail automated screening.
pub fn failure_risks(resume: &ResumeData) -> Vec<&'static str> {
    let mut risks = Vec::new();

    if resume.header_word_count() > HEADER_WORD_LIMIT {
        risks.push("Header Misclassification");
    }
    if resume.sections.len() > 12 {
        risks.push("Section Fragmentation");
    }
    if resume.section_word_count(&["experience"]) < 150 {
        risks.push("Experience Under-Indexing");
    }

    risks
}

pub fn ats_failure_modes(resume: &ResumeData) -> Option<Issue> {
    let risks = failure_risks(resume);
    if risks.is_empty() {
        return None;
    }

    Some(issue(
        RuleId::AtsFailureModes,
        Category::AtsEssentials,
        Priority::High,
        10,
        "Potential ATS failure modes detected",
        "Certain resume patterns can cause ATS parsing or ranking failures",
        format!("Mitigate risks: {}", risks.join(", ")),
    ))
}

pub fn missing_sections(resume: &ResumeData) -> Option<Issue> {
    let missing: Vec<&str> = REQUIRED_SECTIONS
        .iter()
        .copied()
        .filter(|section| !resume.sections.contains(section))
        .collect();

    if missing.is_empty() {
        return None;
    }

    Some(issue(
        RuleId::MissingSections,
        Category::Sections,
        Priority::High,
        15,
        format!("Missing essential sections: {}", missing.join(", ")),
        "ATS expects a standard resume structure",
        "Add clearly labeled Education, Skills, and Experience sections",
    ))
}

pub fn fragmented_structure(resume: &ResumeData) -> Option<Issue> {
    let extra = resume
        .sections
        .labels()
        .filter(|label| !STANDARD_SECTIONS.contains(label))
        .count();

    (extra >= 5).then(|| {
        issue(
            RuleId::FragmentedStructure,
            Category::Sections,
            Priority::High,
            8,
            "Too many non-standard section headings detected",
            "ATS may fragment resume into unrelated sections",
            "Use standard section headings and avoid styling labels as headers",
        )
    })
}

pub fn header_noise(resume: &ResumeData) -> Option<Issue> {
    (resume.header_word_count() > HEADER_WORD_LIMIT).then(|| {
        issue(
            RuleId::HeaderNoise,
            Category::AtsEssentials,
            Priority::Medium,
            6,
            "Non-contact content detected in header area",
            "ATS may misclassify content placed in headers",
            "Avoid placing experience or project lines near page top",
        )
    })
}

pub fn contact_info(resume: &ResumeData) -> Option<Issue> {
    let has_email = resume.raw_text.contains('@');
    let has_phone = phone_pattern().is_match(&resume.raw_text);

    (!(has_email && has_phone)).then(|| {
        issue(
            RuleId::ContactInfo,
            Category::AtsEssentials,
            Priority::Medium,
            4,
            "Incomplete contact information",
            "Recruiters may not be able to contact you",
            "Ensure email and phone number are clearly visible at the top",
        )
    })
}
