use super::vocabulary::CANONICAL_SECTIONS;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Label assigned to body text that appears before any heading.
pub const UNKNOWN_SECTION: &str = "unknown";

const MAX_HEADING_CHARS: usize = 40;

/// Body lines grouped under one section label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub lines: Vec<String>,
}

/// Insertion-ordered mapping from section label to body lines.
///
/// Labels are unique. Returning to a label later in the document appends to
/// its original bucket instead of opening a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self {
            sections: vec![Section {
                label: UNKNOWN_SECTION.to_string(),
                lines: Vec::new(),
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    /// Lines recorded under `label`, or an empty slice when the label is absent.
    pub fn lines(&self, label: &str) -> &[String] {
        self.position(label)
            .map(|index| self.sections[index].lines.as_slice())
            .unwrap_or(&[])
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Ensure a bucket exists for `label`, returning its index.
    pub fn open(&mut self, label: &str) -> usize {
        match self.position(label) {
            Some(index) => index,
            None => {
                self.sections.push(Section {
                    label: label.to_string(),
                    lines: Vec::new(),
                });
                self.sections.len() - 1
            }
        }
    }

    pub fn push_line(&mut self, label: &str, line: &str) {
        let index = self.open(label);
        self.sections[index].lines.push(line.to_string());
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.label == label)
    }
}

impl Default for SectionMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.label, &section.lines)?;
        }
        map.end()
    }
}

/// Classify a line as a section heading using capitalization only.
pub fn is_heading(line: &str) -> bool {
    if line.chars().count() > MAX_HEADING_CHARS {
        return false;
    }

    let line = line.strip_suffix(':').unwrap_or(line);
    is_upper(line) || is_title(line)
}

/// At least one cased letter and no lower-case letters.
fn is_upper(text: &str) -> bool {
    let mut cased = false;
    for ch in text.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Every word starts upper-case and continues lower-case.
fn is_title(text: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;
    for ch in text.chars() {
        if ch.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if ch.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }
    cased
}

/// Map heading text onto a canonical section label.
///
/// The first canonical label (in vocabulary order) contained in the cleaned
/// heading wins, so "My Projects and Skills" resolves to `projects`.
pub fn normalize_section_name(line: &str) -> String {
    let cleaned: String = line
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic() || *ch == ' ')
        .collect::<String>()
        .to_ascii_lowercase();
    let cleaned = cleaned.trim();

    if let Some(canonical) = CANONICAL_SECTIONS
        .iter()
        .find(|canonical| cleaned.contains(*canonical))
    {
        return canonical.to_string();
    }

    if cleaned.is_empty() {
        UNKNOWN_SECTION.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Group body lines under the most recent heading.
pub fn detect_sections<S: AsRef<str>>(lines: &[S]) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current = UNKNOWN_SECTION.to_string();

    for line in lines {
        let line = line.as_ref();
        if is_heading(line) {
            current = normalize_section_name(line);
            sections.open(&current);
        } else {
            sections.push_line(&current, line);
        }
    }

    sections
}
