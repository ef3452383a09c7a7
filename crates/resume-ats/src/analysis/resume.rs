use super::document::ExtractedPage;
use super::sections::{detect_sections, SectionMap};
use super::vocabulary::{word_pattern, BULLET_GLYPHS};
use serde::Serialize;

const HEADER_BAND: f32 = 0.1;
const FOOTER_BAND: f32 = 0.9;

/// Read-only view of one resume shared by every rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeData {
    pub raw_text: String,
    pub lines: Vec<String>,
    pub word_count: usize,
    pub header_text: String,
    pub footer_text: String,
    pub bullets: Vec<String>,
    pub sections: SectionMap,
}

impl ResumeData {
    /// Aggregate extracted pages into the resume model.
    ///
    /// Words whose top edge falls in the first tenth of their page feed the
    /// header text, words in the last tenth feed the footer text.
    pub fn from_pages(pages: &[ExtractedPage]) -> Self {
        let mut header_words = Vec::new();
        let mut footer_words = Vec::new();
        let mut lines = Vec::new();

        for page in pages {
            for word in &page.words {
                if word.top < page.height * HEADER_BAND {
                    header_words.push(word.text.as_str());
                } else if word.top > page.height * FOOTER_BAND {
                    footer_words.push(word.text.as_str());
                }
            }

            lines.extend(page.lines.iter().map(String::as_str));
        }

        Self::assemble(&lines, header_words.join(" "), footer_words.join(" "))
    }

    /// Build the model from plain lines when no layout data is available.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let lines: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();
        Self::assemble(&lines, String::new(), String::new())
    }

    fn assemble(raw_lines: &[&str], header_text: String, footer_text: String) -> Self {
        let lines: Vec<String> = raw_lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let bullets = lines
            .iter()
            .filter(|line| line.starts_with(BULLET_GLYPHS))
            .cloned()
            .collect();

        let raw_text = lines.join("\n");
        let word_count = word_pattern().find_iter(&raw_text).count();
        let sections = detect_sections(&lines);

        Self {
            raw_text,
            lines,
            word_count,
            header_text,
            footer_text,
            bullets,
            sections,
        }
    }

    /// Whitespace-separated tokens in the header band.
    pub fn header_word_count(&self) -> usize {
        self.header_text.split_whitespace().count()
    }

    /// Whitespace-separated tokens across the named sections.
    pub fn section_word_count(&self, labels: &[&str]) -> usize {
        labels
            .iter()
            .flat_map(|label| self.sections.lines(label))
            .map(|line| line.split_whitespace().count())
            .sum()
    }
}
