use super::resume::ResumeData;
use super::rules::{run_rules, Category, Issue};
use serde::Serialize;
use std::collections::BTreeMap;

const BASE_SCORE: u32 = 100;

impl Category {
    /// Most penalty points this category may subtract from the overall score.
    pub const fn cap(self) -> u32 {
        match self {
            Self::Tailoring => 15,
            Self::Content => 20,
            Self::Sections => 15,
            Self::AtsEssentials => 10,
        }
    }

    /// Upper bound of the per-category display gauge.
    pub const fn max_score(self) -> u32 {
        match self {
            Self::Tailoring => 45,
            Self::Content => 30,
            Self::Sections => 25,
            Self::AtsEssentials => 45,
        }
    }
}

/// Overall verdict derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AtsStatus {
    #[serde(rename = "ATS-Safe")]
    AtsSafe,
    Borderline,
    #[serde(rename = "High Auto-Reject Risk")]
    HighAutoRejectRisk,
}

impl AtsStatus {
    pub const fn from_score(score: u32) -> Self {
        if score >= 75 {
            Self::AtsSafe
        } else if score >= 55 {
            Self::Borderline
        } else {
            Self::HighAutoRejectRisk
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AtsSafe => "ATS-Safe",
            Self::Borderline => "Borderline",
            Self::HighAutoRejectRisk => "High Auto-Reject Risk",
        }
    }
}

/// Per-category penalty totals, each clamped to its category cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PenaltyLedger {
    totals: BTreeMap<Category, u32>,
}

impl PenaltyLedger {
    /// Charge a penalty, adding only the headroom left under the cap.
    pub fn charge(&mut self, category: Category, penalty: u32) {
        let total = self.totals.entry(category).or_insert(0);
        let headroom = category.cap().saturating_sub(*total);
        *total += penalty.min(headroom);
    }

    pub fn penalty(&self, category: Category) -> u32 {
        self.totals.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.totals.values().sum()
    }

    /// Capped penalty projected onto the category's display gauge.
    pub fn display_score(&self, category: Category) -> u32 {
        let scaled = round_half_even(
            self.penalty(category) * category.max_score(),
            category.cap(),
        );
        category.max_score().saturating_sub(scaled)
    }
}

/// Integer division rounded to nearest, ties to even.
fn round_half_even(numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }

    let quotient = numerator / denominator;
    let twice_remainder = (numerator % denominator) * 2;
    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Score, verdict and itemized issues for one resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub score: u32,
    pub status: AtsStatus,
    pub issues: Vec<Issue>,
    pub category_scores: BTreeMap<Category, u32>,
    pub category_max_scores: BTreeMap<Category, u32>,
}

pub fn category_max_scores() -> BTreeMap<Category, u32> {
    Category::ALL
        .into_iter()
        .map(|category| (category, category.max_score()))
        .collect()
}

/// Run every rule against the resume and score the findings.
pub fn evaluate(resume: &ResumeData) -> ScoreReport {
    score_issues(run_rules(resume))
}

/// Fold issues, in order, into a capped score.
pub fn score_issues(issues: Vec<Issue>) -> ScoreReport {
    let mut ledger = PenaltyLedger::default();
    for issue in &issues {
        ledger.charge(issue.category, issue.penalty);
    }

    let score = BASE_SCORE.saturating_sub(ledger.total());
    let category_scores = Category::ALL
        .into_iter()
        .map(|category| (category, ledger.display_score(category)))
        .collect();

    ScoreReport {
        score,
        status: AtsStatus::from_score(score),
        issues,
        category_scores,
        category_max_scores: category_max_scores(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_breaks_ties_toward_even() {
        assert_eq!(round_half_even(210, 20), 10);
        assert_eq!(round_half_even(450, 20), 22);
        assert_eq!(round_half_even(200, 15), 13);
        assert_eq!(round_half_even(350, 20), 18);
        assert_eq!(round_half_even(5, 0), 0);
    }

    #[test]
    fn ledger_adds_partial_headroom_then_stops() {
        let mut ledger = PenaltyLedger::default();
        ledger.charge(Category::AtsEssentials, 6);
        ledger.charge(Category::AtsEssentials, 10);
        assert_eq!(ledger.penalty(Category::AtsEssentials), 10);

        ledger.charge(Category::AtsEssentials, 4);
        assert_eq!(ledger.penalty(Category::AtsEssentials), 10);
        assert_eq!(ledger.total(), 10);
    }

    #[test]
    fn display_scores_scale_against_the_gauge() {
        let mut ledger = PenaltyLedger::default();
        ledger.charge(Category::Content, 7);
        ledger.charge(Category::Sections, 15);

        // 7/20 * 30 = 10.5, rounded to 10
        assert_eq!(ledger.display_score(Category::Content), 20);
        assert_eq!(ledger.display_score(Category::Sections), 0);
        assert_eq!(ledger.display_score(Category::Tailoring), 45);
    }

    #[test]
    fn status_thresholds_cover_every_score() {
        assert_eq!(AtsStatus::from_score(100), AtsStatus::AtsSafe);
        assert_eq!(AtsStatus::from_score(75), AtsStatus::AtsSafe);
        assert_eq!(AtsStatus::from_score(74), AtsStatus::Borderline);
        assert_eq!(AtsStatus::from_score(55), AtsStatus::Borderline);
        assert_eq!(AtsStatus::from_score(54), AtsStatus::HighAutoRejectRisk);
        assert_eq!(AtsStatus::from_score(0), AtsStatus::HighAutoRejectRisk);
    }
}
