use super::rules::{Category, Issue, Priority};
use serde::Serialize;
use std::collections::BTreeMap;

/// Presentation view of an issue without scoring internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: Category,
    pub message: String,
    pub fix: String,
}

/// Group issues by priority, keeping rule order within each group.
pub fn group_by_priority(issues: &[Issue]) -> BTreeMap<Priority, Vec<Recommendation>> {
    let mut grouped: BTreeMap<Priority, Vec<Recommendation>> = BTreeMap::new();

    for issue in issues {
        grouped
            .entry(issue.priority)
            .or_default()
            .push(Recommendation {
                category: issue.category,
                message: issue.message.clone(),
                fix: issue.fix.clone(),
            });
    }

    grouped
}
