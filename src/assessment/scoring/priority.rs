use super::aggregate::DISCOMFORT_FACTOR_NAME;
use super::{RiskCategory, RiskFactor, RiskLevel};

const MAX_PRIORITY_AREAS: usize = 5;

const URGENT_PAIN_ADVISORY: &str =
    "Address reported pain immediately; persistent symptoms warrant a professional evaluation";

/// Picks the advisory strings for the highest-severity factors.
///
/// Expects `factors` already sorted descending by score. Only high and
/// critical factors are considered, the top three of those contribute their
/// distinct categories, and critical reported discomfort jumps the queue.
pub(crate) fn select_priorities(factors: &[RiskFactor]) -> Vec<String> {
    let urgent: Vec<&RiskFactor> = factors
        .iter()
        .filter(|factor| matches!(factor.severity, RiskLevel::High | RiskLevel::Critical))
        .collect();

    let mut priorities = Vec::new();

    if urgent
        .iter()
        .any(|factor| factor.name == DISCOMFORT_FACTOR_NAME && factor.severity == RiskLevel::Critical)
    {
        priorities.push(URGENT_PAIN_ADVISORY.to_string());
    }

    let mut seen_categories: Vec<RiskCategory> = Vec::new();
    for factor in urgent.iter().take(3) {
        if seen_categories.contains(&factor.category) {
            continue;
        }
        seen_categories.push(factor.category);
        priorities.push(category_advisory(factor.category).to_string());
    }

    priorities.truncate(MAX_PRIORITY_AREAS);
    priorities
}

const fn category_advisory(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Posture => "Correct posture habits before they settle into fixed patterns",
        RiskCategory::Equipment => "Adjust or replace workstation equipment to fit your body",
        RiskCategory::Movement => "Build regular movement breaks into the workday",
        RiskCategory::Environment => "Improve lighting and noise conditions in the workspace",
        RiskCategory::Time => "Shorten continuous working blocks or split them with recovery time",
    }
}
