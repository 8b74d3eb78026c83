mod generator;
mod synthesizer;
mod templates;

pub use generator::{parse_generated, recommend, GeneratorError, RecommendationGenerator};
pub use synthesizer::{synthesize_recommendations, MAX_RECOMMENDATIONS};

use serde::{Deserialize, Serialize};

/// Urgency bucket a recommendation falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Immediate,
    ShortTerm,
    LongTerm,
}

impl RecommendationCategory {
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::Immediate => 2,
            Self::ShortTerm => 1,
            Self::LongTerm => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl RecommendationPriority {
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::Critical => 3,
            Self::High => 2,
            Self::Medium => 1,
            Self::Low => 0,
        }
    }
}

/// Which aspect of the setup a recommendation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Posture,
    Equipment,
    Movement,
    Environment,
    Behavior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    Free,
    Low,
    Medium,
    High,
}

impl CostTier {
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::Free => 3,
            Self::Low => 2,
            Self::Medium => 1,
            Self::High => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    Easy,
    Moderate,
    Hard,
}

/// Actionable intervention surfaced to the user.
///
/// Unknown fields are rejected on deserialization so an external generator
/// whose schema drifted cannot slip a payload past direct acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub priority: RecommendationPriority,
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
    pub action_steps: Vec<String>,
    pub expected_benefit: String,
    pub timeframe: String,
    pub cost: CostTier,
    pub difficulty: DifficultyTier,
}

/// Optional per-field predicates, AND-combined; the default filter keeps
/// every recommendation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationFilter {
    pub category: Option<RecommendationCategory>,
    pub priority: Option<RecommendationPriority>,
    pub kind: Option<RecommendationType>,
    pub cost: Option<CostTier>,
    pub difficulty: Option<DifficultyTier>,
}

impl RecommendationFilter {
    fn matches(&self, recommendation: &Recommendation) -> bool {
        self.category.map_or(true, |c| c == recommendation.category)
            && self.priority.map_or(true, |p| p == recommendation.priority)
            && self.kind.map_or(true, |k| k == recommendation.kind)
            && self.cost.map_or(true, |c| c == recommendation.cost)
            && self
                .difficulty
                .map_or(true, |d| d == recommendation.difficulty)
    }
}

/// Keeps the recommendations matching every populated filter field.
pub fn filter_recommendations(
    recommendations: Vec<Recommendation>,
    filter: &RecommendationFilter,
) -> Vec<Recommendation> {
    recommendations
        .into_iter()
        .filter(|recommendation| filter.matches(recommendation))
        .collect()
}

/// Stable sort: priority first, then urgency category, then cost (cheapest
/// wins). Fully equal keys keep their input order.
pub fn rank_recommendations(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    recommendations.sort_by(|a, b| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then(b.category.rank().cmp(&a.category.rank()))
            .then(b.cost.rank().cmp(&a.cost.rank()))
    });
    recommendations
}
