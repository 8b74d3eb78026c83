mod aggregate;
mod config;
mod movement;
mod posture;
mod priority;
mod symptoms;
mod workspace;

pub use config::{ModelWeights, ScoringConfig};

#[cfg(test)]
pub(crate) use aggregate::DISCOMFORT_FACTOR_NAME;
#[cfg(test)]
pub(crate) use movement::movement_risk;
#[cfg(test)]
pub(crate) use posture::posture_risk;
#[cfg(test)]
pub(crate) use priority::select_priorities;
#[cfg(test)]
pub(crate) use symptoms::symptom_risk;
#[cfg(test)]
pub(crate) use workspace::workspace_risk;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::domain::{ErgonomicAssessment, UserProfileSnapshot};

/// Stateless engine applying the scoring configuration to an assessment.
pub struct RiskEngine {
    config: ScoringConfig,
}

impl RiskEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score an assessment, stamping the analysis with the current time.
    pub fn score(
        &self,
        assessment: &ErgonomicAssessment,
        profile: &UserProfileSnapshot,
    ) -> RiskAnalysis {
        self.score_at(assessment, profile, Utc::now())
    }

    /// Score with a caller-supplied timestamp. Deterministic: identical
    /// inputs always produce an identical analysis.
    pub fn score_at(
        &self,
        assessment: &ErgonomicAssessment,
        profile: &UserProfileSnapshot,
        analyzed_at: DateTime<Utc>,
    ) -> RiskAnalysis {
        aggregate::analyze(assessment, profile, &self.config, analyzed_at)
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Four-band discretization of a 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Half-open bands, lower bound inclusive: <25 low, <50 moderate,
    /// <75 high, else critical.
    pub fn from_score(score: f32) -> Self {
        if score < 25.0 {
            Self::Low
        } else if score < 50.0 {
            Self::Moderate
        } else if score < 75.0 {
            Self::High
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Posture,
    Movement,
    Environment,
    Equipment,
    Time,
}

/// Discrete, scored contributor to overall risk, surfaced independently of
/// the aggregate score so it can be ranked and acted on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub category: RiskCategory,
    pub name: String,
    pub severity: RiskLevel,
    pub score: f32,
    pub description: String,
    pub impact: String,
}

/// Immutable result of one scoring run.
///
/// `factors` is always sorted descending by score (stable for equal scores);
/// `priority_areas` never exceeds five entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub overall_level: RiskLevel,
    pub overall_score: f32,
    pub factors: Vec<RiskFactor>,
    pub priority_areas: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}
