//! Ergonomic assessment scoring, trend analysis, and recommendation synthesis.

pub mod domain;
pub mod recommendations;
pub mod scoring;
pub mod trend;

#[cfg(test)]
mod tests;

pub use domain::{
    BackCurvature, BodyArea, ErgonomicAssessment, FeetPosition, HealthSymptom,
    InputDevicePlacement, LightingQuality, MovementPatterns, NoiseLevel, PostureData,
    RepetitiveMotions, ShoulderPosition, SymptomFrequency, SymptomSeverity, UserProfileSnapshot,
    WorkspaceSetup, WristPosition,
};
pub use recommendations::{
    filter_recommendations, parse_generated, rank_recommendations, recommend,
    synthesize_recommendations, CostTier, DifficultyTier, GeneratorError, Recommendation,
    RecommendationCategory, RecommendationFilter, RecommendationGenerator, RecommendationPriority,
    RecommendationType, MAX_RECOMMENDATIONS,
};
pub use scoring::{
    ModelWeights, RiskAnalysis, RiskCategory, RiskEngine, RiskFactor, RiskLevel, ScoringConfig,
};
pub use trend::{
    compare, improvement, trend, AssessmentComparison, AssessmentSnapshot, ImprovementSummary,
    RiskLevelChange, ScorePoint, TrendDirection, TrendSummary,
};
