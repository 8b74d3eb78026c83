use chrono::{DateTime, Utc};

use super::config::ScoringConfig;
use super::movement::movement_risk;
use super::posture::posture_risk;
use super::priority::select_priorities;
use super::symptoms::symptom_risk;
use super::workspace::workspace_risk;
use super::{RiskAnalysis, RiskCategory, RiskFactor, RiskLevel};
use crate::assessment::domain::{ErgonomicAssessment, UserProfileSnapshot};

/// Factor name shared with the priority selector so reported discomfort can
/// be escalated ahead of everything else.
pub(crate) const DISCOMFORT_FACTOR_NAME: &str = "Existing discomfort";

/// Runs the four risk models, folds them into the weighted overall score,
/// and surfaces the discrete factors downstream consumers rank and act on.
pub(crate) fn analyze(
    assessment: &ErgonomicAssessment,
    profile: &UserProfileSnapshot,
    config: &ScoringConfig,
    analyzed_at: DateTime<Utc>,
) -> RiskAnalysis {
    let posture = posture_risk(&assessment.posture, profile);
    let workspace = workspace_risk(&assessment.workspace, profile, config);
    let movement = movement_risk(&assessment.movement);
    let symptoms = symptom_risk(&assessment.symptoms);

    let weights = &config.model_weights;
    let overall_score = (posture * weights.posture
        + workspace * weights.workspace
        + movement * weights.movement
        + symptoms * weights.symptoms)
        .clamp(0.0, 100.0)
        .round();
    let overall_level = RiskLevel::from_score(overall_score);

    let mut factors = Vec::new();

    if posture > config.factor_threshold {
        factors.push(RiskFactor {
            category: RiskCategory::Posture,
            name: "Poor posture habits".to_string(),
            severity: RiskLevel::from_score(posture),
            score: posture,
            description: "Sustained deviation from neutral posture across the workday".to_string(),
            impact: "Loads the neck, shoulders, and spine beyond their recovery capacity"
                .to_string(),
        });
    }

    if workspace > config.factor_threshold {
        factors.push(RiskFactor {
            category: RiskCategory::Equipment,
            name: "Workspace setup issues".to_string(),
            severity: RiskLevel::from_score(workspace),
            score: workspace,
            description: "Desk, monitor, or support geometry sits outside the recommended ranges"
                .to_string(),
            impact: "Forces compensating postures and contact stress throughout the day"
                .to_string(),
        });
    }

    if movement > config.factor_threshold {
        factors.push(RiskFactor {
            category: RiskCategory::Movement,
            name: "Insufficient movement".to_string(),
            severity: RiskLevel::from_score(movement),
            score: movement,
            description: "Breaks, stretching, or walking fall below the recommended cadence"
                .to_string(),
            impact: "Static loading accumulates with no recovery periods between tasks"
                .to_string(),
        });
    }

    let hours = profile.work_hours_per_day;
    if hours > config.overtime_threshold_hours {
        let overtime = ((hours - config.overtime_threshold_hours) * 15.0).clamp(0.0, 100.0);
        factors.push(RiskFactor {
            category: RiskCategory::Time,
            name: "Extended work hours".to_string(),
            severity: if hours > 10.0 {
                RiskLevel::High
            } else {
                RiskLevel::Moderate
            },
            score: overtime,
            description: format!("{hours:.1} hours of daily screen work"),
            impact: "Longer exposure amplifies every other risk factor".to_string(),
        });
    }

    if symptoms > 0.0 {
        factors.push(RiskFactor {
            category: RiskCategory::Posture,
            name: DISCOMFORT_FACTOR_NAME.to_string(),
            severity: RiskLevel::from_score(symptoms),
            score: symptoms,
            description: "Reported symptoms indicate strain already underway".to_string(),
            impact: "Discomfort tends to progress unless its drivers change promptly".to_string(),
        });
    }

    // Stable sort: ties keep insertion order, which downstream ranking relies on.
    factors.sort_by(|a, b| b.score.total_cmp(&a.score));

    let priority_areas = select_priorities(&factors);

    RiskAnalysis {
        overall_level,
        overall_score,
        factors,
        priority_areas,
        analyzed_at,
    }
}
