use super::{templates, Recommendation};
use crate::assessment::domain::{ErgonomicAssessment, LightingQuality};
use crate::assessment::scoring::{RiskAnalysis, RiskCategory, RiskLevel};

/// Hard cap on a synthesized set; earliest-emitted recommendations win.
pub const MAX_RECOMMENDATIONS: usize = 8;

/// Deterministic, network-free recommendation synthesis.
///
/// One canned template per high/critical risk factor (posture, movement, and
/// equipment categories carry templates; environment and time factors are
/// covered by the conditional rules below), followed by conditional templates
/// driven directly off the raw assessment.
pub fn synthesize_recommendations(
    assessment: &ErgonomicAssessment,
    analysis: &RiskAnalysis,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for factor in &analysis.factors {
        if !matches!(factor.severity, RiskLevel::High | RiskLevel::Critical) {
            continue;
        }
        match factor.category {
            RiskCategory::Posture => recommendations.push(templates::posture_reset()),
            RiskCategory::Movement => recommendations.push(templates::movement_breaks()),
            RiskCategory::Equipment => recommendations.push(templates::workstation_fit()),
            RiskCategory::Environment | RiskCategory::Time => {}
        }
    }

    if assessment.movement.screen_breaks_per_hour < 2.0 {
        recommendations.push(templates::screen_break_rule());
    }
    if !assessment.workspace.lumbar_support {
        recommendations.push(templates::lumbar_support());
    }
    if matches!(
        assessment.workspace.lighting,
        LightingQuality::Poor | LightingQuality::Fair
    ) {
        recommendations.push(templates::improve_lighting());
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
