use super::synthesizer::synthesize_recommendations;
use super::Recommendation;
use crate::assessment::domain::ErgonomicAssessment;
use crate::assessment::scoring::RiskAnalysis;

/// Capability interface for an external recommendation generator (typically
/// a network-backed text model owned by the caller). Injecting it keeps the
/// fallback path unit-testable with an always-failing implementation.
pub trait RecommendationGenerator {
    fn generate(
        &self,
        assessment: &ErgonomicAssessment,
        analysis: &RiskAnalysis,
    ) -> Result<Vec<Recommendation>, GeneratorError>;
}

/// Failure raised by an external generator. Never surfaces past
/// [`recommend`]; the fallback resolves every variant.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("generator transport failed: {0}")]
    Transport(String),
    #[error("generator returned status {0}")]
    Status(u16),
    #[error("generator payload did not match the recommendation schema: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("generator produced no recommendations")]
    Empty,
}

/// Strict acceptance of an external generator payload: the JSON must
/// deserialize exactly into the recommendation schema, enums included.
pub fn parse_generated(payload: &str) -> Result<Vec<Recommendation>, GeneratorError> {
    let recommendations: Vec<Recommendation> = serde_json::from_str(payload)?;
    if recommendations.is_empty() {
        return Err(GeneratorError::Empty);
    }
    Ok(recommendations)
}

/// Attempts the external generator and falls back unconditionally to the
/// deterministic synthesizer on any failure. The failure is logged as a side
/// observation only; this function cannot fail.
pub fn recommend(
    generator: &dyn RecommendationGenerator,
    assessment: &ErgonomicAssessment,
    analysis: &RiskAnalysis,
) -> Vec<Recommendation> {
    match generator.generate(assessment, analysis) {
        Ok(recommendations) if !recommendations.is_empty() => recommendations,
        Ok(_) => {
            tracing::warn!("external generator returned an empty set, using deterministic synthesis");
            synthesize_recommendations(assessment, analysis)
        }
        Err(error) => {
            tracing::warn!(%error, "external generator failed, using deterministic synthesis");
            synthesize_recommendations(assessment, analysis)
        }
    }
}
