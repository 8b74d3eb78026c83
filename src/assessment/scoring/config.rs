use serde::{Deserialize, Serialize};

/// Tunable scoring parameters; the defaults are the calibrated production
/// values and everything downstream treats them as policy, not physiology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub model_weights: ModelWeights,
    /// Ideal desk height as a fraction of standing height. An approximation
    /// constant, not a physiological law; tune per deployment.
    pub desk_height_ratio: f32,
    /// Sub-model score above which a discrete risk factor is surfaced.
    pub factor_threshold: f32,
    /// Daily hours above which a time-category factor is emitted.
    pub overtime_threshold_hours: f32,
}

/// Relative weight of each risk model in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelWeights {
    pub posture: f32,
    pub workspace: f32,
    pub movement: f32,
    pub symptoms: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            model_weights: ModelWeights {
                posture: 0.30,
                workspace: 0.25,
                movement: 0.25,
                symptoms: 0.20,
            },
            desk_height_ratio: 0.45,
            factor_threshold: 25.0,
            overtime_threshold_hours: 8.0,
        }
    }
}
