use crate::assessment::domain::{BodyArea, HealthSymptom, SymptomFrequency, SymptomSeverity};

/// Scores self-reported discomfort in [0, 100]; an empty report scores 0.
///
/// Each symptom contributes a base amount (more for the structurally loaded
/// neck/back/wrist areas); the sum is then scaled by mean severity and mean
/// frequency so one severe constant symptom outweighs several mild rare ones.
pub(crate) fn symptom_risk(symptoms: &[HealthSymptom]) -> f32 {
    if symptoms.is_empty() {
        return 0.0;
    }

    let mut base = 0.0;
    let mut severity_sum = 0.0;
    let mut frequency_sum = 0.0;

    for symptom in symptoms {
        base += 5.0;
        severity_sum += severity_weight(symptom.severity);
        frequency_sum += frequency_weight(symptom.frequency);

        if matches!(symptom.area, BodyArea::Neck | BodyArea::Back | BodyArea::Wrist) {
            base += 5.0;
        }
    }

    let count = symptoms.len() as f32;
    let mean_severity = severity_sum / count;
    let mean_frequency = frequency_sum / count;

    let scaled = base * (1.0 + mean_severity * 0.5) * (1.0 + mean_frequency * 0.3);
    scaled.round().clamp(0.0, 100.0)
}

const fn severity_weight(severity: SymptomSeverity) -> f32 {
    match severity {
        SymptomSeverity::None => 0.0,
        SymptomSeverity::Mild => 1.0,
        SymptomSeverity::Moderate => 2.0,
        SymptomSeverity::Severe => 3.0,
    }
}

const fn frequency_weight(frequency: SymptomFrequency) -> f32 {
    match frequency {
        SymptomFrequency::Never => 0.0,
        SymptomFrequency::Rarely => 0.5,
        SymptomFrequency::Sometimes => 1.0,
        SymptomFrequency::Often => 2.0,
        SymptomFrequency::Always => 3.0,
    }
}
