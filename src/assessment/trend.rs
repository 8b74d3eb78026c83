//! Trend classification and assessment-to-assessment comparison.
//!
//! Lower scores are healthier, so a negative change reads as improvement.
//! Fewer than two history points is not an error: the caller simply has no
//! trend yet and gets the defined stable/0 result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{BodyArea, HealthSymptom};
use super::scoring::{RiskAnalysis, RiskLevel};

/// Total score change below which a series is considered flat.
const STABILITY_THRESHOLD: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
}

/// One historical overall score, keyed by assessment date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePoint {
    pub date: NaiveDate,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub trend: TrendDirection,
    /// Score points per elapsed day, always non-negative.
    pub change_rate: f32,
    pub risk_progression: Vec<RiskLevel>,
}

/// Classifies a score history as improving, declining, or stable.
pub fn trend(history: &[ScorePoint]) -> TrendSummary {
    let mut points = history.to_vec();
    points.sort_by_key(|point| point.date);

    let risk_progression = points
        .iter()
        .map(|point| RiskLevel::from_score(point.score))
        .collect();

    if points.len() < 2 {
        return TrendSummary {
            trend: TrendDirection::Stable,
            change_rate: 0.0,
            risk_progression,
        };
    }

    let first = &points[0];
    let last = &points[points.len() - 1];

    let total_change = last.score - first.score;
    let trend = if total_change.abs() < STABILITY_THRESHOLD {
        TrendDirection::Stable
    } else if total_change < 0.0 {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    };

    let elapsed_days = (last.date - first.date).num_days();
    let change_rate = if elapsed_days > 0 {
        total_change.abs() / elapsed_days as f32
    } else {
        0.0
    };

    TrendSummary {
        trend,
        change_rate,
        risk_progression,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementSummary {
    /// Rounded percentage of the baseline score; negative when improving.
    pub percentage: i32,
    pub trend: TrendDirection,
}

/// Percentage-of-baseline movement between exactly two scores, using the
/// same +/-5 stability threshold as the series classifier.
pub fn improvement(previous: f32, current: f32) -> ImprovementSummary {
    let percentage = if previous == 0.0 {
        0
    } else {
        (((current - previous) / previous) * 100.0).round() as i32
    };

    let trend = if percentage.abs() < STABILITY_THRESHOLD as i32 {
        TrendDirection::Stable
    } else if percentage < 0 {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    };

    ImprovementSummary { percentage, trend }
}

/// A stored analysis plus the symptoms it was computed from, as handed back
/// by whatever storage layer the caller owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    pub analysis: RiskAnalysis,
    pub symptoms: Vec<HealthSymptom>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevelChange {
    pub from: RiskLevel,
    pub to: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentComparison {
    /// Current minus previous overall score; negative means improvement.
    pub score_difference: f32,
    pub risk_level_change: RiskLevelChange,
    pub improved_areas: Vec<String>,
    pub worsened_areas: Vec<String>,
    pub new_symptoms: Vec<BodyArea>,
    pub resolved_symptoms: Vec<BodyArea>,
}

/// Compares two scored assessments factor-by-factor and symptom-by-symptom.
pub fn compare(previous: &AssessmentSnapshot, current: &AssessmentSnapshot) -> AssessmentComparison {
    let mut improved_areas = Vec::new();
    let mut worsened_areas = Vec::new();

    for factor in &previous.analysis.factors {
        match current
            .analysis
            .factors
            .iter()
            .find(|candidate| candidate.name == factor.name)
        {
            Some(counterpart) if counterpart.score < factor.score => {
                improved_areas.push(factor.name.clone());
            }
            Some(counterpart) if counterpart.score > factor.score => {
                worsened_areas.push(factor.name.clone());
            }
            Some(_) => {}
            None => improved_areas.push(factor.name.clone()),
        }
    }

    for factor in &current.analysis.factors {
        let is_new = !previous
            .analysis
            .factors
            .iter()
            .any(|candidate| candidate.name == factor.name);
        if is_new {
            worsened_areas.push(factor.name.clone());
        }
    }

    AssessmentComparison {
        score_difference: current.analysis.overall_score - previous.analysis.overall_score,
        risk_level_change: RiskLevelChange {
            from: previous.analysis.overall_level,
            to: current.analysis.overall_level,
        },
        improved_areas,
        worsened_areas,
        new_symptoms: symptom_area_delta(&current.symptoms, &previous.symptoms),
        resolved_symptoms: symptom_area_delta(&previous.symptoms, &current.symptoms),
    }
}

/// Distinct body areas present in `left` but absent from `right`,
/// preserving first-reported order.
fn symptom_area_delta(left: &[HealthSymptom], right: &[HealthSymptom]) -> Vec<BodyArea> {
    let mut delta = Vec::new();
    for symptom in left {
        let reported_before = right.iter().any(|other| other.area == symptom.area);
        if !reported_before && !delta.contains(&symptom.area) {
            delta.push(symptom.area);
        }
    }
    delta
}
