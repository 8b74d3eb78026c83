use super::common::*;
use crate::assessment::domain::{
    BackCurvature, BodyArea, FeetPosition, ShoulderPosition, SymptomFrequency, SymptomSeverity,
    UserProfileSnapshot, WristPosition,
};
use crate::assessment::scoring::{
    movement_risk, posture_risk, select_priorities, symptom_risk, workspace_risk,
    RiskCategory, RiskFactor, RiskLevel, ScoringConfig, DISCOMFORT_FACTOR_NAME,
};

fn older_long_hours_profile() -> UserProfileSnapshot {
    UserProfileSnapshot {
        age: 55,
        work_hours_per_day: 9.0,
        ..profile()
    }
}

#[test]
fn risk_level_bands_are_half_open() {
    assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(24.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(25.0), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(49.0), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(50.0), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(74.0), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(75.0), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_score(100.0), RiskLevel::Critical);
}

#[test]
fn posture_score_responds_monotonically_to_worse_posture() {
    let profile = older_long_hours_profile();
    let strained = posture_risk(&poor_posture(), &profile);
    let neutral = posture_risk(&neutral_posture(), &profile);

    assert!(strained > neutral);
    assert_eq!(neutral, 0.0);
}

#[test]
fn posture_multipliers_amplify_the_raw_sum() {
    let young = UserProfileSnapshot {
        age: 30,
        work_hours_per_day: 5.0,
        ..profile()
    };
    let base = posture_risk(&poor_posture(), &young);
    assert!((base - 60.0).abs() < 0.001);

    let amplified = posture_risk(&poor_posture(), &older_long_hours_profile());
    assert!((amplified - 60.0 * 1.2 * 1.3).abs() < 0.01);
}

#[test]
fn posture_score_is_clamped_at_100() {
    let mut posture = poor_posture();
    posture.neck_angle_deg = -90.0;
    posture.shoulder_position = ShoulderPosition::Hunched;
    posture.back_curvature = BackCurvature::Slouched;
    posture.wrist_position = WristPosition::Deviated;
    posture.feet_position = FeetPosition::Dangling;
    posture.elbow_angle_deg = 180.0;
    posture.hip_angle_deg = 170.0;

    let score = posture_risk(&posture, &older_long_hours_profile());
    assert_eq!(score, 100.0);
}

#[test]
fn workspace_penalties_sum_without_multipliers() {
    let config = ScoringConfig::default();
    assert_eq!(workspace_risk(&tuned_workspace(), &profile(), &config), 0.0);

    // Missing foot (8) and lumbar (15) support, good lighting (3), moderate noise (3).
    let score = workspace_risk(&degraded_workspace(), &profile(), &config);
    assert_eq!(score, 29.0);
}

#[test]
fn monitor_distance_uses_the_wider_hard_fail_band() {
    let config = ScoringConfig::default();
    let mut workspace = tuned_workspace();

    workspace.monitor_distance_cm = 75.0;
    assert_eq!(workspace_risk(&workspace, &profile(), &config), 6.0);

    workspace.monitor_distance_cm = 90.0;
    assert_eq!(workspace_risk(&workspace, &profile(), &config), 12.0);

    workspace.monitor_distance_cm = 35.0;
    assert_eq!(workspace_risk(&workspace, &profile(), &config), 12.0);
}

#[test]
fn movement_shortfalls_use_exclusive_bands() {
    assert_eq!(movement_risk(&active_movement()), 0.0);
    // 20 (breaks) + 15 (stretching) + 10 (walking) + 6 (posture changes).
    assert_eq!(movement_risk(&sedentary_movement()), 51.0);
}

#[test]
fn repetitive_motion_bands_are_additive() {
    let mut movement = active_movement();
    movement.repetitive_motions.keystrokes_per_minute = 350.0;
    assert_eq!(movement_risk(&movement), 10.0);

    // Past 400 the 300-band still applies, so both penalties stack.
    movement.repetitive_motions.keystrokes_per_minute = 450.0;
    assert_eq!(movement_risk(&movement), 25.0);

    movement.repetitive_motions.mouse_clicks_per_minute = 160.0;
    assert_eq!(movement_risk(&movement), 45.0);
}

#[test]
fn empty_symptom_list_scores_zero() {
    assert_eq!(symptom_risk(&[]), 0.0);
}

#[test]
fn severe_constant_back_pain_outweighs_mild_rare_foot_pain() {
    let severe = symptom_risk(&[symptom(
        BodyArea::Back,
        SymptomSeverity::Severe,
        SymptomFrequency::Always,
    )]);
    let mild = symptom_risk(&[symptom(
        BodyArea::Foot,
        SymptomSeverity::Mild,
        SymptomFrequency::Rarely,
    )]);

    assert_eq!(severe, 48.0);
    assert_eq!(mild, 9.0);
    assert!(severe > mild);
}

#[test]
fn analysis_factors_are_sorted_descending_by_score() {
    let analysis = engine().score_at(&strained_assessment(), &profile(), analyzed_at());

    assert!(!analysis.factors.is_empty());
    for pair in analysis.factors.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn strained_assessment_lands_in_the_high_band_with_expected_factors() {
    let analysis = engine().score_at(&strained_assessment(), &profile(), analyzed_at());

    assert!(matches!(
        analysis.overall_level,
        RiskLevel::High | RiskLevel::Critical
    ));
    assert_eq!(analysis.overall_score, 55.0);

    let names: Vec<&str> = analysis
        .factors
        .iter()
        .map(|factor| factor.name.as_str())
        .collect();
    assert!(names.contains(&"Poor posture habits"));
    assert!(names.contains(&"Workspace setup issues"));
    assert!(names.contains(&DISCOMFORT_FACTOR_NAME));

    let discomfort = analysis
        .factors
        .iter()
        .find(|factor| factor.name == DISCOMFORT_FACTOR_NAME)
        .expect("discomfort factor present");
    assert_eq!(discomfort.category, RiskCategory::Posture);
}

#[test]
fn healthy_assessment_emits_only_the_time_factor() {
    // The 9h/day profile still crosses the overtime threshold.
    let analysis = engine().score_at(&healthy_assessment(), &profile(), analyzed_at());

    assert_eq!(analysis.overall_level, RiskLevel::Low);
    assert_eq!(analysis.factors.len(), 1);
    assert_eq!(analysis.factors[0].category, RiskCategory::Time);
    assert_eq!(analysis.factors[0].score, 15.0);
    assert_eq!(analysis.factors[0].severity, RiskLevel::Moderate);
}

#[test]
fn long_overtime_raises_the_time_factor_severity() {
    let exhausted = UserProfileSnapshot {
        work_hours_per_day: 11.0,
        ..profile()
    };
    let analysis = engine().score_at(&healthy_assessment(), &exhausted, analyzed_at());

    let time_factor = analysis
        .factors
        .iter()
        .find(|factor| factor.category == RiskCategory::Time)
        .expect("time factor present");
    assert_eq!(time_factor.score, 45.0);
    assert_eq!(time_factor.severity, RiskLevel::High);
}

#[test]
fn every_component_score_stays_inside_the_unit_range() {
    let config = ScoringConfig::default();
    let analysis = engine().score_at(&strained_assessment(), &older_long_hours_profile(), analyzed_at());

    assert!((0.0..=100.0).contains(&analysis.overall_score));
    for factor in &analysis.factors {
        assert!((0.0..=100.0).contains(&factor.score));
    }
    assert!((0.0..=100.0)
        .contains(&workspace_risk(&degraded_workspace(), &profile(), &config)));
    assert!((0.0..=100.0).contains(&movement_risk(&sedentary_movement())));
}

fn factor(category: RiskCategory, name: &str, severity: RiskLevel, score: f32) -> RiskFactor {
    RiskFactor {
        category,
        name: name.to_string(),
        severity,
        score,
        description: String::new(),
        impact: String::new(),
    }
}

#[test]
fn critical_discomfort_prepends_the_urgent_advisory() {
    let factors = vec![
        factor(RiskCategory::Posture, "Poor posture habits", RiskLevel::Critical, 90.0),
        factor(RiskCategory::Posture, DISCOMFORT_FACTOR_NAME, RiskLevel::Critical, 80.0),
        factor(RiskCategory::Movement, "Insufficient movement", RiskLevel::High, 60.0),
    ];

    let priorities = select_priorities(&factors);

    assert!(priorities[0].contains("pain immediately"));
    assert!(priorities.len() <= 5);
}

#[test]
fn priorities_deduplicate_categories_and_skip_lower_severities() {
    let factors = vec![
        factor(RiskCategory::Posture, "Poor posture habits", RiskLevel::High, 70.0),
        factor(RiskCategory::Posture, DISCOMFORT_FACTOR_NAME, RiskLevel::High, 65.0),
        factor(RiskCategory::Equipment, "Workspace setup issues", RiskLevel::High, 55.0),
        factor(RiskCategory::Movement, "Insufficient movement", RiskLevel::Moderate, 40.0),
    ];

    let priorities = select_priorities(&factors);

    // Two posture factors collapse to one advisory; the moderate movement
    // factor contributes nothing.
    assert_eq!(priorities.len(), 2);
    assert!(priorities.iter().all(|advisory| !advisory.contains("movement breaks")));
}

#[test]
fn scoring_is_pure_and_idempotent() {
    let engine = engine();
    let first = engine.score_at(&strained_assessment(), &profile(), analyzed_at());
    let second = engine.score_at(&strained_assessment(), &profile(), analyzed_at());

    assert_eq!(first, second);
}
