use chrono::{DateTime, TimeZone, Utc};

use crate::assessment::domain::{
    BackCurvature, BodyArea, ErgonomicAssessment, FeetPosition, HealthSymptom,
    InputDevicePlacement, LightingQuality, MovementPatterns, NoiseLevel, PostureData,
    RepetitiveMotions, ShoulderPosition, SymptomFrequency, SymptomSeverity, UserProfileSnapshot,
    WorkspaceSetup, WristPosition,
};
use crate::assessment::scoring::RiskEngine;

pub(super) fn engine() -> RiskEngine {
    RiskEngine::default()
}

pub(super) fn analyzed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn profile() -> UserProfileSnapshot {
    UserProfileSnapshot {
        age: 45,
        height_cm: 175.0,
        weight_kg: 78.0,
        work_hours_per_day: 9.0,
    }
}

pub(super) fn neutral_posture() -> PostureData {
    PostureData {
        neck_angle_deg: 0.0,
        shoulder_position: ShoulderPosition::Relaxed,
        back_curvature: BackCurvature::Natural,
        wrist_position: WristPosition::Neutral,
        feet_position: FeetPosition::FlatFloor,
        elbow_angle_deg: 100.0,
        hip_angle_deg: 100.0,
        knee_angle_deg: 90.0,
    }
}

pub(super) fn poor_posture() -> PostureData {
    PostureData {
        neck_angle_deg: 35.0,
        shoulder_position: ShoulderPosition::Hunched,
        back_curvature: BackCurvature::Slouched,
        ..neutral_posture()
    }
}

/// Workspace tuned to the 175cm test profile; scores zero penalties.
pub(super) fn tuned_workspace() -> WorkspaceSetup {
    WorkspaceSetup {
        desk_height_cm: 79.0,
        chair_height_cm: 46.0,
        monitor_distance_cm: 60.0,
        monitor_height_cm: 0.0,
        keyboard_placement: InputDevicePlacement::Tray,
        mouse_placement: InputDevicePlacement::Adjustable,
        foot_support: true,
        lumbar_support: true,
        armrest_support: true,
        lighting: LightingQuality::Excellent,
        noise: NoiseLevel::Quiet,
    }
}

pub(super) fn degraded_workspace() -> WorkspaceSetup {
    WorkspaceSetup {
        desk_height_cm: 74.0,
        chair_height_cm: 45.0,
        foot_support: false,
        lumbar_support: false,
        lighting: LightingQuality::Good,
        noise: NoiseLevel::Moderate,
        ..tuned_workspace()
    }
}

pub(super) fn active_movement() -> MovementPatterns {
    MovementPatterns {
        screen_breaks_per_hour: 3.0,
        stretching_sessions_per_day: 4.0,
        walking_breaks_per_hour: 1.5,
        posture_changes_per_hour: 2.5,
        repetitive_motions: RepetitiveMotions {
            keystrokes_per_minute: 200.0,
            mouse_clicks_per_minute: 50.0,
            reaching_per_hour: 10.0,
        },
    }
}

pub(super) fn sedentary_movement() -> MovementPatterns {
    MovementPatterns {
        screen_breaks_per_hour: 0.5,
        stretching_sessions_per_day: 1.0,
        walking_breaks_per_hour: 0.5,
        posture_changes_per_hour: 1.0,
        repetitive_motions: RepetitiveMotions {
            keystrokes_per_minute: 250.0,
            mouse_clicks_per_minute: 80.0,
            reaching_per_hour: 15.0,
        },
    }
}

pub(super) fn symptom(
    area: BodyArea,
    severity: SymptomSeverity,
    frequency: SymptomFrequency,
) -> HealthSymptom {
    HealthSymptom {
        area,
        severity,
        frequency,
        description: "reported during assessment".to_string(),
    }
}

pub(super) fn healthy_assessment() -> ErgonomicAssessment {
    ErgonomicAssessment {
        workspace: tuned_workspace(),
        posture: neutral_posture(),
        movement: active_movement(),
        symptoms: Vec::new(),
    }
}

pub(super) fn strained_assessment() -> ErgonomicAssessment {
    ErgonomicAssessment {
        workspace: degraded_workspace(),
        posture: poor_posture(),
        movement: sedentary_movement(),
        symptoms: vec![symptom(
            BodyArea::Back,
            SymptomSeverity::Severe,
            SymptomFrequency::Always,
        )],
    }
}
