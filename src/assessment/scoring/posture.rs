use crate::assessment::domain::{
    BackCurvature, FeetPosition, PostureData, ShoulderPosition, UserProfileSnapshot, WristPosition,
};

/// Seated neutral for both the elbow and hip joints.
const NEUTRAL_JOINT_ANGLE_DEG: f32 = 100.0;

/// Scores body-position deviation from ergonomic neutral in [0, 100].
///
/// Angle bands are mutually exclusive (worst matching band wins); the raw sum
/// is then amplified by age and daily exposure before clamping.
pub(crate) fn posture_risk(posture: &PostureData, profile: &UserProfileSnapshot) -> f32 {
    let mut score = 0.0;

    let neck = posture.neck_angle_deg.abs();
    score += if neck > 45.0 {
        25.0
    } else if neck > 30.0 {
        15.0
    } else if neck > 15.0 {
        8.0
    } else {
        0.0
    };

    score += shoulder_penalty(posture.shoulder_position);
    score += back_penalty(posture.back_curvature);
    score += wrist_penalty(posture.wrist_position);
    score += feet_penalty(posture.feet_position);

    let elbow_deviation = (posture.elbow_angle_deg - NEUTRAL_JOINT_ANGLE_DEG).abs();
    score += if elbow_deviation > 30.0 {
        15.0
    } else if elbow_deviation > 15.0 {
        8.0
    } else {
        0.0
    };

    let hip_deviation = (posture.hip_angle_deg - NEUTRAL_JOINT_ANGLE_DEG).abs();
    score += if hip_deviation > 20.0 {
        10.0
    } else if hip_deviation > 10.0 {
        5.0
    } else {
        0.0
    };

    let age_multiplier = if profile.age > 50 {
        1.2
    } else if profile.age > 35 {
        1.1
    } else {
        1.0
    };

    let hours_multiplier = if profile.work_hours_per_day > 8.0 {
        1.3
    } else if profile.work_hours_per_day > 6.0 {
        1.1
    } else {
        1.0
    };

    (score * age_multiplier * hours_multiplier).clamp(0.0, 100.0)
}

const fn shoulder_penalty(position: ShoulderPosition) -> f32 {
    match position {
        ShoulderPosition::Relaxed => 0.0,
        ShoulderPosition::Elevated => 15.0,
        ShoulderPosition::Hunched => 20.0,
        ShoulderPosition::Forward => 18.0,
    }
}

const fn back_penalty(curvature: BackCurvature) -> f32 {
    match curvature {
        BackCurvature::Natural => 0.0,
        BackCurvature::Straight => 10.0,
        BackCurvature::Slouched => 25.0,
        BackCurvature::Arched => 15.0,
    }
}

const fn wrist_penalty(position: WristPosition) -> f32 {
    match position {
        WristPosition::Neutral => 0.0,
        WristPosition::Extended => 12.0,
        WristPosition::Flexed => 15.0,
        WristPosition::Deviated => 18.0,
    }
}

const fn feet_penalty(position: FeetPosition) -> f32 {
    match position {
        FeetPosition::FlatFloor => 0.0,
        FeetPosition::Footrest => 2.0,
        FeetPosition::Dangling => 15.0,
        FeetPosition::Crossed => 12.0,
    }
}
