use super::config::ScoringConfig;
use crate::assessment::domain::{
    InputDevicePlacement, LightingQuality, NoiseLevel, UserProfileSnapshot, WorkspaceSetup,
};

/// Scores workstation geometry and support features against the user's body
/// dimensions in [0, 100]. Straight sum of penalties, no multipliers.
pub(crate) fn workspace_risk(
    setup: &WorkspaceSetup,
    profile: &UserProfileSnapshot,
    config: &ScoringConfig,
) -> f32 {
    let mut score = 0.0;

    let ideal_desk_height = profile.height_cm * config.desk_height_ratio;
    let desk_deviation = (setup.desk_height_cm - ideal_desk_height).abs();
    score += if desk_deviation > 10.0 {
        15.0
    } else if desk_deviation > 5.0 {
        8.0
    } else {
        0.0
    };

    // Comfortable viewing range is 50-70cm with a hard-fail band past 40-80cm.
    let distance = setup.monitor_distance_cm;
    score += if !(40.0..=80.0).contains(&distance) {
        12.0
    } else if !(50.0..=70.0).contains(&distance) {
        6.0
    } else {
        0.0
    };

    let monitor_height = setup.monitor_height_cm;
    score += if monitor_height > 15.0 {
        10.0
    } else if monitor_height > 5.0 {
        5.0
    } else if monitor_height < -10.0 {
        8.0
    } else {
        0.0
    };

    if setup.keyboard_placement == InputDevicePlacement::Desktop {
        score += 8.0;
    }
    if setup.mouse_placement == InputDevicePlacement::Desktop {
        score += 6.0;
    }

    if !setup.foot_support {
        score += 8.0;
    }
    if !setup.lumbar_support {
        score += 15.0;
    }
    if !setup.armrest_support {
        score += 10.0;
    }

    score += lighting_penalty(setup.lighting);
    score += noise_penalty(setup.noise);

    score.clamp(0.0, 100.0)
}

const fn lighting_penalty(quality: LightingQuality) -> f32 {
    match quality {
        LightingQuality::Excellent => 0.0,
        LightingQuality::Good => 3.0,
        LightingQuality::Fair => 8.0,
        LightingQuality::Poor => 15.0,
    }
}

const fn noise_penalty(level: NoiseLevel) -> f32 {
    match level {
        NoiseLevel::Quiet => 0.0,
        NoiseLevel::Moderate => 3.0,
        NoiseLevel::Loud => 8.0,
        NoiseLevel::VeryLoud => 12.0,
    }
}
