use crate::assessment::domain::MovementPatterns;

/// Scores break cadence and repetitive-motion load in [0, 100].
///
/// Frequency shortfalls use exclusive bands. Repetitive-motion penalties are
/// additive: a rate past the upper threshold trips both bands. That matches
/// the shipped calculator and is deliberately left as-is pending product
/// review, so do not collapse these into first-match bands.
pub(crate) fn movement_risk(movement: &MovementPatterns) -> f32 {
    let mut score: f32 = 0.0;

    score += if movement.screen_breaks_per_hour < 1.0 {
        20.0
    } else if movement.screen_breaks_per_hour < 2.0 {
        10.0
    } else {
        0.0
    };

    score += if movement.stretching_sessions_per_day < 2.0 {
        15.0
    } else if movement.stretching_sessions_per_day < 3.0 {
        8.0
    } else {
        0.0
    };

    score += if movement.walking_breaks_per_hour < 0.5 {
        18.0
    } else if movement.walking_breaks_per_hour < 1.0 {
        10.0
    } else {
        0.0
    };

    score += if movement.posture_changes_per_hour < 1.0 {
        12.0
    } else if movement.posture_changes_per_hour < 2.0 {
        6.0
    } else {
        0.0
    };

    let repetitive = &movement.repetitive_motions;
    if repetitive.keystrokes_per_minute > 300.0 {
        score += 10.0;
    }
    if repetitive.keystrokes_per_minute > 400.0 {
        score += 15.0;
    }
    if repetitive.mouse_clicks_per_minute > 100.0 {
        score += 8.0;
    }
    if repetitive.mouse_clicks_per_minute > 150.0 {
        score += 12.0;
    }
    if repetitive.reaching_per_hour > 20.0 {
        score += 10.0;
    }
    if repetitive.reaching_per_hour > 30.0 {
        score += 15.0;
    }

    score.clamp(0.0, 100.0)
}
