//! Canned recommendation templates backing the deterministic synthesizer.
//! Content is fixed so repeated synthesis over the same inputs stays
//! byte-for-byte identical.

use super::{
    CostTier, DifficultyTier, Recommendation, RecommendationCategory, RecommendationPriority,
    RecommendationType,
};

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|step| step.to_string()).collect()
}

pub(super) fn posture_reset() -> Recommendation {
    Recommendation {
        category: RecommendationCategory::Immediate,
        priority: RecommendationPriority::High,
        kind: RecommendationType::Posture,
        title: "Reset your sitting posture".to_string(),
        description: "Re-establish a neutral position: ears over shoulders, shoulders over hips, \
                      forearms level with the desk."
            .to_string(),
        action_steps: steps(&[
            "Raise the screen so the top third sits at eye level",
            "Pull hips to the back of the chair and let the backrest take your weight",
            "Drop shoulders and tuck the chin to lengthen the neck",
            "Set a recurring posture check every 30 minutes",
        ]),
        expected_benefit: "Reduced neck and upper-back strain within the first week".to_string(),
        timeframe: "Immediate".to_string(),
        cost: CostTier::Free,
        difficulty: DifficultyTier::Easy,
    }
}

pub(super) fn movement_breaks() -> Recommendation {
    Recommendation {
        category: RecommendationCategory::Immediate,
        priority: RecommendationPriority::High,
        kind: RecommendationType::Movement,
        title: "Add scheduled movement breaks".to_string(),
        description: "Interrupt static sitting with short, frequent movement rather than rare \
                      long breaks."
            .to_string(),
        action_steps: steps(&[
            "Stand up and move for 2-3 minutes every hour",
            "Stretch the neck, shoulders, and wrists mid-morning and mid-afternoon",
            "Take at least one walk of 10 minutes or more during the workday",
        ]),
        expected_benefit: "Better circulation and less end-of-day stiffness".to_string(),
        timeframe: "Immediate".to_string(),
        cost: CostTier::Free,
        difficulty: DifficultyTier::Easy,
    }
}

pub(super) fn workstation_fit() -> Recommendation {
    Recommendation {
        category: RecommendationCategory::ShortTerm,
        priority: RecommendationPriority::High,
        kind: RecommendationType::Equipment,
        title: "Adjust the workstation to fit your body".to_string(),
        description: "Bring desk, chair, and monitor geometry back inside the recommended \
                      ranges before replacing any equipment."
            .to_string(),
        action_steps: steps(&[
            "Set chair height so feet rest flat and knees sit near 90 degrees",
            "Align desk height so elbows stay close to the body at roughly a right angle",
            "Place the monitor 50-70cm away, top edge at or slightly below eye level",
            "Move keyboard and mouse onto a tray or adjustable surface if available",
        ]),
        expected_benefit: "Neutral joint angles without conscious effort".to_string(),
        timeframe: "Within one week".to_string(),
        cost: CostTier::Low,
        difficulty: DifficultyTier::Moderate,
    }
}

pub(super) fn screen_break_rule() -> Recommendation {
    Recommendation {
        category: RecommendationCategory::Immediate,
        priority: RecommendationPriority::Medium,
        kind: RecommendationType::Behavior,
        title: "Follow the 20-20-20 rule".to_string(),
        description: "Your screen-break cadence is below the recommended minimum of two per \
                      hour."
            .to_string(),
        action_steps: steps(&[
            "Every 20 minutes, look at something 20 feet away for 20 seconds",
            "Use a break-reminder timer until the habit sticks",
            "Pair at least one break per hour with standing up",
        ]),
        expected_benefit: "Less eye fatigue and more frequent posture resets".to_string(),
        timeframe: "Immediate".to_string(),
        cost: CostTier::Free,
        difficulty: DifficultyTier::Easy,
    }
}

pub(super) fn lumbar_support() -> Recommendation {
    Recommendation {
        category: RecommendationCategory::ShortTerm,
        priority: RecommendationPriority::High,
        kind: RecommendationType::Equipment,
        title: "Add lumbar support to your chair".to_string(),
        description: "The lower back currently has no support, which drives slouching as the \
                      day wears on."
            .to_string(),
        action_steps: steps(&[
            "Fit a lumbar cushion or rolled towel at belt height",
            "Adjust the backrest so it meets the natural curve of the lower spine",
            "Recheck seat depth: two to three fingers should fit behind the knees",
        ]),
        expected_benefit: "Sustained natural spine curvature through long sessions".to_string(),
        timeframe: "Within one week".to_string(),
        cost: CostTier::Low,
        difficulty: DifficultyTier::Easy,
    }
}

pub(super) fn improve_lighting() -> Recommendation {
    Recommendation {
        category: RecommendationCategory::ShortTerm,
        priority: RecommendationPriority::Medium,
        kind: RecommendationType::Environment,
        title: "Improve workspace lighting".to_string(),
        description: "Dim or uneven lighting pushes the head forward and strains the eyes."
            .to_string(),
        action_steps: steps(&[
            "Add a desk lamp that lights documents without glaring on the screen",
            "Position the screen perpendicular to windows to avoid reflections",
            "Match screen brightness to the room instead of maximum output",
        ]),
        expected_benefit: "Less squinting and forward-head posture".to_string(),
        timeframe: "Within two weeks".to_string(),
        cost: CostTier::Low,
        difficulty: DifficultyTier::Easy,
    }
}
