use serde::{Deserialize, Serialize};

/// Profile slice supplied alongside an assessment; scoring context only,
/// never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileSnapshot {
    pub age: u16,
    pub height_cm: f32,
    pub weight_kg: f32,
    pub work_hours_per_day: f32,
}

/// Desk, chair, monitor, and support geometry captured during intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSetup {
    pub desk_height_cm: f32,
    pub chair_height_cm: f32,
    pub monitor_distance_cm: f32,
    /// Signed offset of the monitor's top edge relative to eye level.
    pub monitor_height_cm: f32,
    pub keyboard_placement: InputDevicePlacement,
    pub mouse_placement: InputDevicePlacement,
    pub foot_support: bool,
    pub lumbar_support: bool,
    pub armrest_support: bool,
    pub lighting: LightingQuality,
    pub noise: NoiseLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputDevicePlacement {
    Desktop,
    Tray,
    Adjustable,
}

/// Lighting quality ladder, best condition first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Ambient noise ladder, best condition first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseLevel {
    Quiet,
    Moderate,
    Loud,
    VeryLoud,
}

/// Body-position snapshot; angles are degrees, signed where deviation can
/// go either way from neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureData {
    pub neck_angle_deg: f32,
    pub shoulder_position: ShoulderPosition,
    pub back_curvature: BackCurvature,
    pub wrist_position: WristPosition,
    pub feet_position: FeetPosition,
    pub elbow_angle_deg: f32,
    pub hip_angle_deg: f32,
    pub knee_angle_deg: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoulderPosition {
    Relaxed,
    Elevated,
    Hunched,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackCurvature {
    Natural,
    Straight,
    Slouched,
    Arched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WristPosition {
    Neutral,
    Extended,
    Flexed,
    Deviated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeetPosition {
    FlatFloor,
    Footrest,
    Dangling,
    Crossed,
}

/// Break, stretch, and walking cadence plus repetitive-motion rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementPatterns {
    pub screen_breaks_per_hour: f32,
    pub stretching_sessions_per_day: f32,
    pub walking_breaks_per_hour: f32,
    pub posture_changes_per_hour: f32,
    pub repetitive_motions: RepetitiveMotions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepetitiveMotions {
    pub keystrokes_per_minute: f32,
    pub mouse_clicks_per_minute: f32,
    pub reaching_per_hour: f32,
}

/// Self-reported discomfort captured uniformly across assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSymptom {
    pub area: BodyArea,
    pub severity: SymptomSeverity,
    pub frequency: SymptomFrequency,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyArea {
    Neck,
    Shoulders,
    Back,
    Elbow,
    Wrist,
    Hip,
    Knee,
    Foot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomSeverity {
    None,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomFrequency {
    Never,
    Rarely,
    Sometimes,
    Often,
    Always,
}

/// Full working set for one scoring run, assembled by the caller from
/// whatever storage it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErgonomicAssessment {
    pub workspace: WorkspaceSetup,
    pub posture: PostureData,
    pub movement: MovementPatterns,
    pub symptoms: Vec<HealthSymptom>,
}
