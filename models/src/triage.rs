// models/src/triage.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// The triage classifier's output category, ordered from most to least
/// urgent. Wire form is the snake_case tier name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    Emergency,
    Urgent,
    Soon,
    Routine,
}

impl UrgencyTier {
    /// Patient-facing label shown by the frontend next to the tier colour.
    pub fn display_name(&self) -> &'static str {
        match self {
            UrgencyTier::Emergency => "Emergency - Immediate Care",
            UrgencyTier::Urgent => "Urgent",
            UrgencyTier::Soon => "Soon",
            UrgencyTier::Routine => "Routine",
        }
    }

    /// Whether this tier requires a same-day emergency slot from a clinic.
    pub fn requires_same_day(&self) -> bool {
        matches!(self, UrgencyTier::Emergency | UrgencyTier::Urgent)
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyTier::Emergency => write!(f, "emergency"),
            UrgencyTier::Urgent => write!(f, "urgent"),
            UrgencyTier::Soon => write!(f, "soon"),
            UrgencyTier::Routine => write!(f, "routine"),
        }
    }
}

/// The red-flag symptom codes the intake form knows about.
///
/// Classification is deliberately permissive: any non-empty set of reported
/// codes forces the emergency tier, recognized or not. This enum only backs
/// the boundary endpoint that publishes the known list to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedFlag {
    BreathingDifficulty,
    SwellingSpreading,
    FeverWithSwelling,
    UncontrolledBleeding,
    ToothKnockedOut,
    FacialTrauma,
}

impl RedFlag {
    pub const ALL: [RedFlag; 6] = [
        RedFlag::BreathingDifficulty,
        RedFlag::SwellingSpreading,
        RedFlag::FeverWithSwelling,
        RedFlag::UncontrolledBleeding,
        RedFlag::ToothKnockedOut,
        RedFlag::FacialTrauma,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            RedFlag::BreathingDifficulty => "breathing_difficulty",
            RedFlag::SwellingSpreading => "swelling_spreading",
            RedFlag::FeverWithSwelling => "fever_with_swelling",
            RedFlag::UncontrolledBleeding => "uncontrolled_bleeding",
            RedFlag::ToothKnockedOut => "tooth_knocked_out",
            RedFlag::FacialTrauma => "facial_trauma",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RedFlag::BreathingDifficulty => "Difficulty breathing or swallowing",
            RedFlag::SwellingSpreading => "Swelling spreading to the eye or neck",
            RedFlag::FeverWithSwelling => "Fever together with facial swelling",
            RedFlag::UncontrolledBleeding => "Bleeding that will not stop",
            RedFlag::ToothKnockedOut => "Adult tooth knocked out",
            RedFlag::FacialTrauma => "Trauma to the face or jaw",
        }
    }
}

/// Patient-reported symptoms as submitted by the intake form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageRequest {
    #[serde(default)]
    pub reported_red_flags: Vec<String>,
    pub pain_level: u8,
    #[serde(default)]
    pub pain_worsening: bool,
    #[serde(default)]
    pub sleep_disrupted: bool,
    #[serde(default = "default_symptom_duration_hours")]
    pub symptom_duration_hours: u32,
    #[serde(default)]
    pub visible_damage: bool,
}

fn default_symptom_duration_hours() -> u32 {
    24
}

impl TriageRequest {
    /// Boundary-side validation. The classifier assumes this has passed.
    pub fn validate(&self) -> ValidationResult<()> {
        if !(1..=10).contains(&self.pain_level) {
            return Err(ValidationError::PainLevelOutOfRange(self.pain_level));
        }
        Ok(())
    }
}

/// The classifier's verdict. Produced fresh per request and never persisted
/// as authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    pub urgency_tier: UrgencyTier,
    pub urgency_display: String,
    pub recommended_timeframe: String,
    pub reasoning: String,
    pub redirect_to_emergency_care: bool,
    pub self_care_tips: Vec<String>,
}
