// models/src/clinic.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::geo::GeoCoordinate;
use crate::hours::WeeklyHours;
use crate::triage::UrgencyTier;

/// One entry of the clinic reference table.
///
/// Loaded once at startup and read-only for the lifetime of the process;
/// there is no mutation path. `id` is unique and stable across releases of
/// the reference data. `pricing` maps treatment codes to euro amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clinic {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub eircode: String,
    pub phone: String,
    pub coordinate: GeoCoordinate,
    pub rating: f32,
    pub review_count: u32,
    pub accepts_medical_card: bool,
    pub accepting_new_medical_card_patients: bool,
    pub accepts_prsi: bool,
    pub offers_same_day_emergency: bool,
    pub typical_emergency_wait_hours: u32,
    pub hours: WeeklyHours,
    pub pricing: BTreeMap<String, f64>,
}

/// A fully-resolved clinic search. The HTTP boundary fills in defaults for
/// omitted origin/radius/urgency before building one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicSearchQuery {
    pub origin: GeoCoordinate,
    pub urgency_tier: UrgencyTier,
    pub medical_card_only: bool,
    pub prsi_only: bool,
    pub max_distance_km: f64,
}

impl ClinicSearchQuery {
    pub fn validate(&self) -> ValidationResult<()> {
        self.origin.validate()?;
        if !(self.max_distance_km > 0.0) {
            return Err(ValidationError::NonPositiveSearchRadius(
                self.max_distance_km,
            ));
        }
        Ok(())
    }
}

/// One ranked search result. Derived per query and never cached across
/// requests: `is_open_now` depends on the caller-supplied clock.
#[derive(Debug, Clone, Serialize)]
pub struct ClinicMatch {
    pub clinic: Clinic,
    /// Great-circle distance from the search origin, rounded to one decimal.
    pub distance_km: f64,
    pub is_open_now: bool,
    pub emergency_suitable: bool,
}
