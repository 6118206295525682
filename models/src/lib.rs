// models/src/lib.rs
// Shared domain types for the SmileAgent booking backend. Pure data: no
// I/O, no clocks, no HTTP concerns.

pub mod clinic;
pub mod eligibility;
pub mod errors;
pub mod geo;
pub mod hours;
pub mod treatment;
pub mod triage;

pub use crate::clinic::{Clinic, ClinicMatch, ClinicSearchQuery};
pub use crate::eligibility::{
    EligibilityDecision, EligibilityRequest, PayerRole, ReliefBreakdown, TaxStatus,
};
pub use crate::errors::{ValidationError, ValidationResult};
pub use crate::geo::GeoCoordinate;
pub use crate::hours::{OpenInterval, WeeklyHours};
pub use crate::treatment::{PricingType, Treatment};
pub use crate::triage::{RedFlag, TriageRequest, TriageResult, UrgencyTier};
