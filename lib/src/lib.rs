// lib/src/lib.rs
// The SmileAgent engine crate: triage classification, geo distance, the
// clinic directory, the clinic matcher, and the Med 2 eligibility check.
// Everything here is pure or read-only over data loaded once at startup;
// the HTTP boundary lives in the `rest_api` crate.

pub mod directory;
pub mod eligibility;
pub mod errors;
pub mod geo;
pub mod matcher;
pub mod triage;

pub use crate::directory::ClinicDirectory;
pub use crate::eligibility::{check_eligibility, relief_breakdown, MED2_RELIEF_RATE};
pub use crate::errors::{EngineError, Result};
pub use crate::geo::{distance_km, EARTH_RADIUS_KM};
pub use crate::matcher::search;
pub use crate::triage::classify;
