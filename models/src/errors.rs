// models/src/errors.rs

pub use thiserror::Error;

/// Errors raised when validating caller-supplied or loaded domain data.
///
/// The engine itself assumes validated input; these are produced at the
/// HTTP boundary or while loading the clinic reference data.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("pain level must be between 1 and 10, got {0}")]
    PainLevelOutOfRange(u8),

    #[error("latitude must be between -90 and 90 degrees, got {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude must be between -180 and 180 degrees, got {0}")]
    LongitudeOutOfRange(f64),

    #[error("opening interval must look like \"HH:MM-HH:MM\", got {0:?}")]
    MalformedOpenInterval(String),

    #[error("opening time {open} is not before closing time {close}")]
    InvertedOpenInterval { open: String, close: String },

    #[error("maximum search distance must be positive, got {0}")]
    NonPositiveSearchRadius(f64),
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
