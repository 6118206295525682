// lib/src/errors.rs

use thiserror::Error;

use models::ValidationError;

/// Engine-level failures. Everything here is fatal at startup: the clinic
/// directory refuses to load rather than serving entries it cannot trust.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse clinic reference data: {0}")]
    DirectoryParse(String),

    #[error("Clinic reference data is empty")]
    EmptyDirectory,

    #[error("Duplicate clinic id {0} in reference data")]
    DuplicateClinicId(i32),

    #[error("Clinic {id} ({name}): {source}")]
    InvalidClinic {
        id: i32,
        name: String,
        source: ValidationError,
    },

    #[error("Clinic {id} ({name}): negative price {price} for treatment {code:?}")]
    NegativePrice {
        id: i32,
        name: String,
        code: String,
        price: f64,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
