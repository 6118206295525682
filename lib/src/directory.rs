// lib/src/directory.rs

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use models::{Clinic, Treatment};

use crate::errors::{EngineError, Result};

/// The compiled-in reference data for the demo deployment.
const DEFAULT_REFERENCE_DATA: &str = include_str!("../data/clinics.yaml");

#[derive(Debug, Deserialize)]
struct ReferenceData {
    clinics: Vec<Clinic>,
    #[serde(default)]
    treatments: Vec<Treatment>,
}

/// The static clinic reference table, plus the treatment catalogue that its
/// pricing keys refer to.
///
/// Loading validates every record and fails fast; a directory that loaded
/// is safe to share read-only (`Arc`) for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ClinicDirectory {
    clinics: Vec<Clinic>,
    treatments: Vec<Treatment>,
}

impl ClinicDirectory {
    /// Loads the compiled-in reference data.
    pub fn load_default() -> Result<Self> {
        Self::load_from_str(DEFAULT_REFERENCE_DATA)
    }

    /// Loads an operator-supplied reference data file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::load_from_str(&raw)
    }

    pub fn load_from_str(raw: &str) -> Result<Self> {
        let data: ReferenceData = serde_yaml2::from_str(raw)
            .map_err(|e| EngineError::DirectoryParse(e.to_string()))?;
        let directory = Self::from_parts(data.clinics, data.treatments)?;
        info!(
            clinics = directory.clinics.len(),
            treatments = directory.treatments.len(),
            "clinic directory loaded"
        );
        Ok(directory)
    }

    /// Builds a directory from already-deserialized records, running the
    /// same validation the loaders rely on.
    pub fn from_parts(clinics: Vec<Clinic>, treatments: Vec<Treatment>) -> Result<Self> {
        if clinics.is_empty() {
            return Err(EngineError::EmptyDirectory);
        }

        let mut seen_ids = HashSet::new();
        for clinic in &clinics {
            if !seen_ids.insert(clinic.id) {
                return Err(EngineError::DuplicateClinicId(clinic.id));
            }
            clinic
                .coordinate
                .validate()
                .map_err(|source| EngineError::InvalidClinic {
                    id: clinic.id,
                    name: clinic.name.clone(),
                    source,
                })?;
            for (code, price) in &clinic.pricing {
                if *price < 0.0 {
                    return Err(EngineError::NegativePrice {
                        id: clinic.id,
                        name: clinic.name.clone(),
                        code: code.clone(),
                        price: *price,
                    });
                }
            }
        }

        Ok(Self { clinics, treatments })
    }

    pub fn clinics(&self) -> &[Clinic] {
        &self.clinics
    }

    pub fn treatments(&self) -> &[Treatment] {
        &self.treatments
    }

    pub fn clinic_by_id(&self, id: i32) -> Option<&Clinic> {
        self.clinics.iter().find(|clinic| clinic.id == id)
    }

    pub fn len(&self) -> usize {
        self.clinics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clinics.is_empty()
    }
}
