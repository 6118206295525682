// models/src/treatment.rs

use serde::{Deserialize, Serialize};

/// How a treatment's listed price is to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingType {
    Fixed,
    PerTooth,
}

/// One entry of the treatment reference table, including its Med 2
/// tax-relief classification. `code` matches the keys of `Clinic::pricing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub code: String,
    pub display_name: String,
    pub description: String,
    pub med2_eligible: bool,
    pub med2_category: Option<String>,
    pub med2_category_name: Option<String>,
    pub pricing_type: PricingType,
}
