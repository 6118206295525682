// models/src/eligibility.rs

use serde::{Deserialize, Serialize};

/// Who is paying for the treatment, relative to the patient filling in the
/// form. The eligibility rule itself does not depend on this; it only
/// shapes the advice given to ineligible payers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayerRole {
    #[serde(rename = "self")]
    SelfPaying,
    PayingForOther,
    OtherPayingForMe,
}

/// The payer's Irish tax status as self-reported on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxStatus {
    Paye,
    SelfAssessed,
    Other,
}

/// Input to the Med 2 tax-relief eligibility check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityRequest {
    pub payer_role: PayerRole,
    pub payer_tax_status: TaxStatus,
}

/// The eligibility verdict. Ineligibility is a normal outcome, not an
/// error; `strategy_tip` then suggests routing the claim through a
/// tax-paying party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub eligible: bool,
    pub message: String,
    pub relief_rate: f64,
    pub strategy_tip: Option<String>,
}

/// Med 2 relief arithmetic for a treatment cost, all amounts rounded to
/// cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliefBreakdown {
    pub gross_cost: f64,
    pub relief_rate: f64,
    pub relief_amount: f64,
    pub net_cost: f64,
}
