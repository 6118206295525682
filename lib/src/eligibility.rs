// lib/src/eligibility.rs

use models::{EligibilityDecision, EligibilityRequest, PayerRole, ReliefBreakdown, TaxStatus};

/// The Med 2 relief rate on qualifying dental expenses.
pub const MED2_RELIEF_RATE: f64 = 0.20;

/// Decides Med 2 tax-relief eligibility.
///
/// Eligible iff the payer is on PAYE or self-assessed Irish tax, regardless
/// of who they are paying for. Ineligible payers get a strategy tip (worded
/// per payer role) pointing the claim at a tax-paying party instead.
pub fn check_eligibility(request: &EligibilityRequest) -> EligibilityDecision {
    let eligible = matches!(
        request.payer_tax_status,
        TaxStatus::Paye | TaxStatus::SelfAssessed
    );

    if eligible {
        EligibilityDecision {
            eligible: true,
            message: "Eligible for 20% relief".to_string(),
            relief_rate: MED2_RELIEF_RATE,
            strategy_tip: None,
        }
    } else {
        EligibilityDecision {
            eligible: false,
            message: "Not eligible".to_string(),
            relief_rate: 0.0,
            strategy_tip: Some(strategy_tip_for(request.payer_role).to_string()),
        }
    }
}

fn strategy_tip_for(role: PayerRole) -> &'static str {
    match role {
        PayerRole::SelfPaying => {
            "A family member who pays Irish tax could pay for the treatment and claim the 20% relief instead."
        }
        PayerRole::PayingForOther => {
            "The relief can only be claimed by someone paying Irish tax; the patient or another tax-paying payer could claim it instead."
        }
        PayerRole::OtherPayingForMe => {
            "Ask the person paying to check their own tax status; the relief is claimed by whoever pays, so a tax-paying payer could claim it."
        }
    }
}

/// Med 2 relief arithmetic for a gross treatment cost, rounded to cents.
pub fn relief_breakdown(gross_cost: f64) -> ReliefBreakdown {
    let relief_amount = gross_cost * MED2_RELIEF_RATE;
    ReliefBreakdown {
        gross_cost: round_cents(gross_cost),
        relief_rate: MED2_RELIEF_RATE,
        relief_amount: round_cents(relief_amount),
        net_cost: round_cents(gross_cost - relief_amount),
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{check_eligibility, relief_breakdown, MED2_RELIEF_RATE};
    use models::{EligibilityRequest, PayerRole, TaxStatus};

    fn request(payer_role: PayerRole, payer_tax_status: TaxStatus) -> EligibilityRequest {
        EligibilityRequest {
            payer_role,
            payer_tax_status,
        }
    }

    #[test]
    fn paye_is_always_eligible_at_twenty_percent() {
        for role in [
            PayerRole::SelfPaying,
            PayerRole::PayingForOther,
            PayerRole::OtherPayingForMe,
        ] {
            let decision = check_eligibility(&request(role, TaxStatus::Paye));
            assert!(decision.eligible);
            assert_eq!(decision.relief_rate, MED2_RELIEF_RATE);
            assert_eq!(decision.message, "Eligible for 20% relief");
            assert!(decision.strategy_tip.is_none());
        }
    }

    #[test]
    fn self_assessed_is_eligible() {
        let decision = check_eligibility(&request(PayerRole::SelfPaying, TaxStatus::SelfAssessed));
        assert!(decision.eligible);
        assert_eq!(decision.relief_rate, MED2_RELIEF_RATE);
    }

    #[test]
    fn other_tax_status_is_never_eligible_and_always_gets_a_tip() {
        for role in [
            PayerRole::SelfPaying,
            PayerRole::PayingForOther,
            PayerRole::OtherPayingForMe,
        ] {
            let decision = check_eligibility(&request(role, TaxStatus::Other));
            assert!(!decision.eligible);
            assert_eq!(decision.relief_rate, 0.0);
            assert_eq!(decision.message, "Not eligible");
            assert!(decision.strategy_tip.is_some());
        }
    }

    #[test]
    fn tip_wording_varies_by_payer_role() {
        let self_tip = check_eligibility(&request(PayerRole::SelfPaying, TaxStatus::Other))
            .strategy_tip
            .unwrap();
        let other_tip = check_eligibility(&request(PayerRole::PayingForOther, TaxStatus::Other))
            .strategy_tip
            .unwrap();
        assert_ne!(self_tip, other_tip);
    }

    #[test]
    fn breakdown_applies_twenty_percent_relief() {
        let breakdown = relief_breakdown(650.0);
        assert_eq!(breakdown.gross_cost, 650.0);
        assert_eq!(breakdown.relief_rate, 0.20);
        assert_eq!(breakdown.relief_amount, 130.0);
        assert_eq!(breakdown.net_cost, 520.0);
    }

    #[test]
    fn breakdown_rounds_to_cents() {
        let breakdown = relief_breakdown(99.99);
        assert_eq!(breakdown.relief_amount, 20.0);
        assert_eq!(breakdown.net_cost, 79.99);
    }
}
