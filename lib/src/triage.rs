// lib/src/triage.rs
// The emergency triage decision table, adapted from the Manchester Triage
// System for dental presentations.

use models::{TriageRequest, TriageResult, UrgencyTier};

const URGENT_SELF_CARE: [&str; 4] = [
    "Take over-the-counter pain relief if it is safe for you",
    "Avoid very hot or very cold food and drink",
    "Hold a cold compress against your cheek to ease swelling",
    "Do not place aspirin directly on the gums",
];

const SOON_SELF_CARE: [&str; 3] = [
    "Rinse gently with warm salt water",
    "Take over-the-counter pain relief as directed",
    "Avoid chewing on the affected side",
];

const ROUTINE_SELF_CARE: [&str; 2] = [
    "Maintain your usual brushing and flossing routine",
    "Monitor your symptoms and book sooner if they worsen",
];

/// Classifies patient-reported symptoms into an urgency tier.
///
/// Pure function over validated input; the rules form an ordered table and
/// the first match wins:
///
/// 1. any reported red flag (recognized or not) forces the emergency tier;
/// 2. pain >= 7 and worsening, pain >= 8, or pain >= 6 disrupting sleep is
///    urgent;
/// 3. pain >= 4 or visible damage warrants an appointment soon;
/// 4. everything else is routine.
///
/// `symptom_duration_hours` is recorded by the intake form but does not
/// influence the table.
pub fn classify(request: &TriageRequest) -> TriageResult {
    if !request.reported_red_flags.is_empty() {
        return result(
            UrgencyTier::Emergency,
            "Immediately",
            "Your symptoms indicate a potentially serious condition.",
            true,
            &[],
        );
    }

    let pain = request.pain_level;

    if (pain >= 7 && request.pain_worsening) || pain >= 8 || (pain >= 6 && request.sleep_disrupted)
    {
        return result(
            UrgencyTier::Urgent,
            "Within 24 hours",
            "High pain levels suggest urgent care needed.",
            false,
            &URGENT_SELF_CARE,
        );
    }

    if pain >= 4 || request.visible_damage {
        return result(
            UrgencyTier::Soon,
            "Within 2-3 days",
            "Symptoms need assessment but are not immediate emergencies.",
            false,
            &SOON_SELF_CARE,
        );
    }

    result(
        UrgencyTier::Routine,
        "Within 1-2 weeks",
        "Symptoms appear stable.",
        false,
        &ROUTINE_SELF_CARE,
    )
}

fn result(
    tier: UrgencyTier,
    timeframe: &str,
    reasoning: &str,
    redirect_to_emergency_care: bool,
    self_care_tips: &[&str],
) -> TriageResult {
    TriageResult {
        urgency_tier: tier,
        urgency_display: tier.display_name().to_string(),
        recommended_timeframe: timeframe.to_string(),
        reasoning: reasoning.to_string(),
        redirect_to_emergency_care,
        self_care_tips: self_care_tips.iter().map(|tip| tip.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::classify;
    use models::{TriageRequest, UrgencyTier};

    fn request(pain_level: u8) -> TriageRequest {
        TriageRequest {
            reported_red_flags: Vec::new(),
            pain_level,
            pain_worsening: false,
            sleep_disrupted: false,
            symptom_duration_hours: 24,
            visible_damage: false,
        }
    }

    #[test]
    fn any_red_flag_forces_emergency_regardless_of_pain() {
        let mut req = request(1);
        req.reported_red_flags = vec!["swelling_spreading".to_string()];
        let result = classify(&req);
        assert_eq!(result.urgency_tier, UrgencyTier::Emergency);
        assert_eq!(result.recommended_timeframe, "Immediately");
        assert!(result.redirect_to_emergency_care);
        assert!(result.self_care_tips.is_empty());
    }

    #[test]
    fn unrecognized_red_flag_codes_still_force_emergency() {
        let mut req = request(2);
        req.reported_red_flags = vec!["weird_new_code".to_string()];
        assert_eq!(classify(&req).urgency_tier, UrgencyTier::Emergency);
    }

    #[test]
    fn pain_nine_without_flags_is_urgent_within_24_hours() {
        let result = classify(&request(9));
        assert_eq!(result.urgency_tier, UrgencyTier::Urgent);
        assert_eq!(result.recommended_timeframe, "Within 24 hours");
        assert!(!result.redirect_to_emergency_care);
        assert_eq!(result.self_care_tips.len(), 4);
    }

    #[test]
    fn pain_eight_alone_is_urgent() {
        assert_eq!(classify(&request(8)).urgency_tier, UrgencyTier::Urgent);
    }

    #[test]
    fn pain_seven_without_worsening_is_only_soon() {
        let result = classify(&request(7));
        assert_eq!(result.urgency_tier, UrgencyTier::Soon);
        assert_eq!(result.recommended_timeframe, "Within 2-3 days");
        assert_eq!(result.self_care_tips.len(), 3);
    }

    #[test]
    fn pain_seven_and_worsening_is_urgent() {
        let mut req = request(7);
        req.pain_worsening = true;
        assert_eq!(classify(&req).urgency_tier, UrgencyTier::Urgent);
    }

    #[test]
    fn pain_six_with_disrupted_sleep_is_urgent() {
        let mut req = request(6);
        req.sleep_disrupted = true;
        assert_eq!(classify(&req).urgency_tier, UrgencyTier::Urgent);
    }

    #[test]
    fn pain_six_sleeping_fine_is_soon() {
        assert_eq!(classify(&request(6)).urgency_tier, UrgencyTier::Soon);
    }

    #[test]
    fn visible_damage_with_low_pain_is_soon() {
        let mut req = request(2);
        req.visible_damage = true;
        assert_eq!(classify(&req).urgency_tier, UrgencyTier::Soon);
    }

    #[test]
    fn low_pain_and_nothing_else_is_routine() {
        for pain in 1..=3 {
            let result = classify(&request(pain));
            assert_eq!(result.urgency_tier, UrgencyTier::Routine);
            assert_eq!(result.recommended_timeframe, "Within 1-2 weeks");
            assert_eq!(result.self_care_tips.len(), 2);
        }
    }

    #[test]
    fn display_label_follows_tier() {
        let mut req = request(1);
        req.reported_red_flags = vec!["facial_trauma".to_string()];
        assert_eq!(classify(&req).urgency_display, "Emergency - Immediate Care");
        assert_eq!(classify(&request(1)).urgency_display, "Routine");
    }
}
