// lib/src/matcher.rs

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use models::{ClinicMatch, ClinicSearchQuery};

use crate::directory::ClinicDirectory;
use crate::geo;

/// Filters and ranks the clinic directory for one search.
///
/// Filters: radius (against the 1-decimal rounded distance, which is also
/// the reported distance), medical-card acceptance, PRSI acceptance.
/// Ranking: emergency-suitable clinics first, then increasing distance;
/// the sort is stable so distance ties keep directory order.
///
/// `now` is supplied by the caller; the matcher never reads a clock, so
/// open-now behavior is fully testable. An empty result is a valid
/// outcome, not an error.
pub fn search(
    query: &ClinicSearchQuery,
    directory: &ClinicDirectory,
    now: NaiveDateTime,
) -> Vec<ClinicMatch> {
    let mut matches: Vec<ClinicMatch> = Vec::new();

    for clinic in directory.clinics() {
        let distance_km = geo::round_to_tenth(geo::distance_km(&query.origin, &clinic.coordinate));
        if distance_km > query.max_distance_km {
            continue;
        }
        if query.medical_card_only && !clinic.accepts_medical_card {
            continue;
        }
        if query.prsi_only && !clinic.accepts_prsi {
            continue;
        }

        let emergency_suitable = if query.urgency_tier.requires_same_day() {
            clinic.offers_same_day_emergency
        } else {
            true
        };

        matches.push(ClinicMatch {
            is_open_now: clinic.hours.is_open_at(now),
            emergency_suitable,
            distance_km,
            clinic: clinic.clone(),
        });
    }

    matches.sort_by(compare_matches);
    matches
}

/// Composite ranking key: `(!emergency_suitable, distance_km)` ascending.
fn compare_matches(a: &ClinicMatch, b: &ClinicMatch) -> Ordering {
    (!a.emergency_suitable)
        .cmp(&!b.emergency_suitable)
        .then_with(|| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
        })
}
