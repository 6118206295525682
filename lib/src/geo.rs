// lib/src/geo.rs

use models::GeoCoordinate;

/// Mean Earth radius used by the great-circle formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle (haversine) distance between two coordinates, in km.
///
/// Symmetric, non-negative, and zero for identical points. Out-of-range
/// coordinates still yield a mathematically valid result; callers that take
/// coordinates from the outside validate them first.
pub fn distance_km(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Rounds a distance to one decimal, the precision the matcher reports.
pub fn round_to_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::{distance_km, round_to_tenth};
    use models::GeoCoordinate;

    const DUBLIN_CENTRE: GeoCoordinate = GeoCoordinate {
        latitude: 53.3498,
        longitude: -6.2603,
    };
    const CLONDALKIN: GeoCoordinate = GeoCoordinate {
        latitude: 53.3205,
        longitude: -6.3947,
    };

    #[test]
    fn distance_to_self_is_zero() {
        assert!(distance_km(&DUBLIN_CENTRE, &DUBLIN_CENTRE).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = distance_km(&DUBLIN_CENTRE, &CLONDALKIN);
        let back = distance_km(&CLONDALKIN, &DUBLIN_CENTRE);
        assert_eq!(there, back);
    }

    #[test]
    fn city_centre_to_clondalkin_is_about_nine_and_a_half_km() {
        let distance = distance_km(&DUBLIN_CENTRE, &CLONDALKIN);
        assert!(distance > 9.0 && distance < 10.0, "got {distance}");
    }

    #[test]
    fn distance_is_never_negative() {
        let antipode = GeoCoordinate::new(-53.3498, 173.7397);
        assert!(distance_km(&DUBLIN_CENTRE, &antipode) >= 0.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to_tenth(9.4478), 9.4);
        assert_eq!(round_to_tenth(9.45), 9.5);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }
}
