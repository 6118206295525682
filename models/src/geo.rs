// models/src/geo.rs

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// A point on the globe, in degrees.
///
/// Out-of-range values are representable; distance math over them is still
/// defined, just meaningless. Callers that accept coordinates from the
/// outside validate first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GeoCoordinate;
    use crate::errors::ValidationError;

    #[test]
    fn accepts_coordinates_within_range() {
        assert!(GeoCoordinate::new(53.3498, -6.2603).validate().is_ok());
        assert!(GeoCoordinate::new(-90.0, 180.0).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let coordinate = GeoCoordinate::new(91.0, 0.0);
        assert_eq!(
            coordinate.validate(),
            Err(ValidationError::LatitudeOutOfRange(91.0))
        );
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let coordinate = GeoCoordinate::new(0.0, -181.0);
        assert_eq!(
            coordinate.validate(),
            Err(ValidationError::LongitudeOutOfRange(-181.0))
        );
    }

    #[test]
    fn accepts_yaml_style_short_keys() {
        let coordinate: GeoCoordinate =
            serde_json::from_str(r#"{"lat": 53.3205, "lng": -6.3947}"#).unwrap();
        assert_eq!(coordinate.latitude, 53.3205);
        assert_eq!(coordinate.longitude, -6.3947);
    }
}
