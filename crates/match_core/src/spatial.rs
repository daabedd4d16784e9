//! Spatial operations: coordinates and great-circle distance.
//!
//! This module provides:
//!
//! - **Coordinate**: latitude/longitude pair in degrees
//! - **Distance calculations**: Haversine distance in miles
//!
//! Coordinates are not range-checked on construction. Callers that want to
//! reject out-of-range input opt in through [`Coordinate::is_in_range`].

/// Earth radius used by the haversine formula, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when latitude is within [-90, 90] and longitude within [-180, 180].
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Great-circle distance between two coordinates in miles.
///
/// Symmetric, non-negative, and zero for identical coordinates.
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lon1) = (a.latitude.to_radians(), a.longitude.to_radians());
    let (lat2, lon2) = (b.latitude.to_radians(), b.longitude.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    // Rounding can push `h` just past 1 for near-antipodal points.
    let h = (sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon).clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero_miles_apart() {
        let point = Coordinate::new(40.7128, -74.0060);
        assert_eq!(distance_miles(point, point), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(40.7128, -74.0060);
        let b = Coordinate::new(40.7270, -74.0005);
        assert_eq!(distance_miles(a, b), distance_miles(b, a));
        assert!(distance_miles(a, b) > 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_69_miles() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        let miles = distance_miles(a, b);
        assert!((miles - 69.09).abs() < 0.01, "got {miles}");
    }

    #[test]
    fn near_antipodal_points_stay_finite() {
        let a = Coordinate::new(-44.9452, -89.8836);
        let b = Coordinate::new(44.9452, 90.1164);
        let miles = distance_miles(a, b);
        assert!(miles.is_finite(), "got {miles}");
        assert!((miles - std::f64::consts::PI * EARTH_RADIUS_MILES).abs() < 1.0, "got {miles}");
    }

    #[test]
    fn antipodal_sweep_never_yields_nan() {
        for step in 0..2_000 {
            let lat = -89.0 + step as f64 * 0.089;
            let lon = -179.0 + step as f64 * 0.179;
            let miles = distance_miles(Coordinate::new(lat, lon), Coordinate::new(-lat, lon + 180.0));
            assert!(miles.is_finite() && miles >= 0.0, "({lat}, {lon}) -> {miles}");
        }
    }

    #[test]
    fn out_of_range_coordinates_are_accepted_but_flagged() {
        let bogus = Coordinate::new(123.0, -200.0);
        assert!(!bogus.is_in_range());
        assert!(distance_miles(bogus, Coordinate::default()).is_finite());
        assert!(Coordinate::new(-90.0, 180.0).is_in_range());
    }
}
