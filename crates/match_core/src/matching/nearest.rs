use crate::agents::{Driver, Rider};
use crate::spatial::distance_miles;

use super::algorithm::MatchingAlgorithm;
use super::types::MatchCandidate;

/// Nearest-feasible matching: closest driver with enough free seats.
///
/// # Algorithm Behavior
///
/// 1. Iterates through `drivers` in order
/// 2. Skips drivers whose `current_load + passengers` would exceed `capacity`
/// 3. Keeps the driver with the strictly smallest pickup distance, so the
///    first of several equidistant drivers wins
///
/// # Performance
///
/// Time complexity: O(n) per rider where n is the number of drivers, O(R·D)
/// for a batch. No backtracking once a match is committed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestFeasibleMatching;

impl MatchingAlgorithm for NearestFeasibleMatching {
    fn find_match(&self, rider: &Rider, drivers: &[Driver]) -> Option<MatchCandidate> {
        let mut best: Option<MatchCandidate> = None;

        for (driver_index, driver) in drivers.iter().enumerate() {
            if !driver.can_carry(rider.passengers) {
                continue;
            }

            let distance = distance_miles(driver.location, rider.pickup);
            let best_distance = best.map_or(f64::INFINITY, |current| current.distance_miles);
            // NaN never compares less, so it can't displace a real candidate.
            if distance < best_distance {
                best = Some(MatchCandidate {
                    driver_index,
                    distance_miles: distance,
                });
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Coordinate;

    fn rider_at(lat: f64, lon: f64, passengers: u32) -> Rider {
        Rider::new(
            1,
            "R",
            Coordinate::new(lat, lon),
            Coordinate::new(lat, lon),
            passengers,
        )
    }

    #[test]
    fn selects_closer_driver() {
        let drivers = vec![
            Driver::new(1, "Far", Coordinate::new(40.7270, -74.0005), 4),
            Driver::new(2, "Near", Coordinate::new(40.7130, -74.0061), 4),
        ];
        let rider = rider_at(40.7128, -74.0060, 1);

        let candidate = NearestFeasibleMatching
            .find_match(&rider, &drivers)
            .expect("a driver should match");
        assert_eq!(candidate.driver_index, 1);
    }

    #[test]
    fn first_driver_wins_a_tie() {
        let location = Coordinate::new(10.0, 10.0);
        let drivers = vec![
            Driver::new(7, "First", location, 4),
            Driver::new(8, "Second", location, 4),
        ];
        let rider = rider_at(10.5, 10.5, 1);

        let candidate = NearestFeasibleMatching
            .find_match(&rider, &drivers)
            .expect("a driver should match");
        assert_eq!(candidate.driver_index, 0);
    }

    #[test]
    fn skips_drivers_without_room() {
        let mut full = Driver::new(1, "Full", Coordinate::new(0.0, 0.0), 2);
        full.current_load = 2;
        let drivers = vec![full, Driver::new(2, "Open", Coordinate::new(1.0, 1.0), 2)];
        let rider = rider_at(0.0, 0.0, 1);

        let candidate = NearestFeasibleMatching
            .find_match(&rider, &drivers)
            .expect("open driver should match");
        assert_eq!(candidate.driver_index, 1);
    }

    #[test]
    fn returns_none_without_drivers() {
        let rider = rider_at(0.0, 0.0, 1);
        assert_eq!(NearestFeasibleMatching.find_match(&rider, &[]), None);
    }
}
