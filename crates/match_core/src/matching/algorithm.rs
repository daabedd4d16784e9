use log::debug;

use crate::agents::{Driver, Rider};

use super::types::{Match, MatchCandidate};

/// Trait for matching algorithms that pair riders with drivers.
///
/// Implementations pick a driver for a single rider; the batch method commits
/// those picks against driver capacity one rider at a time.
///
/// # Examples
///
/// ```rust
/// use match_core::agents::{Driver, Rider};
/// use match_core::matching::{MatchingAlgorithm, NearestFeasibleMatching};
/// use match_core::spatial::Coordinate;
///
/// let mut drivers = vec![Driver::new(1, "Alice", Coordinate::new(40.71, -74.00), 4)];
/// let riders = vec![Rider::new(
///     1,
///     "John",
///     Coordinate::new(40.71, -74.00),
///     Coordinate::new(40.72, -74.01),
///     2,
/// )];
///
/// let matches = NearestFeasibleMatching.find_batch_matches(&mut drivers, &riders);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(drivers[0].current_load, 2);
/// ```
pub trait MatchingAlgorithm: Send + Sync {
    /// Find a driver for a single rider.
    ///
    /// # Arguments
    ///
    /// * `rider` - The rider requesting a match
    /// * `drivers` - All drivers in input order, with their current load
    ///
    /// # Returns
    ///
    /// Returns the chosen driver's index and pickup distance, or `None` if no
    /// driver can take the rider.
    fn find_match(&self, rider: &Rider, drivers: &[Driver]) -> Option<MatchCandidate>;

    /// Match every rider in order, committing load as each match is made.
    ///
    /// Riders without a feasible driver are skipped, as are candidates that
    /// point outside `drivers` or at a driver without room. A driver's load is
    /// updated before the next rider is considered, so earlier riders can use
    /// up seats later riders would have wanted.
    fn find_batch_matches(&self, drivers: &mut [Driver], riders: &[Rider]) -> Vec<Match> {
        let mut matches = Vec::with_capacity(riders.len());

        for rider in riders {
            let Some(candidate) = self.find_match(rider, drivers) else {
                debug!(
                    "no driver with {} free seat(s) for rider {} ({})",
                    rider.passengers, rider.id, rider.name
                );
                continue;
            };

            let Some(driver) = drivers
                .get_mut(candidate.driver_index)
                .filter(|driver| driver.can_carry(rider.passengers))
            else {
                debug!(
                    "ignoring infeasible driver index {} for rider {}",
                    candidate.driver_index, rider.id
                );
                continue;
            };

            driver.current_load += rider.passengers;
            debug!(
                "matched rider {} to driver {} at {:.2} mi (load {}/{})",
                rider.id, driver.id, candidate.distance_miles, driver.current_load, driver.capacity
            );

            matches.push(Match {
                driver_id: driver.id,
                driver_name: driver.name.clone(),
                rider_id: rider.id,
                rider_name: rider.name.clone(),
                distance_miles: candidate.distance_miles,
                passengers: rider.passengers,
            });
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{driver, rider};

    /// Always proposes the same driver index, ignoring capacity.
    struct FixedIndex(usize);

    impl MatchingAlgorithm for FixedIndex {
        fn find_match(&self, _rider: &Rider, _drivers: &[Driver]) -> Option<MatchCandidate> {
            Some(MatchCandidate {
                driver_index: self.0,
                distance_miles: 0.0,
            })
        }
    }

    #[test]
    fn out_of_bounds_candidate_is_skipped() {
        let mut drivers = vec![driver(1, "A", 0.0, 0.0, 4)];
        let riders = vec![rider(1, "R", 0.0, 0.0, 1)];

        let matches = FixedIndex(5).find_batch_matches(&mut drivers, &riders);

        assert!(matches.is_empty());
        assert_eq!(drivers[0].current_load, 0);
    }

    #[test]
    fn candidate_without_room_is_skipped() {
        let mut drivers = vec![driver(1, "A", 0.0, 0.0, 2)];
        let riders = vec![
            rider(1, "First", 0.0, 0.0, 2),
            rider(2, "Second", 0.0, 0.0, 1),
        ];

        let matches = FixedIndex(0).find_batch_matches(&mut drivers, &riders);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].rider_id, 1);
        assert_eq!(drivers[0].current_load, 2);
        assert!(drivers[0].current_load <= drivers[0].capacity);
    }
}
