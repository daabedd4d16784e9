pub mod algorithm;
pub mod nearest;
pub mod types;

pub use algorithm::MatchingAlgorithm;
pub use nearest::NearestFeasibleMatching;
pub use types::{Match, MatchCandidate};

use crate::agents::{Driver, Rider};

/// Match riders to drivers with the nearest-feasible greedy strategy.
///
/// Mutates each chosen driver's `current_load`. The returned matches follow
/// rider input order with unmatched riders omitted.
pub fn match_riders(drivers: &mut [Driver], riders: &[Rider]) -> Vec<Match> {
    NearestFeasibleMatching.find_batch_matches(drivers, riders)
}
