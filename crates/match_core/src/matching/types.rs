/// A feasible driver for one rider, identified by its position in the driver slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCandidate {
    pub driver_index: usize,
    pub distance_miles: f64,
}

/// Represents a committed driver-rider pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub driver_id: i64,
    pub driver_name: String,
    pub rider_id: i64,
    pub rider_name: String,
    pub distance_miles: f64,
    pub passengers: u32,
}
