use crate::spatial::Coordinate;

/// A ride provider with a seat capacity and the load assigned so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub location: Coordinate,
    pub capacity: u32,
    /// Passengers committed during the current matching pass.
    pub current_load: u32,
}

impl Driver {
    pub fn new(id: i64, name: impl Into<String>, location: Coordinate, capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            capacity,
            current_load: 0,
        }
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.current_load)
    }

    /// Whether `passengers` more seats fit without exceeding capacity.
    pub fn can_carry(&self, passengers: u32) -> bool {
        self.current_load
            .checked_add(passengers)
            .is_some_and(|load| load <= self.capacity)
    }
}

/// A ride request. The dropoff is carried along but not used for matching.
#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    pub id: i64,
    pub name: String,
    pub pickup: Coordinate,
    pub dropoff: Coordinate,
    pub passengers: u32,
}

impl Rider {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        pickup: Coordinate,
        dropoff: Coordinate,
        passengers: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            pickup,
            dropoff,
            passengers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_carry_respects_remaining_capacity() {
        let mut driver = Driver::new(1, "Alice", Coordinate::default(), 4);
        assert!(driver.can_carry(4));
        driver.current_load = 3;
        assert_eq!(driver.remaining_capacity(), 1);
        assert!(driver.can_carry(1));
        assert!(!driver.can_carry(2));
    }

    #[test]
    fn zero_capacity_driver_only_fits_empty_requests() {
        let driver = Driver::new(2, "Bob", Coordinate::default(), 0);
        assert!(driver.can_carry(0));
        assert!(!driver.can_carry(1));
    }

    #[test]
    fn can_carry_does_not_overflow() {
        let mut driver = Driver::new(3, "Charlie", Coordinate::default(), u32::MAX);
        driver.current_load = u32::MAX;
        assert!(!driver.can_carry(1));
    }
}
