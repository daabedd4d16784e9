//! Test helpers for common test setup and utilities.
//!
//! Shared builders so tests and benches describe drivers and riders in one line.

use crate::agents::{Driver, Rider};
use crate::spatial::Coordinate;

/// Lower Manhattan, used as the default location in tests.
pub const TEST_LOCATION: Coordinate = Coordinate {
    latitude: 40.7128,
    longitude: -74.0060,
};

/// A driver at `(lat, lon)` with the given capacity and no load.
pub fn driver(id: i64, name: &str, lat: f64, lon: f64, capacity: u32) -> Driver {
    Driver::new(id, name, Coordinate::new(lat, lon), capacity)
}

/// A rider picked up and dropped off at `(lat, lon)`.
pub fn rider(id: i64, name: &str, lat: f64, lon: f64, passengers: u32) -> Rider {
    let location = Coordinate::new(lat, lon);
    Rider::new(id, name, location, location, passengers)
}

/// `count` drivers on a small grid around [`TEST_LOCATION`].
pub fn driver_grid(count: usize, capacity: u32) -> Vec<Driver> {
    (0..count)
        .map(|i| {
            let lat = TEST_LOCATION.latitude + (i % 10) as f64 * 0.001;
            let lon = TEST_LOCATION.longitude + (i / 10) as f64 * 0.001;
            driver(i as i64 + 1, &format!("D{}", i + 1), lat, lon, capacity)
        })
        .collect()
}

/// `count` single-passenger riders offset from [`TEST_LOCATION`].
pub fn rider_grid(count: usize) -> Vec<Rider> {
    (0..count)
        .map(|i| {
            let lat = TEST_LOCATION.latitude + (i % 7) as f64 * 0.0013;
            let lon = TEST_LOCATION.longitude + (i / 7) as f64 * 0.0011;
            rider(i as i64 + 1, &format!("R{}", i + 1), lat, lon, 1)
        })
        .collect()
}
