//! Randomised sample data around lower Manhattan.
//!
//! Each call draws a subset of fixed driver and rider pools, shuffles it and
//! renumbers ids from 1. Output files use the same row format the record
//! loader reads.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::agents::{Driver, Rider};
use crate::config::{DRIVERS_FILE_NAME, RIDERS_FILE_NAME};
use crate::spatial::Coordinate;

/// (name, lat, lon, capacity)
const DRIVER_POOL: [(&str, f64, f64, u32); 12] = [
    ("Alice", 40.7128, -74.0060, 4),
    ("Bob", 40.7150, -74.0070, 3),
    ("Charlie", 40.7100, -74.0050, 5),
    ("Diana", 40.7200, -74.0100, 4),
    ("Evan", 40.7050, -74.0020, 3),
    ("Fiona", 40.7182, -74.0150, 4),
    ("George", 40.7035, -74.0115, 2),
    ("Hannah", 40.7270, -74.0005, 5),
    ("Ian", 40.6990, -74.0180, 4),
    ("Julia", 40.7095, -74.0130, 3),
    ("Kyle", 40.7168, -74.0010, 6),
    ("Lena", 40.7215, -74.0065, 4),
];

/// (name, pickup lat, pickup lon, dropoff lat, dropoff lon, passengers)
const RIDER_POOL: [(&str, f64, f64, f64, f64, u32); 14] = [
    ("John", 40.7128, -74.0060, 40.7160, -74.0100, 1),
    ("Sarah", 40.7150, -74.0070, 40.7180, -74.0120, 2),
    ("Mike", 40.7100, -74.0050, 40.7130, -74.0080, 1),
    ("Emma", 40.7200, -74.0100, 40.7210, -74.0090, 3),
    ("Lisa", 40.7050, -74.0020, 40.7070, -74.0040, 2),
    ("David", 40.7120, -74.0065, 40.7140, -74.0110, 1),
    ("Olivia", 40.7185, -74.0140, 40.7240, -74.0055, 2),
    ("Noah", 40.7062, -74.0085, 40.7115, -74.0150, 1),
    ("Ava", 40.7005, -74.0030, 40.7090, -74.0065, 3),
    ("Liam", 40.7250, -74.0025, 40.7190, -74.0125, 2),
    ("Mia", 40.7135, -74.0170, 40.7180, -74.0185, 1),
    ("Ethan", 40.6978, -74.0102, 40.7045, -74.0145, 2),
    ("Zoe", 40.7290, -74.0080, 40.7330, -74.0035, 1),
    ("Leo", 40.7030, -74.0008, 40.7075, -74.0095, 4),
];

pub const DRIVER_COUNT_RANGE: (usize, usize) = (6, 10);
pub const RIDER_COUNT_RANGE: (usize, usize) = (8, 14);

/// Pick between `min` and `max` pool entries in random order.
fn sample_pool<T: Copy, R: Rng>(pool: &[T], min: usize, max: usize, rng: &mut R) -> Vec<T> {
    let count = rng.gen_range(min..=max).min(pool.len());
    let mut copy = pool.to_vec();
    copy.shuffle(rng);
    copy.truncate(count);
    copy
}

pub fn sample_drivers<R: Rng>(rng: &mut R) -> Vec<Driver> {
    let (min, max) = DRIVER_COUNT_RANGE;
    sample_pool(&DRIVER_POOL, min, max, rng)
        .into_iter()
        .zip(1..)
        .map(|((name, lat, lon, capacity), id)| {
            Driver::new(id, name, Coordinate::new(lat, lon), capacity)
        })
        .collect()
}

pub fn sample_riders<R: Rng>(rng: &mut R) -> Vec<Rider> {
    let (min, max) = RIDER_COUNT_RANGE;
    sample_pool(&RIDER_POOL, min, max, rng)
        .into_iter()
        .zip(1..)
        .map(|((name, pickup_lat, pickup_lon, dropoff_lat, dropoff_lon, passengers), id)| {
            Rider::new(
                id,
                name,
                Coordinate::new(pickup_lat, pickup_lon),
                Coordinate::new(dropoff_lat, dropoff_lon),
                passengers,
            )
        })
        .collect()
}

pub fn write_drivers<W: Write>(drivers: &[Driver], out: &mut W) -> io::Result<()> {
    for d in drivers {
        writeln!(
            out,
            "{} {} {} {} {}",
            d.id, d.name, d.location.latitude, d.location.longitude, d.capacity
        )?;
    }
    Ok(())
}

pub fn write_riders<W: Write>(riders: &[Rider], out: &mut W) -> io::Result<()> {
    for r in riders {
        writeln!(
            out,
            "{} {} {} {} {} {} {}",
            r.id,
            r.name,
            r.pickup.latitude,
            r.pickup.longitude,
            r.dropoff.latitude,
            r.dropoff.longitude,
            r.passengers
        )?;
    }
    Ok(())
}

/// Counts written by [`write_sample_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSummary {
    pub drivers: usize,
    pub riders: usize,
}

/// Write `drivers.txt` and `riders.txt` into `dir`, creating it if needed.
pub fn write_sample_data(dir: impl AsRef<Path>, seed: u64) -> io::Result<SampleSummary> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let drivers = sample_drivers(&mut rng);
    let riders = sample_riders(&mut rng);

    let mut drivers_out = BufWriter::new(File::create(dir.join(DRIVERS_FILE_NAME))?);
    write_drivers(&drivers, &mut drivers_out)?;
    drivers_out.flush()?;

    let mut riders_out = BufWriter::new(File::create(dir.join(RIDERS_FILE_NAME))?);
    write_riders(&riders, &mut riders_out)?;
    riders_out.flush()?;

    info!(
        "wrote {} driver(s) and {} rider(s) to {} (seed {seed})",
        drivers.len(),
        riders.len(),
        dir.display()
    );
    Ok(SampleSummary {
        drivers: drivers.len(),
        riders: riders.len(),
    })
}
