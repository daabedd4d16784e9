//! Driver and rider record loading from whitespace-delimited text.
//!
//! One record per line:
//!
//! - drivers: `id name lat lon capacity`
//! - riders: `id name pickupLat pickupLon dropoffLat dropoffLon passengers`
//!
//! Fields are split on any whitespace, so names cannot contain spaces. Blank
//! lines are ignored. What happens at a malformed row is decided by
//! [`MalformedRowPolicy`]; the default stops loading and keeps what was read.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};
use thiserror::Error;

use crate::agents::{Driver, Rider};
use crate::spatial::Coordinate;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {}: {source}", path.display())]
    SourceNotFound { path: PathBuf, source: io::Error },
    #[error("failed reading {source_name} at line {line}: {source}")]
    Read {
        source_name: String,
        line: usize,
        source: io::Error,
    },
}

/// What to do when a row does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRowPolicy {
    /// Stop at the first malformed row and keep the records read so far.
    #[default]
    Truncate,
    /// Log the malformed row and continue with the next line.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub on_malformed: MalformedRowPolicy,
    /// Treat rows with out-of-range latitude/longitude as malformed.
    pub validate_coordinates: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum MalformedRow {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("coordinate {0} is out of range")]
    OutOfRange(Coordinate),
}

/// A record type that can be parsed from one whitespace-split row.
pub trait Record: Sized {
    const KIND: &'static str;
    const FIELD_NAMES: &'static [&'static str];

    fn from_fields(fields: &[&str]) -> Result<Self, MalformedRow>;

    /// Every coordinate carried by the record, for opt-in range validation.
    fn coordinates(&self) -> Vec<Coordinate>;
}

impl Record for Driver {
    const KIND: &'static str = "driver";
    const FIELD_NAMES: &'static [&'static str] = &["id", "name", "lat", "lon", "capacity"];

    fn from_fields(fields: &[&str]) -> Result<Self, MalformedRow> {
        let id = parse_field(fields[0], "id")?;
        let location = Coordinate::new(
            parse_coordinate(fields[2], "lat")?,
            parse_coordinate(fields[3], "lon")?,
        );
        let capacity = parse_field(fields[4], "capacity")?;
        Ok(Driver::new(id, fields[1], location, capacity))
    }

    fn coordinates(&self) -> Vec<Coordinate> {
        vec![self.location]
    }
}

impl Record for Rider {
    const KIND: &'static str = "rider";
    const FIELD_NAMES: &'static [&'static str] = &[
        "id",
        "name",
        "pickupLat",
        "pickupLon",
        "dropoffLat",
        "dropoffLon",
        "passengers",
    ];

    fn from_fields(fields: &[&str]) -> Result<Self, MalformedRow> {
        let id = parse_field(fields[0], "id")?;
        let pickup = Coordinate::new(
            parse_coordinate(fields[2], "pickupLat")?,
            parse_coordinate(fields[3], "pickupLon")?,
        );
        let dropoff = Coordinate::new(
            parse_coordinate(fields[4], "dropoffLat")?,
            parse_coordinate(fields[5], "dropoffLon")?,
        );
        let passengers = parse_field(fields[6], "passengers")?;
        Ok(Rider::new(id, fields[1], pickup, dropoff, passengers))
    }

    fn coordinates(&self) -> Vec<Coordinate> {
        vec![self.pickup, self.dropoff]
    }
}

fn parse_field<T: FromStr>(value: &str, field: &'static str) -> Result<T, MalformedRow> {
    value.parse().map_err(|_| MalformedRow::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn parse_coordinate(value: &str, field: &'static str) -> Result<f64, MalformedRow> {
    let parsed: f64 = parse_field(value, field)?;
    // `f64::from_str` accepts "inf" and "NaN"; coordinates must be finite.
    if !parsed.is_finite() {
        return Err(MalformedRow::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

/// Parse a single row into a record.
pub fn parse_row<T: Record>(line: &str, options: &LoadOptions) -> Result<T, MalformedRow> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != T::FIELD_NAMES.len() {
        return Err(MalformedRow::FieldCount {
            expected: T::FIELD_NAMES.len(),
            found: fields.len(),
        });
    }

    let record = T::from_fields(&fields)?;
    if options.validate_coordinates {
        if let Some(bad) = record.coordinates().into_iter().find(|c| !c.is_in_range()) {
            return Err(MalformedRow::OutOfRange(bad));
        }
    }
    Ok(record)
}

/// Parse records from any buffered reader.
///
/// `source_name` only labels log lines and errors.
pub fn parse_records<T: Record, R: BufRead>(
    reader: R,
    source_name: &str,
    options: &LoadOptions,
) -> Result<Vec<T>, LoadError> {
    let mut records = Vec::new();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let bytes = line.map_err(|source| LoadError::Read {
            source_name: source_name.to_string(),
            line: line_number,
            source,
        })?;
        let line = String::from_utf8_lossy(&bytes);
        if line.trim().is_empty() {
            continue;
        }

        match parse_row::<T>(&line, options) {
            Ok(record) => records.push(record),
            Err(reason) => match options.on_malformed {
                MalformedRowPolicy::Truncate => {
                    warn!(
                        "{source_name}:{line_number}: malformed {} row ({reason}); ignoring it and every row after it",
                        T::KIND
                    );
                    break;
                }
                MalformedRowPolicy::Skip => {
                    warn!(
                        "{source_name}:{line_number}: skipping malformed {} row ({reason})",
                        T::KIND
                    );
                }
            },
        }
    }

    info!("loaded {} {} record(s) from {source_name}", records.len(), T::KIND);
    Ok(records)
}

/// Load records from a file path.
pub fn load_records<T: Record>(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Vec<T>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(BufReader::new(file), &path.display().to_string(), options)
}

pub fn load_drivers(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Vec<Driver>, LoadError> {
    load_records(path, options)
}

pub fn load_riders(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Vec<Rider>, LoadError> {
    load_records(path, options)
}

pub fn parse_drivers<R: BufRead>(
    reader: R,
    source_name: &str,
    options: &LoadOptions,
) -> Result<Vec<Driver>, LoadError> {
    parse_records(reader, source_name, options)
}

pub fn parse_riders<R: BufRead>(
    reader: R,
    source_name: &str,
    options: &LoadOptions,
) -> Result<Vec<Rider>, LoadError> {
    parse_records(reader, source_name, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRIVERS: &str = "1 Alice 40.7128 -74.0060 4\n\n2 Bob 40.7150 -74.0070 3\n";

    #[test]
    fn parses_driver_rows_and_ignores_blank_lines() {
        let drivers = parse_drivers(DRIVERS.as_bytes(), "drivers", &LoadOptions::default())
            .expect("drivers should parse");

        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0].name, "Alice");
        assert_eq!(drivers[0].capacity, 4);
        assert_eq!(drivers[0].current_load, 0);
        assert_eq!(drivers[1].location, Coordinate::new(40.7150, -74.0070));
    }

    #[test]
    fn parses_rider_rows() {
        let input = "3 John 40.7128 -74.0060 40.7160 -74.0100 1\r\n";
        let riders = parse_riders(input.as_bytes(), "riders", &LoadOptions::default())
            .expect("riders should parse");

        assert_eq!(riders.len(), 1);
        assert_eq!(riders[0].id, 3);
        assert_eq!(riders[0].dropoff, Coordinate::new(40.7160, -74.0100));
        assert_eq!(riders[0].passengers, 1);
    }

    #[test]
    fn name_with_space_is_malformed() {
        let err = parse_row::<Driver>("1 Mary Ann 40.0 -74.0 4", &LoadOptions::default())
            .expect_err("extra field should be rejected");
        assert_eq!(
            err,
            MalformedRow::FieldCount {
                expected: 5,
                found: 6
            }
        );
    }

    #[test]
    fn negative_capacity_is_malformed() {
        let err = parse_row::<Driver>("1 Alice 40.0 -74.0 -1", &LoadOptions::default())
            .expect_err("negative capacity should be rejected");
        assert!(matches!(
            err,
            MalformedRow::InvalidField {
                field: "capacity",
                ..
            }
        ));
    }

    #[test]
    fn non_finite_coordinates_are_malformed() {
        let err = parse_row::<Driver>("1 Alice NaN -74.0 4", &LoadOptions::default())
            .expect_err("NaN should be rejected");
        assert!(matches!(err, MalformedRow::InvalidField { field: "lat", .. }));
    }

    #[test]
    fn truncate_policy_stops_at_first_bad_row() {
        let input = "1 Alice 0 0 4\n2 Bob zero 0 4\n3 Carol 1 1 4\n";
        let drivers = parse_drivers(input.as_bytes(), "drivers", &LoadOptions::default())
            .expect("truncation is not an error");

        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].name, "Alice");
    }

    #[test]
    fn skip_policy_keeps_later_rows() {
        let input = "1 Alice 0 0 4\n2 Bob zero 0 4\n3 Carol 1 1 4\n";
        let options = LoadOptions {
            on_malformed: MalformedRowPolicy::Skip,
            ..LoadOptions::default()
        };
        let drivers = parse_drivers(input.as_bytes(), "drivers", &options)
            .expect("skipping is not an error");

        let names: Vec<_> = drivers.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn out_of_range_rows_pass_unless_validation_is_enabled() {
        let row = "1 Alice 95.0 -74.0 4";
        assert!(parse_row::<Driver>(row, &LoadOptions::default()).is_ok());

        let strict = LoadOptions {
            validate_coordinates: true,
            ..LoadOptions::default()
        };
        let err = parse_row::<Driver>(row, &strict).expect_err("latitude 95 is out of range");
        assert_eq!(err, MalformedRow::OutOfRange(Coordinate::new(95.0, -74.0)));
    }

    #[test]
    fn missing_file_is_source_not_found() {
        let err = load_drivers("definitely/not/here/drivers.txt", &LoadOptions::default())
            .expect_err("missing file should fail");
        assert!(matches!(err, LoadError::SourceNotFound { .. }));
        assert!(err.to_string().starts_with("could not open definitely/not/here/drivers.txt"));
    }
}
