use std::io::{self, Write};

use serde::Serialize;
use serde_json::value::RawValue;

use crate::matching::Match;

/// One element of the `matches` array.
#[derive(Debug, Serialize)]
pub struct JsonMatch<'a> {
    pub driver: &'a str,
    pub rider: &'a str,
    /// Pre-formatted so the number always carries two fractional digits.
    pub distance: Box<RawValue>,
}

/// `{"matches": [...], "total": N}`
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub matches: Vec<JsonMatch<'a>>,
    pub total: usize,
}

#[derive(Serialize)]
struct JsonError<'a> {
    error: &'a str,
}

impl<'a> JsonReport<'a> {
    pub fn from_matches(matches: &'a [Match]) -> serde_json::Result<Self> {
        let matches = matches
            .iter()
            .map(|m| -> serde_json::Result<JsonMatch<'a>> {
                Ok(JsonMatch {
                    driver: &m.driver_name,
                    rider: &m.rider_name,
                    distance: two_decimal_number(m.distance_miles)?,
                })
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        let total = matches.len();
        Ok(Self { matches, total })
    }
}

fn two_decimal_number(value: f64) -> serde_json::Result<Box<RawValue>> {
    RawValue::from_string(format!("{value:.2}"))
}

pub(crate) fn write_report<W: Write>(matches: &[Match], out: &mut W) -> io::Result<()> {
    let report = JsonReport::from_matches(matches)?;
    serde_json::to_writer(&mut *out, &report)?;
    Ok(())
}

pub(crate) fn write_error<W: Write>(message: &str, out: &mut W) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &JsonError { error: message })?;
    Ok(())
}
