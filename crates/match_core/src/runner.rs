//! Batch runner: load both record files, match, render.
//!
//! Strictly sequential. Output streams are injected so the whole run can be
//! exercised against in-memory buffers.

use std::io::{self, Write};
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::config::RunConfig;
use crate::matching::{Match, MatchingAlgorithm, NearestFeasibleMatching};
use crate::records::{self, LoadError, LoadOptions, Record};
use crate::render::{render_load_failure, render_matches};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub drivers_loaded: usize,
    pub riders_loaded: usize,
    pub matches: Vec<Match>,
    pub exit_code: i32,
}

/// Run with the nearest-feasible matcher.
pub fn run<W: Write, E: Write>(
    config: &RunConfig,
    out: &mut W,
    err: &mut E,
) -> Result<RunOutcome, RunError> {
    run_with_algorithm(config, &NearestFeasibleMatching, out, err)
}

/// Run with any matching algorithm.
///
/// Exit code is [`EXIT_FAILURE`] when either collection is empty after
/// loading, [`EXIT_SUCCESS`] otherwise (including when nothing matched).
pub fn run_with_algorithm<W: Write, E: Write>(
    config: &RunConfig,
    algorithm: &dyn MatchingAlgorithm,
    out: &mut W,
    err: &mut E,
) -> Result<RunOutcome, RunError> {
    let mut drivers = load_or_empty(&config.drivers_path, &config.load_options, err)?;
    let riders = load_or_empty(&config.riders_path, &config.load_options, err)?;

    if drivers.is_empty() || riders.is_empty() {
        info!(
            "nothing to match: {} driver(s), {} rider(s)",
            drivers.len(),
            riders.len()
        );
        render_load_failure(config.format, out, err)?;
        out.flush()?;
        return Ok(RunOutcome {
            drivers_loaded: drivers.len(),
            riders_loaded: riders.len(),
            matches: Vec::new(),
            exit_code: EXIT_FAILURE,
        });
    }

    let matches = algorithm.find_batch_matches(&mut drivers, &riders);
    info!(
        "matched {} of {} rider(s) across {} driver(s)",
        matches.len(),
        riders.len(),
        drivers.len()
    );

    render_matches(&matches, config.format, out)?;
    out.flush()?;

    Ok(RunOutcome {
        drivers_loaded: drivers.len(),
        riders_loaded: riders.len(),
        matches,
        exit_code: EXIT_SUCCESS,
    })
}

/// Load records, reporting failures on `err` and falling back to an empty list.
fn load_or_empty<T: Record, E: Write>(
    path: &Path,
    options: &LoadOptions,
    err: &mut E,
) -> Result<Vec<T>, RunError> {
    match records::load_records(path, options) {
        Ok(records) => Ok(records),
        Err(error @ LoadError::SourceNotFound { .. }) => {
            debug!("{error}");
            writeln!(err, "Error: Could not open {}", path.display())?;
            Ok(Vec::new())
        }
        Err(error @ LoadError::Read { .. }) => {
            writeln!(err, "Error: {error}")?;
            Ok(Vec::new())
        }
    }
}
