//! Greedy nearest-driver ride matching.
//!
//! Loads driver and rider records, assigns each rider (in input order) to
//! the closest driver that still has enough free seats, and renders the
//! result as a text table or JSON.
//!
//! # Quick Start
//!
//! ```no_run
//! use match_core::config::RunConfig;
//! use match_core::render::OutputFormat;
//! use match_core::runner::run;
//!
//! let config = RunConfig::from_data_dir("data").with_format(OutputFormat::Json);
//! let outcome = run(&config, &mut std::io::stdout(), &mut std::io::stderr()).unwrap();
//! std::process::exit(outcome.exit_code);
//! ```
//!
//! # Architecture
//!
//! - [`spatial`]: coordinates and haversine distance
//! - [`agents`]: drivers and riders
//! - [`records`]: whitespace-delimited record loading
//! - [`matching`]: the matching algorithm trait and the greedy matcher
//! - [`render`]: text and JSON output
//! - [`runner`]: load → match → render with exit codes
//! - [`sample`]: randomised sample data files

pub mod agents;
pub mod config;
pub mod matching;
pub mod records;
pub mod render;
pub mod runner;
pub mod sample;
pub mod spatial;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
