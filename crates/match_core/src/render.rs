//! Match result rendering for terminals and HTTP/JSON callers.
//!
//! The caller picks an [`OutputFormat`]; nothing in here reads the
//! environment.

use std::io::{self, Write};

use crate::matching::Match;

#[path = "render/json.rs"]
mod json;
#[path = "render/text.rs"]
mod text;

pub use json::{JsonMatch, JsonReport};

/// Message written in place of results when input data could not be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Data files not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bordered table for a terminal.
    #[default]
    Text,
    /// Bare JSON object.
    Json,
    /// JSON object preceded by a `Content-Type` header and a blank line.
    HttpJson,
}

/// Write `matches` to `out` in the given format.
///
/// Rendering the same matches twice produces identical bytes.
pub fn render_matches<W: Write>(
    matches: &[Match],
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => text::write_table(matches, out),
        OutputFormat::Json => json::write_report(matches, out),
        OutputFormat::HttpJson => {
            write_http_header(out)?;
            json::write_report(matches, out)
        }
    }
}

/// Report that driver or rider data could not be loaded.
///
/// JSON formats write an error object to `out`; text goes to `err`.
pub fn render_load_failure<W: Write, E: Write>(
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(err, "Error: Could not load driver or rider data."),
        OutputFormat::Json => json::write_error(LOAD_FAILURE_MESSAGE, out),
        OutputFormat::HttpJson => {
            write_http_header(out)?;
            json::write_error(LOAD_FAILURE_MESSAGE, out)
        }
    }
}

fn write_http_header<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Content-Type: application/json\n\n")
}

/// Render into a `String`, mostly for tests and logging.
pub fn render_to_string(matches: &[Match], format: OutputFormat) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec<u8> cannot fail.
    let _ = render_matches(matches, format, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
