use std::io::{self, Write};

use crate::matching::Match;

const BANNER_WIDTH: usize = 42;

pub(crate) fn write_table<W: Write>(matches: &[Match], out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "========== RIDE MATCHING RESULTS ==========")?;
    writeln!(out, "Total Matches: {}", matches.len())?;

    if matches.is_empty() {
        writeln!(out, "No matches found.")?;
    } else {
        writeln!(out, "{:>12}{:>15}{:>15}", "Driver", "Rider", "Distance (mi)")?;
        writeln!(out, "{}", "-".repeat(BANNER_WIDTH))?;
        for m in matches {
            writeln!(
                out,
                "{:>12}{:>15}{:>15.2}",
                m.driver_name, m.rider_name, m.distance_miles
            )?;
        }
    }

    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))
}
