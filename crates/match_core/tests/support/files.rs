use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary data directory holding `drivers.txt` and `riders.txt`.
pub struct DataDir {
    pub dir: TempDir,
}

impl DataDir {
    /// Write both files; `None` leaves that file missing.
    pub fn with_files(drivers: Option<&str>, riders: Option<&str>) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        if let Some(contents) = drivers {
            fs::write(dir.path().join("drivers.txt"), contents).expect("write drivers");
        }
        if let Some(contents) = riders {
            fs::write(dir.path().join("riders.txt"), contents).expect("write riders");
        }
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

pub const MANHATTAN_DRIVERS: &str = "\
1 Alice 40.7128 -74.0060 4
2 Bob 40.7150 -74.0070 3
3 Charlie 40.7100 -74.0050 5
";

pub const MANHATTAN_RIDERS: &str = "\
1 John 40.7128 -74.0060 40.7160 -74.0100 1
2 Sarah 40.7150 -74.0070 40.7180 -74.0120 2
3 Mike 40.7100 -74.0050 40.7130 -74.0080 1
";
