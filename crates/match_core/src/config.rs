use std::path::{Path, PathBuf};

use crate::records::LoadOptions;
use crate::render::OutputFormat;

/// Default directory holding `drivers.txt` and `riders.txt`.
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DRIVERS_FILE_NAME: &str = "drivers.txt";
pub const RIDERS_FILE_NAME: &str = "riders.txt";

/// Everything one matching run needs, resolved by the entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub drivers_path: PathBuf,
    pub riders_path: PathBuf,
    pub format: OutputFormat,
    pub load_options: LoadOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::from_data_dir(DEFAULT_DATA_DIR)
    }
}

impl RunConfig {
    /// Read `drivers.txt` and `riders.txt` from `dir`.
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            drivers_path: dir.join(DRIVERS_FILE_NAME),
            riders_path: dir.join(RIDERS_FILE_NAME),
            format: OutputFormat::default(),
            load_options: LoadOptions::default(),
        }
    }

    pub fn with_drivers_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.drivers_path = path.into();
        self
    }

    pub fn with_riders_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.riders_path = path.into();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_load_options(mut self, load_options: LoadOptions) -> Self {
        self.load_options = load_options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_from_data_dir() {
        let config = RunConfig::default();
        assert_eq!(config.drivers_path, Path::new("data").join("drivers.txt"));
        assert_eq!(config.riders_path, Path::new("data").join("riders.txt"));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn explicit_paths_override_data_dir() {
        let config = RunConfig::from_data_dir("/srv/rides")
            .with_riders_path("/tmp/riders.txt")
            .with_format(OutputFormat::HttpJson);
        assert_eq!(config.drivers_path, Path::new("/srv/rides/drivers.txt"));
        assert_eq!(config.riders_path, Path::new("/tmp/riders.txt"));
        assert_eq!(config.format, OutputFormat::HttpJson);
    }
}
