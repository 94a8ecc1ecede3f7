//! Configuration for a labelling run.

use std::path::{Path, PathBuf};

use crate::error::{KbError, Result};

/// Input file used when no path is given on the command line
pub const DEFAULT_INPUT_PATH: &str = "data.csv";

/// Output file written in the current working directory
pub const DEFAULT_OUTPUT_PATH: &str = "KB.csv";

/// Default number of rows per record batch
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Configuration for a labelling run
#[derive(Debug, Clone)]
pub struct KbConfig {
    /// Delimited input table with the 19 indicator columns
    pub input_path: PathBuf,
    /// Destination of the labelled table (`.csv` or `.parquet`)
    pub output_path: PathBuf,
    /// Field delimiter for input and CSV output
    pub delimiter: u8,
    /// Rows per record batch
    pub batch_size: usize,
    /// Compare header names, not just the column count
    pub validate_header_names: bool,
    /// Classify the rows of each batch on the rayon pool
    pub parallel: bool,
    /// Show a progress spinner while batches are processed
    pub show_progress: bool,
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delimiter: b',',
            batch_size: DEFAULT_BATCH_SIZE,
            validate_header_names: true,
            parallel: true,
            show_progress: false,
        }
    }
}

impl KbConfig {
    #[must_use]
    pub fn with_input_path(mut self, path: impl AsRef<Path>) -> Self {
        self.input_path = path.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub const fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    #[must_use]
    pub const fn with_header_name_validation(mut self, enabled: bool) -> Self {
        self.validate_header_names = enabled;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check the configuration before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(KbError::Config("batch size must be at least 1".to_string()));
        }
        if matches!(self.delimiter, b'\n' | b'\r' | b'"') {
            return Err(KbError::Config(format!(
                "delimiter {:?} is not usable",
                char::from(self.delimiter)
            )));
        }
        if self.input_path == self.output_path {
            return Err(KbError::Config(format!(
                "output path {} would overwrite the input",
                self.output_path.display()
            )));
        }
        Ok(())
    }
}
