pub mod cleaned_reader;
pub mod landing_reader;

pub use cleaned_reader::CleanedReader;
pub use landing_reader::LandingReader;

use std::fs::File;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// Open a CSV file, mapping a missing path to the fatal input error.
pub(crate) fn open_csv(path: &Path) -> Result<csv::Reader<File>> {
    if !path.exists() {
        return Err(PipelineError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(csv::Reader::from_path(path)?)
}

/// Every required column must appear in the header row.
pub(crate) fn ensure_columns(
    headers: &csv::StringRecord,
    required: &[&str],
    path: &Path,
) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(PipelineError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}
