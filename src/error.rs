use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found: {path}. Run the `clean` stage first if this is the cleaned dataset.")]
    InputNotFound { path: PathBuf },

    #[error("Required column '{column}' missing from {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
