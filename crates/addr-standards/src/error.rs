#![deny(unsafe_code)]

use std::path::PathBuf;

use addr_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("missing reference file: {path}")]
    MissingFile { path: PathBuf },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("row {row} of {path} has an empty '{column}'")]
    MissingValue {
        path: PathBuf,
        row: usize,
        column: String,
    },

    #[error("invalid reference data: {0}")]
    Invalid(#[from] ModelError),
}

impl StandardsError {
    pub(crate) fn csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StandardsError>;
