//! Error types for raw address ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading raw address rows.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File starts with a byte-order mark for an encoding we do not read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/addresses.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/addresses.csv");
    }

    #[test]
    fn test_open_maps_not_found() {
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(matches!(
            IngestError::open("a.csv", io),
            IngestError::FileNotFound { .. }
        ));
        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(
            IngestError::open("a.csv", io),
            IngestError::FileRead { .. }
        ));
    }
}
