use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    /// A data row without both an identifier and an address field.
    #[error("malformed row {row}: expected at least 2 fields, found {field_count}")]
    MalformedRow { row: usize, field_count: usize },
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
