use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("variant '{variant}' is claimed by both '{first}' and '{second}'")]
    DuplicateVariant {
        variant: String,
        first: String,
        second: String,
    },
    #[error("street type '{canonical}' is defined more than once")]
    DuplicateCanonical { canonical: String },
    #[error("correction entry has an empty canonical form")]
    EmptyCanonical,
}

pub type Result<T> = std::result::Result<T, ModelError>;
