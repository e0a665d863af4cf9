//! Raw address ingestion.
//!
//! Reads a tabular source into ordered rows of raw string fields. The first
//! row is the header; skipping it is left to the normalization pipeline.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use addr_ingest::{IngestOptions, input_path, read_raw_rows};
//!
//! let path = input_path(Path::new("data"), Path::new("addresses.csv"));
//! let rows = read_raw_rows(&path, &IngestOptions::default())?;
//! ```

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{IngestOptions, RawRow, input_path, read_raw_rows, validate_encoding};
