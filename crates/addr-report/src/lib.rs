//! Output generation for normalized addresses.
//!
//! - **CSV**: one row per record, columns `id`, `address`, `comp_1` .. `comp_8`
//! - **JSON**: pretty-printed array of records

mod common;
mod csv_output;
mod error;
mod json_output;

pub use common::{OutputFormat, output_headers, record_row, write_records};
pub use csv_output::write_csv;
pub use error::{ReportError, Result};
pub use json_output::write_json;
