//! Reference data for address normalization.
//!
//! Loads the zip-code list, the city-name list and the street-type
//! correction tables from a reference directory:
//!
//! - `zip_codes.csv` (`zip_code`)
//! - `city_names.csv` (`city_name`)
//! - `street_types.csv` (`canonical_form`, `variant`)
//!
//! # Example
//!
//! ```ignore
//! use addr_standards::load_default_reference_data;
//!
//! let reference = load_default_reference_data()?;
//! assert_eq!(reference.corrections().canonical_for("av"), Some("avenue"));
//! ```
#![deny(unsafe_code)]

pub mod csv_utils;
pub mod error;
pub mod loaders;
pub mod paths;

pub use crate::error::{Result, StandardsError};
pub use crate::loaders::{
    load_city_names, load_default_reference_data, load_reference_data, load_street_types,
    load_zip_codes,
};
pub use crate::paths::{REFERENCE_ENV_VAR, default_reference_root};
