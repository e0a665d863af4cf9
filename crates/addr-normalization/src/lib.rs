//! French postal address normalization.
//!
//! Turns (identifier, raw address) rows into [`AddressRecord`]s whose address
//! is cleaned and whose components are tokenized, street-type corrected and
//! uppercased.
//!
//! # Overview
//!
//! Stages run in this order, each over the full record set:
//!
//! 1. build records (header row skipped)
//! 2. remove zip codes
//! 3. replace `, . ? ! ( )` with spaces
//! 4. lowercase
//! 5. strip accents from the fixed vowel table
//! 6. remove city names
//! 7. trim and collapse spaces
//! 8. tokenize into at most [`MAX_COMPONENTS`] components
//! 9. rewrite street-type variants to their canonical form
//! 10. uppercase components
//!
//! # Example
//!
//! ```ignore
//! use addr_normalization::normalize;
//!
//! let rows = vec![
//!     vec!["id", "adresse"],
//!     vec!["1", "51 av de la pépinière 92500 suresnes"],
//! ];
//! let records = normalize(&rows, &reference)?;
//! assert_eq!(records[0].component(2), Some("AVENUE"));
//! ```
//!
//! [`AddressRecord`]: addr_model::AddressRecord
//! [`MAX_COMPONENTS`]: addr_model::MAX_COMPONENTS

mod error;
mod options;
mod pipeline;
mod types;

pub mod stages;
pub mod text;

pub use error::{NormalizationError, Result};
pub use options::{MalformedRowPolicy, NormalizationOptions};
pub use pipeline::{Normalizer, normalize};
pub use types::{NormalizationRun, NormalizationStats, SkippedRow, Stage};
