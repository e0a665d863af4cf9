use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{debug, info};

use addr_model::{CorrectionEntry, ReferenceData};
use addr_normalization::text::{fold_case, strip_accents};

use crate::csv_utils::{get_field, read_csv_rows};
use crate::error::{Result, StandardsError};
use crate::paths::{city_names_path, default_reference_root, street_types_path, zip_codes_path};

const ZIP_CODE_COLUMN: &str = "zip_code";
const CITY_NAME_COLUMN: &str = "city_name";
const CANONICAL_COLUMN: &str = "canonical_form";
const VARIANT_COLUMN: &str = "variant";

pub fn load_default_reference_data() -> Result<ReferenceData> {
    load_reference_data(&default_reference_root())
}

/// Load zip codes, city names and street-type tables from `root`.
pub fn load_reference_data(root: &Path) -> Result<ReferenceData> {
    let zip_codes = load_zip_codes(&zip_codes_path(root))?;
    let city_names = load_city_names(&city_names_path(root))?;
    let street_types = load_street_types(&street_types_path(root))?;
    let reference = ReferenceData::new(zip_codes, city_names, street_types)?;
    info!(
        reference_dir = %root.display(),
        zip_codes = reference.zip_codes().len(),
        city_names = reference.city_names().len(),
        street_types = reference.corrections().entries().len(),
        variants = reference.corrections().variant_count(),
        "reference data loaded"
    );
    Ok(reference)
}

pub fn load_zip_codes(path: &Path) -> Result<Vec<String>> {
    load_single_column(path, ZIP_CODE_COLUMN)
}

/// Load city names folded the way addresses are before city removal
/// (lowercase, table accents stripped), so `Asnières-sur-Seine` still matches.
pub fn load_city_names(path: &Path) -> Result<Vec<String>> {
    let names = load_single_column(path, CITY_NAME_COLUMN)?;
    Ok(names
        .into_iter()
        .map(|name| {
            let folded = strip_accents(&fold_case(&name));
            if folded != name {
                debug!(city_name = %name, folded = %folded, "city name folded");
            }
            folded
        })
        .collect())
}

/// Load street-type tables, one row per variant.
///
/// Rows sharing a canonical form are merged; canonical forms keep the order
/// in which they first appear.
pub fn load_street_types(path: &Path) -> Result<Vec<CorrectionEntry>> {
    let table = read_csv_rows(path)?;
    table.require_column(path, CANONICAL_COLUMN)?;
    table.require_column(path, VARIANT_COLUMN)?;

    let mut order: Vec<String> = Vec::new();
    let mut variants: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (idx, row) in table.rows.iter().enumerate() {
        let canonical = get_field(row, CANONICAL_COLUMN);
        let variant = get_field(row, VARIANT_COLUMN);
        if canonical.is_empty() && variant.is_empty() {
            continue;
        }
        if canonical.is_empty() {
            // +2: header is row 1
            return Err(StandardsError::MissingValue {
                path: path.to_path_buf(),
                row: idx + 2,
                column: CANONICAL_COLUMN.to_string(),
            });
        }
        let entry = variants.entry(canonical.to_string()).or_insert_with(|| {
            order.push(canonical.to_string());
            BTreeSet::new()
        });
        if !variant.is_empty() {
            entry.insert(variant.to_string());
        }
    }

    let entries: Vec<CorrectionEntry> = order
        .into_iter()
        .map(|canonical| {
            let set = variants.remove(&canonical).unwrap_or_default();
            CorrectionEntry {
                canonical_form: canonical,
                variants: set,
            }
        })
        .collect();
    debug!(path = %path.display(), entries = entries.len(), "street types loaded");
    Ok(entries)
}

fn load_single_column(path: &Path, column: &str) -> Result<Vec<String>> {
    let table = read_csv_rows(path)?;
    table.require_column(path, column)?;
    let values: Vec<String> = table
        .rows
        .iter()
        .map(|row| get_field(row, column))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
    debug!(path = %path.display(), count = values.len(), "reference list loaded");
    Ok(values)
}
