//! Shared CSV utilities for loading reference files.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Result, StandardsError};

/// Header-keyed rows of one reference file.
#[derive(Debug, Clone, Default)]
pub struct CsvRows {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl CsvRows {
    /// Fail when `column` is not one of the file's headers.
    pub fn require_column(&self, path: &Path, column: &str) -> Result<()> {
        if self.headers.iter().any(|header| header == column) {
            Ok(())
        } else {
            Err(StandardsError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            })
        }
    }
}

/// Read a CSV file into header-keyed row maps.
///
/// Handles BOM characters and trims whitespace from headers and values.
pub fn read_csv_rows(path: &Path) -> Result<CsvRows> {
    if !path.is_file() {
        return Err(StandardsError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|error| StandardsError::csv(path, &error))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| StandardsError::csv(path, &error))?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| StandardsError::csv(path, &error))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).cloned().unwrap_or_default();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(CsvRows { headers, rows })
}

/// Get a field value from a row, returning empty string if not present.
pub fn get_field<'a>(row: &'a BTreeMap<String, String>, key: &str) -> &'a str {
    row.get(key).map(String::as_str).unwrap_or("")
}
