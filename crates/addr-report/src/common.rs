//! Shared output helpers.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use addr_model::{AddressRecord, MAX_COMPONENTS, component_name};

use crate::csv_output::write_csv;
use crate::error::{ReportError, Result};
use crate::json_output::write_json;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column headers of the tabular output.
pub fn output_headers() -> Vec<String> {
    let mut headers = Vec::with_capacity(MAX_COMPONENTS + 2);
    headers.push("id".to_string());
    headers.push("address".to_string());
    headers.extend((1..=MAX_COMPONENTS).map(component_name));
    headers
}

/// Tabular row for a record; absent component slots are empty.
pub fn record_row(record: &AddressRecord) -> Vec<&str> {
    let mut row = Vec::with_capacity(MAX_COMPONENTS + 2);
    row.push(record.id.as_str());
    row.push(record.address.as_str());
    row.extend((1..=MAX_COMPONENTS).map(|slot| record.component(slot).unwrap_or("")));
    row
}

/// Write `records` to `path` in the given format, creating parent directories.
pub fn write_records(path: &Path, records: &[AddressRecord], format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Create {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);
    match format {
        OutputFormat::Csv => write_csv(writer, records)?,
        OutputFormat::Json => write_json(writer, records)?,
    }
    info!(
        path = %path.display(),
        format = %format,
        records = records.len(),
        "output written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use addr_model::Components;

    #[test]
    fn headers_cover_every_slot() {
        let headers = output_headers();
        assert_eq!(headers.len(), 10);
        assert_eq!(headers[0], "id");
        assert_eq!(headers[2], "comp_1");
        assert_eq!(headers[9], "comp_8");
    }

    #[test]
    fn record_row_pads_absent_slots() {
        let mut record = AddressRecord::new("3", "12 rue ledru-rollin");
        record.components = Components::from_tokens(["12", "RUE", "LEDRU-ROLLIN"]);
        let row = record_row(&record);
        assert_eq!(row.len(), 10);
        assert_eq!(&row[..5], &["3", "12 rue ledru-rollin", "12", "RUE", "LEDRU-ROLLIN"]);
        assert!(row[5..].iter().all(|value| value.is_empty()));
    }
}
