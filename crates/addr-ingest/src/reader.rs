//! CSV reading of raw address rows.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// One source row: raw string fields in column order.
pub type RawRow = Vec<String>;

/// Options for reading a raw address file.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Column delimiter byte.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Path of the input file configured as a directory plus a file name.
pub fn input_path(input_dir: &Path, file_name: &Path) -> PathBuf {
    input_dir.join(file_name)
}

/// Reject files that start with a UTF-16 byte-order mark.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Read every row of a CSV file, header row included.
///
/// Fields are returned verbatim; rows may have differing lengths. A UTF-8
/// BOM on the first field is dropped.
pub fn read_raw_rows(path: &Path, options: &IngestOptions) -> Result<Vec<RawRow>> {
    validate_encoding(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_path(path)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows: Vec<RawRow> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut row: RawRow = record.iter().map(str::to_string).collect();
        if rows.is_empty() {
            if let Some(first) = row.first_mut() {
                if let Some(stripped) = first.strip_prefix('\u{feff}') {
                    *first = stripped.to_string();
                }
            }
        }
        rows.push(row);
    }
    tracing::debug!(path = %path.display(), rows = rows.len(), "raw rows read");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_keeps_header_and_fields_verbatim() {
        let file = create_temp_csv("id,adresse\n1, 12 rue Ledru-Rollin \n".as_bytes());
        let rows = read_raw_rows(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["id", "adresse"]);
        assert_eq!(rows[1], vec!["1", " 12 rue Ledru-Rollin "]);
    }

    #[test]
    fn test_read_with_bom() {
        let file = create_temp_csv("\u{feff}id,adresse\n1,x\n".as_bytes());
        let rows = read_raw_rows(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(rows[0][0], "id");
    }

    #[test]
    fn test_read_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'i', 0]);
        let result = read_raw_rows(file.path(), &IngestOptions::default());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding { encoding: "UTF-16 LE", .. })
        ));
    }

    #[test]
    fn test_read_with_semicolon_delimiter() {
        let file = create_temp_csv("id;adresse\n46;51, allée de la pépinière\n".as_bytes());
        let options = IngestOptions::default().with_delimiter(b';');
        let rows = read_raw_rows(file.path(), &options).unwrap();

        assert_eq!(rows[1], vec!["46", "51, allée de la pépinière"]);
    }
}
