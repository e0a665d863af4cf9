//! CSV output.

use std::io::Write;

use addr_model::AddressRecord;

use crate::common::{output_headers, record_row};
use crate::error::Result;

/// Write a header row then one row per record.
pub fn write_csv<W: Write>(writer: W, records: &[AddressRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(output_headers())?;
    for record in records {
        csv_writer.write_record(record_row(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}
