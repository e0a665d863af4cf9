//! JSON output.

use std::io::Write;

use addr_model::AddressRecord;

use crate::error::Result;

/// Write records as a pretty-printed JSON array followed by a newline.
pub fn write_json<W: Write>(mut writer: W, records: &[AddressRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
