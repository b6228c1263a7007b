//! CSV export functionality.
//!
//! One row per record, list values flattened with `", "`. The header comes
//! from the layout; keys outside it (the `error` message) are not exported.

use std::io::Write;

use anyhow::{Context, Result};
use ::csv::Writer;

use super::types::Layout;
use super::Record;

/// Writes `records` as CSV.
///
/// With a dynamic layout and no records nothing is written, not even a
/// header.
///
/// # Returns
///
/// Returns the number of rows written, or an error if writing fails.
pub fn write_csv<W: Write>(writer: W, records: &[Record], layout: &Layout) -> Result<usize> {
    let header = layout.header(records);
    let mut writer = Writer::from_writer(writer);

    if header.is_empty() {
        writer.flush().context("Failed to flush CSV writer")?;
        return Ok(0);
    }

    writer
        .write_record(&header)
        .context("Failed to write CSV header")?;

    let mut count = 0;
    for record in records {
        let row: Vec<String> = header
            .iter()
            .map(|key| record.get(key).map(|v| v.render()).unwrap_or_default())
            .collect();
        writer
            .write_record(&row)
            .context("Failed to write CSV record")?;
        count += 1;
    }

    writer.flush().context("Failed to flush CSV writer")?;
    Ok(count)
}
