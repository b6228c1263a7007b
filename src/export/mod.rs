//! Export functionality for probe results.
//!
//! This module converts probe results into [`Record`]s and writes them in one
//! of three formats:
//! - text blocks on standard output
//! - CSV file (flattened, fixed or first-record columns)
//! - JSON file (array, lists kept as arrays)

mod csv;
mod json;
mod record;
mod text;
mod types;

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};

use crate::config::Destination;

pub use self::csv::write_csv;
pub use json::write_json;
pub use record::{FieldValue, Record, ToRecord};
pub use text::write_text;
pub use types::{Column, Columns, Layout, ERROR_KEY, ERROR_LABEL};

/// Writes `results` to `destination` using `layout`.
///
/// # Returns
///
/// Returns the number of records exported, or an error if the output file
/// cannot be created or written.
pub fn export_results<T: ToRecord>(
    results: &[T],
    layout: &Layout,
    destination: &Destination,
) -> Result<usize> {
    let records: Vec<Record> = results.iter().map(ToRecord::to_record).collect();

    match destination {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_text(&mut writer, &records, layout).context("Failed to write to stdout")?;
            Ok(records.len())
        }
        Destination::Csv(path) => {
            let file = File::create(path).context(format!(
                "Failed to create output file: {}",
                path.display()
            ))?;
            write_csv(BufWriter::new(file), &records, layout)?;
            Ok(records.len())
        }
        Destination::Json(path) => {
            let file = File::create(path).context(format!(
                "Failed to create output file: {}",
                path.display()
            ))?;
            write_json(BufWriter::new(file), &records)
        }
    }
}
