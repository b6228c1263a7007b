//! Human-readable text export.
//!
//! One block per record: the identifier line, one indented line per field,
//! the error line if the probe failed, then a blank line.

use std::io::{self, Write};

use super::types::{Columns, Layout, ERROR_KEY, ERROR_LABEL};
use super::Record;

/// Writes `records` as text blocks.
pub fn write_text<W: Write>(writer: &mut W, records: &[Record], layout: &Layout) -> io::Result<()> {
    for record in records {
        let identifier = record
            .get(layout.identifier.key)
            .map(|v| v.render())
            .unwrap_or_default();
        writeln!(writer, "{}: {}", layout.identifier.label, identifier)?;

        match layout.columns {
            Columns::Fixed(columns) => {
                for column in columns {
                    let value = record.get(column.key).map(|v| v.render()).unwrap_or_default();
                    writeln!(writer, "  {}: {}", column.label, value)?;
                }
                if let Some(error) = record.get(ERROR_KEY) {
                    writeln!(writer, "  {}: {}", ERROR_LABEL, error)?;
                }
            }
            Columns::FromFirstRecord => {
                for (key, value) in record.iter() {
                    if key == layout.identifier.key {
                        continue;
                    }
                    writeln!(writer, "  {key}: {value}")?;
                }
            }
        }
        writeln!(writer)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{Column, FieldValue};

    const COLUMNS: &[Column] = &[
        Column::new("registrar", "Registrar"),
        Column::new("days_to_expiry", "Days to Expiry"),
    ];
    const LAYOUT: Layout = Layout {
        identifier: Column::new("domain", "Domain"),
        columns: Columns::Fixed(COLUMNS),
    };

    fn render(records: &[Record], layout: &Layout) -> String {
        let mut buf = Vec::new();
        write_text(&mut buf, records, layout).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_fixed_layout_blocks() {
        let records = vec![
            Record::new()
                .with("domain", "example.com")
                .with("registrar", "Example Registrar")
                .with("days_to_expiry", 30_i64),
            Record::new()
                .with("domain", "bad.example")
                .with("registrar", FieldValue::error())
                .with("days_to_expiry", FieldValue::error())
                .with("error", "connection refused"),
        ];
        assert_eq!(
            render(&records, &LAYOUT),
            "Domain: example.com\n  Registrar: Example Registrar\n  Days to Expiry: 30\n\n\
             Domain: bad.example\n  Registrar: ERROR\n  Days to Expiry: ERROR\n  Error: connection refused\n\n"
        );
    }

    #[test]
    fn test_dynamic_layout_prints_raw_keys() {
        let layout = Layout {
            identifier: Column::new("domain", "Domain"),
            columns: Columns::FromFirstRecord,
        };
        let records = vec![Record::new()
            .with("domain", "example.com")
            .with("NS", vec!["a.iana-servers.net.".to_string(), "b.iana-servers.net.".to_string()])
            .with("DNSSEC", "NOT ENABLED")];
        assert_eq!(
            render(&records, &layout),
            "Domain: example.com\n  NS: a.iana-servers.net., b.iana-servers.net.\n  DNSSEC: NOT ENABLED\n\n"
        );
    }

    #[test]
    fn test_no_records_writes_nothing() {
        assert_eq!(render(&[], &LAYOUT), "");
    }
}
