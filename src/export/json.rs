//! JSON export functionality.
//!
//! Writes the full record list as one pretty-printed array (2-space indent).
//! Keys keep record order and list values stay arrays. The output is pure
//! ASCII: other characters are written as `\uXXXX` escapes.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};

use super::Record;

/// Replaces every non-ASCII character with its UTF-16 `\uXXXX` escape(s).
///
/// Such characters can only occur inside JSON strings, where the escape
/// decodes to the same text.
fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(escaped, "\\u{unit:04x}");
            }
        }
    }
    escaped
}

/// Writes `records` as a JSON array.
pub fn write_json<W: Write>(mut writer: W, records: &[Record]) -> Result<usize> {
    let json = serde_json::to_string_pretty(records).context("Failed to serialize records")?;
    writer
        .write_all(escape_non_ascii(&json).as_bytes())
        .context("Failed to write JSON output")?;
    writer.flush().context("Failed to flush JSON output")?;
    Ok(records.len())
}
