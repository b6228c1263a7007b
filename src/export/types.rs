//! Export layout types.

/// A named column: the record key and its human-readable label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Which data fields are exported, and in which order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Columns {
    /// Fixed field order; fields outside the list (such as `error`) never
    /// become CSV columns.
    Fixed(&'static [Column]),
    /// Keys of the first record, in record order; labels are the keys.
    FromFirstRecord,
}

/// How one probe's records are laid out by the exporters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// The identifier field heading each text block.
    pub identifier: Column,
    pub columns: Columns,
}

/// Key of the failure message in TLS and WHOIS records.
pub const ERROR_KEY: &str = "error";
/// Label of the failure message in text output.
pub const ERROR_LABEL: &str = "Error";

impl Layout {
    /// CSV header for `records`.
    pub fn header(&self, records: &[crate::export::Record]) -> Vec<String> {
        match self.columns {
            Columns::Fixed(columns) => std::iter::once(self.identifier.key)
                .chain(columns.iter().map(|c| c.key))
                .map(str::to_string)
                .collect(),
            Columns::FromFirstRecord => records
                .first()
                .map(|r| r.keys().map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Record;

    const COLUMNS: &[Column] = &[Column::new("issuer", "Issuer")];
    const FIXED: Layout = Layout {
        identifier: Column::new("hostname", "Host"),
        columns: Columns::Fixed(COLUMNS),
    };

    #[test]
    fn test_fixed_header_starts_with_identifier() {
        assert_eq!(FIXED.header(&[]), ["hostname", "issuer"]);
    }

    #[test]
    fn test_dynamic_header_follows_first_record() {
        let layout = Layout {
            identifier: Column::new("domain", "Domain"),
            columns: Columns::FromFirstRecord,
        };
        let records = vec![
            Record::new().with("domain", "a.com").with("MX", "ERROR"),
            Record::new()
                .with("domain", "b.com")
                .with("MX", "ERROR")
                .with("TXT", "ERROR"),
        ];
        assert_eq!(layout.header(&records), ["domain", "MX"]);
        assert!(layout.header(&[]).is_empty());
    }
}
