//! Conversion of WHOIS client answers into [`WhoisInfo`].
//!
//! The client extracts registrar, registrant name, dates and statuses. The
//! registrant is completed from the raw text with a fallback chain
//! (organization before person name), and dates are re-parsed so that
//! values without an offset stay naive.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::error_handling::ProbeError;
use crate::utils::{days_until, sanitize_field_value};

use super::source::WhoisAnswer;
use super::types::{WhoisDate, WhoisInfo};

fn compile(labels: &[&str]) -> Vec<Regex> {
    labels
        .iter()
        .map(|label| {
            Regex::new(&format!(r"(?im)^[ \t]*{label}:[ \t]*(.+)$"))
                .expect("WHOIS field patterns are valid regexes")
        })
        .collect()
}

// Registrant fallback chain, highest priority first
static REGISTRANT_ORGANIZATION: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(&["Registrant Organization"]));
static ORG: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(&["org", "Organization", "org-name", "OrgName"]));
static NAME: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(&["Registrant Name", "Registrant", "name"]));

/// Phrases registries use to say the domain is not registered.
const NOT_FOUND_PATTERNS: &[&str] = &[
    "no match",
    "not found",
    "no data found",
    "no entries found",
    "status: free",
    "status: available",
    "domain not found",
    "no object found",
];

/// A cleaned value, or `None` if it is empty or redacted.
fn clean_value(value: &str) -> Option<String> {
    let value = sanitize_field_value(value);
    if value.is_empty() || value.eq_ignore_ascii_case("redacted") {
        None
    } else {
        Some(value)
    }
}

fn first_value(text: &str, patterns: &[Regex]) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find_map(|m| clean_value(m.as_str()))
    })
}

fn dates(value: Option<&str>) -> Vec<WhoisDate> {
    value
        .and_then(clean_value)
        .map(|text| vec![parse_whois_date(&text)])
        .unwrap_or_default()
}

fn statuses(values: &[String]) -> Vec<String> {
    let mut statuses: Vec<String> = Vec::new();
    for value in values.iter().filter_map(|v| clean_value(v)) {
        // Drop the trailing ICANN URL: "clientTransferProhibited https://icann.org/epp#..."
        let code = value.split_whitespace().next().unwrap_or(&value).to_string();
        if !statuses.contains(&code) {
            statuses.push(code);
        }
    }
    statuses
}

/// Picks the registrant: registrant organization, then a generic
/// organization field, then the registrant name reported by the client,
/// then a name field of the raw text.
pub fn registrant(raw: &str, registrant_name: Option<&str>) -> Option<String> {
    first_value(raw, &REGISTRANT_ORGANIZATION)
        .or_else(|| first_value(raw, &ORG))
        .or_else(|| registrant_name.and_then(clean_value))
        .or_else(|| first_value(raw, &NAME))
}

/// Parses a date in one of the common WHOIS formats.
///
/// Dates carrying an offset (`Z`, `+02:00`, a `UTC` suffix) become
/// [`WhoisDate::Aware`], dates without one [`WhoisDate::Naive`] (date-only
/// values at midnight). Anything else is kept as [`WhoisDate::Text`].
pub fn parse_whois_date(date_str: &str) -> WhoisDate {
    let cleaned = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(cleaned) {
        return WhoisDate::Aware(dt);
    }

    let offset_formats = [
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M:%S%z",
        "%Y-%m-%d %H:%M:%S %z",
    ];
    for format in &offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(cleaned, format) {
            return WhoisDate::Aware(dt);
        }
    }

    // "2024-01-15 10:30:45 UTC" and friends
    let utc_stripped = ["(UTC)", "UTC", "GMT", "Z"]
        .iter()
        .find_map(|suffix| cleaned.strip_suffix(suffix))
        .map(str::trim_end);

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y.%m.%d %H:%M:%S",
        "%d.%m.%Y %H:%M:%S",
    ];
    let date_formats = [
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d-%B-%Y",
        "%Y.%m.%d",
        "%Y/%m/%d",
        "%d.%m.%Y",
        "%d/%m/%Y",
        "%b %d %Y",
    ];

    let parse_naive = |text: &str| -> Option<NaiveDateTime> {
        datetime_formats
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .or_else(|| {
                date_formats.iter().find_map(|format| {
                    NaiveDate::parse_from_str(text, format)
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                })
            })
    };

    if let Some(naive) = utc_stripped.and_then(parse_naive) {
        return WhoisDate::Aware(naive.and_utc().fixed_offset());
    }
    if let Some(naive) = parse_naive(cleaned) {
        return WhoisDate::Naive(naive);
    }

    WhoisDate::Text(cleaned.to_string())
}

/// Whether `raw` is a "domain not registered" answer.
pub fn is_not_found(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    NOT_FOUND_PATTERNS.iter().any(|p| lower.contains(p))
}

/// Converts the WHOIS answer for `domain` into [`WhoisInfo`].
///
/// # Arguments
///
/// * `domain` - The queried domain, used in error messages
/// * `answer` - Raw text and extracted fields from the WHOIS client
/// * `now` - Reference time for days-to-expiry
///
/// # Errors
///
/// Returns a `NotFound` error when the answer says the domain is not
/// registered and carries no registration data, and a `Protocol` error when
/// the answer is empty.
pub fn convert_answer(
    domain: &str,
    answer: &WhoisAnswer,
    now: DateTime<Utc>,
) -> Result<WhoisInfo, ProbeError> {
    let fields = answer.parsed.clone().unwrap_or_default();

    let registrar = fields.registrar.as_deref().and_then(clean_value);
    let creation_date = dates(fields.creation_date.as_deref());

    if registrar.is_none() && creation_date.is_empty() {
        if is_not_found(&answer.raw) {
            return Err(ProbeError::not_found(format!(
                "No WHOIS record found for {domain}"
            )));
        }
        if answer.parsed.is_none() && answer.raw.trim().is_empty() {
            return Err(ProbeError::protocol(format!(
                "Empty WHOIS answer for {domain}"
            )));
        }
    }

    let expiration_date = dates(fields.expiration_date.as_deref());
    let days_to_expiry = expiration_date
        .first()
        .and_then(WhoisDate::to_utc)
        .map(|expires| days_until(expires, now));

    Ok(WhoisInfo {
        registrar,
        registrant: registrant(&answer.raw, fields.registrant_name.as_deref()),
        creation_date,
        expiration_date,
        updated_date: dates(fields.updated_date.as_deref()),
        status: statuses(&fields.status),
        days_to_expiry,
    })
}
