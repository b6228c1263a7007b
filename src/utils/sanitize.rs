//! Utilities for sanitizing text received from remote services.
//!
//! WHOIS answers are free text; control characters in
//! them would break the text and CSV exports.

/// Removes control characters from `text` and trims surrounding whitespace.
///
/// Control characters (0x00-0x1F and 0x7F) are removed, tabs become spaces.
/// Non-ASCII characters are kept.
///
/// # Arguments
///
/// * `text` - The raw value
///
/// # Returns
///
/// The sanitized value.
pub fn sanitize_field_value(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            c if (c as u32) < 0x20 || c as u32 == 0x7F => None,
            c => Some(c),
        })
        .collect::<String>()
        .trim()
        .to_string()
}
