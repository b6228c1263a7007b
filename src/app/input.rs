//! Input collection.
//!
//! Identifiers come from a newline-delimited file or from the trailing
//! command-line arguments; the file wins when both are given.

use std::path::Path;

use crate::error_handling::ConfigError;

/// Collects identifiers from `input` (if given) or `args`.
///
/// Every entry is trimmed and empty entries are dropped. Order is preserved
/// and duplicates are kept.
///
/// # Arguments
///
/// * `input` - Optional path of a file with one identifier per line
/// * `args` - Identifiers given on the command line
/// * `noun` - What the identifiers are called in the error message ("URLs", "domains")
///
/// # Errors
///
/// Returns `ConfigError::UnreadableInput` if the file cannot be read, and
/// `ConfigError::MissingInput` if neither source was given.
pub fn collect_identifiers(
    input: Option<&Path>,
    args: &[String],
    noun: &'static str,
) -> Result<Vec<String>, ConfigError> {
    if let Some(path) = input {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::UnreadableInput {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(clean_lines(content.lines()));
    }

    let identifiers = clean_lines(args.iter().map(String::as_str));
    if identifiers.is_empty() {
        return Err(ConfigError::MissingInput(noun));
    }
    Ok(identifiers)
}

fn clean_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
