//! Hostname normalization for the TLS probe.

/// Reduces a URL-ish string to a bare hostname.
///
/// Strips a leading `https://` or `http://` prefix, then truncates at the
/// first `/`. Anything else (ports, query strings without a path, user info)
/// is left untouched.
///
/// # Arguments
///
/// * `url` - The URL or hostname as given by the user
///
/// # Returns
///
/// The hostname part.
pub fn normalize_hostname(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.split('/').next().unwrap_or(rest).to_string()
}
