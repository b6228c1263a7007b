//! Expiry arithmetic shared by the TLS and WHOIS probes.

use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `now` until `expires`, rounded toward negative infinity.
///
/// A certificate that expired twelve hours ago is `-1` days from expiry, not
/// `0`; one that expires in 23 hours is `0`.
pub fn days_until(expires: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (expires - now).num_seconds().div_euclid(SECONDS_PER_DAY)
}
