//! Human-readable durations, `2w3d` style.
//!
//! Incident durations and rule expirations travel as short unit strings
//! rather than raw second counts: `w` (weeks), `d` (days), `h` (hours),
//! `m` (minutes), `s` (seconds). [`duration_string`] gives the full
//! decomposition for elapsed-time display, [`approx_duration`] keeps only
//! the largest unit for relative dates, and [`parse_duration`] turns a
//! typed string like `2w` back into a duration.

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DurationError;

/// Unit table, largest first. Weeks are the largest unit the format knows;
/// months and years are deliberately absent since they have no fixed length.
const DELTAS: &[(u64, &str)] = &[
    (7 * 24 * 60 * 60, "w"),
    (24 * 60 * 60, "d"),
    (60 * 60, "h"),
    (60, "m"),
    (1, "s"),
];

static GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)([wdhms])").expect("duration group regex"));

/// Formats a second count as its full unit decomposition.
///
/// Zero-count units are skipped, so nine days is `"1w2d"` and ninety
/// seconds is `"1m30s"`. The zero duration formats as `"0s"` so the result
/// is never empty.
///
/// ```rust
/// use paramtools::duration_string;
///
/// assert_eq!(duration_string(9 * 24 * 60 * 60), "1w2d");
/// assert_eq!(duration_string(90), "1m30s");
/// ```
pub fn duration_string(mut seconds: u64) -> String {
    if seconds == 0 {
        return "0s".to_string();
    }
    let mut out = String::new();
    for &(delta, unit) in DELTAS {
        if delta <= seconds {
            out.push_str(&(seconds / delta).to_string());
            out.push_str(unit);
            seconds %= delta;
        }
    }
    out
}

/// Formats a second count as its single largest unit, truncating the rest:
/// six days and six hours is just `"6d"`. Sub-second counts format as
/// `"0s"`.
pub fn approx_duration(seconds: u64) -> String {
    for &(delta, unit) in DELTAS {
        if delta <= seconds {
            return format!("{}{}", seconds / delta, unit);
        }
    }
    "0s".to_string()
}

/// Parses a duration string: one or more `<count><unit>` groups, e.g.
/// `"2w"`, `"3d12h"`, `"90s"`. Inverse of [`duration_string`].
///
/// The empty string, unknown units, and trailing garbage are rejected;
/// counts that overflow the representable range report
/// [`DurationError::OutOfRange`]. Groups may repeat units and appear in any
/// order; the total is the sum.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    if input.is_empty() {
        return Err(DurationError::Empty);
    }
    let mut rest = input;
    let mut total: u64 = 0;
    while !rest.is_empty() {
        let caps = GROUP_RE
            .captures(rest)
            .ok_or_else(|| DurationError::Unrecognized(input.to_string()))?;
        let count: u64 = caps[1]
            .parse()
            .map_err(|_| DurationError::OutOfRange(input.to_string()))?;
        let delta = match &caps[2] {
            "w" => 7 * 24 * 60 * 60,
            "d" => 24 * 60 * 60,
            "h" => 60 * 60,
            "m" => 60,
            _ => 1,
        };
        total = count
            .checked_mul(delta)
            .and_then(|group| total.checked_add(group))
            .ok_or_else(|| DurationError::OutOfRange(input.to_string()))?;
        rest = &rest[caps[0].len()..];
    }
    i64::try_from(total)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or_else(|| DurationError::OutOfRange(input.to_string()))
}

/// Absolute expiration for a typed duration: `now + parse_duration(text)`.
///
/// This is how an expiration entered as `"2w"` becomes a timestamp to
/// store on a rule.
pub fn expires_from_duration(
    now: DateTime<Utc>,
    text: &str,
) -> Result<DateTime<Utc>, DurationError> {
    let duration = parse_duration(text)?;
    now.checked_add_signed(duration)
        .ok_or_else(|| DurationError::OutOfRange(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn full_decomposition_skips_zero_units() {
        assert_eq!(duration_string(0), "0s");
        assert_eq!(duration_string(45), "45s");
        assert_eq!(duration_string(60), "1m");
        assert_eq!(duration_string(90), "1m30s");
        assert_eq!(duration_string(3 * 3600 + 15 * 60), "3h15m");
        assert_eq!(duration_string(9 * 86400), "1w2d");
        assert_eq!(duration_string(14 * 86400 + 1), "2w1s");
    }

    #[test]
    fn approximation_keeps_largest_unit_only() {
        assert_eq!(approx_duration(0), "0s");
        assert_eq!(approx_duration(59), "59s");
        // Six days and six hours: the hours are truncated out.
        assert_eq!(approx_duration(6 * 86400 + 6 * 3600), "6d");
        assert_eq!(approx_duration(21 * 86400), "3w");
    }

    #[test]
    fn parse_accepts_single_and_compound_groups() {
        assert_eq!(parse_duration("2w").expect("2w"), Duration::weeks(2));
        assert_eq!(
            parse_duration("3d12h").expect("3d12h"),
            Duration::days(3) + Duration::hours(12)
        );
        assert_eq!(parse_duration("90s").expect("90s"), Duration::seconds(90));
        // Repeated units sum.
        assert_eq!(parse_duration("1d1d").expect("1d1d"), Duration::days(2));
    }

    #[test]
    fn parse_round_trips_the_formatter() {
        for seconds in [0u64, 1, 59, 60, 3661, 86400, 9 * 86400, 123456789] {
            let text = duration_string(seconds);
            let parsed = parse_duration(&text).expect("round trip parse");
            assert_eq!(parsed.num_seconds(), seconds as i64, "via {text}");
        }
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert_eq!(
            parse_duration("2x"),
            Err(DurationError::Unrecognized("2x".to_string()))
        );
        assert_eq!(
            parse_duration("w2"),
            Err(DurationError::Unrecognized("w2".to_string()))
        );
        assert_eq!(
            parse_duration("2w junk"),
            Err(DurationError::Unrecognized("2w junk".to_string()))
        );
        assert_eq!(
            parse_duration("99999999999999999999w"),
            Err(DurationError::OutOfRange(
                "99999999999999999999w".to_string()
            ))
        );
    }

    #[test]
    fn expires_from_duration_adds_to_now() {
        let now = Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).single().expect("ts");
        let expires = expires_from_duration(now, "2w").expect("2w from now");
        assert_eq!(
            expires,
            Utc.with_ymd_and_hms(2020, 2, 15, 0, 0, 0).single().expect("ts")
        );
    }
}
