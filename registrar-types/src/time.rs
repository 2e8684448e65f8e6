//! Wire time format.
//!
//! The API exchanges instants as UTC strings with whole-second precision
//! (`2024-05-01T09:30:00Z`). Rendering drops any sub-second component, so a
//! render/parse round trip truncates to the second. Callers comparing
//! instants across the wire should compare against [`truncate_to_seconds`].

use chrono::{DateTime, Datelike, NaiveDateTime, SubsecRound, Utc};

use crate::{ConversionError, Result};

/// `strftime` pattern used when rendering instants for the wire.
pub const WIRE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Years the four-digit `%Y` field can carry without a sign.
const WIRE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Layout accepted for instants sent without an offset; they are read as UTC.
const NAIVE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Renders an instant in the wire format.
///
/// Fails for years outside `0000..=9999`, which the format cannot express in
/// a form [`parse_wire_time`] reads back.
pub fn format_wire_time(time: &DateTime<Utc>) -> Result<String> {
    if !WIRE_YEARS.contains(&time.year()) {
        return Err(ConversionError::TimeOutOfRange(time.to_rfc3339()));
    }
    Ok(time.format(WIRE_TIME_FORMAT).to_string())
}

/// Parses an ISO-8601 instant, normalising any offset to UTC.
pub fn parse_wire_time(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Ok(time.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, NAIVE_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| ConversionError::InvalidTimestamp {
            value: value.to_owned(),
            reason: e.to_string(),
        })
}

/// Drops the sub-second component of an instant.
#[must_use]
pub fn truncate_to_seconds(time: DateTime<Utc>) -> DateTime<Utc> {
    time.trunc_subsecs(0)
}
