//! Calendar helpers: age in whole years and lenient date parsing

use crate::error::{CohortError, Result};
use chrono::{DateTime, Datelike, NaiveDate};

/// Age in completed years at `as_of`.
///
/// Subtracts the years, then takes one off when the month/day of `as_of`
/// precedes the birth month/day. A Feb 29 birthday is reached on Mar 1 in
/// common years. A birth date after `as_of` yields 0.
pub fn age_from_birth_date(birth: NaiveDate, as_of: NaiveDate) -> u32 {
    if birth > as_of {
        return 0;
    }

    let mut years = as_of.year() - birth.year();
    // Birthday not reached yet this year
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep the date as written, without converting the offset.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| CohortError::invalid_date(input))
}
