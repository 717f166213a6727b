//! Validation of bounded user input.
//!
//! These are pure functions: the interactive session calls them in a loop and
//! re-prompts on `Err`, so the inventory never sees out-of-range values.

use chrono::NaiveDate;

use crate::error::{DomainError, DomainResult};

/// Earliest year accepted for a due date.
pub const MIN_YEAR: i64 = 1990;

/// Latest year `NaiveDate` can represent in full.
pub const MAX_YEAR: i64 = 262_142;

/// Parse a base-10 integer and require `min <= value <= max`.
pub fn parse_bounded_int(raw: &str, min: i64, max: i64) -> DomainResult<i64> {
    let value = parse_i64(raw, "Invalid input. Enter an integer")?;
    if value < min || value > max {
        return Err(DomainError::out_of_range(min, max));
    }
    Ok(value)
}

/// Parse any 64-bit base-10 integer.
pub fn parse_long(raw: &str) -> DomainResult<i64> {
    parse_i64(raw, "Invalid input. Enter a long integer")
}

fn parse_i64(raw: &str, message: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::validation(message))
}

/// Number of days in `month` of `year` (leap-year aware).
///
/// Returns 0 for a month outside `1..=12`.
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 0,
    }
}

/// Combine already-bounded parts into a calendar date.
pub fn due_date(year: i64, month: i64, day: i64) -> DomainResult<NaiveDate> {
    let invalid = || DomainError::invalid_date(format!("{year:04}-{month:02}-{day:02}"));

    let year = i32::try_from(year).map_err(|_| invalid())?;
    let month = u32::try_from(month).map_err(|_| invalid())?;
    let day = u32::try_from(day).map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}
