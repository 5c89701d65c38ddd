//! Time utilities

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Month number (1-12) for a lowercase English month name
pub fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|index| index as u32 + 1)
}

/// `[first instant of month, first instant of next month)` in UTC
pub fn month_bounds(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    Some((
        Utc.from_utc_datetime(&start.and_hms_opt(0, 0, 0)?),
        Utc.from_utc_datetime(&next.and_hms_opt(0, 0, 0)?),
    ))
}

/// Bounds of `month` in the year of `now`
pub fn month_bounds_in_year_of(
    now: DateTime<Utc>,
    month: u32,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    month_bounds(now.year(), month)
}
