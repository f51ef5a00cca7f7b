//! Permissive date detection for export date fields.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::DateError;

/// Date-only formats, month-first before day-first.
///
/// Two-digit years come before `%Y` layouts, which would otherwise read
/// `01/15/22` as the year 22.
const DATE_FORMATS: [&str; 14] = [
    "%Y-%m-%d",
    "%m/%d/%y",  // 01/15/22
    "%Y/%m/%d",
    "%m/%d/%Y",  // US: 01/15/2022
    "%m-%d-%Y",  // 01-15-2022
    "%d/%m/%Y",  // European: 15/01/2022
    "%d.%m.%Y",  // 15.01.2022
    "%Y%m%d",    // Compact: 20220115
    "%d-%b-%Y",  // 15-Jan-2022
    "%b %d, %Y", // Jan 15, 2022
    "%B %d, %Y", // January 15, 2022
    "%d %b %Y",  // 15 Jan 2022
    "%d %B %Y",  // 15 January 2022
    "%Y-%b-%d",  // 2022-Jan-15
];

/// Formats carrying a time of day; only the date part is kept.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
];

/// Parse date text in any supported layout.
///
/// Surrounding whitespace is ignored.
pub fn parse_date(text: &str) -> Result<NaiveDate, DateError> {
    let value = text.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| DateError(text.to_string()))
}

/// Render a date as compact `YYYYMMDD` digits.
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
