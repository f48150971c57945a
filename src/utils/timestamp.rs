use crate::utils::constants::{OUTPUT_DATETIME_FORMAT, OUTPUT_DATE_FORMAT};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Years below this only come from a truncated year field
const MIN_YEAR: i32 = 1000;

/// Day-first formats carrying a time of day, most specific first. Two-digit
/// years are tried before four-digit ones; `%y` never matches a longer year.
const DAY_FIRST_DATETIME_FORMATS: &[&str] = &[
    "%d.%m.%y %H:%M:%S",
    "%d.%m.%y %H:%M",
    "%d/%m/%y %H:%M:%S",
    "%d/%m/%y %H:%M",
    "%d-%m-%y %H:%M:%S",
    "%d-%m-%y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

const DAY_FIRST_DATE_FORMATS: &[&str] = &[
    "%d.%m.%y", "%d/%m/%y", "%d-%m-%y", "%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y",
];

/// ISO renderings, accepted so a combined file can be read back in
const ISO_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

const ISO_DATE_FORMATS: &[&str] = &["%Y-%m-%d"];

/// Parse a timestamp written day-first (e.g. `24.12.2023 13:00`).
///
/// Date-only values resolve to midnight. Two-digit years map to 1970-2069
/// (`01.01.21` is 2021). Returns `None` when no known layout matches or the
/// year has three digits or fewer.
pub fn parse_day_first(value: &str) -> Option<NaiveDateTime> {
    parse_any_layout(value.trim()).filter(|parsed| parsed.year() >= MIN_YEAR)
}

fn parse_any_layout(value: &str) -> Option<NaiveDateTime> {
    if value.is_empty() {
        return None;
    }

    for format in DAY_FIRST_DATETIME_FORMATS.iter().chain(ISO_DATETIME_FORMATS) {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }

    for format in DAY_FIRST_DATE_FORMATS.iter().chain(ISO_DATE_FORMATS) {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    None
}

/// Render a key for output. `date_only` is set when every key of the
/// column sits at midnight.
pub fn format_key(key: &NaiveDateTime, date_only: bool) -> String {
    if date_only {
        key.format(OUTPUT_DATE_FORMAT).to_string()
    } else {
        key.format(OUTPUT_DATETIME_FORMAT).to_string()
    }
}

/// Whether a key carries no time-of-day component
pub fn is_midnight(key: &NaiveDateTime) -> bool {
    key.time() == NaiveTime::MIN
}
