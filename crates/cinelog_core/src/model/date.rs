//! `DD.MM.YYYY` display date validation.
//!
//! The catalog stores dates in their display form, so the shape and the
//! calendar validity (month lengths, leap years) are checked here instead
//! of relying on the storage layer.

use once_cell::sync::Lazy;
use regex::Regex;

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").expect("date regex must compile"));

/// Returns whether `value` is a valid calendar date in `DD.MM.YYYY` form.
pub fn is_valid_display_date(value: &str) -> bool {
    let Some(captures) = DATE_SHAPE.captures(value) else {
        return false;
    };

    // The regex guarantees all three groups are short digit runs.
    let day: u32 = captures[1].parse().unwrap_or(0);
    let month: u32 = captures[2].parse().unwrap_or(0);
    let year: u32 = captures[3].parse().unwrap_or(0);

    if year == 0 || !(1..=12).contains(&month) {
        return false;
    }

    day >= 1 && day <= days_in_month(month, year)
}

fn days_in_month(month: u32, year: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
