//! Utility date and time equations

use crate::MS_PER_DAY;

// ==== Begin Date Equations ====

/// The last year that follows the Julian leap year rule.
const LAST_JULIAN_YEAR: i32 = 1582;

/// Floor division paired with its non-negative remainder.
#[inline]
pub(crate) fn div_mod(dividend: i64, divisor: i64) -> (i64, i64) {
    (dividend.div_euclid(divisor), dividend.rem_euclid(divisor))
}

/// Splits epoch milliseconds into whole days and the millisecond of that day.
#[inline]
pub(crate) fn epoch_ms_to_days_and_time(ms: i64) -> (i64, i64) {
    div_mod(ms, MS_PER_DAY)
}

/// Mathematically determine the days in a year.
///
/// Years up to and including 1582 use the Julian rule, so that the result
/// agrees with the calendar Julian days are decoded into.
pub(crate) fn mathematical_days_in_year(y: i32) -> i32 {
    if y.rem_euclid(4) != 0 {
        365
    } else if y <= LAST_JULIAN_YEAR || y % 100 != 0 {
        366
    } else if y % 400 != 0 {
        365
    } else {
        366
    }
}

/// Returns either 1 (true) or 0 (false)
pub(crate) fn mathematical_in_leap_year(y: i32) -> i32 {
    mathematical_days_in_year(y) - 365
}

/// Returns the number of days in `month` of `year`, or 0 for a month
/// outside of 1..=12.
pub(crate) fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + mathematical_in_leap_year(year),
        _ => 0,
    }
}

// ==== End Date Equations ====
