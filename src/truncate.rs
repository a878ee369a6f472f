//! Truncation of dates and timestamps to the start of a year or month, and
//! calendar field extraction.

use crate::{
    epoch::{UnixDate, UnixTimestamp},
    iso::CalendarDate,
    options::TimeUnit,
};

/// A value that can be moved to the start of a calendar unit.
pub trait Truncate: Copy {
    /// Splits the value into its date and the milliseconds into that date.
    fn split_date(self) -> (UnixDate, i64);

    /// Returns the value at the start of `date`.
    fn at_start_of(date: UnixDate) -> Self;
}

impl Truncate for UnixDate {
    fn split_date(self) -> (UnixDate, i64) {
        (self, 0)
    }

    fn at_start_of(date: UnixDate) -> Self {
        date
    }
}

impl Truncate for UnixTimestamp {
    fn split_date(self) -> (UnixDate, i64) {
        let (date, time) = self.to_date_and_time();
        (date, i64::from(time.as_i32()))
    }

    fn at_start_of(date: UnixDate) -> Self {
        date.to_timestamp()
    }
}

/// Returns the start of the year or month containing `value`.
///
/// # Panics
///
/// Panics if `unit` is neither [`TimeUnit::Year`] nor [`TimeUnit::Month`].
#[must_use]
pub fn floor_to_unit<T: Truncate>(value: T, unit: TimeUnit) -> T {
    truncate(value, unit, false)
}

/// Returns `value` if it is the start of a year or month, and the start of
/// the next one otherwise.
///
/// # Panics
///
/// Panics if `unit` is neither [`TimeUnit::Year`] nor [`TimeUnit::Month`].
#[must_use]
pub fn ceil_to_unit<T: Truncate>(value: T, unit: TimeUnit) -> T {
    truncate(value, unit, true)
}

fn truncate<T: Truncate>(value: T, unit: TimeUnit, ceil: bool) -> T {
    let (date, millis) = value.split_date();
    let CalendarDate { year, month, day } = date.to_calendar_date();
    let (month, day) = (i32::from(month), i32::from(day));
    let past_midnight = millis != 0;

    let (year, month) = match unit {
        TimeUnit::Year => {
            let past_start = month > 1 || day > 1 || past_midnight;
            (year + i32::from(ceil && past_start), 1)
        }
        // Month 13 is January of the next year.
        TimeUnit::Month => (year, month + i32::from(ceil && (day > 1 || past_midnight))),
        _ => unsupported_unit!(if ceil { "ceil" } else { "floor" }, unit),
    };
    T::at_start_of(UnixDate::from_ymd(year, month, 1))
}

/// Returns the year, month or day of `date`.
///
/// # Panics
///
/// Panics for any unit other than [`TimeUnit::Year`], [`TimeUnit::Month`]
/// and [`TimeUnit::Day`].
#[must_use]
pub fn extract(date: UnixDate, unit: TimeUnit) -> i32 {
    let CalendarDate { year, month, day } = date.to_calendar_date();
    match unit {
        TimeUnit::Year => year,
        TimeUnit::Month => i32::from(month),
        TimeUnit::Day => i32::from(day),
        _ => unsupported_unit!("extract", unit),
    }
}
