//! This module implements the Julian day arithmetic that every other
//! module is built on.
//!
//! A Julian day number is the calendar-agnostic pivot between the integer
//! representations ([`UnixDate`], [`UnixTimestamp`][crate::UnixTimestamp])
//! and the `(year, month, day)` fields of a [`CalendarDate`].
//!
//! Dates on or after 1582-10-15 are Gregorian. Dates before it are
//! proleptic Julian, so 1582-10-04 is immediately followed by 1582-10-15 and
//! the ten days in between do not exist.
//!
//! Field legality is never checked by the conversions here. Month 13 or
//! day 32 produce some integer deterministically; callers that need strict
//! fields use [`is_valid_date`] first.

use crate::{
    epoch::{JulianDay, UnixDate},
    utils, EPOCH_JULIAN, GREGORIAN_CUTOVER_JULIAN, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};

/// The `(year, month, day)` view of a day, decoded on demand from a
/// Julian day number.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` without any validation.
    #[inline]
    #[must_use]
    pub const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `CalendarDate`, returning `None` when the fields do not
    /// name a day of the calendar.
    #[must_use]
    pub fn try_new(year: i32, month: u8, day: u8) -> Option<Self> {
        is_valid_date(year, i32::from(month), i32::from(day))
            .then_some(Self::new_unchecked(year, month, day))
    }

    /// Returns this date's Julian day number.
    #[inline]
    #[must_use]
    pub fn to_julian(&self) -> JulianDay {
        ymd_to_julian(self.year, i32::from(self.month), i32::from(self.day))
    }

    /// Returns this date as days since the Unix epoch.
    #[inline]
    #[must_use]
    pub fn to_unix_date(&self) -> UnixDate {
        julian_to_unix_date(self.to_julian())
    }
}

// ==== Julian day conversions ====

/// Converts calendar fields into a Julian day number.
///
/// The fields are first shifted to a March-based year so that the leap day
/// falls at the end of the year. Results before 1582-10-15 are recomputed
/// with the Julian calendar formula.
#[must_use]
pub fn ymd_to_julian(year: i32, month: i32, day: i32) -> JulianDay {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let days_before_month = (153 * m + 2).div_euclid(5);

    let mut j = day + days_before_month + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;
    if j < i64::from(GREGORIAN_CUTOVER_JULIAN) {
        j = day + days_before_month + 365 * y + y.div_euclid(4) - 32083;
    }
    JulianDay(j as i32)
}

/// Decodes a Julian day number into calendar fields.
///
/// This is the exact inverse of [`ymd_to_julian`] for every date that
/// exists in the calendar.
#[must_use]
pub fn julian_to_ymd(julian: JulianDay) -> CalendarDate {
    if julian.0 >= GREGORIAN_CUTOVER_JULIAN {
        gregorian_from_julian_day(i64::from(julian.0))
    } else {
        julian_calendar_from_julian_day(i64::from(julian.0))
    }
}

fn gregorian_from_julian_day(julian: i64) -> CalendarDate {
    // Shifts the epoch back to March 1st of astronomical year -4800.
    let (g, dg) = utils::div_mod(julian + 32044, 146_097);
    let c = (dg / 36524 + 1) * 3 / 4;
    let dc = dg - c * 36524;
    let b = dc / 1461;
    let db = dc % 1461;
    let a = (db / 365 + 1) * 3 / 4;
    let da = db - a * 365;

    // full years elapsed since March 1st, 4801 BC
    let y = g * 400 + c * 100 + b * 4 + a;
    // full months elapsed since the last March 1st
    let m = (da * 5 + 308) / 153 - 2;
    // days elapsed since the first of the month
    let d = da - (m + 4) * 153 / 5 + 122;

    CalendarDate::new_unchecked(
        (y - 4800 + (m + 2) / 12) as i32,
        ((m + 2) % 12 + 1) as u8,
        (d + 1) as u8,
    )
}

fn julian_calendar_from_julian_day(julian: i64) -> CalendarDate {
    let c = julian + 32082;
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;

    CalendarDate::new_unchecked(
        (d - 4800 + m / 10) as i32,
        (m + 3 - 12 * (m / 10)) as u8,
        day as u8,
    )
}

/// Converts days since the Unix epoch to a Julian day number.
#[inline]
#[must_use]
pub const fn unix_date_to_julian(date: UnixDate) -> JulianDay {
    JulianDay(date.0.wrapping_add(EPOCH_JULIAN))
}

/// Converts a Julian day number to days since the Unix epoch.
#[inline]
#[must_use]
pub const fn julian_to_unix_date(julian: JulianDay) -> UnixDate {
    UnixDate(julian.0.wrapping_sub(EPOCH_JULIAN))
}

/// Converts calendar fields directly into days since the Unix epoch.
#[inline]
#[must_use]
pub fn ymd_to_unix_date(year: i32, month: i32, day: i32) -> UnixDate {
    julian_to_unix_date(ymd_to_julian(year, month, day))
}

// ==== Calendar validity ====

/// Returns whether `year` has a February 29th.
#[inline]
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    utils::mathematical_in_leap_year(year) == 1
}

/// Returns the number of days of a month, or 0 if `month` is not in 1..=12.
#[inline]
#[must_use]
pub fn days_in_month(year: i32, month: i32) -> i32 {
    utils::days_in_month(year, month)
}

/// Determines if the fields name a day of the calendar, which excludes the
/// days skipped by the switch to the Gregorian calendar.
#[must_use]
pub fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    if !(1..=days_in_month(year, month)).contains(&day) {
        return false;
    }
    !(year == 1582 && month == 10 && (5..=14).contains(&day))
}

// ==== Time of day ====

/// Decomposes milliseconds since midnight into hour, minute, second and
/// millisecond. The hour wraps modulo 24.
#[must_use]
pub fn decompose_time(millis: i64) -> (u8, u8, u8, u16) {
    let millis = millis.rem_euclid(crate::MS_PER_DAY);
    let hour = millis / MS_PER_HOUR;
    let minute = millis % MS_PER_HOUR / MS_PER_MINUTE;
    let second = millis % MS_PER_MINUTE / MS_PER_SECOND;
    let millisecond = millis % MS_PER_SECOND;
    (hour as u8, minute as u8, second as u8, millisecond as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(date: CalendarDate) -> (i32, u8, u8) {
        (date.year, date.month, date.day)
    }

    #[test]
    fn epoch_is_julian_2440588() {
        assert_eq!(ymd_to_julian(1970, 1, 1), JulianDay(2_440_588));
        assert_eq!(ymd_to_unix_date(1970, 1, 1), UnixDate(0));
        assert_eq!(ymd(julian_to_ymd(JulianDay(2_440_588))), (1970, 1, 1));
    }

    #[test]
    fn known_julian_days() {
        assert_eq!(ymd_to_julian(2000, 1, 1), JulianDay(2_451_545));
        assert_eq!(ymd_to_julian(2024, 7, 15), JulianDay(2_460_507));
        assert_eq!(ymd_to_unix_date(2024, 2, 29), UnixDate(19_782));
        // The Julian period starts on -4712-01-01 of the Julian calendar.
        assert_eq!(ymd_to_julian(-4712, 1, 1), JulianDay(0));
        assert_eq!(ymd(julian_to_ymd(JulianDay(0))), (-4712, 1, 1));
    }

    #[test]
    fn gregorian_cutover() {
        let first_gregorian = ymd_to_julian(1582, 10, 15);
        let last_julian = ymd_to_julian(1582, 10, 4);
        assert_eq!(first_gregorian, JulianDay(2_299_161));
        assert_eq!(last_julian, JulianDay(2_299_160));
        assert_eq!(first_gregorian.0 - last_julian.0, 1);

        // Computed with the Gregorian formula alone, 1582-10-04 would land
        // ten days before the Julian calendar's 1582-10-04.
        let j = |year: i64, month: i64, day: i64| {
            let a = (14 - month) / 12;
            let y = year + 4800 - a;
            let m = month + 12 * a - 3;
            day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
        };
        assert_eq!(i64::from(last_julian.0) - j(1582, 10, 4), 10);

        assert_eq!(ymd(julian_to_ymd(first_gregorian)), (1582, 10, 15));
        assert_eq!(ymd(julian_to_ymd(last_julian)), (1582, 10, 4));
    }

    #[test]
    fn julian_branch_leap_centuries() {
        // 1500 is a leap year in the Julian calendar.
        let feb_29 = ymd_to_julian(1500, 2, 29);
        assert_eq!(ymd(julian_to_ymd(feb_29)), (1500, 2, 29));
        assert_eq!(ymd(julian_to_ymd(JulianDay(feb_29.0 + 1))), (1500, 3, 1));
        // 1700 is not a leap year in the Gregorian calendar.
        let feb_28 = ymd_to_julian(1700, 2, 28);
        assert_eq!(ymd(julian_to_ymd(JulianDay(feb_28.0 + 1))), (1700, 3, 1));
    }

    #[test]
    fn round_trip_every_day_near_cutover() {
        let start = ymd_to_julian(1500, 1, 1).0;
        let end = ymd_to_julian(1700, 1, 1).0;
        for j in start..end {
            let date = julian_to_ymd(JulianDay(j));
            assert!(is_valid_date(
                date.year,
                i32::from(date.month),
                i32::from(date.day)
            ));
            assert_eq!(date.to_julian(), JulianDay(j), "{date:?}");
        }
    }

    #[test]
    fn round_trip_wide_year_range() {
        let mut year = -5_000_000;
        while year <= 5_000_000 {
            for month in 1..=12u8 {
                let last = days_in_month(year, i32::from(month)) as u8;
                for day in [1, 15, last] {
                    if !is_valid_date(year, i32::from(month), i32::from(day)) {
                        continue;
                    }
                    let julian = ymd_to_julian(year, i32::from(month), i32::from(day));
                    assert_eq!(
                        ymd(julian_to_ymd(julian)),
                        (year, month, day),
                        "julian day {julian:?}"
                    );
                }
            }
            year += 99_991;
        }
        for year in [-5_000_000, -4801, -4800, -1, 0, 1, 1582, 1583, 9999, 5_000_000] {
            let julian = ymd_to_julian(year, 12, 31);
            assert_eq!(ymd(julian_to_ymd(julian)), (year, 12, 31));
            assert_eq!(julian_to_ymd(JulianDay(julian.0 + 1)).year, year + 1);
        }
    }

    #[test]
    fn unix_julian_offsets_invert() {
        for u in [i32::MIN, -2_440_588, -1, 0, 1, 19_782, i32::MAX] {
            let date = UnixDate(u);
            assert_eq!(julian_to_unix_date(unix_date_to_julian(date)), date);
            assert_eq!(unix_date_to_julian(julian_to_unix_date(JulianDay(u))), JulianDay(u));
        }
    }

    #[test]
    fn nonsense_fields_are_deterministic() {
        assert_eq!(ymd_to_julian(2024, 13, 1), ymd_to_julian(2025, 1, 1));
        assert_eq!(ymd_to_julian(2024, 1, 32), ymd_to_julian(2024, 2, 1));
        assert_eq!(
            ymd_to_julian(i32::MAX, i32::MIN, i32::MAX),
            ymd_to_julian(i32::MAX, i32::MIN, i32::MAX)
        );
    }

    #[test]
    fn date_validity() {
        assert!(is_valid_date(2024, 2, 29));
        assert!(!is_valid_date(2023, 2, 29));
        assert!(!is_valid_date(2023, 13, 1));
        assert!(!is_valid_date(2023, 0, 1));
        assert!(!is_valid_date(2023, 4, 31));
        assert!(!is_valid_date(1582, 10, 10));
        assert!(is_valid_date(1582, 10, 4));
        assert!(is_valid_date(1582, 10, 15));
        assert!(CalendarDate::try_new(1582, 10, 5).is_none());
        assert!(is_leap_year(1500));
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn time_decomposition() {
        assert_eq!(decompose_time(3_723_004), (1, 2, 3, 4));
        assert_eq!(decompose_time(86_399_999), (23, 59, 59, 999));
        assert_eq!(decompose_time(86_400_000 + 1_000), (0, 0, 1, 0));
    }
}
