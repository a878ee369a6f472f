//! The integer representations of dates and times.

use core::{fmt, str::FromStr};

use writeable::Writeable;

use crate::{
    format::{FormattableDate, FormattableTime, FormattableTimestamp},
    iso::{self, CalendarDate},
    options::{RoundingMode, TimeUnit},
    parsers,
    rounding::IncrementRounder,
    truncate, utils, TemporalError, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};

/// A count of days since 1970-01-01.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixDate(pub(crate) i32);

/// A count of milliseconds since 1970-01-01T00:00:00Z.
///
/// Calendar fields are only meaningful while the day count fits an `i32`,
/// roughly ±5.8 million years around the epoch. Past that the date wraps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixTimestamp(pub(crate) i64);

/// Milliseconds since midnight.
///
/// The value is not normalized; the lenient parser can produce values past
/// the end of the day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(pub(crate) i32);

/// A count of days since the start of the Julian period.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDay(pub(crate) i32);

// ==== UnixDate ====

impl From<i32> for UnixDate {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl UnixDate {
    /// 1970-01-01
    pub const EPOCH: Self = Self(0);

    /// Returns the day count.
    #[inline]
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Creates a `UnixDate` from calendar fields. The fields are not
    /// validated.
    #[inline]
    #[must_use]
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Self {
        iso::ymd_to_unix_date(year, month, day)
    }

    /// Decodes this date into calendar fields.
    #[inline]
    #[must_use]
    pub fn to_calendar_date(self) -> CalendarDate {
        iso::julian_to_ymd(self.to_julian())
    }

    #[inline]
    #[must_use]
    pub const fn to_julian(self) -> JulianDay {
        iso::unix_date_to_julian(self)
    }

    #[inline]
    #[must_use]
    pub const fn from_julian(julian: JulianDay) -> Self {
        iso::julian_to_unix_date(julian)
    }

    /// Returns midnight of this date.
    #[inline]
    #[must_use]
    pub fn to_timestamp(self) -> UnixTimestamp {
        UnixTimestamp(i64::from(self.0) * MS_PER_DAY)
    }

    /// Truncates this date down to the start of `unit`.
    ///
    /// # Panics
    ///
    /// Panics if `unit` is neither [`TimeUnit::Year`] nor [`TimeUnit::Month`].
    #[must_use]
    pub fn floor(self, unit: TimeUnit) -> Self {
        truncate::floor_to_unit(self, unit)
    }

    /// Moves this date up to the start of `unit`, unless it already is one.
    ///
    /// # Panics
    ///
    /// Panics if `unit` is neither [`TimeUnit::Year`] nor [`TimeUnit::Month`].
    #[must_use]
    pub fn ceil(self, unit: TimeUnit) -> Self {
        truncate::ceil_to_unit(self, unit)
    }

    /// Returns the year, month or day field of this date.
    ///
    /// # Panics
    ///
    /// Panics for any other unit.
    #[must_use]
    pub fn extract(self, unit: TimeUnit) -> i32 {
        truncate::extract(self, unit)
    }
}

impl FromStr for UnixDate {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_date(s)
    }
}

impl fmt::Display for UnixDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FormattableDate::from(*self).write_to(f)
    }
}

// ==== JulianDay ====

impl From<i32> for JulianDay {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl JulianDay {
    #[inline]
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn to_calendar_date(self) -> CalendarDate {
        iso::julian_to_ymd(self)
    }

    #[inline]
    #[must_use]
    pub const fn to_unix_date(self) -> UnixDate {
        iso::julian_to_unix_date(self)
    }
}

// ==== TimeOfDay ====

impl From<i32> for TimeOfDay {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl TimeOfDay {
    /// Midnight.
    pub const MIDNIGHT: Self = Self(0);

    /// Returns the millisecond count.
    #[inline]
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Creates a `TimeOfDay` from its fields. The fields are not validated.
    #[must_use]
    pub fn from_hms_milli(hour: i32, minute: i32, second: i32, millisecond: i32) -> Self {
        let millis = i64::from(hour) * MS_PER_HOUR
            + i64::from(minute) * MS_PER_MINUTE
            + i64::from(second) * MS_PER_SECOND
            + i64::from(millisecond);
        Self(millis as i32)
    }

    /// Returns the `(hour, minute, second, millisecond)` fields, with the
    /// hour taken modulo 24.
    #[inline]
    #[must_use]
    pub fn to_fields(self) -> (u8, u8, u8, u16) {
        iso::decompose_time(i64::from(self.0))
    }
}

impl FromStr for TimeOfDay {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_time_of_day(s, 0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FormattableTime::new(i64::from(self.0), 0).write_to(f)
    }
}

// ==== UnixTimestamp ====

impl From<i64> for UnixTimestamp {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl UnixTimestamp {
    /// 1970-01-01 00:00:00
    pub const EPOCH: Self = Self(0);

    /// Returns the millisecond count.
    #[inline]
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Combines a date with a time of day.
    #[inline]
    #[must_use]
    pub fn from_date_and_time(date: UnixDate, time: TimeOfDay) -> Self {
        Self(i64::from(date.0) * MS_PER_DAY + i64::from(time.0))
    }

    /// Creates a `UnixTimestamp` from calendar and clock fields. The fields
    /// are not validated.
    #[must_use]
    pub fn from_fields(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        let date = UnixDate::from_ymd(year, month, day);
        Self(
            i64::from(date.0) * MS_PER_DAY
                + i64::from(hour) * MS_PER_HOUR
                + i64::from(minute) * MS_PER_MINUTE
                + i64::from(second) * MS_PER_SECOND,
        )
    }

    /// Splits this timestamp into its date and its time of day.
    ///
    /// Timestamps before the epoch borrow a day, so the time of day is always
    /// in `0..86_400_000`.
    #[must_use]
    pub fn to_date_and_time(self) -> (UnixDate, TimeOfDay) {
        let (days, time) = utils::epoch_ms_to_days_and_time(self.0);
        (UnixDate(days as i32), TimeOfDay(time as i32))
    }

    /// Returns the date this timestamp falls on.
    #[inline]
    #[must_use]
    pub fn date(self) -> UnixDate {
        self.to_date_and_time().0
    }

    /// Returns the time of day of this timestamp.
    #[inline]
    #[must_use]
    pub fn time_of_day(self) -> TimeOfDay {
        self.to_date_and_time().1
    }

    /// Adds a number of milliseconds.
    #[inline]
    #[must_use]
    pub const fn add_millis(self, millis: i64) -> Self {
        Self(self.0.wrapping_add(millis))
    }

    /// Rounds this timestamp to `precision` fractional second digits.
    ///
    /// Precisions of 3 and above keep the millisecond as is. Results past the
    /// `i64` range saturate.
    #[must_use]
    pub fn round(self, precision: u8, mode: RoundingMode) -> Self {
        if precision >= 3 {
            return self;
        }
        let increment = 10i128.pow(3 - u32::from(precision));
        let rounded = IncrementRounder::from_signed_num(i128::from(self.0), increment).round(mode);
        Self(i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX }))
    }

    /// Truncates this timestamp down to the start of `unit`.
    ///
    /// # Panics
    ///
    /// Panics if `unit` is neither [`TimeUnit::Year`] nor [`TimeUnit::Month`].
    #[must_use]
    pub fn floor(self, unit: TimeUnit) -> Self {
        truncate::floor_to_unit(self, unit)
    }

    /// Moves this timestamp up to the start of `unit`, unless it already is
    /// one.
    ///
    /// # Panics
    ///
    /// Panics if `unit` is neither [`TimeUnit::Year`] nor [`TimeUnit::Month`].
    #[must_use]
    pub fn ceil(self, unit: TimeUnit) -> Self {
        truncate::ceil_to_unit(self, unit)
    }
}

impl FromStr for UnixTimestamp {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_timestamp(s)
    }
}

impl fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FormattableTimestamp::new(*self, 0).write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeOfDay, UnixDate, UnixTimestamp};
    use crate::options::RoundingMode;
    use alloc::string::ToString;

    #[test]
    fn timestamp_splits_with_floor_division() {
        let (date, time) = UnixTimestamp(-1).to_date_and_time();
        assert_eq!(date, UnixDate(-1));
        assert_eq!(time, TimeOfDay(86_399_999));

        let (date, time) = UnixTimestamp(86_400_000).to_date_and_time();
        assert_eq!(date, UnixDate(1));
        assert_eq!(time, TimeOfDay(0));
    }

    #[test]
    fn from_fields() {
        let ts = UnixTimestamp::from_fields(2024, 1, 2, 3, 4, 5);
        assert_eq!(ts.to_string(), "2024-01-02 03:04:05");
        assert_eq!(
            UnixTimestamp::from_date_and_time(
                UnixDate::from_ymd(2024, 1, 2),
                TimeOfDay::from_hms_milli(3, 4, 5, 0)
            ),
            ts
        );
    }

    #[test]
    fn display_and_from_str() {
        let date: UnixDate = "2024-07-15".parse().unwrap();
        assert_eq!(date.to_string(), "2024-07-15");
        let time: TimeOfDay = "13:14:15".parse().unwrap();
        assert_eq!(time.to_string(), "13:14:15");
        assert_eq!(time.to_fields(), (13, 14, 15, 0));
        assert_eq!(UnixTimestamp(-1).to_string(), "1969-12-31 23:59:59");
    }

    #[test]
    fn round_to_precision() {
        let ts = UnixTimestamp(1_234_567);
        assert_eq!(ts.round(0, RoundingMode::HalfExpand), UnixTimestamp(1_235_000));
        assert_eq!(ts.round(1, RoundingMode::Floor), UnixTimestamp(1_234_500));
        assert_eq!(ts.round(2, RoundingMode::Ceil), UnixTimestamp(1_234_570));
        assert_eq!(ts.round(3, RoundingMode::Ceil), ts);

        let before_epoch = UnixTimestamp(-1_500);
        assert_eq!(
            before_epoch.round(0, RoundingMode::HalfExpand),
            UnixTimestamp(-2_000)
        );
        assert_eq!(
            before_epoch.round(0, RoundingMode::HalfCeil),
            UnixTimestamp(-1_000)
        );
        assert_eq!(before_epoch.round(0, RoundingMode::Trunc), UnixTimestamp(-1_000));
    }

    #[test]
    fn round_saturates_at_the_extremes() {
        let max = UnixTimestamp(i64::MAX);
        assert_eq!(max.round(0, RoundingMode::Ceil), max);
        assert_eq!(
            max.round(0, RoundingMode::Floor),
            UnixTimestamp(9_223_372_036_854_775_000)
        );
        let min = UnixTimestamp(i64::MIN);
        assert_eq!(min.round(0, RoundingMode::Floor), min);
        assert_eq!(min.round(1, RoundingMode::Expand), min);
    }
}
