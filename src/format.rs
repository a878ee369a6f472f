//! Formatting of date, time, timestamp and interval literals.
//!
//! Every formatter is a [`Writeable`], so values can be written straight
//! into any `core::fmt::Write` sink; the `format_*` functions are the
//! allocating conveniences.

use alloc::string::String;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    epoch::{TimeOfDay, UnixDate, UnixTimestamp},
    iso::{self, CalendarDate},
    offset::UtcOffset,
    options::{IntervalUnitRange, RoundingMode, TimeUnit},
    rounding::IncrementRounder,
    Sign, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};

// ==== Padding helpers ====

/// Returns the number of decimal digits in `value`.
#[inline]
#[must_use]
pub fn digit_count(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |n| n as usize + 1)
}

/// Writes `value` zero-padded to at least `width` digits. Wider values are
/// written in full.
pub fn write_padded<W: core::fmt::Write + ?Sized>(
    value: u64,
    width: usize,
    sink: &mut W,
) -> core::fmt::Result {
    for _ in digit_count(value)..width {
        sink.write_char('0')?;
    }
    value.write_to(sink)
}

/// Returns `value` zero-padded to at least `width` digits.
#[must_use]
pub fn pad_number(value: u64, width: usize) -> String {
    Padded { value, width }.to_string()
}

#[derive(Debug)]
struct Padded {
    value: u64,
    width: usize,
}

impl Writeable for Padded {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded(self.value, self.width, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(digit_count(self.value).max(self.width))
    }
}

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

/// Writes `precision` fraction digits of a millisecond value. Digits past the
/// third are always zero.
fn write_fraction<W: core::fmt::Write + ?Sized>(
    millisecond: u16,
    precision: u8,
    sink: &mut W,
) -> core::fmt::Result {
    if precision <= 3 {
        let divisor = 10u64.pow(3 - u32::from(precision));
        write_padded(u64::from(millisecond) / divisor, usize::from(precision), sink)
    } else {
        write_padded(u64::from(millisecond), 3, sink)?;
        for _ in 3..precision {
            sink.write_char('0')?;
        }
        Ok(())
    }
}

// ==== Dates ====

/// A `YYYY-MM-DD` date.
#[derive(Debug)]
pub struct FormattableDate(pub i32, pub u8, pub u8);

impl From<CalendarDate> for FormattableDate {
    fn from(value: CalendarDate) -> Self {
        Self(value.year, value.month, value.day)
    }
}

impl From<UnixDate> for FormattableDate {
    fn from(value: UnixDate) -> Self {
        Self::from(value.to_calendar_date())
    }
}

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = digit_count(u64::from(self.0.unsigned_abs())).max(4)
            + usize::from(self.0 < 0);
        LengthHint::exact(6 + year_length)
    }
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if year < 0 {
        sink.write_char('-')?;
    }
    write_padded(u64::from(year.unsigned_abs()), 4, sink)
}

// ==== Times ====

/// An `HH:MM:SS[.f]` time of day.
///
/// Millisecond values outside of a day wrap around, so the hour field is
/// always in `0..24`.
#[derive(Debug)]
pub struct FormattableTime {
    millis: i64,
    precision: u8,
}

impl FormattableTime {
    /// Creates a time with `precision` fraction digits; 0 writes none.
    #[inline]
    #[must_use]
    pub const fn new(millis: i64, precision: u8) -> Self {
        Self { millis, precision }
    }
}

impl From<TimeOfDay> for FormattableTime {
    fn from(value: TimeOfDay) -> Self {
        Self::new(i64::from(value.as_i32()), 0)
    }
}

impl Writeable for FormattableTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let (hour, minute, second, millisecond) = iso::decompose_time(self.millis);
        write_padded_u8(hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(minute, sink)?;
        sink.write_char(':')?;
        write_padded_u8(second, sink)?;
        if self.precision == 0 {
            return Ok(());
        }
        sink.write_char('.')?;
        write_fraction(millisecond, self.precision, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.precision == 0 {
            return LengthHint::exact(8);
        }
        LengthHint::exact(9 + usize::from(self.precision))
    }
}

// ==== Timestamps ====

/// A `YYYY-MM-DD HH:MM:SS[.f]` timestamp.
#[derive(Debug)]
pub struct FormattableTimestamp {
    date: FormattableDate,
    time: FormattableTime,
}

impl FormattableTimestamp {
    #[must_use]
    pub fn new(timestamp: UnixTimestamp, precision: u8) -> Self {
        let (date, time) = timestamp.to_date_and_time();
        Self {
            date: FormattableDate::from(date),
            time: FormattableTime::new(i64::from(time.as_i32()), precision),
        }
    }
}

impl Writeable for FormattableTimestamp {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.date.write_to(sink)?;
        sink.write_char(' ')?;
        self.time.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.date.writeable_length_hint() + self.time.writeable_length_hint() + 1
    }
}

// ==== Intervals ====

/// A year-month interval: `[+-]Y`, `[+-]Y-MM` or `[+-]M`.
#[derive(Debug)]
pub struct FormattableIntervalYearMonth {
    months: i32,
    range: IntervalUnitRange,
}

impl FormattableIntervalYearMonth {
    /// # Panics
    ///
    /// Panics if `range` is not `YEAR`, `YEAR TO MONTH` or `MONTH`.
    #[must_use]
    pub fn new(months: i32, range: IntervalUnitRange) -> Self {
        if !range.is_year_month() {
            unsupported_unit!("year-month interval formatting", range);
        }
        Self { months, range }
    }
}

impl Writeable for FormattableIntervalYearMonth {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let months = i64::from(self.months);
        sink.write_char(Sign::from(months).as_char())?;
        let magnitude = months.abs();
        match self.range {
            IntervalUnitRange::Year => {
                let rounded =
                    IncrementRounder::from_signed_num(magnitude, 12).round(RoundingMode::HalfExpand);
                (rounded / 12).write_to(sink)
            }
            IntervalUnitRange::YearToMonth => {
                (magnitude / 12).write_to(sink)?;
                sink.write_char('-')?;
                write_padded((magnitude % 12) as u64, 2, sink)
            }
            _ => magnitude.write_to(sink),
        }
    }
}

/// The clock fields of a day-time interval with their length in
/// milliseconds and the count that makes up the next larger field.
const DAY_TIME_FIELDS: [(TimeUnit, i128, i128); 4] = [
    (TimeUnit::Day, MS_PER_DAY as i128, 0),
    (TimeUnit::Hour, MS_PER_HOUR as i128, 24),
    (TimeUnit::Minute, MS_PER_MINUTE as i128, 60),
    (TimeUnit::Second, MS_PER_SECOND as i128, 60),
];

/// A day-time interval such as `+1 01:02:05.250`, `-12:30` or `+90`.
#[derive(Debug)]
pub struct FormattableIntervalDayTime {
    millis: i64,
    range: IntervalUnitRange,
    scale: u8,
}

impl FormattableIntervalDayTime {
    /// # Panics
    ///
    /// Panics if `range` is a year-month range.
    #[must_use]
    pub fn new(millis: i64, range: IntervalUnitRange, scale: u8) -> Self {
        if range.is_year_month() {
            unsupported_unit!("day-time interval formatting", range);
        }
        Self {
            millis,
            range,
            scale,
        }
    }

    fn rounding_increment(&self) -> i128 {
        match self.range.smallest_unit() {
            TimeUnit::Second if self.scale >= 3 => 1,
            TimeUnit::Second => 10i128.pow(3 - u32::from(self.scale)),
            unit => unit.as_millis().map_or(1, i128::from),
        }
    }
}

impl Writeable for FormattableIntervalDayTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_char(Sign::from(self.millis).as_char())?;
        let magnitude = i128::from(self.millis).abs();
        let rounded = IncrementRounder::from_signed_num(magnitude, self.rounding_increment())
            .round(RoundingMode::HalfExpand);

        let start = self.range.start_unit();
        let end = self.range.smallest_unit();
        let mut previous = None;
        for (unit, unit_ms, modulus) in DAY_TIME_FIELDS {
            if unit > start || unit < end {
                continue;
            }
            match previous {
                None => (rounded / unit_ms).write_to(sink)?,
                Some(previous) => {
                    let separator = if previous == TimeUnit::Day { ' ' } else { ':' };
                    sink.write_char(separator)?;
                    write_padded(((rounded / unit_ms) % modulus) as u64, 2, sink)?;
                }
            }
            previous = Some(unit);
        }

        if end == TimeUnit::Second && self.scale > 0 {
            sink.write_char('.')?;
            write_fraction((rounded % 1000) as u16, self.scale, sink)?;
        }
        Ok(())
    }
}

// ==== Offsets ====

/// A `+HH:MM[:SS]` UTC offset.
#[derive(Debug)]
pub struct FormattableOffset {
    sign: Sign,
    hour: u8,
    minute: u8,
    second: u8,
}

impl From<UtcOffset> for FormattableOffset {
    fn from(value: UtcOffset) -> Self {
        let seconds = value.seconds();
        let magnitude = seconds.unsigned_abs();
        Self {
            sign: Sign::from(i64::from(seconds)),
            hour: (magnitude / 3600) as u8,
            minute: (magnitude / 60 % 60) as u8,
            second: (magnitude % 60) as u8,
        }
    }
}

impl Writeable for FormattableOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_char(self.sign.as_char())?;
        write_padded_u8(self.hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute, sink)?;
        if self.second == 0 {
            return Ok(());
        }
        sink.write_char(':')?;
        write_padded_u8(self.second, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.second == 0 {
            return LengthHint::exact(6);
        }
        LengthHint::exact(9)
    }
}

impl_display_with_writeable!(Padded);
impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(FormattableTime);
impl_display_with_writeable!(FormattableTimestamp);
impl_display_with_writeable!(FormattableIntervalYearMonth);
impl_display_with_writeable!(FormattableIntervalDayTime);
impl_display_with_writeable!(FormattableOffset);

// ==== Convenience functions ====

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: UnixDate) -> String {
    FormattableDate::from(date).to_string()
}

/// Formats a time of day as `HH:MM:SS`, dropping the milliseconds.
#[must_use]
pub fn format_time_of_day(time: TimeOfDay) -> String {
    FormattableTime::from(time).to_string()
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`, dropping the milliseconds.
#[must_use]
pub fn format_timestamp(timestamp: UnixTimestamp) -> String {
    FormattableTimestamp::new(timestamp, 0).to_string()
}

/// Formats a timestamp with `precision` fraction digits.
#[must_use]
pub fn format_timestamp_with_precision(timestamp: UnixTimestamp, precision: u8) -> String {
    FormattableTimestamp::new(timestamp, precision).to_string()
}

/// Formats a count of months as a year-month interval.
///
/// # Panics
///
/// Panics if `range` is not a year-month range.
#[must_use]
pub fn format_interval_year_month(months: i32, range: IntervalUnitRange) -> String {
    FormattableIntervalYearMonth::new(months, range).to_string()
}

/// Formats a count of milliseconds as a day-time interval with `scale`
/// fraction digits.
///
/// # Panics
///
/// Panics if `range` is a year-month range.
#[must_use]
pub fn format_interval_day_time(millis: i64, range: IntervalUnitRange, scale: u8) -> String {
    FormattableIntervalDayTime::new(millis, range, scale).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding() {
        assert_eq!(pad_number(7, 2), "07");
        assert_eq!(pad_number(123, 2), "123");
        assert_eq!(pad_number(0, 4), "0000");
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn dates() {
        assert_eq!(format_date(UnixDate::EPOCH), "1970-01-01");
        assert_eq!(format_date(UnixDate::from_ymd(12, 3, 4)), "0012-03-04");
        assert_eq!(format_date(UnixDate::from_ymd(-44, 3, 15)), "-0044-03-15");
        assert_eq!(format_date(UnixDate::from_ymd(123_456, 1, 1)), "123456-01-01");
        let date = FormattableDate(-44, 3, 15);
        assert_eq!(date.writeable_length_hint(), LengthHint::exact(11));
    }

    #[test]
    fn times() {
        assert_eq!(format_time_of_day(TimeOfDay::from(45_296_789)), "12:34:56");
        assert_eq!(FormattableTime::new(45_296_789, 1).to_string(), "12:34:56.7");
        assert_eq!(FormattableTime::new(45_296_009, 3).to_string(), "12:34:56.009");
        assert_eq!(FormattableTime::new(45_296_009, 5).to_string(), "12:34:56.00900");
    }

    #[test]
    fn timestamps_before_the_epoch() {
        let ts = UnixTimestamp::from(-1);
        assert_eq!(format_timestamp(ts), "1969-12-31 23:59:59");
        assert_eq!(
            format_timestamp_with_precision(ts, 3),
            "1969-12-31 23:59:59.999"
        );
        assert_eq!(
            format_timestamp_with_precision(UnixTimestamp::from(1_500), 2),
            "1970-01-01 00:00:01.50"
        );
    }

    #[test]
    fn year_month_intervals() {
        assert_eq!(format_interval_year_month(18, IntervalUnitRange::Year), "+2");
        assert_eq!(format_interval_year_month(17, IntervalUnitRange::Year), "+1");
        assert_eq!(format_interval_year_month(-18, IntervalUnitRange::Year), "-2");
        assert_eq!(
            format_interval_year_month(14, IntervalUnitRange::YearToMonth),
            "+1-02"
        );
        assert_eq!(
            format_interval_year_month(-3, IntervalUnitRange::YearToMonth),
            "-0-03"
        );
        assert_eq!(format_interval_year_month(-7, IntervalUnitRange::Month), "-7");
        assert_eq!(format_interval_year_month(0, IntervalUnitRange::Month), "+0");
    }

    #[test]
    fn day_time_intervals() {
        let cases = [
            (90_125_000, IntervalUnitRange::DayToSecond, 0, "+1 01:02:05"),
            (90_125_250, IntervalUnitRange::DayToSecond, 3, "+1 01:02:05.250"),
            (90_125_250, IntervalUnitRange::DayToSecond, 1, "+1 01:02:05.3"),
            (90_125_250, IntervalUnitRange::DayToSecond, 4, "+1 01:02:05.2500"),
            (-90_125_000, IntervalUnitRange::DayToMinute, 0, "-1 01:02"),
            (90_125_000, IntervalUnitRange::DayToHour, 0, "+1 01"),
            (90_125_000, IntervalUnitRange::Day, 0, "+1"),
            (129_600_000, IntervalUnitRange::Day, 0, "+2"),
            (90_125_000, IntervalUnitRange::Hour, 0, "+25"),
            (90_125_000, IntervalUnitRange::HourToMinute, 0, "+25:02"),
            (90_125_000, IntervalUnitRange::HourToSecond, 0, "+25:02:05"),
            (90_125_000, IntervalUnitRange::Minute, 0, "+1502"),
            (90_125_000, IntervalUnitRange::MinuteToSecond, 0, "+1502:05"),
            (90_125_500, IntervalUnitRange::Second, 0, "+90126"),
            (59_999, IntervalUnitRange::MinuteToSecond, 0, "+1:00"),
            (0, IntervalUnitRange::Second, 2, "+0.00"),
        ];
        for (millis, range, scale, expected) in cases {
            assert_eq!(
                format_interval_day_time(millis, range, scale),
                expected,
                "{millis} {range} {scale}"
            );
        }
        // The magnitude of the most negative value is representable.
        assert!(format_interval_day_time(i64::MIN, IntervalUnitRange::Second, 3).starts_with('-'));
    }

    #[test]
    #[should_panic]
    fn year_range_is_not_a_day_time_range() {
        let _ = format_interval_day_time(1, IntervalUnitRange::Year, 0);
    }

    #[test]
    #[should_panic]
    fn day_range_is_not_a_year_month_range() {
        let _ = format_interval_year_month(1, IntervalUnitRange::Day);
    }

    #[test]
    fn offsets() {
        let offset = UtcOffset::from_seconds(-(5 * 3600 + 30 * 60)).unwrap();
        assert_eq!(FormattableOffset::from(offset).to_string(), "-05:30");
        let offset = UtcOffset::from_seconds(3600 + 1).unwrap();
        assert_eq!(FormattableOffset::from(offset).to_string(), "+01:00:01");
        assert_eq!(FormattableOffset::from(UtcOffset::UTC).to_string(), "+00:00");
    }
}
