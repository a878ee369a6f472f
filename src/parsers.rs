//! This module implements date and time literal parsing.
//!
//! Two independent paths exist. The splitters ([`parse_date`],
//! [`parse_time_of_day`], [`parse_timestamp`]) are lenient: they cut the text
//! on its separators and accept any integers, filling absent fields with
//! defaults. The pattern-driven parsers ([`parse_precision_literal`],
//! [`parse_date_format`]) are strict and reject out of range fields.

use core::fmt;

use writeable::Writeable;

use crate::{
    epoch::{TimeOfDay, UnixDate, UnixTimestamp},
    error::ErrorMessage,
    format::FormattableTimestamp,
    offset::UtcOffset,
    TemporalError, TemporalResult,
};

mod pattern;

pub use pattern::DatePattern;

// ==== Lenient splitters ====

fn parse_field(text: &str, msg: ErrorMessage) -> TemporalResult<i32> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| TemporalError::syntax().with_enum(msg))
}

/// Parses a `Y[-M[-D]]` date, with an absent month or day taken as 1.
///
/// Fields are not range checked, so `2024-13-01` is the first day of 2025.
/// A leading `-` is the sign of the year.
pub fn parse_date(text: &str) -> TemporalResult<UnixDate> {
    let trimmed = text.trim_start();
    let sign_len = usize::from(trimmed.starts_with('-'));
    let (year, rest) = match trimmed[sign_len..].find('-') {
        Some(hyphen) => (
            &trimmed[..sign_len + hyphen],
            Some(&trimmed[sign_len + hyphen + 1..]),
        ),
        None => (trimmed, None),
    };
    let year = parse_field(year, ErrorMessage::InvalidYear)?;
    let (month, day) = match rest {
        None => (1, 1),
        Some(rest) => match rest.split_once('-') {
            Some((month, day)) => (
                parse_field(month, ErrorMessage::InvalidMonth)?,
                parse_field(day, ErrorMessage::InvalidDay)?,
            ),
            None => (parse_field(rest, ErrorMessage::InvalidMonth)?, 1),
        },
    };
    Ok(UnixDate::from_ymd(year, month, day))
}

/// Parses an `H[:M[:S[.F]]]` time starting at byte `start` of `text`.
///
/// An absent minute or second is taken as 1, not 0. The fraction is read
/// as a plain count of milliseconds, so `.5` is 5 milliseconds.
///
/// Text before `start` is never read, even when the rest has no `:`. A
/// timestamp such as `2024-01-02 12` is therefore noon plus the defaults
/// rather than an error.
pub fn parse_time_of_day(text: &str, start: usize) -> TemporalResult<TimeOfDay> {
    let text = text
        .get(start..)
        .ok_or(TemporalError::syntax().with_enum(ErrorMessage::InvalidStartIndex))?;

    let (hour, minute, second, millisecond) = match text.split_once(':') {
        None => (parse_field(text, ErrorMessage::InvalidHour)?, 1, 1, 0),
        Some((hour, rest)) => {
            let hour = parse_field(hour, ErrorMessage::InvalidHour)?;
            match rest.split_once(':') {
                None => (hour, parse_field(rest, ErrorMessage::InvalidMinute)?, 1, 0),
                Some((minute, rest)) => {
                    let minute = parse_field(minute, ErrorMessage::InvalidMinute)?;
                    match rest.split_once('.') {
                        None => (hour, minute, parse_field(rest, ErrorMessage::InvalidSecond)?, 0),
                        Some((second, fraction)) => (
                            hour,
                            minute,
                            parse_field(second, ErrorMessage::InvalidSecond)?,
                            parse_field(fraction, ErrorMessage::InvalidFraction)?,
                        ),
                    }
                }
            }
        }
    };
    Ok(TimeOfDay::from_hms_milli(hour, minute, second, millisecond))
}

/// Parses a `date[ time]` timestamp with the lenient date and time parsers.
pub fn parse_timestamp(text: &str) -> TemporalResult<UnixTimestamp> {
    let text = text.trim();
    match text.find(' ') {
        Some(space) => {
            let date = parse_date(&text[..space])?;
            let time = parse_time_of_day(text, space + 1)?;
            Ok(UnixTimestamp::from_date_and_time(date, time))
        }
        None => Ok(parse_date(text)?.to_timestamp()),
    }
}

// ==== Strict parsing ====

/// A UTC timestamp parsed from a literal, with the number of fractional
/// second digits the literal carried (at most 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionTime {
    timestamp: UnixTimestamp,
    precision: u8,
}

impl PrecisionTime {
    #[inline]
    pub(crate) const fn new(timestamp: UnixTimestamp, precision: u8) -> Self {
        Self {
            timestamp,
            precision,
        }
    }

    #[inline]
    #[must_use]
    pub const fn timestamp(&self) -> UnixTimestamp {
        self.timestamp
    }

    /// The number of fractional second digits, in `0..=3`.
    #[inline]
    #[must_use]
    pub const fn precision(&self) -> u8 {
        self.precision
    }

    #[inline]
    #[must_use]
    pub fn date(&self) -> UnixDate {
        self.timestamp.date()
    }

    #[inline]
    #[must_use]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.timestamp.time_of_day()
    }
}

impl fmt::Display for PrecisionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FormattableTimestamp::new(self.timestamp, self.precision).write_to(f)
    }
}

fn compile_pattern(pattern: &str) -> Option<DatePattern> {
    match pattern.parse::<DatePattern>() {
        Ok(compiled) => Some(compiled),
        Err(_err) => {
            debug!("rejected date pattern {pattern:?}: {_err}");
            None
        }
    }
}

/// Checks that `pattern` is a supported date pattern.
pub fn check_date_format(pattern: &str) -> TemporalResult<()> {
    pattern.parse::<DatePattern>().map(|_| ())
}

/// Strictly parses the whole of `text` with `pattern`, reading the
/// wall-clock value in `zone` (the local offset when `None`).
#[must_use]
pub fn parse_date_format(
    text: &str,
    pattern: &str,
    zone: Option<UtcOffset>,
) -> Option<UnixTimestamp> {
    compile_pattern(pattern)?.parse(text, zone)
}

/// Strictly parses `text` with `pattern`, followed by an optional `.` and
/// fractional second digits.
///
/// Returns `None` when the pattern is invalid, a field is out of range, or
/// anything other than a fraction follows the patterned prefix.
#[must_use]
pub fn parse_precision_literal(
    text: &str,
    pattern: &str,
    zone: Option<UtcOffset>,
) -> Option<PrecisionTime> {
    compile_pattern(pattern)?.parse_precision_literal(text, zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, format, TIMESTAMP_FORMAT_STRING};
    use alloc::string::ToString;

    #[test]
    fn lenient_dates() {
        assert_eq!(parse_date("2024-07-15").unwrap(), UnixDate::from_ymd(2024, 7, 15));
        assert_eq!(parse_date(" 2024 - 7 - 5 ").unwrap(), UnixDate::from_ymd(2024, 7, 5));
        assert_eq!(parse_date("2024-07").unwrap(), UnixDate::from_ymd(2024, 7, 1));
        assert_eq!(parse_date("2024").unwrap(), UnixDate::from_ymd(2024, 1, 1));
        assert_eq!(parse_date("-0044-03-15").unwrap(), UnixDate::from_ymd(-44, 3, 15));
        // Not range checked.
        assert_eq!(parse_date("2024-13-01").unwrap(), UnixDate::from_ymd(2025, 1, 1));
    }

    #[test]
    fn lenient_date_errors() {
        for text in ["", "x", "2024-xx-01", "2024-01-01-01", "2024--01"] {
            let err = parse_date(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Syntax, "{text}");
        }
    }

    #[test]
    fn formatted_dates_parse_back() {
        for days in [-3_000_000, -719_528, -141_428, -141_427, -1, 0, 1, 19_919, 2_932_896] {
            let date = UnixDate::from(days);
            assert_eq!(parse_date(&format::format_date(date)).unwrap(), date, "{days}");
        }
    }

    #[test]
    fn lenient_time_defaults_to_one() {
        assert_eq!(parse_time_of_day("12", 0).unwrap().as_i32(), 43_261_000);
        assert_eq!(parse_time_of_day("12:30", 0).unwrap().as_i32(), 45_001_000);
        assert_eq!(parse_time_of_day("12:30:15", 0).unwrap().as_i32(), 45_015_000);
        // The fraction is a raw millisecond count.
        assert_eq!(parse_time_of_day("00:00:00.5", 0).unwrap().as_i32(), 5);
        assert_eq!(parse_time_of_day("00:00:01.250", 0).unwrap().as_i32(), 1_250);
    }

    #[test]
    fn lenient_time_with_start() {
        assert_eq!(parse_time_of_day("xx01:02:03", 2).unwrap().as_i32(), 3_723_000);
        assert_eq!(parse_time_of_day("xx07", 2).unwrap().as_i32(), 25_261_000);
        assert!(parse_time_of_day("07", 5).is_err());
        assert!(parse_time_of_day("01:02:03:04", 0).is_err());
    }

    #[test]
    fn hour_only_time_ignores_the_date_prefix() {
        let text = "2024-01-02 12";
        assert_eq!(parse_time_of_day(text, 11).unwrap().as_i32(), 43_261_000);
        assert_eq!(
            parse_timestamp(text).unwrap(),
            UnixTimestamp::from_fields(2024, 1, 2, 12, 1, 1)
        );
        assert!(parse_time_of_day(text, 0).is_err());
    }

    #[test]
    fn lenient_timestamps() {
        assert_eq!(parse_timestamp("1969-12-31 23:59:59").unwrap().as_i64(), -1_000);
        assert_eq!(
            parse_timestamp("  2024-01-02 03:04:05.6  ").unwrap(),
            UnixTimestamp::from_fields(2024, 1, 2, 3, 4, 5).add_millis(6)
        );
        assert_eq!(
            parse_timestamp("2024-01-02").unwrap(),
            UnixTimestamp::from_fields(2024, 1, 2, 0, 0, 0)
        );
        assert!(parse_timestamp("2024-01-02 noon").is_err());
    }

    #[test]
    fn precision_literals() {
        let parsed = parse_precision_literal(
            "2024-01-02 03:04:05.12",
            TIMESTAMP_FORMAT_STRING,
            Some(UtcOffset::UTC),
        )
        .unwrap();
        assert_eq!(parsed.precision(), 2);
        assert_eq!(parsed.timestamp().as_i64().rem_euclid(1_000), 120);
        assert_eq!(
            parsed.timestamp(),
            UnixTimestamp::from_fields(2024, 1, 2, 3, 4, 5).add_millis(120)
        );
        assert_eq!(parsed.to_string(), "2024-01-02 03:04:05.12");

        let cases = [
            ("2024-01-02 03:04:05", 0, 0),
            ("2024-01-02 03:04:05.", 0, 0),
            ("2024-01-02 03:04:05.1", 1, 100),
            ("2024-01-02 03:04:05.123", 3, 123),
            ("2024-01-02 03:04:05.1234", 3, 123),
            ("2024-01-02 03:04:05.1235", 3, 124),
            ("2024-01-02 03:04:05.9999", 3, 1_000),
            ("2024-01-02 03:04:05.000000000000000000001", 3, 0),
        ];
        let base = UnixTimestamp::from_fields(2024, 1, 2, 3, 4, 5);
        for (text, precision, millis) in cases {
            let parsed =
                parse_precision_literal(text, TIMESTAMP_FORMAT_STRING, Some(UtcOffset::UTC))
                    .unwrap();
            assert_eq!(parsed.precision(), precision, "{text}");
            assert_eq!(parsed.timestamp(), base.add_millis(millis), "{text}");
        }
    }

    #[test]
    fn precision_literal_rejections() {
        for text in [
            "2024-13-02 03:04:05",
            "2024-02-30 03:04:05",
            "2024-01-02 24:00:00",
            "2024-01-02 03:04:05x",
            "2024-01-02 03:04:05.12a",
            "2024-01-02 03:04:05.-1",
            "2024-01-02",
        ] {
            assert_eq!(
                parse_precision_literal(text, TIMESTAMP_FORMAT_STRING, Some(UtcOffset::UTC)),
                None,
                "{text}"
            );
        }
        assert_eq!(parse_precision_literal("2024", "yyyyQ", None), None);
    }

    #[test]
    fn zone_shifts_to_utc() {
        let zone = "+05:30".parse::<UtcOffset>().unwrap();
        let parsed =
            parse_precision_literal("2024-01-02 05:30:00", TIMESTAMP_FORMAT_STRING, Some(zone))
                .unwrap();
        assert_eq!(parsed.timestamp(), UnixTimestamp::from_fields(2024, 1, 2, 0, 0, 0));
        assert_eq!(parsed.date(), UnixDate::from_ymd(2024, 1, 2));
        assert_eq!(parsed.time_of_day(), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn full_string_date_format() {
        assert_eq!(
            parse_date_format("2024-07-15", crate::DATE_FORMAT_STRING, Some(UtcOffset::UTC)),
            Some(UnixDate::from_ymd(2024, 7, 15).to_timestamp())
        );
        assert_eq!(
            parse_date_format("2024-07-15 ", crate::DATE_FORMAT_STRING, Some(UtcOffset::UTC)),
            None
        );
        assert!(check_date_format("yyyy-MM-dd'T'HH:mm:ss.SSS").is_ok());
        assert_eq!(
            check_date_format("yyyy-MM-dd EEE").unwrap_err().kind(),
            ErrorKind::Syntax
        );
    }
}
