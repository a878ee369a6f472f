//! Native implementation of the `temporal_sql` options.
//!
//! Units name the calendar and clock fields an operation works on, and
//! interval unit ranges name the leading and trailing field of a SQL
//! `INTERVAL` literal.

use crate::{TemporalError, TemporalResult, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
use core::{fmt, str::FromStr};

// ==== TimeUnit ====

/// The time units a date or time value is made of, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    /// The `Year` unit
    Year = 7,
    /// The `Month` unit
    Month = 6,
    /// The `Day` unit
    Day = 5,
    /// The `Hour` unit
    Hour = 4,
    /// The `Minute` unit
    Minute = 3,
    /// The `Second` unit
    Second = 2,
    /// The `Millisecond` unit
    Millisecond = 1,
}

impl TimeUnit {
    /// Returns the length of this unit in milliseconds, or `None` for the
    /// variable length calendar units.
    #[inline]
    #[must_use]
    pub const fn as_millis(&self) -> Option<i64> {
        match self {
            Self::Year | Self::Month => None,
            Self::Day => Some(MS_PER_DAY),
            Self::Hour => Some(MS_PER_HOUR),
            Self::Minute => Some(MS_PER_MINUTE),
            Self::Second => Some(MS_PER_SECOND),
            Self::Millisecond => Some(1),
        }
    }

    /// Returns whether this is a variable length calendar unit.
    #[inline]
    #[must_use]
    pub fn is_calendar_unit(&self) -> bool {
        matches!(self, Self::Year | Self::Month)
    }
}

/// A parsing error for `TimeUnit`
#[derive(Debug, Clone, Copy)]
pub struct ParseTimeUnitError;

impl fmt::Display for ParseTimeUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid TimeUnit")
    }
}

impl FromStr for TimeUnit {
    type Err = ParseTimeUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const UNITS: [(&str, TimeUnit); 7] = [
            ("year", TimeUnit::Year),
            ("month", TimeUnit::Month),
            ("day", TimeUnit::Day),
            ("hour", TimeUnit::Hour),
            ("minute", TimeUnit::Minute),
            ("second", TimeUnit::Second),
            ("millisecond", TimeUnit::Millisecond),
        ];
        let singular = s
            .strip_suffix('s')
            .or_else(|| s.strip_suffix('S'))
            .unwrap_or(s);
        UNITS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(singular))
            .map(|(_, unit)| *unit)
            .ok_or(ParseTimeUnitError)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => "YEAR",
            Self::Month => "MONTH",
            Self::Day => "DAY",
            Self::Hour => "HOUR",
            Self::Minute => "MINUTE",
            Self::Second => "SECOND",
            Self::Millisecond => "MILLISECOND",
        }
        .fmt(f)
    }
}

// ==== IntervalUnitRange ====

/// The leading and trailing fields of a SQL interval, as in
/// `INTERVAL '1 02:03' DAY TO MINUTE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnitRange {
    Year,
    YearToMonth,
    Month,
    Day,
    DayToHour,
    DayToMinute,
    DayToSecond,
    Hour,
    HourToMinute,
    HourToSecond,
    Minute,
    MinuteToSecond,
    Second,
}

impl IntervalUnitRange {
    const ALL: [Self; 13] = [
        Self::Year,
        Self::YearToMonth,
        Self::Month,
        Self::Day,
        Self::DayToHour,
        Self::DayToMinute,
        Self::DayToSecond,
        Self::Hour,
        Self::HourToMinute,
        Self::HourToSecond,
        Self::Minute,
        Self::MinuteToSecond,
        Self::Second,
    ];

    /// Returns the leading unit of the range.
    #[must_use]
    pub const fn start_unit(&self) -> TimeUnit {
        match self {
            Self::Year | Self::YearToMonth => TimeUnit::Year,
            Self::Month => TimeUnit::Month,
            Self::Day | Self::DayToHour | Self::DayToMinute | Self::DayToSecond => TimeUnit::Day,
            Self::Hour | Self::HourToMinute | Self::HourToSecond => TimeUnit::Hour,
            Self::Minute | Self::MinuteToSecond => TimeUnit::Minute,
            Self::Second => TimeUnit::Second,
        }
    }

    /// Returns the trailing unit of the range, or `None` for single unit
    /// ranges.
    #[must_use]
    pub const fn end_unit(&self) -> Option<TimeUnit> {
        match self {
            Self::YearToMonth => Some(TimeUnit::Month),
            Self::DayToHour => Some(TimeUnit::Hour),
            Self::DayToMinute | Self::HourToMinute => Some(TimeUnit::Minute),
            Self::DayToSecond | Self::HourToSecond | Self::MinuteToSecond => Some(TimeUnit::Second),
            _ => None,
        }
    }

    /// Returns the smallest unit the range displays.
    #[inline]
    #[must_use]
    pub const fn smallest_unit(&self) -> TimeUnit {
        match self.end_unit() {
            Some(unit) => unit,
            None => self.start_unit(),
        }
    }

    /// Looks up the range with the given leading and trailing units.
    #[must_use]
    pub fn of(start: TimeUnit, end: Option<TimeUnit>) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|range| range.start_unit() == start && range.end_unit() == end)
    }

    /// Returns whether this is a `YEAR`/`MONTH` range.
    #[inline]
    #[must_use]
    pub fn is_year_month(&self) -> bool {
        self.start_unit().is_calendar_unit()
    }
}

impl FromStr for IntervalUnitRange {
    type Err = TemporalError;

    /// Parses SQL spellings such as `DAY TO SECOND` or `DAY_TO_SECOND`.
    fn from_str(s: &str) -> TemporalResult<Self> {
        let invalid =
            || TemporalError::range().with_message("IntervalUnitRange not an accepted value.");
        let s = s.trim();
        let (start, end) = match split_to(s) {
            Some((start, end)) => (start, Some(end)),
            None => (s, None),
        };
        let start = start.trim().parse::<TimeUnit>().map_err(|_| invalid())?;
        let end = match end {
            Some(end) => Some(end.trim().parse::<TimeUnit>().map_err(|_| invalid())?),
            None => None,
        };
        Self::of(start, end).ok_or_else(invalid)
    }
}

fn split_to(s: &str) -> Option<(&str, &str)> {
    [" TO ", "_TO_", " to ", "_to_"]
        .into_iter()
        .find_map(|sep| s.split_once(sep))
}

impl fmt::Display for IntervalUnitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end_unit() {
            Some(end) => write!(f, "{} TO {end}", self.start_unit()),
            None => self.start_unit().fmt(f),
        }
    }
}

// ==== RoundingMode ====

/// Declares the specified `RoundingMode` for the operation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Ceil RoundingMode
    Ceil,
    /// Floor RoundingMode
    Floor,
    /// Expand RoundingMode
    Expand,
    /// Truncate RoundingMode
    Trunc,
    /// HalfCeil RoundingMode
    HalfCeil,
    /// HalfFloor RoundingMode
    HalfFloor,
    /// HalfExpand RoundingMode - Default
    #[default]
    HalfExpand,
    /// HalfTruncate RoundingMode
    HalfTrunc,
    /// HalfEven RoundingMode
    HalfEven,
}

/// The `UnsignedRoundingMode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnsignedRoundingMode {
    /// `Infinity` `RoundingMode`
    Infinity,
    /// `Zero` `RoundingMode`
    Zero,
    /// `HalfInfinity` `RoundingMode`
    HalfInfinity,
    /// `HalfZero` `RoundingMode`
    HalfZero,
    /// `HalfEven` `RoundingMode`
    HalfEven,
}

impl RoundingMode {
    #[inline]
    #[must_use]
    /// Returns the `UnsignedRoundingMode`
    pub(crate) const fn get_unsigned_round_mode(self, is_positive: bool) -> UnsignedRoundingMode {
        use RoundingMode::{
            Ceil, Expand, Floor, HalfCeil, HalfEven, HalfExpand, HalfFloor, HalfTrunc, Trunc,
        };

        match self {
            Ceil if is_positive => UnsignedRoundingMode::Infinity,
            Ceil | Trunc => UnsignedRoundingMode::Zero,
            Floor if is_positive => UnsignedRoundingMode::Zero,
            Floor | Expand => UnsignedRoundingMode::Infinity,
            HalfCeil if is_positive => UnsignedRoundingMode::HalfInfinity,
            HalfCeil | HalfTrunc => UnsignedRoundingMode::HalfZero,
            HalfFloor if is_positive => UnsignedRoundingMode::HalfZero,
            HalfFloor | HalfExpand => UnsignedRoundingMode::HalfInfinity,
            HalfEven => UnsignedRoundingMode::HalfEven,
        }
    }
}

impl FromStr for RoundingMode {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ceil" => Ok(Self::Ceil),
            "floor" => Ok(Self::Floor),
            "expand" => Ok(Self::Expand),
            "trunc" => Ok(Self::Trunc),
            "halfCeil" => Ok(Self::HalfCeil),
            "halfFloor" => Ok(Self::HalfFloor),
            "halfExpand" => Ok(Self::HalfExpand),
            "halfTrunc" => Ok(Self::HalfTrunc),
            "halfEven" => Ok(Self::HalfEven),
            _ => Err(TemporalError::range().with_message("RoundingMode not an accepted value.")),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ceil => "ceil",
            Self::Floor => "floor",
            Self::Expand => "expand",
            Self::Trunc => "trunc",
            Self::HalfCeil => "halfCeil",
            Self::HalfFloor => "halfFloor",
            Self::HalfExpand => "halfExpand",
            Self::HalfTrunc => "halfTrunc",
            Self::HalfEven => "halfEven",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{IntervalUnitRange, RoundingMode, TimeUnit};
    use alloc::string::ToString;

    #[test]
    fn unit_from_str() {
        assert_eq!("year".parse::<TimeUnit>().unwrap(), TimeUnit::Year);
        assert_eq!("MONTHS".parse::<TimeUnit>().unwrap(), TimeUnit::Month);
        assert_eq!("Second".parse::<TimeUnit>().unwrap(), TimeUnit::Second);
        assert!("week".parse::<TimeUnit>().is_err());
        assert!(TimeUnit::Year > TimeUnit::Day);
    }

    #[test]
    fn range_units() {
        let range = IntervalUnitRange::DayToSecond;
        assert_eq!(range.start_unit(), TimeUnit::Day);
        assert_eq!(range.end_unit(), Some(TimeUnit::Second));
        assert_eq!(range.smallest_unit(), TimeUnit::Second);
        assert_eq!(IntervalUnitRange::Hour.smallest_unit(), TimeUnit::Hour);
        assert_eq!(
            IntervalUnitRange::of(TimeUnit::Hour, Some(TimeUnit::Minute)),
            Some(IntervalUnitRange::HourToMinute)
        );
        assert_eq!(IntervalUnitRange::of(TimeUnit::Second, Some(TimeUnit::Day)), None);
        assert!(IntervalUnitRange::YearToMonth.is_year_month());
        assert!(!IntervalUnitRange::Day.is_year_month());
    }

    #[test]
    fn range_round_trips_through_sql_names() {
        for range in IntervalUnitRange::ALL {
            assert_eq!(range.to_string().parse::<IntervalUnitRange>().unwrap(), range);
        }
        assert_eq!(
            "DAY_TO_SECOND".parse::<IntervalUnitRange>().unwrap(),
            IntervalUnitRange::DayToSecond
        );
        assert_eq!(IntervalUnitRange::MinuteToSecond.to_string(), "MINUTE TO SECOND");
        assert!("SECOND TO DAY".parse::<IntervalUnitRange>().is_err());
    }

    #[test]
    fn rounding_mode_names() {
        assert_eq!(
            "halfExpand".parse::<RoundingMode>().unwrap(),
            RoundingMode::HalfExpand
        );
        assert_eq!(RoundingMode::HalfEven.to_string(), "halfEven");
        assert!("up".parse::<RoundingMode>().is_err());
    }
}
