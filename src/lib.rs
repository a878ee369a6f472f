//! The `temporal_sql` crate implements the calendar arithmetic and the fixed
//! textual formats behind SQL `DATE`, `TIME`, `TIMESTAMP` and `INTERVAL`
//! values.
//!
//! ```rust
//! use temporal_sql::{UnixDate, UnixTimestamp};
//! use temporal_sql::options::{IntervalUnitRange, TimeUnit};
//! use temporal_sql::format::format_interval_day_time;
//!
//! let date: UnixDate = "2024-07-15".parse().unwrap();
//! assert_eq!(date.floor(TimeUnit::Month).to_string(), "2024-07-01");
//! assert_eq!(date.ceil(TimeUnit::Month).to_string(), "2024-08-01");
//!
//! let ts: UnixTimestamp = "1969-12-31 23:59:59".parse().unwrap();
//! assert_eq!(ts.as_i64(), -1_000);
//!
//! assert_eq!(
//!     format_interval_day_time(90_125_000, IntervalUnitRange::DayToSecond, 0),
//!     "+1 01:02:05"
//! );
//! ```
//!
//! Values are plain integers: a [`UnixDate`] counts days since 1970-01-01
//! and a [`UnixTimestamp`] counts milliseconds since 1970-01-01T00:00:00Z.
//! Calendar fields are only ever derived from them through the Julian day
//! number, using the proleptic Julian calendar before 1582-10-15 and the
//! Gregorian calendar from then on.
//!
//! Two parsing paths exist. The lenient splitters in [`parsers`] accept
//! whatever fits the `Y-M-D h:m:s.f` shape, while
//! [`parsers::parse_precision_literal`] runs a strict, pattern-driven parse
//! that rejects out of range fields and records the number of fractional
//! second digits.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod logging;

pub mod error;
pub mod format;
pub mod iso;
pub mod offset;
pub mod options;
pub mod parsers;
pub mod truncate;

mod epoch;

#[doc(hidden)]
pub(crate) mod rounding;
#[doc(hidden)]
pub(crate) mod utils;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::TemporalError;

/// The `temporal_sql` result type
pub type TemporalResult<T> = Result<T, TemporalError>;

pub use crate::{
    epoch::{JulianDay, TimeOfDay, UnixDate, UnixTimestamp},
    iso::CalendarDate,
    offset::UtcOffset,
    parsers::PrecisionTime,
};

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i64> for Sign {
    fn from(value: i64) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl Sign {
    /// Returns the character a signed SQL literal starts with. Zero is
    /// written as positive.
    pub(crate) fn as_char(self) -> char {
        match self {
            Self::Negative => '-',
            _ => '+',
        }
    }
}

// Relevant numeric constants
/// Milliseconds per second constant.
pub const MS_PER_SECOND: i64 = 1_000;
/// Milliseconds per minute constant.
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds per hour constant.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
/// The Julian day number of the Unix epoch, 1970-01-01.
pub const EPOCH_JULIAN: i32 = 2_440_588;
/// The first Julian day of the Gregorian calendar, 1582-10-15.
pub const GREGORIAN_CUTOVER_JULIAN: i32 = 2_299_161;

/// The pattern of a canonical date literal, `yyyy-MM-dd`.
pub const DATE_FORMAT_STRING: &str = "yyyy-MM-dd";
/// The pattern of a canonical time literal, `HH:mm:ss`.
pub const TIME_FORMAT_STRING: &str = "HH:mm:ss";
/// The pattern of a canonical timestamp literal, `yyyy-MM-dd HH:mm:ss`.
pub const TIMESTAMP_FORMAT_STRING: &str = "yyyy-MM-dd HH:mm:ss";
