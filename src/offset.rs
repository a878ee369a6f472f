//! Fixed UTC offsets.
//!
//! Only numeric offsets are supported. There is no time zone database, so
//! an offset never changes with the date.

use core::{fmt, str::FromStr};

use writeable::Writeable;

use crate::{error::ErrorMessage, format::FormattableOffset, TemporalError, TemporalResult};

const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// A fixed offset from UTC, in seconds east of Greenwich.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// The zero offset.
    pub const UTC: Self = Self(0);

    /// Creates an offset of `seconds` east of UTC, which must be within
    /// `±18:00`.
    pub fn from_seconds(seconds: i32) -> TemporalResult<Self> {
        if !(-MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS).contains(&seconds) {
            return Err(TemporalError::range().with_enum(ErrorMessage::OffsetOutOfRange));
        }
        Ok(Self(seconds))
    }

    #[inline]
    #[must_use]
    pub const fn seconds(self) -> i32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0 as i64 * 1_000
    }

    /// Returns the process-wide local offset.
    ///
    /// The offset is read once from the `TZ` environment variable when that
    /// holds a fixed offset such as `+05:30` or `UTC-3`; anything else, and
    /// builds without `std`, give UTC.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn local() -> Self {
        static LOCAL: std::sync::OnceLock<UtcOffset> = std::sync::OnceLock::new();
        *LOCAL.get_or_init(|| {
            let offset = std::env::var("TZ")
                .ok()
                .and_then(|tz| match tz.parse::<UtcOffset>() {
                    Ok(offset) => Some(offset),
                    Err(_err) => {
                        trace!("TZ value {tz:?} is not a fixed offset: {_err}");
                        None
                    }
                })
                .unwrap_or(Self::UTC);
            debug!("local UTC offset initialized to {offset}");
            offset
        })
    }

    /// Returns the process-wide local offset, which is UTC without `std`.
    #[cfg(not(feature = "std"))]
    #[must_use]
    pub fn local() -> Self {
        Self::UTC
    }
}

fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

/// Reads one or two leading ASCII digits.
fn take_field(bytes: &[u8], max_digits: usize) -> Option<(i32, &[u8])> {
    let len = bytes
        .iter()
        .take(max_digits)
        .take_while(|b| b.is_ascii_digit())
        .count();
    if len == 0 {
        return None;
    }
    let value = bytes[..len]
        .iter()
        .fold(0, |acc, b| acc * 10 + i32::from(b - b'0'));
    Some((value, &bytes[len..]))
}

impl FromStr for UtcOffset {
    type Err = TemporalError;

    /// Parses `Z`, `UTC`, `GMT` or `±HH[[:]MM[[:]SS]]`, the latter optionally
    /// prefixed by `UTC` or `GMT`.
    fn from_str(s: &str) -> TemporalResult<Self> {
        let invalid = || TemporalError::syntax().with_enum(ErrorMessage::InvalidOffset);
        let s = s.trim();
        if s.eq_ignore_ascii_case("z") {
            return Ok(Self::UTC);
        }
        let rest = strip_prefix_ignore_ascii_case(s, "UTC")
            .or_else(|| strip_prefix_ignore_ascii_case(s, "GMT"))
            .unwrap_or(s);
        if rest.is_empty() && !s.is_empty() {
            return Ok(Self::UTC);
        }

        let (sign, body) = match rest.as_bytes() {
            [b'+', body @ ..] => (1, body),
            [b'-', body @ ..] => (-1, body),
            _ => return Err(invalid()),
        };

        let (hour, mut cursor) = take_field(body, 2).ok_or_else(invalid)?;
        let mut minute = 0;
        let mut second = 0;
        // Minutes and seconds are always two digits.
        for field in [&mut minute, &mut second] {
            if cursor.is_empty() {
                break;
            }
            if let [b':', tail @ ..] = cursor {
                cursor = tail;
            }
            let (value, tail) = take_field(cursor, 2).ok_or_else(invalid)?;
            if value > 59 || cursor.len() - tail.len() != 2 {
                return Err(invalid());
            }
            *field = value;
            cursor = tail;
        }
        if !cursor.is_empty() {
            return Err(invalid());
        }

        Self::from_seconds(sign * (hour * 3600 + minute * 60 + second))
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FormattableOffset::from(*self).write_to(f)
    }
}
