//! Strict parsing driven by `SimpleDateFormat` style patterns.

use alloc::vec::Vec;
use core::str::FromStr;

use crate::{
    epoch::{TimeOfDay, UnixDate, UnixTimestamp},
    error::ErrorMessage,
    iso,
    offset::UtcOffset,
    parsers::PrecisionTime,
    TemporalError, TemporalResult,
};

/// The most digits a field that does not abut another field reads.
const MAX_FIELD_DIGITS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Field {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'y' => Some(Self::Year),
            'M' => Some(Self::Month),
            'd' => Some(Self::Day),
            'H' => Some(Self::Hour),
            'm' => Some(Self::Minute),
            's' => Some(Self::Second),
            'S' => Some(Self::Millisecond),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternItem {
    Field { field: Field, width: usize },
    Literal(char),
}

/// A compiled date pattern such as `yyyy-MM-dd HH:mm:ss`.
///
/// Supported letters are `y`, `M`, `d`, `H`, `m`, `s` and `S`. Text inside
/// single quotes is literal and `''` stands for a single quote. Characters
/// other than ASCII letters are always literal.
///
/// Every other unquoted ASCII letter fails to compile, including the
/// `SimpleDateFormat` letters for text and zone fields (`G`, `E`, `u`, `a`,
/// `z`, `Z`, `X`), week fields (`w`, `W`, `F`, `D`, `Y`), stand-alone months
/// (`L`) and the 12 hour and 1-based hours (`h`, `K`, `k`). Quote them to
/// match them literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    items: Vec<PatternItem>,
}

impl FromStr for DatePattern {
    type Err = TemporalError;

    fn from_str(s: &str) -> TemporalResult<Self> {
        let mut items = Vec::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.next_if_eq(&'\'').is_some() {
                    items.push(PatternItem::Literal('\''));
                    continue;
                }
                loop {
                    match chars.next() {
                        None => {
                            return Err(TemporalError::syntax().with_enum(ErrorMessage::UnterminatedQuote))
                        }
                        Some('\'') if chars.next_if_eq(&'\'').is_some() => {
                            items.push(PatternItem::Literal('\''));
                        }
                        Some('\'') => break,
                        Some(quoted) => items.push(PatternItem::Literal(quoted)),
                    }
                }
            } else if c.is_ascii_alphabetic() {
                let field = Field::from_letter(c).ok_or(
                    TemporalError::syntax().with_enum(ErrorMessage::UnsupportedPatternLetter),
                )?;
                let mut width = 1;
                while chars.next_if_eq(&c).is_some() {
                    width += 1;
                }
                items.push(PatternItem::Field { field, width });
            } else {
                items.push(PatternItem::Literal(c));
            }
        }
        Ok(Self { items })
    }
}

/// Field values read so far, starting from 1970-01-01 00:00:00.000.
#[derive(Debug)]
struct ParsedFields {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
    millisecond: i32,
}

impl Default for ParsedFields {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }
}

impl ParsedFields {
    fn set(&mut self, field: Field, value: i32) {
        let slot = match field {
            Field::Year => &mut self.year,
            Field::Month => &mut self.month,
            Field::Day => &mut self.day,
            Field::Hour => &mut self.hour,
            Field::Minute => &mut self.minute,
            Field::Second => &mut self.second,
            Field::Millisecond => &mut self.millisecond,
        };
        *slot = value;
    }

    fn is_valid(&self) -> bool {
        iso::is_valid_date(self.year, self.month, self.day)
            && (0..=23).contains(&self.hour)
            && (0..=59).contains(&self.minute)
            && (0..=59).contains(&self.second)
            && (0..=999).contains(&self.millisecond)
    }

    fn to_timestamp(&self) -> UnixTimestamp {
        UnixTimestamp::from_date_and_time(
            UnixDate::from_ymd(self.year, self.month, self.day),
            TimeOfDay::from_hms_milli(self.hour, self.minute, self.second, self.millisecond),
        )
    }
}

/// Reads an unsigned decimal number from the start of `bytes`: exactly
/// `width` digits when given, otherwise as many as are present up to
/// [`MAX_FIELD_DIGITS`]. Returns the value and the digit count.
fn read_number(bytes: &[u8], width: Option<usize>) -> Option<(i32, usize)> {
    let len = match width {
        Some(width) => {
            let digits = bytes.get(..width)?;
            if !digits.iter().all(u8::is_ascii_digit) {
                return None;
            }
            width
        }
        None => bytes
            .iter()
            .take(MAX_FIELD_DIGITS)
            .take_while(|b| b.is_ascii_digit())
            .count(),
    };
    if len == 0 {
        return None;
    }
    let value = bytes[..len].iter().try_fold(0i32, |acc, b| {
        acc.checked_mul(10)?.checked_add(i32::from(b - b'0'))
    })?;
    Some((value, len))
}

/// Converts a string of ASCII digits into milliseconds, rounding half up
/// past the third digit.
fn fraction_to_millis(digits: &[u8]) -> i64 {
    let mut millis = 0;
    for index in 0..3 {
        let digit = digits.get(index).map_or(0, |b| i64::from(b - b'0'));
        millis = millis * 10 + digit;
    }
    if digits.get(3).is_some_and(|b| *b >= b'5') {
        millis += 1;
    }
    millis
}

impl DatePattern {
    /// Parses the longest prefix of `text` matching this pattern.
    ///
    /// The fields are read as wall-clock values in `zone`, or in the local
    /// offset when `zone` is `None`, and converted to UTC. Returns the
    /// timestamp and the byte index just past the consumed prefix.
    #[must_use]
    pub fn parse_prefix(&self, text: &str, zone: Option<UtcOffset>) -> Option<(UnixTimestamp, usize)> {
        let bytes = text.as_bytes();
        let mut position = 0;
        let mut fields = ParsedFields::default();

        for (index, item) in self.items.iter().enumerate() {
            match *item {
                PatternItem::Literal(expected) => {
                    if !text[position..].starts_with(expected) {
                        debug!("expected {expected:?} at byte {position} of {text:?}");
                        return None;
                    }
                    position += expected.len_utf8();
                }
                PatternItem::Field { field, width } => {
                    let abuts_field = matches!(
                        self.items.get(index + 1),
                        Some(PatternItem::Field { .. })
                    );
                    let Some((value, len)) =
                        read_number(&bytes[position..], abuts_field.then_some(width))
                    else {
                        debug!("expected {field:?} digits at byte {position} of {text:?}");
                        return None;
                    };
                    fields.set(field, value);
                    position += len;
                }
            }
        }

        if !fields.is_valid() {
            debug!("out of range fields {fields:?} in {text:?}");
            return None;
        }

        let offset = zone.unwrap_or_else(UtcOffset::local);
        Some((fields.to_timestamp().add_millis(-offset.millis()), position))
    }

    /// Parses `text`, which must match this pattern in full.
    #[must_use]
    pub fn parse(&self, text: &str, zone: Option<UtcOffset>) -> Option<UnixTimestamp> {
        let (timestamp, end) = self.parse_prefix(text, zone)?;
        (end == text.len()).then_some(timestamp)
    }

    /// Parses `text` as this pattern followed by an optional `.` and
    /// fractional second digits.
    ///
    /// The precision is the digit count capped at 3; further digits round
    /// the millisecond half up.
    #[must_use]
    pub fn parse_precision_literal(
        &self,
        text: &str,
        zone: Option<UtcOffset>,
    ) -> Option<PrecisionTime> {
        let (timestamp, end) = self.parse_prefix(text, zone)?;
        let rest = &text[end..];
        if rest.is_empty() {
            return Some(PrecisionTime::new(timestamp, 0));
        }
        let Some(fraction) = rest.strip_prefix('.') else {
            debug!("unexpected trailing text {rest:?} in {text:?}");
            return None;
        };
        if fraction.is_empty() {
            return Some(PrecisionTime::new(timestamp, 0));
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            debug!("fractional seconds {fraction:?} are not digits");
            return None;
        }
        let precision = fraction.len().min(3) as u8;
        let millis = fraction_to_millis(fraction.as_bytes());
        Some(PrecisionTime::new(timestamp.add_millis(millis), precision))
    }
}
