//! This module implements `TemporalError`.

use alloc::{borrow::Cow, string::String};
use core::fmt;

/// `TemporalError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// RangeError
    Range,
    /// SyntaxError
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
        }
        .fmt(f)
    }
}

/// The error type for fallible `temporal_sql` operations.
///
/// Malformed literal text is reported as an [`ErrorKind::Syntax`] error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalError {
    kind: ErrorKind,
    msg: ErrorMessageKind,
}

impl TemporalError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessageKind::None,
        }
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = match msg.into() {
            Cow::Borrowed(s) => ErrorMessageKind::Static(s),
            Cow::Owned(s) => ErrorMessageKind::Owned(s),
        };
        self
    }

    /// Add a canned message to the error.
    #[inline]
    #[must_use]
    pub fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = ErrorMessageKind::Message(msg);
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        self.msg.to_str()
    }
}

impl fmt::Display for TemporalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.to_str();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for TemporalError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorMessageKind {
    None,
    Static(&'static str),
    Owned(String),
    Message(ErrorMessage),
}

impl ErrorMessageKind {
    fn to_str(&self) -> &str {
        match self {
            Self::None => "",
            Self::Static(s) => s,
            Self::Owned(s) => s,
            Self::Message(m) => m.to_str(),
        }
    }
}

/// Canned error messages shared across the parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorMessage {
    InvalidYear,
    InvalidMonth,
    InvalidDay,
    InvalidHour,
    InvalidMinute,
    InvalidSecond,
    InvalidFraction,
    InvalidStartIndex,
    UnterminatedQuote,
    UnsupportedPatternLetter,
    OffsetOutOfRange,
    InvalidOffset,
}

impl ErrorMessage {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::InvalidYear => "year field is not a valid integer.",
            Self::InvalidMonth => "month field is not a valid integer.",
            Self::InvalidDay => "day field is not a valid integer.",
            Self::InvalidHour => "hour field is not a valid integer.",
            Self::InvalidMinute => "minute field is not a valid integer.",
            Self::InvalidSecond => "second field is not a valid integer.",
            Self::InvalidFraction => "fractional second field is not a valid integer.",
            Self::InvalidStartIndex => "start index is not a character boundary of the input.",
            Self::UnterminatedQuote => "pattern contains an unterminated quoted literal.",
            Self::UnsupportedPatternLetter => "pattern contains an unsupported pattern letter.",
            Self::OffsetOutOfRange => "UTC offset must be within +/-18:00.",
            Self::InvalidOffset => "UTC offset is not a valid fixed offset.",
        }
    }
}
