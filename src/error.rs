//! This module implements `CalendarError`.

use alloc::{borrow::Cow, format};
use core::fmt;

/// `CalendarError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error kind for failures outside of date handling, such as an output
    /// sink refusing a write.
    #[default]
    Generic,
    /// A civil date field or absolute day outside of its valid range.
    InvalidDate,
    /// Arithmetic requested for a calendar that is neither Julian nor Gregorian.
    UnknownCalendar,
    /// A locale that could not be resolved, with no default to fall back on.
    UnknownLocale,
    /// An internal invariant was violated.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::InvalidDate => "InvalidDateError",
            Self::UnknownCalendar => "UnknownCalendarError",
            Self::UnknownLocale => "UnknownLocaleError",
            Self::Assert => "InternalInvariantError",
        }
        .fmt(f)
    }
}

/// The civil date field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
    AbsoluteDay,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::AbsoluteDay => "absolute day",
        }
        .fmt(f)
    }
}

/// The error type for `hcal_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl CalendarError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid date error.
    #[must_use]
    pub fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Create an invalid date error naming the field and its offending value.
    #[must_use]
    pub fn invalid_field<V: fmt::Display>(field: DateField, value: V) -> Self {
        Self::invalid_date().with_message(format!("{field} is out of range: {value}"))
    }

    /// Create an unknown calendar error.
    #[must_use]
    pub fn unknown_calendar() -> Self {
        Self::new(ErrorKind::UnknownCalendar)
    }

    /// Create an unknown locale error.
    #[must_use]
    pub fn unknown_locale() -> Self {
        Self::new(ErrorKind::UnknownLocale)
    }

    /// Create an internal invariant error.
    #[must_use]
    pub fn assert() -> Self {
        Self::new(ErrorKind::Assert)
            .with_message("internal invariant failed; this is a bug in hcal_rs")
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl From<fmt::Error> for CalendarError {
    fn from(_: fmt::Error) -> Self {
        Self::general("output sink refused a write")
    }
}

impl core::error::Error for CalendarError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_includes_kind_and_message() {
        let err = CalendarError::invalid_field(DateField::Month, 13);
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert_eq!(err.to_string(), "InvalidDateError: month is out of range: 13");

        let err = CalendarError::unknown_locale();
        assert_eq!(err.to_string(), "UnknownLocaleError");
    }

    #[test]
    fn assert_errors_carry_a_message() {
        let err = CalendarError::assert().with_message("month scan ran past December");
        assert_eq!(err.kind(), ErrorKind::Assert);
        assert_eq!(err.message(), "month scan ran past December");
        assert_eq!(err.into_message(), "month scan ran past December");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + core::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
