//! This module implements the calendar classification of days, months and
//! years for a [`Locale`].
//!
//! A locale observed the Julian calendar before its reform threshold and the
//! Gregorian calendar from the threshold onwards. Classification of a single
//! day is therefore a comparison; classification of a month or year compares
//! the calendars in force on its first day and on the first day of the next
//! month or year.

use core::fmt;

use crate::{
    calendar_assert,
    epoch::{validate_day, validate_month, validate_year, AbsoluteDay, Reckoning},
    CalendarError, CalendarResult, Locale,
};

mod anomaly;

/// The calendar that governs a day, month or year.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    Julian,
    Gregorian,
    /// The civil month or year contains the switch from Julian to Gregorian.
    Reformation,
    #[default]
    Unknown,
}

impl CalendarKind {
    /// Returns the display name of the calendar kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Julian => "Julian",
            Self::Gregorian => "Gregorian",
            Self::Reformation => "Reform Year",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// A civil date as displayed under the calendar in force on that day.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    /// The day of the week, where 0 is Sunday and 6 is Saturday.
    pub weekday: u8,
}

/// Returns the calendar that `locale` observed on `day`.
pub fn calendar_for_day(locale: Locale, day: AbsoluteDay) -> CalendarKind {
    match locale {
        Locale::Unknown => CalendarKind::Unknown,
        Locale::Gregorian => CalendarKind::Gregorian,
        Locale::Julian => CalendarKind::Julian,
        _ => match locale.threshold() {
            Some(threshold) if day >= threshold => CalendarKind::Gregorian,
            Some(_) => CalendarKind::Julian,
            None => CalendarKind::Unknown,
        },
    }
}

/// Returns the calendar that `locale` observed on a civil date.
///
/// The Gregorian reading of the date is used as the common reference for the
/// comparison against the locale's threshold.
pub fn calendar_for_date(
    locale: Locale,
    year: i32,
    month: u8,
    day: u8,
) -> CalendarResult<CalendarKind> {
    if locale == Locale::Unknown {
        return Ok(CalendarKind::Unknown);
    }
    validate_month(month)?;
    validate_day(day)?;
    validate_year(year)?;
    let reference = Reckoning::Gregorian.absolute_day(year, month, day);
    Ok(calendar_for_day(locale, reference))
}

/// Converts a civil date to an absolute day, reading the date in the calendar
/// that `locale` observed on it.
pub fn resolve_civil_date(
    locale: Locale,
    year: i32,
    month: u8,
    day: u8,
) -> CalendarResult<AbsoluteDay> {
    validate_month(month)?;
    validate_day(day)?;
    validate_year(year)?;
    resolve_unchecked(locale, year, month, day)
}

fn resolve_unchecked(locale: Locale, year: i32, month: u8, day: u8) -> CalendarResult<AbsoluteDay> {
    let reference = Reckoning::Gregorian.absolute_day(year, month, day);
    let reckoning = match calendar_for_day(locale, reference) {
        CalendarKind::Unknown => {
            return Err(CalendarError::unknown_locale()
                .with_message("a civil date cannot be resolved without a known locale"))
        }
        kind => Reckoning::try_from_kind(kind)?,
    };
    Ok(reckoning.absolute_day(year, month, day))
}

/// Decomposes `day` into the civil date observed by `locale`.
///
/// The year is first approximated from the calendar's mean year length and
/// then corrected against the true start of the year, so the result is exact.
pub fn decompose(locale: Locale, day: AbsoluteDay) -> CalendarResult<CivilDate> {
    day.check_validity()?;
    let kind = calendar_for_day(locale, day);
    if kind == CalendarKind::Unknown {
        return Err(CalendarError::unknown_locale()
            .with_message("a day cannot be decomposed without a known locale"));
    }
    let reckoning = Reckoning::try_from_kind(kind)?;

    let mut year = reckoning.approximate_year(day)?;
    let mut year_start = reckoning.year_start(year);
    if day < year_start {
        year -= 1;
        year_start = reckoning.year_start(year);
    } else if day - year_start >= i32::from(reckoning.days_in_year(year)) {
        year += 1;
        year_start = reckoning.year_start(year);
    }

    let day_of_year = day - year_start;
    calendar_assert!(
        (0..i32::from(reckoning.days_in_year(year))).contains(&day_of_year),
        "day {day} is {day_of_year} days into the corrected year {year}"
    );

    let offsets = reckoning.month_offsets(year);
    let mut month = 1;
    while month < 13 && i32::from(offsets[month]) <= day_of_year {
        month += 1;
    }
    month -= 1;
    calendar_assert!(
        (1..=12).contains(&month),
        "month scan for day {day} ended at month {month}"
    );

    let day_of_month = day_of_year - i32::from(offsets[month]) + 1;
    Ok(CivilDate {
        year,
        month: month as u8,
        day: day_of_month as u8,
        weekday: day.weekday(),
    })
}

/// Returns the calendar of a civil month, which is [`CalendarKind::Reformation`]
/// when the locale switched calendars during it.
pub fn month_calendar_kind(locale: Locale, year: i32, month: u8) -> CalendarResult<CalendarKind> {
    validate_month(month)?;
    validate_year(year)?;
    if let Some(kind) = anomaly::forced_month_kind(locale, year, month) {
        return Ok(kind);
    }

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first = calendar_for_day(locale, resolve_unchecked(locale, year, month, 1)?);
    let next = calendar_for_day(locale, resolve_unchecked(locale, next_year, next_month, 1)?);

    Ok(if first == next {
        first
    } else {
        CalendarKind::Reformation
    })
}

/// Returns the calendar of a civil year, which is [`CalendarKind::Reformation`]
/// when the locale switched calendars during it.
pub fn year_calendar_kind(locale: Locale, year: i32) -> CalendarResult<CalendarKind> {
    validate_year(year)?;
    if let Some(kind) = anomaly::forced_year_kind(locale, year) {
        return Ok(kind);
    }

    let first = calendar_for_day(locale, resolve_unchecked(locale, year, 1, 1)?);
    let next = calendar_for_day(locale, resolve_unchecked(locale, year + 1, 1, 1)?);

    Ok(if first == next {
        first
    } else {
        CalendarKind::Reformation
    })
}
