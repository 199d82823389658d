//! This module implements `CalendarDate`.

use crate::{
    calendar::{self, CalendarKind, CivilDate},
    epoch::{self, AbsoluteDay},
    grid::{MonthGrid, YearGrid},
    options::{MonthTitle, YearLayout},
    CalendarError, CalendarResult, Locale,
};

/// A day paired with the locale whose calendar it is displayed in.
///
/// Only the [`AbsoluteDay`] and the [`Locale`] are stored. The civil fields
/// are derived on every access, so changing the locale changes how the same
/// day is read.
///
/// ```rust
/// use hcal_rs::{CalendarDate, Locale};
///
/// let mut date = CalendarDate::try_new(1918, 1, 31, Locale::Russia).unwrap();
/// date.set_absolute_day(date.absolute_day() + 1).unwrap();
/// assert_eq!((date.month().unwrap(), date.day().unwrap()), (2, 14));
///
/// date.set_locale(Locale::Julian);
/// assert_eq!((date.month().unwrap(), date.day().unwrap()), (2, 1));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    locale: Locale,
    day: AbsoluteDay,
}

// ==== Constructors ====

impl CalendarDate {
    /// Creates a date on [`AbsoluteDay::EPOCH`] with an unknown locale.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locale: Locale::Unknown,
            day: AbsoluteDay::EPOCH,
        }
    }

    /// Creates a date from a civil date as it was written in `locale`.
    pub fn try_new(year: i32, month: u8, day: u8, locale: Locale) -> CalendarResult<Self> {
        let mut date = Self::new();
        date.set_civil_date(year, month, day, locale)?;
        Ok(date)
    }

    /// Creates a date from a proleptic Julian civil date, read with [`Locale::Julian`].
    pub fn try_new_julian(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let mut date = Self::new();
        date.set_julian_civil_date(year, month, day)?;
        Ok(date)
    }

    /// Creates a date from a proleptic Gregorian civil date, read with [`Locale::Gregorian`].
    pub fn try_new_gregorian(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let mut date = Self::new();
        date.set_gregorian_civil_date(year, month, day)?;
        Ok(date)
    }

    /// Creates a date on `day`, which must be within [`AbsoluteDay::MIN`] and [`AbsoluteDay::MAX`].
    pub fn from_absolute_day(day: AbsoluteDay, locale: Locale) -> CalendarResult<Self> {
        day.check_validity()?;
        Ok(Self { locale, day })
    }
}

// ==== Mutators ====

impl CalendarDate {
    /// Sets the date from a civil date in the calendar `locale` observed on it.
    ///
    /// [`Locale::Unknown`] keeps the stored locale; if that is unknown as
    /// well, an `UnknownLocale` error is returned and the date is unchanged.
    pub fn set_civil_date(
        &mut self,
        year: i32,
        month: u8,
        day: u8,
        locale: Locale,
    ) -> CalendarResult<()> {
        let locale = match locale {
            Locale::Unknown => self.locale,
            locale => locale,
        };
        if locale == Locale::Unknown {
            return Err(CalendarError::unknown_locale()
                .with_message("a civil date needs a locale to be read in"));
        }
        self.day = calendar::resolve_civil_date(locale, year, month, day)?;
        self.locale = locale;
        Ok(())
    }

    /// Sets the date from a Julian civil date regardless of the locale.
    ///
    /// An unknown locale is replaced with [`Locale::Julian`]; any other
    /// locale is kept and may display the day in the Gregorian calendar.
    pub fn set_julian_civil_date(&mut self, year: i32, month: u8, day: u8) -> CalendarResult<()> {
        self.set_forced_civil_date(CalendarKind::Julian, year, month, day)
    }

    /// Sets the date from a Gregorian civil date regardless of the locale.
    ///
    /// An unknown locale is replaced with [`Locale::Gregorian`].
    pub fn set_gregorian_civil_date(
        &mut self,
        year: i32,
        month: u8,
        day: u8,
    ) -> CalendarResult<()> {
        self.set_forced_civil_date(CalendarKind::Gregorian, year, month, day)
    }

    fn set_forced_civil_date(
        &mut self,
        kind: CalendarKind,
        year: i32,
        month: u8,
        day: u8,
    ) -> CalendarResult<()> {
        self.day = epoch::absolute_day(kind, year, month, day)?;
        if self.locale == Locale::Unknown {
            self.locale = match kind {
                CalendarKind::Julian => Locale::Julian,
                _ => Locale::Gregorian,
            };
        }
        Ok(())
    }

    /// Moves the date to `day`, keeping the locale; an out of range day leaves the date unchanged.
    pub fn set_absolute_day(&mut self, day: AbsoluteDay) -> CalendarResult<()> {
        day.check_validity()?;
        self.day = day;
        Ok(())
    }

    /// Changes the locale without moving the day.
    #[inline]
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }
}

// ==== Accessors ====

impl CalendarDate {
    #[inline]
    #[must_use]
    pub const fn absolute_day(&self) -> AbsoluteDay {
        self.day
    }

    #[inline]
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the civil date displayed for this day in its locale.
    pub fn civil_date(&self) -> CalendarResult<CivilDate> {
        calendar::decompose(self.locale, self.day)
    }

    pub fn year(&self) -> CalendarResult<i32> {
        Ok(self.civil_date()?.year)
    }

    pub fn month(&self) -> CalendarResult<u8> {
        Ok(self.civil_date()?.month)
    }

    pub fn day(&self) -> CalendarResult<u8> {
        Ok(self.civil_date()?.day)
    }

    /// Returns the day of the week, where 0 is Sunday.
    ///
    /// The weekday never depends on the calendar, so no locale is needed.
    #[inline]
    #[must_use]
    pub const fn weekday(&self) -> u8 {
        self.day.weekday()
    }

    /// Returns the calendar in force on this day.
    #[must_use]
    pub fn calendar_kind(&self) -> CalendarKind {
        calendar::calendar_for_day(self.locale, self.day)
    }

    /// Returns the calendar of the civil month containing this day.
    pub fn month_calendar_kind(&self) -> CalendarResult<CalendarKind> {
        let civil = self.civil_date()?;
        calendar::month_calendar_kind(self.locale, civil.year, civil.month)
    }

    /// Returns the calendar of the civil year containing this day.
    pub fn year_calendar_kind(&self) -> CalendarResult<CalendarKind> {
        calendar::year_calendar_kind(self.locale, self.civil_date()?.year)
    }
}

// ==== Grids ====

impl CalendarDate {
    /// Builds the grid of a month in this date's civil year.
    ///
    /// `month` defaults to the month of this date.
    pub fn month_grid(&self, month: Option<u8>, title: MonthTitle) -> CalendarResult<MonthGrid> {
        let civil = self.civil_date()?;
        MonthGrid::try_new(
            self.locale,
            civil.year,
            month.unwrap_or(civil.month),
            title,
        )
    }

    /// Builds the grid of this date's civil year.
    pub fn year_grid(&self, layout: YearLayout) -> CalendarResult<YearGrid> {
        YearGrid::try_new(self.locale, self.civil_date()?.year, layout)
    }
}
