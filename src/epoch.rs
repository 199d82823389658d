//! The absolute day epoch and the Julian/Gregorian day arithmetic.
//!
//! An [`AbsoluteDay`] counts days from 1 March 200, the first day on which the
//! proleptic Julian and Gregorian calendars agree on both the day of the month
//! and the month. Every calculation in this module is a closed-form equation
//! over that count; none of them depend on a locale.

use core::{
    fmt,
    ops::{Add, AddAssign, Sub},
};

use alloc::format;
use core_maths::CoreFloat;
use num_traits::ToPrimitive;

use crate::{
    calendar::CalendarKind, error::DateField, CalendarError, CalendarResult, CalendarUnwrap,
    MAX_YEAR, MIN_YEAR,
};

/// Cumulative days before the first of each month in a common year. Index 0 is unused.
const COMMON_MONTH_OFFSETS: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
/// Cumulative days before the first of each month in a leap year. Index 0 is unused.
const LEAP_MONTH_OFFSETS: [u16; 13] = [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Days from Julian 1 January 1 to 1 March 200.
const JULIAN_EPOCH_OFFSET: i32 = 72_744;
/// Days from Gregorian 1 January 1 to 1 March 200.
const GREGORIAN_EPOCH_OFFSET: i32 = 72_742;

/// A continuous count of days where day 0 is 1 March 200.
///
/// Adding one always advances exactly one real day, whichever calendar is
/// later used to display the result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AbsoluteDay(pub(crate) i32);

impl AbsoluteDay {
    /// 1 March 200, in both calendars.
    pub const EPOCH: Self = Self(0);
    /// Julian 1 January 1, the earliest supported day.
    pub const MIN: Self = Self(-JULIAN_EPOCH_OFFSET);
    /// Julian 31 December 9999, the latest supported day.
    pub const MAX: Self = Self(3_579_389);

    /// Creates a new `AbsoluteDay`, validating that it is within the supported range.
    pub fn try_new(value: i32) -> CalendarResult<Self> {
        let day = Self(value);
        day.check_validity()?;
        Ok(day)
    }

    #[inline]
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    pub fn check_validity(&self) -> CalendarResult<()> {
        if !(Self::MIN..=Self::MAX).contains(self) {
            return Err(CalendarError::invalid_field(DateField::AbsoluteDay, self.0));
        }
        Ok(())
    }

    /// Returns the day of the week, where 0 is Sunday and 6 is Saturday.
    #[inline]
    #[must_use]
    pub const fn weekday(&self) -> u8 {
        (((self.0 % 7) - 1 + 14) % 7) as u8
    }
}

impl From<AbsoluteDay> for i32 {
    fn from(value: AbsoluteDay) -> Self {
        value.0
    }
}

impl Add<i32> for AbsoluteDay {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign<i32> for AbsoluteDay {
    fn add_assign(&mut self, rhs: i32) {
        self.0 += rhs;
    }
}

impl Sub<i32> for AbsoluteDay {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for AbsoluteDay {
    type Output = i32;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl fmt::Display for AbsoluteDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ==== Calendar reckoning ====

/// The two calendars that day arithmetic is defined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reckoning {
    Julian,
    Gregorian,
}

impl Reckoning {
    pub(crate) fn try_from_kind(kind: CalendarKind) -> CalendarResult<Self> {
        match kind {
            CalendarKind::Julian => Ok(Self::Julian),
            CalendarKind::Gregorian => Ok(Self::Gregorian),
            CalendarKind::Reformation | CalendarKind::Unknown => Err(
                CalendarError::unknown_calendar().with_message(format!(
                    "day arithmetic requires a Julian or Gregorian calendar, found {kind}"
                )),
            ),
        }
    }

    pub(crate) const fn is_leap_year(self, year: i32) -> bool {
        match self {
            Self::Julian => year.rem_euclid(4) == 0,
            Self::Gregorian => {
                if year.rem_euclid(400) == 0 {
                    true
                } else if year.rem_euclid(100) == 0 {
                    false
                } else {
                    year.rem_euclid(4) == 0
                }
            }
        }
    }

    pub(crate) fn month_offsets(self, year: i32) -> &'static [u16; 13] {
        if self.is_leap_year(year) {
            &LEAP_MONTH_OFFSETS
        } else {
            &COMMON_MONTH_OFFSETS
        }
    }

    pub(crate) const fn days_in_year(self, year: i32) -> u16 {
        if self.is_leap_year(year) {
            366
        } else {
            365
        }
    }

    /// Days in `month`, which must already be within 1..=12.
    pub(crate) const fn days_in_month(self, year: i32, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if self.is_leap_year(year) => 29,
            _ => 28,
        }
    }

    /// Zero-based day of the year; `month` and `day` must already be validated.
    pub(crate) fn day_of_year(self, year: i32, month: u8, day: u8) -> u16 {
        self.month_offsets(year)[usize::from(month)] + (u16::from(day) - 1)
    }

    const fn epoch_offset(self) -> i32 {
        match self {
            Self::Julian => JULIAN_EPOCH_OFFSET,
            Self::Gregorian => GREGORIAN_EPOCH_OFFSET,
        }
    }

    /// The absolute day of 1 January of `year`, without range checks.
    pub(crate) const fn year_start(self, year: i32) -> AbsoluteDay {
        let elapsed = year - 1;
        let leap_days = match self {
            Self::Julian => elapsed.div_euclid(4),
            Self::Gregorian => {
                elapsed.div_euclid(4) - elapsed.div_euclid(100) + elapsed.div_euclid(400)
            }
        };
        AbsoluteDay(elapsed * 365 + leap_days - self.epoch_offset())
    }

    /// The absolute day of a civil date that has already been validated.
    pub(crate) fn absolute_day(self, year: i32, month: u8, day: u8) -> AbsoluteDay {
        self.year_start(year) + i32::from(self.day_of_year(year, month, day))
    }

    /// Approximates the year containing `day` from the mean year length.
    ///
    /// The result is either the correct year or one year to either side.
    pub(crate) fn approximate_year(self, day: AbsoluteDay) -> CalendarResult<i32> {
        let (shift, mean_year) = match self {
            Self::Julian => (72_745.0, 365.25),
            Self::Gregorian => (72_743.0, 365.2425),
        };
        let years = CoreFloat::floor((f64::from(day.0) + shift) / mean_year);
        Ok(years.to_i32().calendar_unwrap()? + 1)
    }
}

// ==== Validation ====

pub(crate) fn validate_year(year: i32) -> CalendarResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::invalid_field(DateField::Year, year));
    }
    Ok(())
}

pub(crate) fn validate_month(month: u8) -> CalendarResult<()> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::invalid_field(DateField::Month, month));
    }
    Ok(())
}

pub(crate) fn validate_day(day: u8) -> CalendarResult<()> {
    if !(1..=31).contains(&day) {
        return Err(CalendarError::invalid_field(DateField::Day, day));
    }
    Ok(())
}

// ==== Public day arithmetic ====

/// Returns whether `year` is a leap year in the given calendar.
///
/// The Julian calendar has a leap year every fourth year. The Gregorian
/// calendar skips the leap day in century years not divisible by 400.
pub fn leap_year(kind: CalendarKind, year: i32) -> CalendarResult<bool> {
    Ok(Reckoning::try_from_kind(kind)?.is_leap_year(year))
}

/// Returns the number of days in `year` of the given calendar.
pub fn days_in_year(kind: CalendarKind, year: i32) -> CalendarResult<u16> {
    Ok(Reckoning::try_from_kind(kind)?.days_in_year(year))
}

/// Returns the number of days in `month` of `year` in the given calendar.
pub fn days_in_month(kind: CalendarKind, year: i32, month: u8) -> CalendarResult<u8> {
    validate_month(month)?;
    Ok(Reckoning::try_from_kind(kind)?.days_in_month(year, month))
}

/// Returns the zero-based day of the year, with 1 January being day 0.
///
/// The day is only checked against 1..=31, not against the length of `month`.
pub fn day_of_year(kind: CalendarKind, year: i32, month: u8, day: u8) -> CalendarResult<u16> {
    validate_month(month)?;
    validate_day(day)?;
    Ok(Reckoning::try_from_kind(kind)?.day_of_year(year, month, day))
}

/// Converts a civil date of the given calendar into an [`AbsoluteDay`].
pub fn absolute_day(kind: CalendarKind, year: i32, month: u8, day: u8) -> CalendarResult<AbsoluteDay> {
    validate_month(month)?;
    validate_day(day)?;
    validate_year(year)?;
    Ok(Reckoning::try_from_kind(kind)?.absolute_day(year, month, day))
}

/// Approximates the year of the given calendar that contains `day`.
///
/// This divides by the calendar's mean year length and may land one year
/// away from the true year near a year boundary. Use
/// [`decompose`](crate::calendar::decompose) for an exact civil date.
pub fn year_from_absolute_day(kind: CalendarKind, day: AbsoluteDay) -> CalendarResult<i32> {
    Reckoning::try_from_kind(kind)?.approximate_year(day)
}

/// Returns the day of the week of a civil date, where 0 is Sunday.
pub fn day_of_week(kind: CalendarKind, year: i32, month: u8, day: u8) -> CalendarResult<u8> {
    Ok(absolute_day(kind, year, month, day)?.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn epoch_is_shared_by_both_calendars() {
        assert_eq!(
            absolute_day(CalendarKind::Julian, 200, 3, 1).unwrap(),
            AbsoluteDay::EPOCH
        );
        assert_eq!(
            absolute_day(CalendarKind::Gregorian, 200, 3, 1).unwrap(),
            AbsoluteDay::EPOCH
        );
        // The calendars stay in step until the end of February 300.
        assert_eq!(
            absolute_day(CalendarKind::Julian, 300, 2, 28).unwrap(),
            absolute_day(CalendarKind::Gregorian, 300, 2, 28).unwrap()
        );
        assert_eq!(
            absolute_day(CalendarKind::Julian, 300, 2, 29).unwrap(),
            absolute_day(CalendarKind::Gregorian, 300, 3, 1).unwrap()
        );
    }

    #[test]
    fn range_limits() {
        assert_eq!(
            absolute_day(CalendarKind::Julian, 1, 1, 1).unwrap(),
            AbsoluteDay::MIN
        );
        assert_eq!(
            absolute_day(CalendarKind::Julian, 9999, 12, 31).unwrap(),
            AbsoluteDay::MAX
        );
        // Gregorian 1 January 1 is Julian 3 January 1.
        assert_eq!(
            absolute_day(CalendarKind::Gregorian, 1, 1, 1).unwrap(),
            absolute_day(CalendarKind::Julian, 1, 1, 3).unwrap()
        );
        assert!(AbsoluteDay::try_new(AbsoluteDay::MIN.as_i32() - 1).is_err());
        assert!(AbsoluteDay::try_new(AbsoluteDay::MAX.as_i32() + 1).is_err());
        assert_eq!(AbsoluteDay::try_new(0).unwrap(), AbsoluteDay::EPOCH);
    }

    #[test]
    fn leap_rules() {
        assert!(leap_year(CalendarKind::Gregorian, 2000).unwrap());
        assert!(!leap_year(CalendarKind::Gregorian, 1900).unwrap());
        assert!(leap_year(CalendarKind::Julian, 1900).unwrap());
        assert!(leap_year(CalendarKind::Gregorian, 1996).unwrap());
        assert!(!leap_year(CalendarKind::Julian, 1999).unwrap());

        assert_eq!(days_in_year(CalendarKind::Julian, 1700).unwrap(), 366);
        assert_eq!(days_in_year(CalendarKind::Gregorian, 1700).unwrap(), 365);
        assert_eq!(days_in_month(CalendarKind::Julian, 1700, 2).unwrap(), 29);
        assert_eq!(days_in_month(CalendarKind::Gregorian, 1700, 2).unwrap(), 28);
        assert_eq!(days_in_month(CalendarKind::Gregorian, 1752, 9).unwrap(), 30);
    }

    #[test]
    fn non_arithmetic_calendars_are_rejected() {
        let err = leap_year(CalendarKind::Reformation, 1752).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCalendar);
        let err = absolute_day(CalendarKind::Unknown, 1752, 9, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCalendar);
        let err = year_from_absolute_day(CalendarKind::Unknown, AbsoluteDay::EPOCH).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCalendar);
    }

    #[test]
    fn day_of_year_offsets() {
        assert_eq!(day_of_year(CalendarKind::Gregorian, 2001, 1, 1).unwrap(), 0);
        assert_eq!(day_of_year(CalendarKind::Gregorian, 2000, 3, 1).unwrap(), 60);
        assert_eq!(day_of_year(CalendarKind::Gregorian, 2001, 3, 1).unwrap(), 59);
        assert_eq!(day_of_year(CalendarKind::Julian, 1900, 12, 31).unwrap(), 365);
        assert_eq!(day_of_year(CalendarKind::Gregorian, 1900, 12, 31).unwrap(), 364);
        // Only the 1..=31 range is checked.
        assert_eq!(day_of_year(CalendarKind::Gregorian, 2001, 2, 31).unwrap(), 61);
    }

    #[test]
    fn invalid_fields() {
        let cases = [(2000, 0, 1), (2000, 13, 1), (2000, 1, 0), (2000, 1, 32), (0, 1, 1), (10_000, 1, 1)];
        for (year, month, day) in cases {
            let err = absolute_day(CalendarKind::Gregorian, year, month, day).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidDate, "{year}-{month}-{day}");
        }
        let err = day_of_year(CalendarKind::Julian, 2000, 13, 1).unwrap_err();
        assert_eq!(err.message(), "month is out of range: 13");
        let err = day_of_year(CalendarKind::Julian, 2000, 1, 32).unwrap_err();
        assert_eq!(err.message(), "day is out of range: 32");
    }

    #[test]
    fn day_offsets() {
        let day = AbsoluteDay(567_054);
        assert_eq!(day - 1, AbsoluteDay(567_053));
        assert_eq!(day - 1 + 1, day);
        assert_eq!((day - 11) - day, -11);
        let mut next = day - 1;
        next += 1;
        assert_eq!(next, day);
        assert!(AbsoluteDay::try_new((AbsoluteDay::MIN - 1).as_i32()).is_err());
    }

    #[test]
    fn weekdays() {
        // 1 March 200 was a Saturday.
        assert_eq!(AbsoluteDay::EPOCH.weekday(), 6);
        assert_eq!(AbsoluteDay(1).weekday(), 0);
        assert_eq!(AbsoluteDay(-1).weekday(), 5);
        assert_eq!(AbsoluteDay::MIN.weekday(), 6);

        assert_eq!(day_of_week(CalendarKind::Gregorian, 2000, 1, 1).unwrap(), 6);
        assert_eq!(day_of_week(CalendarKind::Gregorian, 1970, 1, 1).unwrap(), 4);
        assert_eq!(day_of_week(CalendarKind::Julian, 1752, 9, 2).unwrap(), 3);
        assert_eq!(day_of_week(CalendarKind::Gregorian, 1752, 9, 14).unwrap(), 4);
        assert_eq!(day_of_week(CalendarKind::Gregorian, 1, 1, 1).unwrap(), 1);
    }

    #[test]
    fn absolute_day_is_strictly_increasing() {
        for kind in [CalendarKind::Julian, CalendarKind::Gregorian] {
            let reckoning = Reckoning::try_from_kind(kind).unwrap();
            let mut previous = absolute_day(kind, 1579, 12, 31).unwrap();
            for year in 1580..=1604 {
                for month in 1..=12 {
                    for day in 1..=reckoning.days_in_month(year, month) {
                        let current = absolute_day(kind, year, month, day).unwrap();
                        assert_eq!(current - previous, 1, "{kind} {year}-{month}-{day}");
                        previous = current;
                    }
                }
            }
        }
    }

    #[test]
    fn year_approximation_is_within_one_year() {
        for reckoning in [Reckoning::Julian, Reckoning::Gregorian] {
            for year in MIN_YEAR..=MAX_YEAR {
                let start = reckoning.year_start(year);
                let length = i32::from(reckoning.days_in_year(year));
                let probes = [0, 1, 58, 59, 60, length - 2, length - 1];
                for day in probes.map(|offset| start + offset) {
                    let approximation = reckoning.approximate_year(day).unwrap();
                    assert!(
                        (approximation - year).abs() <= 1,
                        "{reckoning:?} day {day} approximated as {approximation}, expected {year}"
                    );
                }
            }
        }
    }
}
