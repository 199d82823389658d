//! The `hcal_rs` crate converts between a continuous day count and the
//! civil dates of the Julian and Gregorian calendars as they were actually
//! observed in different regions of Europe, and renders those dates as
//! month and year grids.
//!
//! ```rust
//! use hcal_rs::{CalendarDate, CalendarKind, Locale, MonthTitle};
//!
//! // The last Julian day observed in England.
//! let date = CalendarDate::try_new(1752, 9, 2, Locale::England).unwrap();
//! assert_eq!(date.calendar_kind(), CalendarKind::Julian);
//! assert_eq!(date.month_calendar_kind().unwrap(), CalendarKind::Reformation);
//!
//! // The next day is 14 September in the Gregorian calendar.
//! let next = CalendarDate::from_absolute_day(date.absolute_day() + 1, Locale::England).unwrap();
//! assert_eq!(next.day().unwrap(), 14);
//!
//! let grid = date.month_grid(None, MonthTitle::WithYear).unwrap();
//! assert!(grid.to_string().contains(" 1  2 14 15 16"));
//! ```
//!
//! All dates are stored as an [`AbsoluteDay`], a count of days whose origin
//! is 1 March 200: the first day on which the proleptic Julian and Gregorian
//! calendars agree on both the day and the month. Year, month, day and
//! weekday are always derived from that count and the date's [`Locale`].
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

pub mod calendar;
pub mod epoch;
pub mod error;
pub mod grid;
pub mod locale;
pub mod options;

mod date;

#[doc(inline)]
pub use error::CalendarError;

/// The `hcal_rs` result type
pub type CalendarResult<T> = Result<T, CalendarError>;

pub use crate::{
    calendar::{CalendarKind, CivilDate},
    date::CalendarDate,
    epoch::AbsoluteDay,
    grid::{render_month, render_year, MonthGrid, YearGrid},
    locale::{Locale, Reform},
    options::{MonthTitle, YearLayout},
};

/// The first civil year accepted by the date constructors.
pub const MIN_YEAR: i32 = 1;
/// The last civil year accepted by the date constructors.
pub const MAX_YEAR: i32 = 9999;

/// A library specific trait for unwrapping assertions.
pub(crate) trait CalendarUnwrap {
    type Output;

    /// `hcal_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but returns an error during runtime.
    fn calendar_unwrap(self) -> CalendarResult<Self::Output>;
}

impl<T> CalendarUnwrap for Option<T> {
    type Output = T;

    fn calendar_unwrap(self) -> CalendarResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(CalendarError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! calendar_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::CalendarError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::CalendarError::assert()
                .with_message(alloc::format!($($args)+)));
        }
    };
}
