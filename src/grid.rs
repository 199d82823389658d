//! Month and year grids in the layout of the traditional `cal` program.
//!
//! A month grid is eight lines: a centred title, the weekday header and six
//! week rows. Days are found by stepping through absolute days and reading
//! each one in the locale, so the days a reform removed never appear.

use alloc::{format, string::String, vec::Vec};
use core::fmt;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    calendar::{self, CalendarKind},
    calendar_assert,
    date::CalendarDate,
    epoch::Reckoning,
    options::{MonthTitle, YearLayout},
    CalendarError, CalendarResult, Locale,
};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

/// Width of a month grid, and of every line of it inside a year grid.
const MONTH_WIDTH: usize = 20;
/// Three month grids joined by two gutters.
const TILED_WIDTH: usize = 3 * MONTH_WIDTH + 2 * GUTTER.len();
const GUTTER: &str = "   ";

const WEEK_ROWS: usize = 6;
const LINES_PER_MONTH: usize = 2 + WEEK_ROWS;
/// Upper bound on the days stepped through while filling a month.
const MAX_STEPS: usize = 33;

// ==== MonthGrid ====

/// The rendered layout of one civil month in a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    title: String,
    kind: CalendarKind,
    leading_blanks: u8,
    days: Vec<u8>,
    label: bool,
}

impl MonthGrid {
    /// Lays out `month` of `year` as observed in `locale`.
    pub fn try_new(
        locale: Locale,
        year: i32,
        month: u8,
        title: MonthTitle,
    ) -> CalendarResult<Self> {
        let kind = calendar::month_calendar_kind(locale, year, month)?;
        let first_kind = calendar::calendar_for_date(locale, year, month, 1)?;
        let reckoning = Reckoning::try_from_kind(first_kind)?;
        let month_length = reckoning.days_in_month(year, month);
        let first = reckoning.absolute_day(year, month, 1);

        let mut days = Vec::with_capacity(usize::from(month_length));
        let mut day = first;
        let mut ones = 0;
        for _ in 0..MAX_STEPS {
            let current = calendar::decompose(locale, day)?.day;
            if current == 1 {
                ones += 1;
            }
            // A second day 1 belongs to the next month, reached through a reform gap.
            if ones > 1 {
                #[cfg(feature = "log")]
                log::trace!("{locale} {year}-{month}: stopped at the next month's day 1");
                break;
            }
            if current <= month_length {
                days.push(current);
            }
            if current >= month_length {
                break;
            }
            day += 1;
        }

        let leading_blanks = first.weekday();
        calendar_assert!(
            usize::from(leading_blanks) + days.len() <= WEEK_ROWS * 7,
            "{locale} {year}-{month} needs more than {WEEK_ROWS} week rows"
        );

        let name = MONTH_NAMES[usize::from(month - 1)];
        let title = match title {
            MonthTitle::WithYear => format!("{name} {year}"),
            MonthTitle::MonthOnly => String::from(name),
        };

        Ok(Self {
            title,
            kind,
            leading_blanks,
            days,
            label: false,
        })
    }

    /// Adds a first line naming the calendar of the month.
    #[must_use]
    pub fn with_label(mut self) -> Self {
        self.label = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The calendar of the month, which is `Reformation` for a reform month.
    #[inline]
    #[must_use]
    pub fn calendar_kind(&self) -> CalendarKind {
        self.kind
    }

    /// The day numbers shown, in order.
    #[inline]
    #[must_use]
    pub fn days(&self) -> &[u8] {
        &self.days
    }

    /// The weekday of the first cell, which is also the count of blank cells before it.
    #[inline]
    #[must_use]
    pub fn leading_blanks(&self) -> u8 {
        self.leading_blanks
    }

    /// The column of the last cell in `row`, if the row has any cells.
    fn last_column(&self, row: usize) -> Option<usize> {
        let cells = usize::from(self.leading_blanks) + self.days.len();
        let start = row * 7;
        (start < cells).then(|| (cells - start).min(7) - 1)
    }

    fn line_width(&self, line: usize) -> usize {
        match line {
            0 | 1 => MONTH_WIDTH,
            _ => self
                .last_column(line - 2)
                .map_or(0, |column| column * 3 + 2),
        }
    }

    /// Writes one of the eight lines without a line break or trailing padding.
    fn write_line<W: fmt::Write + ?Sized>(&self, line: usize, sink: &mut W) -> fmt::Result {
        match line {
            0 => write_centered(&self.title, MONTH_WIDTH, sink),
            1 => sink.write_str(WEEKDAY_HEADER),
            _ => {
                let row = line - 2;
                let Some(last) = self.last_column(row) else {
                    return Ok(());
                };
                let leading = usize::from(self.leading_blanks);
                for column in 0..=last {
                    let width = if column == 0 { 2 } else { 3 };
                    match (row * 7 + column).checked_sub(leading) {
                        Some(index) => write_day(self.days[index], width, sink)?,
                        None => write_spaces(width, sink)?,
                    }
                }
                Ok(())
            }
        }
    }

    /// Writes one line padded to the month width.
    fn write_padded_line<W: fmt::Write + ?Sized>(&self, line: usize, sink: &mut W) -> fmt::Result {
        self.write_line(line, sink)?;
        write_spaces(MONTH_WIDTH - self.line_width(line), sink)
    }
}

impl Writeable for MonthGrid {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        if self.label {
            write_centered(self.kind.name(), MONTH_WIDTH, sink)?;
            sink.write_char('\n')?;
        }
        for line in 0..LINES_PER_MONTH {
            self.write_line(line, sink)?;
            sink.write_char('\n')?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let label = if self.label { MONTH_WIDTH + 1 } else { 0 };
        let lines: usize = (0..LINES_PER_MONTH).map(|l| self.line_width(l) + 1).sum();
        LengthHint::exact(label + lines)
    }
}

// ==== YearGrid ====

/// The twelve month grids of a civil year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGrid {
    title: String,
    kind: CalendarKind,
    layout: YearLayout,
    months: Vec<MonthGrid>,
    label: bool,
}

impl YearGrid {
    pub fn try_new(locale: Locale, year: i32, layout: YearLayout) -> CalendarResult<Self> {
        let kind = calendar::year_calendar_kind(locale, year)?;
        let months = (1..=12)
            .map(|month| MonthGrid::try_new(locale, year, month, MonthTitle::MonthOnly))
            .collect::<CalendarResult<Vec<_>>>()?;
        Ok(Self {
            title: format!("{year}"),
            kind,
            layout,
            months,
            label: false,
        })
    }

    /// Adds a first line naming the calendar of the year.
    #[must_use]
    pub fn with_label(mut self) -> Self {
        self.label = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn calendar_kind(&self) -> CalendarKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn months(&self) -> &[MonthGrid] {
        &self.months
    }

    fn width(&self) -> usize {
        match self.layout {
            YearLayout::Tiled => TILED_WIDTH,
            YearLayout::SingleColumn => MONTH_WIDTH,
        }
    }
}

impl Writeable for YearGrid {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let width = self.width();
        if self.label {
            write_centered(self.kind.name(), width, sink)?;
            sink.write_char('\n')?;
        }
        write_centered(&self.title, width, sink)?;
        sink.write_char('\n')?;

        match self.layout {
            YearLayout::Tiled => {
                write_spaces(width, sink)?;
                sink.write_char('\n')?;
                for band in self.months.chunks(3) {
                    for line in 0..LINES_PER_MONTH {
                        for (i, month) in band.iter().enumerate() {
                            if i > 0 {
                                sink.write_str(GUTTER)?;
                            }
                            month.write_padded_line(line, sink)?;
                        }
                        sink.write_char('\n')?;
                    }
                }
            }
            YearLayout::SingleColumn => {
                for month in &self.months {
                    for line in 0..LINES_PER_MONTH {
                        month.write_padded_line(line, sink)?;
                        sink.write_char('\n')?;
                    }
                }
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let line = self.width() + 1;
        let header_lines = match self.layout {
            YearLayout::Tiled => 2,
            YearLayout::SingleColumn => 1,
        };
        let body_lines = match self.layout {
            YearLayout::Tiled => 4 * LINES_PER_MONTH,
            YearLayout::SingleColumn => 12 * LINES_PER_MONTH,
        };
        LengthHint::exact((usize::from(self.label) + header_lines + body_lines) * line)
    }
}

impl_display_with_writeable!(MonthGrid);
impl_display_with_writeable!(YearGrid);

// ==== Rendering ====

/// Writes the grid of a month in the civil year of `date` to `sink`.
///
/// `month` defaults to the month of `date`.
pub fn render_month<W: fmt::Write + ?Sized>(
    sink: &mut W,
    date: &CalendarDate,
    month: Option<u8>,
    title: MonthTitle,
) -> CalendarResult<()> {
    date.month_grid(month, title)?
        .write_to(sink)
        .map_err(CalendarError::from)
}

/// Writes the grid of the civil year of `date` to `sink`.
pub fn render_year<W: fmt::Write + ?Sized>(
    sink: &mut W,
    date: &CalendarDate,
    layout: YearLayout,
) -> CalendarResult<()> {
    date.year_grid(layout)?
        .write_to(sink)
        .map_err(CalendarError::from)
}

// ==== Helpers ====

/// Centres `text` in `width` columns, with the odd column of padding on the left.
fn write_centered<W: fmt::Write + ?Sized>(text: &str, width: usize, sink: &mut W) -> fmt::Result {
    let text = text.get(..width).unwrap_or(text);
    let right = (width - text.len()) / 2;
    let left = width - text.len() - right;
    write_spaces(left, sink)?;
    sink.write_str(text)?;
    write_spaces(right, sink)
}

fn write_spaces<W: fmt::Write + ?Sized>(count: usize, sink: &mut W) -> fmt::Result {
    for _ in 0..count {
        sink.write_char(' ')?;
    }
    Ok(())
}

fn write_day<W: fmt::Write + ?Sized>(day: u8, width: usize, sink: &mut W) -> fmt::Result {
    let digits = if day < 10 { 1 } else { 2 };
    write_spaces(width - digits, sink)?;
    day.write_to(sink)
}
