//! Months and years whose calendar cannot be read off the reform threshold.
//!
//! Protestant Switzerland went from 31 December 1700 (Julian) straight to
//! 12 January 1701 (Gregorian). Read as a Gregorian date, 1 January 1701
//! falls before the threshold, so the generic first-day comparison would
//! misclassify both December 1700 and January 1701.

use super::CalendarKind;
use crate::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    Month(u8),
    Year,
}

#[derive(Debug)]
struct Anomaly {
    locale: Locale,
    year: i32,
    span: Span,
    kind: CalendarKind,
}

const ANOMALIES: &[Anomaly] = &[
    Anomaly {
        locale: Locale::Zurich,
        year: 1701,
        span: Span::Month(1),
        kind: CalendarKind::Reformation,
    },
    Anomaly {
        locale: Locale::Zurich,
        year: 1700,
        span: Span::Month(12),
        kind: CalendarKind::Julian,
    },
    Anomaly {
        locale: Locale::Zurich,
        year: 1701,
        span: Span::Year,
        kind: CalendarKind::Reformation,
    },
    Anomaly {
        locale: Locale::Zurich,
        year: 1700,
        span: Span::Year,
        kind: CalendarKind::Julian,
    },
];

pub(crate) fn forced_month_kind(locale: Locale, year: i32, month: u8) -> Option<CalendarKind> {
    lookup(locale, year, Span::Month(month))
}

pub(crate) fn forced_year_kind(locale: Locale, year: i32) -> Option<CalendarKind> {
    lookup(locale, year, Span::Year)
}

fn lookup(locale: Locale, year: i32, span: Span) -> Option<CalendarKind> {
    let anomaly = ANOMALIES
        .iter()
        .find(|a| a.locale == locale && a.year == year && a.span == span)?;
    #[cfg(feature = "log")]
    log::debug!("{locale} {year} {span:?} is forced to {}", anomaly.kind);
    Some(anomaly.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_listed_spans_are_forced() {
        assert_eq!(
            forced_month_kind(Locale::Zurich, 1701, 1),
            Some(CalendarKind::Reformation)
        );
        assert_eq!(forced_year_kind(Locale::Zurich, 1700), Some(CalendarKind::Julian));
        assert_eq!(forced_month_kind(Locale::Zurich, 1701, 2), None);
        assert_eq!(forced_month_kind(Locale::Lucerne, 1701, 1), None);
        assert_eq!(forced_year_kind(Locale::Zurich, 1702), None);
    }
}
