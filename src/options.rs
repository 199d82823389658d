//! Rendering options for month and year grids.

use core::{fmt, str::FromStr};

/// The title line of a month grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MonthTitle {
    /// The month name followed by the year, e.g. "September 1752".
    #[default]
    WithYear,
    /// Only the month name, as used inside year grids.
    MonthOnly,
}

/// A parsing error for `MonthTitle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseMonthTitleError;

impl fmt::Display for ParseMonthTitleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid month title")
    }
}

impl FromStr for MonthTitle {
    type Err = ParseMonthTitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "withYear" => Ok(Self::WithYear),
            "monthOnly" => Ok(Self::MonthOnly),
            _ => Err(ParseMonthTitleError),
        }
    }
}

impl fmt::Display for MonthTitle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WithYear => "withYear",
            Self::MonthOnly => "monthOnly",
        }
        .fmt(f)
    }
}

/// The arrangement of the twelve months in a year grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum YearLayout {
    /// Four bands of three months side by side, 66 columns wide.
    #[default]
    Tiled,
    /// One month below the other, 20 columns wide.
    SingleColumn,
}

/// A parsing error for `YearLayout`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseYearLayoutError;

impl fmt::Display for ParseYearLayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid year layout")
    }
}

impl FromStr for YearLayout {
    type Err = ParseYearLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiled" => Ok(Self::Tiled),
            "singleColumn" => Ok(Self::SingleColumn),
            _ => Err(ParseYearLayoutError),
        }
    }
}

impl fmt::Display for YearLayout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Tiled => "tiled",
            Self::SingleColumn => "singleColumn",
        }
        .fmt(f)
    }
}
