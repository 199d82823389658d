//! The historical regions and the day on which each adopted the Gregorian calendar.

use core::{fmt, str::FromStr};

use tinystr::TinyAsciiStr;

use crate::{
    calendar::{decompose, CivilDate},
    epoch::{AbsoluteDay, Reckoning},
    CalendarError,
};

/// A region, or a sentinel that forces one calendar for every day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Unknown,
    /// Every day is read as Gregorian.
    Gregorian,
    /// Every day is read as Julian.
    Julian,
    Rome,
    France,
    Bavaria,
    Austria,
    Lucerne,
    Hungary,
    Norway,
    Zurich,
    England,
    Russia,
    Romania,
    Greece,
    Turkey,
}

impl Locale {
    /// Every regional locale, ordered by the date of its reform.
    pub const REGIONS: [Self; 13] = [
        Self::Rome,
        Self::France,
        Self::Bavaria,
        Self::Austria,
        Self::Lucerne,
        Self::Hungary,
        Self::Norway,
        Self::Zurich,
        Self::England,
        Self::Russia,
        Self::Romania,
        Self::Greece,
        Self::Turkey,
    ];

    /// Returns an iterator over [`Self::REGIONS`].
    pub fn iter_regions() -> impl Iterator<Item = Self> {
        Self::REGIONS.into_iter()
    }

    /// The first day on which the region observed the Gregorian calendar.
    ///
    /// Sentinels and [`Locale::Unknown`] have no threshold.
    #[must_use]
    pub const fn threshold(self) -> Option<AbsoluteDay> {
        let day = match self {
            Self::Unknown | Self::Gregorian | Self::Julian => return None,
            Self::Rome => 504_993,
            Self::France => 505_059,
            Self::Bavaria => 505_359,
            Self::Austria => 505_452,
            Self::Lucerne => 505_457,
            Self::Hungary => 506_836,
            Self::Norway => 547_864,
            Self::Zurich => 548_181,
            Self::England => 567_054,
            Self::Russia => 627_471,
            Self::Romania => 627_895,
            Self::Greece => 629_700,
            Self::Turkey => 630_714,
        };
        Some(AbsoluteDay(day))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Gregorian => "Gregorian",
            Self::Julian => "Julian",
            Self::Rome => "Rome",
            Self::France => "France",
            Self::Bavaria => "Bavaria",
            Self::Austria => "Austria",
            Self::Lucerne => "Lucerne",
            Self::Hungary => "Hungary",
            Self::Norway => "Norway",
            Self::Zurich => "Zurich",
            Self::England => "England",
            Self::Russia => "Russia",
            Self::Romania => "Romania",
            Self::Greece => "Greece",
            Self::Turkey => "Turkey",
        }
    }

    /// Returns whether this locale switches calendars at some threshold.
    #[inline]
    #[must_use]
    pub const fn is_region(self) -> bool {
        self.threshold().is_some()
    }

    /// Returns the civil dates on either side of this region's reform.
    #[must_use]
    pub fn reform(self) -> Option<Reform> {
        let threshold = self.threshold()?;
        let last_julian = decompose(self, threshold - 1).ok()?;
        let first_gregorian = decompose(self, threshold).ok()?;
        let as_julian = Reckoning::Julian.absolute_day(
            first_gregorian.year,
            first_gregorian.month,
            first_gregorian.day,
        );
        Some(Reform {
            last_julian,
            first_gregorian,
            skipped_days: (as_julian - threshold) as u8,
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl FromStr for Locale {
    type Err = CalendarError;

    /// Parses a locale name or one of its aliases, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || {
            CalendarError::unknown_locale().with_message(alloc::format!("unrecognized locale: {s}"))
        };
        let name = TinyAsciiStr::<24>::try_from_str(s)
            .map_err(|_| unknown())?
            .to_ascii_lowercase();
        match name.as_str() {
            "gregorian" => Ok(Self::Gregorian),
            "julian" => Ok(Self::Julian),
            "rome" | "italy" => Ok(Self::Rome),
            "france" => Ok(Self::France),
            "bavaria" => Ok(Self::Bavaria),
            "austria" | "bohemia" | "slovakia" => Ok(Self::Austria),
            "lucerne" | "catholic-switzerland" => Ok(Self::Lucerne),
            "hungary" => Ok(Self::Hungary),
            "norway" | "denmark" | "danmark" => Ok(Self::Norway),
            "zurich" | "protestant-switzerland" => Ok(Self::Zurich),
            "england" | "uk" | "ireland" | "scotland" => Ok(Self::England),
            "russia" => Ok(Self::Russia),
            "romania" => Ok(Self::Romania),
            "greece" | "hellas" => Ok(Self::Greece),
            "turkey" => Ok(Self::Turkey),
            _ => Err(unknown()),
        }
    }
}

/// The calendar switch of a region, in the civil dates its people saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reform {
    /// The last date observed in the Julian calendar.
    pub last_julian: CivilDate,
    /// The first date observed in the Gregorian calendar.
    pub first_gregorian: CivilDate,
    /// How many civil dates never occurred.
    pub skipped_days: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn thresholds_increase_with_region_order() {
        let thresholds: alloc::vec::Vec<_> =
            Locale::iter_regions().filter_map(Locale::threshold).collect();
        assert_eq!(thresholds.len(), Locale::REGIONS.len());
        assert!(thresholds.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(Locale::Unknown.threshold(), None);
        assert_eq!(Locale::Gregorian.threshold(), None);
        assert!(!Locale::Julian.is_region());
    }

    #[test]
    fn reforms() {
        let tests = [
            (Locale::Rome, (1582, 10, 4), (1582, 10, 15), 10),
            (Locale::France, (1582, 12, 9), (1582, 12, 20), 10),
            (Locale::Bavaria, (1583, 10, 5), (1583, 10, 16), 10),
            (Locale::Austria, (1584, 1, 6), (1584, 1, 17), 10),
            (Locale::Lucerne, (1584, 1, 11), (1584, 1, 22), 10),
            (Locale::Hungary, (1587, 10, 21), (1587, 11, 1), 10),
            (Locale::Norway, (1700, 2, 18), (1700, 3, 1), 11),
            (Locale::Zurich, (1700, 12, 31), (1701, 1, 12), 11),
            (Locale::England, (1752, 9, 2), (1752, 9, 14), 11),
            (Locale::Russia, (1918, 1, 31), (1918, 2, 14), 13),
            (Locale::Romania, (1919, 3, 31), (1919, 4, 14), 13),
            (Locale::Greece, (1924, 3, 9), (1924, 3, 23), 13),
            (Locale::Turkey, (1926, 12, 18), (1927, 1, 1), 13),
        ];
        for (locale, last, first, skipped) in tests {
            let reform = locale.reform().unwrap();
            let observed = |d: CivilDate| (d.year, d.month, d.day);
            assert_eq!(observed(reform.last_julian), last, "{locale}");
            assert_eq!(observed(reform.first_gregorian), first, "{locale}");
            assert_eq!(reform.skipped_days, skipped, "{locale}");
            assert_eq!(
                (reform.last_julian.weekday + 1) % 7,
                reform.first_gregorian.weekday,
                "{locale}"
            );
        }
        assert!(Locale::Julian.reform().is_none());
    }

    #[test]
    fn parse_names_and_aliases() {
        let tests = [
            ("England", Locale::England),
            ("UK", Locale::England),
            ("scotland", Locale::England),
            ("Italy", Locale::Rome),
            ("danmark", Locale::Norway),
            ("Protestant-Switzerland", Locale::Zurich),
            ("catholic-switzerland", Locale::Lucerne),
            ("BOHEMIA", Locale::Austria),
            ("hellas", Locale::Greece),
            ("gregorian", Locale::Gregorian),
            ("Julian", Locale::Julian),
        ];
        for (name, expected) in tests {
            assert_eq!(name.parse::<Locale>().unwrap(), expected, "{name}");
        }
        for locale in Locale::iter_regions() {
            assert_eq!(locale.name().parse::<Locale>().unwrap(), locale);
        }

        for invalid in ["", "unknown", "atlantis", "a-name-far-too-long-for-any-locale"] {
            let err = invalid.parse::<Locale>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnknownLocale, "{invalid}");
        }
    }
}
