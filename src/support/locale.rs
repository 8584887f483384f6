//! Explicit locale for user-facing text.
//!
//! Formatting functions take a [`Locale`] argument instead of reading
//! process-wide locale state, so two reports in different languages can be
//! produced side by side.

use std::{fmt, str::FromStr};

use jiff::civil::{Date, Weekday};
use thiserror::Error;

/// Language used for dates, labels and messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub enum Locale {
    /// Bahasa Indonesia (`id`).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "id", alias = "indonesian"))]
    Indonesian,

    /// English (`en`).
    #[cfg_attr(feature = "serde", serde(rename = "en", alias = "english"))]
    English,
}

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MONTHS_EN: [&str; 12] = [
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

impl Locale {
    /// Returns the short language code (`id` or `en`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Indonesian => "id",
            Self::English => "en",
        }
    }

    /// Returns the full weekday name.
    #[must_use]
    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        match (self, weekday) {
            (Self::Indonesian, Weekday::Monday) => "Senin",
            (Self::Indonesian, Weekday::Tuesday) => "Selasa",
            (Self::Indonesian, Weekday::Wednesday) => "Rabu",
            (Self::Indonesian, Weekday::Thursday) => "Kamis",
            (Self::Indonesian, Weekday::Friday) => "Jumat",
            (Self::Indonesian, Weekday::Saturday) => "Sabtu",
            (Self::Indonesian, Weekday::Sunday) => "Minggu",
            (Self::English, Weekday::Monday) => "Monday",
            (Self::English, Weekday::Tuesday) => "Tuesday",
            (Self::English, Weekday::Wednesday) => "Wednesday",
            (Self::English, Weekday::Thursday) => "Thursday",
            (Self::English, Weekday::Friday) => "Friday",
            (Self::English, Weekday::Saturday) => "Saturday",
            (Self::English, Weekday::Sunday) => "Sunday",
        }
    }

    /// Returns the full month name of a civil date.
    #[must_use]
    pub fn month_name(self, date: Date) -> &'static str {
        // jiff guarantees 1..=12.
        let index = usize::from(date.month().unsigned_abs()) - 1;
        match self {
            Self::Indonesian => MONTHS_ID[index],
            Self::English => MONTHS_EN[index],
        }
    }

    /// Formats a date as `<weekday>, <day> <month> <year>`.
    ///
    /// ```
    /// use jiff::civil::date;
    /// use kapasitas_models::support::locale::Locale;
    ///
    /// let d = date(2026, 10, 18);
    /// assert_eq!(Locale::Indonesian.format_date(d), "Minggu, 18 Oktober 2026");
    /// assert_eq!(Locale::English.format_date(d), "Sunday, 18 October 2026");
    /// ```
    #[must_use]
    pub fn format_date(self, date: Date) -> String {
        format!(
            "{}, {} {} {}",
            self.weekday_name(date.weekday()),
            date.day(),
            self.month_name(date),
            date.year()
        )
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unsupported locale code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale `{0}` (expected `id` or `en`)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "id-id" | "indonesian" => Ok(Self::Indonesian),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::English),
            _ => Err(UnknownLocale(s.to_owned())),
        }
    }
}
