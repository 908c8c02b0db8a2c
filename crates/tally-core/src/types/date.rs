//! Date type for financial calculations.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{TallyError, TallyResult};

/// Canonical text format for dates exchanged with callers (month/day/year).
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Text input and output
/// use a single canonical format, `MM/DD/YYYY` with zero-padded month and
/// day; anything else is rejected rather than guessed.
///
/// # Example
///
/// ```rust
/// use tally_core::types::Date;
///
/// let date = Date::parse("04/27/2024").unwrap();
/// assert_eq!(date.month(), 4);
/// assert_eq!(date.to_string(), "04/27/2024");
/// assert!(Date::parse("2024-04-27").is_err());
/// assert!(Date::parse("4/27/2024").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> TallyResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| TallyError::invalid_date(format!("{month:02}/{day:02}/{year}")))
    }

    /// Creates a date from a `MM/DD/YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidDate` if the string is not in the canonical
    /// format (including unpadded forms such as `4/3/2024`) or does not name
    /// a real calendar date.
    pub fn parse(s: &str) -> TallyResult<Self> {
        let text = s.trim();
        let invalid = || TallyError::invalid_date(format!("Cannot parse '{s}', expected MM/DD/YYYY"));

        let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())?;
        if date.format(DATE_FORMAT).to_string() != text {
            return Err(invalid());
        }
        Ok(Date(date))
    }

    /// Returns today's date.
    ///
    /// Reading the wall clock makes results depend on when they are computed;
    /// pass an explicit settlement date for reproducible valuations.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Checks if the date is the end of month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Checks if the date is the last day of February (28th or 29th).
    #[must_use]
    pub fn is_last_day_of_february(&self) -> bool {
        self.month() == 2 && self.is_end_of_month()
    }

    /// Adds a number of calendar days (negative to go back).
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidDate` if the result leaves the supported
    /// date range.
    pub fn add_days(&self, days: i64) -> TallyResult<Self> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted
            .map(Date)
            .ok_or_else(|| TallyError::invalid_date(format!("{self} shifted by {days} days is out of range")))
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Days in a month for a given year.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
