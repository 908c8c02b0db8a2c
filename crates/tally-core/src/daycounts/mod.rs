//! Day count conventions for bond valuation.
//!
//! A day count convention answers two questions: how many days lie between
//! two dates, and which date lies a given number of days before another.
//! Both are needed to lay out a coupon schedule and to discount it.
//!
//! # Supported Conventions
//!
//! - [`Thirty360Nasd`]: US NASD 30/360, spreadsheet flavour (start-only
//!   end-of-February rule)
//! - [`Actual365`]: calendar days, 365-day year for annualization
//!
//! # Usage
//!
//! ```rust
//! use tally_core::daycounts::DateConvention;
//! use tally_core::types::Date;
//!
//! let convention: DateConvention = "30/360".parse().unwrap();
//! let start = Date::parse("04/03/2024").unwrap();
//! let end = Date::parse("04/23/2027").unwrap();
//!
//! assert_eq!(convention.day_diff(start, end), 1100);
//! assert_eq!(convention.year_days(), 360);
//! ```

mod actual;
mod thirty360;

pub use actual::Actual365;
pub use thirty360::Thirty360Nasd;

use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) and pure.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Number of days in a year under this convention (360 or 365).
    fn year_days(&self) -> u32;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Returns the date `days` days before `date`.
    ///
    /// For 30/360 this is only an approximate inverse of [`DayCount::day_count`];
    /// the convention cannot represent every calendar date exactly.
    fn subtract_days(&self, date: Date, days: u32) -> TallyResult<Date>;
}

/// The date convention a bond is valued under.
///
/// Every day difference and every schedule step for one bond uses the same
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateConvention {
    /// US NASD 30/360: 30-day months, 360-day years.
    #[default]
    ThirtyThreeSixty,

    /// Actual calendar days, 365-day year.
    Actual,
}

impl DateConvention {
    /// Returns the day count implementation for this convention.
    #[must_use]
    pub fn to_day_count(&self) -> &'static dyn DayCount {
        match self {
            DateConvention::ThirtyThreeSixty => &Thirty360Nasd,
            DateConvention::Actual => &Actual365,
        }
    }

    /// Returns the display name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.to_day_count().name()
    }

    /// Days per year: 360 for 30/360, 365 for Actual.
    #[must_use]
    pub fn year_days(&self) -> u32 {
        self.to_day_count().year_days()
    }

    /// Number of days from `start` to `end`.
    #[must_use]
    pub fn day_diff(&self, start: Date, end: Date) -> i64 {
        self.to_day_count().day_count(start, end)
    }

    /// The date `days` days before `date`.
    pub fn subtract_days(&self, date: Date, days: u32) -> TallyResult<Date> {
        self.to_day_count().subtract_days(date, days)
    }
}

impl std::fmt::Display for DateConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DateConvention {
    type Err = TallyError;

    /// Parses a convention token, case-insensitively.
    ///
    /// - 30/360: "30/360", "30/360 US", "US NASD 30/360", "us_nasd_30_360", "THIRTY360"
    /// - Actual: "actual", "ACT", "ACT/365", "normal"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "30/360" | "30/360 US" | "US NASD 30/360" | "US_NASD_30_360" | "THIRTY360"
            | "THIRTYTHREESIXTY" => Ok(DateConvention::ThirtyThreeSixty),

            "ACTUAL" | "ACT" | "ACT/365" | "NORMAL" => Ok(DateConvention::Actual),

            _ => Err(TallyError::invalid_convention(s)),
        }
    }
}
