//! Coupon schedule generation.
//!
//! Schedules are rolled backward from the redemption date in fixed steps of
//! the coupon period, using the bond's date convention for the date
//! arithmetic, until a step lands on or before settlement.
//!
//! # Example
//!
//! ```rust
//! use tally_bonds::cashflows::CouponSchedule;
//! use tally_core::daycounts::DateConvention;
//! use tally_core::types::Date;
//!
//! let schedule = CouponSchedule::generate(
//!     Date::parse("04/03/2024").unwrap(),
//!     Date::parse("04/23/2027").unwrap(),
//!     180,
//!     DateConvention::ThirtyThreeSixty,
//! )
//! .unwrap();
//!
//! assert_eq!(schedule.len(), 7);
//! assert_eq!(schedule.first_coupon().to_string(), "04/23/2024");
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use tally_core::daycounts::DateConvention;
use tally_core::types::Date;

use crate::error::{BondError, BondResult};

/// Remaining coupon dates of a bond, ascending.
///
/// Every date is strictly after settlement and the last one is the
/// redemption date, so a schedule always has at least one coupon.
/// Deserialization re-checks this: empty or unordered date lists and a zero
/// period are rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouponSchedule {
    dates: Vec<Date>,
    period_days: u32,
    convention: DateConvention,
}

impl CouponSchedule {
    /// Generates the schedule by stepping back from `maturity`.
    ///
    /// # Errors
    ///
    /// - `InvalidDateOrdering` if `settlement >= maturity`
    /// - `InvalidSpec` if `period_days` is zero
    /// - `Core` if a step leaves the representable date range
    pub fn generate(
        settlement: Date,
        maturity: Date,
        period_days: u32,
        convention: DateConvention,
    ) -> BondResult<Self> {
        if settlement >= maturity {
            return Err(BondError::InvalidDateOrdering {
                settlement,
                maturity,
            });
        }
        if period_days == 0 {
            return Err(BondError::invalid_spec("coupon period must be positive"));
        }

        let mut dates = Vec::new();
        let mut current = maturity;
        while current > settlement {
            dates.push(current);
            current = convention.subtract_days(current, period_days)?;
        }
        dates.reverse();

        Ok(Self {
            dates,
            period_days,
            convention,
        })
    }

    /// Coupon dates, ascending.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of remaining coupons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always false: a generated schedule holds at least the redemption date.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Next coupon date after settlement.
    #[must_use]
    pub fn first_coupon(&self) -> Date {
        self.dates[0]
    }

    /// Redemption date (the last coupon date).
    #[must_use]
    pub fn redemption(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Coupon period in days.
    #[must_use]
    pub fn period_days(&self) -> u32 {
        self.period_days
    }

    /// Convention the schedule was rolled with.
    #[must_use]
    pub fn convention(&self) -> DateConvention {
        self.convention
    }

    /// Coupons per year: the convention's year length over the period.
    #[must_use]
    pub fn coupons_per_year(&self) -> f64 {
        f64::from(self.convention.year_days()) / f64::from(self.period_days)
    }

    /// Days from `settlement` to the next coupon (DSC).
    #[must_use]
    pub fn days_to_next_coupon(&self, settlement: Date) -> i64 {
        self.convention.day_diff(settlement, self.first_coupon())
    }
}

impl<'de> Deserialize<'de> for CouponSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CouponScheduleData {
            dates: Vec<Date>,
            period_days: u32,
            convention: DateConvention,
        }

        let data = CouponScheduleData::deserialize(deserializer)?;
        if data.dates.is_empty() {
            return Err(serde::de::Error::custom("coupon schedule has no dates"));
        }
        if !data.dates.windows(2).all(|w| w[0] < w[1]) {
            return Err(serde::de::Error::custom(
                "coupon dates must be strictly ascending",
            ));
        }
        if data.period_days == 0 {
            return Err(serde::de::Error::custom("coupon period must be positive"));
        }

        Ok(Self {
            dates: data.dates,
            period_days: data.period_days,
            convention: data.convention,
        })
    }
}
