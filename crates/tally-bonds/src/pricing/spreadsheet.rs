//! Spreadsheet PRICE and YIELD formulas.
//!
//! With `DSC` the days from settlement to the next coupon, `E` the coupon
//! period in days, `A = E - DSC`, `f` coupons per year, `N` remaining
//! coupons and redemption 100:
//!
//! $$P = \frac{100}{(1+y/f)^{N-1+DSC/E}}
//!     + \sum_{k=1}^{N} \frac{100 r/f}{(1+y/f)^{k-1+DSC/E}}
//!     - 100 \frac{r}{f} \frac{A}{E}$$
//!
//! With a single coupon left the formula collapses to simple-interest
//! discounting, which can be inverted in closed form.

use tally_core::types::Date;

use crate::cashflows::CouponSchedule;
use crate::error::{BondError, BondResult};

/// Redemption value per 100 of face.
pub const REDEMPTION: f64 = 100.0;

/// Inputs of the spreadsheet price formula for one bond on one settlement date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadsheetFormula {
    /// Annual coupon rate, percent.
    pub coupon_rate: f64,
    /// Coupons per year (`f`).
    pub frequency: f64,
    /// Days from settlement to the next coupon (`DSC`).
    pub days_to_next_coupon: f64,
    /// Days in the coupon period (`E`).
    pub period_days: f64,
    /// Remaining coupons (`N`).
    pub coupon_count: usize,
}

impl SpreadsheetFormula {
    /// Collects the formula inputs from a schedule.
    #[must_use]
    pub fn from_schedule(schedule: &CouponSchedule, settlement: Date, coupon_rate: f64) -> Self {
        Self {
            coupon_rate,
            frequency: schedule.coupons_per_year(),
            days_to_next_coupon: schedule.days_to_next_coupon(settlement) as f64,
            period_days: f64::from(schedule.period_days()),
            coupon_count: schedule.len(),
        }
    }

    /// Coupon per period per 100 of face (`100 r / f`).
    fn coupon_per_100(&self) -> f64 {
        self.coupon_rate / self.frequency
    }

    /// Accrued fraction of the current period (`A / E`).
    fn accrued_fraction(&self) -> f64 {
        (self.period_days - self.days_to_next_coupon) / self.period_days
    }

    /// Clean price in percent of face at `yield_percent`.
    #[must_use]
    pub fn price(&self, yield_percent: f64) -> f64 {
        let yld = yield_percent / 100.0;
        let coupon = self.coupon_per_100();
        let dsc_fraction = self.days_to_next_coupon / self.period_days;
        let accrued = coupon * self.accrued_fraction();

        if self.coupon_count > 1 {
            let base = 1.0 + yld / self.frequency;
            let n = self.coupon_count as f64;

            let redemption = REDEMPTION / base.powf(n - 1.0 + dsc_fraction);
            let coupons: f64 = (1..=self.coupon_count)
                .map(|k| coupon / base.powf(k as f64 - 1.0 + dsc_fraction))
                .sum();

            redemption + coupons - accrued
        } else {
            (coupon + REDEMPTION) / (1.0 + yld / self.frequency * dsc_fraction) - accrued
        }
    }

    /// Yield in percent for a single remaining coupon, solved in closed form.
    ///
    /// # Errors
    ///
    /// `InvalidSpec` if more than one coupon remains or the settlement falls
    /// on the coupon date under the day count (`DSC <= 0`).
    pub fn closed_form_yield(&self, price_percent: f64) -> BondResult<f64> {
        if self.coupon_count != 1 {
            return Err(BondError::invalid_spec(format!(
                "closed-form yield needs exactly one remaining coupon, got {}",
                self.coupon_count
            )));
        }
        if self.days_to_next_coupon <= 0.0 {
            return Err(BondError::invalid_spec(
                "settlement falls on the final coupon date under the day count",
            ));
        }

        let coupon = self.coupon_per_100();
        let accrued = coupon * self.accrued_fraction();
        let yld = ((coupon + REDEMPTION) / (price_percent + accrued) - 1.0)
            * self.frequency
            * self.period_days
            / self.days_to_next_coupon;

        Ok(yld * 100.0)
    }
}
