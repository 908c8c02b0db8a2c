//! Average-investment yield approximation.
//!
//! Annual income plus the straight-line pull to par, over the average of
//! price and face:
//!
//! $$y \approx \frac{I + (F - P)/n}{(P + F)/2}$$
//!
//! where `I` is the annual interest, `F` the face value, `P` the price and
//! `n` the years to maturity. [`AverageInvestment::price`] solves the same
//! relation for `P`.

/// Inputs of the approximation, in currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageInvestment {
    /// Face value.
    pub face_value: f64,
    /// Interest received per year.
    pub annual_interest: f64,
    /// Years to maturity (fractional).
    pub years: f64,
}

impl AverageInvestment {
    /// Builds the inputs from total remaining interest and the day count to
    /// maturity.
    #[must_use]
    pub fn new(face_value: f64, total_interest: f64, days_to_maturity: i64, year_days: u32) -> Self {
        let days = days_to_maturity as f64;
        let year_days = f64::from(year_days);
        Self {
            face_value,
            annual_interest: total_interest / days * year_days,
            years: days / year_days,
        }
    }

    /// Approximate yield in percent for a price in percent of face.
    #[must_use]
    pub fn yield_percent(&self, price_percent: f64) -> f64 {
        let price = price_percent / 100.0 * self.face_value;
        let numerator = self.annual_interest + (self.face_value - price) / self.years;
        numerator / ((price + self.face_value) / 2.0) * 100.0
    }

    /// Approximate price in percent of face for a yield in percent.
    #[must_use]
    pub fn price_percent(&self, yield_percent: f64) -> f64 {
        let yld = yield_percent / 100.0;
        let price = (self.annual_interest + self.face_value / self.years - yld * self.face_value / 2.0)
            / (yld / 2.0 + 1.0 / self.years);
        price / self.face_value * 100.0
    }
}
