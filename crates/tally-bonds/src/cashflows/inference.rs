//! Coupon period inference.
//!
//! When a quote carries price and yield but no coupon frequency, the period
//! is recovered by trying each candidate period in order, pricing the bond
//! at the quoted yield, and keeping the first period whose price matches the
//! quote once both are rounded. Rounding and comparison are done in decimal
//! so that borderline gaps are not decided by binary floating point noise.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::cashflows::CouponSchedule;
use crate::config::ValuationConfig;
use crate::error::{BondError, BondResult};
use crate::instruments::BondTerms;
use crate::pricing::SpreadsheetFormula;

/// Infers the coupon schedule from the quoted price and yield.
///
/// # Errors
///
/// - `MissingField` if the terms lack a quoted price or yield
/// - `ScheduleInference` listing every `(period, price)` tried when no
///   candidate matches
pub fn infer_schedule(terms: &BondTerms, config: &ValuationConfig) -> BondResult<CouponSchedule> {
    let quoted_price = terms
        .price_percent()
        .ok_or_else(|| BondError::missing_field("price"))?;
    let quoted_yield = terms
        .yield_percent()
        .ok_or_else(|| BondError::missing_field("yield"))?;

    let dp = config.inference_rounding_dp;
    let quoted = Decimal::from_f64(quoted_price)
        .ok_or_else(|| BondError::invalid_spec(format!("price {quoted_price} is not representable")))?
        .round_dp(dp);

    let mut tried = Vec::with_capacity(config.candidate_periods.len());

    for &period in &config.candidate_periods {
        let schedule = CouponSchedule::generate(
            terms.settlement(),
            terms.redemption_date(),
            period,
            terms.convention(),
        )?;
        let price = SpreadsheetFormula::from_schedule(&schedule, terms.settlement(), terms.coupon_rate())
            .price(quoted_yield);
        tried.push((period, price));

        let matched = Decimal::from_f64(price)
            .is_some_and(|computed| (computed.round_dp(dp) - quoted).abs() < config.inference_tolerance);

        log::debug!(
            "period {period}: {} coupons, price {price:.6} vs quoted {quoted_price} -> {}",
            schedule.len(),
            if matched { "match" } else { "no match" }
        );

        if matched {
            log::debug!("inferred coupon period of {period} days");
            return Ok(schedule);
        }
    }

    log::warn!(
        "no coupon period reproduces price {quoted_price} at yield {quoted_yield}%, tried {tried:?}"
    );
    Err(BondError::ScheduleInference { tried })
}
