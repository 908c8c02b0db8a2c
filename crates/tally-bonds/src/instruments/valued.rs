//! Valued bond: a priced snapshot of [`BondTerms`].

use std::collections::BTreeMap;

use tally_core::types::Date;

use crate::cashflows::{infer_schedule, CouponSchedule};
use crate::config::ValuationConfig;
use crate::error::{BondError, BondResult};
use crate::instruments::BondTerms;
use crate::pricing::{textbook_price, AverageInvestment, PricingMethod, SpreadsheetFormula, YieldSolver};

/// Maximum drift between the cash-flow sum and the return decomposition.
const RETURN_IDENTITY_TOLERANCE: f64 = 1e-6;

/// A bond valued on its settlement date.
///
/// Everything is computed once in [`ValuedBond::new`]: the schedule (given or
/// inferred), the missing one of price and yield, cash flows, total return
/// and APY. The snapshot never changes afterwards; the `*_for` methods
/// evaluate other prices or yields without touching it.
///
/// # Example
///
/// ```rust
/// use tally_bonds::instruments::{BondTerms, ValuedBond};
/// use tally_core::types::Date;
///
/// let terms = BondTerms::builder()
///     .settlement(Date::parse("04/03/2024").unwrap())
///     .maturity(Date::parse("04/23/2027").unwrap())
///     .coupon_rate(3.95)
///     .price(96.478)
///     .period_days(180)
///     .build()
///     .unwrap();
///
/// let bond = ValuedBond::new(terms).unwrap();
/// assert!((bond.yield_percent() - 5.211).abs() < 1e-3);
/// assert_eq!(bond.coupon_count(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct ValuedBond {
    terms: BondTerms,
    config: ValuationConfig,
    schedule: CouponSchedule,
    formula: SpreadsheetFormula,
    price_percent: f64,
    yield_percent: f64,
    coupon: f64,
    cash_flows: BTreeMap<Date, f64>,
    total_return: f64,
    apy: f64,
}

impl ValuedBond {
    /// Values the bond with the default configuration.
    pub fn new(terms: BondTerms) -> BondResult<Self> {
        Self::with_config(terms, ValuationConfig::default())
    }

    /// Values the bond with an explicit configuration.
    pub fn with_config(terms: BondTerms, config: ValuationConfig) -> BondResult<Self> {
        terms.validate()?;

        let schedule = match terms.period_days() {
            Some(period) => CouponSchedule::generate(
                terms.settlement(),
                terms.redemption_date(),
                period,
                terms.convention(),
            )?,
            None => infer_schedule(&terms, &config)?,
        };
        let formula = SpreadsheetFormula::from_schedule(&schedule, terms.settlement(), terms.coupon_rate());

        let (price_percent, yield_percent) = match (terms.price_percent(), terms.yield_percent()) {
            (Some(price), Some(ytm)) => (price, ytm),
            (Some(price), None) => {
                let ytm = Self::solver(&config).solve(&formula, price)?.yield_percent;
                (price, ytm)
            }
            (None, Some(ytm)) => (formula.price(ytm), ytm),
            (None, None) => return Err(BondError::missing_field("price or yield")),
        };

        let face = terms.face_value();
        let coupon = terms.coupon_rate() / schedule.coupons_per_year() / 100.0 * face;

        let mut cash_flows: BTreeMap<Date, f64> =
            schedule.dates().iter().map(|&date| (date, coupon)).collect();
        *cash_flows.entry(schedule.redemption()).or_insert(0.0) += face;

        let price = price_percent / 100.0 * face;
        let total_return = schedule.len() as f64 * coupon + (face - price);

        let net_cash = cash_flows.values().sum::<f64>() - price;
        if (net_cash - total_return).abs() >= RETURN_IDENTITY_TOLERANCE {
            return Err(BondError::InternalInconsistency {
                expected: total_return,
                actual: net_cash,
            });
        }

        let days = terms
            .convention()
            .day_diff(terms.settlement(), terms.redemption_date());
        let apy = total_return / price * 100.0 / days as f64 * f64::from(terms.convention().year_days());

        log::debug!(
            "valued {}: {} coupons of {coupon:.4} every {} days, price {price_percent}%, yield {yield_percent:.6}%",
            terms.identifier().unwrap_or("bond"),
            schedule.len(),
            schedule.period_days()
        );

        Ok(Self {
            terms,
            config,
            schedule,
            formula,
            price_percent,
            yield_percent,
            coupon,
            cash_flows,
            total_return,
            apy,
        })
    }

    fn solver(config: &ValuationConfig) -> YieldSolver {
        YieldSolver::new()
            .with_config(config.solver)
            .with_initial_guess(config.initial_yield_guess)
    }

    // ===== snapshot =====

    /// The terms this bond was valued from.
    #[must_use]
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// Configuration used for the valuation.
    #[must_use]
    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    /// The coupon schedule (given or inferred).
    #[must_use]
    pub fn schedule(&self) -> &CouponSchedule {
        &self.schedule
    }

    /// Clean price, percent of face.
    #[must_use]
    pub fn price_percent(&self) -> f64 {
        self.price_percent
    }

    /// Yield to maturity, percent.
    #[must_use]
    pub fn yield_percent(&self) -> f64 {
        self.yield_percent
    }

    /// Clean price in currency units.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price_percent / 100.0 * self.terms.face_value()
    }

    /// Remaining coupons plus redemption gain over the clean price, in currency.
    #[must_use]
    pub fn total_return(&self) -> f64 {
        self.total_return
    }

    /// Total return annualized linearly over the holding period, percent.
    #[must_use]
    pub fn apy(&self) -> f64 {
        self.apy
    }

    /// Remaining coupon dates, ascending.
    #[must_use]
    pub fn coupon_dates(&self) -> &[Date] {
        self.schedule.dates()
    }

    /// Number of remaining coupons.
    #[must_use]
    pub fn coupon_count(&self) -> usize {
        self.schedule.len()
    }

    /// Coupon period in days.
    #[must_use]
    pub fn period_days(&self) -> u32 {
        self.schedule.period_days()
    }

    /// Amount of each coupon in currency.
    #[must_use]
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Coupons per year.
    #[must_use]
    pub fn coupons_per_year(&self) -> f64 {
        self.schedule.coupons_per_year()
    }

    /// Cash flows by date; the redemption date includes the face value.
    #[must_use]
    pub fn cash_flows(&self) -> &BTreeMap<Date, f64> {
        &self.cash_flows
    }

    /// Security identifier label, if any.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.terms.identifier()
    }

    // ===== recomputation =====

    /// Price in percent of face at `yield_percent`.
    #[must_use]
    pub fn price_for(&self, yield_percent: f64, method: PricingMethod) -> f64 {
        match method {
            PricingMethod::Spreadsheet => self.formula.price(yield_percent),
            PricingMethod::Textbook => {
                let days = self.days_to_redemption();
                let whole_years = days.div_euclid(i64::from(self.year_days())).max(1);
                textbook_price(
                    yield_percent,
                    self.terms.coupon_rate(),
                    u32::try_from(whole_years).unwrap_or(u32::MAX),
                    self.terms.face_value(),
                )
            }
        }
    }

    /// Yield in percent that reproduces `price_percent` under the spreadsheet formula.
    pub fn yield_for(&self, price_percent: f64) -> BondResult<f64> {
        if !(price_percent.is_finite() && price_percent > 0.0) {
            return Err(BondError::invalid_spec(format!(
                "price must be positive, got {price_percent}"
            )));
        }
        Ok(Self::solver(&self.config)
            .solve(&self.formula, price_percent)?
            .yield_percent)
    }

    /// Average-investment yield approximation in percent.
    #[must_use]
    pub fn approx_yield_for(&self, price_percent: f64) -> f64 {
        self.average_investment().yield_percent(price_percent)
    }

    /// Inverse of [`ValuedBond::approx_yield_for`]: price in percent of face.
    #[must_use]
    pub fn approx_price_for(&self, yield_percent: f64) -> f64 {
        self.average_investment().price_percent(yield_percent)
    }

    fn average_investment(&self) -> AverageInvestment {
        AverageInvestment::new(
            self.terms.face_value(),
            self.coupon_count() as f64 * self.coupon,
            self.days_to_redemption(),
            self.year_days(),
        )
    }

    fn days_to_redemption(&self) -> i64 {
        self.terms
            .convention()
            .day_diff(self.terms.settlement(), self.terms.redemption_date())
    }

    fn year_days(&self) -> u32 {
        self.terms.convention().year_days()
    }
}
