//! Bond contract terms and their builder.

use serde::{Deserialize, Serialize};

use tally_core::daycounts::DateConvention;
use tally_core::types::Date;

use crate::error::{BondError, BondResult};

/// Default face value when none is given.
pub const DEFAULT_FACE_VALUE: f64 = 1000.0;

/// Immutable description of a bond as quoted by the market.
///
/// Rates, prices and yields are in percent: a 3.95% coupon is `3.95`, a
/// price of 96.478% of face is `96.478`. At least one of price and yield
/// must be quoted; the valuation derives the other.
///
/// # Example
///
/// ```rust
/// use tally_bonds::instruments::BondTerms;
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
/// assert_eq!(terms.face_value(), 1000.0);
/// assert_eq!(terms.yield_percent(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    settlement: Date,
    maturity: Date,
    face_value: f64,
    coupon_rate: f64,
    price_percent: Option<f64>,
    yield_percent: Option<f64>,
    period_days: Option<u32>,
    convention: DateConvention,
    call_date: Option<Date>,
    identifier: Option<String>,
}

impl BondTerms {
    /// Returns a builder for bond terms.
    #[must_use]
    pub fn builder() -> BondTermsBuilder {
        BondTermsBuilder::new()
    }

    /// Settlement date.
    #[must_use]
    pub fn settlement(&self) -> Date {
        self.settlement
    }

    /// Contractual maturity date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Date the principal is assumed repaid: the call date when present,
    /// otherwise maturity.
    #[must_use]
    pub fn redemption_date(&self) -> Date {
        self.call_date.unwrap_or(self.maturity)
    }

    /// Face value in currency units.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Annual coupon rate in percent.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Quoted clean price, percent of face.
    #[must_use]
    pub fn price_percent(&self) -> Option<f64> {
        self.price_percent
    }

    /// Quoted yield to maturity, percent.
    #[must_use]
    pub fn yield_percent(&self) -> Option<f64> {
        self.yield_percent
    }

    /// Coupon period in days, if known.
    #[must_use]
    pub fn period_days(&self) -> Option<u32> {
        self.period_days
    }

    /// Date convention used for every day count of this bond.
    #[must_use]
    pub fn convention(&self) -> DateConvention {
        self.convention
    }

    /// Call date, if the bond is callable.
    #[must_use]
    pub fn call_date(&self) -> Option<Date> {
        self.call_date
    }

    /// Security identifier label (CUSIP, ISIN, ...), display only.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Checks every invariant of the terms.
    ///
    /// [`BondTermsBuilder::build`] calls this; it is public so terms obtained
    /// through deserialization can be checked too.
    pub fn validate(&self) -> BondResult<()> {
        let redemption = self.redemption_date();
        if self.settlement >= redemption {
            return Err(BondError::InvalidDateOrdering {
                settlement: self.settlement,
                maturity: redemption,
            });
        }

        if let Some(call_date) = self.call_date {
            if call_date > self.maturity {
                return Err(BondError::invalid_spec(format!(
                    "call date {call_date} is after maturity {}",
                    self.maturity
                )));
            }
        }

        if self.convention.day_diff(self.settlement, redemption) <= 0 {
            return Err(BondError::invalid_spec(format!(
                "no days between {} and {redemption} under {}",
                self.settlement, self.convention
            )));
        }

        if !(self.face_value.is_finite() && self.face_value > 0.0) {
            return Err(BondError::invalid_spec(format!(
                "face value must be positive, got {}",
                self.face_value
            )));
        }

        if !(self.coupon_rate.is_finite() && self.coupon_rate >= 0.0) {
            return Err(BondError::invalid_spec(format!(
                "coupon rate cannot be negative, got {}",
                self.coupon_rate
            )));
        }

        if let Some(price) = self.price_percent {
            if !(price.is_finite() && price > 0.0) {
                return Err(BondError::invalid_spec(format!(
                    "price must be positive, got {price}"
                )));
            }
        }

        if let Some(ytm) = self.yield_percent {
            if !ytm.is_finite() {
                return Err(BondError::invalid_spec(format!("yield must be finite, got {ytm}")));
            }
        }

        match (self.price_percent, self.yield_percent) {
            (None, None) => return Err(BondError::missing_field("price or yield")),
            (Some(_), None) if self.period_days.is_none() => {
                return Err(BondError::missing_field("yield (required to infer the coupon period)"));
            }
            _ => {}
        }

        if self.period_days == Some(0) {
            return Err(BondError::invalid_spec("coupon period must be positive"));
        }

        Ok(())
    }
}

/// Builder for [`BondTerms`].
#[derive(Debug, Clone, Default)]
pub struct BondTermsBuilder {
    settlement: Option<Date>,
    maturity: Option<Date>,
    face_value: Option<f64>,
    coupon_rate: Option<f64>,
    price_percent: Option<f64>,
    yield_percent: Option<f64>,
    period_days: Option<u32>,
    convention: DateConvention,
    call_date: Option<Date>,
    identifier: Option<String>,
}

impl BondTermsBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the settlement date. Defaults to today.
    #[must_use]
    pub fn settlement(mut self, date: Date) -> Self {
        self.settlement = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Sets the face value. Defaults to 1000.
    #[must_use]
    pub fn face_value(mut self, value: f64) -> Self {
        self.face_value = Some(value);
        self
    }

    /// Sets the annual coupon rate in percent.
    #[must_use]
    pub fn coupon_rate(mut self, rate: f64) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the quoted clean price in percent of face.
    #[must_use]
    pub fn price(mut self, price_percent: f64) -> Self {
        self.price_percent = Some(price_percent);
        self
    }

    /// Sets the quoted yield to maturity in percent.
    #[must_use]
    pub fn yield_percent(mut self, yield_percent: f64) -> Self {
        self.yield_percent = Some(yield_percent);
        self
    }

    /// Sets the coupon period in days. Inferred from price and yield when omitted.
    #[must_use]
    pub fn period_days(mut self, days: u32) -> Self {
        self.period_days = Some(days);
        self
    }

    /// Sets the date convention. Defaults to 30/360.
    #[must_use]
    pub fn convention(mut self, convention: DateConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Sets a call date; the bond is then valued as maturing on it.
    #[must_use]
    pub fn call_date(mut self, date: Date) -> Self {
        self.call_date = Some(date);
        self
    }

    /// Attaches a security identifier label.
    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Builds the terms, checking every invariant.
    pub fn build(self) -> BondResult<BondTerms> {
        let maturity = self
            .maturity
            .ok_or_else(|| BondError::missing_field("maturity"))?;
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;

        let terms = BondTerms {
            settlement: self.settlement.unwrap_or_else(Date::today),
            maturity,
            face_value: self.face_value.unwrap_or(DEFAULT_FACE_VALUE),
            coupon_rate,
            price_percent: self.price_percent,
            yield_percent: self.yield_percent,
            period_days: self.period_days,
            convention: self.convention,
            call_date: self.call_date,
            identifier: self.identifier,
        };

        terms.validate()?;
        Ok(terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn base() -> BondTermsBuilder {
        BondTerms::builder()
            .settlement(date("04/03/2024"))
            .maturity(date("04/23/2027"))
            .coupon_rate(3.95)
            .price(96.478)
            .yield_percent(5.211)
            .period_days(180)
    }

    #[test]
    fn test_builder_defaults() {
        let terms = base().build().unwrap();

        assert_eq!(terms.face_value(), 1000.0);
        assert_eq!(terms.convention(), DateConvention::ThirtyThreeSixty);
        assert_eq!(terms.redemption_date(), date("04/23/2027"));
        assert_eq!(terms.identifier(), None);
    }

    #[test]
    fn test_settlement_defaults_to_today() {
        let terms = BondTerms::builder()
            .maturity(Date::today().add_days(400).unwrap())
            .coupon_rate(4.0)
            .yield_percent(4.0)
            .period_days(180)
            .build()
            .unwrap();

        assert_eq!(terms.settlement(), Date::today());
    }

    #[test]
    fn test_missing_fields() {
        let result = BondTerms::builder().coupon_rate(1.0).build();
        assert_eq!(result, Err(BondError::missing_field("maturity")));

        let result = BondTerms::builder().maturity(date("04/23/2027")).build();
        assert_eq!(result, Err(BondError::missing_field("coupon_rate")));
    }

    #[test]
    fn test_price_or_yield_required() {
        let result = BondTerms::builder()
            .settlement(date("04/03/2024"))
            .maturity(date("04/23/2027"))
            .coupon_rate(3.95)
            .period_days(180)
            .build();

        assert!(matches!(result, Err(BondError::MissingField { .. })));
    }

    #[test]
    fn test_yield_required_for_inference() {
        let result = BondTerms::builder()
            .settlement(date("04/27/2024"))
            .maturity(date("05/30/2024"))
            .coupon_rate(3.7)
            .price(100.084)
            .build();

        assert!(matches!(result, Err(BondError::MissingField { field }) if field.contains("yield")));
    }

    #[test]
    fn test_date_ordering() {
        let result = base().settlement(date("04/23/2027")).build();
        assert!(matches!(result, Err(BondError::InvalidDateOrdering { .. })));

        let result = base().settlement(date("05/01/2027")).build();
        assert!(matches!(result, Err(BondError::InvalidDateOrdering { .. })));
    }

    #[test]
    fn test_numeric_validation() {
        assert!(matches!(
            base().face_value(0.0).build(),
            Err(BondError::InvalidSpec { .. })
        ));
        assert!(matches!(
            base().coupon_rate(-0.5).build(),
            Err(BondError::InvalidSpec { .. })
        ));
        assert!(matches!(
            base().price(0.0).build(),
            Err(BondError::InvalidSpec { .. })
        ));
        assert!(matches!(
            base().yield_percent(f64::NAN).build(),
            Err(BondError::InvalidSpec { .. })
        ));
        assert!(matches!(
            base().period_days(0).build(),
            Err(BondError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn test_zero_rate_is_allowed() {
        assert!(base().coupon_rate(0.0).build().is_ok());
    }

    #[test]
    fn test_no_thirty_360_days() {
        // 03/30 -> 03/31 is a zero-day span under 30/360
        let result = base()
            .settlement(date("03/30/2024"))
            .maturity(date("03/31/2024"))
            .build();
        assert!(matches!(result, Err(BondError::InvalidSpec { .. })));

        let result = base()
            .settlement(date("03/30/2024"))
            .maturity(date("03/31/2024"))
            .convention(DateConvention::Actual)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_call_date() {
        let terms = base().call_date(date("04/23/2026")).build().unwrap();
        assert_eq!(terms.redemption_date(), date("04/23/2026"));
        assert_eq!(terms.maturity(), date("04/23/2027"));

        let result = base().call_date(date("04/23/2028")).build();
        assert!(matches!(result, Err(BondError::InvalidSpec { .. })));

        let result = base().call_date(date("04/01/2024")).build();
        assert!(matches!(result, Err(BondError::InvalidDateOrdering { .. })));
    }

    #[test]
    fn test_identifier_label() {
        let terms = base().identifier("037833100").build().unwrap();
        assert_eq!(terms.identifier(), Some("037833100"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let terms = base().identifier("TEST").build().unwrap();
        let json = serde_json::to_string(&terms).unwrap();
        assert!(json.contains("\"04/03/2024\""));

        let parsed: BondTerms = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, terms);
        assert!(parsed.validate().is_ok());
    }
}
