//! End-to-end valuation scenarios against spreadsheet reference quotes.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use tally::prelude::*;

fn date(s: &str) -> Date {
    Date::parse(s).unwrap()
}

// ===== Scenario 1: one coupon left =====

fn short_bond(settlement: &str) -> BondTerms {
    BondTerms::builder()
        .settlement(date(settlement))
        .maturity(date("05/03/2024"))
        .coupon_rate(3.375)
        .price(99.953)
        .yield_percent(8.872)
        .period_days(180)
        .build()
        .unwrap()
}

#[test]
fn single_coupon_reproduces_quote() {
    // Three 30/360 days to redemption
    let bond = ValuedBond::new(short_bond("04/30/2024")).unwrap();

    assert_eq!(bond.coupon_count(), 1);
    assert_abs_diff_eq!(
        bond.price_for(8.872, PricingMethod::Spreadsheet),
        99.953,
        epsilon = 1e-3
    );
    assert_abs_diff_eq!(bond.yield_for(99.953).unwrap(), 8.872, epsilon = 1e-3);
}

#[test]
fn single_coupon_is_self_consistent() {
    let bond = ValuedBond::new(short_bond("04/27/2024")).unwrap();

    assert_eq!(bond.coupon_dates(), &[date("05/03/2024")]);
    let price = bond.price_for(8.872, PricingMethod::Spreadsheet);
    assert_abs_diff_eq!(price, 99.906_110, epsilon = 1e-5);
    assert_abs_diff_eq!(bond.yield_for(price).unwrap(), 8.872, epsilon = 1e-9);
}

#[test]
fn single_coupon_never_uses_root_finder() {
    let config =
        ValuationConfig::default().with_solver(SolverConfig::default().with_max_iterations(0));

    let terms = BondTerms::builder()
        .settlement(date("04/30/2024"))
        .maturity(date("05/03/2024"))
        .coupon_rate(3.375)
        .price(99.953)
        .period_days(180)
        .build()
        .unwrap();
    let bond = ValuedBond::with_config(terms, config.clone()).unwrap();
    assert_abs_diff_eq!(bond.yield_percent(), 8.871_950_9, epsilon = 1e-6);

    // The same solver settings fail as soon as iteration is needed.
    let terms = BondTerms::builder()
        .settlement(date("04/03/2024"))
        .maturity(date("04/23/2027"))
        .coupon_rate(3.95)
        .price(96.478)
        .period_days(180)
        .build()
        .unwrap();
    assert!(matches!(
        ValuedBond::with_config(terms, config),
        Err(BondError::Convergence(MathError::ConvergenceFailed { .. }))
    ));
}

#[test]
fn single_coupon_closed_form_differs_from_compounded_root() {
    // Solving the compounded (multi-coupon style) formula with one coupon
    // by Newton gives a different yield than the simple-interest closed form:
    // 9.06825 against 8.87195.
    let bond = ValuedBond::new(short_bond("04/30/2024")).unwrap();
    let closed = bond.yield_for(99.953).unwrap();

    let e = 180.0_f64;
    let dsc = 3.0_f64;
    let coupon = 3.375 / 2.0;
    let compounded = |y: f64| {
        (100.0 + coupon) / (1.0 + y / 200.0).powf(dsc / e) - coupon * (e - dsc) / e - 99.953
    };
    let root = tally::tally_math::solvers::newton_raphson_numerical(
        compounded,
        5.0,
        &SolverConfig::default(),
    )
    .unwrap()
    .root;

    assert_abs_diff_eq!(closed, 8.871_951, epsilon = 1e-6);
    assert_abs_diff_eq!(root, 9.068_245, epsilon = 1e-6);
    assert_abs_diff_eq!(root - closed, 0.196_294, epsilon = 1e-6);
}

// ===== Scenario 2: three-year semiannual bond =====

fn three_year(price: Option<f64>, yield_percent: Option<f64>) -> BondTerms {
    let mut builder = BondTerms::builder()
        .settlement(date("04/03/2024"))
        .maturity(date("04/23/2027"))
        .coupon_rate(3.95)
        .face_value(1000.0)
        .period_days(180);
    if let Some(price) = price {
        builder = builder.price(price);
    }
    if let Some(ytm) = yield_percent {
        builder = builder.yield_percent(ytm);
    }
    builder.build().unwrap()
}

#[test]
fn three_year_recomputes_quotes() {
    let bond = ValuedBond::new(three_year(Some(96.478), Some(5.211))).unwrap();

    assert_eq!(bond.coupon_count(), 7);
    assert_abs_diff_eq!(
        bond.price_for(5.211, PricingMethod::Spreadsheet),
        96.478,
        epsilon = 1e-3
    );
    assert_abs_diff_eq!(bond.yield_for(96.478).unwrap(), 5.211, epsilon = 1e-3);
}

#[test]
fn three_year_return_and_apy() {
    let bond = ValuedBond::new(three_year(Some(96.478), Some(5.211))).unwrap();

    assert_abs_diff_eq!(bond.total_return(), 173.47, epsilon = 1e-9);
    assert_abs_diff_eq!(bond.apy(), 5.8845, epsilon = 1e-4);

    let net: f64 = bond.cash_flows().values().sum::<f64>() - bond.price();
    assert_abs_diff_eq!(net, bond.total_return(), epsilon = 1e-6);
}

#[test]
fn three_year_derives_missing_side() {
    let from_price = ValuedBond::new(three_year(Some(96.478), None)).unwrap();
    assert_abs_diff_eq!(from_price.yield_percent(), 5.211, epsilon = 1e-3);

    let from_yield = ValuedBond::new(three_year(None, Some(5.211))).unwrap();
    assert_abs_diff_eq!(from_yield.price_percent(), 96.478, epsilon = 1e-3);
}

#[test]
fn three_year_alternative_methods() {
    let bond = ValuedBond::new(three_year(Some(96.478), Some(5.211))).unwrap();

    assert_abs_diff_eq!(
        bond.price_for(5.211, PricingMethod::Textbook),
        96.5795,
        epsilon = 1e-4
    );
    let approx = bond.approx_yield_for(96.478);
    assert_abs_diff_eq!(approx, 5.779, epsilon = 1e-3);
    assert_abs_diff_eq!(bond.approx_price_for(approx), 96.478, epsilon = 1e-9);
}

// ===== Scenario 3: coupon period inferred =====

#[test]
fn inferred_period() {
    let terms = BondTerms::builder()
        .settlement(date("04/27/2024"))
        .maturity(date("05/30/2024"))
        .coupon_rate(3.7)
        .price(100.084)
        .yield_percent(2.649)
        .identifier("SCENARIO-3")
        .build()
        .unwrap();
    let bond = ValuedBond::new(terms).unwrap();

    assert_eq!(bond.period_days(), 180);
    assert_eq!(bond.coupon_count(), 1);
    assert_eq!(bond.coupons_per_year(), 2.0);
    assert_eq!(bond.identifier(), Some("SCENARIO-3"));
}

#[test]
fn inference_failure_reports_candidates() {
    let terms = BondTerms::builder()
        .settlement(date("04/27/2024"))
        .maturity(date("05/30/2024"))
        .coupon_rate(3.7)
        .price(97.0)
        .yield_percent(2.649)
        .build()
        .unwrap();

    match ValuedBond::new(terms) {
        Err(BondError::ScheduleInference { tried }) => assert_eq!(tried.len(), 7),
        other => panic!("expected inference failure, got {other:?}"),
    }
}

// ===== Input errors =====

#[test]
fn bad_convention_token() {
    let result: Result<DateConvention, BondError> = "ACT/ACT".parse::<DateConvention>().map_err(Into::into);
    assert!(matches!(
        result,
        Err(BondError::Core(TallyError::InvalidConvention { .. }))
    ));
}

#[test]
fn bad_date_text() {
    assert!(matches!(
        Date::parse("2024-04-27"),
        Err(TallyError::InvalidDate { .. })
    ));
    assert!(matches!(
        Date::parse("02/30/2024"),
        Err(TallyError::InvalidDate { .. })
    ));
}

#[test]
fn unpadded_date_text() {
    assert!(matches!(
        Date::parse("4/3/2024"),
        Err(TallyError::InvalidDate { .. })
    ));
}

#[test]
fn period_beyond_calendar_range() {
    let terms = BondTerms::builder()
        .settlement(date("04/27/2024"))
        .maturity(date("05/03/2024"))
        .coupon_rate(3.375)
        .price(99.953)
        .period_days(u32::MAX)
        .convention(DateConvention::Actual)
        .build()
        .unwrap();

    assert!(matches!(
        ValuedBond::new(terms),
        Err(BondError::Core(TallyError::InvalidDate { .. }))
    ));
}

#[test]
fn settlement_after_maturity() {
    let result = BondTerms::builder()
        .settlement(date("05/04/2024"))
        .maturity(date("05/03/2024"))
        .coupon_rate(3.375)
        .price(99.953)
        .period_days(180)
        .build();

    assert!(matches!(result, Err(BondError::InvalidDateOrdering { .. })));
}

// ===== Properties =====

proptest! {
    #[test]
    fn price_yield_round_trip(ytm in 0.0f64..20.0) {
        let bond = ValuedBond::new(three_year(None, Some(ytm))).unwrap();
        let recovered = bond.yield_for(bond.price_percent()).unwrap();
        prop_assert!((recovered - ytm).abs() < 1e-6);
    }

    #[test]
    fn return_identity_holds(
        ytm in 0.0f64..15.0,
        rate in 0.0f64..10.0,
        years in 1i64..30,
        period_index in 0usize..4,
    ) {
        let periods = [30u32, 90, 180, 360];
        let settlement = date("04/03/2024");
        let terms = BondTerms::builder()
            .settlement(settlement)
            .maturity(settlement.add_days(years * 365 + 17).unwrap())
            .coupon_rate(rate)
            .yield_percent(ytm)
            .period_days(periods[period_index])
            .build()
            .unwrap();
        let bond = ValuedBond::new(terms).unwrap();

        let net: f64 = bond.cash_flows().values().sum::<f64>() - bond.price();
        prop_assert!((net - bond.total_return()).abs() < 1e-6);
        prop_assert_eq!(*bond.coupon_dates().last().unwrap(), bond.terms().maturity());
    }
}
