//! Yield-to-maturity solver for the spreadsheet price formula.
//!
//! With more than one coupon remaining the price formula is inverted with
//! Newton-Raphson (numerical derivative) from a configurable starting yield.
//! With exactly one coupon remaining the closed form is used and the root
//! finder is never called.
//!
//! # Example
//!
//! ```rust
//! use tally_bonds::cashflows::CouponSchedule;
//! use tally_bonds::pricing::{SpreadsheetFormula, YieldSolver};
//! use tally_core::daycounts::DateConvention;
//! use tally_core::types::Date;
//!
//! let settlement = Date::parse("04/03/2024").unwrap();
//! let maturity = Date::parse("04/23/2027").unwrap();
//! let schedule =
//!     CouponSchedule::generate(settlement, maturity, 180, DateConvention::ThirtyThreeSixty).unwrap();
//! let formula = SpreadsheetFormula::from_schedule(&schedule, settlement, 3.95);
//!
//! let result = YieldSolver::new().solve(&formula, 96.478).unwrap();
//! assert!((result.yield_percent - 5.211).abs() < 1e-3);
//! ```

use tally_math::solvers::{NewtonSolver, RootFinder, SolverConfig};

use crate::config::DEFAULT_INITIAL_YIELD_GUESS;
use crate::error::BondResult;
use crate::pricing::SpreadsheetFormula;

/// How a yield was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldMethod {
    /// Closed-form inversion (single remaining coupon).
    ClosedForm,
    /// Newton-Raphson iteration.
    Newton,
}

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldResult {
    /// The calculated yield in percent.
    pub yield_percent: f64,
    /// Number of iterations to converge (zero for the closed form).
    pub iterations: u32,
    /// Price error at the solution, percent of face.
    pub residual: f64,
    /// Method that produced the yield.
    pub method: YieldMethod,
}

/// Yield-to-maturity solver.
#[derive(Debug, Clone)]
pub struct YieldSolver {
    /// Solver configuration.
    config: SolverConfig,
    /// Starting yield in percent.
    initial_guess: f64,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-10
    /// Default max iterations: 100
    /// Default initial guess: 5%
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            initial_guess: DEFAULT_INITIAL_YIELD_GUESS,
        }
    }

    /// Replaces the root finder configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the starting yield in percent.
    #[must_use]
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = guess;
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Solves for the yield (percent) that reproduces `price_percent`.
    pub fn solve(&self, formula: &SpreadsheetFormula, price_percent: f64) -> BondResult<YieldResult> {
        if formula.coupon_count == 1 {
            let yield_percent = formula.closed_form_yield(price_percent)?;
            return Ok(YieldResult {
                yield_percent,
                iterations: 0,
                residual: formula.price(yield_percent) - price_percent,
                method: YieldMethod::ClosedForm,
            });
        }

        let objective = |y: f64| formula.price(y) - price_percent;
        let result = NewtonSolver.find_root(objective, self.initial_guess, &self.config)?;

        log::trace!(
            "yield {:.8}% for price {price_percent} after {} iterations",
            result.root,
            result.iterations
        );

        Ok(YieldResult {
            yield_percent: result.root,
            iterations: result.iterations,
            residual: result.residual,
            method: YieldMethod::Newton,
        })
    }
}
