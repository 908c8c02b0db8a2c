//! Valuation settings.
//!
//! Everything the engine would otherwise hard-code lives here: root finder
//! settings, the Newton starting point, and the schedule inference scan.
//!
//! ```rust
//! use tally_bonds::config::ValuationConfig;
//!
//! let config: ValuationConfig =
//!     serde_json::from_str(r#"{"candidate_periods": [90, 180]}"#).unwrap();
//! assert_eq!(config.candidate_periods, vec![90, 180]);
//! assert_eq!(config.initial_yield_guess, 5.0);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use tally_math::SolverConfig;

/// Coupon periods tried, in order, when the period is not given.
pub const DEFAULT_CANDIDATE_PERIODS: [u32; 7] = [15, 30, 60, 90, 120, 180, 360];

/// Starting yield (percent) for Newton iteration.
pub const DEFAULT_INITIAL_YIELD_GUESS: f64 = 5.0;

/// Configuration for [`ValuedBond`](crate::instruments::ValuedBond).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Root finder settings for yield-to-maturity.
    pub solver: SolverConfig,

    /// Starting yield (percent) for Newton iteration.
    pub initial_yield_guess: f64,

    /// Candidate coupon periods in days, scanned in order.
    pub candidate_periods: Vec<u32>,

    /// Maximum gap between rounded computed and quoted price for a match.
    pub inference_tolerance: Decimal,

    /// Decimal places both prices are rounded to before comparison.
    pub inference_rounding_dp: u32,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            initial_yield_guess: DEFAULT_INITIAL_YIELD_GUESS,
            candidate_periods: DEFAULT_CANDIDATE_PERIODS.to_vec(),
            inference_tolerance: dec!(0.01),
            inference_rounding_dp: 3,
        }
    }
}

impl ValuationConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root finder configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the Newton starting yield (percent).
    #[must_use]
    pub fn with_initial_yield_guess(mut self, guess: f64) -> Self {
        self.initial_yield_guess = guess;
        self
    }

    /// Sets the candidate coupon periods.
    #[must_use]
    pub fn with_candidate_periods(mut self, periods: impl Into<Vec<u32>>) -> Self {
        self.candidate_periods = periods.into();
        self
    }

    /// Sets the price matching tolerance.
    #[must_use]
    pub fn with_inference_tolerance(mut self, tolerance: Decimal) -> Self {
        self.inference_tolerance = tolerance;
        self
    }

    /// Sets the rounding precision used during inference.
    #[must_use]
    pub fn with_inference_rounding_dp(mut self, dp: u32) -> Self {
        self.inference_rounding_dp = dp;
        self
    }
}
