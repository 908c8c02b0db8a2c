//! Root-finding algorithms.
//!
//! - [`newton_raphson`]: Newton-Raphson with an analytic derivative
//! - [`newton_raphson_numerical`]: Newton-Raphson with a symmetric
//!   finite-difference derivative
//!
//! Yield-to-maturity inversion uses the numerical variant: the spreadsheet
//! price formula is awkward to differentiate by hand and converges in a
//! handful of steps from a 5% starting guess.
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use tally_math::solvers::{newton_raphson_numerical, SolverConfig};
//!
//! // 5% annual coupon, 5 years, price 95 (yield in percent)
//! let price_fn = |y: f64| {
//!     let r = y / 100.0;
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + r).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + r).powi(5);
//!     pv - 95.0
//! };
//!
//! let result = newton_raphson_numerical(price_fn, 5.0, &SolverConfig::default()).unwrap();
//! assert!(result.root > 5.0); // discount bond yields more than its coupon
//! ```

mod newton;

pub use newton::{newton_raphson, newton_raphson_numerical};

use serde::{Deserialize, Serialize};

use crate::error::MathResult;

/// Default tolerance on `|f(x)|` for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Convergence threshold on the absolute function value.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Trait for derivative-free root finders.
pub trait RootFinder {
    /// Finds a root of `f` starting from `initial_guess`.
    ///
    /// # Arguments
    ///
    /// * `f` - The function for which to find a root
    /// * `initial_guess` - Starting point for the search
    /// * `config` - Solver configuration
    fn find_root<F>(&self, f: F, initial_guess: f64, config: &SolverConfig) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Newton-Raphson with a finite-difference derivative.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver;

impl RootFinder for NewtonSolver {
    fn find_root<F>(&self, f: F, initial_guess: f64, config: &SolverConfig) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
    {
        newton_raphson_numerical(f, initial_guess, config)
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_solver_config_defaults() {
        let config = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_solver_config_partial_json() {
        let config: SolverConfig = serde_json::from_str(r#"{"max_iterations": 20}"#).unwrap();
        assert_eq!(config.max_iterations, 20);
        assert!((config.tolerance - DEFAULT_TOLERANCE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_root_finder_trait() {
        let solver = NewtonSolver;
        let f = |x: f64| x * x - 2.0;

        let result = solver.find_root(f, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert_eq!(solver.name(), "Newton-Raphson");
    }

    // ============ YTM-like Financial Tests ============

    /// Price per 100 face of a bullet bond, yield in percent.
    fn bond_price(yield_percent: f64, coupon: f64, years: i32, freq: i32) -> f64 {
        let periods = years * freq;
        let coupon_per_period = coupon / f64::from(freq);
        let discount_rate = yield_percent / 100.0 / f64::from(freq);

        let mut pv = 0.0;
        for t in 1..=periods {
            pv += coupon_per_period / (1.0 + discount_rate).powi(t);
        }
        pv + 100.0 / (1.0 + discount_rate).powi(periods)
    }

    #[test]
    fn test_ytm_par_bond() {
        let f = |y: f64| bond_price(y, 5.0, 10, 2) - 100.0;

        let result = NewtonSolver.find_root(f, 5.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 5.0, epsilon = 1e-8);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_ytm_discount_and_premium() {
        let discount = |y: f64| bond_price(y, 5.0, 5, 2) - 95.0;
        let premium = |y: f64| bond_price(y, 7.0, 5, 2) - 105.0;
        let config = SolverConfig::default();

        let d = NewtonSolver.find_root(discount, 5.0, &config).unwrap();
        let p = NewtonSolver.find_root(premium, 5.0, &config).unwrap();

        assert!(d.root > 5.0);
        assert!(p.root < 7.0);
        assert!(discount(d.root).abs() < 1e-10);
        assert!(premium(p.root).abs() < 1e-10);
    }
}
