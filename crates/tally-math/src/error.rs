//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm exhausted its iterations.
    #[error(
        "Convergence failed after {iterations} iterations (last iterate: {last_iterate}, residual: {residual:.2e})"
    )]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// The final iterate.
        last_iterate: f64,
        /// Function value at the final iterate.
        residual: f64,
    },

    /// The derivative vanished, so no Newton step can be taken.
    #[error("Stationary point at x = {x}: derivative {derivative:.2e} is zero")]
    StationaryPoint {
        /// Where the derivative vanished.
        x: f64,
        /// The (near-)zero derivative value.
        derivative: f64,
    },

    /// The function produced a non-finite value.
    #[error("Non-finite function value {value} at x = {x}")]
    NonFinite {
        /// The evaluation point.
        x: f64,
        /// The offending value.
        value: f64,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, last_iterate: f64, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            last_iterate,
            residual,
        }
    }
}
