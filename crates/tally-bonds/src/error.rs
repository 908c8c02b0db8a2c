//! Error types for bond operations.

use thiserror::Error;

use tally_core::{Date, TallyError};
use tally_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Core library error (bad date text, unknown convention token).
    #[error("Core error: {0}")]
    Core(#[from] TallyError),

    /// Settlement is not strictly before the redemption date.
    #[error("Settlement date {settlement} must be before maturity {maturity}")]
    InvalidDateOrdering {
        /// Settlement date.
        settlement: Date,
        /// Maturity (or call) date.
        maturity: Date,
    },

    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// No candidate coupon period reproduces the quoted price.
    #[error("Could not infer the coupon period, tried (period, price): {tried:?}")]
    ScheduleInference {
        /// Every candidate period with the price it produced.
        tried: Vec<(u32, f64)>,
    },

    /// Yield root finding failed.
    #[error("Yield calculation failed: {0}")]
    Convergence(#[from] MathError),

    /// The cash flows do not reconcile with the total return.
    ///
    /// This indicates a bug in the engine rather than bad input.
    #[error("Internal inconsistency: total return {expected} but cash flows net to {actual}")]
    InternalInconsistency {
        /// Total return from the closed-form decomposition.
        expected: f64,
        /// Sum of cash flows less the purchase price.
        actual: f64,
    },
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
