//! Error types for the Tally core crate.
//!
//! Dates and day count conventions are the only user input this crate
//! validates, so the taxonomy stays small.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type TallyResult<T> = Result<T, TallyError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// Date text that is not `MM/DD/YYYY`, or an impossible calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Unrecognized date convention token.
    #[error("Invalid date convention '{token}': expected '30/360' or 'actual'")]
    InvalidConvention {
        /// The token that failed to parse.
        token: String,
    },
}

impl TallyError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid convention error.
    #[must_use]
    pub fn invalid_convention(token: impl Into<String>) -> Self {
        Self::InvalidConvention {
            token: token.into(),
        }
    }
}
