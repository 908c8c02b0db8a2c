//! # Tally Core
//!
//! Core types and day count conventions for the Tally bond valuation library.
//!
//! This crate provides the foundational building blocks used throughout Tally:
//!
//! - **Types**: [`Date`], a calendar date exchanged in `MM/DD/YYYY` form
//! - **Day Count Conventions**: spreadsheet-compatible US NASD 30/360 and Actual
//! - **Errors**: [`TallyError`] for invalid dates and convention tokens
//!
//! ## Example
//!
//! ```rust
//! use tally_core::prelude::*;
//!
//! let start = Date::parse("01/15/2025").unwrap();
//! let end = Date::parse("07/15/2025").unwrap();
//!
//! let convention: DateConvention = "30/360".parse().unwrap();
//! assert_eq!(convention.day_diff(start, end), 180);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Actual365, DateConvention, DayCount, Thirty360Nasd};
    pub use crate::error::{TallyError, TallyResult};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use daycounts::DateConvention;
pub use error::{TallyError, TallyResult};
pub use types::Date;
