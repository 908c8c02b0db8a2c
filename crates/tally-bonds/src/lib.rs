//! # Tally Bonds
//!
//! Bond valuation for the Tally library, matching spreadsheet bond functions.
//!
//! This crate provides:
//!
//! - **Instruments**: [`BondTerms`](instruments::BondTerms) and the valued
//!   snapshot [`ValuedBond`](instruments::ValuedBond)
//! - **Cash Flows**: coupon schedules rolled back from maturity, and
//!   coupon period inference from a price/yield quote
//! - **Pricing**: spreadsheet PRICE/YIELD, textbook price, yield approximation
//! - **Configuration**: [`ValuationConfig`](config::ValuationConfig)
//!
//! ## Example
//!
//! ```rust
//! use tally_bonds::prelude::*;
//! use tally_core::types::Date;
//!
//! let terms = BondTerms::builder()
//!     .settlement(Date::parse("04/27/2024").unwrap())
//!     .maturity(Date::parse("05/30/2024").unwrap())
//!     .coupon_rate(3.7)
//!     .price(100.084)
//!     .yield_percent(2.649)
//!     .build()
//!     .unwrap();
//!
//! // No coupon period given: it is inferred from the quote.
//! let bond = ValuedBond::new(terms).unwrap();
//! assert_eq!(bond.period_days(), 180);
//! assert_eq!(bond.coupon_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_pass_by_value)]

pub mod cashflows;
pub mod config;
pub mod error;
pub mod instruments;
pub mod pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{infer_schedule, CouponSchedule};
    pub use crate::config::ValuationConfig;
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{BondTerms, BondTermsBuilder, ValuedBond};
    pub use crate::pricing::{PricingMethod, SpreadsheetFormula, YieldResult, YieldSolver};
}

pub use error::{BondError, BondResult};
