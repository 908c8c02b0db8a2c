//! # Tally
//!
//! Spreadsheet-compatible bond valuation.
//!
//! Converts between clean price and yield to maturity the way spreadsheet
//! PRICE and YIELD functions do, including their US NASD 30/360 day count,
//! and reports realized return and annualized yield.
//!
//! This crate re-exports the public API of:
//!
//! - [`tally_core`]: dates, day count conventions, core errors
//! - [`tally_math`]: Newton-Raphson root finding
//! - [`tally_bonds`]: bond terms, schedules, pricing and valuation
//!
//! ## Example
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let terms = BondTerms::builder()
//!     .settlement(Date::parse("04/03/2024")?)
//!     .maturity(Date::parse("04/23/2027")?)
//!     .coupon_rate(3.95)
//!     .price(96.478)
//!     .period_days(180)
//!     .convention("30/360".parse()?)
//!     .build()?;
//!
//! let bond = ValuedBond::new(terms)?;
//! assert!((bond.yield_percent() - 5.211).abs() < 1e-3);
//! assert!((bond.price_for(5.211, PricingMethod::Spreadsheet) - 96.478).abs() < 1e-3);
//! # Ok::<(), tally::BondError>(())
//! ```

#![warn(missing_docs)]

pub use tally_bonds;
pub use tally_core;
pub use tally_math;

pub use tally_bonds::{BondError, BondResult};
pub use tally_core::{Date, DateConvention, TallyError, TallyResult};
pub use tally_math::{MathError, MathResult};

/// Everything needed to value a bond.
pub mod prelude {
    pub use tally_bonds::prelude::*;
    pub use tally_core::prelude::*;
    pub use tally_math::prelude::{MathError, SolverConfig};
}
