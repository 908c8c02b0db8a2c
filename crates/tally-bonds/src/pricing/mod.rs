//! Bond pricing calculations.
//!
//! This module provides:
//! - [`SpreadsheetFormula`]: spreadsheet-compatible PRICE, and YIELD for one coupon
//! - [`textbook_price`]: whole-year annual discounting
//! - [`AverageInvestment`]: quick yield and price approximation
//! - [`YieldSolver`]: yield-to-maturity by root finding or closed form

mod approximation;
mod spreadsheet;
mod textbook;
mod yield_solver;

pub use approximation::AverageInvestment;
pub use spreadsheet::{SpreadsheetFormula, REDEMPTION};
pub use textbook::textbook_price;
pub use yield_solver::{YieldMethod, YieldResult, YieldSolver};

use serde::{Deserialize, Serialize};

use crate::error::BondError;

/// Price formula selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PricingMethod {
    /// Spreadsheet PRICE formula (fractional periods, coupon-period compounding).
    #[default]
    Spreadsheet,
    /// Annual coupons over whole years, annual compounding.
    Textbook,
}

impl std::fmt::Display for PricingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingMethod::Spreadsheet => write!(f, "spreadsheet"),
            PricingMethod::Textbook => write!(f, "textbook"),
        }
    }
}

impl std::str::FromStr for PricingMethod {
    type Err = BondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spreadsheet" | "excel" => Ok(PricingMethod::Spreadsheet),
            "textbook" => Ok(PricingMethod::Textbook),
            _ => Err(BondError::invalid_spec(format!(
                "unknown pricing method '{s}': expected 'spreadsheet' or 'textbook'"
            ))),
        }
    }
}
