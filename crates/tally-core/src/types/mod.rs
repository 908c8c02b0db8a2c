//! Domain types for bond valuation.
//!
//! - [`Date`]: Calendar date exchanged in `MM/DD/YYYY` form

mod date;

pub(crate) use date::days_in_month;
pub use date::{Date, DATE_FORMAT};
