//! Bond instruments.
//!
//! - [`BondTerms`]: what the market quotes for a bond
//! - [`ValuedBond`]: the terms valued on the settlement date
//!
//! A callable bond is described by [`BondTermsBuilder::call_date`] and valued
//! as a bullet bond redeemed on the call date.

mod terms;
mod valued;

pub use terms::{BondTerms, BondTermsBuilder, DEFAULT_FACE_VALUE};
pub use valued::ValuedBond;
