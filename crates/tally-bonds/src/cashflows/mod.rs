//! Coupon schedules.
//!
//! - [`CouponSchedule::generate`]: schedule for a known coupon period
//! - [`infer_schedule`]: recover the period from a price/yield quote

mod inference;
mod schedule;

pub use inference::infer_schedule;
pub use schedule::CouponSchedule;
