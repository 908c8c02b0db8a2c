//! Actual day count convention.

use super::DayCount;
use crate::error::TallyResult;
use crate::types::Date;

/// Actual day count with a 365-day year.
///
/// Day counts are true calendar differences. The 365-day year is only used
/// when a period is annualized (coupon frequency, APY).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actual365;

impl DayCount for Actual365 {
    fn name(&self) -> &'static str {
        "ACTUAL"
    }

    fn year_days(&self) -> u32 {
        365
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn subtract_days(&self, date: Date, days: u32) -> TallyResult<Date> {
        date.add_days(-i64::from(days))
    }
}
