//! US NASD 30/360 day count, spreadsheet flavour.
//!
//! Spreadsheet 30/360 (basis 0) differs from the textbook NASD rule in one
//! place: the end-of-February adjustment is applied to the start date only.
//! This module reproduces that behaviour exactly.

use super::DayCount;
use crate::error::TallyResult;
use crate::types::{days_in_month, Date};

/// US NASD 30/360 day count convention as computed by spreadsheets.
///
/// # Rules
///
/// 1. If D1 is the last day of February, change D1 to 30
/// 2. If D1 is 31, change D1 to 30
/// 3. If D2 is 31 AND D1 is now 30, change D2 to 30
///
/// There is no rule for D2 being the last day of February. As a consequence
/// `02/29/2024 -> 02/29/2024` counts -1 days and `02/29/2024 -> 02/28/2025`
/// counts 358 rather than 360. Spreadsheet parity depends on this, so it is
/// kept as is.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360Nasd;

impl DayCount for Thirty360Nasd {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn year_days(&self) -> u32 {
        360
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        if start.is_last_day_of_february() || d1 == 31 {
            d1 = 30;
        }

        if d2 == 31 && d1 == 30 {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }

    fn subtract_days(&self, date: Date, days: u32) -> TallyResult<Date> {
        let days = i64::from(days);
        let mut year = date.year() as i64 - days / 360;
        let mut month = date.month() as i64 - (days % 360) / 30;
        let mut day = date.day() as i64 - days % 30;

        if day <= 0 {
            day += 30;
            month -= 1;
        }
        if month <= 0 {
            month += 12;
            year -= 1;
        }

        // A 30-day month can land on e.g. 02/30; clamp to the real month end.
        let month_end = i64::from(days_in_month(year as i32, month as u32));
        if day > month_end {
            log::trace!("30/360 subtraction clamped {year}-{month:02}-{day:02} to day {month_end}");
            day = month_end;
        }

        Date::from_ymd(year as i32, month as u32, day as u32)
    }
}
