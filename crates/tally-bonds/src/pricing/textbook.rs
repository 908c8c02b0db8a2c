//! Textbook annual-coupon present value.

/// Price in percent of face from whole-year annual discounting.
///
/// The bond pays `coupon_rate% * face` at the end of each of `whole_years`
/// years and the face value with the last coupon. `whole_years` below one is
/// treated as one.
#[must_use]
pub fn textbook_price(yield_percent: f64, coupon_rate: f64, whole_years: u32, face_value: f64) -> f64 {
    let years = whole_years.max(1);
    let yld = yield_percent / 100.0;
    let annual_coupon = coupon_rate / 100.0 * face_value;

    let pv: f64 = (1..=years)
        .map(|year| {
            let amount = if year == years {
                face_value + annual_coupon
            } else {
                annual_coupon
            };
            amount / (1.0 + yld).powi(year as i32)
        })
        .sum();

    pv / face_value * 100.0
}
