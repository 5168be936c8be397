//!
//! Rounding of displayed values.
//!

/// The number of decimal places kept by [`round_if_needed`].
pub const DECIMAL_PLACES: i32 = 2;

/// Rounds a value to [`DECIMAL_PLACES`] decimal places unless it is already
/// a whole number, in which case it is returned unchanged.
///
/// Halves are rounded away from zero after scaling, so `20.005` becomes
/// `20.01` and `-0.125` becomes `-0.13`.
///
/// # Arguments
///
/// * `value` - The value to round.
///
/// # Returns
///
/// The rounded value. If scaling overflows, the original value.
pub fn round_if_needed(value: f64) -> f64 {
    if value == value.trunc() {
        return value;
    }
    let factor = 10f64.powi(DECIMAL_PLACES);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}
