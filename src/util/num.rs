/// Divides `numerator` by `denominator`, returning `0.0` when the denominator
/// is exactly zero.
///
/// Any other IEEE-754 behavior is preserved, so a `NaN` operand still yields
/// `NaN`.
///
/// ## Example
/// ```
/// use curvexpr::util::num::safe_div;
///
/// assert_eq!(safe_div(1.0, 4.0), 0.25);
/// assert_eq!(safe_div(1.0, 0.0), 0.0);
/// assert_eq!(safe_div(1.0, -0.0), 0.0);
/// ```
#[must_use]
pub fn safe_div(numerator: f32, denominator: f32) -> f32 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Floating-point remainder with the sign of `numerator`, returning `0.0`
/// when the divisor is exactly zero.
///
/// ## Example
/// ```
/// use curvexpr::util::num::safe_rem;
///
/// assert_eq!(safe_rem(7.5, 2.0), 1.5);
/// assert_eq!(safe_rem(-7.5, 2.0), -1.5);
/// assert_eq!(safe_rem(3.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn safe_rem(numerator: f32, denominator: f32) -> f32 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator % denominator
}

/// Converts an index or count to `f32`.
///
/// The conversion is exact up to `2^24`; larger values round to the nearest
/// representable float.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f32(value: usize) -> f32 {
    value as f32
}
