//! Epsilon discipline for floating-point comparisons.
//!
//! Change detection, feasibility, and integrality checks all go through
//! these helpers; exact float equality is never used for those decisions.

/// Comparison tolerance shared by the whole entity layer.
pub const EPSILON: f64 = 1e-5;

/// True when the two values are equal within [`EPSILON`].
///
/// Identical values compare equal even when infinite.
pub fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= EPSILON
}

/// True when `value` lies within `[lower, upper]`, each side widened
/// by [`EPSILON`]. Infinite endpoints behave as unbounded sides.
pub fn is_between(value: f64, lower: f64, upper: f64) -> bool {
    value >= lower - EPSILON && value <= upper + EPSILON
}

/// True when `value` is integral within [`EPSILON`].
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && (value - value.round()).abs() <= EPSILON
}
