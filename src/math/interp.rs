//! Scalar interpolation helpers used by the piecewise-linear estimators.

/// Linearly interpolates between `a` and `b` at fraction `t`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Returns the fraction at which `value` lies between `a` and `b`.
///
/// The result is unbounded: values outside `[a, b]` give fractions outside
/// `[0, 1]`. `a == b` yields a non-finite result.
#[must_use]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    (value - a) / (b - a)
}

/// Returns whether `x` lies strictly between `a` and `b`, in either order.
#[must_use]
pub fn strictly_between(x: f64, a: f64, b: f64) -> bool {
    a.min(b) < x && x < a.max(b)
}
