//! Floating-point comparison helpers.

/// Absolute tolerance used for every tuple comparison.
pub const EPSILON: f64 = 1e-5;

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use rt_math::float_eq;
///
/// assert!(float_eq(0.1 + 0.2, 0.3));
/// assert!(!float_eq(1.0, 1.0001));
/// ```
#[inline]
pub fn float_eq(a: f64, b: f64) -> bool {
    float_eq_eps(a, b, EPSILON)
}

/// Returns `true` if `a` and `b` differ by less than `tolerance`.
#[inline]
pub fn float_eq_eps(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}
