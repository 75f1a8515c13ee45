//! Homogeneous 4-component tuple for points, vectors and colors.
//!
//! [`Tuple4`] is the single value type of the renderer. The `w` component
//! tells points (`w == 1`) from vectors (`w == 0`); colors reuse the vector
//! shape and read `x, y, z` as red, green, blue.
//!
//! # Usage
//!
//! ```rust
//! use rt_math::Tuple4;
//!
//! let a = Tuple4::point(3.0, 2.0, 1.0);
//! let b = Tuple4::point(5.0, 6.0, 7.0);
//! assert_eq!(a - b, Tuple4::vector(-2.0, -4.0, -6.0));
//! ```

use crate::float::{float_eq, EPSILON};
use approx::AbsDiffEq;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// A color is a [`Tuple4`] read as `(red, green, blue, _)`.
pub type Color = Tuple4;

/// A four-component homogeneous tuple.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`, `.w`, the accessor methods, or index
/// `[0]`..`[3]`. For colors: x=R, y=G, z=B, w is unused.
///
/// # Equality
///
/// `==` compares component-wise within [`EPSILON`]. It is not transitive
/// and must not be used for hashing.
///
/// # Example
///
/// ```rust
/// use rt_math::Tuple4;
///
/// let v = Tuple4::vector(1.0, 2.0, 3.0);
/// assert_eq!(v.magnitude(), 14.0_f64.sqrt());
/// assert!(v.is_vector());
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Tuple4 {
    /// X component (red for colors)
    pub x: f64,
    /// Y component (green for colors)
    pub y: f64,
    /// Z component (blue for colors)
    pub z: f64,
    /// W component: 1 for points, 0 for vectors
    pub w: f64,
}

impl Tuple4 {
    /// All four components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Black `(0, 0, 0)`.
    pub const BLACK: Color = Self::color(0.0, 0.0, 0.0);

    /// White `(1, 1, 1)`.
    pub const WHITE: Color = Self::color(1.0, 1.0, 1.0);

    /// Red `(1, 0, 0)`.
    pub const RED: Color = Self::color(1.0, 0.0, 0.0);

    /// Green `(0, 1, 0)`.
    pub const GREEN: Color = Self::color(0.0, 1.0, 0.0);

    /// Blue `(0, 0, 1)`.
    pub const BLUE: Color = Self::color(0.0, 0.0, 1.0);

    /// Creates a tuple from raw components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point (`w = 1`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use rt_math::Tuple4;
    ///
    /// let p = Tuple4::point(4.0, -4.0, 3.0);
    /// assert_eq!(p.w, 1.0);
    /// ```
    #[inline]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a vector (`w = 0`).
    #[inline]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Creates a color. Stored vector-shaped, `w = 0`.
    #[inline]
    pub const fn color(red: f64, green: f64, blue: f64) -> Color {
        Self::vector(red, green, blue)
    }

    /// Creates from an array `[x, y, z, w]`.
    #[inline]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// X component.
    #[inline]
    pub const fn x(self) -> f64 {
        self.x
    }

    /// Y component.
    #[inline]
    pub const fn y(self) -> f64 {
        self.y
    }

    /// Z component.
    #[inline]
    pub const fn z(self) -> f64 {
        self.z
    }

    /// W component.
    #[inline]
    pub const fn w(self) -> f64 {
        self.w
    }

    /// Red channel of a color.
    #[inline]
    pub const fn red(self) -> f64 {
        self.x
    }

    /// Green channel of a color.
    #[inline]
    pub const fn green(self) -> f64 {
        self.y
    }

    /// Blue channel of a color.
    #[inline]
    pub const fn blue(self) -> f64 {
        self.z
    }

    /// Returns `true` if `w` is 1 within tolerance.
    #[inline]
    pub fn is_point(self) -> bool {
        float_eq(self.w, 1.0)
    }

    /// Returns `true` if `w` is 0 within tolerance.
    #[inline]
    pub fn is_vector(self) -> bool {
        float_eq(self.w, 0.0)
    }

    /// Component-wise comparison within [`EPSILON`].
    ///
    /// Same as `==`.
    #[inline]
    pub fn equals(self, other: Self) -> bool {
        float_eq(self.x, other.x)
            && float_eq(self.y, other.y)
            && float_eq(self.z, other.z)
            && float_eq(self.w, other.w)
    }

    /// Multiplies every component, `w` included, by `scalar`.
    #[inline]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }

    /// Euclidean norm over all four components.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Divides every component by the magnitude.
    ///
    /// A zero tuple has no direction: the result is NaN in every
    /// component, following IEEE division.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rt_math::Tuple4;
    ///
    /// let n = Tuple4::vector(4.0, 0.0, 0.0).normalize();
    /// assert_eq!(n, Tuple4::vector(1.0, 0.0, 0.0));
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Dot product over all four components.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Cross product of the `x, y, z` parts.
    ///
    /// Always returns a vector, whatever the inputs' `w`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Component-wise (Hadamard) product, used to tint colors.
    ///
    /// ```rust
    /// use rt_math::Tuple4;
    ///
    /// let c = Tuple4::color(1.0, 0.2, 0.4).hadamard(Tuple4::color(0.9, 1.0, 0.1));
    /// assert_eq!(c, Tuple4::color(0.9, 0.2, 0.04));
    /// ```
    #[inline]
    pub fn hadamard(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to glam DVec4.
    #[inline]
    pub fn to_glam(self) -> glam::DVec4 {
        glam::DVec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam DVec4.
    #[inline]
    pub fn from_glam(v: glam::DVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl PartialEq for Tuple4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(*other)
    }
}

impl AbsDiffEq for Tuple4 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl Index<usize> for Tuple4 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Tuple4 index out of bounds: {}", i),
        }
    }
}

// Tuple4 + Tuple4
impl Add for Tuple4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

// Tuple4 - Tuple4
impl Sub for Tuple4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Tuple4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Tuple4 * Tuple4 (Hadamard)
impl Mul for Tuple4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.hadamard(rhs)
    }
}

// Tuple4 * f64
impl Mul<f64> for Tuple4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

// f64 * Tuple4
impl Mul<Tuple4> for f64 {
    type Output = Tuple4;

    #[inline]
    fn mul(self, rhs: Tuple4) -> Tuple4 {
        rhs.scale(self)
    }
}

// Tuple4 / f64, unguarded
impl Div<f64> for Tuple4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl From<[f64; 4]> for Tuple4 {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Tuple4> for [f64; 4] {
    #[inline]
    fn from(t: Tuple4) -> [f64; 4] {
        t.to_array()
    }
}

impl From<glam::DVec4> for Tuple4 {
    #[inline]
    fn from(v: glam::DVec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Tuple4> for glam::DVec4 {
    #[inline]
    fn from(t: Tuple4) -> glam::DVec4 {
        t.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_tuple_with_w1_is_point() {
        let a = Tuple4::new(4.3, -4.2, 3.1, 1.0);
        assert_eq!(a.x(), 4.3);
        assert_eq!(a.y(), -4.2);
        assert_eq!(a.z(), 3.1);
        assert_eq!(a.w(), 1.0);
        assert!(a.is_point());
        assert!(!a.is_vector());
    }

    #[test]
    fn test_tuple_with_w0_is_vector() {
        let a = Tuple4::new(4.3, -4.2, 3.1, 0.0);
        assert!(!a.is_point());
        assert!(a.is_vector());
    }

    #[test]
    fn test_classification_uses_tolerance() {
        assert!(Tuple4::new(0.0, 0.0, 0.0, 1.000001).is_point());
        assert!(Tuple4::new(0.0, 0.0, 0.0, -0.000001).is_vector());
        assert!(!Tuple4::new(0.0, 0.0, 0.0, 2.0).is_point());
    }

    #[test]
    fn test_point_and_vector_factories() {
        assert_eq!(Tuple4::point(4.0, -4.0, 3.0), Tuple4::new(4.0, -4.0, 3.0, 1.0));
        assert_eq!(Tuple4::vector(4.0, -4.0, 3.0), Tuple4::new(4.0, -4.0, 3.0, 0.0));
    }

    #[test]
    fn test_equality_within_epsilon() {
        let a = Tuple4::new(1.0, 2.0, 3.0, 4.0);
        let b = Tuple4::new(0.0 + 1.0, 2.0, 4.0 - 1.0, 2.0 + 2.0);
        assert!(a.equals(b));

        let c = Tuple4::new(1.000001, 2.0, 3.0, 4.0);
        assert_eq!(a, c);

        let d = Tuple4::new(1.0001, 2.0, 3.0, 4.0);
        assert_ne!(a, d);
    }

    #[test]
    fn test_add_point_and_vector() {
        let a1 = Tuple4::new(3.0, -2.0, 5.0, 1.0);
        let a2 = Tuple4::new(-2.0, 3.0, 1.0, 0.0);
        let sum = a1 + a2;
        assert_eq!(sum, Tuple4::new(1.0, 1.0, 6.0, 1.0));
        assert!(sum.is_point());
    }

    #[test]
    fn test_add_two_points_gives_w2() {
        let p = Tuple4::point(1.0, 1.0, 1.0) + Tuple4::point(1.0, 1.0, 1.0);
        assert_eq!(p.w, 2.0);
        assert!(!p.is_point());
        assert!(!p.is_vector());
    }

    #[test]
    fn test_subtract_homogeneous_rules() {
        let p1 = Tuple4::point(3.0, 2.0, 1.0);
        let p2 = Tuple4::point(5.0, 6.0, 7.0);
        let v = Tuple4::vector(5.0, 6.0, 7.0);

        let pp = p1 - p2;
        assert_eq!(pp, Tuple4::vector(-2.0, -4.0, -6.0));
        assert!(pp.is_vector());

        let pv = p1 - v;
        assert_eq!(pv, Tuple4::point(-2.0, -4.0, -6.0));
        assert!(pv.is_point());

        let vv = Tuple4::vector(3.0, 2.0, 1.0) - v;
        assert_eq!(vv, Tuple4::vector(-2.0, -4.0, -6.0));
        assert!(vv.is_vector());
    }

    #[test]
    fn test_subtract_from_zero_vector() {
        let zero = Tuple4::vector(0.0, 0.0, 0.0);
        let v = Tuple4::vector(1.0, -2.0, 3.0);
        assert_eq!(zero - v, Tuple4::vector(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_negate() {
        let a = Tuple4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-a, Tuple4::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn test_add_then_subtract_is_identity() {
        let samples = [
            (Tuple4::new(1.5, -2.25, 3.0, 1.0), Tuple4::new(0.1, 0.2, 0.3, 0.0)),
            (Tuple4::new(-100.0, 0.0, 42.0, 0.0), Tuple4::new(1e3, -1e-3, 7.5, 1.0)),
            (Tuple4::ZERO, Tuple4::new(0.3, 0.6, 0.9, 2.0)),
        ];
        for (a, b) in samples {
            assert_eq!((a + b) - b, a);
        }
    }

    #[test]
    fn test_scalar_multiply_and_divide() {
        let a = Tuple4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(a * 3.5, Tuple4::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(a * 0.5, Tuple4::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(0.5 * a, a.scale(0.5));
        assert_eq!(a / 2.0, Tuple4::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn test_divide_by_zero_is_unguarded() {
        let r = Tuple4::vector(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(r.x, f64::INFINITY);
        assert_eq!(r.y, f64::NEG_INFINITY);
        assert!(r.z.is_nan());
        assert!(!r.is_finite());
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Tuple4::vector(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_eq!(Tuple4::vector(0.0, 1.0, 0.0).magnitude(), 1.0);
        assert_eq!(Tuple4::vector(0.0, 0.0, 1.0).magnitude(), 1.0);
        assert_relative_eq!(Tuple4::vector(1.0, 2.0, 3.0).magnitude(), 14.0_f64.sqrt());
        assert_relative_eq!(Tuple4::vector(-1.0, -2.0, -3.0).magnitude(), 14.0_f64.sqrt());
    }

    #[test]
    fn test_magnitude_includes_w() {
        assert_relative_eq!(Tuple4::point(0.0, 0.0, 0.0).magnitude(), 1.0);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Tuple4::vector(4.0, 0.0, 0.0).normalize(), Tuple4::vector(1.0, 0.0, 0.0));

        let n = Tuple4::vector(1.0, 2.0, 3.0).normalize();
        let len = 14.0_f64.sqrt();
        assert_eq!(n, Tuple4::vector(1.0 / len, 2.0 / len, 3.0 / len));
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_normalized_magnitude_is_one() {
        for v in [
            Tuple4::vector(0.001, 0.0, 0.0),
            Tuple4::vector(1.0, 1.8, 0.0),
            Tuple4::vector(-250.0, 13.0, 7.25),
        ] {
            assert_abs_diff_eq!(v.normalize().magnitude(), 1.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Tuple4::ZERO.normalize();
        assert!(n.is_nan());
    }

    #[test]
    fn test_dot() {
        let a = Tuple4::vector(1.0, 2.0, 3.0);
        let b = Tuple4::vector(2.0, 3.0, 4.0);
        assert_eq!(a.dot(b), 20.0);
        assert_eq!(Tuple4::vector(1.0, 0.0, 0.0).dot(Tuple4::vector(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn test_cross() {
        let a = Tuple4::vector(1.0, 2.0, 3.0);
        let b = Tuple4::vector(2.0, 3.0, 4.0);
        assert_eq!(a.cross(b), Tuple4::vector(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(a), Tuple4::vector(1.0, -2.0, 1.0));
        assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn test_cross_always_returns_vector() {
        let a = Tuple4::point(1.0, 0.0, 0.0);
        let b = Tuple4::point(0.0, 1.0, 0.0);
        let c = a.cross(b);
        assert!(c.is_vector());
        assert_eq!(c, Tuple4::vector(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_colors() {
        let c = Tuple4::color(-0.5, 0.4, 1.7);
        assert_eq!(c.red(), -0.5);
        assert_eq!(c.green(), 0.4);
        assert_eq!(c.blue(), 1.7);

        let c1 = Tuple4::color(0.9, 0.6, 0.75);
        let c2 = Tuple4::color(0.7, 0.1, 0.25);
        assert_eq!(c1 + c2, Tuple4::color(1.6, 0.7, 1.0));
        assert_eq!(c1 - c2, Tuple4::color(0.2, 0.5, 0.5));
        assert_eq!(Tuple4::color(0.2, 0.3, 0.4) * 2.0, Tuple4::color(0.4, 0.6, 0.8));
    }

    #[test]
    fn test_hadamard() {
        let c1 = Tuple4::color(1.0, 0.2, 0.4);
        let c2 = Tuple4::color(0.9, 1.0, 0.1);
        assert_eq!(c1 * c2, Tuple4::color(0.9, 0.2, 0.04));
        assert_eq!(c1.hadamard(c2), c1 * c2);
    }

    #[test]
    fn test_index_and_conversions() {
        let t = Tuple4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(t[0], 1.0);
        assert_eq!(t[3], 4.0);

        let arr: [f64; 4] = t.into();
        assert_eq!(arr, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Tuple4::from(arr), t);

        let g: glam::DVec4 = t.into();
        assert_eq!(g.w, 4.0);
        assert_eq!(Tuple4::from(g), t);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_out_of_bounds() {
        let _w: f64 = Tuple4::ZERO[4];
    }

    #[test]
    fn test_abs_diff_eq() {
        let a = Tuple4::point(1.0, 2.0, 3.0);
        let b = Tuple4::point(1.000001, 2.0, 3.0);
        assert_abs_diff_eq!(a, b);
        assert!(!a.abs_diff_eq(&Tuple4::point(1.1, 2.0, 3.0), EPSILON));
    }
}
