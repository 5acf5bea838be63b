//! Affine transforms over pixel coordinates.
//!
//! A [`Transform`] is a 3x3 homogeneous matrix
//!
//! ```text
//! | a b c |
//! | p q r |
//! | u v w |
//! ```
//!
//! applied to the column vector `(x, y, 1)`. Every standard constructor keeps
//! the bottom row at `(0, 0, 1)`.
//!
//! Rotation is clockwise for positive angles. That is the mathematical
//! counter-clockwise matrix, seen through a y axis that points down.

use std::ops::Mul;

use crate::geometry::Point;

const DEGREES_TO_RADIANS: f64 = std::f64::consts::PI / 180.0;

/// A 3x3 matrix used to carry out an affine transform.
///
/// Equality compares all nine coefficients exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f64,
    b: f64,
    c: f64,
    p: f64,
    q: f64,
    r: f64,
    u: f64,
    v: f64,
    w: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The transform which does nothing.
    pub const IDENTITY: Self = Self::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

    /// Create a transform from the top two rows `[a, b, c, p, q, r]`.
    /// The bottom row is `(0, 0, 1)`.
    #[must_use]
    pub const fn new(m: [f64; 6]) -> Self {
        Self { a: m[0], b: m[1], c: m[2], p: m[3], q: m[4], r: m[5], u: 0.0, v: 0.0, w: 1.0 }
    }

    /// Create a transform from all nine coefficients, row by row.
    #[must_use]
    pub const fn from_matrix(m: [f64; 9]) -> Self {
        Self { a: m[0], b: m[1], c: m[2], p: m[3], q: m[4], r: m[5], u: m[6], v: m[7], w: m[8] }
    }

    /// Scale width and height, e.g. `0.5` halves the size.
    ///
    /// Scaling up is not supported: if either factor is greater than one the
    /// identity is returned.
    #[must_use]
    pub fn scale(sx: f64, sy: f64) -> Self {
        if sx > 1.0 || sy > 1.0 {
            return Self::IDENTITY;
        }
        Self::new([sx, 0.0, 0.0, 0.0, sy, 0.0])
    }

    /// Move points by `(dx, dy)`.
    #[must_use]
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self::new([1.0, 0.0, dx, 0.0, 1.0, dy])
    }

    /// Mirror points across the x axis.
    #[must_use]
    pub const fn reflect_vertical() -> Self {
        Self::new([1.0, 0.0, 0.0, 0.0, -1.0, 0.0])
    }

    /// Rotate clockwise (on screen) by `degrees` around the origin.
    #[must_use]
    pub fn rotate(degrees: f64) -> Self {
        let (sin, cos) = (degrees * DEGREES_TO_RADIANS).sin_cos();
        Self::new([cos, -sin, 0.0, sin, cos, 0.0])
    }

    /// The nine coefficients, row by row.
    #[must_use]
    pub const fn coefficients(&self) -> [f64; 9] {
        [self.a, self.b, self.c, self.p, self.q, self.r, self.u, self.v, self.w]
    }

    /// Whether this is exactly the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Project `point` through the matrix.
    ///
    /// Coordinates are rounded to the nearest integer, ties to even.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let x = f64::from(point.x);
        let y = f64::from(point.y);

        let x1 = self.a * x + self.b * y + self.c;
        let y1 = self.p * x + self.q * y + self.r;

        Point::new(round_half_even(x1), round_half_even(y1))
    }

    /// The matrix product `self × other`.
    ///
    /// Applying the result is the same as applying `other` first and `self`
    /// second, so `Transform::translate(..).combine(&Transform::rotate(..))`
    /// rotates around the origin and then moves the result.
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        let (t, o) = (self, other);
        Self {
            a: t.a * o.a + t.b * o.p + t.c * o.u,
            b: t.a * o.b + t.b * o.q + t.c * o.v,
            c: t.a * o.c + t.b * o.r + t.c * o.w,
            p: t.p * o.a + t.q * o.p + t.r * o.u,
            q: t.p * o.b + t.q * o.q + t.r * o.v,
            r: t.p * o.c + t.q * o.r + t.r * o.w,
            u: t.u * o.a + t.v * o.p + t.w * o.u,
            v: t.u * o.b + t.v * o.q + t.w * o.v,
            w: t.u * o.c + t.v * o.r + t.w * o.w,
        }
    }
}

impl Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

/// Round to the nearest integer, breaking exact `.5` ties towards even.
///
/// `f64::round` breaks ties away from zero, which biases every projected
/// point that lands on a half pixel in the same direction.
fn round_half_even(value: f64) -> i32 {
    let rounded = value.round();
    if (value - value.trunc()).abs() == 0.5 {
        (2.0 * (value / 2.0).round()) as i32
    } else {
        rounded as i32
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn small_matrix() -> impl Strategy<Value = Transform> {
        prop::array::uniform9(-20i32..20).prop_map(|m| Transform::from_matrix(m.map(f64::from)))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Integer coefficients keep every product exact, so associativity
        /// holds bit for bit.
        #[test]
        fn prop_combine_is_associative(a in small_matrix(), b in small_matrix(), c in small_matrix()) {
            prop_assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
        }

        #[test]
        fn prop_translate_moves_every_point(dx in -500i32..500, dy in -500i32..500, x in -500i32..500, y in -500i32..500) {
            let t = Transform::translate(f64::from(dx), f64::from(dy));
            prop_assert_eq!(t.apply(Point::new(x, y)), Point::new(x + dx, y + dy));
        }

        #[test]
        fn prop_full_turn_is_identity(x in -200i32..200, y in -200i32..200) {
            let p = Point::new(x, y);
            prop_assert_eq!(Transform::rotate(360.0).apply(p), p);
        }
    }
}
