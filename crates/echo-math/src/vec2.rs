// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{resolve_index, MathError};
use crate::scalar;

/// 2D vector of `f64` components.
///
/// Same conventions as [`crate::Vec3`]: value semantics, approximate equality,
/// mutating `normalize` alongside the pure `normalized`.
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [f64; 2],
}

impl Vec2 {
    /// Number of components.
    pub const LEN: usize = 2;

    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 2] {
        self.data
    }

    /// Iterates the components in `x, y` order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Number of components (always [`Vec2::LEN`]).
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        Self::LEN
    }

    /// Overwrites both components and returns the receiver for chaining.
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.data = [x, y];
        self
    }

    /// Returns a copy of the vector.
    pub const fn copy(&self) -> Self {
        *self
    }

    /// Reads a component by signed index; `-1` and `-2` alias `1` and `0`.
    pub fn get(&self, index: isize) -> Result<f64, MathError> {
        resolve_index(index, Self::LEN).map(|i| self.data[i])
    }

    /// Writes a component by signed index.
    pub fn set_component(&mut self, index: isize, value: f64) -> Result<(), MathError> {
        let i = resolve_index(index, Self::LEN)?;
        self.data[i] = value;
        Ok(())
    }

    /// Swizzle `xx`.
    pub const fn xx(&self) -> Self {
        Self::new(self.x(), self.x())
    }

    /// Swizzle `xy` (identity).
    pub const fn xy(&self) -> Self {
        *self
    }

    /// Swizzle `yx`.
    pub const fn yx(&self) -> Self {
        Self::new(self.y(), self.x())
    }

    /// Swizzle `yy`.
    pub const fn yy(&self) -> Self {
        Self::new(self.y(), self.y())
    }

    /// `true` when both components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x() == 0.0 && self.y() == 0.0
    }

    /// `true` when any component is non-zero.
    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    /// Scales the vector by any scalar convertible to `f64`.
    pub fn scale<S: Into<f64>>(&self, scalar: S) -> Self {
        let s = scalar.into();
        Self::new(self.x() * s, self.y() * s)
    }

    /// Divides both components by `divisor`.
    pub fn div_scalar<S: Into<f64>>(&self, divisor: S) -> Self {
        let d = divisor.into();
        Self::new(self.x() / d, self.y() / d)
    }

    /// Floor division of both components by `divisor`.
    pub fn floor_div<S: Into<f64>>(&self, divisor: S) -> Self {
        let d = divisor.into();
        Self::new(scalar::floor_div(self.x(), d), scalar::floor_div(self.y(), d))
    }

    /// Vector length.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Normalises in place; zero-length vectors are left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len != 0.0 {
            *self = self.div_scalar(len);
        }
        self
    }

    /// Returns a normalised copy, or an unchanged copy for a zero-length vector.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        self.div_scalar(len)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Angle between the vectors in degrees.
    pub fn angle(&self, other: &Self) -> f64 {
        scalar::rad_to_deg(self.angle_in_radian(other))
    }

    /// Angle between the vectors in radians; `0` when either is zero-length.
    pub fn angle_in_radian(&self, other: &Self) -> f64 {
        let m2 = self.length() * other.length();
        if m2 == 0.0 {
            return 0.0;
        }
        scalar::clamp(self.dot(other) / m2, -1.0, 1.0).acos()
    }

    /// Component of `self` along the direction of `other`.
    pub fn project(&self, other: &Self) -> Self {
        let n = other.normalized();
        n.scale(self.dot(&n))
    }
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        scalar::is_equal(self.x(), other.x()) && scalar::is_equal(self.y(), other.y())
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({:.2}, {:.2})", self.x(), self.y())
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs.scale(self)
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self.div_scalar(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Vec2 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_returns_new_values() {
        let a = Vec2::new(1.0, -2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 2.0));
        assert_eq!(a - b, Vec2::new(-2.0, -6.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, -4.0));
        assert_eq!(2.0 * a, Vec2::new(2.0, -4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, 2.0));
        assert_eq!(b.floor_div(2), Vec2::new(1.0, 2.0));
        assert_eq!(Vec2::new(1.0, -7.0).floor_div(0.1).x(), 9.0);
        assert_eq!(Vec2::new(1.0, -7.0).floor_div(2.0).y(), -4.0);
    }

    #[test]
    fn signed_index_aliases() {
        let v = Vec2::new(7.0, 9.0);
        assert_eq!(v.get(-1).unwrap(), 9.0);
        assert_eq!(v.get(-2).unwrap(), 7.0);
        assert!(v.get(2).is_err());
        assert!(v.get(-3).is_err());
    }

    #[test]
    fn normalize_and_angle() {
        let mut v = Vec2::new(3.0, 4.0);
        v.normalize();
        assert!(scalar::is_equal(v.length(), 1.0));
        assert!(scalar::is_equal(Vec2::UNIT_X.angle(&Vec2::UNIT_Y), 90.0));
        assert!(scalar::is_equal(Vec2::ZERO.angle_in_radian(&Vec2::UNIT_Y), 0.0));
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn project_onto_axis() {
        let p = Vec2::new(2.0, 5.0).project(&Vec2::new(10.0, 0.0));
        assert_eq!(p, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn swizzle_and_display() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.yx(), Vec2::new(2.0, 1.0));
        assert_eq!(v.to_string(), "Vec2(1.00, 2.00)");
    }
}
