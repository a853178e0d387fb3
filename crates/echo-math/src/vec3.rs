// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{resolve_index, MathError};
use crate::scalar::{self, Tolerance};
use crate::{Axis, Vec2};

/// 3D vector of `f64` components.
///
/// * Components may represent either points or directions depending on the
///   calling context.
/// * Arithmetic returns new values; only [`Vec3::set`], [`Vec3::set_component`],
///   [`Vec3::normalize`], and the `*Assign` operators mutate the receiver.
/// * Equality is approximate: components are compared with
///   [`scalar::is_equal`].
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f64; 3],
}

impl Vec3 {
    /// Number of components.
    pub const LEN: usize = 3;

    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Iterates the components in `x, y, z` order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Number of components (always [`Vec3::LEN`]).
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        Self::LEN
    }

    /// Overwrites all components and returns the receiver for chaining.
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.data = [x, y, z];
        self
    }

    /// Returns a copy of the vector.
    pub const fn copy(&self) -> Self {
        *self
    }

    /// Reads a component by signed index; `-1..=-3` alias `2..=0`.
    pub fn get(&self, index: isize) -> Result<f64, MathError> {
        resolve_index(index, Self::LEN).map(|i| self.data[i])
    }

    /// Writes a component by signed index; `-1..=-3` alias `2..=0`.
    pub fn set_component(&mut self, index: isize, value: f64) -> Result<(), MathError> {
        let i = resolve_index(index, Self::LEN)?;
        self.data[i] = value;
        Ok(())
    }

    /// Reads the component named by `axis`.
    pub const fn component(&self, axis: Axis) -> f64 {
        self.data[axis.index()]
    }

    /// Selects components in the given order.
    ///
    /// ```
    /// use echo_math::{Axis, Vec3};
    /// let v = Vec3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.swizzle([Axis::Z, Axis::X]), [3.0, 1.0]);
    /// ```
    pub fn swizzle<const N: usize>(&self, axes: [Axis; N]) -> [f64; N] {
        axes.map(|axis| self.component(axis))
    }

    /// `true` when every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|c| *c == 0.0)
    }

    /// `true` when any component is non-zero.
    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    /// Approximate equality under a caller-supplied tolerance.
    pub fn approx_eq_with(&self, other: &Self, tolerance: &Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| tolerance.approx_eq(*a, *b))
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Scales the vector by any scalar convertible to `f64`.
    pub fn scale<S: Into<f64>>(&self, scalar: S) -> Self {
        let s = scalar.into();
        Self::new(self.x() * s, self.y() * s, self.z() * s)
    }

    /// Component-wise product.
    pub fn mul_elementwise(&self, other: &Self) -> Self {
        Self::new(
            self.x() * other.x(),
            self.y() * other.y(),
            self.z() * other.z(),
        )
    }

    /// Divides every component by `divisor`. Division by zero follows IEEE-754.
    pub fn div_scalar<S: Into<f64>>(&self, divisor: S) -> Self {
        let d = divisor.into();
        Self::new(self.x() / d, self.y() / d, self.z() / d)
    }

    /// Floor division of every component by `divisor`; see [`scalar::floor_div`].
    pub fn floor_div<S: Into<f64>>(&self, divisor: S) -> Self {
        let d = divisor.into();
        Self {
            data: self.data.map(|c| scalar::floor_div(c, d)),
        }
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Normalises in place. A vector of exactly zero length is left unchanged.
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

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
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

macro_rules! swizzle2 {
    ($($name:ident => $a:ident $b:ident),* $(,)?) => {
        impl Vec3 {
            $(
                #[doc = concat!("Swizzle `", stringify!($name), "` as a [`Vec2`].")]
                pub const fn $name(&self) -> Vec2 {
                    Vec2::new(self.$a(), self.$b())
                }
            )*
        }
    };
}

macro_rules! swizzle3 {
    ($($name:ident => $a:ident $b:ident $c:ident),* $(,)?) => {
        impl Vec3 {
            $(
                #[doc = concat!("Swizzle `", stringify!($name), "`.")]
                pub const fn $name(&self) -> Vec3 {
                    Vec3::new(self.$a(), self.$b(), self.$c())
                }
            )*
        }
    };
}

swizzle2! {
    xx => x x, xy => x y, xz => x z,
    yx => y x, yy => y y, yz => y z,
    zx => z x, zy => z y, zz => z z,
}

swizzle3! {
    xxx => x x x, xxy => x x y, xxz => x x z,
    xyx => x y x, xyy => x y y, xyz => x y z,
    xzx => x z x, xzy => x z y, xzz => x z z,
    yxx => y x x, yxy => y x y, yxz => y x z,
    yyx => y y x, yyy => y y y, yyz => y y z,
    yzx => y z x, yzy => y z y, yzz => y z z,
    zxx => z x x, zxy => z x y, zxz => z x z,
    zyx => z y x, zyy => z y y, zyz => z y z,
    zzx => z z x, zzy => z z y, zzz => z z z,
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| scalar::is_equal(*a, *b))
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3({:.2}, {:.2}, {:.2})", self.x(), self.y(), self.z())
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl Index<Axis> for Vec3 {
    type Output = f64;
    fn index(&self, axis: Axis) -> &f64 {
        &self.data[axis.index()]
    }
}

impl IndexMut<Axis> for Vec3 {
    fn index_mut(&mut self, axis: Axis) -> &mut f64 {
        &mut self.data[axis.index()]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3::add(&self, &rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::sub(&self, &rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul_elementwise(&rhs)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self.div_scalar(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
