// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::Mul;

use tracing::trace;

use crate::mat4::RotationMatrix;
use crate::scalar::{self, Tolerance};
use crate::{Mat4, Vec3};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * All angles are radians unless the method name says degrees.
/// * Rotation-consuming methods ([`Quat::multiply_point`], [`Quat::to_mat4`],
///   [`Quat::to_axis_angle`], the Euler extractions) assume a unit quaternion.
///   Nothing enforces that; call [`Quat::normalize`] after long composition
///   chains.
/// * `PartialEq` compares representations exactly. `q` and `-q` encode the
///   same rotation but are not equal; see [`Quat::same_rotation`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [f64; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    ///
    /// Components are taken verbatim; use [`Quat::from_axis_angle`] for
    /// axis/angle construction.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion `(0, 0, 0, 1)`.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// X component of the vector part.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component of the vector part.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component of the vector part.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Scalar part.
    pub const fn w(&self) -> f64 {
        self.data[3]
    }

    /// Returns the quaternion as an `(x, y, z, w)` array.
    pub const fn to_array(self) -> [f64; 4] {
        self.data
    }

    /// Overwrites all components and returns the receiver for chaining.
    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        self.data = [x, y, z, w];
        self
    }

    /// Resets the receiver to the identity rotation.
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Returns a copy of the quaternion.
    pub const fn copy(&self) -> Self {
        *self
    }

    /// Euclidean norm of the 4-tuple.
    pub fn magnitude(&self) -> f64 {
        self.data.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// `true` when the magnitude is within [`scalar::EPSILON`] of one.
    pub fn is_unit(&self) -> bool {
        scalar::is_equal(self.magnitude(), 1.0)
    }

    /// Normalises in place. A quaternion of exactly zero magnitude is left
    /// unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns a normalised copy, or an unchanged copy when the magnitude is
    /// exactly zero.
    pub fn normalized(&self) -> Self {
        let len = self.magnitude();
        if len == 0.0 {
            return *self;
        }
        Self {
            data: self.data.map(|c| c / len),
        }
    }

    /// Conjugates in place (negates the vector part).
    ///
    /// For a unit quaternion this is the inverse rotation.
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Returns the conjugate, the inverse of a unit quaternion.
    pub const fn inverse(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: applied to a point, the result performs `other`'s
    /// rotation first and then `self`'s. The product of unit quaternions is a
    /// unit quaternion up to rounding, which accumulates across many products.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use echo_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(&Vec3::UNIT_X, FRAC_PI_2);
    /// // Order matters for rotations about different axes.
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotates `point` by this quaternion.
    ///
    /// Closed-form expansion of `q p q*`, equivalent to
    /// `self.to_mat4().transform_direction(point)` for unit quaternions but
    /// without building the matrix. A non-unit quaternion of magnitude `m`
    /// scales the rotated point by `m²`; no check is made.
    pub fn multiply_point(&self, point: &Vec3) -> Vec3 {
        let [x, y, z, w] = self.data;
        let x2 = x * x;
        let y2 = y * y;
        let z2 = z * z;
        let w2 = w * w;
        let [px, py, pz] = point.to_array();

        Vec3::new(
            (x2 + w2 - y2 - z2) * px + 2.0 * (x * y - z * w) * py + 2.0 * (x * z + y * w) * pz,
            2.0 * (x * y + z * w) * px + (w2 - x2 + y2 - z2) * py + 2.0 * (y * z - x * w) * pz,
            2.0 * (x * z - y * w) * px + 2.0 * (x * w + y * z) * py + (w2 - x2 - y2 + z2) * pz,
        )
    }

    /// Converts the rotation to a 4×4 matrix with an identity translation part.
    pub fn to_mat4(&self) -> Mat4 {
        let [x, y, z, w] = self.data;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::from_rows([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy), 0.0],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx), 0.0],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Extracts a unit quaternion from the rotation block of `m` using
    /// Shepperd's branch selection.
    ///
    /// The trace branch is used when the trace is positive; otherwise the
    /// branch of the largest diagonal entry, so the square root argument never
    /// approaches zero (notably near 180° rotations).
    pub fn from_rotation_matrix<M: RotationMatrix + ?Sized>(m: &M) -> Self {
        let m11 = m.at(0, 0);
        let m12 = m.at(0, 1);
        let m13 = m.at(0, 2);
        let m21 = m.at(1, 0);
        let m22 = m.at(1, 1);
        let m23 = m.at(1, 2);
        let m31 = m.at(2, 0);
        let m32 = m.at(2, 1);
        let m33 = m.at(2, 2);
        let trace = m11 + m22 + m33;

        if trace > 0.0 {
            trace!(trace, "rotation matrix: trace branch");
            let s = 0.5 / (trace + 1.0).sqrt();
            Self::new((m32 - m23) * s, (m13 - m31) * s, (m21 - m12) * s, 0.25 / s)
        } else if m11 > m22 && m11 > m33 {
            trace!(trace, m11, "rotation matrix: x-dominant branch");
            let s = 2.0 * (1.0 + m11 - m22 - m33).sqrt();
            Self::new(0.25 * s, (m12 + m21) / s, (m13 + m31) / s, (m32 - m23) / s)
        } else if m22 > m33 {
            trace!(trace, m22, "rotation matrix: y-dominant branch");
            let s = 2.0 * (1.0 + m22 - m11 - m33).sqrt();
            Self::new((m12 + m21) / s, 0.25 * s, (m23 + m32) / s, (m13 - m31) / s)
        } else {
            trace!(trace, m33, "rotation matrix: z-dominant branch");
            let s = 2.0 * (1.0 + m33 - m11 - m22).sqrt();
            Self::new((m13 + m31) / s, (m23 + m32) / s, 0.25 * s, (m21 - m12) / s)
        }
    }

    /// Constructs a quaternion rotating `angle` radians around `axis`.
    ///
    /// The axis is normalized first. A zero axis yields `(0, 0, 0, cos(angle/2))`.
    pub fn from_axis_angle(axis: &Vec3, angle: f64) -> Self {
        let axis = axis.normalized();
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let scaled = axis.scale(sin_half);
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Constructs a quaternion rotating `angle` degrees around `axis`.
    pub fn from_axis_angle_degrees(axis: &Vec3, angle: f64) -> Self {
        Self::from_axis_angle(axis, scalar::deg_to_rad(angle))
    }

    /// Recovers `(axis, angle)` with the angle in radians.
    ///
    /// Falls back to `((0, 0, 1), 0)` when `w` lies outside `(-1, 1)` or when
    /// `sin(acos(w))` is numerically zero. The fallback covers both the
    /// no-rotation case and the `w = -1` full turn.
    pub fn to_axis_angle(&self) -> (Vec3, f64) {
        let w = self.w();
        if w > -1.0 && w < 1.0 {
            let t = w.acos();
            let scale = t.sin();
            if !scalar::is_equal_zero(scale) {
                let axis = Vec3::new(self.x() / scale, self.y() / scale, self.z() / scale);
                return (axis, 2.0 * t);
            }
        }
        trace!(w, "axis-angle: degenerate rotation, using z axis");
        (Vec3::UNIT_Z, 0.0)
    }

    /// Recovers `(axis, angle)` with the angle in degrees.
    pub fn to_axis_angle_degrees(&self) -> (Vec3, f64) {
        let (axis, angle) = self.to_axis_angle();
        (axis, scalar::rad_to_deg(angle))
    }

    /// Rotation taking direction `from` onto direction `to`.
    ///
    /// Parallel inputs yield the identity. Exactly opposite inputs yield a
    /// half turn about an axis perpendicular to `from`, returned directly as
    /// `(axis, 0)` with the unnormalised axis, so the result is not a unit
    /// quaternion in that case.
    pub fn from_to_rotation(from: &Vec3, to: &Vec3) -> Self {
        let u = from.normalized();
        let v = to.normalized();
        let dot = u.dot(&v);
        let axis = u.cross(&v);

        if axis.length() != 0.0 {
            let angle = scalar::clamp(dot, -1.0, 1.0).acos();
            return Self::from_axis_angle(&axis, angle);
        }
        if dot >= 0.0 {
            trace!(dot, "from-to rotation: parallel inputs");
            return Self::identity();
        }
        let mut perp = u.cross(&Vec3::UNIT_X);
        if scalar::is_equal_zero(perp.length()) {
            perp = u.cross(&Vec3::UNIT_Y);
        }
        trace!(dot, axis = %perp, "from-to rotation: opposite inputs");
        Self::new(perp.x(), perp.y(), perp.z(), 0.0)
    }

    /// Rotation from Euler angles in radians, applied as `Rx * Ry * Rz`.
    pub fn from_euler_xyz(x: f64, y: f64, z: f64) -> Self {
        let (s1, c1) = (x * 0.5).sin_cos();
        let (s2, c2) = (y * 0.5).sin_cos();
        let (s3, c3) = (z * 0.5).sin_cos();

        Self::new(
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
            c1 * c2 * c3 - s1 * s2 * s3,
        )
    }

    /// Rotation from Euler angles in degrees, applied as `Rx * Ry * Rz`.
    pub fn from_euler_xyz_degrees(x: f64, y: f64, z: f64) -> Self {
        Self::from_euler_xyz(
            scalar::deg_to_rad(x),
            scalar::deg_to_rad(y),
            scalar::deg_to_rad(z),
        )
    }

    /// Rotation from Euler angles in radians, applied as `Rz * Rx * Ry`.
    pub fn from_euler_zxy(x: f64, y: f64, z: f64) -> Self {
        let (s1, c1) = (x * 0.5).sin_cos();
        let (s2, c2) = (y * 0.5).sin_cos();
        let (s3, c3) = (z * 0.5).sin_cos();

        Self::new(
            s1 * c2 * c3 - c1 * s2 * s3,
            c1 * s2 * c3 + s1 * c2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
            c1 * c2 * c3 - s1 * s2 * s3,
        )
    }

    /// Rotation from Euler angles in degrees, applied as `Rz * Rx * Ry`.
    pub fn from_euler_zxy_degrees(x: f64, y: f64, z: f64) -> Self {
        Self::from_euler_zxy(
            scalar::deg_to_rad(x),
            scalar::deg_to_rad(y),
            scalar::deg_to_rad(z),
        )
    }

    /// Euler angles (radians) of the `Rx * Ry * Rz` decomposition.
    ///
    /// The middle (Y) angle comes from a clamped `asin` and lies in
    /// `[-π/2, π/2]`.
    pub fn to_euler_xyz(&self) -> Vec3 {
        let [x, y, z, w] = self.data;
        let sqx = x * x;
        let sqy = y * y;
        let sqz = z * z;
        let sqw = w * w;

        Vec3::new(
            (2.0 * (x * w - y * z)).atan2(sqw - sqx - sqy + sqz),
            scalar::clamp(2.0 * (x * z + y * w), -1.0, 1.0).asin(),
            (2.0 * (z * w - x * y)).atan2(sqw + sqx - sqy - sqz),
        )
    }

    /// Euler angles (radians) of the `Rz * Rx * Ry` decomposition.
    ///
    /// The middle (X) angle comes from a clamped `asin`.
    pub fn to_euler_zxy(&self) -> Vec3 {
        let [x, y, z, w] = self.data;
        let sqx = x * x;
        let sqy = y * y;
        let sqz = z * z;
        let sqw = w * w;

        Vec3::new(
            scalar::clamp(2.0 * (x * w + y * z), -1.0, 1.0).asin(),
            (2.0 * (y * w - z * x)).atan2(sqw - sqx - sqy + sqz),
            (2.0 * (z * w - x * y)).atan2(sqw - sqx + sqy - sqz),
        )
    }

    /// [`Quat::to_euler_xyz`] in degrees.
    pub fn to_euler_xyz_degrees(&self) -> Vec3 {
        Vec3::from(self.to_euler_xyz().to_array().map(scalar::rad_to_deg))
    }

    /// [`Quat::to_euler_zxy`] in degrees.
    pub fn to_euler_zxy_degrees(&self) -> Vec3 {
        Vec3::from(self.to_euler_zxy().to_array().map(scalar::rad_to_deg))
    }

    /// Component-wise comparison within [`scalar::EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| scalar::is_equal(*a, *b))
    }

    /// Component-wise comparison under a caller-supplied tolerance.
    pub fn approx_eq_with(&self, other: &Self, tolerance: &Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| tolerance.approx_eq(*a, *b))
    }

    /// `true` when `self` and `other` encode the same rotation (`q` or `-q`).
    pub fn same_rotation(&self, other: &Self) -> bool {
        let negated = Self {
            data: other.data.map(|c| -c),
        };
        self.approx_eq(other) || self.approx_eq(&negated)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({:.2}, {:.2}, {:.2}, {:.2})",
            self.x(),
            self.y(),
            self.z(),
            self.w()
        )
    }
}

/// Converts an `(x, y, z, w)` array into a `Quat` verbatim; normalization is
/// not enforced.
impl From<[f64; 4]> for Quat {
    fn from(value: [f64; 4]) -> Self {
        Self { data: value }
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.multiply_point(&rhs)
    }
}
