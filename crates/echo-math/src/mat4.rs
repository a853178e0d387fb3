// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Quat, Vec3};

/// Read access to the rotation block of a 3×3 or 4×4 matrix.
///
/// Indices are zero-based `(row, col)`; only the upper-left 3×3 block is read
/// by [`Quat::from_rotation_matrix`]. The convention is column vectors
/// (`p' = M * p`), so `at(0, 1)` is the conventional `m12`.
pub trait RotationMatrix {
    /// Element at `(row, col)`.
    fn at(&self, row: usize, col: usize) -> f64;
}

impl RotationMatrix for [[f64; 3]; 3] {
    fn at(&self, row: usize, col: usize) -> f64 {
        self[row][col]
    }
}

impl RotationMatrix for [[f64; 4]; 4] {
    fn at(&self, row: usize, col: usize) -> f64 {
        self[row][col]
    }
}

/// 4×4 matrix of `f64`, stored column-major.
///
/// Only the pieces the rotation conversions need are provided here: identity,
/// element access, axis rotations, products, and transforms.
///
/// # Examples
/// ```
/// use core::f64::consts::FRAC_PI_2;
/// use echo_math::{Mat4, Vec3};
/// let r = Mat4::rotation_z(FRAC_PI_2);
/// assert_eq!(r.transform_direction(&Vec3::UNIT_X), Vec3::UNIT_Y);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [f64; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from row-major rows, the order matrices are written in.
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let mut out = Self::new([0.0; 16]);
        for (row, values) in rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                out.set(row, col, *value);
            }
        }
        out
    }

    /// Returns the matrix as a column-major array.
    pub const fn to_array(self) -> [f64; 16] {
        self.data
    }

    /// Returns the matrix as row-major rows.
    pub fn to_rows(&self) -> [[f64; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (row, values) in rows.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.at(row, col);
            }
        }
        rows
    }

    /// Element at `(row, col)`, zero-based.
    pub const fn at(&self, row: usize, col: usize) -> f64 {
        self.data[col * 4 + row]
    }

    /// Writes the element at `(row, col)`, zero-based.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> &mut Self {
        self.data[col * 4 + row] = value;
        self
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Constructs a rotation matrix from a quaternion.
    ///
    /// Forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let [x, y, z] = point.to_array();
        Vec3::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3),
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3),
            self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3),
        )
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [x, y, z] = direction.to_array();
        Vec3::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z,
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z,
            self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z,
        )
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix for Mat4 {
    fn at(&self, row: usize, col: usize) -> f64 {
        Mat4::at(self, row, col)
    }
}

impl From<[f64; 16]> for Mat4 {
    fn from(value: [f64; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
