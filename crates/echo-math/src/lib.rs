// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Value-type math for Echo tooling: 2D/3D vectors, rotation quaternions, and
//! conversions between rotation representations.
//!
//! Every type here is a `Copy` plain-old-data value of `f64` components. Pure
//! methods return new values; the mutating counterparts (`set`, `normalize`,
//! `invert`) touch only the receiver and return it for chaining.
//!
//! # Degeneracies
//!
//! Numeric edge cases are absorbed with fixed fallbacks rather than errors:
//! zero-length vectors normalise to themselves, `acos`/`asin` arguments are
//! clamped, and degenerate axis-angle or from-to rotations fall back to a
//! documented value. The only fallible calls are the signed-index accessors
//! and [`scalar::try_clamp`], which report a [`MathError`].
//!
//! # Conventions
//!
//! - Quaternions are `(x, y, z, w)` with `w` the scalar part.
//! - Matrices act on column vectors; `m{row}{col}` is `Mat4::at(row - 1, col - 1)`.
//! - `a * b` for quaternions applies `b` first, then `a`.
#![forbid(unsafe_code)]

mod axis;
mod error;
mod mat4;
mod quat;
/// Scalar helpers: epsilon comparisons, clamping, and angle unit conversion.
pub mod scalar;
mod vec2;
mod vec3;

pub use axis::Axis;
pub use error::MathError;
pub use mat4::{Mat4, RotationMatrix};
pub use quat::Quat;
pub use scalar::{Tolerance, EPSILON};
pub use vec2::Vec2;
pub use vec3::Vec3;
