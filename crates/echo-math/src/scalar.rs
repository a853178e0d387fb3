// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers shared by the vector and quaternion types.
//!
//! Everything here is pure and allocation-free. Comparisons are absolute-epsilon
//! by default; use [`Tolerance`] when a caller needs a relative bound as well.

use core::f64::consts::TAU;

use crate::error::MathError;

/// Global epsilon used for approximate equality and degeneracy detection.
pub const EPSILON: f64 = 1e-9;

/// Returns `true` when `a` and `b` differ by at most [`EPSILON`].
pub fn is_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Returns `true` when `value` is within [`EPSILON`] of zero.
pub fn is_equal_zero(value: f64) -> bool {
    value.abs() <= EPSILON
}

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Checked variant of [`clamp`] that reports an inverted range instead of
/// asserting.
pub fn try_clamp(value: f64, min: f64, max: f64) -> Result<f64, MathError> {
    if min > max {
        return Err(MathError::InvalidRange { min, max });
    }
    Ok(value.max(min).min(max))
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value * (360.0 / TAU)
}

/// Floored quotient `floor(value / divisor)` computed from the remainder.
///
/// Dividing first and flooring afterwards can round the quotient up across an
/// integer (`1.0 / 0.1` rounds to exactly `10.0`), so the quotient is taken
/// from `value - value % divisor` instead, giving `floor_div(1.0, 0.1) == 9.0`.
/// The quotient rounds toward negative infinity for either sign of `divisor`.
/// A zero divisor follows IEEE-754 division.
pub fn floor_div(value: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        return value / divisor;
    }
    let rem = value % divisor;
    let mut div = (value - rem) / divisor;
    if rem != 0.0 && (divisor < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(value / divisor);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Absolute/relative comparison bound.
///
/// The allowed error for a comparison is `max(absolute, relative * |reference|)`,
/// so large magnitudes are compared relatively and values near zero absolutely.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    /// Absolute bound applied near zero.
    pub absolute: f64,
    /// Relative bound scaled by the magnitude of the reference value.
    pub relative: f64,
}

impl Tolerance {
    /// Creates a tolerance from explicit bounds.
    pub const fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Maximum error accepted when comparing against `reference`.
    pub fn allowed_error(&self, reference: f64) -> f64 {
        self.absolute.max(self.relative * reference.abs())
    }

    /// Compares `actual` against `expected` using this tolerance.
    pub fn approx_eq(&self, actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= self.allowed_error(expected)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(EPSILON, EPSILON)
    }
}
