// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use echo_math::{Quat, Vec3};

pub const ABS_TOL: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) {
    let diff = (a - b).abs();
    assert!(diff <= ABS_TOL, "expected {b}, got {a} (diff {diff})");
}

pub fn approx_eq3(a: Vec3, b: Vec3) {
    let (a, b) = (a.to_array(), b.to_array());
    for i in 0..3 {
        let diff = (a[i] - b[i]).abs();
        assert!(diff <= ABS_TOL, "index {i}: {a:?} vs {b:?}, diff={diff}");
    }
}

/// Asserts `a` equals `b` or `-b` component-wise.
pub fn assert_same_rotation(a: Quat, b: Quat) {
    assert!(a.same_rotation(&b), "{a:?} and {b:?} differ beyond double cover");
}
