// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored).
#![allow(missing_docs)]
//! Rotation hot-path microbenchmarks.
//!
//! - `rotate_point/closed_form` vs `rotate_point/via_mat4`: the closed-form
//!   `multiply_point` against building the matrix and transforming.
//! - `from_rotation_matrix`: extraction cost on matrices that hit each branch.
use core::f64::consts::{FRAC_PI_2, PI};
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use echo_math::{Quat, Vec3};

fn bench_rotate_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate_point");
    group
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3));
    let q = Quat::from_axis_angle(&Vec3::new(0.3, -1.0, 2.0), 1.234);
    let p = Vec3::new(4.0, -5.0, 0.5);
    group.bench_function("closed_form", |b| {
        b.iter(|| black_box(q).multiply_point(black_box(&p)));
    });
    group.bench_function("via_mat4", |b| {
        b.iter(|| black_box(q).to_mat4().transform_direction(black_box(&p)));
    });
    group.finish();
}

fn bench_from_rotation_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_rotation_matrix");
    let cases = [
        ("trace", Quat::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2)),
        ("x_dominant", Quat::from_axis_angle(&Vec3::UNIT_X, PI)),
        ("y_dominant", Quat::from_axis_angle(&Vec3::UNIT_Y, PI)),
        ("z_dominant", Quat::from_axis_angle(&Vec3::UNIT_Z, PI)),
    ];
    for (name, q) in cases {
        let m = q.to_mat4();
        group.bench_with_input(BenchmarkId::from_parameter(name), &m, |b, m| {
            b.iter(|| Quat::from_rotation_matrix(black_box(m)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rotate_point, bench_from_rotation_matrix);
criterion_main!(benches);
