//! 数学运算性能基准测试
//!
//! 对比 kiln_math 两个后端与 glam 在向量、矩阵、四元数上的性能

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Mat4, Quat, Vec3};
use kiln_engine::math::{Matrix4, Matrix4A, Quaternion, Simd, Vector3, Vector3A};
use kiln_engine::transform::{Spinner, TransformUniform};

fn bench_vec3_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3_operations");

    let v1 = Vector3::new(1.0f32, 2.0, 3.0);
    let v2 = Vector3::new(4.0f32, 5.0, 6.0);
    let a1 = Vector3A::from(v1);
    let a2 = Vector3A::from(v2);
    let g1 = Vec3::new(1.0, 2.0, 3.0);
    let g2 = Vec3::new(4.0, 5.0, 6.0);

    group.bench_function("add/fpu", |b| b.iter(|| black_box(black_box(v1) + black_box(v2))));
    group.bench_function("add/simd", |b| b.iter(|| black_box(black_box(a1) + black_box(a2))));
    group.bench_function("add/glam", |b| b.iter(|| black_box(black_box(g1) + black_box(g2))));

    group.bench_function("cross/fpu", |b| b.iter(|| black_box(v1.cross(v2))));
    group.bench_function("cross/simd", |b| b.iter(|| black_box(a1.cross(a2))));
    group.bench_function("cross/glam", |b| b.iter(|| black_box(g1.cross(g2))));

    group.bench_function("normalize/fpu", |b| b.iter(|| black_box(v1.normalize())));
    group.bench_function("normalize/simd", |b| b.iter(|| black_box(a1.normalize())));
    group.bench_function("normalize/glam", |b| b.iter(|| black_box(g1.normalize())));

    group.finish();
}

fn bench_matrix_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_operations");

    let m1 = Matrix4::rotation_z(0.785398f32) * Matrix4::translation(Vector3::new(1.0, 2.0, 3.0));
    let m2 = Matrix4::scale(Vector3::new(2.0f32, 2.0, 2.0));
    let s1: Matrix4A<f32> = m1.to_backend::<Simd>();
    let s2: Matrix4A<f32> = m2.to_backend::<Simd>();
    let g1 = Mat4::from_cols_array(&m1.to_cols_array());
    let g2 = Mat4::from_cols_array(&m2.to_cols_array());

    group.bench_function("multiply/fpu", |b| b.iter(|| black_box(black_box(m1) * black_box(m2))));
    group.bench_function("multiply/simd", |b| b.iter(|| black_box(black_box(s1) * black_box(s2))));
    group.bench_function("multiply/glam", |b| b.iter(|| black_box(black_box(g1) * black_box(g2))));

    group.bench_function("inverse/fpu", |b| b.iter(|| black_box(m1.inverse())));
    group.bench_function("inverse/simd", |b| b.iter(|| black_box(s1.inverse())));
    group.bench_function("inverse/glam", |b| b.iter(|| black_box(g1.inverse())));

    group.finish();
}

fn bench_quaternion_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("quaternion_operations");

    let q1 = Quaternion::from_axis_angle(Vector3::new(1.0f32, 2.0, 3.0), 1.0);
    let q2 = Quaternion::from_axis_angle(Vector3::new(-3.0f32, 0.5, 1.0), 2.0);
    let v = Vector3::new(1.0f32, 2.0, 3.0);
    let gq1 = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0).normalize(), 1.0);
    let gq2 = Quat::from_axis_angle(Vec3::new(-3.0, 0.5, 1.0).normalize(), 2.0);
    let gv = Vec3::new(1.0, 2.0, 3.0);

    group.bench_function("multiply/kiln", |b| b.iter(|| black_box(q1 * q2)));
    group.bench_function("multiply/glam", |b| b.iter(|| black_box(gq1 * gq2)));
    group.bench_function("rotate_vector3/kiln", |b| b.iter(|| black_box(q1.rotate_vector(v))));
    group.bench_function("rotate_vector3/glam", |b| b.iter(|| black_box(gq1 * gv)));
    group.bench_function("slerp/kiln", |b| b.iter(|| black_box(q1.slerp(q2, 0.5))));
    group.bench_function("slerp/glam", |b| b.iter(|| black_box(gq1.slerp(gq2, 0.5))));

    group.finish();
}

fn bench_uniform_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_packing");
    let spinner = Spinner::default();

    for count in [100usize, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("spinner_simd", count), count, |b, &count| {
            b.iter(|| {
                let mut uniforms: Vec<TransformUniform> = Vec::with_capacity(count);
                for i in 0..count {
                    uniforms.push(spinner.uniform::<Simd>(i as f32 * 0.016));
                }
                black_box(bytemuck::cast_slice::<TransformUniform, u8>(&uniforms).len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_vec3_operations,
    bench_matrix_operations,
    bench_quaternion_operations,
    bench_uniform_packing
);
criterion_main!(benches);
