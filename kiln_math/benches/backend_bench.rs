//! 标量与SIMD后端性能对比
//!
//! 同一组运算分别在 `Fpu` 与 `Simd` 后端上执行

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kiln_math::{Backend, Element, Fpu, Matrix, Simd, Vector};

fn vec4<B>() -> (Vector<f32, 4, B>, Vector<f32, 4, B>)
where
    B: Backend,
    f32: Element<B, 4>,
{
    (
        Vector::<f32, 4, B>::new(1.0, 2.0, 3.0, 4.0),
        Vector::<f32, 4, B>::new(5.0, 6.0, 7.0, 8.0),
    )
}

fn mat4<B>(offset: f32) -> Matrix<f32, 4, B>
where
    B: Backend,
    f32: Element<B, 4>,
{
    Matrix::<f32, 4, B>::from_fn(|r, c| (r * 4 + c) as f32 + offset)
}

fn bench_vec4<B>(c: &mut Criterion)
where
    B: Backend,
    f32: Element<B, 4>,
{
    let mut group = c.benchmark_group("vec4_operations");
    let (a, b) = vec4::<B>();

    group.bench_function(BenchmarkId::new("add", B::NAME), |bencher| {
        bencher.iter(|| black_box(black_box(a) + black_box(b)));
    });

    group.bench_function(BenchmarkId::new("dot", B::NAME), |bencher| {
        bencher.iter(|| black_box(black_box(a).dot(black_box(b))));
    });

    group.bench_function(BenchmarkId::new("normalize", B::NAME), |bencher| {
        bencher.iter(|| black_box(black_box(a).normalize()));
    });

    group.bench_function(BenchmarkId::new("lerp", B::NAME), |bencher| {
        bencher.iter(|| black_box(black_box(a).lerp(black_box(b), 0.25)));
    });

    group.finish();
}

fn bench_vec3_cross<B>(c: &mut Criterion)
where
    B: Backend,
    f32: Element<B, 3>,
{
    let mut group = c.benchmark_group("vec3_cross");
    let a = Vector::<f32, 3, B>::new(1.0, 2.0, 3.0);
    let b = Vector::<f32, 3, B>::new(-4.0, 0.5, 2.0);

    group.bench_function(BenchmarkId::from_parameter(B::NAME), |bencher| {
        bencher.iter(|| black_box(black_box(a).cross(black_box(b))));
    });

    group.finish();
}

fn bench_mat4<B>(c: &mut Criterion)
where
    B: Backend,
    f32: Element<B, 4>,
{
    let mut group = c.benchmark_group("mat4_operations");
    let m1 = mat4::<B>(0.0) + Matrix::<f32, 4, B>::identity() * 40.0;
    let m2 = mat4::<B>(1.5);
    let v = Vector::<f32, 4, B>::new(1.0, 2.0, 3.0, 1.0);

    group.bench_function(BenchmarkId::new("multiply", B::NAME), |bencher| {
        bencher.iter(|| black_box(black_box(m1) * black_box(m2)));
    });

    group.bench_function(BenchmarkId::new("transform", B::NAME), |bencher| {
        bencher.iter(|| black_box(black_box(m1) * black_box(v)));
    });

    group.bench_function(BenchmarkId::new("inverse", B::NAME), |bencher| {
        bencher.iter(|| black_box(black_box(m1).inverse()));
    });

    group.bench_function(BenchmarkId::new("transpose", B::NAME), |bencher| {
        bencher.iter(|| black_box(black_box(m1).transpose()));
    });

    group.finish();
}

fn bench_batch_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_transform");
    let model = mat4::<Fpu>(0.25);
    let model_simd = model.to_backend::<Simd>();

    for count in [100usize, 1000, 10000].iter() {
        let points: Vec<Vector<f32, 4, Fpu>> = (0..*count)
            .map(|i| Vector::<f32, 4, Fpu>::new(i as f32, 1.0, -(i as f32), 1.0))
            .collect();
        let points_simd: Vec<Vector<f32, 4, Simd>> =
            points.iter().map(|p| p.to_backend::<Simd>()).collect();

        group.bench_with_input(BenchmarkId::new(Fpu::NAME, count), &points, |bencher, points| {
            bencher.iter(|| points.iter().map(|p| model * *p).collect::<Vec<_>>());
        });

        group.bench_with_input(
            BenchmarkId::new(Simd::NAME, count),
            &points_simd,
            |bencher, points| {
                bencher.iter(|| points.iter().map(|p| model_simd * *p).collect::<Vec<_>>());
            },
        );
    }

    group.finish();
}

fn bench_all(c: &mut Criterion) {
    bench_vec4::<Fpu>(c);
    bench_vec4::<Simd>(c);
    bench_vec3_cross::<Fpu>(c);
    bench_vec3_cross::<Simd>(c);
    bench_mat4::<Fpu>(c);
    bench_mat4::<Simd>(c);
}

criterion_group!(benches, bench_all, bench_batch_transform);
criterion_main!(benches);
