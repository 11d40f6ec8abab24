//! Criterion benchmarks for the per-render workload.
//! Focus sizes: point sets of n in {10, 50, 200}; sampling at the default 600 steps.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use planar::expr::compile_function;
use planar::geom2::{transform_line, GeomCfg, Line, TransformSpec};
use planar::sample::{sample_function, SampleCfg};
use planar::session::{Fields, ObjectKind, TransformKind, TransformSession};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)))
        .collect()
}

fn specs() -> [TransformSpec; 4] {
    [
        TransformSpec::Translate { dx: 1.5, dy: -2.0 },
        TransformSpec::Rotate {
            degrees: 33.0,
            center: Vector2::new(1.0, 1.0),
        },
        TransformSpec::Reflect {
            line: Line::from_coefficients(1.0, -2.0, 3.0).normalized(),
            display: None,
        },
        TransformSpec::Dilate {
            k: -0.75,
            center: Vector2::new(0.0, 2.0),
        },
    ]
}

fn bench_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("points");
    for &n in &[10usize, 50, 200] {
        for spec in specs() {
            group.bench_with_input(BenchmarkId::new(spec.kind_name(), n), &n, |b, &n| {
                b.iter_batched(
                    || random_points(n, 42),
                    |pts| {
                        let _out = spec.apply_points(&pts);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let cfg = GeomCfg::default();
    let line = Line::from_coefficients(2.0, -1.0, 0.5).normalized();
    let mut group = c.benchmark_group("lines");
    for spec in specs() {
        group.bench_function(spec.kind_name(), |b| {
            b.iter(|| transform_line(&line, &spec, cfg))
        });
    }
    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let f = compile_function("sin(x) * x^2 - 3 / (x - 1)", "x").unwrap();
    c.bench_function("sample_600", |b| {
        b.iter(|| sample_function(&f, -10.0, 10.0, SampleCfg::default()))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut fields = Fields::default();
    fields.object_kind = ObjectKind::Function;
    fields.transform_kind = TransformKind::Rotate;
    let mut session = TransformSession::new(fields);
    c.bench_function("render_function_rotate", |b| {
        b.iter(|| session.render().transformed.len())
    });
}

criterion_group!(benches, bench_points, bench_lines, bench_sampling, bench_render);
criterion_main!(benches);
