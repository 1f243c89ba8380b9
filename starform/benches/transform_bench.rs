use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use starform::engine::{reflect, rotate, scale, translate};
use starform::geometry::geo_enums::ReflectAxis;
use starform::geometry::primitives::{Point, Rect};
use starform::geometry::star::generate_star;
use starform::session::{InputSnapshot, Key, Session, Viewport};

criterion_main!(benches);
criterion_group!(benches, engine_bench, tick_bench);

const N_POINTS: [usize; 3] = [5, 50, 500];

/// Benchmark the four engine operations for stars of increasing vertex counts
fn engine_bench(c: &mut Criterion) {
    let rect = Rect::from_borders(0.0, 2000.0, 2000.0, 0.0).unwrap();
    let mut group = c.benchmark_group("engine_bench");

    for n_points in N_POINTS {
        let star = generate_star(Point(1000.0, 1000.0), 100.0, 250.0, n_points);
        group.bench_with_input(BenchmarkId::new("translate", n_points), &star, |b, s| {
            b.iter(|| translate(black_box(s), (1.0, -1.0), &rect))
        });
        group.bench_with_input(BenchmarkId::new("rotate", n_points), &star, |b, s| {
            b.iter(|| rotate(black_box(s), 0.1))
        });
        group.bench_with_input(BenchmarkId::new("scale", n_points), &star, |b, s| {
            b.iter(|| scale(black_box(s), (1.1, 0.9)))
        });
        group.bench_with_input(BenchmarkId::new("reflect", n_points), &star, |b, s| {
            b.iter(|| reflect(black_box(s), ReflectAxis::Horizontal))
        });
    }
    group.finish();
}

/// Benchmark a full tick with all direction keys held
fn tick_bench(c: &mut Criterion) {
    let mut session = Session::from_viewport(&Viewport::default()).unwrap();
    let input = InputSnapshot::from_keys(&Key::ALL);
    c.bench_function("tick_all_keys", |b| {
        b.iter(|| session.tick(black_box(&input), &[]))
    });
}
