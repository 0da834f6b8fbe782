use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use easings::{in_out_back, in_out_bounce, in_out_elastic, interpolate, out_expo, Curve, EaseKind};

const STEPS: usize = 1000;

fn progress() -> Vec<f64> {
    (0..=STEPS).map(|i| i as f64 / STEPS as f64).collect()
}

fn evaluate_kinds(c: &mut Criterion) {
    let ts = progress();
    let mut group = c.benchmark_group("evaluate_kind");

    for kind in EaseKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, kind| {
            b.iter(|| {
                let mut sum = 0.0;
                for &t in &ts {
                    sum += kind.eval(black_box(t));
                }
                sum
            });
        });
    }

    group.finish();
}

fn evaluate_concrete(c: &mut Criterion) {
    let ts = progress();
    let curves: [(&str, Box<dyn Curve<f64>>); 4] = [
        ("out_expo", Box::new(out_expo())),
        ("in_out_elastic", Box::new(in_out_elastic::<f64>())),
        ("in_out_back", Box::new(in_out_back::<f64>())),
        ("in_out_bounce", Box::new(in_out_bounce())),
    ];
    let mut group = c.benchmark_group("evaluate_boxed");

    for (name, curve) in &curves {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let mut sum = 0.0;
                for &t in &ts {
                    sum += curve.eval(black_box(t));
                }
                sum
            });
        });
    }

    group.finish();
}

fn interpolate_frames(c: &mut Criterion) {
    let ease = in_out_elastic::<f32>();

    c.bench_function("interpolate_60_frames", |b| {
        b.iter(|| {
            let mut x = 0.0f32;
            for frame in 0..=60 {
                x += interpolate(
                    black_box(10.0f32),
                    black_box(110.0),
                    1.0,
                    frame as f32 / 60.0,
                    &ease,
                );
            }
            x
        });
    });
}

criterion_group!(benches, evaluate_kinds, evaluate_concrete, interpolate_frames);
criterion_main!(benches);
