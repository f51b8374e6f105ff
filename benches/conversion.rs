//! Criterion benchmarks for the conversion core.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use thermion::{convert, TemperatureUnit};

fn bench_convert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let values: Vec<f64> = (0..1024).map(|_| rng.gen_range(-500.0..500.0)).collect();

    c.bench_function("convert_f_to_c_1024", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(convert(
                    black_box(v),
                    TemperatureUnit::Fahrenheit,
                    TemperatureUnit::Celsius,
                ));
            }
        })
    });

    c.bench_function("convert_unit_grid_1024", |b| {
        b.iter(|| {
            for &v in &values {
                for from in TemperatureUnit::ALL {
                    for to in TemperatureUnit::ALL {
                        black_box(convert(black_box(v), from, to));
                    }
                }
            }
        })
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
