use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rk_core::RoundingRule;
use rk_math::{round_f64, round_i64, round_to_precision, round_to_significant_digits};

fn integer(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer");
    for rule in RoundingRule::ALL {
        group.bench_function(rule.name(), |b| {
            b.iter(|| round_i64(black_box(9_223_372_036_854_775_018), black_box(10), rule))
        });
    }
    group.bench_function("significant-digits", |b| {
        b.iter(|| round_to_significant_digits(black_box(2468), black_box(2), RoundingRule::ToNearestOrEven))
    });
    group.finish();
}

fn float(c: &mut Criterion) {
    let mut group = c.benchmark_group("float");
    group.bench_function("increment", |b| {
        b.iter(|| round_f64(black_box(123.5678), black_box(0.01), RoundingRule::Up))
    });
    group.bench_function("precision", |b| {
        b.iter(|| round_to_precision(black_box(80.0), black_box(3), black_box(60), RoundingRule::Down))
    });
    group.finish();
}

criterion_group!(benches, integer, float);
criterion_main!(benches);
