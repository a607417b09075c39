use criterion::{Criterion, criterion_group, criterion_main};
use numscale::{FormatMode, expand_scientific, stringify};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("long_scale", |b| {
        b.iter(|| stringify(black_box("1328000000"), FormatMode::LongText));
    });

    c.bench_function("short_scale", |b| {
        b.iter(|| stringify(black_box("1,328,000,000.77"), FormatMode::ShortText));
    });

    c.bench_function("scientific", |b| {
        b.iter(|| stringify(black_box("1328000000"), FormatMode::ScientificNotation));
    });

    c.bench_function("hour_min_sec", |b| {
        b.iter(|| stringify(black_box("13528.6"), FormatMode::SecondsToHourMinSec));
    });

    c.bench_function("expand", |b| {
        b.iter(|| expand_scientific(black_box("1.6E+280")));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
