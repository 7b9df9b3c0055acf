use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use partyline::{Sink, Source, TransformError};

fn source_creation_benchmark(c: &mut Criterion) {
    c.bench_function("source_creation", |b| {
        b.iter(|| {
            let source: Source<i32, String> = Source::new();
            source
        });
    });
}

fn emit_benchmark(c: &mut Criterion) {
    let source: Source<i32, String> = Source::new();
    source.subscribe(Sink::values(|value| {
        black_box(value);
    })).detach();

    c.bench_function("emit_value", |b| {
        let mut i = 0;
        b.iter(|| {
            source.send(black_box(i));
            i += 1;
        });
    });
}

fn subscribe_cancel_benchmark(c: &mut Criterion) {
    let source: Source<i32, String> = Source::new();

    c.bench_function("subscribe_cancel", |b| {
        b.iter(|| {
            let subscription = source.subscribe(Sink::values(|_| {}));
            subscription.cancel();
        });
    });
}

fn fanout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fanout");

    for observer_count in [1, 10, 100].iter() {
        let source: Source<i32, String> = Source::new();

        for _ in 0..*observer_count {
            source.subscribe(Sink::values(|value| {
                black_box(value);
            })).detach();
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(observer_count),
            observer_count,
            |b, _| {
                let mut i = 0;
                b.iter(|| {
                    source.send(black_box(i));
                    i += 1;
                });
            },
        );
    }
    group.finish();
}

fn map_chain_benchmark(c: &mut Criterion) {
    let source: Source<i32, TransformError> = Source::new();
    let chained = source
        .map(|value| value + 1)
        .map(|value| value * 2)
        .filter(|value| value % 2 == 0);
    chained.subscribe(Sink::values(|value| {
        black_box(value);
    })).detach();

    c.bench_function("map_chain", |b| {
        let mut i = 0;
        b.iter(|| {
            source.send(black_box(i));
            i += 1;
        });
    });
}

criterion_group!(
    benches,
    source_creation_benchmark,
    emit_benchmark,
    subscribe_cancel_benchmark,
    fanout_benchmark,
    map_chain_benchmark,
);
criterion_main!(benches);
