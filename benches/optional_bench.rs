//! Optional 组合子的性能基准测试

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use optional::{JsonComparator, Optional};

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.bench_function("of", |b| b.iter(|| Optional::of(black_box(42u64)).unwrap()));
    group.bench_function("of_nullable_none", |b| {
        b.iter(|| Optional::<u64>::of_nullable(black_box(None)))
    });
    group.bench_function("empty", |b| b.iter(|| black_box(Optional::<u64>::empty())));
    group.finish();
}

fn bench_combinator_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinator_chain");

    for depth in [1usize, 8, 64].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter(|| {
                let mut current = Optional::of(1u64).unwrap();
                for _ in 0..depth {
                    current = current.filter(|v| *v > 0).map(|v| v + 1);
                }
                black_box(current)
            });
        });
    }

    group.bench_function("flat_map_checked", |b| {
        let source = Optional::of(7u64).unwrap();
        b.iter(|| {
            let mapped: Optional<u64> = source.flat_map(|v| Optional::of(v * 2).unwrap()).unwrap();
            black_box(mapped)
        });
    });

    group.finish();
}

fn bench_equality(c: &mut Criterion) {
    let left = Optional::of((0..256).collect::<Vec<u32>>()).unwrap();
    let right = Optional::of((0..256).collect::<Vec<u32>>()).unwrap();

    let mut group = c.benchmark_group("equality");
    group.bench_function("partial_eq", |b| b.iter(|| black_box(left.equals(&right))));
    group.bench_function("json", |b| {
        b.iter(|| black_box(left.equals_with(&right, &JsonComparator)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_combinator_chain,
    bench_equality
);
criterion_main!(benches);
