use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use number_set::{NumberSet, NumberSetBuilder, Range};
use rand::seq::SliceRandom;
use rand::Rng;

fn set_sizes() -> Vec<usize> {
    vec![16, 256, 4096]
}

/// Disjoint, non-adjacent ranges: [4i, 4i + 1].
fn spans(count: usize) -> Vec<(i32, i32)> {
    (0..count as i32).map(|i| (4 * i, 4 * i + 1)).collect()
}

fn notation(count: usize) -> String {
    spans(count)
        .iter()
        .map(|(start, end)| format!("{start}-{end}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn build_set(count: usize) -> NumberSet {
    let mut builder = NumberSetBuilder::new();
    for (start, end) in spans(count) {
        builder
            .append(Range::new(start, end, -1, -1).unwrap())
            .unwrap();
    }
    builder.finish()
}

pub fn parse_benchmark(c: &mut Criterion) {
    for count in set_sizes() {
        let text = notation(count);
        c.bench_with_input(BenchmarkId::new("BM_Parse", count), &text, |b, text| {
            b.iter(|| NumberSet::parse(black_box(text), -1, -1).unwrap())
        });
    }
}

pub fn append_benchmark(c: &mut Criterion) {
    for count in set_sizes() {
        let spans = spans(count);
        c.bench_with_input(BenchmarkId::new("BM_Append", count), &spans, |b, spans| {
            b.iter(|| {
                let mut builder = NumberSetBuilder::new();
                for &(start, end) in spans {
                    builder
                        .append(Range::new(start, end, -1, -1).unwrap())
                        .unwrap();
                }
                builder.finish()
            })
        });
    }
}

pub fn insert_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    for count in set_sizes() {
        let mut spans = spans(count);
        spans.shuffle(&mut rng);
        c.bench_with_input(
            BenchmarkId::new("BM_InsertShuffled", count),
            &spans,
            |b, spans| {
                b.iter(|| {
                    let mut builder = NumberSetBuilder::new();
                    for &(start, end) in spans {
                        builder
                            .insert(Range::new(start, end, -1, -1).unwrap())
                            .unwrap();
                    }
                    builder.finish()
                })
            },
        );
    }
}

pub fn contains_benchmark(c: &mut Criterion) {
    const NUM_QUERIES: usize = 1000;
    let mut rng = rand::thread_rng();
    for count in set_sizes() {
        let set = build_set(count);
        let queries: Vec<i32> = (0..NUM_QUERIES)
            .map(|_| rng.gen_range(0..4 * count as i32))
            .collect();
        c.bench_with_input(
            BenchmarkId::new("BM_Contains_1000", count),
            &queries,
            |b, queries| {
                b.iter(|| queries.iter().filter(|&&n| set.contains(n)).count())
            },
        );
    }
}

pub fn iter_benchmark(c: &mut Criterion) {
    for count in set_sizes() {
        let set = build_set(count);
        c.bench_with_input(BenchmarkId::new("BM_Iter", count), &set, |b, set| {
            b.iter(|| set.iter().map(i64::from).sum::<i64>())
        });
    }
}

criterion_group!(
    benches,
    parse_benchmark,
    append_benchmark,
    insert_benchmark,
    contains_benchmark,
    iter_benchmark,
);
criterion_main!(benches);
