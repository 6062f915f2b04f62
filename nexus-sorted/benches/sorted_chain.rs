//! Benchmarks for sorted insertion, lookup and direction flips.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nexus_sorted::{SortedChain, SortedList};

/// Deterministic distinct tokens: "aaa", "aab", ... in scrambled order.
fn tokens(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| (i * 7919) % n)
        .map(|i| {
            let mut s = String::new();
            let mut v = i;
            for _ in 0..4 {
                s.push((b'a' + (v % 26) as u8) as char);
                v /= 26;
            }
            s
        })
        .collect()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for n in [64usize, 512, 4096] {
        let input = tokens(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let mut chain = SortedChain::with_capacity(input.len());
                for value in input {
                    chain.add(black_box(value));
                }
                black_box(chain.size())
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_present");

    for n in [64usize, 512, 4096] {
        let chain: SortedChain = tokens(n).iter().collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &chain, |b, chain| {
            b.iter(|| black_box(chain.is_present(black_box("zzzz"))));
        });
    }

    group.finish();
}

fn bench_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip");

    for n in [64usize, 512, 4096] {
        let mut chain: SortedChain = tokens(n).iter().collect();
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                chain.order_descending();
                chain.order_ascending();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_lookup, bench_flip);
criterion_main!(benches);
