use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prefix_radix::{RadixKey, RadixTree};
use std::collections::BTreeMap;

/// Reproducible routing-table-like prefixes: mostly /16../24, a few shorter.
fn prefixes(count: u32) -> Vec<(u32, u8)> {
    (0..count)
        .map(|i| {
            // Simple LCG for reproducible "random" keys
            let key = 1664525u32.wrapping_mul(i).wrapping_add(1013904223);
            let len = 16 + (i % 9) as u8;
            (key.mask(len, 32), len)
        })
        .collect()
}

/// LPM baseline: probe every length from longest to shortest.
fn btree_best(map: &BTreeMap<(u32, u8), u32>, addr: u32) -> Option<&u32> {
    (0..=32u8)
        .rev()
        .find_map(|len| map.get(&(addr.mask(len, 32), len)))
}

/// Benchmark building a table from scratch
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [1_000u32, 10_000, 100_000].iter() {
        let entries = prefixes(*size);

        group.bench_with_input(BenchmarkId::new("RadixTree", size), &entries, |b, entries| {
            b.iter(|| {
                let mut tree = RadixTree::<u32, u32>::new();
                for (i, &(key, len)) in entries.iter().enumerate() {
                    black_box(tree.add(key, len, i as u32)).ok();
                }
                tree
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &entries, |b, entries| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for (i, &(key, len)) in entries.iter().enumerate() {
                    black_box(map.insert((key, len), i as u32));
                }
                map
            });
        });
    }

    group.finish();
}

/// Benchmark longest-prefix match of host addresses
fn bench_get_best(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_best");

    for size in [1_000u32, 10_000, 100_000].iter() {
        let entries = prefixes(*size);
        let mut tree = RadixTree::<u32, u32>::new();
        let mut map = BTreeMap::new();
        for (i, &(key, len)) in entries.iter().enumerate() {
            tree.add(key, len, i as u32).ok();
            map.insert((key, len), i as u32);
        }
        // Hosts inside stored prefixes
        let probes: Vec<u32> = entries.iter().map(|&(key, _)| key | 0x2A).take(1_000).collect();

        group.bench_with_input(BenchmarkId::new("RadixTree", size), &probes, |b, probes| {
            b.iter(|| {
                let mut hits = 0u32;
                for &addr in probes {
                    if tree.get_best(black_box(addr), 32).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &probes, |b, probes| {
            b.iter(|| {
                let mut hits = 0u32;
                for &addr in probes {
                    if btree_best(&map, black_box(addr)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

/// Benchmark remove with compaction, then reinsert
fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_reinsert");

    for size in [1_000u32, 100_000].iter() {
        let entries = prefixes(*size);
        let mut tree = RadixTree::<u32, u32>::new();
        for (i, &(key, len)) in entries.iter().enumerate() {
            tree.add(key, len, i as u32).ok();
        }
        let (key, len) = entries[entries.len() / 2];

        group.bench_with_input(BenchmarkId::new("RadixTree", size), size, |b, _| {
            b.iter(|| {
                black_box(tree.remove(key, len, true)).ok();
                tree.add(key, len, 0).ok(); // Restore for next iteration
            });
        });
    }

    group.finish();
}

/// Benchmark full pre-order traversal
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    let entries = prefixes(10_000);
    let mut tree = RadixTree::<u32, u32>::new();
    for (i, &(key, len)) in entries.iter().enumerate() {
        tree.add(key, len, i as u32).ok();
    }

    group.bench_function("for_each", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            tree.for_each(|key, _, value| {
                sum = sum.wrapping_add(key as u64 ^ *value as u64);
                Ok::<(), ()>(())
            })
            .ok();
            black_box(sum)
        });
    });

    group.bench_function("iter", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for (key, _, value) in tree.iter() {
                sum = sum.wrapping_add(key as u64 ^ *value as u64);
            }
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_get_best,
    bench_remove,
    bench_traversal,
);
criterion_main!(benches);
