use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use redblacktree::RedBlackTreeMap;
use std::collections::BTreeMap;

const SEED: u64 = 42;

fn generate_keys(size: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..size).map(|_| rng.gen_range(0..size as u32 * 2)).collect()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");
    group.sample_size(30);

    for size in [1_000, 10_000, 100_000] {
        let keys = generate_keys(size);

        group.bench_with_input(BenchmarkId::new("red_black_random", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = RedBlackTreeMap::with_capacity(keys.len());
                for &key in keys {
                    black_box(tree.insert(key, key));
                }
                black_box(tree)
            })
        });

        group.bench_with_input(BenchmarkId::new("btreemap_random", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = BTreeMap::new();
                for &key in keys {
                    black_box(tree.insert(key, key));
                }
                black_box(tree)
            })
        });

        // Ascending keys drive the insert fixup down the same path every time.
        group.bench_with_input(BenchmarkId::new("red_black_sequential", size), &size, |b, &size| {
            b.iter(|| {
                let mut tree = RedBlackTreeMap::with_capacity(size);
                for key in 0..size as u32 {
                    black_box(tree.insert(key, key));
                }
                black_box(tree)
            })
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1_000, 10_000, 100_000] {
        let keys = generate_keys(size);
        let ours: RedBlackTreeMap<u32, u32> = keys.iter().map(|&k| (k, k)).collect();
        let std_tree: BTreeMap<u32, u32> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("red_black", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(ours.get(key));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("btreemap", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(std_tree.get(key));
                }
            })
        });
    }
    group.finish();
}

fn bench_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("removal");
    group.sample_size(20);

    for size in [1_000, 10_000] {
        let keys = generate_keys(size);
        let ours: RedBlackTreeMap<u32, u32> = keys.iter().map(|&k| (k, k)).collect();
        let std_tree: BTreeMap<u32, u32> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("red_black", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = ours.clone();
                for key in keys {
                    black_box(tree.remove(key));
                }
                black_box(tree)
            })
        });

        group.bench_with_input(BenchmarkId::new("btreemap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = std_tree.clone();
                for key in keys {
                    black_box(tree.remove(key));
                }
                black_box(tree)
            })
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in [10_000, 100_000] {
        let ours: RedBlackTreeMap<u32, u32> = (0..size).map(|k| (k, k)).collect();
        let std_tree: BTreeMap<u32, u32> = (0..size).map(|k| (k, k)).collect();

        group.bench_function(BenchmarkId::new("red_black", size), |b| {
            b.iter(|| black_box(ours.values().map(|&v| u64::from(v)).sum::<u64>()))
        });
        group.bench_function(BenchmarkId::new("btreemap", size), |b| {
            b.iter(|| black_box(std_tree.values().map(|&v| u64::from(v)).sum::<u64>()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_lookup,
    bench_removal,
    bench_iteration
);
criterion_main!(benches);
