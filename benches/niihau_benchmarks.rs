//! Niihau Index Benchmarks
//!
//! Benchmarks for the trie engine, implemented with Criterion.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use niihau_index_lib::data_structures::niihau_trie::NiihauTrie;
use std::time::Duration;

/// Builds an index of `groups * per_group` keys sharing `prefix_{group}_` stems.
fn populated(groups: usize, per_group: usize) -> NiihauTrie<usize> {
    let trie = NiihauTrie::new();
    trie.extend((0..groups).flat_map(|i| {
        (0..per_group).map(move |j| (format!("prefix_{i}_key_{j}"), i * per_group + j))
    }));
    trie
}

/// Benchmark the Niihau Trie
fn bench_niihau_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("niihau_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Insert benchmark with different key sizes
    for key_length in [8, 16, 32, 64].iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("add", key_length),
            key_length,
            |b, &length| {
                let trie = NiihauTrie::new();
                let keys: Vec<String> = (0..1000)
                    .map(|i| format!("{:0width$}", i, width = length))
                    .collect();

                let mut index = 0;
                b.iter(|| {
                    let key = &keys[index % keys.len()];
                    index += 1;
                    black_box(trie.add(key, index));
                });
            },
        );
    }

    group.bench_function("get", |b| {
        let trie = populated(100, 10);
        let mut index = 0;
        b.iter(|| {
            let key = format!("prefix_{}_key_{}", index % 100, index % 10);
            index += 1;
            black_box(trie.get(&key));
        });
    });

    for limit in [1, 10, 100].iter() {
        group.bench_with_input(BenchmarkId::new("get_many", limit), limit, |b, &limit| {
            let trie = populated(100, 10);
            b.iter(|| black_box(trie.get_many("prefix_", limit)));
        });
    }

    group.bench_function("remove_with_pruning", |b| {
        b.iter_batched(
            || populated(10, 10),
            |trie| {
                for i in 0..10 {
                    for j in 0..10 {
                        black_box(trie.remove(&format!("prefix_{i}_key_{j}"), &(i * 10 + j)));
                    }
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_niihau_trie
}

criterion_main!(benches);
