use std::hint::black_box;
use std::time::{Duration, Instant};

use array_ext::{
    Search, algorithm_name, all_algorithms, binary_search, shuffle_with, sort_with,
};
use bench::{Distribution, apply_runtime_for_size, apply_small_runtime_config, default_rng};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use rayon::slice::ParallelSliceMut;

const BENCH_SIZES: [usize; 4] = [4096, 16384, 65536, 262144];
const SEARCH_SIZES: [usize; 3] = [1 << 10, 1 << 16, 1 << 20];
const SEARCH_PROBES: usize = 1024;

fn bench_sort(c: &mut Criterion) {
    let mut rng = default_rng();

    for dist in Distribution::ALL {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime_for_size(&mut group, size);
            let base = bench::generate_dataset(&mut rng, dist, size);

            for &algo in all_algorithms() {
                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        time_on_copies(&base, iters, |data| sort_with(algo, data))
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    time_on_copies(&base, iters, |data| data.sort_unstable())
                });
            });

            group.bench_function(BenchmarkId::new("rayon_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    time_on_copies(&base, iters, |data| data.par_sort_unstable())
                });
            });
        }

        group.finish();
    }
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    apply_small_runtime_config(&mut group);

    for &size in &BENCH_SIZES {
        let mut data = (0..size as u64).collect::<Vec<_>>();
        let mut rng = default_rng();
        group.bench_function(BenchmarkId::new("fisher_yates", size), |bencher| {
            bencher.iter(|| {
                shuffle_with(&mut data, &mut rng);
                black_box(&data);
            });
        });
    }

    group.finish();
}

fn bench_binary_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_search");
    apply_small_runtime_config(&mut group);
    let mut rng = default_rng();

    for &size in &SEARCH_SIZES {
        let data = (0..size as u64).map(|x| x * 2).collect::<Vec<_>>();
        let probes = (0..SEARCH_PROBES)
            .map(|_| rng.random_range(0..size as u64 * 2))
            .collect::<Vec<_>>();

        group.bench_function(BenchmarkId::new("array_ext", size), |bencher| {
            bencher.iter(|| {
                let mut hits = 0_usize;
                for probe in &probes {
                    if let Search::Found(_) = binary_search(&data, black_box(probe)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_function(BenchmarkId::new("std", size), |bencher| {
            bencher.iter(|| {
                let mut hits = 0_usize;
                for probe in &probes {
                    if data.binary_search(black_box(probe)).is_ok() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

fn time_on_copies(base: &[u64], iters: u64, mut f: impl FnMut(&mut [u64])) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iters {
        let mut data = base.to_vec();
        let start = Instant::now();
        f(&mut data);
        total += start.elapsed();
        black_box(&data);
    }
    total
}

criterion_group!(benches, bench_sort, bench_shuffle, bench_binary_search);
criterion_main!(benches);
