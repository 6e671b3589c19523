mod algorithms;
mod error;

pub use algorithms::binary_search::{
    Search, binary_search, binary_search_by, binary_search_range_by, try_binary_search_by,
    try_binary_search_range_by,
};
pub use algorithms::par_quick_sort::{
    ParallelOptions, par_sort, par_sort_by, try_par_sort_by, try_par_sort_range_by,
};
pub use algorithms::partition::try_partition_range_by;
pub use algorithms::quick_sort::{sort, sort_by, sort_range_by, try_sort_by, try_sort_range_by};
pub use algorithms::shuffle::{shuffle, shuffle_range, shuffle_with};
pub use algorithms::swap::swap;
pub use error::{ArrayError, BoxError};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    QuickSort,
    ParallelQuickSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] =
    [SortAlgorithm::QuickSort, SortAlgorithm::ParallelQuickSort];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::ParallelQuickSort => "par_quick_sort",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Largest `right - left` span the parallel sort still hands to the sequential one.
    pub sequential_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    sequential_threshold: 8192,
};

pub fn sort_with<T: Ord + Send>(algo: SortAlgorithm, data: &mut [T]) {
    match algo {
        SortAlgorithm::QuickSort => sort(data),
        SortAlgorithm::ParallelQuickSort => par_sort(data),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[u64]) {
        for &algo in all_algorithms() {
            let mut actual = data.to_vec();
            sort_with(algo, &mut actual);

            let mut expected = data.to_vec();
            expected.sort_unstable();

            assert_eq!(
                actual,
                expected,
                "algorithm={} input_len={}",
                algorithm_name(algo),
                data.len(),
            );
        }
    }

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
        }
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![5, 3, 8, 1, 9, 2],
            vec![7; 128],
            vec![u64::MIN, 1, u64::MAX, 0, u64::MAX - 1, 2],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_sizes_around_threshold() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let t = TUNED_PARAMS.sequential_threshold;
        for &size in &[t - 1, t, t + 1, t + 2, 4 * t] {
            let data = (0..size).map(|_| rng.random::<u64>()).collect::<Vec<_>>();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn duplicates_around_threshold() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        let t = TUNED_PARAMS.sequential_threshold;
        for &size in &[t - 1, t + 1, 4 * t] {
            let few_distinct = (0..size)
                .map(|_| rng.random_range(0..16_u64))
                .collect::<Vec<_>>();
            assert_sorts_like_std(&few_distinct);
        }
        assert_sorts_like_std(&vec![42_u64; t + 2]);
    }

    #[test]
    fn sort_then_search() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let mut data = (0..5000).map(|_| rng.random_range(0..10_000_u32)).collect::<Vec<_>>();
        shuffle_with(&mut data, &mut rng);
        par_sort(&mut data);

        for probe in 0..10_000_u32 {
            match binary_search(&data, &probe) {
                Search::Found(i) => assert_eq!(data[i], probe),
                Search::NotFound(j) => {
                    assert!(j == 0 || data[j - 1] < probe);
                    assert!(j == data.len() || data[j] > probe);
                }
                Search::Empty => unreachable!(),
            }
        }
    }

    #[test]
    fn swap_and_shuffle_keep_multiset() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        let mut data = (0..300_u32).collect::<Vec<_>>();
        for _ in 0..100 {
            let a = rng.random_range(0..data.len());
            let b = rng.random_range(0..data.len());
            swap(&mut data, a, b).unwrap();
        }
        shuffle_range(&mut data, &mut rng, 50..=249).unwrap();
        sort(&mut data);
        assert_eq!(data, (0..300).collect::<Vec<_>>());
    }
}
