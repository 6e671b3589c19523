use std::cmp::Ordering;
use std::convert::Infallible;
use std::ops::RangeInclusive;
use std::sync::Arc;

use rayon::ThreadPool;

use crate::{ArrayError, BoxError, TUNED_PARAMS};

use super::common;
use super::partition::partition;
use super::quick_sort::quick_sort;

#[derive(Clone, Debug)]
pub struct ParallelOptions {
    /// Sub-ranges spanning fewer than this many steps (`right - left`) are sorted
    /// sequentially.
    pub sequential_threshold: usize,
    /// Pool to run in. `None` uses the rayon global pool.
    pub pool: Option<Arc<ThreadPool>>,
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            sequential_threshold: TUNED_PARAMS.sequential_threshold,
            pool: None,
        }
    }
}

impl ParallelOptions {
    pub fn with_threshold(mut self, sequential_threshold: usize) -> Self {
        self.sequential_threshold = sequential_threshold.max(1);
        self
    }

    pub fn with_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }
}

pub fn par_sort<T: Ord + Send>(data: &mut [T]) {
    par_sort_by(data, T::cmp);
}

pub fn par_sort_by<T, F>(data: &mut [T], cmp: F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let options = ParallelOptions::default();
    common::into_ok(run(data, &options, &|a: &T, b: &T| {
        Ok::<_, Infallible>(cmp(a, b))
    }));
}

pub fn try_par_sort_by<T, E, F>(data: &mut [T], cmp: F) -> Result<(), ArrayError>
where
    T: Send,
    E: Into<BoxError> + Send,
    F: Fn(&T, &T) -> Result<Ordering, E> + Sync,
{
    run(data, &ParallelOptions::default(), &cmp).map_err(ArrayError::comparator)
}

/// Sorts `data[left..=right]` with fork-join quicksort. Blocks until every branch has
/// finished; an error from either branch fails the whole call.
pub fn try_par_sort_range_by<T, E, F>(
    data: &mut [T],
    range: RangeInclusive<usize>,
    options: &ParallelOptions,
    cmp: F,
) -> Result<(), ArrayError>
where
    T: Send,
    E: Into<BoxError> + Send,
    F: Fn(&T, &T) -> Result<Ordering, E> + Sync,
{
    match common::inclusive_bounds(&range, data.len())? {
        Some((left, right)) => {
            run(&mut data[left..=right], options, &cmp).map_err(ArrayError::comparator)
        }
        None => Ok(()),
    }
}

fn run<T, E, F>(v: &mut [T], options: &ParallelOptions, cmp: &F) -> Result<(), E>
where
    T: Send,
    E: Send,
    F: Fn(&T, &T) -> Result<Ordering, E> + Sync,
{
    let threshold = options.sequential_threshold.max(1);
    log::debug!(
        "parallel sort: len={} threshold={} pool={}",
        v.len(),
        threshold,
        if options.pool.is_some() { "custom" } else { "global" },
    );
    match &options.pool {
        Some(pool) => pool.install(|| par_quick_sort(v, threshold, cmp)),
        None => par_quick_sort(v, threshold, cmp),
    }
}

/// Sorts the smaller side of each partition sequentially when it is under the threshold
/// and keeps looping on the larger side, so `rayon::join` frames only nest when both
/// halves are big enough to be worth forking.
fn par_quick_sort<T, E, F>(mut v: &mut [T], threshold: usize, cmp: &F) -> Result<(), E>
where
    T: Send,
    E: Send,
    F: Fn(&T, &T) -> Result<Ordering, E> + Sync,
{
    loop {
        if v.len() < 2 {
            return Ok(());
        }
        if v.len() - 1 < threshold {
            return quick_sort(v, &mut |a: &T, b: &T| cmp(a, b));
        }

        let mid = partition(v, &mut |a: &T, b: &T| cmp(a, b))?;
        let (left, rest) = v.split_at_mut(mid);
        let right = &mut rest[1..];

        let smaller = left.len().min(right.len());
        if smaller.saturating_sub(1) < threshold {
            if left.len() < right.len() {
                quick_sort(left, &mut |a: &T, b: &T| cmp(a, b))?;
                v = right;
            } else {
                quick_sort(right, &mut |a: &T, b: &T| cmp(a, b))?;
                v = left;
            }
            continue;
        }

        log::trace!("fork: left={} right={}", left.len(), right.len());
        let (left_result, right_result) = rayon::join(
            || par_quick_sort(left, threshold, cmp),
            || par_quick_sort(right, threshold, cmp),
        );
        return left_result.and(right_result);
    }
}
