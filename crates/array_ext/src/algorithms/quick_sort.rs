use std::cmp::Ordering;
use std::convert::Infallible;
use std::ops::RangeInclusive;

use crate::{ArrayError, BoxError};

use super::common;
use super::partition::partition;

pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, T::cmp);
}

pub fn sort_by<T, F>(data: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    common::into_ok(quick_sort(data, &mut |a: &T, b: &T| {
        Ok::<_, Infallible>(cmp(a, b))
    }));
}

pub fn try_sort_by<T, E, F>(data: &mut [T], mut cmp: F) -> Result<(), ArrayError>
where
    E: Into<BoxError>,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    quick_sort(data, &mut cmp).map_err(ArrayError::comparator)
}

/// Sorts `data[left..=right]` in place. `left > right` is an empty range.
pub fn sort_range_by<T, F>(
    data: &mut [T],
    range: RangeInclusive<usize>,
    mut cmp: F,
) -> Result<(), ArrayError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    try_sort_range_by(data, range, |a: &T, b: &T| Ok::<_, Infallible>(cmp(a, b)))
}

pub fn try_sort_range_by<T, E, F>(
    data: &mut [T],
    range: RangeInclusive<usize>,
    mut cmp: F,
) -> Result<(), ArrayError>
where
    E: Into<BoxError>,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    match common::inclusive_bounds(&range, data.len())? {
        Some((left, right)) => {
            quick_sort(&mut data[left..=right], &mut cmp).map_err(ArrayError::comparator)
        }
        None => Ok(()),
    }
}

/// Unstable quicksort. Recurses into the smaller side and loops on the larger one, which
/// keeps the stack at O(log n) even when the midpoint pivot degrades to O(n^2) time.
pub(crate) fn quick_sort<T, E, F>(mut v: &mut [T], cmp: &mut F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    while v.len() > 1 {
        let mid = partition(v, cmp)?;
        let (left, rest) = v.split_at_mut(mid);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left, cmp)?;
            v = right;
        } else {
            quick_sort(right, cmp)?;
            v = left;
        }
    }
    Ok(())
}
