use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::{ArrayError, BoxError};

use super::common;

/// Partitions `data[low..=high]` around the element at `(low + high) / 2` and returns the
/// pivot's final absolute index.
///
/// Requires `low < high`.
pub fn try_partition_range_by<T, E, F>(
    data: &mut [T],
    range: RangeInclusive<usize>,
    mut cmp: F,
) -> Result<usize, ArrayError>
where
    E: Into<BoxError>,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let (low, high) = match common::inclusive_bounds(&range, data.len())? {
        Some((low, high)) if low < high => (low, high),
        _ => {
            return Err(ArrayError::InvalidRange {
                start: *range.start(),
                end: range.end().saturating_add(1),
                len: data.len(),
            });
        }
    };
    let mid = partition(&mut data[low..=high], &mut cmp).map_err(ArrayError::comparator)?;
    Ok(low + mid)
}

/// Midpoint pivot, parked at the front while the "less" region grows behind it.
///
/// On return every element before the pivot compares `Less` than it and no element after
/// it does.
pub(crate) fn partition<T, E, F>(v: &mut [T], cmp: &mut F) -> Result<usize, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    debug_assert!(v.len() >= 2);

    v.swap(0, (v.len() - 1) / 2);
    let mut store = 0;
    for i in 1..v.len() {
        if cmp(&v[i], &v[0])? == Ordering::Less {
            store += 1;
            v.swap(store, i);
        }
    }
    v.swap(0, store);
    Ok(store)
}
