use std::ops::RangeInclusive;

use rand::Rng;

use crate::ArrayError;

/// Shuffles the whole slice with a freshly seeded thread-local rng.
pub fn shuffle<T>(data: &mut [T]) {
    shuffle_with(data, &mut rand::rng());
}

pub fn shuffle_with<T, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    if let Some(max) = data.len().checked_sub(1) {
        fisher_yates(data, rng, 0, max);
    }
}

/// Fisher–Yates over the inclusive range `min..=max`.
///
/// `min > max` is an empty range. Elements outside the range are never moved.
pub fn shuffle_range<T, R: Rng + ?Sized>(
    data: &mut [T],
    rng: &mut R,
    range: RangeInclusive<usize>,
) -> Result<(), ArrayError> {
    let (min, max) = (*range.start(), *range.end());
    if min > max {
        return Ok(());
    }
    if max >= data.len() {
        return Err(ArrayError::IndexOutOfRange {
            index: max,
            len: data.len(),
        });
    }
    fisher_yates(data, rng, min, max);
    Ok(())
}

fn fisher_yates<T, R: Rng + ?Sized>(data: &mut [T], rng: &mut R, min: usize, max: usize) {
    debug_assert!(min <= max && max < data.len());
    for a in min..max {
        let b = rng.random_range(a..=max);
        data.swap(a, b);
    }
}
