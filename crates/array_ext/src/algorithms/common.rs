use std::convert::Infallible;
use std::ops::{Range, RangeInclusive};

use crate::ArrayError;

/// Validates an inclusive `left..=right` range against `len`.
///
/// `left > right` is an empty range and yields `None`.
#[inline]
pub fn inclusive_bounds(
    range: &RangeInclusive<usize>,
    len: usize,
) -> Result<Option<(usize, usize)>, ArrayError> {
    let (left, right) = (*range.start(), *range.end());
    if left > right {
        return Ok(None);
    }
    if right >= len {
        return Err(ArrayError::InvalidRange {
            start: left,
            end: right + 1,
            len,
        });
    }
    Ok(Some((left, right)))
}

#[inline]
pub fn half_open_bounds(range: &Range<usize>, len: usize) -> Result<(usize, usize), ArrayError> {
    if range.start > range.end || range.end > len {
        return Err(ArrayError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok((range.start, range.end))
}

#[inline]
pub fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
