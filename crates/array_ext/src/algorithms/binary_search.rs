use std::cmp::Ordering;
use std::convert::Infallible;
use std::ops::Range;

use crate::{ArrayError, BoxError};

use super::common;

/// Outcome of a point search over a sorted range.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Search {
    /// Index of some element comparing equal to the value.
    Found(usize),
    /// No match. Inserting the value here keeps the range sorted.
    NotFound(usize),
    /// The searched sequence had no elements at all.
    Empty,
}

impl Search {
    pub fn found(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound(_) | Self::Empty => None,
        }
    }

    pub fn insertion_point(self) -> usize {
        match self {
            Self::Found(index) | Self::NotFound(index) => index,
            Self::Empty => 0,
        }
    }

    /// Signed encoding: `i` when found, `!insertion_point` when not, `-1` for an empty
    /// sequence.
    pub fn to_raw(self) -> isize {
        match self {
            Self::Found(index) => index as isize,
            Self::NotFound(index) => !(index as isize),
            Self::Empty => -1,
        }
    }
}

impl From<Search> for isize {
    fn from(search: Search) -> Self {
        search.to_raw()
    }
}

pub fn binary_search<T: Ord>(data: &[T], value: &T) -> Search {
    binary_search_by(data, value, T::cmp)
}

pub fn binary_search_by<T, F>(data: &[T], value: &T, mut cmp: F) -> Search
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.is_empty() {
        return Search::Empty;
    }
    common::into_ok(search(data, value, 0, data.len(), &mut |a: &T, b: &T| {
        Ok::<_, Infallible>(cmp(a, b))
    }))
}

pub fn binary_search_range_by<T, F>(
    data: &[T],
    value: &T,
    range: Range<usize>,
    mut cmp: F,
) -> Result<Search, ArrayError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    try_binary_search_range_by(data, value, range, |a: &T, b: &T| {
        Ok::<_, Infallible>(cmp(a, b))
    })
}

pub fn try_binary_search_by<T, E, F>(data: &[T], value: &T, cmp: F) -> Result<Search, ArrayError>
where
    E: Into<BoxError>,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    try_binary_search_range_by(data, value, 0..data.len(), cmp)
}

/// Searches the half-open `range` of a sorted slice with a fallible comparator.
///
/// The comparator is called as `cmp(element, value)`. With duplicates any matching
/// index may be returned. An empty slice yields [`Search::Empty`] regardless of `range`.
pub fn try_binary_search_range_by<T, E, F>(
    data: &[T],
    value: &T,
    range: Range<usize>,
    mut cmp: F,
) -> Result<Search, ArrayError>
where
    E: Into<BoxError>,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if data.is_empty() {
        return Ok(Search::Empty);
    }
    let (min, max) = common::half_open_bounds(&range, data.len())?;
    search(data, value, min, max, &mut cmp).map_err(ArrayError::comparator)
}

fn search<T, E, F>(data: &[T], value: &T, min: usize, max: usize, cmp: &mut F) -> Result<Search, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    // `low..end` is the closed interval `[low, end - 1]`.
    let mut low = min;
    let mut end = max;
    while low < end {
        let mid = low + (end - 1 - low) / 2;
        match cmp(&data[mid], value)? {
            Ordering::Equal => return Ok(Search::Found(mid)),
            Ordering::Greater => end = mid,
            Ordering::Less => low = mid + 1,
        }
    }
    Ok(Search::NotFound(low))
}
