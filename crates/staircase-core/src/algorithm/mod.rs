// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Search and order checks over sorted slices.

use std::cmp::Ordering;

/// Checks whether `values` is sorted in non-decreasing order.
///
/// Every element must be comparable with itself and its neighbours: a slice
/// containing an incomparable value (such as `f64::NAN`) is never considered
/// sorted. Returns the index of the first offending element on failure.
///
/// # Examples
///
/// ```rust
/// # use staircase_core::algorithm::first_unsorted_index;
/// assert_eq!(first_unsorted_index(&[1, 1, 2, 5]), None);
/// assert_eq!(first_unsorted_index(&[1, 3, 2]), Some(2));
/// assert_eq!(first_unsorted_index(&[f64::NAN]), Some(0));
/// ```
#[inline]
pub fn first_unsorted_index<T>(values: &[T]) -> Option<usize>
where
    T: PartialOrd,
{
    if let Some(first) = values.first()
        && first.partial_cmp(first).is_none()
    {
        return Some(0);
    }
    values
        .windows(2)
        .position(|w| !matches!(w[0].partial_cmp(&w[1]), Some(Ordering::Less | Ordering::Equal)))
        .map(|i| i + 1)
}

/// Checks whether `values` is sorted in non-decreasing order.
///
/// See [`first_unsorted_index`] for the treatment of incomparable values.
#[inline]
pub fn is_non_decreasing<T>(values: &[T]) -> bool
where
    T: PartialOrd,
{
    first_unsorted_index(values).is_none()
}

/// Checks whether `values` is sorted in strictly increasing order.
#[inline]
pub fn is_strictly_increasing<T>(values: &[T]) -> bool
where
    T: PartialOrd,
{
    values.windows(2).all(|w| w[0] < w[1])
}

/// Binary search for the number of elements that are less than or equal to `key`.
///
/// Equivalently, the index of the first element strictly greater than `key`.
/// An incomparable `key` (NaN) compares false against everything and yields `0`.
///
/// # Panics
///
/// In debug builds, this function will panic if `values` is not sorted
/// in non-decreasing order.
///
/// # Invariants
///
/// - `values` must be sorted in non-decreasing order.
///
/// # Examples
///
/// ```rust
/// # use staircase_core::algorithm::upper_bound;
/// let v = [1, 2, 2, 4];
/// assert_eq!(upper_bound(&v, 0), 0);
/// assert_eq!(upper_bound(&v, 2), 3);
/// assert_eq!(upper_bound(&v, 3), 3);
/// assert_eq!(upper_bound(&v, 9), 4);
/// ```
#[inline(always)]
pub fn upper_bound<T>(values: &[T], key: T) -> usize
where
    T: PartialOrd + Copy,
{
    debug_assert!(
        is_non_decreasing(values),
        "called `upper_bound` with values that are not sorted"
    );

    let mut lo: usize = 0;
    let mut hi: usize = values.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        debug_assert!(
            mid < values.len(),
            "`upper_bound` computed mid index out of bounds"
        );
        // SAFETY: mid is always in bounds because lo < hi <= values.len(),
        // therefore mid < values.len()
        if unsafe { *values.get_unchecked(mid) } <= key {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_unsorted_index_empty_and_single() {
        let v: Vec<i64> = vec![];
        assert_eq!(first_unsorted_index(&v), None);
        assert_eq!(first_unsorted_index(&[3]), None);
        assert_eq!(first_unsorted_index(&[0.5]), None);
    }

    #[test]
    fn test_first_unsorted_index_duplicates_allowed() {
        assert_eq!(first_unsorted_index(&[1, 1, 1, 4]), None);
        assert!(is_non_decreasing(&[1.0, 1.0, 2.0]));
        assert!(!is_strictly_increasing(&[1.0, 1.0, 2.0]));
    }

    #[test]
    fn test_first_unsorted_index_reports_position() {
        assert_eq!(first_unsorted_index(&[0, 5, 4, 3]), Some(2));
        assert_eq!(first_unsorted_index(&[2, 1]), Some(1));
    }

    #[test]
    fn test_first_unsorted_index_nan() {
        assert_eq!(first_unsorted_index(&[1.0, f64::NAN, 3.0]), Some(1));
        assert_eq!(first_unsorted_index(&[f64::NAN, 1.0]), Some(0));
        assert_eq!(first_unsorted_index(&[1.0, f64::NAN]), Some(1));
        assert!(!is_non_decreasing(&[f64::NAN]));
    }

    #[test]
    fn test_strictly_increasing() {
        assert!(is_strictly_increasing::<i32>(&[]));
        assert!(is_strictly_increasing(&[-1, 0, 7]));
        assert!(!is_strictly_increasing(&[0, 0]));
        assert!(!is_strictly_increasing(&[1.0, f64::NAN]));
    }

    #[test]
    fn test_upper_bound_basic() {
        let v = vec![0.0, 5.0, 10.0];
        assert_eq!(upper_bound(&v, -1.0), 0);
        assert_eq!(upper_bound(&v, 0.0), 1);
        assert_eq!(upper_bound(&v, 4.999), 1);
        assert_eq!(upper_bound(&v, 5.0), 2);
        assert_eq!(upper_bound(&v, 10.0), 3);
        assert_eq!(upper_bound(&v, f64::INFINITY), 3);
    }

    #[test]
    fn test_upper_bound_empty() {
        let v: Vec<i32> = vec![];
        assert_eq!(upper_bound(&v, 100), 0);
    }

    #[test]
    fn test_upper_bound_nan_key() {
        let v = vec![1.0, 2.0];
        assert_eq!(upper_bound(&v, f64::NAN), 0);
    }

    #[test]
    fn test_upper_bound_matches_linear_scan() {
        let v: Vec<i32> = (0..50).map(|i| (i / 3) * 2).collect();
        for key in -2..40 {
            let expected = v.iter().filter(|&&x| x <= key).count();
            assert_eq!(upper_bound(&v, key), expected, "key {key}");
        }
    }
}
