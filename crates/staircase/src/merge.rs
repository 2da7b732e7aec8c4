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

//! # Domain Merge
//!
//! `DomainMerge` walks any number of sorted breakpoint sequences in lock step
//! and yields their sorted, duplicate-free union one element at a time,
//! without materializing the union upfront.
//!
//! Each step looks at the next unconsumed element of every source, yields the
//! smallest one and advances *every* source whose next element equals it.
//! Equal breakpoints shared by several sources are therefore emitted once.
//! A step costs `O(k)` for `k` sources, the whole traversal `O(k * m)` for
//! `m` emitted elements; in practice `k` is two or three.
//!
//! ```rust
//! use staircase::merge::DomainMerge;
//!
//! let a = [1, 3, 5];
//! let b = [2, 3, 6];
//! let merged: Vec<_> = DomainMerge::new([&a[..], &b[..]]).collect();
//! assert_eq!(merged, vec![1, 2, 3, 5, 6]);
//! ```

use smallvec::SmallVec;
use staircase_core::num::promote::{Promote, Promoted};
use std::iter::FusedIterator;

/// Inline capacity for sources and cursors; binary and ternary operations
/// never spill to the heap.
const INLINE_SOURCES: usize = 4;

/// A lazy k-way union of sorted sequences.
///
/// # Invariants
///
/// Every source must be sorted in non-decreasing order. This is not
/// re-validated; unsorted input yields an unspecified (but finite) sequence.
#[derive(Debug, Clone)]
pub struct DomainMerge<'a, X> {
    sources: SmallVec<[&'a [X]; INLINE_SOURCES]>,
    /// Index of the next unconsumed element, per source.
    cursors: SmallVec<[usize; INLINE_SOURCES]>,
}

impl<'a, X> DomainMerge<'a, X>
where
    X: PartialOrd + Copy,
{
    /// Creates a merge over the given sorted sources.
    #[inline]
    pub fn new<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = &'a [X]>,
    {
        let sources: SmallVec<[&'a [X]; INLINE_SOURCES]> = sources.into_iter().collect();
        let cursors = smallvec::smallvec![0; sources.len()];
        Self { sources, cursors }
    }

    /// Returns the number of sources.
    #[inline]
    pub fn num_sources(&self) -> usize {
        self.sources.len()
    }

    /// Returns the total number of elements across all sources.
    ///
    /// This is the length of the union when no two sources share an element,
    /// and an upper bound on it otherwise.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.sources.iter().map(|source| source.len()).sum()
    }

    /// Rewinds every cursor so the union can be traversed again from the start.
    #[inline]
    pub fn reset(&mut self) {
        self.cursors.iter_mut().for_each(|cursor| *cursor = 0);
    }

    /// Returns the smallest unconsumed element and the source holding it.
    #[inline]
    fn peek_min(&self) -> Option<(usize, X)> {
        let mut min: Option<(usize, X)> = None;
        for (index, (source, &cursor)) in self.sources.iter().zip(self.cursors.iter()).enumerate() {
            if let Some(&candidate) = source.get(cursor)
                && min.is_none_or(|(_, current)| candidate < current)
            {
                min = Some((index, candidate));
            }
        }
        min
    }
}

impl<X> Iterator for DomainMerge<'_, X>
where
    X: PartialOrd + Copy,
{
    type Item = X;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (owner, min) = self.peek_min()?;
        // Incomparable elements never equal `min`; stepping the owner keeps the walk finite.
        self.cursors[owner] += 1;
        for (source, cursor) in self.sources.iter().zip(self.cursors.iter_mut()) {
            while source.get(*cursor).is_some_and(|&x| x == min) {
                *cursor += 1;
            }
        }
        Some(min)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .sources
            .iter()
            .zip(self.cursors.iter())
            .map(|(source, &cursor)| source.len().saturating_sub(cursor));

        let (lower, upper) = remaining.fold((0usize, Some(0usize)), |(lower, upper), r| {
            (lower.max(r.min(1)), upper.and_then(|u| u.checked_add(r)))
        });
        (lower, upper)
    }
}

impl<X> FusedIterator for DomainMerge<'_, X> where X: PartialOrd + Copy {}

/// Merges two sorted sequences of possibly different numeric types.
///
/// Elements are promoted into their common type `Promoted<A, B>` as they are
/// compared, so mixing integer and floating point breakpoints yields floating
/// point output. The only allocation is the returned vector.
///
/// # Examples
///
/// ```rust
/// # use staircase::merge::merge_promoted;
/// let merged: Vec<f64> = merge_promoted(&[1_i32, 3], &[1.5_f64, 3.0]);
/// assert_eq!(merged, vec![1.0, 1.5, 3.0]);
/// ```
pub fn merge_promoted<A, B>(left: &[A], right: &[B]) -> Vec<Promoted<A, B>>
where
    A: Promote<B> + Copy,
    B: Copy,
    Promoted<A, B>: PartialOrd + Copy,
{
    let mut left = left.iter().map(|&a| a.promote_lhs()).peekable();
    let mut right = right.iter().map(|&b| A::promote_rhs(b)).peekable();
    let mut merged: Vec<Promoted<A, B>> = Vec::with_capacity(left.len() + right.len());

    loop {
        let next = match (left.peek().copied(), right.peek().copied()) {
            (Some(a), Some(b)) if b < a => {
                right.next();
                b
            }
            (Some(a), Some(b)) => {
                left.next();
                if a == b {
                    right.next();
                }
                a
            }
            (Some(a), None) => {
                left.next();
                a
            }
            (None, Some(b)) => {
                right.next();
                b
            }
            (None, None) => break,
        };
        if merged.last() != Some(&next) {
            merged.push(next);
        }
    }
    merged
}
