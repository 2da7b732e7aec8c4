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

//! # Value Sweep
//!
//! `ValueSweep` evaluates one step function at every point of an ascending
//! query sequence. Instead of a binary search per query it keeps a segment
//! cursor that only ever moves forward, so `m` queries against `n`
//! breakpoints cost `O(n + m)` in total.
//!
//! The query sequence must be sorted in non-decreasing order. This is the
//! caller's contract and is not checked: the cursor never moves back, so a
//! query smaller than its predecessor is answered with the value of a later
//! segment.
//!
//! ```rust
//! use staircase::step::StepFunction;
//!
//! let f = StepFunction::try_from_values(vec![1, 3], vec![10, 20, 30]).unwrap();
//! let values: Vec<i32> = f.sweep([0, 1, 2, 3, 4]).copied().collect();
//! assert_eq!(values, vec![10, 20, 20, 30, 30]);
//! ```

use crate::step::StepFunction;
use std::iter::FusedIterator;

/// A monotonic evaluation of a [`StepFunction`] over ascending query points.
#[derive(Debug, Clone)]
pub struct ValueSweep<'a, X, Y, Q> {
    function: &'a StepFunction<X, Y>,
    queries: Q,
    /// `0` is the initial segment, `k > 0` the segment starting at `breakpoints[k - 1]`.
    segment: usize,
}

impl<'a, X, Y, Q> ValueSweep<'a, X, Y, Q>
where
    X: PartialOrd + Copy,
    Q: Iterator<Item = X>,
{
    /// Creates a sweep of `function` over `queries`.
    #[inline]
    pub fn new(function: &'a StepFunction<X, Y>, queries: Q) -> Self {
        Self {
            function,
            queries,
            segment: 0,
        }
    }

    /// Returns the index of the segment the last query fell into.
    ///
    /// `0` denotes the segment before the first breakpoint.
    #[inline]
    pub fn segment_index(&self) -> usize {
        self.segment
    }
}

impl<'a, X, Y, Q> Iterator for ValueSweep<'a, X, Y, Q>
where
    X: PartialOrd + Copy,
    Q: Iterator<Item = X>,
{
    type Item = &'a Y;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.queries.next()?;
        let breakpoints = self.function.breakpoints();
        while self.segment < breakpoints.len() && breakpoints[self.segment] <= x {
            self.segment += 1;
        }
        Some(self.function.segment_value(self.segment))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.queries.size_hint()
    }
}

impl<X, Y, Q> ExactSizeIterator for ValueSweep<'_, X, Y, Q>
where
    X: PartialOrd + Copy,
    Q: ExactSizeIterator<Item = X>,
{
}

impl<X, Y, Q> FusedIterator for ValueSweep<'_, X, Y, Q>
where
    X: PartialOrd + Copy,
    Q: FusedIterator<Item = X>,
{
}

impl<X, Y> StepFunction<X, Y>
where
    X: PartialOrd + Copy,
{
    /// Evaluates the function at every point of an ascending query sequence.
    ///
    /// See [`ValueSweep`] for the sortedness contract.
    #[inline]
    pub fn sweep<I>(&self, queries: I) -> ValueSweep<'_, X, Y, I::IntoIter>
    where
        I: IntoIterator<Item = X>,
    {
        ValueSweep::new(self, queries.into_iter())
    }
}
