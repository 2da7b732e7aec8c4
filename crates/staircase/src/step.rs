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

//! # Canonical Step Functions
//!
//! `StepFunction<X, Y>` is an immutable, right-continuous, piecewise-constant
//! function over an ordered domain `X` with values in `Y`. It is stored as a
//! strictly increasing list of breakpoints, the value before the first
//! breakpoint, and one value per breakpoint:
//!
//! ```text
//!   initial_value        values[0]          values[1]              values[n-1]
//! ----------------) [------------------) [----------- ... ) [-------------->
//!                 b[0]                 b[1]                 b[n-1]
//! ```
//!
//! ## Canonical form
//!
//! Every constructor validates its input and then compacts it:
//!
//! 1. Runs of equal breakpoints collapse to one, keeping the value of the
//!    *last* occurrence.
//! 2. A breakpoint whose value equals the value of the segment before it
//!    (the initial value counts for the first breakpoint) is dropped.
//!
//! The result is the unique minimal representation of the function, so two
//! step functions are equal exactly when they agree everywhere (up to the
//! value type's own `==`). Compaction is idempotent.
//!
//! ## Equality of floating point values
//!
//! Equality, compaction and hashing are all defined by `==`. In particular
//! `0.0 == -0.0`, so adjacent segments holding the two zeros merge, and NaN
//! values never merge with anything. `Hash` is only available when both `X`
//! and `Y` implement it, which excludes the primitive floats.

use crate::error::{Result, StepFunctionError};
use staircase_core::{algorithm, num::domain::DomainPoint};
use std::iter::FusedIterator;

/// An immutable right-continuous step function in canonical form.
///
/// # Invariants
///
/// - `values.len() == breakpoints.len()`.
/// - `breakpoints` is strictly increasing and does not contain `+inf`.
/// - No two adjacent segments (including the initial one) hold equal values.
///
/// # Examples
///
/// ```rust
/// # use staircase::step::StepFunction;
/// let f = StepFunction::try_from_values(vec![1, 2, 3, 4], vec![0, 1, 2, 3, 4]).unwrap();
/// assert_eq!(*f.evaluate(-7), 0);
/// assert_eq!(*f.evaluate(2), 2);
/// assert_eq!(*f.evaluate(5), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepFunction<X, Y> {
    breakpoints: Vec<X>,
    initial_value: Y,
    values: Vec<Y>,
}

impl<X, Y> StepFunction<X, Y>
where
    X: DomainPoint,
    Y: PartialEq,
{
    /// Creates a step function with no breakpoints, equal to `value` everywhere.
    #[inline]
    pub fn constant(value: Y) -> Self {
        Self {
            breakpoints: Vec::new(),
            initial_value: value,
            values: Vec::new(),
        }
    }

    /// Creates a step function from its breakpoints, the value before the
    /// first breakpoint, and one value per breakpoint.
    ///
    /// Duplicate breakpoints are allowed; the value of the last occurrence
    /// wins. The input is compacted into canonical form.
    ///
    /// # Errors
    ///
    /// - [`StepFunctionError::InvalidShape`] if `values.len() != breakpoints.len()`.
    /// - [`StepFunctionError::Unsorted`] if the breakpoints are not non-decreasing
    ///   or contain an incomparable value.
    /// - [`StepFunctionError::InfiniteBreakpoint`] if a breakpoint is `+inf`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_new(vec![1, 1, 1, 4], 0, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(f.breakpoints(), &[1, 4]);
    /// assert_eq!(f.values(), &[3, 4]);
    /// ```
    pub fn try_new(breakpoints: Vec<X>, initial_value: Y, values: Vec<Y>) -> Result<Self> {
        if values.len() != breakpoints.len() {
            return Err(StepFunctionError::InvalidShape {
                breakpoints: breakpoints.len(),
                expected: breakpoints.len(),
                values: values.len(),
            });
        }
        if let Some(index) = algorithm::first_unsorted_index(&breakpoints) {
            return Err(StepFunctionError::Unsorted { index });
        }
        if breakpoints
            .last()
            .is_some_and(|last| last.is_positive_infinity())
        {
            return Err(StepFunctionError::InfiniteBreakpoint);
        }
        Ok(Self::from_sorted(breakpoints, initial_value, values))
    }

    /// Creates a step function from its breakpoints and `breakpoints.len() + 1`
    /// values, the first of which is the value before the first breakpoint.
    ///
    /// # Errors
    ///
    /// [`StepFunctionError::InvalidShape`] if the value count is not one more
    /// than the breakpoint count, otherwise the errors of [`StepFunction::try_new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_from_values(vec![1.0, 2.0], vec![0, 1, 2]).unwrap();
    /// assert_eq!(*f.initial_value(), 0);
    /// assert_eq!(f.values(), &[1, 2]);
    /// ```
    pub fn try_from_values(breakpoints: Vec<X>, values: Vec<Y>) -> Result<Self> {
        let shape_error = StepFunctionError::InvalidShape {
            breakpoints: breakpoints.len(),
            expected: breakpoints.len() + 1,
            values: values.len(),
        };
        if values.len() != breakpoints.len() + 1 {
            return Err(shape_error);
        }
        let mut values = values.into_iter();
        let Some(initial_value) = values.next() else {
            return Err(shape_error);
        };
        Self::try_new(breakpoints, initial_value, values.collect())
    }

    /// Builds a canonical step function from breakpoints that are already known
    /// to be non-decreasing and free of `+inf`.
    ///
    /// Shape and order are only checked in debug builds.
    pub(crate) fn from_sorted(breakpoints: Vec<X>, initial_value: Y, values: Vec<Y>) -> Self {
        debug_assert_eq!(
            breakpoints.len(),
            values.len(),
            "called `from_sorted` with mismatched breakpoints and values"
        );
        debug_assert!(
            algorithm::is_non_decreasing(&breakpoints),
            "called `from_sorted` with unsorted breakpoints"
        );
        debug_assert!(
            !breakpoints
                .last()
                .is_some_and(|last| last.is_positive_infinity()),
            "called `from_sorted` with an infinite breakpoint"
        );

        if is_canonical(&breakpoints, &initial_value, &values) {
            return Self {
                breakpoints,
                initial_value,
                values,
            };
        }

        let (breakpoints, values) = compact(breakpoints, &initial_value, values);
        Self {
            breakpoints,
            initial_value,
            values,
        }
    }

    /// Returns the value of the function at `x`.
    ///
    /// Runs in `O(log n)` for `n` breakpoints. An incomparable `x` (NaN) lies
    /// before every breakpoint and evaluates to the initial value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_from_values(vec![1.0, 2.0], vec![10, 20, 30]).unwrap();
    /// assert_eq!(*f.evaluate(0.5), 10);
    /// assert_eq!(*f.evaluate(1.0), 20);
    /// assert_eq!(*f.evaluate(1.5), 20);
    /// assert_eq!(*f.evaluate(2.0), 30);
    /// ```
    #[inline]
    pub fn evaluate(&self, x: X) -> &Y {
        match algorithm::upper_bound(&self.breakpoints, x) {
            0 => &self.initial_value,
            i => &self.values[i - 1],
        }
    }

    /// Applies `f` to every segment value and returns the canonical result.
    ///
    /// Segments that become equal merge, e.g. mapping with `|_| 0` yields a
    /// constant function.
    pub fn map<Z, F>(&self, mut f: F) -> StepFunction<X, Z>
    where
        Z: PartialEq,
        F: FnMut(&Y) -> Z,
    {
        let initial_value = f(&self.initial_value);
        let values = self.values.iter().map(f).collect();
        StepFunction::from_sorted(self.breakpoints.clone(), initial_value, values)
    }
}

impl<X, Y> StepFunction<X, Y>
where
    X: Copy,
{
    /// Converts breakpoints with `fx` and values with `fy`, re-canonicalizing.
    ///
    /// `fx` must be non-decreasing and must not produce `+inf` or incomparable
    /// values; both are only checked in debug builds. Widening numeric
    /// conversions satisfy this. Breakpoints that `fx` maps to the same point
    /// collapse, keeping the later value.
    pub(crate) fn cast_with<X2, Y2, FX, FY>(&self, mut fx: FX, mut fy: FY) -> StepFunction<X2, Y2>
    where
        X2: DomainPoint,
        Y2: PartialEq,
        FX: FnMut(X) -> X2,
        FY: FnMut(&Y) -> Y2,
    {
        let breakpoints = self.breakpoints.iter().map(|&x| fx(x)).collect();
        let initial_value = fy(&self.initial_value);
        let values = self.values.iter().map(fy).collect();
        StepFunction::from_sorted(breakpoints, initial_value, values)
    }
}

impl<X, Y> StepFunction<X, Y> {
    /// Returns the strictly increasing breakpoints.
    #[inline]
    pub fn breakpoints(&self) -> &[X] {
        &self.breakpoints
    }

    /// Returns the value before the first breakpoint.
    #[inline]
    pub fn initial_value(&self) -> &Y {
        &self.initial_value
    }

    /// Returns the values starting at each breakpoint.
    #[inline]
    pub fn values(&self) -> &[Y] {
        &self.values
    }

    /// Returns the number of breakpoints.
    #[inline]
    pub fn num_breakpoints(&self) -> usize {
        self.breakpoints.len()
    }

    /// Returns `true` if the function has no breakpoints.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Decomposes the function into `(breakpoints, initial_value, values)`.
    #[inline]
    pub fn into_parts(self) -> (Vec<X>, Y, Vec<Y>) {
        (self.breakpoints, self.initial_value, self.values)
    }

    /// Returns an iterator over the `num_breakpoints() + 1` segments of the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_from_values(vec![1], vec!['a', 'b']).unwrap();
    /// let segments: Vec<_> = f.segments().map(|s| (s.start, s.end, *s.value)).collect();
    /// assert_eq!(segments, vec![(None, Some(1), 'a'), (Some(1), None, 'b')]);
    /// ```
    #[inline]
    pub fn segments(&self) -> Segments<'_, X, Y> {
        Segments {
            function: self,
            index: 0,
        }
    }

    /// Returns the value of segment `index`, where `0` is the initial segment.
    #[inline]
    pub(crate) fn segment_value(&self, index: usize) -> &Y {
        match index {
            0 => &self.initial_value,
            i => &self.values[i - 1],
        }
    }
}

/// Returns `true` if the data is already in canonical form.
#[inline]
fn is_canonical<X, Y>(breakpoints: &[X], initial_value: &Y, values: &[Y]) -> bool
where
    X: PartialOrd,
    Y: PartialEq,
{
    algorithm::is_strictly_increasing(breakpoints)
        && values.first().is_none_or(|first| first != initial_value)
        && values.windows(2).all(|w| w[0] != w[1])
}

/// Compacts sorted breakpoint/value pairs into canonical form.
///
/// Within a run of equal breakpoints only the last pair survives; a surviving
/// pair is then dropped if its value equals the previously kept value (or the
/// initial value, if nothing has been kept yet).
fn compact<X, Y>(breakpoints: Vec<X>, initial_value: &Y, values: Vec<Y>) -> (Vec<X>, Vec<Y>)
where
    X: PartialEq,
    Y: PartialEq,
{
    let input_len = breakpoints.len();
    let mut kept_breakpoints = Vec::with_capacity(input_len);
    let mut kept_values: Vec<Y> = Vec::with_capacity(input_len);

    let mut pairs = breakpoints.into_iter().zip(values).peekable();
    while let Some((x, y)) = pairs.next() {
        if pairs.peek().is_some_and(|(next_x, _)| *next_x == x) {
            continue;
        }
        if y == *kept_values.last().unwrap_or(initial_value) {
            continue;
        }
        kept_breakpoints.push(x);
        kept_values.push(y);
    }

    tracing::trace!(
        input = input_len,
        kept = kept_breakpoints.len(),
        "compacted step function breakpoints"
    );

    (kept_breakpoints, kept_values)
}

/// One maximal interval on which a step function is constant.
///
/// `start` is inclusive and `end` exclusive; `None` stands for the unbounded
/// side (`-inf` for `start`, `+inf` for `end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a, X, Y> {
    pub start: Option<X>,
    pub end: Option<X>,
    pub value: &'a Y,
}

/// An iterator over the segments of a [`StepFunction`], from left to right.
#[derive(Debug, Clone)]
pub struct Segments<'a, X, Y> {
    function: &'a StepFunction<X, Y>,
    index: usize,
}

impl<'a, X, Y> Iterator for Segments<'a, X, Y>
where
    X: Copy,
{
    type Item = Segment<'a, X, Y>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let function = self.function;
        if self.index > function.breakpoints.len() {
            return None;
        }
        let i = self.index;
        self.index += 1;
        Some(Segment {
            start: i.checked_sub(1).map(|prev| function.breakpoints[prev]),
            end: function.breakpoints.get(i).copied(),
            value: function.segment_value(i),
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.function.breakpoints.len() + 1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<X, Y> ExactSizeIterator for Segments<'_, X, Y> where X: Copy {}

impl<X, Y> FusedIterator for Segments<'_, X, Y> where X: Copy {}

impl<X, Y> Default for StepFunction<X, Y>
where
    X: DomainPoint,
    Y: PartialEq + Default,
{
    #[inline]
    fn default() -> Self {
        Self::constant(Y::default())
    }
}

impl<X, Y> TryFrom<(Vec<X>, Vec<Y>)> for StepFunction<X, Y>
where
    X: DomainPoint,
    Y: PartialEq,
{
    type Error = StepFunctionError;

    #[inline]
    fn try_from((breakpoints, values): (Vec<X>, Vec<Y>)) -> Result<Self> {
        Self::try_from_values(breakpoints, values)
    }
}

impl<X, Y> TryFrom<(Vec<X>, Y, Vec<Y>)> for StepFunction<X, Y>
where
    X: DomainPoint,
    Y: PartialEq,
{
    type Error = StepFunctionError;

    #[inline]
    fn try_from((breakpoints, initial_value, values): (Vec<X>, Y, Vec<Y>)) -> Result<Self> {
        Self::try_new(breakpoints, initial_value, values)
    }
}

impl<X, Y> std::fmt::Display for StepFunction<X, Y>
where
    X: Copy + std::fmt::Display,
    Y: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match segment.start {
                Some(start) => write!(f, "[{start}, ")?,
                None => write!(f, "(-inf, ")?,
            }
            match segment.end {
                Some(end) => write!(f, "{end})")?,
                None => write!(f, "+inf)")?,
            }
            write!(f, " -> {}", segment.value)?;
        }
        Ok(())
    }
}
