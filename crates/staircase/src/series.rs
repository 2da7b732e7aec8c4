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

//! # Line Series
//!
//! Plotting libraries draw polylines, not step functions. `line_series`
//! turns the part of a step function over `[start, end]` into a staircase
//! polyline: every interior breakpoint appears twice, once at the height of
//! the segment it closes and once at the height of the segment it opens, which
//! draws the vertical riser. Whether risers are drawn or replaced by gaps is
//! left to the renderer.

use crate::{
    error::{Result, StepFunctionError},
    step::StepFunction,
};
use staircase_core::{algorithm, math::interval::ClosedOpenInterval, num::domain::DomainPoint};

/// Matching x and y coordinates of a staircase polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries<X, Y> {
    pub xs: Vec<X>,
    pub ys: Vec<Y>,
}

impl<X, Y> LineSeries<X, Y> {
    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always `false`: a series has at least its two end points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns an iterator over `(x, y)` pairs.
    #[inline]
    pub fn points(&self) -> impl Iterator<Item = (&X, &Y)> + '_ {
        self.xs.iter().zip(self.ys.iter())
    }
}

impl<X, Y> From<LineSeries<X, Y>> for (Vec<X>, Vec<Y>) {
    #[inline]
    fn from(series: LineSeries<X, Y>) -> Self {
        (series.xs, series.ys)
    }
}

impl<X, Y> StepFunction<X, Y>
where
    X: DomainPoint,
    Y: PartialEq + Clone,
{
    /// Returns the staircase polyline of the function over `[start, end]`.
    ///
    /// The series starts at `(start, f(start))`, doubles every breakpoint
    /// strictly inside the interval, and ends at `end` with the height of the
    /// last segment that begins before `end`.
    ///
    /// # Errors
    ///
    /// [`StepFunctionError::InvalidInterval`] if `end <= start` or the bounds
    /// are incomparable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_from_values(vec![1.0, 2.0], vec![0, 1, 2]).unwrap();
    /// let (xs, ys): (Vec<f64>, Vec<i32>) = f.line_series(0.0, 3.0).unwrap().into();
    /// assert_eq!(xs, vec![0.0, 1.0, 1.0, 2.0, 2.0, 3.0]);
    /// assert_eq!(ys, vec![0, 0, 1, 1, 2, 2]);
    /// ```
    pub fn line_series(&self, start: X, end: X) -> Result<LineSeries<X, Y>> {
        let interval =
            ClosedOpenInterval::try_new(start, end).ok_or(StepFunctionError::InvalidInterval)?;
        self.line_series_over(interval)
    }

    /// Returns the staircase polyline of the function over `interval`, with
    /// the interval's exclusive end as the last x coordinate.
    ///
    /// # Errors
    ///
    /// [`StepFunctionError::InvalidInterval`] if the interval is empty.
    pub fn line_series_over(&self, interval: ClosedOpenInterval<X>) -> Result<LineSeries<X, Y>> {
        if interval.is_empty() {
            return Err(StepFunctionError::InvalidInterval);
        }
        let (start, end) = (interval.start(), interval.end());

        let first_interior = algorithm::upper_bound(self.breakpoints(), start);
        let interior = self.breakpoints()[first_interior..]
            .iter()
            .zip(&self.values()[first_interior..])
            .take_while(|&(&x, _)| interval.contains_point_strictly(x));

        let capacity = 2 * (self.num_breakpoints() - first_interior) + 2;
        let mut xs = Vec::with_capacity(capacity);
        let mut ys = Vec::with_capacity(capacity);

        let mut height = self.evaluate(start);
        xs.push(start);
        ys.push(height.clone());
        for (&x, value) in interior {
            xs.push(x);
            ys.push(height.clone());
            height = value;
            xs.push(x);
            ys.push(height.clone());
        }
        xs.push(end);
        ys.push(height.clone());

        Ok(LineSeries { xs, ys })
    }
}
