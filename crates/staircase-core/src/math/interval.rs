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

/// A half-open interval `[start, end)`.
///
/// The bounds may be of any partially ordered, copyable type, so one interval
/// type serves integer and floating point domains. Incomparable bounds (NaN)
/// are rejected at construction.
///
/// # Invariants
/// `start_inclusive <= end_exclusive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedOpenInterval<T>
where
    T: PartialOrd + Copy,
{
    start_inclusive: T,
    end_exclusive: T,
}

impl<T> ClosedOpenInterval<T>
where
    T: PartialOrd + Copy,
{
    /// Creates a new `ClosedOpenInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start_inclusive > end_exclusive` or if the bounds are incomparable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(0.5, 10.0);
    /// assert_eq!(iv.start(), 0.5);
    /// assert_eq!(iv.end(), 10.0);
    /// ```
    #[inline]
    pub fn new(start_inclusive: T, end_exclusive: T) -> Self {
        match Self::try_new(start_inclusive, end_exclusive) {
            Some(interval) => interval,
            None => panic!("Invalid interval: start must not exceed end and both bounds must be comparable"),
        }
    }

    /// Creates a new `ClosedOpenInterval`, or `None` if `start_inclusive > end_exclusive`
    /// or the bounds are incomparable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase_core::math::interval::ClosedOpenInterval;
    ///
    /// assert!(ClosedOpenInterval::try_new(0, 10).is_some());
    /// assert!(ClosedOpenInterval::try_new(10, 0).is_none());
    /// assert!(ClosedOpenInterval::try_new(f64::NAN, 1.0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start_inclusive: T, end_exclusive: T) -> Option<Self> {
        (start_inclusive <= end_exclusive).then_some(Self {
            start_inclusive,
            end_exclusive,
        })
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start_inclusive
    }

    /// Returns the exclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end_exclusive
    }

    /// Returns `true` if no point satisfies `start <= x < end`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.start_inclusive < self.end_exclusive)
    }

    /// Returns `true` if `start <= value < end`.
    ///
    /// ```rust
    /// # use staircase_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(0.0, 1.0);
    /// assert!(iv.contains_point(0.0));
    /// assert!(!iv.contains_point(1.0));
    /// assert!(!iv.contains_point(f64::NAN));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start_inclusive <= value && value < self.end_exclusive
    }

    /// Returns `true` if `start < value < end`.
    #[inline]
    pub fn contains_point_strictly(&self, value: T) -> bool {
        self.start_inclusive < value && value < self.end_exclusive
    }
}

impl<T> std::fmt::Display for ClosedOpenInterval<T>
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start_inclusive, self.end_exclusive)
    }
}
