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

//! Errors raised when a step function cannot be constructed or an interval
//! argument is rejected.
//!
//! All errors are reported synchronously at the call that violated the
//! precondition. Numeric failures of the value type itself (integer division by
//! zero, overflow in debug builds) are not wrapped: they surface from the value
//! type's own operator.

use thiserror::Error;

/// The error type for step-function construction and interval-taking operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StepFunctionError {
    /// The number of values does not match the number of breakpoints.
    ///
    /// `expected` is the number of values the breakpoint count calls for.
    #[error("expected {expected} values for {breakpoints} breakpoints, got {values}")]
    InvalidShape {
        breakpoints: usize,
        expected: usize,
        values: usize,
    },
    /// The breakpoints are not sorted in non-decreasing order.
    ///
    /// `index` is the position of the first breakpoint that is smaller than its
    /// predecessor or incomparable (NaN).
    #[error("breakpoints are not sorted in non-decreasing order (first violation at index {index})")]
    Unsorted { index: usize },
    /// A breakpoint equals positive infinity.
    #[error("breakpoints must not contain positive infinity")]
    InfiniteBreakpoint,
    /// An interval argument is empty or inverted (`start >= end`).
    #[error("interval must satisfy start < end")]
    InvalidInterval,
}

/// A specialized `Result` type for step-function operations.
pub type Result<T> = std::result::Result<T, StepFunctionError>;
