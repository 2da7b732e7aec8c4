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

//! # Staircase
//!
//! Exact right-continuous step functions over ordered numeric domains.
//!
//! A [`StepFunction`] is held in a canonical form: breakpoints are strictly
//! increasing, never `+inf`, and no two adjacent segments carry the same
//! value. Every operation in this crate returns canonical functions, so two
//! functions that agree at every point compare equal and hash alike.
//!
//! ## Modules
//!
//! - `step`: The `StepFunction` type, its constructors, point evaluation and
//!   segment iteration.
//! - `merge`: `DomainMerge`, a k-way union of sorted breakpoint slices.
//! - `sweep`: `ValueSweep`, a forward-only cursor that evaluates a function at
//!   non-decreasing query points in amortized constant time.
//! - `algebra`: Pointwise arithmetic, n-ary combination, restriction to an
//!   interval, and the operator impls on `&StepFunction`.
//! - `series`: Conversion into a staircase polyline for plotting.
//! - `error`: The `StepFunctionError` type shared by fallible constructors.
//!
//! ## Example
//!
//! ```rust
//! use staircase::StepFunction;
//!
//! let f = StepFunction::try_from_values(vec![1, 2], vec![0, 1, 2]).unwrap();
//! let g = StepFunction::try_from_values(vec![1, 2], vec![100, 110, 10]).unwrap();
//!
//! let h = &f + &g;
//! assert_eq!(h.breakpoints(), &[1, 2]);
//! assert_eq!(*h.initial_value(), 100);
//! assert_eq!(h.values(), &[111, 12]);
//! assert_eq!(*h.evaluate(1), 111);
//! ```

pub mod algebra;
pub mod error;
pub mod merge;
pub mod series;
pub mod step;
pub mod sweep;

pub use error::{Result, StepFunctionError};
pub use merge::DomainMerge;
pub use series::LineSeries;
pub use step::{Segment, StepFunction};
pub use sweep::ValueSweep;
