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

//! # Staircase Core
//!
//! Foundational numerics, interval and search primitives for the staircase
//! step-function library. Nothing in here knows about step functions; the
//! crate collects the small generic building blocks the algebra is written
//! against.
//!
//! ## Modules
//!
//! - `num`: The `DomainPoint` contract for breakpoint types and the explicit
//!   `Promote` relation that picks a common representation for two numeric
//!   types (e.g. `i32` and `f64` meet at `f64`).
//! - `math`: Closed-open interval `[start, end)` primitives that work for
//!   integer and floating point domains alike.
//! - `algorithm`: Sortedness checks and a binary search for the number of
//!   slice elements less than or equal to a key.
//!
//! Refer to each module for detailed APIs and examples.

pub mod algorithm;
pub mod math;
pub mod num;
