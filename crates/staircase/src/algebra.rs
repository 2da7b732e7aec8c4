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

//! # Pointwise Algebra
//!
//! Every binary or n-ary operation on step functions follows the same plan:
//!
//! 1. Merge the operands' breakpoints with a [`DomainMerge`] into the
//!    candidate breakpoints of the result.
//! 2. Sweep every operand over those candidates with a [`ValueSweep`].
//! 3. Combine the swept values point by point (and the initial values once).
//! 4. Hand the result to the canonicalizing constructor, which drops every
//!    candidate at which the combined value does not actually change.
//!
//! Operands with different numeric representations are first promoted to
//! their common representation (see [`Promote`]), so an `i32`-valued function
//! can be added to an `f64`-valued one and the result is `f64`-valued.
//! Numeric failures of the value type (integer division by zero, overflow in
//! debug builds) propagate unchanged from its operators.
//!
//! ```rust
//! use staircase::step::StepFunction;
//!
//! let f = StepFunction::try_from_values(vec![1, 2], vec![0, 1, 2]).unwrap();
//! let g = StepFunction::try_from_values(vec![1, 2], vec![3, 4, 5]).unwrap();
//! let h = &f + &g;
//! assert_eq!(h.breakpoints(), &[1, 2]);
//! assert_eq!(*h.initial_value(), 3);
//! assert_eq!(h.values(), &[5, 7]);
//! ```

use crate::{
    error::{Result, StepFunctionError},
    merge::DomainMerge,
    step::StepFunction,
    sweep::ValueSweep,
};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, Pow, Zero};
use smallvec::SmallVec;
use staircase_core::{
    math::interval::ClosedOpenInterval,
    num::{
        domain::DomainPoint,
        promote::{Promote, Promoted},
    },
};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Converts both operands into their common domain and value representation.
#[allow(clippy::type_complexity)]
fn promote_operands<X, Y, X2, Y2>(
    lhs: &StepFunction<X, Y>,
    rhs: &StepFunction<X2, Y2>,
) -> (
    StepFunction<Promoted<X, X2>, Promoted<Y, Y2>>,
    StepFunction<Promoted<X, X2>, Promoted<Y, Y2>>,
)
where
    X: Promote<X2> + Copy,
    X2: Copy,
    Y: Promote<Y2> + Clone,
    Y2: Clone,
    Promoted<X, X2>: DomainPoint,
    Promoted<Y, Y2>: PartialEq,
{
    let lhs = lhs.cast_with(
        <X as Promote<X2>>::promote_lhs,
        |y| <Y as Promote<Y2>>::promote_lhs(y.clone()),
    );
    let rhs = rhs.cast_with(
        <X as Promote<X2>>::promote_rhs,
        |y| <Y as Promote<Y2>>::promote_rhs(y.clone()),
    );
    (lhs, rhs)
}

/// Converts both operands into their common domain, leaving values untouched.
#[allow(clippy::type_complexity)]
fn promote_domains<X, Y, X2, Y2>(
    lhs: &StepFunction<X, Y>,
    rhs: &StepFunction<X2, Y2>,
) -> (
    StepFunction<Promoted<X, X2>, Y>,
    StepFunction<Promoted<X, X2>, Y2>,
)
where
    X: Promote<X2> + Copy,
    X2: Copy,
    Y: PartialEq + Clone,
    Y2: PartialEq + Clone,
    Promoted<X, X2>: DomainPoint,
{
    let lhs = lhs.cast_with(<X as Promote<X2>>::promote_lhs, Y::clone);
    let rhs = rhs.cast_with(<X as Promote<X2>>::promote_rhs, Y2::clone);
    (lhs, rhs)
}

impl<X, Y> StepFunction<X, Y>
where
    X: DomainPoint,
    Y: PartialEq + Clone,
{
    /// Combines any number of step functions point by point.
    ///
    /// `op` folds the operands' values from left to right: at every point the
    /// first operand's value is the seed and each further operand's value is
    /// folded in. Returns `None` if `functions` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_from_values(vec![0], vec![1, 2]).unwrap();
    /// let g = StepFunction::try_from_values(vec![1], vec![0, 5]).unwrap();
    /// let h = StepFunction::try_from_values(vec![2], vec![3, 1]).unwrap();
    /// let max = StepFunction::combine(&[&f, &g, &h], |acc, v| acc.max(*v)).unwrap();
    /// assert_eq!(max.breakpoints(), &[1]);
    /// assert_eq!(max.values(), &[5]);
    /// assert_eq!(*max.initial_value(), 3);
    /// ```
    pub fn combine<F>(functions: &[&Self], mut op: F) -> Option<Self>
    where
        F: FnMut(Y, &Y) -> Y,
    {
        let (first, rest) = functions.split_first()?;

        let breakpoints: Vec<X> =
            DomainMerge::new(functions.iter().map(|f| f.breakpoints())).collect();

        let initial_value = rest
            .iter()
            .fold(first.initial_value().clone(), |acc, f| {
                op(acc, f.initial_value())
            });

        let values = {
            let mut sweeps: SmallVec<[_; 4]> = functions
                .iter()
                .map(|f| ValueSweep::new(*f, breakpoints.iter().copied()))
                .collect();

            let mut values = Vec::with_capacity(breakpoints.len());
            for _ in 0..breakpoints.len() {
                let mut operands = sweeps.iter_mut().filter_map(Iterator::next);
                let Some(seed) = operands.next() else {
                    break;
                };
                let combined = operands.fold(seed.clone(), &mut op);
                values.push(combined);
            }
            values
        };

        tracing::debug!(
            operands = functions.len(),
            candidates = breakpoints.len(),
            "combining step functions"
        );

        Some(Self::from_sorted(breakpoints, initial_value, values))
    }

    /// Sums any number of step functions. The empty sum is the constant zero function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_from_values(vec![1.0], vec![1, 2]).unwrap();
    /// let g = StepFunction::try_from_values(vec![2.0], vec![10, 20]).unwrap();
    /// let total = StepFunction::sum([&f, &g, &f]);
    /// assert_eq!(total.values(), &[14, 24]);
    /// assert_eq!(StepFunction::<f64, i32>::sum([]), StepFunction::constant(0));
    /// ```
    pub fn sum<'a, I>(functions: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
        Y: Zero,
    {
        let functions: SmallVec<[&Self; 4]> = functions.into_iter().collect();
        Self::combine(&functions, |acc, v| acc + v.clone())
            .unwrap_or_else(|| Self::constant(Y::zero()))
    }

    /// Multiplies any number of step functions. The empty product is the constant one function.
    pub fn product<'a, I>(functions: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
        Y: One,
    {
        let functions: SmallVec<[&Self; 4]> = functions.into_iter().collect();
        Self::combine(&functions, |acc, v| acc * v.clone())
            .unwrap_or_else(|| Self::constant(Y::one()))
    }

    /// Multiplies every value by `factor`.
    ///
    /// The result is re-canonicalized: scaling by zero collapses the function
    /// into a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_from_values(vec![1, 2], vec![1, 2, 3]).unwrap();
    /// assert_eq!(f.scale(2).values(), &[4, 6]);
    /// assert!(f.scale(0).is_constant());
    /// ```
    pub fn scale(&self, factor: Y) -> Self
    where
        Y: Mul<Output = Y>,
    {
        self.map(|y| factor.clone() * y.clone())
    }

    /// Returns the step function that is one on `interval` and zero elsewhere.
    ///
    /// If the interval extends to `+inf` only the start breakpoint is kept.
    ///
    /// # Errors
    ///
    /// [`StepFunctionError::InvalidInterval`] if the interval is empty.
    pub fn indicator(interval: ClosedOpenInterval<X>) -> Result<Self>
    where
        Y: Zero + One,
    {
        if interval.is_empty() {
            return Err(StepFunctionError::InvalidInterval);
        }
        let (breakpoints, values) = if interval.end().is_positive_infinity() {
            (vec![interval.start()], vec![Y::one()])
        } else {
            (vec![interval.start(), interval.end()], vec![Y::one(), Y::zero()])
        };
        Ok(Self::from_sorted(breakpoints, Y::zero(), values))
    }

    /// Restricts the function to `[start, end)`, zeroing it everywhere else.
    ///
    /// This is the product of `self` and the indicator of the interval, so the
    /// function keeps its value at `start` and is zero from `end` on.
    ///
    /// # Errors
    ///
    /// [`StepFunctionError::InvalidInterval`] if `start >= end` or the bounds
    /// are incomparable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_from_values(vec![1.0, 2.0], vec![5, 6, 7]).unwrap();
    /// let r = f.restrict(0.5, 1.5).unwrap();
    /// assert_eq!(*r.evaluate(0.0), 0);
    /// assert_eq!(*r.evaluate(0.5), 5);
    /// assert_eq!(*r.evaluate(1.0), 6);
    /// assert_eq!(*r.evaluate(1.5), 0);
    /// assert!(f.restrict(1.0, 1.0).is_err());
    /// ```
    pub fn restrict(&self, start: X, end: X) -> Result<Self>
    where
        Y: Zero + One,
    {
        let interval =
            ClosedOpenInterval::try_new(start, end).ok_or(StepFunctionError::InvalidInterval)?;
        self.restrict_to(interval)
    }

    /// Restricts the function to `interval`, zeroing it everywhere else.
    ///
    /// # Errors
    ///
    /// [`StepFunctionError::InvalidInterval`] if the interval is empty.
    pub fn restrict_to(&self, interval: ClosedOpenInterval<X>) -> Result<Self>
    where
        Y: Zero + One,
    {
        let indicator = Self::indicator(interval)?;
        Ok(Self::product([self, &indicator]))
    }
}

impl<X, Y> StepFunction<X, Y>
where
    X: DomainPoint,
{
    /// Combines two step functions over the same domain point by point.
    ///
    /// Unlike [`StepFunction::combine`] the operands may carry different value
    /// types, and the operation need be neither commutative nor associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_from_values(vec![1], vec![1, 3]).unwrap();
    /// let g = StepFunction::try_from_values(vec![2], vec!['a', 'b']).unwrap();
    /// let h = f.combine2(&g, |n, c| format!("{n}{c}"));
    /// assert_eq!(h.to_string(), "(-inf, 1) -> 1a, [1, 2) -> 3a, [2, +inf) -> 3b");
    /// ```
    pub fn combine2<Y2, Z, F>(&self, other: &StepFunction<X, Y2>, mut op: F) -> StepFunction<X, Z>
    where
        Z: PartialEq,
        F: FnMut(&Y, &Y2) -> Z,
    {
        let breakpoints: Vec<X> =
            DomainMerge::new([self.breakpoints(), other.breakpoints()]).collect();

        let initial_value = op(self.initial_value(), other.initial_value());
        let values: Vec<Z> = self
            .sweep(breakpoints.iter().copied())
            .zip(other.sweep(breakpoints.iter().copied()))
            .map(|(a, b)| op(a, b))
            .collect();

        tracing::debug!(
            candidates = breakpoints.len(),
            "combining two step functions"
        );

        StepFunction::from_sorted(breakpoints, initial_value, values)
    }
}

macro_rules! promoted_binary_op {
    ($(#[$doc:meta])* $method:ident, $op_trait:ident, $op:tt, $combine:ident) => {
        impl<X, Y> StepFunction<X, Y>
        where
            X: DomainPoint,
        {
            $(#[$doc])*
            #[allow(clippy::type_complexity)]
            pub fn $method<X2, Y2>(
                &self,
                rhs: &StepFunction<X2, Y2>,
            ) -> StepFunction<Promoted<X, X2>, Promoted<Y, Y2>>
            where
                X: Promote<X2>,
                X2: Copy,
                Y: Promote<Y2> + Clone,
                Y2: Clone,
                Promoted<X, X2>: DomainPoint,
                Promoted<Y, Y2>: PartialEq + Clone + $op_trait<Output = Promoted<Y, Y2>>,
            {
                let (lhs, rhs) = promote_operands(self, rhs);
                promoted_binary_op!(@apply $combine, lhs, rhs, $op)
            }
        }

        impl<X, Y, X2, Y2> $op_trait<&StepFunction<X2, Y2>> for &StepFunction<X, Y>
        where
            X: DomainPoint + Promote<X2>,
            X2: Copy,
            Y: Promote<Y2> + Clone,
            Y2: Clone,
            Promoted<X, X2>: DomainPoint,
            Promoted<Y, Y2>: PartialEq + Clone + $op_trait<Output = Promoted<Y, Y2>>,
        {
            type Output = StepFunction<Promoted<X, X2>, Promoted<Y, Y2>>;

            #[inline]
            fn $method(self, rhs: &StepFunction<X2, Y2>) -> Self::Output {
                StepFunction::$method(self, rhs)
            }
        }
    };
    (@apply combine, $lhs:ident, $rhs:ident, $op:tt) => {
        match StepFunction::combine(&[&$lhs, &$rhs], |acc, v| acc $op v.clone()) {
            Some(result) => result,
            None => unreachable!("combine called with two operands"),
        }
    };
    (@apply combine2, $lhs:ident, $rhs:ident, $op:tt) => {
        $lhs.combine2(&$rhs, |a, b| a.clone() $op b.clone())
    };
}

promoted_binary_op!(
    /// Adds two step functions point by point, promoting mixed representations.
    add, Add, +, combine
);
promoted_binary_op!(
    /// Subtracts `rhs` from `self` point by point, promoting mixed representations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_from_values(vec![1, 3], vec![0.0, 1.0, 2.0]).unwrap();
    /// let g = StepFunction::try_from_values(vec![1, 2], vec![3, 4, 5]).unwrap();
    /// let h = f.sub(&g);
    /// assert_eq!(h.breakpoints(), &[2, 3]);
    /// assert_eq!(*h.initial_value(), -3.0);
    /// assert_eq!(h.values(), &[-4.0, -3.0]);
    /// ```
    sub, Sub, -, combine2
);
promoted_binary_op!(
    /// Multiplies two step functions point by point, promoting mixed representations.
    mul, Mul, *, combine
);
promoted_binary_op!(
    /// Divides `self` by `rhs` point by point, promoting mixed representations.
    ///
    /// The value type's division semantics apply unchanged: integer division
    /// truncates and panics on a zero divisor, float division yields
    /// infinities or NaN.
    div, Div, /, combine2
);

impl<X, Y> StepFunction<X, Y>
where
    X: DomainPoint,
{
    /// Raises `self` to the power of `exponent` point by point.
    ///
    /// The domains are promoted to their common representation; the values
    /// combine through [`num_traits::Pow`], so integer bases take unsigned
    /// exponents and float bases take float or integer exponents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use staircase::step::StepFunction;
    /// let base = StepFunction::try_from_values(vec![1], vec![2_i64, 3]).unwrap();
    /// let exponent = StepFunction::try_from_values(vec![2.0], vec![2_u32, 3]).unwrap();
    /// let p = base.pow(&exponent);
    /// assert_eq!(p.breakpoints(), &[1.0, 2.0]);
    /// assert_eq!(*p.initial_value(), 4);
    /// assert_eq!(p.values(), &[9, 27]);
    /// ```
    pub fn pow<X2, E, Z>(&self, exponent: &StepFunction<X2, E>) -> StepFunction<Promoted<X, X2>, Z>
    where
        X: Promote<X2>,
        X2: Copy,
        Y: PartialEq + Clone + Pow<E, Output = Z>,
        E: PartialEq + Clone,
        Z: PartialEq,
        Promoted<X, X2>: DomainPoint,
    {
        let (base, exponent) = promote_domains(self, exponent);
        base.combine2(&exponent, |b, e| b.clone().pow(e.clone()))
    }

    /// Divides `self` by `rhs` exactly, producing rational values.
    ///
    /// Both value types are promoted to their common integer representation.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero anywhere, as [`Ratio::new`] does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use num_rational::Ratio;
    /// # use staircase::step::StepFunction;
    /// let f = StepFunction::try_from_values(vec![1], vec![1_i64, 2]).unwrap();
    /// let g = StepFunction::try_from_values(vec![5], vec![3_i32, 4]).unwrap();
    /// let q = f.div_exact(&g);
    /// assert_eq!(*q.initial_value(), Ratio::new(1, 3));
    /// assert_eq!(q.values(), &[Ratio::new(2, 3), Ratio::new(1, 2)]);
    /// ```
    #[allow(clippy::type_complexity)]
    pub fn div_exact<X2, Y2>(
        &self,
        rhs: &StepFunction<X2, Y2>,
    ) -> StepFunction<Promoted<X, X2>, Ratio<Promoted<Y, Y2>>>
    where
        X: Promote<X2>,
        X2: Copy,
        Y: Promote<Y2> + Clone,
        Y2: Clone,
        Promoted<X, X2>: DomainPoint,
        Promoted<Y, Y2>: Integer + Clone,
    {
        let (lhs, rhs) = promote_operands(self, rhs);
        lhs.combine2(&rhs, |a, b| Ratio::new(a.clone(), b.clone()))
    }
}

impl<X, Y> Neg for &StepFunction<X, Y>
where
    X: DomainPoint,
    Y: PartialEq + Clone + Neg<Output = Y>,
{
    type Output = StepFunction<X, Y>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|y| -y.clone())
    }
}

impl<X, Y> Neg for StepFunction<X, Y>
where
    X: DomainPoint,
    Y: PartialEq + Clone + Neg<Output = Y>,
{
    type Output = StepFunction<X, Y>;

    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a, X, Y> std::iter::Sum<&'a StepFunction<X, Y>> for StepFunction<X, Y>
where
    X: DomainPoint + 'a,
    Y: PartialEq + Clone + Zero + 'a,
{
    fn sum<I: Iterator<Item = &'a StepFunction<X, Y>>>(iter: I) -> Self {
        StepFunction::sum(iter)
    }
}

impl<'a, X, Y> std::iter::Product<&'a StepFunction<X, Y>> for StepFunction<X, Y>
where
    X: DomainPoint + 'a,
    Y: PartialEq + Clone + One + 'a,
{
    fn product<I: Iterator<Item = &'a StepFunction<X, Y>>>(iter: I) -> Self {
        StepFunction::product(iter)
    }
}
