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

use proptest::prelude::*;
use proptest::strategy::Strategy;
use staircase::{DomainMerge, StepFunction};
use staircase_core::math::interval::ClosedOpenInterval;

const DOMAIN: std::ops::Range<i64> = -50..50;
const VALUES: std::ops::Range<i64> = -10..10;

/// Breakpoints and values with possible duplicates and repeated values, so
/// every generated function goes through compaction.
fn raw_parts_strategy() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    prop::collection::vec(DOMAIN, 0..20).prop_flat_map(|mut breakpoints| {
        breakpoints.sort_unstable();
        let n = breakpoints.len();
        (Just(breakpoints), prop::collection::vec(VALUES, n + 1))
    })
}

fn step_function_strategy() -> impl Strategy<Value = StepFunction<i64, i64>> {
    raw_parts_strategy().prop_map(|(breakpoints, values)| {
        StepFunction::try_from_values(breakpoints, values).unwrap()
    })
}

/// Query points around and beyond the generated domain.
fn probes() -> impl Iterator<Item = i64> {
    -60..60
}

fn sorted_slice_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(DOMAIN, 0..15).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

proptest! {
    /// Property: constructed functions are canonical
    #[test]
    fn constructed_functions_are_canonical(f in step_function_strategy()) {
        prop_assert!(f.breakpoints().windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(f.values().len(), f.breakpoints().len());
        let mut previous = f.initial_value();
        for value in f.values() {
            prop_assert_ne!(previous, value);
            previous = value;
        }
    }

    /// Property: compaction keeps the last value of duplicate breakpoints
    #[test]
    fn compaction_preserves_pointwise_values((breakpoints, values) in raw_parts_strategy()) {
        let f = StepFunction::try_from_values(breakpoints.clone(), values.clone()).unwrap();
        for x in probes() {
            let count = breakpoints.partition_point(|&b| b <= x);
            prop_assert_eq!(*f.evaluate(x), values[count]);
        }
    }

    /// Property: rebuilding a canonical function from its parts is the identity
    #[test]
    fn construction_is_idempotent(f in step_function_strategy()) {
        let (breakpoints, initial_value, values) = f.clone().into_parts();
        let g = StepFunction::try_new(breakpoints, initial_value, values).unwrap();
        prop_assert_eq!(f, g);
    }

    /// Property: merging yields the sorted, deduplicated union of all sources
    #[test]
    fn merge_is_sorted_union(sources in prop::collection::vec(sorted_slice_strategy(), 0..8)) {
        let merged: Vec<i64> = DomainMerge::new(sources.iter().map(Vec::as_slice)).collect();

        let mut expected: Vec<i64> = sources.iter().flatten().copied().collect();
        expected.sort_unstable();
        expected.dedup();

        let total: usize = sources.iter().map(Vec::len).sum();
        prop_assert!(merged.len() <= total);
        prop_assert_eq!(merged, expected);
    }

    /// Property: sweeping agrees with point evaluation
    #[test]
    fn sweep_matches_evaluate(f in step_function_strategy(), mut queries in prop::collection::vec(-60i64..60, 0..40)) {
        queries.sort_unstable();
        let swept: Vec<i64> = f.sweep(queries.iter().copied()).copied().collect();
        let evaluated: Vec<i64> = queries.iter().map(|&x| *f.evaluate(x)).collect();
        prop_assert_eq!(swept, evaluated);
    }

    /// Property: arithmetic is pointwise
    #[test]
    fn arithmetic_is_pointwise(f in step_function_strategy(), g in step_function_strategy()) {
        let sum = &f + &g;
        let difference = &f - &g;
        let product = &f * &g;
        for x in probes() {
            let (a, b) = (*f.evaluate(x), *g.evaluate(x));
            prop_assert_eq!(*sum.evaluate(x), a + b);
            prop_assert_eq!(*difference.evaluate(x), a - b);
            prop_assert_eq!(*product.evaluate(x), a * b);
        }
    }

    /// Property: float division is pointwise wherever the divisor is nonzero
    #[test]
    fn division_is_pointwise(f in step_function_strategy(), g in step_function_strategy()) {
        let f = f.map(|&y| y as f64);
        let g = g.map(|&y| if y == 0 { 1.0 } else { y as f64 });
        let quotient = &f / &g;
        for x in probes() {
            prop_assert_eq!(*quotient.evaluate(x), f.evaluate(x) / g.evaluate(x));
        }
    }

    /// Property: exponentiation is pointwise
    #[test]
    fn pow_is_pointwise(f in step_function_strategy(), e in step_function_strategy()) {
        let exponent = e.map(|&y| y.unsigned_abs() as u32 % 4);
        let power = f.pow(&exponent);
        for x in probes() {
            let expected = num_traits::Pow::pow(*f.evaluate(x), *exponent.evaluate(x));
            prop_assert_eq!(*power.evaluate(x), expected);
        }
    }

    /// Property: exact division is pointwise wherever the divisor is nonzero
    #[test]
    fn div_exact_is_pointwise(f in step_function_strategy(), g in step_function_strategy()) {
        let g = g.map(|&y| if y == 0 { 1 } else { y });
        let quotient = f.div_exact(&g);
        for x in probes() {
            let expected = num_rational::Ratio::new(*f.evaluate(x), *g.evaluate(x));
            prop_assert_eq!(*quotient.evaluate(x), expected);
        }
    }

    /// Property: results of arithmetic are canonical
    #[test]
    fn arithmetic_results_are_canonical(f in step_function_strategy(), g in step_function_strategy()) {
        let h = &f - &g;
        let rebuilt = StepFunction::try_new(
            h.breakpoints().to_vec(),
            *h.initial_value(),
            h.values().to_vec(),
        ).unwrap();
        prop_assert_eq!(&h, &rebuilt);
        prop_assert!(h.breakpoints().windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: subtracting a function from itself gives the constant zero
    #[test]
    fn self_difference_is_zero(f in step_function_strategy()) {
        prop_assert_eq!(&f - &f, StepFunction::constant(0));
    }

    /// Property: addition and multiplication commute and associate
    #[test]
    fn addition_and_multiplication_laws(
        f in step_function_strategy(),
        g in step_function_strategy(),
        h in step_function_strategy(),
    ) {
        prop_assert_eq!(&f + &g, &g + &f);
        prop_assert_eq!(&f * &g, &g * &f);
        prop_assert_eq!(&(&f + &g) + &h, &f + &(&g + &h));
        prop_assert_eq!(&(&f * &g) * &h, &f * &(&g * &h));
        prop_assert_eq!(StepFunction::sum([&f, &g, &h]), &(&f + &g) + &h);
    }

    /// Property: restriction zeroes the function outside the interval and is idempotent
    #[test]
    fn restriction_laws(f in step_function_strategy(), a in DOMAIN, len in 1i64..40) {
        let b = a + len;
        let interval = ClosedOpenInterval::new(a, b);
        let r = f.restrict(a, b).unwrap();
        prop_assert_eq!(&f.restrict_to(interval).unwrap(), &r);
        for x in probes() {
            let expected = if interval.contains_point(x) { *f.evaluate(x) } else { 0 };
            prop_assert_eq!(*r.evaluate(x), expected);
        }
        prop_assert_eq!(r.restrict(a, b).unwrap(), r);
    }

    /// Property: the line series has matching coordinates and doubles interior breakpoints
    #[test]
    fn line_series_shape(f in step_function_strategy(), a in DOMAIN, len in 1i64..40) {
        let b = a + len;
        let series = f.line_series(a, b).unwrap();
        let interior = f.breakpoints().iter().filter(|&&x| a < x && x < b).count();
        prop_assert_eq!(series.xs.len(), series.ys.len());
        prop_assert_eq!(series.len(), 2 * interior + 2);
        prop_assert_eq!(series.xs.first().copied(), Some(a));
        prop_assert_eq!(series.xs.last().copied(), Some(b));
        prop_assert!(series.xs.windows(2).all(|w| w[0] <= w[1]));
    }
}
