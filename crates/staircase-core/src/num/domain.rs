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

//! Breakpoint coordinate contract.
//!
//! A step function's domain must be totally ordered on the values it actually
//! stores and must be able to tell whether a value is positive infinity, since
//! a breakpoint at `+inf` would open a segment that contains no points.

/// A type usable as a breakpoint coordinate.
///
/// Values are compared with `PartialOrd`. Types with incomparable values
/// (floating point NaN) are accepted, but such values are rejected wherever a
/// sorted sequence is validated.
///
/// # Examples
///
/// ```rust
/// # use staircase_core::num::domain::DomainPoint;
/// assert!(f64::INFINITY.is_positive_infinity());
/// assert!(!f64::NEG_INFINITY.is_positive_infinity());
/// assert!(!i64::MAX.is_positive_infinity());
/// ```
pub trait DomainPoint: Copy + PartialOrd {
    /// Returns `true` if `self` is positive infinity.
    fn is_positive_infinity(self) -> bool;
}

macro_rules! impl_domain_point_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl DomainPoint for $t {
                #[inline(always)]
                fn is_positive_infinity(self) -> bool {
                    false
                }
            }
        )*
    };
}

macro_rules! impl_domain_point_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl DomainPoint for $t {
                #[inline(always)]
                fn is_positive_infinity(self) -> bool {
                    self == <$t>::INFINITY
                }
            }
        )*
    };
}

impl_domain_point_for_int!(i8, i16, i32, i64, i128, isize);
impl_domain_point_for_int!(u8, u16, u32, u64, u128, usize);
impl_domain_point_for_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_are_never_infinite() {
        assert!(!i8::MAX.is_positive_infinity());
        assert!(!u64::MAX.is_positive_infinity());
        assert!(!0usize.is_positive_infinity());
        assert!(!i128::MIN.is_positive_infinity());
    }

    #[test]
    fn test_float_infinities() {
        assert!(f32::INFINITY.is_positive_infinity());
        assert!(f64::INFINITY.is_positive_infinity());
        assert!(!f32::NEG_INFINITY.is_positive_infinity());
        assert!(!f64::NEG_INFINITY.is_positive_infinity());
        assert!(!f64::MAX.is_positive_infinity());
        // NaN is incomparable, never infinite
        assert!(!f64::NAN.is_positive_infinity());
    }
}
