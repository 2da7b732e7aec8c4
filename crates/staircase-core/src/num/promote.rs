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

//! # Numeric Promotion
//!
//! When two operands carry different numeric representations (an `i32`
//! breakpoint sequence and an `f64` one, or `u8` values added to `i64`
//! values), the algebra first converts both into a common representation.
//! `Promote<Rhs>` names that representation as an associated type and
//! provides the two conversions into it.
//!
//! ## Lattice
//!
//! Every type promotes with itself to itself. For the primitive numerics the
//! relation is symmetric and follows these rules:
//!
//! - Two signed (or two unsigned) integers meet at the wider of the two.
//! - An unsigned integer and a strictly wider signed integer meet at the
//!   signed type; equally wide ones meet at the next wider signed type
//!   (`u8` + `i8` is `i16`, `u32` + `i32` is `i64`). `u64` has no signed
//!   partner.
//! - Any integer and a float meet at that float (`i64` + `f32` is `f32`).
//! - `f32` and `f64` meet at `f64`.
//!
//! `isize`, `usize` and the 128-bit integers only promote with themselves.
//!
//! ## Usage
//!
//! ```rust
//! use staircase_core::num::promote::{Promote, Promoted};
//!
//! let x: Promoted<i32, f64> = <i32 as Promote<f64>>::promote_lhs(3);
//! assert_eq!(x, 3.0_f64);
//!
//! let y: Promoted<u8, i8> = <u8 as Promote<i8>>::promote_rhs(-4);
//! assert_eq!(y, -4_i16);
//! ```

/// The common type two types are converted into before they are combined.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

/// A "promotes-to" relation between `Self` and `Rhs`.
pub trait Promote<Rhs = Self> {
    /// The common representation of `Self` and `Rhs`.
    type Output;

    /// Converts a left-hand operand into the common representation.
    fn promote_lhs(self) -> Self::Output;

    /// Converts a right-hand operand into the common representation.
    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

impl<T> Promote<T> for T {
    type Output = T;

    #[inline(always)]
    fn promote_lhs(self) -> T {
        self
    }

    #[inline(always)]
    fn promote_rhs(rhs: T) -> T {
        rhs
    }
}

macro_rules! impl_promote_pair {
    ($a:ty, $b:ty => $out:ty) => {
        impl Promote<$b> for $a {
            type Output = $out;

            #[inline(always)]
            fn promote_lhs(self) -> $out {
                self as $out
            }

            #[inline(always)]
            fn promote_rhs(rhs: $b) -> $out {
                rhs as $out
            }
        }

        impl Promote<$a> for $b {
            type Output = $out;

            #[inline(always)]
            fn promote_lhs(self) -> $out {
                self as $out
            }

            #[inline(always)]
            fn promote_rhs(rhs: $a) -> $out {
                rhs as $out
            }
        }
    };
}

macro_rules! impl_promote_int_float {
    ($float:ty: $($int:ty),* $(,)?) => {
        $(
            impl_promote_pair!($int, $float => $float);
        )*
    };
}

impl_promote_pair!(i8, i16 => i16);
impl_promote_pair!(i8, i32 => i32);
impl_promote_pair!(i8, i64 => i64);
impl_promote_pair!(i16, i32 => i32);
impl_promote_pair!(i16, i64 => i64);
impl_promote_pair!(i32, i64 => i64);

impl_promote_pair!(u8, u16 => u16);
impl_promote_pair!(u8, u32 => u32);
impl_promote_pair!(u8, u64 => u64);
impl_promote_pair!(u16, u32 => u32);
impl_promote_pair!(u16, u64 => u64);
impl_promote_pair!(u32, u64 => u64);

impl_promote_pair!(u8, i8 => i16);
impl_promote_pair!(u8, i16 => i16);
impl_promote_pair!(u8, i32 => i32);
impl_promote_pair!(u8, i64 => i64);
impl_promote_pair!(u16, i8 => i32);
impl_promote_pair!(u16, i16 => i32);
impl_promote_pair!(u16, i32 => i32);
impl_promote_pair!(u16, i64 => i64);
impl_promote_pair!(u32, i8 => i64);
impl_promote_pair!(u32, i16 => i64);
impl_promote_pair!(u32, i32 => i64);
impl_promote_pair!(u32, i64 => i64);

impl_promote_int_float!(f32: i8, i16, i32, i64, u8, u16, u32, u64);
impl_promote_int_float!(f64: i8, i16, i32, i64, u8, u16, u32, u64);
impl_promote_pair!(f32, f64 => f64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    fn promoted_type<A, B>() -> TypeId
    where
        A: Promote<B>,
        Promoted<A, B>: 'static,
    {
        TypeId::of::<Promoted<A, B>>()
    }

    #[test]
    fn test_identity_promotion() {
        assert_eq!(promoted_type::<i32, i32>(), TypeId::of::<i32>());
        assert_eq!(promoted_type::<f64, f64>(), TypeId::of::<f64>());
        assert_eq!(promoted_type::<u128, u128>(), TypeId::of::<u128>());
        assert_eq!(<String as Promote>::promote_lhs("a".to_string()), "a");
    }

    #[test]
    fn test_integer_widening_is_symmetric() {
        assert_eq!(promoted_type::<i8, i64>(), TypeId::of::<i64>());
        assert_eq!(promoted_type::<i64, i8>(), TypeId::of::<i64>());
        assert_eq!(promoted_type::<u16, u32>(), TypeId::of::<u32>());
        assert_eq!(promoted_type::<u32, u16>(), TypeId::of::<u32>());
    }

    #[test]
    fn test_mixed_signedness() {
        assert_eq!(promoted_type::<u8, i8>(), TypeId::of::<i16>());
        assert_eq!(promoted_type::<i32, u32>(), TypeId::of::<i64>());
        assert_eq!(promoted_type::<u16, i64>(), TypeId::of::<i64>());
        assert_eq!(<u32 as Promote<i32>>::promote_lhs(u32::MAX), u32::MAX as i64);
        assert_eq!(<u32 as Promote<i32>>::promote_rhs(-1), -1_i64);
    }

    #[test]
    fn test_integer_float_meets_at_float() {
        assert_eq!(promoted_type::<i64, f32>(), TypeId::of::<f32>());
        assert_eq!(promoted_type::<f64, u8>(), TypeId::of::<f64>());
        assert_eq!(promoted_type::<f32, f64>(), TypeId::of::<f64>());
        assert_eq!(<i32 as Promote<f64>>::promote_lhs(-7), -7.0);
        assert_eq!(<f64 as Promote<i32>>::promote_rhs(2), 2.0);
        assert_eq!(<f32 as Promote<f64>>::promote_lhs(0.5), 0.5);
    }
}
