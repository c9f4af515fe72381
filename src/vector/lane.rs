//! Lane-level traits and scalar semantics.
//!
//! The nine vector kinds share one generic engine, [`Vector`](super::Vector),
//! parameterized by the traits below. Each trait captures one family of
//! lane-wise semantics: plain numeric arithmetic, bitwise logic, integer
//! shift/wrap rules, saturating narrow-integer arithmetic, and IEEE-754
//! float behavior. The scalar rules here are the ones hardware SIMD units
//! implement, so they must hold bit-for-bit.

use std::fmt;

use num::traits::{
    Float, PrimInt, SaturatingAdd, SaturatingSub, WrappingAdd, WrappingMul, WrappingNeg,
    WrappingSub,
};

use crate::error::{range_error, Result};

/// A scalar type usable as one lane of a vector.
///
/// Any value a lane scalar can hold is already in coerced form for its
/// element kind; construction and `replace_lane` therefore need no runtime
/// coercion step.
pub trait Lane:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + fmt::Display + 'static
{
}

impl Lane for bool {}
impl Lane for f64 {}
impl Lane for f32 {}
impl Lane for i32 {}
impl Lane for i16 {}
impl Lane for i8 {}

/// Lane-wise arithmetic. Integer lanes wrap at lane width, float lanes
/// follow IEEE-754.
pub trait NumericLane: Lane {
    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
    fn lane_neg(self) -> Self;
}

/// Lane-wise bitwise logic. Implemented by the integer lanes and `bool`
/// (where it degenerates to boolean logic).
pub trait BitLane: Lane {
    fn lane_and(self, rhs: Self) -> Self;
    fn lane_or(self, rhs: Self) -> Self;
    fn lane_xor(self, rhs: Self) -> Self;
    fn lane_not(self) -> Self;
}

/// A two's-complement integer lane.
///
/// The shift methods bake in the per-width count-domain rules of the
/// emulated instruction set. The rules are asymmetric across widths and
/// that asymmetry is load-bearing:
///
/// - 32-bit lanes: counts >= 32 (as unsigned) produce an all-zero result
///   for left and logical-right shifts, and clamp to 31 for
///   arithmetic-right.
/// - 16-bit lanes: counts > 16 clamp to 16. A count of exactly 16 shifts
///   through, leaving 0 (or the sign fill for arithmetic-right).
/// - 8-bit lanes: counts > 8 clamp to 8, analogously.
pub trait IntLane:
    NumericLane + BitLane + PrimInt + WrappingAdd + WrappingSub + WrappingMul + WrappingNeg
{
    fn shift_left(self, count: u32) -> Self;
    fn shift_right_logical(self, count: u32) -> Self;
    fn shift_right_arithmetic(self, count: u32) -> Self;
}

/// A narrow (8/16-bit) integer lane with saturating arithmetic.
///
/// 32-bit lanes deliberately do not implement this; the emulated
/// instruction set has no 32-bit saturating add/sub.
pub trait NarrowLane: IntLane + SaturatingAdd + SaturatingSub {}

/// An IEEE-754 float lane.
pub trait FloatLane: NumericLane + Float {}

impl NumericLane for f64 {
    #[inline(always)]
    fn lane_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn lane_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn lane_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn lane_neg(self) -> Self {
        -self
    }
}

impl NumericLane for f32 {
    #[inline(always)]
    fn lane_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn lane_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn lane_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn lane_neg(self) -> Self {
        -self
    }
}

impl FloatLane for f64 {}
impl FloatLane for f32 {}

macro_rules! impl_int_numeric {
    ($($t:ty),*) => {
        $(
            impl NumericLane for $t {
                #[inline(always)]
                fn lane_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn lane_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline(always)]
                fn lane_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline(always)]
                fn lane_neg(self) -> Self {
                    self.wrapping_neg()
                }
            }

            impl BitLane for $t {
                #[inline(always)]
                fn lane_and(self, rhs: Self) -> Self {
                    self & rhs
                }

                #[inline(always)]
                fn lane_or(self, rhs: Self) -> Self {
                    self | rhs
                }

                #[inline(always)]
                fn lane_xor(self, rhs: Self) -> Self {
                    self ^ rhs
                }

                #[inline(always)]
                fn lane_not(self) -> Self {
                    !self
                }
            }
        )*
    };
}

impl_int_numeric!(i32, i16, i8);

impl BitLane for bool {
    #[inline(always)]
    fn lane_and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn lane_or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline(always)]
    fn lane_xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline(always)]
    fn lane_not(self) -> Self {
        !self
    }
}

impl IntLane for i32 {
    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        if count >= 32 {
            0
        } else {
            ((self as u32) << count) as i32
        }
    }

    #[inline(always)]
    fn shift_right_logical(self, count: u32) -> Self {
        if count >= 32 {
            0
        } else {
            ((self as u32) >> count) as i32
        }
    }

    #[inline(always)]
    fn shift_right_arithmetic(self, count: u32) -> Self {
        self >> count.min(31)
    }
}

impl IntLane for i16 {
    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        // Shifting happens in a widened domain so a count of exactly 16
        // shifts every bit out instead of being masked to 0.
        let count = count.min(16);
        (((self as u16 as u32) << count) & 0xffff) as u16 as i16
    }

    #[inline(always)]
    fn shift_right_logical(self, count: u32) -> Self {
        let count = count.min(16);
        ((self as u16 as u32) >> count) as u16 as i16
    }

    #[inline(always)]
    fn shift_right_arithmetic(self, count: u32) -> Self {
        ((self as i32) >> count.min(16)) as i16
    }
}

impl IntLane for i8 {
    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        let count = count.min(8);
        (((self as u8 as u32) << count) & 0xff) as u8 as i8
    }

    #[inline(always)]
    fn shift_right_logical(self, count: u32) -> Self {
        let count = count.min(8);
        ((self as u8 as u32) >> count) as u8 as i8
    }

    #[inline(always)]
    fn shift_right_arithmetic(self, count: u32) -> Self {
        ((self as i32) >> count.min(8)) as i8
    }
}

impl NarrowLane for i16 {}
impl NarrowLane for i8 {}

/// Lane-wise minimum with ECMAScript `Math.min` semantics: NaN in either
/// operand wins, and `-0` orders below `+0`. This is deliberately not
/// `f32::min`, which is NaN-avoiding.
#[inline(always)]
pub(crate) fn propagating_min<T: FloatLane>(x: T, y: T) -> T {
    if x.is_nan() || y.is_nan() {
        return T::nan();
    }
    if x < y {
        x
    } else if y < x {
        y
    } else if x.is_sign_negative() {
        x
    } else {
        y
    }
}

/// Lane-wise maximum with ECMAScript `Math.max` semantics.
#[inline(always)]
pub(crate) fn propagating_max<T: FloatLane>(x: T, y: T) -> T {
    if x.is_nan() || y.is_nan() {
        return T::nan();
    }
    if x > y {
        x
    } else if y > x {
        y
    } else if x.is_sign_positive() {
        x
    } else {
        y
    }
}

/// NaN-avoiding minimum: if either operand is NaN, the other one is
/// returned; otherwise the propagating minimum.
#[inline(always)]
pub(crate) fn min_num<T: FloatLane>(x: T, y: T) -> T {
    if x.is_nan() {
        y
    } else if y.is_nan() {
        x
    } else {
        propagating_min(x, y)
    }
}

/// NaN-avoiding maximum.
#[inline(always)]
pub(crate) fn max_num<T: FloatLane>(x: T, y: T) -> T {
    if x.is_nan() {
        y
    } else if y.is_nan() {
        x
    } else {
        propagating_max(x, y)
    }
}

/// Converts a float lane value to a 32-bit integer, truncating toward zero.
///
/// Fails with a range error when the value lies outside the open interval
/// `(-2^31 - 1, 2^31)`; NaN fails both interval tests and is rejected too.
#[inline(always)]
pub(crate) fn int32_from_float(x: f64) -> Result<i32> {
    if x > -2147483649.0 && x < 2147483648.0 {
        Ok(x.trunc() as i32)
    } else {
        Err(range_error(
            x,
            "conversion from floating-point to integer failed",
        ))
    }
}
