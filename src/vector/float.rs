//! Elementwise operations for float lane vectors.
//!
//! Lane arithmetic follows native IEEE-754 behavior (±Infinity, NaN) with
//! no extra special-casing; single-precision lanes stay single-precision
//! through every operation. The min/max family is the subtle part: `min`
//! and `max` propagate NaN and order `-0` below `+0`, while `min_num` and
//! `max_num` prefer the numeric operand when exactly one side is NaN.

use super::lane::{max_num, min_num, propagating_max, propagating_min, FloatLane};
use super::Vector;

impl<T: FloatLane, const N: usize> Vector<T, N> {
    /// Lane-wise absolute value.
    #[inline(always)]
    pub fn abs(&self) -> Self {
        self.map(|x| x.abs())
    }

    /// Lane-wise division.
    #[inline(always)]
    pub fn div(&self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a / b)
    }

    /// Lane-wise square root; negative lanes produce NaN.
    #[inline(always)]
    pub fn sqrt(&self) -> Self {
        self.map(|x| x.sqrt())
    }

    /// Lane-wise minimum. NaN in either operand produces NaN, and `-0`
    /// orders below `+0`.
    #[inline(always)]
    pub fn min(&self, rhs: Self) -> Self {
        self.zip_map(rhs, propagating_min)
    }

    /// Lane-wise maximum, NaN-propagating.
    #[inline(always)]
    pub fn max(&self, rhs: Self) -> Self {
        self.zip_map(rhs, propagating_max)
    }

    /// Lane-wise NaN-avoiding minimum: when exactly one operand is NaN,
    /// the other is returned.
    #[inline(always)]
    pub fn min_num(&self, rhs: Self) -> Self {
        self.zip_map(rhs, min_num)
    }

    /// Lane-wise NaN-avoiding maximum.
    #[inline(always)]
    pub fn max_num(&self, rhs: Self) -> Self {
        self.zip_map(rhs, max_num)
    }

    /// Lane-wise approximation of the reciprocal value.
    #[inline(always)]
    pub fn reciprocal_approximation(&self) -> Self {
        Self::splat(T::one()).div(*self)
    }

    /// Lane-wise approximation of the reciprocal of the square root.
    #[inline(always)]
    pub fn reciprocal_sqrt_approximation(&self) -> Self {
        self.sqrt().reciprocal_approximation()
    }
}
