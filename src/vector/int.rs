//! Elementwise operations for integer lane vectors.
//!
//! Arithmetic wraps at lane width (two's complement); shifts apply one
//! scalar count to every lane under the width-specific clamp rules baked
//! into [`IntLane`]; saturating add/sub exist only for the narrow (16/8
//! bit) kinds, matching the emulated instruction set.

use super::lane::{IntLane, NarrowLane};
use super::{Vector, I8x16};

impl<T: IntLane, const N: usize> Vector<T, N> {
    /// Shifts every lane left by the same count.
    ///
    /// The count is interpreted as unsigned 32-bit. For 32-bit lanes a
    /// count >= 32 produces an all-zero vector; for 16/8-bit lanes the
    /// count is clamped to the lane width instead.
    #[inline(always)]
    pub fn shift_left_by_scalar(&self, bits: i32) -> Self {
        let count = bits as u32;
        self.map(|x| x.shift_left(count))
    }

    /// Shifts every lane right, filling with zero bits. Count handling as
    /// in [`shift_left_by_scalar`](Self::shift_left_by_scalar).
    #[inline(always)]
    pub fn shift_right_logical_by_scalar(&self, bits: i32) -> Self {
        let count = bits as u32;
        self.map(|x| x.shift_right_logical(count))
    }

    /// Shifts every lane right, filling with the sign bit. For 32-bit
    /// lanes a count >= 32 clamps to 31 (it does not zero); narrow lanes
    /// clamp to their width.
    #[inline(always)]
    pub fn shift_right_arithmetic_by_scalar(&self, bits: i32) -> Self {
        let count = bits as u32;
        self.map(|x| x.shift_right_arithmetic(count))
    }

    /// Per-bit ternary: `(mask & if_true) | (!mask & if_false)`.
    ///
    /// Distinct from [`select`](Self::select), which moves whole lanes;
    /// the two coincide only when every mask lane is all-ones or all-zeros.
    #[inline(always)]
    pub fn select_bits(mask: &Self, if_true: &Self, if_false: &Self) -> Self {
        let tr = mask.and(*if_true);
        let fr = mask.not().and(*if_false);
        tr.or(fr)
    }
}

impl<T: NarrowLane, const N: usize> Vector<T, N> {
    /// Lane-wise addition clamped to the lane width's representable range
    /// instead of wrapping.
    #[inline(always)]
    pub fn add_saturate(&self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a.saturating_add(b))
    }

    /// Lane-wise subtraction clamped to the lane width's representable
    /// range instead of wrapping.
    #[inline(always)]
    pub fn sub_saturate(&self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a.saturating_sub(b))
    }
}

impl I8x16 {
    /// The scalar sum of `|a[i] - b[i]|` over all 16 lanes.
    #[inline(always)]
    pub fn sum_of_absolute_differences(&self, rhs: Self) -> i32 {
        self.as_array()
            .iter()
            .zip(rhs.as_array().iter())
            .map(|(&a, &b)| (a as i32 - b as i32).abs())
            .sum()
    }
}
