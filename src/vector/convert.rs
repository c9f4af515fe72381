//! Numeric conversions between vector kinds.
//!
//! These convert lane *values* (rounding or truncating); byte-identical
//! reinterpretation lives in [`crate::bits`]. Conversions between kinds of
//! different lane counts keep lanes 0..2 and zero-fill the rest, matching
//! the emulated instruction set.

use crate::error::Result;
use crate::vector::lane::int32_from_float;
use crate::vector::{F32x4, F64x2, I32x4};

impl F32x4 {
    /// Converts each 32-bit integer lane to single precision, rounding to
    /// nearest.
    pub fn from_i32x4(v: &I32x4) -> Self {
        let [x, y, z, w] = v.to_array();
        Self::new([x as f32, y as f32, z as f32, w as f32])
    }

    /// Rounds the two double lanes to single precision into lanes 0 and 1;
    /// lanes 2 and 3 are zero.
    pub fn from_f64x2(v: &F64x2) -> Self {
        let [x, y] = v.to_array();
        Self::new([x as f32, y as f32, 0.0, 0.0])
    }
}

impl F64x2 {
    /// Widens lanes 0 and 1 to double precision; widening is exact.
    pub fn from_f32x4(v: &F32x4) -> Self {
        let lanes = v.to_array();
        Self::new([lanes[0] as f64, lanes[1] as f64])
    }

    /// Converts lanes 0 and 1 to double precision; every i32 is exactly
    /// representable.
    pub fn from_i32x4(v: &I32x4) -> Self {
        let lanes = v.to_array();
        Self::new([lanes[0] as f64, lanes[1] as f64])
    }
}

impl I32x4 {
    /// Converts each single-precision lane to a 32-bit integer, truncating
    /// toward zero.
    ///
    /// Fails with a range error when any lane lies outside the open
    /// interval `(-2^31 - 1, 2^31)`; NaN and infinities always fail. No
    /// partial result is produced.
    pub fn from_f32x4(v: &F32x4) -> Result<Self> {
        let [x, y, z, w] = v.to_array();
        Ok(Self::new([
            int32_from_float(x as f64)?,
            int32_from_float(y as f64)?,
            int32_from_float(z as f64)?,
            int32_from_float(w as f64)?,
        ]))
    }

    /// Converts the two double lanes, truncating toward zero, into lanes 0
    /// and 1; lanes 2 and 3 are zero. Range handling as in
    /// [`from_f32x4`](Self::from_f32x4).
    pub fn from_f64x2(v: &F64x2) -> Result<Self> {
        let [x, y] = v.to_array();
        Ok(Self::new([int32_from_float(x)?, int32_from_float(y)?, 0, 0]))
    }
}
