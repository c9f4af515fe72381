//! Fixed-width lane vector types.
//!
//! One generic [`Vector<T, N>`] carries all nine emulated kinds; the lane
//! traits in [`lane`] supply the per-kind semantics. Values are immutable:
//! every operation, including `replace_lane`, returns a new vector.

pub mod convert;
pub mod float;
pub mod int;
pub mod lane;
pub mod mask;

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use crate::error::{bounds_error, Result};
use lane::{BitLane, FloatLane, Lane, NumericLane};

/// A 2-lane boolean vector, masking 64-bit lanes.
pub type B64x2 = Vector<bool, 2>;
/// A 4-lane boolean vector, masking 32-bit lanes.
pub type B32x4 = Vector<bool, 4>;
/// An 8-lane boolean vector, masking 16-bit lanes.
pub type B16x8 = Vector<bool, 8>;
/// A 16-lane boolean vector, masking 8-bit lanes.
pub type B8x16 = Vector<bool, 16>;
/// A vector of 2 64-bit floating point lanes.
pub type F64x2 = Vector<f64, 2>;
/// A vector of 4 32-bit floating point lanes.
pub type F32x4 = Vector<f32, 4>;
/// A vector of 4 signed 32-bit integer lanes.
pub type I32x4 = Vector<i32, 4>;
/// A vector of 8 signed 16-bit integer lanes.
pub type I16x8 = Vector<i16, 8>;
/// A vector of 16 signed 8-bit integer lanes.
pub type I8x16 = Vector<i8, 16>;

/// An immutable tuple of `N` lanes of one element kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector<T: Lane, const N: usize> {
    lanes: [T; N],
}

/// Validates a lane or permutation index against `bound`, returning the
/// usable array index.
#[inline(always)]
fn check_lane_index(lane: i32, bound: usize) -> Result<usize> {
    if lane < 0 || lane as usize >= bound {
        return Err(bounds_error(format!(
            "lane index must be in bounds: {} not in [0, {})",
            lane, bound
        )));
    }
    Ok(lane as usize)
}

impl<T: Lane, const N: usize> Vector<T, N> {
    /// The number of lanes in the vector.
    pub const LANES: usize = N;

    /// Constructs a vector from exactly `N` lanes.
    #[inline(always)]
    pub fn new(lanes: [T; N]) -> Self {
        Self { lanes }
    }

    /// Constructs a vector with the same value in all lanes.
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self { lanes: [value; N] }
    }

    /// Returns the value in lane `lane`, or a bounds error when the index
    /// is outside `[0, N)`.
    #[inline(always)]
    pub fn extract_lane(&self, lane: i32) -> Result<T> {
        Ok(self.lanes[check_lane_index(lane, N)?])
    }

    /// Returns a new vector equal to `self` except lane `lane`, which
    /// holds `value`.
    #[inline(always)]
    pub fn replace_lane(&self, lane: i32, value: T) -> Result<Self> {
        let lane = check_lane_index(lane, N)?;
        let mut lanes = self.lanes;
        lanes[lane] = value;
        Ok(Self { lanes })
    }

    /// The lanes as an array, in lane order.
    #[inline(always)]
    pub fn to_array(&self) -> [T; N] {
        self.lanes
    }

    /// Borrows the lanes as an array, in lane order.
    #[inline(always)]
    pub fn as_array(&self) -> &[T; N] {
        &self.lanes
    }

    #[inline(always)]
    pub(crate) fn map(&self, f: impl FnMut(T) -> T) -> Self {
        Self {
            lanes: self.lanes.map(f),
        }
    }

    #[inline(always)]
    pub(crate) fn zip_map(&self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        let mut lanes = self.lanes;
        for (a, b) in lanes.iter_mut().zip(rhs.lanes) {
            *a = f(*a, b);
        }
        Self { lanes }
    }

    #[inline(always)]
    fn compare(&self, rhs: Self, mut f: impl FnMut(T, T) -> bool) -> Vector<bool, N> {
        let mut lanes = [false; N];
        for (m, (a, b)) in lanes.iter_mut().zip(self.lanes.iter().zip(rhs.lanes.iter())) {
            *m = f(*a, *b);
        }
        Vector { lanes }
    }

    /// Lane-wise `==`, producing a boolean vector of matching lane count.
    ///
    /// For float kinds a NaN lane compares unequal to everything,
    /// including itself.
    #[inline(always)]
    pub fn equal(&self, rhs: Self) -> Vector<bool, N> {
        self.compare(rhs, |a, b| a == b)
    }

    /// Lane-wise `!=`. The only comparison that is true for NaN lanes.
    #[inline(always)]
    pub fn not_equal(&self, rhs: Self) -> Vector<bool, N> {
        self.compare(rhs, |a, b| a != b)
    }

    /// Whole-lane ternary: each result lane is taken entirely from
    /// `if_true` or `if_false` according to the mask lane.
    #[inline(always)]
    pub fn select(mask: &Vector<bool, N>, if_true: &Self, if_false: &Self) -> Self {
        let mut lanes = if_false.lanes;
        for (i, m) in mask.lanes.iter().enumerate() {
            if *m {
                lanes[i] = if_true.lanes[i];
            }
        }
        Self { lanes }
    }

    /// Builds a vector by picking lanes of `self` in the order given by
    /// `indices`. Repeats and arbitrary reordering are legal; any index
    /// outside `[0, N)` fails with a bounds error before any lane is read.
    pub fn swizzle(&self, indices: [i32; N]) -> Result<Self> {
        let mut resolved = [0usize; N];
        for (slot, &index) in resolved.iter_mut().zip(indices.iter()) {
            *slot = check_lane_index(index, N)?;
        }
        let mut lanes = self.lanes;
        for (lane, &src) in lanes.iter_mut().zip(resolved.iter()) {
            *lane = self.lanes[src];
        }
        Ok(Self { lanes })
    }

    /// Builds a vector by picking lanes of the concatenation of `self` and
    /// `rhs`; indices live in `[0, 2N)`. All indices are validated before
    /// any lane is read, so no partial result is ever produced.
    pub fn shuffle(&self, rhs: &Self, indices: [i32; N]) -> Result<Self> {
        let mut resolved = [0usize; N];
        for (slot, &index) in resolved.iter_mut().zip(indices.iter()) {
            *slot = check_lane_index(index, 2 * N)?;
        }
        let mut lanes = self.lanes;
        for (lane, &src) in lanes.iter_mut().zip(resolved.iter()) {
            *lane = if src < N {
                self.lanes[src]
            } else {
                rhs.lanes[src - N]
            };
        }
        Ok(Self { lanes })
    }
}

impl<T: NumericLane, const N: usize> Vector<T, N> {
    /// Lane-wise addition; integer kinds wrap at lane width.
    #[inline(always)]
    pub fn add(&self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_add)
    }

    /// Lane-wise subtraction; integer kinds wrap at lane width.
    #[inline(always)]
    pub fn sub(&self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_sub)
    }

    /// Lane-wise multiplication. Integer kinds use a true wrapping multiply
    /// at lane width, so 32-bit products past 2^53 stay exact.
    #[inline(always)]
    pub fn mul(&self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_mul)
    }

    /// Lane-wise negation; `i32::MIN` wraps to itself.
    #[inline(always)]
    pub fn neg(&self) -> Self {
        self.map(T::lane_neg)
    }

    /// Lane-wise `<`. False for NaN lanes.
    #[inline(always)]
    pub fn less_than(&self, rhs: Self) -> Vector<bool, N> {
        self.compare(rhs, |a, b| a < b)
    }

    /// Lane-wise `<=`. False for NaN lanes.
    #[inline(always)]
    pub fn less_than_or_equal(&self, rhs: Self) -> Vector<bool, N> {
        self.compare(rhs, |a, b| a <= b)
    }

    /// Lane-wise `>`. False for NaN lanes.
    #[inline(always)]
    pub fn greater_than(&self, rhs: Self) -> Vector<bool, N> {
        self.compare(rhs, |a, b| a > b)
    }

    /// Lane-wise `>=`. False for NaN lanes.
    #[inline(always)]
    pub fn greater_than_or_equal(&self, rhs: Self) -> Vector<bool, N> {
        self.compare(rhs, |a, b| a >= b)
    }
}

impl<T: BitLane, const N: usize> Vector<T, N> {
    /// Lane-wise bitwise (or boolean) conjunction.
    #[inline(always)]
    pub fn and(&self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_and)
    }

    /// Lane-wise bitwise (or boolean) disjunction.
    #[inline(always)]
    pub fn or(&self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_or)
    }

    /// Lane-wise exclusive or.
    #[inline(always)]
    pub fn xor(&self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_xor)
    }

    /// Lane-wise complement.
    #[inline(always)]
    pub fn not(&self) -> Self {
        self.map(T::lane_not)
    }
}

impl<T: NumericLane, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Vector::add(&self, rhs)
    }
}

impl<T: NumericLane, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Vector::sub(&self, rhs)
    }
}

impl<T: NumericLane, const N: usize> Mul for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Vector::mul(&self, rhs)
    }
}

impl<T: NumericLane, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Vector::neg(&self)
    }
}

impl<T: FloatLane, const N: usize> Div for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Vector::div(&self, rhs)
    }
}

impl<T: BitLane, const N: usize> BitAnd for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Vector::and(&self, rhs)
    }
}

impl<T: BitLane, const N: usize> BitOr for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Vector::or(&self, rhs)
    }
}

impl<T: BitLane, const N: usize> BitXor for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Vector::xor(&self, rhs)
    }
}

impl<T: BitLane, const N: usize> Not for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Vector::not(&self)
    }
}

macro_rules! impl_display {
    ($($alias:ty => $name:literal),* $(,)?) => {
        $(
            impl fmt::Display for $alias {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}(", $name)?;
                    for (i, lane) in self.lanes.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", lane)?;
                    }
                    write!(f, ")")
                }
            }
        )*
    };
}

impl_display!(
    B64x2 => "Bool64x2",
    B32x4 => "Bool32x4",
    B16x8 => "Bool16x8",
    B8x16 => "Bool8x16",
    F64x2 => "Float64x2",
    F32x4 => "Float32x4",
    I32x4 => "Int32x4",
    I16x8 => "Int16x8",
    I8x16 => "Int8x16",
);
