//! Boolean lane vectors.
//!
//! The logic ops (`and`/`or`/`xor`/`not`) and comparisons come from the
//! generic engine; this module adds the reductions.

use super::Vector;

impl<const N: usize> Vector<bool, N> {
    /// True when every lane holds a true value.
    #[inline(always)]
    pub fn all_true(&self) -> bool {
        self.as_array().iter().all(|&lane| lane)
    }

    /// True when any lane holds a true value.
    #[inline(always)]
    pub fn any_true(&self) -> bool {
        self.as_array().iter().any(|&lane| lane)
    }
}
