//! Bit-exact reinterpretation between same-width vector kinds.
//!
//! A bitcast produces a vector of another 128-bit kind whose concatenated
//! lane bytes, in lane order and native byte order, are identical to the
//! source's. Lanes stage through a call-local 16-byte array, so the
//! operation is reentrant and thread-safe. Bool kinds have no byte layout
//! and no bitcast target.

use crate::vector::{F32x4, F64x2, I16x8, I32x4, I8x16};

/// A vector kind with a defined 128-bit byte layout.
pub trait Bits128: Sized {
    /// Serializes the lanes in lane order, native byte order.
    fn to_bytes(&self) -> [u8; 16];

    /// Rebuilds a vector from 16 bytes, reading lanes in lane order.
    fn from_bytes(bytes: [u8; 16]) -> Self;
}

macro_rules! impl_bits128 {
    ($($alias:ty => $scalar:ty, $lanes:expr, $width:expr);* $(;)?) => {
        $(
            impl Bits128 for $alias {
                fn to_bytes(&self) -> [u8; 16] {
                    let mut staging = [0u8; 16];
                    for (i, lane) in self.to_array().iter().enumerate() {
                        staging[i * $width..(i + 1) * $width]
                            .copy_from_slice(&lane.to_ne_bytes());
                    }
                    staging
                }

                fn from_bytes(bytes: [u8; 16]) -> Self {
                    let mut lanes = [<$scalar>::default(); $lanes];
                    for (i, lane) in lanes.iter_mut().enumerate() {
                        let mut raw = [0u8; $width];
                        raw.copy_from_slice(&bytes[i * $width..(i + 1) * $width]);
                        *lane = <$scalar>::from_ne_bytes(raw);
                    }
                    Self::new(lanes)
                }
            }
        )*
    };
}

impl_bits128!(
    F64x2 => f64, 2, 8;
    F32x4 => f32, 4, 4;
    I32x4 => i32, 4, 4;
    I16x8 => i16, 8, 2;
    I8x16 => i8, 16, 1;
);

/// Reinterprets `value` as another 128-bit kind without numeric
/// conversion; the byte image is preserved exactly.
#[inline(always)]
pub fn bitcast<Src: Bits128, Dst: Bits128>(value: &Src) -> Dst {
    Dst::from_bytes(value.to_bytes())
}

macro_rules! impl_bit_converters {
    ($alias:ty { $($name:ident: $src:ty),* $(,)? }) => {
        impl $alias {
            $(
                /// Bit-wise reinterpretation of the source vector; see
                /// [`bitcast`].
                #[inline(always)]
                pub fn $name(v: &$src) -> Self {
                    bitcast(v)
                }
            )*
        }
    };
}

impl_bit_converters!(F64x2 {
    from_f32x4_bits: F32x4,
    from_i32x4_bits: I32x4,
    from_i16x8_bits: I16x8,
    from_i8x16_bits: I8x16,
});

impl_bit_converters!(F32x4 {
    from_f64x2_bits: F64x2,
    from_i32x4_bits: I32x4,
    from_i16x8_bits: I16x8,
    from_i8x16_bits: I8x16,
});

impl_bit_converters!(I32x4 {
    from_f64x2_bits: F64x2,
    from_f32x4_bits: F32x4,
    from_i16x8_bits: I16x8,
    from_i8x16_bits: I8x16,
});

impl_bit_converters!(I16x8 {
    from_f64x2_bits: F64x2,
    from_f32x4_bits: F32x4,
    from_i32x4_bits: I32x4,
    from_i8x16_bits: I8x16,
});

impl_bit_converters!(I8x16 {
    from_f64x2_bits: F64x2,
    from_f32x4_bits: F32x4,
    from_i32x4_bits: I32x4,
    from_i16x8_bits: I16x8,
});
