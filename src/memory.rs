//! Bounds-checked load/store between vectors and caller-owned buffers.
//!
//! The interop boundary is the [`MemoryBuffer`] trait: a byte-addressable
//! store declaring an element width (1/2/4/8 bytes) and a byte length. The
//! engine never owns the buffer and touches only the validated byte range.
//! Slices of the eight typed element kinds (`i8`/`u8`/`i16`/`u16`/`i32`/
//! `u32`/`f32`/`f64`) implement the trait out of the box.
//!
//! Transfers move raw bytes between the buffer and the vector's lane image
//! (native byte order), staged through a call-local array. Validation is
//! eager and ordered — buffer kind, then index, then bounds — and every
//! failure happens before a single byte moves, so no partial read or write
//! is ever observable.

use crate::bits::Bits128;
use crate::error::{bounds_error, kind_error, Result};
use crate::vector::{F32x4, F64x2, I16x8, I32x4, I8x16};

/// A scalar element kind a buffer can declare.
pub trait BufferElement: Copy + Default {
    /// Element width in bytes.
    const WIDTH: usize;

    /// Writes the element's native byte image into `dst`
    /// (`dst.len() == WIDTH`).
    fn write_to(self, dst: &mut [u8]);

    /// Reads an element back from its native byte image
    /// (`src.len() == WIDTH`).
    fn read_from(src: &[u8]) -> Self;
}

macro_rules! impl_buffer_element {
    ($($t:ty => $width:expr),* $(,)?) => {
        $(
            impl BufferElement for $t {
                const WIDTH: usize = $width;

                #[inline(always)]
                fn write_to(self, dst: &mut [u8]) {
                    dst.copy_from_slice(&self.to_ne_bytes());
                }

                #[inline(always)]
                fn read_from(src: &[u8]) -> Self {
                    let mut raw = [0u8; $width];
                    raw.copy_from_slice(src);
                    <$t>::from_ne_bytes(raw)
                }
            }
        )*
    };
}

impl_buffer_element!(
    i8 => 1,
    u8 => 1,
    i16 => 2,
    u16 => 2,
    i32 => 4,
    u32 => 4,
    f32 => 4,
    f64 => 8,
);

/// A caller-owned byte-addressable buffer the engine can load from and
/// store into. The engine is agnostic to the backing storage.
pub trait MemoryBuffer {
    /// Declared element width in bytes; must be 1, 2, 4 or 8 for the
    /// engine to accept the buffer.
    fn element_width(&self) -> usize;

    /// Total length in bytes.
    fn byte_length(&self) -> usize;

    /// Copies `dst.len()` bytes starting at `byte_offset` into `dst`.
    /// The engine only calls this with a validated in-bounds range.
    fn read_bytes(&self, byte_offset: usize, dst: &mut [u8]);

    /// Writes `src` at `byte_offset`. A range covering only a prefix of
    /// the final element must leave that element's remaining bytes
    /// untouched.
    fn write_bytes(&mut self, byte_offset: usize, src: &[u8]);
}

impl<T: BufferElement> MemoryBuffer for [T] {
    fn element_width(&self) -> usize {
        T::WIDTH
    }

    fn byte_length(&self) -> usize {
        self.len() * T::WIDTH
    }

    fn read_bytes(&self, byte_offset: usize, dst: &mut [u8]) {
        let mut image = [0u8; 8];
        for (i, byte) in dst.iter_mut().enumerate() {
            let pos = byte_offset + i;
            self[pos / T::WIDTH].write_to(&mut image[..T::WIDTH]);
            *byte = image[pos % T::WIDTH];
        }
    }

    fn write_bytes(&mut self, byte_offset: usize, src: &[u8]) {
        // Read-modify-write per element so a partial store into a wider
        // element rewrites only the covered prefix.
        let mut image = [0u8; 8];
        for (i, &byte) in src.iter().enumerate() {
            let pos = byte_offset + i;
            let element = pos / T::WIDTH;
            self[element].write_to(&mut image[..T::WIDTH]);
            image[pos % T::WIDTH] = byte;
            self[element] = T::read_from(&image[..T::WIDTH]);
        }
    }
}

/// Validates buffer kind, index and byte range, in that order, and returns
/// the starting byte offset.
fn checked_byte_offset<B: MemoryBuffer + ?Sized>(
    buffer: &B,
    index: i32,
    required: usize,
) -> Result<usize> {
    let width = buffer.element_width();
    if !matches!(width, 1 | 2 | 4 | 8) {
        return Err(kind_error(format!(
            "buffer element width must be 1, 2, 4 or 8 bytes, got {}",
            width
        )));
    }
    if index < 0 {
        return Err(bounds_error(format!("buffer index must be >= 0, got {}", index)));
    }
    let offset = index as usize * width;
    if offset + required > buffer.byte_length() {
        return Err(bounds_error(format!(
            "byte range {}..{} exceeds buffer length {}",
            offset,
            offset + required,
            buffer.byte_length()
        )));
    }
    Ok(offset)
}

/// Reads `required` bytes at element `index` into a zero-filled staging
/// image.
fn load_bytes<B: MemoryBuffer + ?Sized>(
    buffer: &B,
    index: i32,
    required: usize,
) -> Result<[u8; 16]> {
    let offset = checked_byte_offset(buffer, index, required)?;
    let mut staging = [0u8; 16];
    buffer.read_bytes(offset, &mut staging[..required]);
    Ok(staging)
}

/// Writes `data` at element `index`, all or nothing.
fn store_bytes<B: MemoryBuffer + ?Sized>(buffer: &mut B, index: i32, data: &[u8]) -> Result<()> {
    let offset = checked_byte_offset(buffer, index, data.len())?;
    buffer.write_bytes(offset, data);
    Ok(())
}

macro_rules! impl_load_store {
    ($alias:ty { $(($load:ident, $store:ident, $bytes:expr)),* $(,)? }) => {
        impl $alias {
            /// Loads all lanes from `buffer` starting at element `index`.
            /// Bytes are reinterpreted, not numerically converted.
            pub fn load<B: MemoryBuffer + ?Sized>(buffer: &B, index: i32) -> Result<Self> {
                Ok(Self::from_bytes(load_bytes(buffer, index, 16)?))
            }

            /// Stores all lanes into `buffer` starting at element `index`.
            pub fn store<B: MemoryBuffer + ?Sized>(
                &self,
                buffer: &mut B,
                index: i32,
            ) -> Result<()> {
                store_bytes(buffer, index, &self.to_bytes())
            }

            $(
                /// Loads a lane prefix from `buffer` at element `index`;
                /// lanes beyond the prefix are zero-filled.
                pub fn $load<B: MemoryBuffer + ?Sized>(
                    buffer: &B,
                    index: i32,
                ) -> Result<Self> {
                    Ok(Self::from_bytes(load_bytes(buffer, index, $bytes)?))
                }

                /// Stores a lane prefix into `buffer` at element `index`;
                /// the rest of the buffer is left untouched.
                pub fn $store<B: MemoryBuffer + ?Sized>(
                    &self,
                    buffer: &mut B,
                    index: i32,
                ) -> Result<()> {
                    store_bytes(buffer, index, &self.to_bytes()[..$bytes])
                }
            )*
        }
    };
}

impl_load_store!(F32x4 {
    (load1, store1, 4),
    (load2, store2, 8),
    (load3, store3, 12),
});

impl_load_store!(F64x2 {
    (load1, store1, 8),
});

impl_load_store!(I32x4 {
    (load1, store1, 4),
    (load2, store2, 8),
    (load3, store3, 12),
});

impl_load_store!(I16x8 {});

impl_load_store!(I8x16 {});

#[cfg(test)]
mod tests {
    use super::*;

    struct OddBuffer;

    impl MemoryBuffer for OddBuffer {
        fn element_width(&self) -> usize {
            3
        }

        fn byte_length(&self) -> usize {
            48
        }

        fn read_bytes(&self, _byte_offset: usize, _dst: &mut [u8]) {
            unreachable!("validation must reject the buffer first")
        }

        fn write_bytes(&mut self, _byte_offset: usize, _src: &[u8]) {
            unreachable!("validation must reject the buffer first")
        }
    }

    #[test]
    fn test_unrecognized_element_width_is_kind_error() {
        let err = F32x4::load(&OddBuffer, 0).unwrap_err();
        assert!(format!("{}", err).contains("Kind error"));
    }

    #[test]
    fn test_validation_order_kind_before_bounds() {
        // Even a wildly out-of-range index reports the kind failure first.
        let err = F32x4::load(&OddBuffer, -5).unwrap_err();
        assert!(format!("{}", err).contains("Kind error"));
    }

    #[test]
    fn test_slice_buffer_geometry() {
        let floats = [0.0f32; 4];
        assert_eq!(floats.as_slice().element_width(), 4);
        assert_eq!(floats.as_slice().byte_length(), 16);
        let bytes = [0u8; 3];
        assert_eq!(bytes.as_slice().byte_length(), 3);
    }

    #[test]
    fn test_negative_index_is_bounds_error() {
        let floats = [0.0f32; 8];
        let err = F32x4::load(floats.as_slice(), -1).unwrap_err();
        assert!(format!("{}", err).contains("Bounds error"));
    }
}
