//! # softsimd
//!
//! A software emulation of a fixed-width SIMD vector type system: nine
//! small, fixed-lane vector kinds (boolean, 64/32-bit float, 32/16/8-bit
//! integer; lane counts 2/4/8/16) with lane-wise arithmetic, comparison,
//! bitwise logic, shifts, saturating arithmetic, lane permutation,
//! bit-exact reinterpretation between same-width kinds, and bounds-checked
//! load/store into caller-owned byte buffers.
//!
//! This is a scalar emulation layer, not a code generator: no hardware
//! vector instructions are emitted. What it does promise is hardware-exact
//! numeric semantics — two's-complement wraparound, IEEE-754
//! single-precision results, NaN-propagating min/max with NaN-avoiding
//! `min_num`/`max_num` variants, the asymmetric per-width shift-count
//! rules, and byte-identical bitcasts — so results interoperate with code
//! expecting real SIMD output.
//!
//! Every operation is a pure, synchronous function of its inputs; vector
//! values are immutable and `Copy`. Fallible operations (lane indexing,
//! permutation, float→int conversion, memory access) return
//! [`error::Result`] and fail eagerly, before any output is produced.

pub mod bits;
pub mod error;
pub mod kind;
pub mod memory;
pub mod vector;

pub use bits::{bitcast, Bits128};
pub use error::{Result, SimdError};
pub use kind::{AnyVector, Kind};
pub use memory::{BufferElement, MemoryBuffer};
pub use vector::{B16x8, B32x4, B64x2, B8x16, F32x4, F64x2, I16x8, I32x4, I8x16, Vector};
