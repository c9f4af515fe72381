//! Dynamic kind tags and the runtime checker.
//!
//! Statically typed call sites get kind safety from the type system; this
//! module carries the dynamic form for heterogeneous contexts. [`AnyVector`]
//! is a tagged union over the nine concrete kinds, and `TryFrom<AnyVector>`
//! per kind is the `check` operation: it fails with a kind error unless the
//! payload is the expected kind, and otherwise hands the value back
//! unchanged.

use std::fmt;

use crate::error::{kind_error, SimdError};
use crate::vector::{B16x8, B32x4, B64x2, B8x16, F32x4, F64x2, I16x8, I32x4, I8x16};

/// The element kind and lane count of a vector, as a runtime tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool64x2,
    Bool32x4,
    Bool16x8,
    Bool8x16,
    Float64x2,
    Float32x4,
    Int32x4,
    Int16x8,
    Int8x16,
}

impl Kind {
    /// The number of lanes of this kind.
    pub fn lane_count(self) -> usize {
        match self {
            Kind::Bool64x2 | Kind::Float64x2 => 2,
            Kind::Bool32x4 | Kind::Float32x4 | Kind::Int32x4 => 4,
            Kind::Bool16x8 | Kind::Int16x8 => 8,
            Kind::Bool8x16 | Kind::Int8x16 => 16,
        }
    }

    /// The width of one lane in bits.
    pub fn lane_bits(self) -> usize {
        128 / self.lane_count()
    }

    /// The kind's canonical name ("Float32x4", ...).
    pub fn name(self) -> &'static str {
        match self {
            Kind::Bool64x2 => "Bool64x2",
            Kind::Bool32x4 => "Bool32x4",
            Kind::Bool16x8 => "Bool16x8",
            Kind::Bool8x16 => "Bool8x16",
            Kind::Float64x2 => "Float64x2",
            Kind::Float32x4 => "Float32x4",
            Kind::Int32x4 => "Int32x4",
            Kind::Int16x8 => "Int16x8",
            Kind::Int8x16 => "Int8x16",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A vector value of any kind, tagged for dynamic dispatch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AnyVector {
    B64x2(B64x2),
    B32x4(B32x4),
    B16x8(B16x8),
    B8x16(B8x16),
    F64x2(F64x2),
    F32x4(F32x4),
    I32x4(I32x4),
    I16x8(I16x8),
    I8x16(I8x16),
}

impl AnyVector {
    /// The kind tag of the wrapped value.
    pub fn kind(&self) -> Kind {
        match self {
            AnyVector::B64x2(_) => Kind::Bool64x2,
            AnyVector::B32x4(_) => Kind::Bool32x4,
            AnyVector::B16x8(_) => Kind::Bool16x8,
            AnyVector::B8x16(_) => Kind::Bool8x16,
            AnyVector::F64x2(_) => Kind::Float64x2,
            AnyVector::F32x4(_) => Kind::Float32x4,
            AnyVector::I32x4(_) => Kind::Int32x4,
            AnyVector::I16x8(_) => Kind::Int16x8,
            AnyVector::I8x16(_) => Kind::Int8x16,
        }
    }
}

macro_rules! impl_any_vector {
    ($($variant:ident => $alias:ty, $kind:ident);* $(;)?) => {
        $(
            impl $alias {
                /// The runtime kind tag of this vector type.
                pub const KIND: Kind = Kind::$kind;
            }

            impl From<$alias> for AnyVector {
                fn from(v: $alias) -> Self {
                    AnyVector::$variant(v)
                }
            }

            impl TryFrom<AnyVector> for $alias {
                type Error = SimdError;

                /// The `check` operation: validation, not cloning — the
                /// vector comes back unchanged when the kind matches.
                fn try_from(any: AnyVector) -> Result<Self, SimdError> {
                    match any {
                        AnyVector::$variant(v) => Ok(v),
                        other => Err(kind_error(format!(
                            "argument is not a {}: found {}",
                            Kind::$kind,
                            other.kind()
                        ))),
                    }
                }
            }
        )*
    };
}

impl_any_vector!(
    B64x2 => B64x2, Bool64x2;
    B32x4 => B32x4, Bool32x4;
    B16x8 => B16x8, Bool16x8;
    B8x16 => B8x16, Bool8x16;
    F64x2 => F64x2, Float64x2;
    F32x4 => F32x4, Float32x4;
    I32x4 => I32x4, Int32x4;
    I16x8 => I16x8, Int16x8;
    I8x16 => I8x16, Int8x16;
);
