//! Literal constant values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A literal value attached to a constant declaration or a parameter default.
///
/// Integer constants carry their native bit width and signedness so the
/// emitter can infer a matching target type. Widths other than 8, 16, 32, and
/// 64 are representable (bit-fields, `__int128`) but have no inferred type.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstantValue {
    /// An integer literal.
    Integer {
        /// The raw bits, zero- or sign-extended to 64 bits.
        value: u64,
        /// Width of the native integer type in bits.
        size_bits: u32,
        /// Whether the native type is signed.
        is_signed: bool,
    },
    /// A 32-bit floating point literal.
    Float(f32),
    /// A 64-bit floating point literal.
    Double(f64),
    /// A string literal.
    String(String),
    /// `nullptr` / `NULL`.
    NullPointer,
}

impl ConstantValue {
    /// Creates a signed integer constant.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn signed(value: i64, size_bits: u32) -> Self {
        Self::Integer {
            value: value as u64,
            size_bits,
            is_signed: true,
        }
    }

    /// Creates an unsigned integer constant.
    #[must_use]
    pub fn unsigned(value: u64, size_bits: u32) -> Self {
        Self::Integer {
            value,
            size_bits,
            is_signed: false,
        }
    }
}

impl fmt::Debug for ConstantValue {
    #[allow(clippy::cast_possible_wrap)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer {
                value,
                size_bits,
                is_signed: true,
            } => write!(f, "{}i{size_bits}", *value as i64),
            Self::Integer {
                value,
                size_bits,
                is_signed: false,
            } => write!(f, "{value}u{size_bits}"),
            Self::Float(value) => write!(f, "{value}f"),
            Self::Double(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value:?}"),
            Self::NullPointer => write!(f, "nullptr"),
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
