//! C# builtin types inferred from literal constants.

use std::fmt;

use tessera_foundation::ConstantValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The C# builtin types a literal can be given.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CSharpBuiltinType {
    /// `sbyte`.
    SByte,
    /// `byte`.
    Byte,
    /// `short`.
    Short,
    /// `ushort`.
    UShort,
    /// `int`.
    Int,
    /// `uint`.
    UInt,
    /// `long`.
    Long,
    /// `ulong`.
    ULong,
    /// `float`.
    Float,
    /// `double`.
    Double,
    /// `string`.
    String,
    /// `nint`.
    NativeInt,
}

impl CSharpBuiltinType {
    /// The C# keyword for this type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::SByte => "sbyte",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::NativeInt => "nint",
        }
    }
}

impl fmt::Display for CSharpBuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Infers the C# type of a literal.
///
/// Integers of width 8, 16, 32, or 64 map to the matching sized type;
/// any other width has no inferred type. A null pointer is a `nint`.
#[must_use]
pub fn infer_type(value: &ConstantValue) -> Option<CSharpBuiltinType> {
    match value {
        ConstantValue::Integer {
            size_bits,
            is_signed,
            ..
        } => match (*size_bits, *is_signed) {
            (8, true) => Some(CSharpBuiltinType::SByte),
            (8, false) => Some(CSharpBuiltinType::Byte),
            (16, true) => Some(CSharpBuiltinType::Short),
            (16, false) => Some(CSharpBuiltinType::UShort),
            (32, true) => Some(CSharpBuiltinType::Int),
            (32, false) => Some(CSharpBuiltinType::UInt),
            (64, true) => Some(CSharpBuiltinType::Long),
            (64, false) => Some(CSharpBuiltinType::ULong),
            _ => None,
        },
        ConstantValue::Float(_) => Some(CSharpBuiltinType::Float),
        ConstantValue::Double(_) => Some(CSharpBuiltinType::Double),
        ConstantValue::String(_) => Some(CSharpBuiltinType::String),
        ConstantValue::NullPointer => Some(CSharpBuiltinType::NativeInt),
    }
}
