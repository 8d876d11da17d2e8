//! References to native types.
//!
//! A [`TypeReference`] carries just enough layout information for ABI
//! decisions (size and copy triviality of aggregates); everything else about
//! a native type stays with the front end.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reference to a native type.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeReference {
    /// `void`.
    Void,
    /// A builtin scalar type.
    Primitive(PrimitiveType),
    /// A pointer to another type.
    Pointer(Box<TypeReference>),
    /// A reference to another type.
    Reference(Box<TypeReference>),
    /// A struct, class, or union with known layout.
    Record(RecordLayout),
    /// A named type whose layout is opaque to the core (enums, typedefs, ...).
    Named(String),
}

/// Builtin scalar types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveType {
    /// `bool`.
    Bool,
    /// `char`.
    Char,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 64-bit integer.
    U64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
}

/// Layout facts about an aggregate type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordLayout {
    /// Record name as spelled in the native header.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Whether copying, moving, and destroying the record are all trivial.
    pub is_trivial: bool,
}

impl RecordLayout {
    /// Creates a trivially copyable record layout.
    #[must_use]
    pub fn trivial(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            is_trivial: true,
        }
    }

    /// Creates a layout for a record with user-provided copy, move, or destroy semantics.
    #[must_use]
    pub fn non_trivial(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            is_trivial: false,
        }
    }
}

impl TypeReference {
    /// Creates a pointer to the given type.
    #[must_use]
    pub fn pointer(pointee: TypeReference) -> Self {
        Self::Pointer(Box::new(pointee))
    }

    /// Creates a reference to the given type.
    #[must_use]
    pub fn reference(referent: TypeReference) -> Self {
        Self::Reference(Box::new(referent))
    }

    /// Creates a named opaque type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns true if this is `void`.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns the record layout if this is an aggregate.
    #[must_use]
    pub fn as_record(&self) -> Option<&RecordLayout> {
        match self {
            Self::Record(layout) => Some(layout),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "int8_t",
            Self::U8 => "uint8_t",
            Self::I16 => "int16_t",
            Self::U16 => "uint16_t",
            Self::I32 => "int",
            Self::U32 => "unsigned int",
            Self::I64 => "int64_t",
            Self::U64 => "uint64_t",
            Self::F32 => "float",
            Self::F64 => "double",
        };
        f.write_str(name)
    }
}

impl fmt::Debug for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Primitive(primitive) => write!(f, "{primitive}"),
            Self::Pointer(pointee) => write!(f, "{pointee:?}*"),
            Self::Reference(referent) => write!(f, "{referent:?}&"),
            Self::Record(layout) => write!(f, "{}", layout.name),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
