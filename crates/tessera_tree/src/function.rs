//! Function declarations and their ABI annotations.

use std::fmt;

use tessera_foundation::{PVec, TypeReference};

use crate::declaration::Declaration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calling convention understood by the target runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CallingConvention {
    /// Caller cleans the stack (`__cdecl`).
    Cdecl,
    /// Callee cleans the stack (`__stdcall`).
    StdCall,
    /// First arguments in registers (`__fastcall`).
    FastCall,
    /// Receiver in a register (`__thiscall`).
    ThisCall,
    /// The platform default (the single x64 Windows convention).
    Winapi,
}

impl fmt::Display for CallingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cdecl => "Cdecl",
            Self::StdCall => "StdCall",
            Self::FastCall => "FastCall",
            Self::ThisCall => "ThisCall",
            Self::Winapi => "Winapi",
        };
        f.write_str(name)
    }
}

/// What kind of native declaration a function was translated from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionOrigin {
    /// A namespace-scope function.
    Free,
    /// An ordinary member function (including member operator overloads).
    Method,
    /// A constructor.
    Constructor,
    /// A destructor.
    Destructor,
    /// A conversion operator (`operator T()`).
    ConversionOperator,
}

impl FunctionOrigin {
    /// Returns true for every member-function origin.
    #[must_use]
    pub const fn is_member(self) -> bool {
        !matches!(self, Self::Free)
    }
}

/// An ABI-annotated function.
///
/// Parameters are stored as [`Declaration`]s of parameter kind so that they
/// carry their own identity and diagnostics; their order is the ABI order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    /// Native declaration kind this function came from.
    pub origin: FunctionOrigin,
    /// Resolved calling convention.
    pub calling_convention: CallingConvention,
    /// Declared return type.
    pub return_type: TypeReference,
    /// Whether the return value travels through a hidden output pointer.
    pub return_by_reference: bool,
    /// Parameters in ABI order.
    pub parameters: PVec<Declaration>,
    /// Whether the function takes an implicit receiver.
    pub is_instance_method: bool,
    /// Whether the function is dispatched through a vtable.
    pub is_virtual: bool,
    /// Whether the receiver is const-qualified.
    pub is_const: bool,
    /// Whether the name was synthesized from an operator.
    pub is_operator_overload: bool,
    /// Name of the native module that exports the symbol.
    pub dll_file_name: String,
    /// Exact exported symbol name.
    pub mangled_name: String,
}

impl Function {
    /// Returns a copy with the given parameter list.
    #[must_use]
    pub fn with_parameters(self, parameters: PVec<Declaration>) -> Self {
        Self { parameters, ..self }
    }

    /// Returns a copy exported from the given module.
    #[must_use]
    pub fn with_dll_file_name(self, dll_file_name: impl Into<String>) -> Self {
        Self {
            dll_file_name: dll_file_name.into(),
            ..self
        }
    }

    /// Describes the function's role, as used when rendering a declaration.
    #[must_use]
    pub fn role(&self) -> &'static str {
        if self.is_virtual {
            "Virtual Method"
        } else if self.is_instance_method {
            "Instance Method"
        } else if self.origin.is_member() {
            "Static Method"
        } else {
            "Function"
        }
    }
}
