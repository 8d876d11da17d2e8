//! Native calling conventions and their target mapping.

use std::fmt;

use tessera_foundation::{Error, Result};
use tessera_tree::CallingConvention;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calling convention as classified by the native front end.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NativeCallingConvention {
    /// The C default.
    C,
    /// `__stdcall`.
    X86StdCall,
    /// `__fastcall`.
    X86FastCall,
    /// `__thiscall`.
    X86ThisCall,
    /// `__pascal`.
    X86Pascal,
    /// `__vectorcall`.
    X86VectorCall,
    /// `__regcall`.
    X86RegCall,
    /// The Microsoft x64 convention.
    Win64,
    /// The System V AMD64 convention.
    X86_64SysV,
    /// ARM AAPCS.
    Aapcs,
    /// ARM AAPCS with VFP registers.
    AapcsVfp,
    /// AArch64 vector PCS.
    AArch64VectorCall,
    /// Swift.
    Swift,
    /// `preserve_most`.
    PreserveMost,
    /// `preserve_all`.
    PreserveAll,
    /// The front end could not classify the convention.
    Unrecognized(String),
}

impl fmt::Display for NativeCallingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(description) => write!(f, "unrecognized ({description})"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Maps a native calling convention onto the target runtime's conventions.
///
/// # Errors
///
/// Every convention without a target equivalent is an error, as is an
/// unrecognized one. Callers must treat either as fatal for the declaration:
/// guessing would corrupt the stack at runtime.
pub fn resolve_calling_convention(native: &NativeCallingConvention) -> Result<CallingConvention> {
    match native {
        NativeCallingConvention::C => Ok(CallingConvention::Cdecl),
        NativeCallingConvention::X86StdCall => Ok(CallingConvention::StdCall),
        NativeCallingConvention::X86FastCall => Ok(CallingConvention::FastCall),
        NativeCallingConvention::X86ThisCall => Ok(CallingConvention::ThisCall),
        NativeCallingConvention::Win64 => Ok(CallingConvention::Winapi),
        NativeCallingConvention::Unrecognized(description) => {
            Err(Error::unrecognized_calling_convention(description.clone()))
        }
        other => Err(Error::unsupported_calling_convention(other.to_string())),
    }
}
