//! Value-return rules.
//!
//! A value-return rule decides whether a function's return value travels
//! through a hidden output pointer instead of registers. Only aggregates are
//! ever returned indirectly; scalars, pointers, and references never are.

use tessera_foundation::TypeReference;

/// Decides how a return value is passed for one target ABI.
pub trait ValueReturnRule: std::fmt::Debug {
    /// Returns true if a value of `return_type` must be returned by reference.
    fn must_return_by_reference(&self, return_type: &TypeReference, is_instance_method: bool) -> bool;
}

/// The Microsoft x64 rule.
///
/// Records come back in RAX only when they are trivial and exactly 1, 2, 4,
/// or 8 bytes. Instance methods always return records indirectly.
#[derive(Clone, Copy, Debug, Default)]
pub struct MicrosoftX64Return;

impl ValueReturnRule for MicrosoftX64Return {
    fn must_return_by_reference(&self, return_type: &TypeReference, is_instance_method: bool) -> bool {
        let Some(layout) = return_type.as_record() else {
            return false;
        };
        is_instance_method || !layout.is_trivial || !matches!(layout.size, 1 | 2 | 4 | 8)
    }
}

/// The Itanium C++ rule on System V x86-64.
///
/// Non-trivial records are always returned indirectly; trivial records only
/// when they do not fit in two eightbytes. The receiver does not matter.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItaniumX64Return;

/// Largest record returned in registers.
const ITANIUM_MAX_REGISTER_RETURN: u64 = 16;

impl ValueReturnRule for ItaniumX64Return {
    fn must_return_by_reference(&self, return_type: &TypeReference, _is_instance_method: bool) -> bool {
        return_type
            .as_record()
            .is_some_and(|layout| !layout.is_trivial || layout.size > ITANIUM_MAX_REGISTER_RETURN)
    }
}
