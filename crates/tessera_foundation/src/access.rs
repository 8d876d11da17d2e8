//! Target-language accessibility levels.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Accessibility of a translated declaration.
///
/// All six levels are legal inside an aggregate. Only [`Internal`] and
/// [`Public`] are legal at namespace or file scope; whether a declaration
/// violates that rule is diagnosed by the emitter's verifier, never corrected
/// in place.
///
/// [`Internal`]: AccessModifier::Internal
/// [`Public`]: AccessModifier::Public
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AccessModifier {
    /// Visible only inside the declaring aggregate.
    Private,
    /// Visible to the declaring aggregate and derived aggregates.
    Protected,
    /// Visible inside the emitted module.
    Internal,
    /// Visible to derived aggregates or anywhere in the emitted module.
    ProtectedOrInternal,
    /// Visible to derived aggregates inside the emitted module.
    ProtectedAndInternal,
    /// Visible everywhere.
    Public,
}

impl AccessModifier {
    /// Every access modifier, in declaration order.
    pub const ALL: [AccessModifier; 6] = [
        Self::Private,
        Self::Protected,
        Self::Internal,
        Self::ProtectedOrInternal,
        Self::ProtectedAndInternal,
        Self::Public,
    ];
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Private => "Private",
            Self::Protected => "Protected",
            Self::Internal => "Internal",
            Self::ProtectedOrInternal => "ProtectedOrInternal",
            Self::ProtectedAndInternal => "ProtectedAndInternal",
            Self::Public => "Public",
        };
        f.write_str(name)
    }
}
