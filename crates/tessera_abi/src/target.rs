//! Target ABI selection.

use std::fmt;

use crate::mangling::{CandidateAt, DestructorManglingPolicy, DestructorVariant};
use crate::return_abi::{ItaniumX64Return, MicrosoftX64Return, ValueReturnRule};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The native ABIs Tessera knows policies for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetAbiKind {
    /// MSVC on x64 Windows.
    #[default]
    MicrosoftX64,
    /// Itanium C++ ABI on System V x86-64.
    ItaniumX64,
}

impl fmt::Display for TargetAbiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MicrosoftX64 => f.write_str("microsoft-x64"),
            Self::ItaniumX64 => f.write_str("itanium-x64"),
        }
    }
}

/// The replaceable ABI policies used by the resolver.
#[derive(Debug)]
pub struct TargetAbi {
    kind: TargetAbiKind,
    value_return: Box<dyn ValueReturnRule>,
    destructor_mangling: Box<dyn DestructorManglingPolicy>,
}

impl TargetAbi {
    /// Creates the default policies for `kind`.
    #[must_use]
    pub fn new(kind: TargetAbiKind) -> Self {
        match kind {
            TargetAbiKind::MicrosoftX64 => Self {
                kind,
                value_return: Box::new(MicrosoftX64Return),
                destructor_mangling: Box::new(CandidateAt::default()),
            },
            TargetAbiKind::ItaniumX64 => Self {
                kind,
                value_return: Box::new(ItaniumX64Return),
                destructor_mangling: Box::new(DestructorVariant::itanium_complete_object()),
            },
        }
    }

    /// Microsoft x64 policies.
    #[must_use]
    pub fn microsoft_x64() -> Self {
        Self::new(TargetAbiKind::MicrosoftX64)
    }

    /// Itanium x64 policies.
    #[must_use]
    pub fn itanium_x64() -> Self {
        Self::new(TargetAbiKind::ItaniumX64)
    }

    /// Replaces the value-return rule.
    #[must_use]
    pub fn with_value_return(mut self, rule: impl ValueReturnRule + 'static) -> Self {
        self.value_return = Box::new(rule);
        self
    }

    /// Replaces the destructor mangling policy.
    #[must_use]
    pub fn with_destructor_mangling(mut self, policy: impl DestructorManglingPolicy + 'static) -> Self {
        self.destructor_mangling = Box::new(policy);
        self
    }

    /// Which ABI the policies started from.
    #[must_use]
    pub fn kind(&self) -> TargetAbiKind {
        self.kind
    }

    /// The value-return rule.
    #[must_use]
    pub fn value_return(&self) -> &dyn ValueReturnRule {
        self.value_return.as_ref()
    }

    /// The destructor mangling policy.
    #[must_use]
    pub fn destructor_mangling(&self) -> &dyn DestructorManglingPolicy {
        self.destructor_mangling.as_ref()
    }
}

impl Default for TargetAbi {
    fn default() -> Self {
        Self::new(TargetAbiKind::default())
    }
}

impl From<TargetAbiKind> for TargetAbi {
    fn from(kind: TargetAbiKind) -> Self {
        Self::new(kind)
    }
}
