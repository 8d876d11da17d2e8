//! Per-declaration diagnostics.
//!
//! Every declaration owns an ordered list of diagnostics. The list only ever
//! grows: adding a diagnostic returns a new list containing every earlier
//! entry in its original order plus the new one at the end. Nothing is merged,
//! deduplicated, reordered, or removed.

use std::fmt;

use tessera_foundation::PVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How serious a diagnostic is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// Informational; the declaration is still emitted.
    Warning,
    /// The declaration is excluded from emission but stays in the tree.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// Severity of the message.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Ordered, append-only list of diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics(PVec<Diagnostic>);

impl Diagnostics {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new list with the diagnostic appended.
    #[must_use]
    pub fn add(&self, severity: Severity, message: impl Into<String>) -> Self {
        Self(self.0.push_back(Diagnostic::new(severity, message)))
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if any diagnostic has [`Severity::Error`].
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    /// Iterates diagnostics in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Iterates diagnostics of one severity, in the order they were added.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(move |d| d.severity == severity)
    }

    /// Returns true if `earlier` is a prefix of this list, so this list could
    /// have been reached from `earlier` by appending only.
    #[must_use]
    pub fn extends(&self, earlier: &Self) -> bool {
        self.len() >= earlier.len() && self.0.iter().zip(earlier.iter()).all(|(a, b)| a == b)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = tessera_foundation::collections::PVecIter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.0).into_iter()
    }
}
