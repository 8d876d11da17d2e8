//! Error types for the Tessera system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Errors are reserved for hard failures. Problems that only affect whether a
//! single declaration can be emitted are recorded as diagnostics on that
//! declaration instead.

use std::fmt;

use thiserror::Error;

use crate::identity::DeclId;

/// Result alias used throughout Tessera.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tessera operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a calling convention the target ABI has no mapping for.
    #[must_use]
    pub fn unsupported_calling_convention(convention: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedCallingConvention(convention.into()))
    }

    /// Creates an error for a calling convention the front end could not classify.
    #[must_use]
    pub fn unrecognized_calling_convention(description: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnrecognizedCallingConvention(description.into()))
    }

    /// Creates a declaration not found error.
    #[must_use]
    pub fn declaration_not_found(id: DeclId) -> Self {
        Self::new(ErrorKind::DeclarationNotFound(id))
    }

    /// Creates an error for a replacement that would change a declaration's identity.
    #[must_use]
    pub fn identity_mismatch(expected: DeclId, actual: DeclId) -> Self {
        Self::new(ErrorKind::IdentityMismatch { expected, actual })
    }

    /// Creates an error for a child that cannot live under the given parent.
    #[must_use]
    pub fn invalid_child(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidChild {
            parent: parent.into(),
            child: child.into(),
        })
    }

    /// Creates an error for an identity that occurs twice in one tree.
    #[must_use]
    pub fn duplicate_identity(id: DeclId) -> Self {
        Self::new(ErrorKind::DuplicateIdentity(id))
    }

    /// Creates an error for a declaration whose diagnostics did not survive a rewrite.
    #[must_use]
    pub fn diagnostics_dropped(id: DeclId) -> Self {
        Self::new(ErrorKind::DiagnosticsDropped(id))
    }

    /// Returns true if this error aborts ABI resolution of a declaration.
    #[must_use]
    pub fn is_fatal_abi_failure(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnsupportedCallingConvention(_) | ErrorKind::UnrecognizedCallingConvention(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The native calling convention is known but has no target mapping.
    #[error("the {0} calling convention is not supported")]
    UnsupportedCallingConvention(String),

    /// The front end could not classify the native calling convention.
    #[error("unrecognized calling convention: {0}")]
    UnrecognizedCallingConvention(String),

    /// No declaration with the given identity exists in the tree.
    #[error("declaration not found: {0:?}")]
    DeclarationNotFound(DeclId),

    /// A replacement carried a different identity than the node it replaces.
    #[error("identity mismatch: expected {expected:?}, got {actual:?}")]
    IdentityMismatch {
        /// The identity being replaced.
        expected: DeclId,
        /// The identity carried by the replacement.
        actual: DeclId,
    },

    /// A rewrite produced a child the parent kind cannot hold.
    #[error("{parent} cannot contain {child}")]
    InvalidChild {
        /// Description of the parent declaration.
        parent: String,
        /// Description of the rejected child.
        child: String,
    },

    /// One identity occurs at more than one place in a generation.
    #[error("duplicate identity: {0:?}")]
    DuplicateIdentity(DeclId),

    /// A derived declaration lost diagnostics its predecessor carried.
    #[error("diagnostics of {0:?} were dropped or reordered")]
    DiagnosticsDropped(DeclId),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file the declaration came from.
    pub file: Option<String>,
    /// Name of the declaration being processed.
    pub declaration: Option<String>,
    /// Enclosing declarations, nearest first.
    pub parents: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets the declaration name.
    #[must_use]
    pub fn with_declaration(mut self, name: impl Into<String>) -> Self {
        self.declaration = Some(name.into());
        self
    }

    /// Adds an enclosing declaration.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(declaration) = &self.declaration {
            write!(f, "in {declaration}")?;
        }
        if let Some(file) = &self.file {
            write!(f, " ({file})")?;
        }
        if !self.parents.is_empty() {
            writeln!(f)?;
            for parent in &self.parents {
                writeln!(f, "  within {parent}")?;
            }
        }
        Ok(())
    }
}
