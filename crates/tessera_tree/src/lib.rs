//! Immutable declaration tree for Tessera.
//!
//! This crate provides:
//! - [`Declaration`] - A closed set of declaration variants sharing identity, name, access, and diagnostics
//! - [`Diagnostics`] - Append-only severity-tagged message lists
//! - [`Library`] - The root snapshot (library → file → declarations) with identity-based replacement
//! - [`DeclarationContext`] - Read-only ancestor path reconstructed during traversal
//! - [`DeclarationVisitor`] - Depth-first read-only traversal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod declaration;
pub mod diagnostic;
pub mod function;
pub mod library;
pub mod visitor;

pub use context::{DeclarationContext, Parents};
pub use declaration::{
    Constant, Declaration, DeclarationKind, Field, LooseContainer, Parameter, ParameterKind, Record,
};
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use function::{CallingConvention, Function, FunctionOrigin};
pub use library::{IngestionFailure, Library, LocatedDiagnostic, TranslatedFile};
pub use visitor::{
    DeclarationVisitor, DepthCalculator, IdCollector, walk_declaration, walk_file, walk_library,
};
