//! C# emission support for Tessera.
//!
//! This crate owns what the C# emitter needs from the core:
//! - [`access`] - Access modifier keywords and namespace-scope legality
//! - [`CSharpBuiltinType`] - Type inference for literal constants
//! - [`TranslationVerifier`] - The pass that diagnoses C#-illegal declarations
//! - [`emittable`] - Which declarations survive into emitted source
//! - [`DiagnosticReport`] - Every diagnostic and ingestion failure of a run
//! - [`translate`] - Ingestion followed by the configured pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod access;
pub mod emit;
pub mod report;
pub mod translate;
pub mod types;
pub mod verifier;

pub use access::{access_keyword, is_allowed_in_namespace_scope};
pub use emit::emittable;
pub use report::DiagnosticReport;
pub use translate::{csharp_pipeline, translate};
pub use types::{CSharpBuiltinType, infer_type};
pub use verifier::TranslationVerifier;
