//! The transformation pipeline for Tessera.
//!
//! This crate provides:
//! - [`Transformation`] - A pure rewrite pass over one library generation
//! - [`TransformationContext`] - Ancestor path and fresh identities for a pass
//! - [`Pipeline`] - Ordered application of passes, one generation per pass
//! - [`TranslationConfig`] - Target ABI, naming, and pass selection
//! - [`passes`] - The built-in passes
//!
//! # Example
//!
//! ```
//! use tessera_pipeline::{Pipeline, passes::RenameDeclarations};
//! use tessera_tree::Library;
//!
//! let mut pipeline = Pipeline::new().with_pass(RenameDeclarations::new(
//!     "uppercase",
//!     |_ctx, decl| Some(decl.name.to_uppercase()),
//! ));
//! let output = pipeline.run(Library::default()).unwrap();
//! assert_eq!(output.passes_applied, vec!["uppercase".to_string()]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod context;
pub mod passes;
pub mod pipeline;
pub mod transformation;

pub use config::TranslationConfig;
pub use context::TransformationContext;
pub use pipeline::{Pipeline, PipelineOutput};
pub use transformation::{
    Rewrite, Transformation, transform_children, transform_declaration, transform_file,
    transform_library,
};
