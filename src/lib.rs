//! Tessera - ABI-annotated declarations for native binding generation
//!
//! This crate re-exports all layers of the Tessera system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: tessera_csharp     - C# legality checks, emission filter, reports
//! Layer 3: tessera_pipeline   - Transformations, built-in passes, pipeline
//! Layer 2: tessera_abi        - Native facts, target ABI rules, resolver
//! Layer 1: tessera_tree       - Declarations, diagnostics, library snapshots
//! Layer 0: tessera_foundation - Core types (DeclId, TypeReference, Error)
//! ```

pub use tessera_abi as abi;
pub use tessera_csharp as csharp;
pub use tessera_foundation as foundation;
pub use tessera_pipeline as pipeline;
pub use tessera_tree as tree;
