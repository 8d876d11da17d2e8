//! ABI resolution for Tessera.
//!
//! This crate turns facts about native declarations into ABI-annotated
//! declarations:
//! - [`facts`] - What the parsing front end must supply
//! - [`AbiResolver`] - Calling convention, access/virtuality, return-by-reference, and name resolution
//! - [`TargetAbi`] - The replaceable per-ABI policies (value-return rule, destructor mangling selection)
//! - [`build_library`] - Ingestion of whole files into a [`tessera_tree::Library`]
//!
//! An unrecognized calling convention is fatal for the declaration being
//! resolved: it is returned as an error and the declaration never enters the
//! tree.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calling_convention;
pub mod facts;
pub mod ingest;
pub mod mangling;
pub mod resolver;
pub mod return_abi;
pub mod target;

pub use calling_convention::{NativeCallingConvention, resolve_calling_convention};
pub use facts::{
    ConstantFact, DeclarationFact, FieldFact, FileFacts, FunctionFact, FunctionKind, MemberFacts,
    NativeAccess, NativeFunction, ParameterFact, RecordFact,
};
pub use ingest::build_library;
pub use mangling::{CandidateAt, DestructorManglingPolicy, DestructorVariant};
pub use resolver::{AbiResolver, CONSTRUCTOR_NAME, DEFAULT_DLL_FILE_NAME, DESTRUCTOR_NAME};
pub use return_abi::{ItaniumX64Return, MicrosoftX64Return, ValueReturnRule};
pub use target::{TargetAbi, TargetAbiKind};
