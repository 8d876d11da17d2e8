//! Core types and persistent collections for Tessera.
//!
//! This crate provides:
//! - [`DeclId`] - Stable declaration identity tokens that survive rewrites
//! - [`TypeReference`] - Native type references with the layout facts the ABI needs
//! - [`ConstantValue`] - Literal values attached to constants and parameter defaults
//! - [`AccessModifier`] - Target-language accessibility levels
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`PVec`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod access;
pub mod collections;
pub mod constant;
pub mod error;
pub mod identity;
pub mod types;

pub use access::AccessModifier;
pub use collections::PVec;
pub use constant::ConstantValue;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use identity::{DeclId, IdAllocator};
pub use types::{PrimitiveType, RecordLayout, TypeReference};
