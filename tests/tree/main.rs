//! Integration tests for Layer 1: Tree
//!
//! Tests for declarations, diagnostics, library snapshots, and traversal.

mod diagnostics;
mod traversal;

use tessera_foundation::{AccessModifier, DeclId, PVec, PrimitiveType, TypeReference};
use tessera_tree::{
    CallingConvention, Declaration, DeclarationKind, Field, Function, FunctionOrigin, Library,
    Record, TranslatedFile,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn function(id: u64, name: &str, parameters: Vec<Declaration>) -> Declaration {
    Declaration::new(
        DeclId::new(id),
        name,
        AccessModifier::Public,
        DeclarationKind::Function(Function {
            origin: FunctionOrigin::Method,
            calling_convention: CallingConvention::Cdecl,
            return_type: TypeReference::Void,
            return_by_reference: false,
            parameters: parameters.into(),
            is_instance_method: true,
            is_virtual: false,
            is_const: false,
            is_operator_overload: false,
            dll_file_name: "lib.dll".to_string(),
            mangled_name: name.to_string(),
        }),
    )
}

fn field(id: u64, name: &str) -> Declaration {
    Declaration::new(
        DeclId::new(id),
        name,
        AccessModifier::Private,
        DeclarationKind::Field(Field {
            ty: TypeReference::Primitive(PrimitiveType::I32),
            offset: 0,
        }),
    )
}

fn record(id: u64, name: &str, members: Vec<Declaration>) -> Declaration {
    Declaration::new(
        DeclId::new(id),
        name,
        AccessModifier::Public,
        DeclarationKind::Record(Record {
            members: members.into(),
            size: 4,
        }),
    )
}

/// Widget { value; draw(canvas, scale) } in one file, ids 0..=4.
fn sample_library() -> Library {
    let int = TypeReference::Primitive(PrimitiveType::I32);
    let draw = function(
        2,
        "draw",
        vec![
            Declaration::parameter(DeclId::new(3), "canvas", TypeReference::named("Canvas")),
            Declaration::parameter(DeclId::new(4), "scale", int),
        ],
    );
    let widget = record(0, "Widget", vec![field(1, "value"), draw]);
    let file = TranslatedFile::new("widget.h", vec![widget].into());
    Library::new(vec![file].into(), PVec::new(), 5)
}
