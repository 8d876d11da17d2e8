//! Integration tests for Layer 3: Pipeline
//!
//! Tests for the transformation traversal, the built-in passes, and ordered
//! pass application over ingested libraries.


use tessera_abi::{
    AbiResolver, DeclarationFact, FileFacts, FunctionFact, FunctionKind, MemberFacts,
    ParameterFact, RecordFact, build_library,
};
use tessera_foundation::{PrimitiveType, RecordLayout, TypeReference};
use tessera_tree::Library;

// =============================================================================
// Helper Functions
// =============================================================================

/// `struct Shape { Shape clone() const; }`, `Shape make(int)`, `int count()`.
fn shapes() -> Library {
    let shape = TypeReference::Record(RecordLayout::trivial("Shape", 24));
    let clone = FunctionFact::free("clone", "?clone@Shape@@QEBA?AU1@XZ")
        .with_kind(FunctionKind::Method(MemberFacts {
            is_const: true,
            ..MemberFacts::public()
        }))
        .returning(shape.clone());
    let record = RecordFact {
        name: "Shape".to_string(),
        access: None,
        size: 24,
        members: vec![DeclarationFact::Function(clone)],
    };
    let make = FunctionFact::free("make", "make")
        .returning(shape)
        .with_parameter(ParameterFact::new(
            "sides",
            TypeReference::Primitive(PrimitiveType::I32),
        ));
    let count = FunctionFact::free("count", "count")
        .returning(TypeReference::Primitive(PrimitiveType::I32));

    let file = FileFacts::new(
        "shape.h",
        vec![
            DeclarationFact::Record(record),
            DeclarationFact::Function(make),
            DeclarationFact::Function(count),
        ],
    );
    build_library(&AbiResolver::default(), &[file])
}
