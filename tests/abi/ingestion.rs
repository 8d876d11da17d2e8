//! Integration tests for file ingestion

use tessera_abi::{
    AbiResolver, ConstantFact, DeclarationFact, FieldFact, FileFacts, FunctionFact, FunctionKind,
    MemberFacts, NativeAccess, NativeCallingConvention, RecordFact, build_library,
};
use tessera_foundation::{AccessModifier, ConstantValue, DeclId, PrimitiveType, TypeReference};
use tessera_tree::IngestionFailure;

fn widget_file() -> FileFacts {
    let blit = FunctionFact::free("Blit", "Blit")
        .with_kind(FunctionKind::Method(MemberFacts::public()))
        .with_calling_convention(NativeCallingConvention::Swift);
    let draw = FunctionFact::free("Draw", "?Draw@Widget@@QEAAXXZ")
        .with_kind(FunctionKind::Method(MemberFacts::public()));
    let widget = RecordFact {
        name: "Widget".to_string(),
        access: None,
        size: 4,
        members: vec![
            DeclarationFact::Field(FieldFact {
                name: "id".to_string(),
                access: NativeAccess::Private,
                ty: TypeReference::Primitive(PrimitiveType::I32),
                offset: 0,
            }),
            DeclarationFact::Function(blit),
            DeclarationFact::Function(draw),
        ],
    };
    FileFacts::new(
        "widget.h",
        vec![
            DeclarationFact::Record(widget),
            DeclarationFact::Constant(ConstantFact {
                name: "MAX_WIDGETS".to_string(),
                value: ConstantValue::signed(64, 32),
            }),
        ],
    )
}

#[test]
fn identities_follow_source_order() {
    let library = build_library(&AbiResolver::default(), &[widget_file()]);

    let names: Vec<_> = (0..4)
        .map(|i| library.find(DeclId::new(i)).unwrap().name.clone())
        .collect();
    assert_eq!(names, vec!["Widget", "id", "Draw", "MAX_WIDGETS"]);
    assert_eq!(library.id_allocator().peek(), 4);
}

#[test]
fn failed_function_is_recorded_not_inserted() {
    let library = build_library(&AbiResolver::default(), &[widget_file()]);

    let failures: Vec<IngestionFailure> = library.failures.iter().cloned().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].file, "widget.h");
    assert_eq!(failures[0].declaration, "Widget::Blit");
    assert!(failures[0].reason.contains("Swift"));

    let widget = library.find(DeclId::new(0)).unwrap();
    let members: Vec<_> = widget.children().map(|d| d.name.as_str()).collect();
    assert_eq!(members, vec!["id", "Draw"]);
}

#[test]
fn access_is_translated() {
    let library = build_library(&AbiResolver::default(), &[widget_file()]);

    assert_eq!(
        library.find(DeclId::new(0)).unwrap().accessibility,
        AccessModifier::Public
    );
    assert_eq!(
        library.find(DeclId::new(1)).unwrap().accessibility,
        AccessModifier::Private
    );
    assert_eq!(
        library.find(DeclId::new(3)).unwrap().accessibility,
        AccessModifier::Public
    );
}

#[test]
fn files_keep_their_order() {
    let second = FileFacts::new(
        "util.h",
        vec![DeclarationFact::Function(FunctionFact::free("clamp", "clamp"))],
    );
    let library = build_library(&AbiResolver::default(), &[widget_file(), second]);

    let paths: Vec<_> = library.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["widget.h", "util.h"]);
    assert_eq!(library.find(DeclId::new(4)).unwrap().name, "clamp");
}

#[test]
fn dll_name_is_stamped() {
    let resolver = AbiResolver::default().with_dll_file_name("widgets.dll");
    let library = build_library(&resolver, &[widget_file()]);
    let draw = library.find(DeclId::new(2)).unwrap().as_function().unwrap();
    assert_eq!(draw.dll_file_name, "widgets.dll");
}
