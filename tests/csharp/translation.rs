//! Integration tests for end-to-end translation

use tessera_abi::{
    ConstantFact, DeclarationFact, FileFacts, FunctionFact, FunctionKind, MemberFacts,
    NativeAccess, NativeCallingConvention, RecordFact,
};
use tessera_csharp::{DiagnosticReport, emittable, translate};
use tessera_foundation::{ConstantValue, RecordLayout, TypeReference};
use tessera_pipeline::TranslationConfig;
use tessera_tree::{Declaration, Severity};

fn facts() -> Vec<FileFacts> {
    let pair = TypeReference::Record(RecordLayout::trivial("Pair", 16));
    let hidden = RecordFact {
        name: "Detail".to_string(),
        access: Some(NativeAccess::Private),
        size: 1,
        members: Vec::new(),
    };
    let get = FunctionFact::free("get", "?get@Box@@QEBA?AUPair@@XZ")
        .with_kind(FunctionKind::Method(MemberFacts::public()))
        .returning(pair.clone());
    let boxed = RecordFact {
        name: "Box".to_string(),
        access: None,
        size: 16,
        members: vec![DeclarationFact::Function(get)],
    };
    vec![FileFacts::new(
        "box.h",
        vec![
            DeclarationFact::Record(hidden),
            DeclarationFact::Record(boxed),
            DeclarationFact::Function(FunctionFact::free("make_pair", "make_pair").returning(pair)),
            DeclarationFact::Constant(ConstantFact {
                name: "HUGE".to_string(),
                value: ConstantValue::unsigned(1, 128),
            }),
            DeclarationFact::Function(
                FunctionFact::free("vec", "vec")
                    .with_calling_convention(NativeCallingConvention::X86VectorCall),
            ),
        ],
    )]
}

fn names<'a>(declarations: &[&'a Declaration]) -> Vec<&'a str> {
    declarations.iter().map(|d| d.name.as_str()).collect()
}

#[test]
fn errored_declarations_stay_in_tree_and_report() {
    let output = translate(&TranslationConfig::default(), &facts()).unwrap();
    let library = &output.library;

    let emitted = emittable(library);
    assert_eq!(
        names(&emitted),
        vec!["Box", "get", "__returnBuffer", "Globals", "make_pair", "__returnBuffer"]
    );

    let file = library.files.first().unwrap();
    let top: Vec<_> = file.declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(top, vec!["Detail", "Box", "Globals"]);

    let report = DiagnosticReport::from_library(library);
    assert_eq!(report.error_count(), 2);
    assert_eq!(report.failure_count(), 1);
    assert!(report.has_errors());

    let errored: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.diagnostic.severity == Severity::Error)
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(errored, vec!["Detail", "HUGE"]);
    assert_eq!(report.failures[0].declaration, "vec");
}

#[test]
fn itanium_returns_small_pairs_in_registers() {
    let output = translate(&TranslationConfig::itanium_x64(), &facts()).unwrap();
    let emitted = emittable(&output.library);
    assert_eq!(names(&emitted), vec!["Box", "get", "Globals", "make_pair"]);
}

#[test]
fn minimal_config_skips_verification() {
    let output = translate(&TranslationConfig::minimal(), &facts()).unwrap();
    let report = DiagnosticReport::from_library(&output.library);

    assert_eq!(report.error_count(), 0);
    assert_eq!(output.passes_applied, vec!["move-loose-declarations".to_string()]);
}

#[test]
fn report_renders_summary_last() {
    let output = translate(&TranslationConfig::default(), &facts()).unwrap();
    let rendered = DiagnosticReport::from_library(&output.library).to_string();
    assert_eq!(rendered.lines().last(), Some("1 fatal, 2 errors, 0 warnings"));
    assert!(rendered.contains("box.h: fatal: vec:"));
}
