//! Integration tests for the ABI resolver

use proptest::prelude::*;

use tessera_abi::{
    AbiResolver, CandidateAt, DestructorVariant, FunctionFact, FunctionKind, MemberFacts,
    NativeAccess, NativeCallingConvention, ParameterFact, TargetAbi,
};
use tessera_foundation::{
    AccessModifier, ConstantValue, DeclId, ErrorKind, IdAllocator, PrimitiveType, RecordLayout,
    TypeReference,
};
use tessera_tree::{CallingConvention, Declaration, Function, FunctionOrigin, Severity};

// =============================================================================
// Helper Functions
// =============================================================================

fn function(decl: &Declaration) -> &Function {
    decl.as_function().unwrap()
}

fn resolve(resolver: &AbiResolver, fact: &FunctionFact) -> Declaration {
    resolver.resolve(fact, &IdAllocator::new()).unwrap()
}

fn destructor() -> FunctionFact {
    FunctionFact::free("~Widget", "??1Widget@@QEAA@XZ")
        .with_kind(FunctionKind::Destructor(MemberFacts::public()))
        .with_mangling_candidates(vec![
            "_ZN6WidgetD2Ev".to_string(),
            "_ZN6WidgetD1Ev".to_string(),
            "_ZN6WidgetD0Ev".to_string(),
        ])
}

// =============================================================================
// Free Functions
// =============================================================================

#[test]
fn free_function_defaults() {
    let fact = FunctionFact::free("add", "add")
        .with_kind(FunctionKind::Free {
            access: Some(NativeAccess::Private),
        })
        .returning(TypeReference::Primitive(PrimitiveType::I32));
    let decl = resolve(&AbiResolver::default(), &fact);
    let function = function(&decl);

    assert_eq!(decl.accessibility, AccessModifier::Public);
    assert_eq!(function.origin, FunctionOrigin::Free);
    assert!(!function.is_instance_method);
    assert!(!function.is_virtual);
    assert!(!function.is_const);
    assert!(!function.return_by_reference);
    assert_eq!(function.calling_convention, CallingConvention::Cdecl);
    assert_eq!(function.dll_file_name, "TODO.dll");
}

#[test]
fn parameters_follow_function_identity() {
    let fact = FunctionFact::free("blend", "blend")
        .with_parameter(ParameterFact::new("a", TypeReference::named("Color")))
        .with_parameter(ParameterFact {
            default_value: Some(ConstantValue::Double(0.5)),
            ..ParameterFact::new("t", TypeReference::Primitive(PrimitiveType::F64))
        });
    let ids = IdAllocator::starting_at(10);
    let decl = AbiResolver::default().resolve(&fact, &ids).unwrap();

    assert_eq!(decl.id(), DeclId::new(10));
    let parameters: Vec<_> = decl.children().map(|p| (p.id(), p.name.clone())).collect();
    assert_eq!(
        parameters,
        vec![(DeclId::new(11), "a".to_string()), (DeclId::new(12), "t".to_string())]
    );
    let t = decl.children().nth(1).unwrap().as_parameter().unwrap();
    assert_eq!(t.default_value, Some(ConstantValue::Double(0.5)));
}

// =============================================================================
// Members
// =============================================================================

#[test]
fn member_flags_carry_through() {
    let fact = FunctionFact::free("area", "?area@Shape@@UEBAHXZ").with_kind(FunctionKind::Method(
        MemberFacts {
            access: NativeAccess::Protected,
            is_static: false,
            is_virtual: true,
            is_const: true,
        },
    ));
    let decl = resolve(&AbiResolver::default(), &fact);
    let function = function(&decl);

    assert_eq!(decl.accessibility, AccessModifier::Protected);
    assert!(function.is_instance_method);
    assert!(function.is_virtual);
    assert!(function.is_const);
    assert_eq!(decl.to_string(), "Virtual Method area");
}

#[test]
fn static_member_has_no_receiver() {
    let fact = FunctionFact::free("create", "create").with_kind(FunctionKind::Method(MemberFacts {
        is_static: true,
        ..MemberFacts::public()
    }));
    let decl = resolve(&AbiResolver::default(), &fact);
    assert!(!function(&decl).is_instance_method);
    assert_eq!(decl.to_string(), "Static Method create");
}

#[test]
fn constructor_and_destructor_names() {
    let ctor = FunctionFact::free("Widget", "??0Widget@@QEAA@XZ")
        .with_kind(FunctionKind::Constructor(MemberFacts::public()));
    let resolver = AbiResolver::default();

    assert_eq!(resolve(&resolver, &ctor).name, "Constructor");
    assert_eq!(resolve(&resolver, &destructor()).name, "Destructor");
}

#[test]
fn operator_names() {
    let plus = FunctionFact::free("operator+", "??HVec@@QEBA?AU0@AEBU0@@Z")
        .with_kind(FunctionKind::Method(MemberFacts::public()))
        .with_operator("+");
    let decl = resolve(&AbiResolver::default(), &plus);
    assert_eq!(decl.name, "operator_+");
    assert!(function(&decl).is_operator_overload);

    let to_int = FunctionFact::free("operator int", "??BVec@@QEBAHXZ")
        .with_kind(FunctionKind::ConversionOperator(MemberFacts::public()))
        .returning(TypeReference::Primitive(PrimitiveType::I32));
    let decl = resolve(&AbiResolver::default(), &to_int);
    assert_eq!(decl.name, "____ConversionOperator_int");
    assert_eq!(function(&decl).origin, FunctionOrigin::ConversionOperator);
}

// =============================================================================
// Target Policies
// =============================================================================

#[test]
fn destructor_mangling_per_target() {
    let microsoft = resolve(&AbiResolver::default(), &destructor());
    assert_eq!(function(&microsoft).mangled_name, "_ZN6WidgetD2Ev");

    let itanium = resolve(&AbiResolver::new(TargetAbi::itanium_x64()), &destructor());
    assert_eq!(function(&itanium).mangled_name, "_ZN6WidgetD1Ev");

    let custom = AbiResolver::new(
        TargetAbi::microsoft_x64().with_destructor_mangling(DestructorVariant("D0".to_string())),
    );
    assert_eq!(function(&resolve(&custom, &destructor())).mangled_name, "_ZN6WidgetD0Ev");
}

#[test]
fn itanium_destructor_of_class_named_like_a_variant() {
    let fact = FunctionFact::free("~D1", "_ZN2D1D4Ev")
        .with_kind(FunctionKind::Destructor(MemberFacts::public()))
        .with_mangling_candidates(vec![
            "_ZN2D1D2Ev".to_string(),
            "_ZN2D1D1Ev".to_string(),
            "_ZN2D1D0Ev".to_string(),
        ]);
    let decl = resolve(&AbiResolver::new(TargetAbi::itanium_x64()), &fact);

    assert_eq!(function(&decl).mangled_name, "_ZN2D1D1Ev");
    assert!(decl.diagnostics().is_empty());
}

#[test]
fn destructor_without_candidates_warns() {
    let fact = FunctionFact::free("~Widget", "??1Widget@@QEAA@XZ")
        .with_kind(FunctionKind::Destructor(MemberFacts::public()));
    let resolver =
        AbiResolver::new(TargetAbi::microsoft_x64().with_destructor_mangling(CandidateAt(3)));
    let decl = resolve(&resolver, &fact);

    assert_eq!(function(&decl).mangled_name, "??1Widget@@QEAA@XZ");
    let severities: Vec<_> = decl.diagnostics().iter().map(|d| d.severity).collect();
    assert_eq!(severities, vec![Severity::Warning]);
}

#[test]
fn return_by_reference_differs_between_targets() {
    let pair = TypeReference::Record(RecordLayout::trivial("Pair", 16));
    let method = FunctionFact::free("pair", "pair")
        .with_kind(FunctionKind::Method(MemberFacts::public()))
        .returning(pair.clone());
    let free = FunctionFact::free("make_pair", "make_pair").returning(pair);

    let microsoft = AbiResolver::default();
    let itanium = AbiResolver::new(TargetAbi::itanium_x64());

    assert!(function(&resolve(&microsoft, &method)).return_by_reference);
    assert!(function(&resolve(&microsoft, &free)).return_by_reference);
    assert!(!function(&resolve(&itanium, &method)).return_by_reference);
    assert!(!function(&resolve(&itanium, &free)).return_by_reference);
}

#[test]
fn non_trivial_record_is_always_indirect() {
    let handle = TypeReference::Record(RecordLayout::non_trivial("Handle", 8));
    let fact = FunctionFact::free("open", "open").returning(handle);

    for abi in [TargetAbi::microsoft_x64(), TargetAbi::itanium_x64()] {
        let decl = resolve(&AbiResolver::new(abi), &fact);
        assert!(function(&decl).return_by_reference);
    }
}

// =============================================================================
// Calling Conventions
// =============================================================================

#[test]
fn calling_convention_mapping() {
    let cases = [
        (NativeCallingConvention::C, CallingConvention::Cdecl),
        (NativeCallingConvention::X86StdCall, CallingConvention::StdCall),
        (NativeCallingConvention::X86FastCall, CallingConvention::FastCall),
        (NativeCallingConvention::X86ThisCall, CallingConvention::ThisCall),
        (NativeCallingConvention::Win64, CallingConvention::Winapi),
    ];
    for (native, expected) in cases {
        let fact = FunctionFact::free("f", "f").with_calling_convention(native);
        let decl = resolve(&AbiResolver::default(), &fact);
        assert_eq!(function(&decl).calling_convention, expected);
    }
}

#[test]
fn unsupported_convention_allocates_nothing() {
    let ids = IdAllocator::new();
    let fact =
        FunctionFact::free("f", "f").with_calling_convention(NativeCallingConvention::X86VectorCall);
    let err = AbiResolver::default().resolve(&fact, &ids).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::UnsupportedCallingConvention(_)));
    assert_eq!(err.context.unwrap().declaration.as_deref(), Some("f"));
    assert_eq!(ids.peek(), 0);
}

#[test]
fn unrecognized_convention_is_fatal() {
    let fact = FunctionFact::free("f", "f")
        .with_calling_convention(NativeCallingConvention::Unrecognized("cc 42".to_string()));
    let err = AbiResolver::default()
        .resolve(&fact, &IdAllocator::new())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnrecognizedCallingConvention(_)));
    assert!(err.is_fatal_abi_failure());
}

proptest! {
    #[test]
    fn primitive_returns_are_never_indirect(is_instance: bool, itanium: bool) {
        let kind = if is_instance {
            FunctionKind::Method(MemberFacts::public())
        } else {
            FunctionKind::Free { access: None }
        };
        let abi = if itanium { TargetAbi::itanium_x64() } else { TargetAbi::microsoft_x64() };
        let fact = FunctionFact::free("f", "f")
            .with_kind(kind)
            .returning(TypeReference::Primitive(PrimitiveType::U64));
        let decl = AbiResolver::new(abi).resolve(&fact, &IdAllocator::new()).unwrap();
        prop_assert!(!decl.as_function().unwrap().return_by_reference);
    }
}
