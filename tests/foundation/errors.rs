//! Integration tests for Error types
//!
//! Tests error construction, display, context, and fatality.

use tessera_foundation::{DeclId, Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn unsupported_calling_convention_is_fatal() {
    let err = Error::unsupported_calling_convention("Swift");
    assert!(matches!(err.kind, ErrorKind::UnsupportedCallingConvention(_)));
    assert!(err.is_fatal_abi_failure());
    assert_eq!(err.to_string(), "the Swift calling convention is not supported");
}

#[test]
fn unrecognized_calling_convention_is_fatal() {
    let err = Error::unrecognized_calling_convention("cc 99");
    assert!(err.is_fatal_abi_failure());
    assert!(err.to_string().contains("cc 99"));
}

#[test]
fn structural_errors_are_not_abi_failures() {
    assert!(!Error::declaration_not_found(DeclId::new(3)).is_fatal_abi_failure());
    assert!(!Error::invalid_child("Function f", "Record R").is_fatal_abi_failure());
}

#[test]
fn invalid_child_message() {
    let err = Error::invalid_child("Function f", "Record R");
    assert_eq!(err.to_string(), "Function f cannot contain Record R");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_lists_parents_nearest_first() {
    let context = ErrorContext::new()
        .with_file("widget.h")
        .with_declaration("Widget::Inner::draw")
        .with_parent("Inner")
        .with_parent("Widget");
    let err = Error::unsupported_calling_convention("Swift").with_context(context);

    let context = err.context.as_ref().unwrap();
    assert_eq!(context.parents, vec!["Inner".to_string(), "Widget".to_string()]);

    let rendered = context.to_string();
    assert!(rendered.starts_with("in Widget::Inner::draw (widget.h)"));
    let inner = rendered.find("within Inner").unwrap();
    let outer = rendered.find("within Widget").unwrap();
    assert!(inner < outer);
}
