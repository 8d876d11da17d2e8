//! Integration tests for diagnostics
//!
//! Diagnostics are append-only and keep insertion order across rewrites.

use tessera_foundation::DeclId;
use tessera_tree::{Diagnostics, Severity};

use crate::{field, sample_library};

#[test]
fn append_order_is_kept() {
    let decl = field(0, "x")
        .with_warning("first")
        .with_error("second")
        .with_warning("third");

    let messages: Vec<_> = decl.diagnostics().iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert!(decl.has_errors());
}

#[test]
fn adding_leaves_original_untouched() {
    let empty = Diagnostics::new();
    let one = empty.add(Severity::Warning, "careful");

    assert!(empty.is_empty());
    assert_eq!(one.len(), 1);
    assert!(!one.has_errors());
}

#[test]
fn filter_by_severity() {
    let diagnostics = Diagnostics::new()
        .add(Severity::Warning, "a")
        .add(Severity::Error, "b")
        .add(Severity::Warning, "c");

    let warnings: Vec<_> = diagnostics
        .with_severity(Severity::Warning)
        .map(|d| d.message.clone())
        .collect();
    assert_eq!(warnings, vec!["a".to_string(), "c".to_string()]);
}

#[test]
fn diagnostics_survive_replacement_of_other_nodes() {
    let library = sample_library();
    let warned = library
        .find(DeclId::new(1))
        .unwrap()
        .clone()
        .with_warning("unused");
    let library = library.replace(DeclId::new(1), warned).unwrap();

    let renamed = library
        .find(DeclId::new(2))
        .unwrap()
        .clone()
        .with_name("paint");
    let library = library.replace(DeclId::new(2), renamed).unwrap();

    let located = library.all_diagnostics();
    assert_eq!(located.len(), 1);
    assert_eq!(located[0].declaration, DeclId::new(1));
    assert_eq!(located[0].file, "widget.h");
}
