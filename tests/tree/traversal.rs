//! Integration tests for read-only traversal
//!
//! Function parameters are children like any other and every node sees its
//! ancestors nearest first.

use tessera_foundation::DeclId;
use tessera_tree::{
    Declaration, DeclarationContext, DeclarationVisitor, DepthCalculator, IdCollector,
    walk_library,
};

use crate::sample_library;

#[derive(Default)]
struct PathRecorder {
    paths: Vec<(String, Vec<String>)>,
}

impl DeclarationVisitor for PathRecorder {
    fn enter_declaration(&mut self, ctx: &DeclarationContext<'_>, decl: &Declaration) {
        let parents = ctx.parents().map(|parent| parent.name.clone()).collect();
        self.paths.push((decl.name.clone(), parents));
    }
}

#[test]
fn visits_parameters_with_ancestors() {
    let mut recorder = PathRecorder::default();
    walk_library(&mut recorder, &sample_library());

    let expected: Vec<(String, Vec<String>)> = vec![
        ("Widget".into(), vec![]),
        ("value".into(), vec!["Widget".into()]),
        ("draw".into(), vec!["Widget".into()]),
        ("canvas".into(), vec!["draw".into(), "Widget".into()]),
        ("scale".into(), vec!["draw".into(), "Widget".into()]),
    ];
    assert_eq!(recorder.paths, expected);
}

#[derive(Default)]
struct ScopeRecorder {
    namespace_scope: Vec<DeclId>,
    member_context: Vec<DeclId>,
}

impl DeclarationVisitor for ScopeRecorder {
    fn enter_declaration(&mut self, ctx: &DeclarationContext<'_>, decl: &Declaration) {
        if ctx.is_namespace_scope() {
            self.namespace_scope.push(decl.id());
        }
        if ctx.is_valid_field_or_method_context() {
            self.member_context.push(decl.id());
        }
    }
}

#[test]
fn scope_queries() {
    let mut recorder = ScopeRecorder::default();
    walk_library(&mut recorder, &sample_library());

    assert_eq!(recorder.namespace_scope, vec![DeclId::new(0)]);
    // Parameters sit under a function, which is not a member context.
    assert_eq!(recorder.member_context, vec![DeclId::new(1), DeclId::new(2)]);
}

#[test]
fn builtin_visitors_from_crate_root() {
    let library = sample_library();

    let mut ids = IdCollector::default();
    walk_library(&mut ids, &library);
    assert_eq!(ids.ids, (0..5).map(DeclId::new).collect::<Vec<_>>());

    // Widget > draw > parameter.
    let mut depth = DepthCalculator::default();
    walk_library(&mut depth, &library);
    assert_eq!(depth.max_depth, 3);
}
