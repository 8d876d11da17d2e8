//! Selecting the declarations that reach emitted source.

use tessera_foundation::PVec;
use tessera_tree::{Declaration, Library};

/// Returns every declaration the emitter should write, depth-first in order.
///
/// A declaration with an Error diagnostic is skipped along with its whole
/// subtree; it stays in the library and in the [`DiagnosticReport`].
///
/// [`DiagnosticReport`]: crate::DiagnosticReport
#[must_use]
pub fn emittable(library: &Library) -> Vec<&Declaration> {
    let mut out = Vec::new();
    for file in &library.files {
        collect(&file.declarations, &mut out);
    }
    out
}

fn collect<'a>(list: &'a PVec<Declaration>, out: &mut Vec<&'a Declaration>) {
    for declaration in list {
        if declaration.has_errors() {
            tracing::trace!(id = %declaration.id(), name = %declaration.name, "skipping errored declaration");
            continue;
        }
        out.push(declaration);
        if let Some(children) = declaration.child_list() {
            collect(children, out);
        }
    }
}
