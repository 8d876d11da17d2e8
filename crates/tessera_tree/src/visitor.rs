//! Read-only traversal of declaration trees.
//!
//! Implement the hooks of [`DeclarationVisitor`] you care about and drive the
//! traversal with [`walk_library`], [`walk_file`], or [`walk_declaration`].
//! Every hook receives the ancestor context of the node it is called for.
//!
//! # Example
//!
//! ```
//! use tessera_tree::{Declaration, DeclarationContext, DeclarationVisitor, Library, walk_library};
//!
//! struct ErrorCounter(usize);
//!
//! impl DeclarationVisitor for ErrorCounter {
//!     fn enter_declaration(&mut self, _ctx: &DeclarationContext<'_>, decl: &Declaration) {
//!         if decl.has_errors() {
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let mut counter = ErrorCounter(0);
//! walk_library(&mut counter, &Library::default());
//! assert_eq!(counter.0, 0);
//! ```

use tessera_foundation::DeclId;

use crate::context::DeclarationContext;
use crate::declaration::Declaration;
use crate::library::{Library, TranslatedFile};

/// Trait for read-only declaration visitors.
///
/// The default implementations do nothing.
#[allow(unused_variables)]
pub trait DeclarationVisitor {
    /// Called before the declarations of a file are visited.
    fn enter_file(&mut self, file: &TranslatedFile) {}

    /// Called after the declarations of a file are visited.
    fn leave_file(&mut self, file: &TranslatedFile) {}

    /// Called before a declaration's children are visited.
    fn enter_declaration(&mut self, ctx: &DeclarationContext<'_>, decl: &Declaration) {}

    /// Called after a declaration's children are visited.
    fn leave_declaration(&mut self, ctx: &DeclarationContext<'_>, decl: &Declaration) {}
}

/// Walk every file of a library in order.
pub fn walk_library<V: DeclarationVisitor + ?Sized>(visitor: &mut V, library: &Library) {
    for file in &library.files {
        walk_file(visitor, file);
    }
}

/// Walk the declarations of one file in order.
pub fn walk_file<V: DeclarationVisitor + ?Sized>(visitor: &mut V, file: &TranslatedFile) {
    visitor.enter_file(file);
    let ctx = DeclarationContext::root(&file.path);
    for decl in &file.declarations {
        walk_declaration(visitor, &ctx, decl);
    }
    visitor.leave_file(file);
}

/// Walk a declaration and its descendants depth-first.
///
/// Calls `enter_declaration`, walks the children with a context whose parent
/// is `decl`, then calls `leave_declaration`.
pub fn walk_declaration<V: DeclarationVisitor + ?Sized>(
    visitor: &mut V,
    ctx: &DeclarationContext<'_>,
    decl: &Declaration,
) {
    visitor.enter_declaration(ctx, decl);
    let inner = ctx.enter(decl);
    for child in decl.children() {
        walk_declaration(visitor, &inner, child);
    }
    visitor.leave_declaration(ctx, decl);
}

// =============================================================================
// Utility Visitors
// =============================================================================

/// Collects the identity of every declaration in visit order.
#[derive(Debug, Default)]
pub struct IdCollector {
    /// Collected identities.
    pub ids: Vec<DeclId>,
}

impl DeclarationVisitor for IdCollector {
    fn enter_declaration(&mut self, _ctx: &DeclarationContext<'_>, decl: &Declaration) {
        self.ids.push(decl.id());
    }
}

/// Computes the maximum nesting depth of a tree.
#[derive(Debug, Default)]
pub struct DepthCalculator {
    /// Maximum depth encountered; a lone file-scope declaration has depth 1.
    pub max_depth: usize,
}

impl DeclarationVisitor for DepthCalculator {
    fn enter_declaration(&mut self, ctx: &DeclarationContext<'_>, _decl: &Declaration) {
        self.max_depth = self.max_depth.max(ctx.depth() + 1);
    }
}
