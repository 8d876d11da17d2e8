//! Context handed to transformation hooks.

use std::ops::Deref;

use tessera_foundation::{DeclId, IdAllocator};
use tessera_tree::{Declaration, DeclarationContext};

/// Read-only ancestor path plus an identity source for new nodes.
///
/// Dereferences to [`DeclarationContext`], so ancestor queries such as
/// `parent()` and `is_namespace_scope()` are available directly. Like the
/// declaration context it wraps, it lives only for the traversal that built it.
#[derive(Clone, Copy, Debug)]
pub struct TransformationContext<'a> {
    scope: DeclarationContext<'a>,
    ids: &'a IdAllocator,
}

impl<'a> TransformationContext<'a> {
    /// Creates the context for the file-scope declarations of `file`.
    #[must_use]
    pub fn root(file: &'a str, ids: &'a IdAllocator) -> Self {
        Self {
            scope: DeclarationContext::root(file),
            ids,
        }
    }

    /// Creates the context for the children of `parent`.
    #[must_use]
    pub fn enter<'b>(&'b self, parent: &'b Declaration) -> TransformationContext<'b>
    where
        'a: 'b,
    {
        TransformationContext {
            scope: self.scope.enter(parent),
            ids: self.ids,
        }
    }

    /// Allocates an identity for a node the pass is inserting.
    ///
    /// Never use this to re-identify an existing declaration.
    #[must_use]
    pub fn fresh_id(&self) -> DeclId {
        self.ids.allocate()
    }

    /// The identity source shared by this traversal.
    #[must_use]
    pub fn ids(&self) -> &'a IdAllocator {
        self.ids
    }
}

impl<'a> Deref for TransformationContext<'a> {
    type Target = DeclarationContext<'a>;

    fn deref(&self) -> &Self::Target {
        &self.scope
    }
}
