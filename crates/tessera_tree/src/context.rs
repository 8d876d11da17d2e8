//! Ancestor context for traversals.
//!
//! Declarations never store a reference to their parent. Instead, every
//! traversal builds a chain of [`DeclarationContext`] values on the stack as it
//! descends, one link per enclosing declaration. A context borrows the
//! declarations it names, so it cannot outlive the traversal that built it.

use crate::declaration::Declaration;

/// Read-only view of the declarations enclosing the node being visited.
#[derive(Clone, Copy, Debug)]
pub struct DeclarationContext<'a> {
    file: &'a str,
    parent: Option<&'a Declaration>,
    outer: Option<&'a DeclarationContext<'a>>,
    depth: usize,
}

impl<'a> DeclarationContext<'a> {
    /// Creates the context for declarations at file scope.
    #[must_use]
    pub fn root(file: &'a str) -> Self {
        Self {
            file,
            parent: None,
            outer: None,
            depth: 0,
        }
    }

    /// Creates the context for the children of `parent`.
    #[must_use]
    pub fn enter<'b>(&'b self, parent: &'b Declaration) -> DeclarationContext<'b>
    where
        'a: 'b,
    {
        DeclarationContext {
            file: self.file,
            parent: Some(parent),
            outer: Some(self),
            depth: self.depth + 1,
        }
    }

    /// Path of the file the declarations came from.
    #[must_use]
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The nearest enclosing declaration, or `None` at file scope.
    #[must_use]
    pub fn parent(&self) -> Option<&'a Declaration> {
        self.parent
    }

    /// Iterates the enclosing declarations, nearest first.
    #[must_use]
    pub fn parents(&self) -> Parents<'a> {
        Parents {
            current: self.parent,
            outer: self.outer,
        }
    }

    /// Number of enclosing declarations.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true at namespace/file scope.
    #[must_use]
    pub fn is_namespace_scope(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns true if the parent can host fields and methods.
    ///
    /// Only records and synthesized loose containers qualify; a function
    /// anywhere else cannot be emitted as a method.
    #[must_use]
    pub fn is_valid_field_or_method_context(&self) -> bool {
        self.parent
            .is_some_and(|parent| parent.is_record() || parent.is_loose_container())
    }
}

/// Iterator over enclosing declarations, nearest first.
#[derive(Clone, Debug)]
pub struct Parents<'a> {
    current: Option<&'a Declaration>,
    outer: Option<&'a DeclarationContext<'a>>,
}

impl<'a> Iterator for Parents<'a> {
    type Item = &'a Declaration;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        if let Some(outer) = self.outer {
            self.current = outer.parent;
            self.outer = outer.outer;
        }
        Some(current)
    }
}
