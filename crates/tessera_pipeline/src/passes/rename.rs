//! Closure-driven renaming.

use tessera_tree::{Declaration, DeclarationContext};

use crate::context::TransformationContext;
use crate::transformation::{Rewrite, Transformation};

/// Renames declarations chosen by a closure.
///
/// The closure sees each declaration with its ancestor context and returns
/// the new name, or `None` to keep the current one. Identity is preserved.
pub struct RenameDeclarations<F> {
    name: String,
    rename: F,
}

impl<F> RenameDeclarations<F>
where
    F: FnMut(&DeclarationContext<'_>, &Declaration) -> Option<String>,
{
    /// Creates a rename pass reported under `name`.
    pub fn new(name: impl Into<String>, rename: F) -> Self {
        Self {
            name: name.into(),
            rename,
        }
    }
}

impl<F> Transformation for RenameDeclarations<F>
where
    F: FnMut(&DeclarationContext<'_>, &Declaration) -> Option<String>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn transform_declaration(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
    ) -> Rewrite {
        match (self.rename)(&**ctx, decl) {
            Some(name) => decl.clone().with_name(name).into(),
            None => decl.clone().into(),
        }
    }
}

impl<F> std::fmt::Debug for RenameDeclarations<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenameDeclarations")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
