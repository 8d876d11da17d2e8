//! The transformation trait and its default traversal.
//!
//! A [`Transformation`] reads one library generation and produces the next.
//! It never sees sibling passes and never mutates its input; everything it
//! knows about where a node sits comes from the [`TransformationContext`].
//!
//! Traversal is pre-order. A hook rewrites a node first; the node's children
//! are then transformed with the *rewritten* node as their parent, so a pass
//! that inserts a parameter also visits it.
//!
//! # Example
//!
//! ```
//! use tessera_pipeline::{Rewrite, Transformation, TransformationContext};
//! use tessera_tree::{Declaration, Function};
//!
//! /// Marks every virtual method with a warning.
//! struct FlagVirtuals;
//!
//! impl Transformation for FlagVirtuals {
//!     fn name(&self) -> &str {
//!         "flag-virtuals"
//!     }
//!
//!     fn transform_function(
//!         &mut self,
//!         _ctx: &TransformationContext<'_>,
//!         decl: &Declaration,
//!         function: &Function,
//!     ) -> Rewrite {
//!         if function.is_virtual {
//!             decl.clone().with_warning("virtual dispatch is not bound").into()
//!         } else {
//!             decl.clone().into()
//!         }
//!     }
//! }
//! ```

use tessera_foundation::{IdAllocator, PVec, Result};
use tessera_tree::{
    Constant, Declaration, DeclarationKind, Field, Function, Library, LooseContainer, Parameter,
    Record, TranslatedFile,
};

use crate::context::TransformationContext;

/// What a hook produces in place of the node it was given.
#[derive(Clone, Debug)]
pub enum Rewrite {
    /// Remove the node and its subtree.
    Delete,
    /// Replace the node with one declaration (usually a derived copy).
    Single(Declaration),
    /// Replace the node with several declarations, in order.
    ///
    /// At most one of them may keep the node's identity; the others need
    /// fresh identities from the context. [`Pipeline`] rejects a generation
    /// that repeats an identity.
    ///
    /// [`Pipeline`]: crate::Pipeline
    Many(Vec<Declaration>),
}

impl From<Declaration> for Rewrite {
    fn from(declaration: Declaration) -> Self {
        Self::Single(declaration)
    }
}

impl IntoIterator for Rewrite {
    type Item = Declaration;
    type IntoIter = std::vec::IntoIter<Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Delete => Vec::new().into_iter(),
            Self::Single(declaration) => vec![declaration].into_iter(),
            Self::Many(declarations) => declarations.into_iter(),
        }
    }
}

/// A pure rewrite pass.
///
/// Each hook receives a node and returns what should stand in its place.
/// Default implementations keep the node unchanged while the traversal
/// recurses into its children.
#[allow(unused_variables)]
pub trait Transformation {
    /// Name used in logs and pipeline reports.
    fn name(&self) -> &str;

    /// Transform a whole library generation.
    ///
    /// # Errors
    ///
    /// Fails if a rewrite puts a child under a parent that cannot hold it.
    fn transform_library(&mut self, library: &Library, ids: &IdAllocator) -> Result<Library> {
        transform_library(self, library, ids)
    }

    /// Transform one file.
    ///
    /// # Errors
    ///
    /// Fails if a rewrite puts a child under a parent that cannot hold it.
    fn transform_file(&mut self, file: &TranslatedFile, ids: &IdAllocator) -> Result<TranslatedFile> {
        transform_file(self, file, ids)
    }

    /// Transform one declaration, dispatching on its variant.
    fn transform_declaration(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
    ) -> Rewrite {
        match &decl.kind {
            DeclarationKind::Function(function) => self.transform_function(ctx, decl, function),
            DeclarationKind::Parameter(parameter) => self.transform_parameter(ctx, decl, parameter),
            DeclarationKind::Record(record) => self.transform_record(ctx, decl, record),
            DeclarationKind::Field(field) => self.transform_field(ctx, decl, field),
            DeclarationKind::Constant(constant) => self.transform_constant(ctx, decl, constant),
            DeclarationKind::LooseContainer(container) => {
                self.transform_loose_container(ctx, decl, container)
            }
        }
    }

    /// Transform a function.
    fn transform_function(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        function: &Function,
    ) -> Rewrite {
        decl.clone().into()
    }

    /// Transform a parameter.
    fn transform_parameter(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        parameter: &Parameter,
    ) -> Rewrite {
        decl.clone().into()
    }

    /// Transform a record.
    fn transform_record(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        record: &Record,
    ) -> Rewrite {
        decl.clone().into()
    }

    /// Transform a field.
    fn transform_field(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        field: &Field,
    ) -> Rewrite {
        decl.clone().into()
    }

    /// Transform a constant.
    fn transform_constant(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        constant: &Constant,
    ) -> Rewrite {
        decl.clone().into()
    }

    /// Transform a synthesized loose container.
    fn transform_loose_container(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        container: &LooseContainer,
    ) -> Rewrite {
        decl.clone().into()
    }
}

/// Transform every file of `library`, in order.
///
/// # Errors
///
/// Propagates structural errors from [`transform_file`].
pub fn transform_library<T: Transformation + ?Sized>(
    transformation: &mut T,
    library: &Library,
    ids: &IdAllocator,
) -> Result<Library> {
    let files = library
        .files
        .iter()
        .map(|file| transformation.transform_file(file, ids))
        .collect::<Result<PVec<_>>>()?;
    Ok(library.clone().with_files(files))
}

/// Transform the file-scope declarations of `file` and everything below them.
///
/// # Errors
///
/// Propagates structural errors from [`transform_children`].
pub fn transform_file<T: Transformation + ?Sized>(
    transformation: &mut T,
    file: &TranslatedFile,
    ids: &IdAllocator,
) -> Result<TranslatedFile> {
    let ctx = TransformationContext::root(&file.path, ids);
    let declarations = transform_children(transformation, &ctx, &file.declarations)?;
    Ok(file.clone().with_declarations(declarations))
}

/// Transform a list of siblings that share the context `ctx`.
///
/// Sibling order is preserved; a [`Rewrite::Many`] is spliced in place.
///
/// # Errors
///
/// Fails if a rewritten node receives children it cannot hold.
pub fn transform_children<T: Transformation + ?Sized>(
    transformation: &mut T,
    ctx: &TransformationContext<'_>,
    siblings: &PVec<Declaration>,
) -> Result<PVec<Declaration>> {
    let mut out = Vec::with_capacity(siblings.len());
    for decl in siblings {
        for rewritten in transformation.transform_declaration(ctx, decl) {
            out.push(transform_descendants(transformation, ctx, rewritten)?);
        }
    }
    Ok(out.into())
}

/// Transform one declaration and its subtree.
///
/// # Errors
///
/// Fails if a rewritten node receives children it cannot hold.
pub fn transform_declaration<T: Transformation + ?Sized>(
    transformation: &mut T,
    ctx: &TransformationContext<'_>,
    decl: &Declaration,
) -> Result<Vec<Declaration>> {
    transformation
        .transform_declaration(ctx, decl)
        .into_iter()
        .map(|rewritten| transform_descendants(transformation, ctx, rewritten))
        .collect()
}

fn transform_descendants<T: Transformation + ?Sized>(
    transformation: &mut T,
    ctx: &TransformationContext<'_>,
    decl: Declaration,
) -> Result<Declaration> {
    let children = match decl.child_list() {
        Some(children) => {
            let inner = ctx.enter(&decl);
            transform_children(transformation, &inner, children)?
        }
        None => return Ok(decl),
    };
    decl.with_children(children)
}
