//! The library root and identity-based tree operations.
//!
//! A [`Library`] is one immutable generation of the translated tree. Clone is
//! O(1) thanks to the persistent vectors underneath; every operation that
//! changes something returns a new `Library` and leaves the receiver intact.

use std::collections::{HashMap, HashSet};

use tessera_foundation::{DeclId, Error, ErrorKind, IdAllocator, PVec, Result};

use crate::declaration::Declaration;
use crate::diagnostic::Diagnostic;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declarations translated from one native source file.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TranslatedFile {
    /// Path of the native file.
    pub path: String,
    /// File-scope declarations in source order.
    pub declarations: PVec<Declaration>,
}

impl TranslatedFile {
    /// Creates a file.
    pub fn new(path: impl Into<String>, declarations: PVec<Declaration>) -> Self {
        Self {
            path: path.into(),
            declarations,
        }
    }

    /// Returns a copy with new file-scope declarations.
    #[must_use]
    pub fn with_declarations(self, declarations: PVec<Declaration>) -> Self {
        Self {
            declarations,
            ..self
        }
    }
}

/// A declaration that never entered the tree because ABI resolution failed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IngestionFailure {
    /// File the declaration came from.
    pub file: String,
    /// Native name of the declaration.
    pub declaration: String,
    /// Why resolution failed.
    pub reason: String,
}

/// A diagnostic together with the declaration that owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocatedDiagnostic {
    /// File the owning declaration lives in.
    pub file: String,
    /// Identity of the owning declaration.
    pub declaration: DeclId,
    /// Current name of the owning declaration.
    pub name: String,
    /// The diagnostic itself.
    pub diagnostic: Diagnostic,
}

/// Root of one tree generation.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Library {
    /// Translated files in ingestion order.
    pub files: PVec<TranslatedFile>,
    /// Declarations rejected during ingestion.
    pub failures: PVec<IngestionFailure>,
    next_id: u64,
}

impl Library {
    /// Creates a library. `next_id` must be greater than every identity in `files`.
    #[must_use]
    pub fn new(files: PVec<TranslatedFile>, failures: PVec<IngestionFailure>, next_id: u64) -> Self {
        Self {
            files,
            failures,
            next_id,
        }
    }

    /// Returns an allocator that continues after the last identity handed out.
    #[must_use]
    pub fn id_allocator(&self) -> IdAllocator {
        IdAllocator::starting_at(self.next_id)
    }

    /// Returns a copy that records how far `ids` has allocated.
    #[must_use]
    pub fn with_allocations_from(self, ids: &IdAllocator) -> Self {
        Self {
            next_id: self.next_id.max(ids.peek()),
            ..self
        }
    }

    /// Returns a copy with new files.
    #[must_use]
    pub fn with_files(self, files: PVec<TranslatedFile>) -> Self {
        Self { files, ..self }
    }

    /// Finds a declaration anywhere in the tree by identity.
    #[must_use]
    pub fn find(&self, id: DeclId) -> Option<&Declaration> {
        self.files
            .iter()
            .find_map(|file| find_in(&file.declarations, id))
    }

    /// Substitutes the subtree with identity `id`.
    ///
    /// The replacement keeps its own children; sibling order is unchanged.
    ///
    /// # Errors
    ///
    /// Fails if no declaration has identity `id`, if the replacement carries a
    /// different identity, or if the parent cannot hold the replacement. The
    /// result must also pass [`Library::check_successor_of`]: the replacement
    /// may not reuse an identity that lives elsewhere in the tree, and it keeps
    /// the diagnostics already attached to the declarations it replaces.
    pub fn replace(&self, id: DeclId, replacement: Declaration) -> Result<Self> {
        if replacement.id() != id {
            return Err(Error::identity_mismatch(id, replacement.id()));
        }
        let mut replacement = Some(replacement);
        let next = self.rewrite(id, &mut |_| replacement.take())?;
        next.check_successor_of(self)?;
        Ok(next)
    }

    /// Removes the subtree with identity `id`.
    ///
    /// # Errors
    ///
    /// Fails if no declaration has identity `id`.
    pub fn remove(&self, id: DeclId) -> Result<Self> {
        self.rewrite(id, &mut |_| None)
    }

    /// Collects every diagnostic in the tree, depth-first in source order.
    #[must_use]
    pub fn all_diagnostics(&self) -> Vec<LocatedDiagnostic> {
        let mut out = Vec::new();
        for file in &self.files {
            collect_diagnostics(&file.path, &file.declarations, &mut out);
        }
        out
    }

    /// Checks that this generation can be derived from `previous`.
    ///
    /// Every identity occurs once, and a declaration present in both
    /// generations starts with the diagnostics it had in `previous`.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::DuplicateIdentity`] or
    /// [`ErrorKind::DiagnosticsDropped`] for the first offending declaration
    /// in tree order.
    pub fn check_successor_of(&self, previous: &Self) -> Result<()> {
        let mut before = HashMap::new();
        for declaration in previous.declarations() {
            before.entry(declaration.id()).or_insert(declaration);
        }

        let mut seen = HashSet::new();
        for declaration in self.declarations() {
            if !seen.insert(declaration.id()) {
                return Err(Error::duplicate_identity(declaration.id()));
            }
            let dropped = before
                .get(&declaration.id())
                .is_some_and(|earlier| !declaration.diagnostics().extends(earlier.diagnostics()));
            if dropped {
                return Err(Error::diagnostics_dropped(declaration.id()));
            }
        }
        Ok(())
    }

    /// Every declaration in the tree, depth-first in source order.
    fn declarations(&self) -> Vec<&Declaration> {
        let mut out = Vec::new();
        for file in &self.files {
            collect_declarations(&file.declarations, &mut out);
        }
        out
    }

    fn rewrite(
        &self,
        id: DeclId,
        edit: &mut dyn FnMut(Declaration) -> Option<Declaration>,
    ) -> Result<Self> {
        for (index, file) in self.files.iter().enumerate() {
            if let Some(declarations) = rewrite_in(&file.declarations, id, edit)? {
                let file = file.clone().with_declarations(declarations);
                let files = self.files.update(index, file).ok_or_else(|| {
                    Error::new(ErrorKind::Internal("file index out of range".to_string()))
                })?;
                return Ok(self.clone().with_files(files));
            }
        }
        Err(Error::declaration_not_found(id))
    }
}

fn collect_diagnostics(file: &str, list: &PVec<Declaration>, out: &mut Vec<LocatedDiagnostic>) {
    for declaration in list {
        out.extend(declaration.diagnostics().iter().map(|diagnostic| LocatedDiagnostic {
            file: file.to_string(),
            declaration: declaration.id(),
            name: declaration.name.clone(),
            diagnostic: diagnostic.clone(),
        }));
        if let Some(children) = declaration.child_list() {
            collect_diagnostics(file, children, out);
        }
    }
}

fn collect_declarations<'a>(list: &'a PVec<Declaration>, out: &mut Vec<&'a Declaration>) {
    for declaration in list {
        out.push(declaration);
        if let Some(children) = declaration.child_list() {
            collect_declarations(children, out);
        }
    }
}

fn find_in(list: &PVec<Declaration>, id: DeclId) -> Option<&Declaration> {
    list.iter().find_map(|declaration| {
        if declaration.id() == id {
            Some(declaration)
        } else {
            declaration
                .child_list()
                .and_then(|children| find_in(children, id))
        }
    })
}

/// Rewrites the first declaration with identity `id` inside `list`.
///
/// Returns `Ok(None)` when `id` is not in this subtree, so the caller can keep
/// searching without rebuilding anything.
fn rewrite_in(
    list: &PVec<Declaration>,
    id: DeclId,
    edit: &mut dyn FnMut(Declaration) -> Option<Declaration>,
) -> Result<Option<PVec<Declaration>>> {
    for (index, declaration) in list.iter().enumerate() {
        if declaration.id() == id {
            let rewritten = match edit(declaration.clone()) {
                Some(replacement) => list.update(index, replacement),
                None => list.remove(index).map(|(rest, _)| rest),
            };
            return Ok(rewritten);
        }

        let Some(children) = declaration.child_list() else {
            continue;
        };
        if let Some(children) = rewrite_in(children, id, edit)? {
            let parent = declaration.clone().with_children(children)?;
            return Ok(list.update(index, parent));
        }
    }
    Ok(None)
}
