//! Hosting file-scope functions and constants in a synthesized container.

use tessera_foundation::{AccessModifier, IdAllocator, Result};
use tessera_tree::{Declaration, DeclarationKind, LooseContainer, TranslatedFile};

use crate::transformation::Transformation;

/// Moves every file-scope function and constant into one loose container.
///
/// The container takes the place of the first loose declaration and the moved
/// declarations keep their relative order. If the file already has a
/// container with the configured name, newly loose declarations are appended
/// to it instead of creating a second one.
#[derive(Clone, Debug)]
pub struct MoveLooseDeclarationsIntoTypes {
    container_name: String,
}

impl MoveLooseDeclarationsIntoTypes {
    /// Creates the pass with the given container name.
    pub fn new(container_name: impl Into<String>) -> Self {
        Self {
            container_name: container_name.into(),
        }
    }

    fn is_existing_container(&self, decl: &Declaration) -> bool {
        decl.is_loose_container() && decl.name == self.container_name
    }
}

fn is_loose(decl: &Declaration) -> bool {
    matches!(
        decl.kind,
        DeclarationKind::Function(_) | DeclarationKind::Constant(_)
    )
}

impl Transformation for MoveLooseDeclarationsIntoTypes {
    fn name(&self) -> &str {
        "move-loose-declarations"
    }

    fn transform_file(&mut self, file: &TranslatedFile, ids: &IdAllocator) -> Result<TranslatedFile> {
        let Some(first_loose) = file.declarations.position(is_loose) else {
            return Ok(file.clone());
        };

        let mut loose = Vec::new();
        let mut kept = Vec::new();
        for decl in &file.declarations {
            if is_loose(decl) {
                loose.push(decl.clone());
            } else {
                kept.push(decl.clone());
            }
        }

        if let Some(index) = kept.iter().position(|d| self.is_existing_container(d)) {
            let existing = kept.remove(index);
            let members = existing.children().cloned().chain(loose).collect();
            kept.insert(index, existing.with_children(members)?);
        } else {
            let container = Declaration::new(
                ids.allocate(),
                self.container_name.clone(),
                AccessModifier::Public,
                DeclarationKind::LooseContainer(LooseContainer {
                    members: loose.into_iter().collect(),
                }),
            );
            kept.insert(first_loose, container);
        }

        tracing::trace!(file = %file.path, "hosted loose declarations");
        Ok(file.clone().with_declarations(kept.into()))
    }
}
