//! Building the first library generation from front-end facts.

use tessera_foundation::{AccessModifier, ErrorContext, IdAllocator, PVec};
use tessera_tree::{
    Constant, Declaration, DeclarationKind, Field, IngestionFailure, Library, Record,
    TranslatedFile,
};

use crate::facts::{DeclarationFact, FileFacts, NativeAccess};
use crate::resolver::AbiResolver;

/// Builds a library from the facts of every file, in order.
///
/// Functions go through `resolver`. A function whose resolution fails never
/// enters the tree; it is recorded as an [`IngestionFailure`] and the rest of
/// the file is still ingested.
#[must_use]
pub fn build_library(resolver: &AbiResolver, files: &[FileFacts]) -> Library {
    let ids = IdAllocator::new();
    let mut builder = Builder {
        resolver,
        ids: &ids,
        failures: Vec::new(),
    };

    let translated: PVec<TranslatedFile> = files
        .iter()
        .map(|file| {
            let declarations = builder.declarations(&file.path, &[], &file.declarations);
            TranslatedFile::new(file.path.clone(), declarations)
        })
        .collect();

    tracing::debug!(
        files = translated.len(),
        failures = builder.failures.len(),
        next_id = ids.peek(),
        "built library"
    );

    Library::new(translated, builder.failures.into_iter().collect(), ids.peek())
}

struct Builder<'a> {
    resolver: &'a AbiResolver,
    ids: &'a IdAllocator,
    failures: Vec<IngestionFailure>,
}

impl Builder<'_> {
    fn declarations(
        &mut self,
        file: &str,
        scope: &[&str],
        facts: &[DeclarationFact],
    ) -> PVec<Declaration> {
        facts
            .iter()
            .filter_map(|fact| self.declaration(file, scope, fact))
            .collect()
    }

    fn declaration(
        &mut self,
        file: &str,
        scope: &[&str],
        fact: &DeclarationFact,
    ) -> Option<Declaration> {
        match fact {
            DeclarationFact::Function(function) => {
                match self.resolver.resolve(function, self.ids) {
                    Ok(declaration) => Some(declaration),
                    Err(err) => {
                        let err = err.with_context(
                            scope.iter().rev().fold(
                                ErrorContext::new()
                                    .with_file(file)
                                    .with_declaration(qualified(scope, &function.name)),
                                |ctx, parent| ctx.with_parent(*parent),
                            ),
                        );
                        tracing::warn!(
                            file,
                            declaration = %function.name,
                            error = %err,
                            "dropping declaration with unresolvable ABI"
                        );
                        self.failures.push(IngestionFailure {
                            file: file.to_string(),
                            declaration: qualified(scope, &function.name),
                            reason: err.kind.to_string(),
                        });
                        None
                    }
                }
            }
            DeclarationFact::Record(record) => {
                let id = self.ids.allocate();
                let mut inner = scope.to_vec();
                inner.push(record.name.as_str());
                let members = self.declarations(file, &inner, &record.members);
                let accessibility = record
                    .access
                    .map_or(AccessModifier::Public, NativeAccess::to_access_modifier);
                Some(Declaration::new(
                    id,
                    record.name.clone(),
                    accessibility,
                    DeclarationKind::Record(Record {
                        members,
                        size: record.size,
                    }),
                ))
            }
            DeclarationFact::Field(field) => Some(Declaration::new(
                self.ids.allocate(),
                field.name.clone(),
                field.access.to_access_modifier(),
                DeclarationKind::Field(Field {
                    ty: field.ty.clone(),
                    offset: field.offset,
                }),
            )),
            DeclarationFact::Constant(constant) => Some(Declaration::new(
                self.ids.allocate(),
                constant.name.clone(),
                AccessModifier::Public,
                DeclarationKind::Constant(Constant {
                    value: constant.value.clone(),
                }),
            )),
        }
    }
}

fn qualified(scope: &[&str], name: &str) -> String {
    let mut path = scope.join("::");
    if !path.is_empty() {
        path.push_str("::");
    }
    path.push_str(name);
    path
}
