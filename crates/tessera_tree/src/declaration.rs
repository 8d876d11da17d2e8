//! Declaration variants.
//!
//! A [`Declaration`] is a persistent value: passes never change one in place
//! but derive a new value with some fields changed. The identity token is the
//! one field a derived value always inherits, and equality between
//! declarations is identity equality.

use std::fmt;
use std::hash::{Hash, Hasher};

use tessera_foundation::{AccessModifier, ConstantValue, DeclId, Error, PVec, Result, TypeReference};

use crate::diagnostic::{Diagnostics, Severity};
use crate::function::Function;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node in the declaration tree.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Declaration {
    id: DeclId,
    /// Name used by the emitter; passes may rename freely.
    pub name: String,
    /// Target accessibility.
    pub accessibility: AccessModifier,
    diagnostics: Diagnostics,
    /// Variant-specific data.
    pub kind: DeclarationKind,
}

/// The closed set of declaration variants.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeclarationKind {
    /// A function or method.
    Function(Function),
    /// A function parameter.
    Parameter(Parameter),
    /// A struct, class, or union.
    Record(Record),
    /// A data member of a record.
    Field(Field),
    /// A named constant.
    Constant(Constant),
    /// A synthesized aggregate hosting declarations that have no natural parent.
    LooseContainer(LooseContainer),
}

/// Whether a parameter was declared in the native signature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParameterKind {
    /// Declared in the native signature.
    Explicit,
    /// Hidden output pointer for a return value passed by reference.
    ReturnBuffer,
}

/// A function parameter.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parameter {
    /// Parameter type.
    pub ty: TypeReference,
    /// Declared or synthesized.
    pub kind: ParameterKind,
    /// Literal default argument, if any.
    pub default_value: Option<ConstantValue>,
}

/// A struct, class, or union.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record {
    /// Nested declarations in source order.
    pub members: PVec<Declaration>,
    /// Size in bytes.
    pub size: u64,
}

/// A data member of a record.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    /// Field type.
    pub ty: TypeReference,
    /// Byte offset within the record.
    pub offset: u64,
}

/// A named constant.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constant {
    /// The literal value.
    pub value: ConstantValue,
}

/// A synthesized aggregate for otherwise parentless declarations.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LooseContainer {
    /// Hosted declarations in their original order.
    pub members: PVec<Declaration>,
}

impl Declaration {
    /// Creates a declaration with the given identity and no diagnostics.
    pub fn new(
        id: DeclId,
        name: impl Into<String>,
        accessibility: AccessModifier,
        kind: DeclarationKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            accessibility,
            diagnostics: Diagnostics::new(),
            kind,
        }
    }

    /// Creates an explicit parameter.
    pub fn parameter(id: DeclId, name: impl Into<String>, ty: TypeReference) -> Self {
        Self::new(
            id,
            name,
            AccessModifier::Public,
            DeclarationKind::Parameter(Parameter {
                ty,
                kind: ParameterKind::Explicit,
                default_value: None,
            }),
        )
    }

    /// Returns the identity token.
    #[must_use]
    pub fn id(&self) -> DeclId {
        self.id
    }

    /// Returns a copy with a new name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Returns a copy with a new accessibility.
    #[must_use]
    pub fn with_accessibility(self, accessibility: AccessModifier) -> Self {
        Self {
            accessibility,
            ..self
        }
    }

    /// Returns a copy with new variant data.
    #[must_use]
    pub fn with_kind(self, kind: DeclarationKind) -> Self {
        Self { kind, ..self }
    }

    /// Returns a copy with one more diagnostic appended.
    #[must_use]
    pub fn with_diagnostic(self, severity: Severity, message: impl Into<String>) -> Self {
        let diagnostics = self.diagnostics.add(severity, message);
        Self {
            diagnostics,
            ..self
        }
    }

    /// Returns a copy with an error appended.
    #[must_use]
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.with_diagnostic(Severity::Error, message)
    }

    /// Returns a copy with a warning appended.
    #[must_use]
    pub fn with_warning(self, message: impl Into<String>) -> Self {
        self.with_diagnostic(Severity::Warning, message)
    }

    /// Diagnostics attached to this declaration, in the order they were added.
    ///
    /// The list only grows through the `with_*` diagnostic builders.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Returns true if this declaration carries an error diagnostic.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Returns the function data if this is a function.
    #[must_use]
    pub fn as_function(&self) -> Option<&Function> {
        match &self.kind {
            DeclarationKind::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the parameter data if this is a parameter.
    #[must_use]
    pub fn as_parameter(&self) -> Option<&Parameter> {
        match &self.kind {
            DeclarationKind::Parameter(parameter) => Some(parameter),
            _ => None,
        }
    }

    /// Returns true if this is a record.
    #[must_use]
    pub fn is_record(&self) -> bool {
        matches!(self.kind, DeclarationKind::Record(_))
    }

    /// Returns true if this is a synthesized loose container.
    #[must_use]
    pub fn is_loose_container(&self) -> bool {
        matches!(self.kind, DeclarationKind::LooseContainer(_))
    }

    /// Short lowercase name of the variant, used in messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            DeclarationKind::Function(_) => "function",
            DeclarationKind::Parameter(_) => "parameter",
            DeclarationKind::Record(_) => "record",
            DeclarationKind::Field(_) => "field",
            DeclarationKind::Constant(_) => "constant",
            DeclarationKind::LooseContainer(_) => "loose container",
        }
    }

    /// Returns the list of direct children, if this variant has one.
    ///
    /// Functions expose their parameters, aggregates their members. Leaf
    /// variants have no list at all.
    #[must_use]
    pub fn child_list(&self) -> Option<&PVec<Declaration>> {
        match &self.kind {
            DeclarationKind::Function(function) => Some(&function.parameters),
            DeclarationKind::Record(record) => Some(&record.members),
            DeclarationKind::LooseContainer(container) => Some(&container.members),
            DeclarationKind::Parameter(_)
            | DeclarationKind::Field(_)
            | DeclarationKind::Constant(_) => None,
        }
    }

    /// Iterates the direct children in order.
    pub fn children(&self) -> impl Iterator<Item = &Declaration> {
        self.child_list().into_iter().flat_map(PVec::iter)
    }

    /// Returns a copy whose direct children are replaced.
    ///
    /// # Errors
    ///
    /// Fails if the variant cannot hold one of the children: functions only
    /// hold parameters, parameters never appear inside aggregates, and leaf
    /// variants hold nothing.
    pub fn with_children(self, children: PVec<Declaration>) -> Result<Self> {
        let invalid = |parent: &Self, child: &Declaration| {
            Error::invalid_child(
                format!("{} {}", parent.kind_name(), parent.name),
                format!("{} {}", child.kind_name(), child.name),
            )
        };

        let kind = match &self.kind {
            DeclarationKind::Function(function) => {
                if let Some(child) = children.iter().find(|c| c.as_parameter().is_none()) {
                    return Err(invalid(&self, child));
                }
                DeclarationKind::Function(function.clone().with_parameters(children))
            }
            DeclarationKind::Record(record) => {
                if let Some(child) = children.iter().find(|c| c.as_parameter().is_some()) {
                    return Err(invalid(&self, child));
                }
                DeclarationKind::Record(Record {
                    members: children,
                    size: record.size,
                })
            }
            DeclarationKind::LooseContainer(_) => {
                if let Some(child) = children.iter().find(|c| c.as_parameter().is_some()) {
                    return Err(invalid(&self, child));
                }
                DeclarationKind::LooseContainer(LooseContainer { members: children })
            }
            DeclarationKind::Parameter(_)
            | DeclarationKind::Field(_)
            | DeclarationKind::Constant(_) => {
                if let Some(child) = children.first() {
                    return Err(invalid(&self, child));
                }
                return Ok(self);
            }
        };
        Ok(self.with_kind(kind))
    }
}

impl PartialEq for Declaration {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Declaration {}

impl Hash for Declaration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeclarationKind::Function(function) => write!(f, "{} {}", function.role(), self.name),
            DeclarationKind::Parameter(_) => write!(f, "Parameter {}", self.name),
            DeclarationKind::Record(_) => write!(f, "Record {}", self.name),
            DeclarationKind::Field(_) => write!(f, "Field {}", self.name),
            DeclarationKind::Constant(_) => write!(f, "Constant {}", self.name),
            DeclarationKind::LooseContainer(_) => write!(f, "Loose Declarations {}", self.name),
        }
    }
}
