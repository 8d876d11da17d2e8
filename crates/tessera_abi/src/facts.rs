//! Facts supplied by the native parsing front end.
//!
//! These types are the ingestion boundary: the front end fills them in from
//! its AST and the rest of Tessera never sees the AST itself.

use tessera_foundation::{AccessModifier, ConstantValue, TypeReference};

use crate::calling_convention::NativeCallingConvention;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Native C++ member access.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NativeAccess {
    /// `public:`.
    Public,
    /// `protected:`.
    Protected,
    /// `private:`.
    Private,
}

impl NativeAccess {
    /// Translates to the target accessibility.
    #[must_use]
    pub const fn to_access_modifier(self) -> AccessModifier {
        match self {
            Self::Public => AccessModifier::Public,
            Self::Protected => AccessModifier::Protected,
            Self::Private => AccessModifier::Private,
        }
    }
}

/// Flags that only exist on member functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemberFacts {
    /// Declared access level.
    pub access: NativeAccess,
    /// `static` member.
    pub is_static: bool,
    /// `virtual` member.
    pub is_virtual: bool,
    /// `const`-qualified receiver.
    pub is_const: bool,
}

impl MemberFacts {
    /// A public, non-static, non-virtual, non-const member.
    #[must_use]
    pub const fn public() -> Self {
        Self {
            access: NativeAccess::Public,
            is_static: false,
            is_virtual: false,
            is_const: false,
        }
    }
}

/// The native kind of a function-like declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionKind {
    /// A namespace-scope function.
    ///
    /// The front end may report an access level for it; that value is not
    /// meaningful and is ignored during resolution.
    Free {
        /// Whatever access value the front end reported.
        access: Option<NativeAccess>,
    },
    /// An ordinary member function.
    Method(MemberFacts),
    /// A constructor.
    Constructor(MemberFacts),
    /// A destructor.
    Destructor(MemberFacts),
    /// A conversion operator; its target type is the return type.
    ConversionOperator(MemberFacts),
}

impl FunctionKind {
    /// Member flags, or `None` for a free function.
    #[must_use]
    pub const fn member(&self) -> Option<&MemberFacts> {
        match self {
            Self::Free { .. } => None,
            Self::Method(member)
            | Self::Constructor(member)
            | Self::Destructor(member)
            | Self::ConversionOperator(member) => Some(member),
        }
    }
}

/// A native parameter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParameterFact {
    /// Parameter name (may be empty for unnamed parameters).
    pub name: String,
    /// Parameter type.
    pub ty: TypeReference,
    /// Literal default argument.
    pub default_value: Option<ConstantValue>,
}

impl ParameterFact {
    /// Creates a parameter without a default.
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }
}

/// A function-like native declaration, as seen through the front end.
///
/// Mangled names are requested rather than stored so that a front end only
/// computes the (comparatively expensive) candidate set when it is needed,
/// which is for destructors.
pub trait NativeFunction {
    /// Native name.
    fn name(&self) -> &str;

    /// Native kind.
    fn kind(&self) -> FunctionKind;

    /// Canonical operator token (`+`, `==`, `[]`, ...) for operator overloads.
    fn operator_token(&self) -> Option<&str>;

    /// Declared return type.
    fn return_type(&self) -> &TypeReference;

    /// Parameters in declaration order.
    fn parameters(&self) -> &[ParameterFact];

    /// Native calling convention classification.
    fn calling_convention(&self) -> &NativeCallingConvention;

    /// The general single mangled name.
    fn mangling(&self) -> String;

    /// The ordered set of equivalent mangled names.
    fn mangling_candidates(&self) -> Vec<String>;
}

/// Plain-data implementation of [`NativeFunction`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionFact {
    /// Native name.
    pub name: String,
    /// Native kind.
    pub kind: FunctionKind,
    /// Operator token for operator overloads.
    pub operator: Option<String>,
    /// Declared return type.
    pub return_type: TypeReference,
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterFact>,
    /// Native calling convention classification.
    pub calling_convention: NativeCallingConvention,
    /// The general single mangled name.
    pub mangling: String,
    /// The ordered set of equivalent mangled names.
    pub mangling_candidates: Vec<String>,
}

impl FunctionFact {
    /// Creates a cdecl free function returning `void` with no parameters.
    pub fn free(name: impl Into<String>, mangling: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FunctionKind::Free { access: None },
            operator: None,
            return_type: TypeReference::Void,
            parameters: Vec::new(),
            calling_convention: NativeCallingConvention::C,
            mangling: mangling.into(),
            mangling_candidates: Vec::new(),
        }
    }

    /// Returns a copy with a different kind.
    #[must_use]
    pub fn with_kind(mut self, kind: FunctionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns a copy with a different return type.
    #[must_use]
    pub fn returning(mut self, return_type: TypeReference) -> Self {
        self.return_type = return_type;
        self
    }

    /// Returns a copy with one more parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterFact) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Returns a copy with a different calling convention.
    #[must_use]
    pub fn with_calling_convention(mut self, convention: NativeCallingConvention) -> Self {
        self.calling_convention = convention;
        self
    }

    /// Returns a copy marked as an operator overload.
    #[must_use]
    pub fn with_operator(mut self, token: impl Into<String>) -> Self {
        self.operator = Some(token.into());
        self
    }

    /// Returns a copy with mangling candidates.
    #[must_use]
    pub fn with_mangling_candidates(mut self, candidates: Vec<String>) -> Self {
        self.mangling_candidates = candidates;
        self
    }
}

impl NativeFunction for FunctionFact {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FunctionKind {
        self.kind
    }

    fn operator_token(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    fn return_type(&self) -> &TypeReference {
        &self.return_type
    }

    fn parameters(&self) -> &[ParameterFact] {
        &self.parameters
    }

    fn calling_convention(&self) -> &NativeCallingConvention {
        &self.calling_convention
    }

    fn mangling(&self) -> String {
        self.mangling.clone()
    }

    fn mangling_candidates(&self) -> Vec<String> {
        self.mangling_candidates.clone()
    }
}

/// A native record (struct, class, or union).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordFact {
    /// Record name.
    pub name: String,
    /// Access level when nested in another record; `None` at namespace scope.
    pub access: Option<NativeAccess>,
    /// Size in bytes.
    pub size: u64,
    /// Members in source order.
    pub members: Vec<DeclarationFact>,
}

/// A native data member.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldFact {
    /// Field name.
    pub name: String,
    /// Declared access level.
    pub access: NativeAccess,
    /// Field type.
    pub ty: TypeReference,
    /// Byte offset within the record.
    pub offset: u64,
}

/// A native named constant (`constexpr`, enum-like `#define`, ...).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstantFact {
    /// Constant name.
    pub name: String,
    /// Constant value.
    pub value: ConstantValue,
}

/// Any declaration the front end reports.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeclarationFact {
    /// A function-like declaration.
    Function(FunctionFact),
    /// A record.
    Record(RecordFact),
    /// A data member.
    Field(FieldFact),
    /// A named constant.
    Constant(ConstantFact),
}

impl DeclarationFact {
    /// Native name of the declaration.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Function(function) => &function.name,
            Self::Record(record) => &record.name,
            Self::Field(field) => &field.name,
            Self::Constant(constant) => &constant.name,
        }
    }
}

/// The declarations of one native file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileFacts {
    /// File path.
    pub path: String,
    /// File-scope declarations in source order.
    pub declarations: Vec<DeclarationFact>,
}

impl FileFacts {
    /// Creates file facts.
    pub fn new(path: impl Into<String>, declarations: Vec<DeclarationFact>) -> Self {
        Self {
            path: path.into(),
            declarations,
        }
    }
}
