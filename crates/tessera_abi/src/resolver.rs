//! Per-function ABI resolution.
//!
//! [`AbiResolver::resolve`] turns one [`NativeFunction`] into an ABI-annotated
//! function declaration. Resolution runs in a fixed order:
//!
//! 1. Calling convention. Failure here aborts the declaration before any
//!    identity is allocated.
//! 2. Member or free classification (access, receiver, virtual, const).
//! 3. Return-by-reference, from the target's value-return rule.
//! 4. Name: operator overloads, conversion operators, constructors, and
//!    destructors get synthesized names.
//! 5. Mangled name: destructors go through the target's selection policy.

use tessera_foundation::{AccessModifier, ErrorContext, IdAllocator, Result};
use tessera_tree::{
    Declaration, DeclarationKind, Function, FunctionOrigin, Parameter, ParameterKind,
};

use crate::calling_convention::resolve_calling_convention;
use crate::facts::{FunctionKind, NativeFunction};
use crate::target::TargetAbi;

/// Name given to every constructor.
pub const CONSTRUCTOR_NAME: &str = "Constructor";

/// Name given to every destructor.
pub const DESTRUCTOR_NAME: &str = "Destructor";

/// Module name used until the caller configures the real one.
pub const DEFAULT_DLL_FILE_NAME: &str = "TODO.dll";

/// Resolves native function facts against one target ABI.
#[derive(Debug)]
pub struct AbiResolver {
    abi: TargetAbi,
    dll_file_name: String,
}

impl AbiResolver {
    /// Creates a resolver using the placeholder module name.
    #[must_use]
    pub fn new(abi: TargetAbi) -> Self {
        Self {
            abi,
            dll_file_name: DEFAULT_DLL_FILE_NAME.to_string(),
        }
    }

    /// Returns a copy that stamps functions with the given module name.
    #[must_use]
    pub fn with_dll_file_name(self, dll_file_name: impl Into<String>) -> Self {
        Self {
            dll_file_name: dll_file_name.into(),
            ..self
        }
    }

    /// The ABI policies in use.
    #[must_use]
    pub fn abi(&self) -> &TargetAbi {
        &self.abi
    }

    /// Resolves one function fact.
    ///
    /// The function takes the next identity from `ids`, followed by one
    /// identity per parameter in declaration order.
    ///
    /// # Errors
    ///
    /// Fails if the calling convention has no target mapping. Nothing is
    /// allocated from `ids` in that case.
    pub fn resolve<F: NativeFunction + ?Sized>(
        &self,
        fact: &F,
        ids: &IdAllocator,
    ) -> Result<Declaration> {
        let calling_convention = resolve_calling_convention(fact.calling_convention())
            .map_err(|err| err.with_context(ErrorContext::new().with_declaration(fact.name())))?;

        let kind = fact.kind();
        let (accessibility, is_instance_method, is_virtual, is_const) = match kind.member() {
            Some(member) => (
                member.access.to_access_modifier(),
                !member.is_static,
                member.is_virtual,
                member.is_const,
            ),
            // Access reported on a free function is meaningless.
            None => (AccessModifier::Public, false, false, false),
        };

        let return_type = fact.return_type().clone();
        let return_by_reference = self
            .abi
            .value_return()
            .must_return_by_reference(&return_type, is_instance_method);

        let (name, is_operator_overload) = match (fact.operator_token(), kind) {
            (Some(token), _) => (format!("operator_{token}"), true),
            (None, FunctionKind::ConversionOperator(_)) => {
                (format!("____ConversionOperator_{return_type}"), true)
            }
            (None, FunctionKind::Constructor(_)) => (CONSTRUCTOR_NAME.to_string(), false),
            (None, FunctionKind::Destructor(_)) => (DESTRUCTOR_NAME.to_string(), false),
            (None, _) => (fact.name().to_string(), false),
        };

        let mut warning = None;
        let mangled_name = if matches!(kind, FunctionKind::Destructor(_)) {
            let candidates = fact.mangling_candidates();
            if let Some(selected) = self.abi.destructor_mangling().select(&candidates) {
                selected.to_string()
            } else {
                let fallback = fact.mangling();
                warning = Some(format!(
                    "no destructor mangling candidate was selected for {}; using {fallback}",
                    fact.name()
                ));
                fallback
            }
        } else {
            fact.mangling()
        };

        let id = ids.allocate();
        let parameters = fact
            .parameters()
            .iter()
            .map(|parameter| {
                Declaration::new(
                    ids.allocate(),
                    parameter.name.clone(),
                    AccessModifier::Public,
                    DeclarationKind::Parameter(Parameter {
                        ty: parameter.ty.clone(),
                        kind: ParameterKind::Explicit,
                        default_value: parameter.default_value.clone(),
                    }),
                )
            })
            .collect();

        let function = Function {
            origin: origin_of(kind),
            calling_convention,
            return_type,
            return_by_reference,
            parameters,
            is_instance_method,
            is_virtual,
            is_const,
            is_operator_overload,
            dll_file_name: self.dll_file_name.clone(),
            mangled_name,
        };

        tracing::trace!(
            id = %id,
            name = %name,
            calling_convention = %function.calling_convention,
            return_by_reference,
            "resolved function"
        );

        let declaration = Declaration::new(
            id,
            name,
            accessibility,
            DeclarationKind::Function(function),
        );
        Ok(match warning {
            Some(message) => declaration.with_warning(message),
            None => declaration,
        })
    }
}

impl Default for AbiResolver {
    fn default() -> Self {
        Self::new(TargetAbi::default())
    }
}

fn origin_of(kind: FunctionKind) -> FunctionOrigin {
    match kind {
        FunctionKind::Free { .. } => FunctionOrigin::Free,
        FunctionKind::Method(_) => FunctionOrigin::Method,
        FunctionKind::Constructor(_) => FunctionOrigin::Constructor,
        FunctionKind::Destructor(_) => FunctionOrigin::Destructor,
        FunctionKind::ConversionOperator(_) => FunctionOrigin::ConversionOperator,
    }
}
