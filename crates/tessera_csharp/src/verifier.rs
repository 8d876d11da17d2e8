//! C# legality checks.
//!
//! The verifier never corrects anything. Each violation becomes a diagnostic
//! on the offending declaration and the emitter decides what to skip.

use tessera_pipeline::{Rewrite, Transformation, TransformationContext};
use tessera_tree::{Constant, Declaration, Field, Function, LooseContainer, Parameter, Record};

use crate::access::{access_keyword, is_allowed_in_namespace_scope};
use crate::types::infer_type;

/// Diagnoses declarations C# cannot express.
///
/// - A namespace-scope declaration must be `internal` or `public` (Error).
/// - Functions, fields, and constants must live in a record or loose
///   container (Error).
/// - A constant whose value has no C# type cannot be emitted (Error).
/// - A parameter default without a C# type is dropped on emission (Warning).
#[derive(Clone, Copy, Debug, Default)]
pub struct TranslationVerifier;

impl TranslationVerifier {
    fn check_scope(ctx: &TransformationContext<'_>, decl: Declaration) -> Declaration {
        if ctx.is_namespace_scope() && !is_allowed_in_namespace_scope(decl.accessibility) {
            let message = format!(
                "{decl} is {} which is not valid at namespace scope",
                access_keyword(decl.accessibility)
            );
            decl.with_error(message)
        } else {
            decl
        }
    }

    fn check_member_context(ctx: &TransformationContext<'_>, decl: Declaration) -> Declaration {
        if ctx.is_valid_field_or_method_context() {
            decl
        } else {
            let message = format!(
                "{decl} must be contained in a record or loose declarations container"
            );
            decl.with_error(message)
        }
    }
}

impl Transformation for TranslationVerifier {
    fn name(&self) -> &str {
        "verify-csharp"
    }

    fn transform_function(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        _function: &Function,
    ) -> Rewrite {
        let decl = Self::check_scope(ctx, decl.clone());
        Self::check_member_context(ctx, decl).into()
    }

    fn transform_field(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        _field: &Field,
    ) -> Rewrite {
        let decl = Self::check_scope(ctx, decl.clone());
        Self::check_member_context(ctx, decl).into()
    }

    fn transform_constant(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        constant: &Constant,
    ) -> Rewrite {
        let decl = Self::check_member_context(ctx, Self::check_scope(ctx, decl.clone()));
        if infer_type(&constant.value).is_none() {
            let message = format!("{decl} has value {} with no C# type", constant.value);
            decl.with_error(message).into()
        } else {
            decl.into()
        }
    }

    fn transform_parameter(
        &mut self,
        _ctx: &TransformationContext<'_>,
        decl: &Declaration,
        parameter: &Parameter,
    ) -> Rewrite {
        match &parameter.default_value {
            Some(value) if infer_type(value).is_none() => {
                let message = format!(
                    "default value {value} of {decl} has no C# type and will be omitted"
                );
                decl.clone().with_warning(message).into()
            }
            _ => decl.clone().into(),
        }
    }

    fn transform_record(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        _record: &Record,
    ) -> Rewrite {
        Self::check_scope(ctx, decl.clone()).into()
    }

    fn transform_loose_container(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        _container: &LooseContainer,
    ) -> Rewrite {
        Self::check_scope(ctx, decl.clone()).into()
    }
}
