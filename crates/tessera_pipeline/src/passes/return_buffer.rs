//! Materializing hidden return-buffer parameters.

use tessera_foundation::{AccessModifier, TypeReference};
use tessera_tree::{Declaration, DeclarationKind, Function, Parameter, ParameterKind};

use crate::context::TransformationContext;
use crate::transformation::{Rewrite, Transformation};

/// Name given to synthesized return-buffer parameters.
pub const RETURN_BUFFER_NAME: &str = "__returnBuffer";

/// Inserts a pointer-to-return-type parameter at position 0 of every function
/// that returns by reference.
///
/// A function that already has a return-buffer parameter is left alone, so
/// running the pass twice adds exactly one.
#[derive(Clone, Copy, Debug, Default)]
pub struct InjectReturnBufferParameters;

impl Transformation for InjectReturnBufferParameters {
    fn name(&self) -> &str {
        "inject-return-buffers"
    }

    fn transform_function(
        &mut self,
        ctx: &TransformationContext<'_>,
        decl: &Declaration,
        function: &Function,
    ) -> Rewrite {
        let has_buffer = function
            .parameters
            .iter()
            .filter_map(Declaration::as_parameter)
            .any(|parameter| parameter.kind == ParameterKind::ReturnBuffer);
        if !function.return_by_reference || has_buffer {
            return decl.clone().into();
        }

        let buffer = Declaration::new(
            ctx.fresh_id(),
            RETURN_BUFFER_NAME,
            AccessModifier::Public,
            DeclarationKind::Parameter(Parameter {
                ty: TypeReference::pointer(function.return_type.clone()),
                kind: ParameterKind::ReturnBuffer,
                default_value: None,
            }),
        );
        let parameters = function.parameters.push_front(buffer);
        decl.clone()
            .with_kind(DeclarationKind::Function(
                function.clone().with_parameters(parameters),
            ))
            .into()
    }
}
