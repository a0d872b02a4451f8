//! Function signature construction.

use crate::typescript::types::{ContextNode, NO_VALUE_TYPE, TypeContext, TypeUsage, map_type};
use coredts_schema::{Parameter, Signature};

/// Receiver declared for functions called without an instance.
pub const STATIC_RECEIVER: &str = "this: void";

/// Builds `(<params>): <return type>` for a signature.
///
/// # Arguments
/// * `signature` - Signature to render
/// * `context` - Enclosing schema nodes, outermost first
/// * `is_static` - Whether the function is called without an instance
#[must_use]
pub fn build_signature(
    signature: &Signature,
    context: &[ContextNode<'_>],
    is_static: bool,
) -> String {
    let mut parameters = Vec::with_capacity(signature.parameters.len() + 1);
    if is_static {
        parameters.push(STATIC_RECEIVER.to_string());
    }
    parameters.extend(
        signature
            .parameters
            .iter()
            .map(|parameter| build_parameter(parameter, context)),
    );

    let return_context = TypeContext::new(context, TypeUsage::Return);
    let return_type = signature
        .return_type_ref()
        .map(|type_ref| map_type(&type_ref, &return_context).mapped_type)
        .unwrap_or_else(|| NO_VALUE_TYPE.to_string());

    format!("({}): {}", parameters.join(", "), return_type)
}

fn build_parameter(parameter: &Parameter, context: &[ContextNode<'_>]) -> String {
    let mut stack = context.to_vec();
    stack.push(ContextNode::Parameter(parameter));
    let mapped = map_type(
        &parameter.type_ref(),
        &TypeContext::new(&stack, TypeUsage::Parameter),
    );
    let optional_marker = if parameter.is_optional { "?" } else { "" };

    format!("{}{}: {}", parameter.name, optional_marker, mapped.mapped_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coredts_schema::{Class, Function};

    #[test]
    fn test_empty_signature() {
        let signature = Signature::new(Vec::new(), None);
        assert_eq!(build_signature(&signature, &[], false), "(): void");
    }

    #[test]
    fn test_parameters_in_order_with_optional_marker() {
        let signature = Signature::new(
            vec![
                Parameter::new("position", "Vector3"),
                Parameter::new("count", "integer").optional(),
                Parameter::new("tags", "Array<string>"),
            ],
            Some("Optional<CoreObject>"),
        );

        assert_eq!(
            build_signature(&signature, &[], false),
            "(position: Vector3, count?: Integer, tags: string[]): Optional<CoreObject>"
        );
    }

    #[test]
    fn test_static_signature_has_void_receiver() {
        let class = Class::new("World");
        let function = Function::new("FindObjectByName", Vec::new());
        let context = [ContextNode::Class(&class), ContextNode::Function(&function)];
        let signature = Signature::new(vec![Parameter::new("name", "string")], Some("CoreObject"));

        assert_eq!(
            build_signature(&signature, &context, true),
            "(this: void, name: string): CoreObject"
        );
    }

    #[test]
    fn test_static_signature_without_parameters() {
        let signature = Signature::new(Vec::new(), Some("number"));
        assert_eq!(build_signature(&signature, &[], true), "(this: void): number");
    }

    #[test]
    fn test_return_type_mapping() {
        let signature = Signature::new(Vec::new(), Some("integer[]"));
        assert_eq!(build_signature(&signature, &[], false), "(): Integer[]");
    }
}
