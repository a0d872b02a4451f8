//! Namespace declaration generation.

use crate::options::GeneratorOptions;
use crate::typescript::functions::FunctionGenerator;
use crate::typescript::types::{ContextNode, TypeContext, TypeUsage, map_type};
use crate::writer::CodeWriter;
use coredts_schema::{Namespace, SchemaIndex, unique_names};

const FUNCTION_KEYWORD: &str = "function ";

/// Generator for namespace declarations.
pub struct NamespaceGenerator<'a> {
    namespaces: &'a [Namespace],
    index: &'a SchemaIndex<'a>,
    options: GeneratorOptions,
}

impl<'a> NamespaceGenerator<'a> {
    /// Creates a new namespace generator.
    #[must_use]
    pub fn new(
        namespaces: &'a [Namespace],
        index: &'a SchemaIndex<'a>,
        options: GeneratorOptions,
    ) -> Self {
        Self {
            namespaces,
            index,
            options,
        }
    }

    /// Generates all namespace declarations as a standalone document.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut file = CodeWriter::new();
        self.generate_into(&mut file);
        file.to_string()
    }

    /// Emits all namespace declarations into `file`.
    ///
    /// Returns the number of namespaces written.
    pub fn generate_into(&self, file: &mut CodeWriter) -> usize {
        let mut count = 0;

        for name in unique_names(self.namespaces.iter().map(|n| n.name.as_str())) {
            let Some(namespace) = self.index.namespace(name) else {
                tracing::debug!("Namespace {} does not resolve to a namespace, skipping", name);
                continue;
            };
            if self.options.skips(namespace) {
                tracing::debug!("Skipping deprecated namespace {}", name);
                continue;
            }

            tracing::debug!("Generating namespace {}", name);
            self.generate_namespace(namespace, file);
            count += 1;
        }

        count
    }

    fn generate_namespace(&self, namespace: &'a Namespace, file: &mut CodeWriter) {
        let owner = ContextNode::Namespace(namespace);

        let namespace_block = file.scope(format!("declare namespace {} {{", namespace.name));
        namespace_block.add_description_and_deprecation_for(namespace);

        let constants_section = namespace_block.spaced_section("CONSTANTS");
        for constant in &namespace.constants {
            if self.options.skips(constant) {
                continue;
            }
            let stack = [owner, ContextNode::Constant(constant)];
            let mapped = map_type(
                &constant.type_ref(),
                &TypeContext::new(&stack, TypeUsage::Field),
            );
            constants_section.add_definition_line(
                format!("const {}: {};", constant.name, mapped.mapped_type),
                constant,
            );
        }

        let functions_section = namespace_block.spaced_section("FUNCTIONS");
        FunctionGenerator::new(owner, self.options)
            .static_functions(true)
            .declaration_prefix(FUNCTION_KEYWORD)
            .generate_into(&namespace.static_functions, functions_section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coredts_schema::{Constant, CoreApi, Docs, Function, Parameter, Signature};

    fn generate(api: &CoreApi, options: GeneratorOptions) -> String {
        let index = SchemaIndex::build(api);
        NamespaceGenerator::new(&api.namespaces, &index, options).generate()
    }

    #[test]
    fn test_namespace_block() {
        let mut world = Namespace::new("World");
        world.docs = Docs::described("Access to the scene hierarchy.");
        world.constants.push(Constant::new("MAX_DEPTH", "integer"));
        world.static_functions.push(Function::new(
            "FindObjectByName",
            vec![Signature::new(
                vec![Parameter::new("name", "string")],
                Some("Optional<CoreObject>"),
            )],
        ));
        let api = CoreApi {
            namespaces: vec![world],
            ..CoreApi::default()
        };

        let output = generate(&api, GeneratorOptions::default());
        assert_eq!(
            output,
            [
                "",
                "/**",
                " * Access to the scene hierarchy.",
                " */",
                "declare namespace World {",
                "    ",
                "    // CONSTANTS",
                "    const MAX_DEPTH: Integer;",
                "    ",
                "    ",
                "    // FUNCTIONS",
                "    function FindObjectByName(this: void, name: string): Optional<CoreObject>;",
                "    ",
                "}",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_empty_namespace() {
        let api = CoreApi {
            namespaces: vec![Namespace::new("Events")],
            ..CoreApi::default()
        };

        let output = generate(&api, GeneratorOptions::default());
        assert_eq!(output, "\ndeclare namespace Events {\n}\n");
    }

    #[test]
    fn test_deprecated_namespace_omitted() {
        let mut legacy = Namespace::new("Legacy");
        legacy.docs.is_deprecated = Some(true);
        let api = CoreApi {
            namespaces: vec![legacy, Namespace::new("Game")],
            ..CoreApi::default()
        };

        let output = generate(&api, GeneratorOptions::default());
        assert!(!output.contains("Legacy"));
        assert!(output.contains("declare namespace Game {"));

        let output = generate(&api, GeneratorOptions::new().omit_deprecated(false));
        assert!(output.contains("/**\n * @deprecated \n */\ndeclare namespace Legacy {"));
    }

    #[test]
    fn test_namespace_sharing_enum_name_is_emitted() {
        let api = CoreApi {
            namespaces: vec![Namespace::new("Color")],
            enums: vec![coredts_schema::Enum::new("Color", Vec::new())],
            ..CoreApi::default()
        };

        let index = SchemaIndex::build(&api);
        let mut file = CodeWriter::new();
        let count = NamespaceGenerator::new(&api.namespaces, &index, GeneratorOptions::default())
            .generate_into(&mut file);

        assert_eq!(count, 1);
        assert!(file.to_string().contains("declare namespace Color {"));
    }
}
