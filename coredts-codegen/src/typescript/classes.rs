//! Class declaration generation.
//!
//! Each class becomes a `declare interface` block. Classes with constants or
//! static functions additionally get a `<Name>Static` companion interface and
//! a `declare const <Name>: <Name>Static;` binding.

use crate::options::GeneratorOptions;
use crate::typescript::functions::FunctionGenerator;
use crate::typescript::types::{
    ContextNode, OBJECT_CLASS_NAME, TypeContext, TypeUsage, map_type, map_type_name,
};
use crate::writer::CodeWriter;
use coredts_schema::{Class, Constant, SchemaIndex, unique_names};

/// Suffix of the static companion interface name.
pub const STATIC_SUFFIX: &str = "Static";

/// Generator for class declarations.
pub struct ClassGenerator<'a> {
    classes: &'a [Class],
    index: &'a SchemaIndex<'a>,
    options: GeneratorOptions,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(classes: &'a [Class], index: &'a SchemaIndex<'a>, options: GeneratorOptions) -> Self {
        Self {
            classes,
            index,
            options,
        }
    }

    /// Generates all class declarations as a standalone document.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut file = CodeWriter::new();
        self.generate_into(&mut file);
        file.to_string()
    }

    /// Emits all class declarations into `file`.
    ///
    /// Returns the number of classes written.
    pub fn generate_into(&self, file: &mut CodeWriter) -> usize {
        let mut count = 0;

        for name in unique_names(self.classes.iter().map(|c| c.name.as_str())) {
            let Some(class) = self.index.class(name) else {
                tracing::debug!("Class {} does not resolve to a class, skipping", name);
                continue;
            };
            if self.options.skips(class) {
                tracing::debug!("Skipping deprecated class {}", name);
                continue;
            }

            tracing::debug!("Generating class {}", name);
            self.generate_class(class, file);
            count += 1;
        }

        count
    }

    fn generate_class(&self, class: &'a Class, file: &mut CodeWriter) {
        let owner = ContextNode::Class(class);

        let class_block = file.scope(format!(
            "declare interface {}{} {{",
            class.name,
            self.extends_clause(class)
        ));
        class_block.add_description_and_deprecation_for(class);

        let properties_section = class_block.spaced_section("PROPERTIES");
        for property in &class.properties {
            if self.options.skips(property) {
                continue;
            }
            let stack = [owner, ContextNode::Property(property)];
            let mapped = map_type(
                &property.type_ref(),
                &TypeContext::new(&stack, TypeUsage::Field),
            );
            let readonly = if property.is_read_only() { "readonly " } else { "" };
            properties_section.add_definition_line(
                format!("{readonly}{}: {};", property.name, mapped.mapped_type),
                property,
            );
        }

        let functions_section = class_block.spaced_section("FUNCTIONS");
        FunctionGenerator::new(owner, self.options)
            .generate_into(&class.member_functions, functions_section);

        self.generate_static_companion(class, file);
    }

    fn generate_static_companion(&self, class: &'a Class, file: &mut CodeWriter) {
        let owner = ContextNode::Class(class);
        let constants: Vec<&Constant> = class
            .constants
            .iter()
            .filter(|constant| !self.options.skips(*constant))
            .collect();
        let static_functions = FunctionGenerator::new(owner, self.options).static_functions(true);

        if constants.is_empty() && !static_functions.emits_any(&class.static_functions) {
            return;
        }

        let static_type_name = format!("{}{STATIC_SUFFIX}", class.name);
        let static_block = file.scope(format!("declare interface {static_type_name} {{"));

        let constants_section = static_block.spaced_section("CONSTANTS");
        for constant in constants {
            let stack = [owner, ContextNode::Constant(constant)];
            let mapped = map_type(
                &constant.type_ref(),
                &TypeContext::new(&stack, TypeUsage::Field),
            );
            constants_section.add_definition_line(
                format!("readonly {}: {};", constant.name, mapped.mapped_type),
                constant,
            );
        }

        let functions_section = static_block.spaced_section("STATIC FUNCTIONS");
        static_functions.generate_into(&class.static_functions, functions_section);

        file.add(format!("declare const {}: {static_type_name};", class.name));
    }

    fn extends_clause(&self, class: &Class) -> String {
        let Some(base_type) = class.base_type.as_deref() else {
            return String::new();
        };
        if base_type == OBJECT_CLASS_NAME {
            return String::new();
        }

        match self.index.class(base_type) {
            Some(base) if !self.options.skips(base) => {
                let stack = [ContextNode::Class(class)];
                let mapped =
                    map_type_name(base_type, &TypeContext::new(&stack, TypeUsage::TypeName));
                format!(" extends {}", mapped.mapped_type)
            }
            Some(_) => {
                tracing::debug!(
                    "Base type {} of {} is deprecated, dropping extends clause",
                    base_type,
                    class.name
                );
                String::new()
            }
            None => {
                tracing::debug!(
                    "Base type {} of {} is not a known class, dropping extends clause",
                    base_type,
                    class.name
                );
                String::new()
            }
        }
    }
}
