//! Function declaration generation.
//!
//! Every overload of a function becomes its own declaration line. The `IsA`
//! type predicate is special: it is re-expressed as a generic narrowing guard
//! on the root class and dropped everywhere else.

use crate::options::GeneratorOptions;
use crate::typescript::signatures::build_signature;
use crate::typescript::types::{
    ContextNode, OBJECT_CLASS_NAME, TypeContext, TypeUsage, map_type_name,
};
use crate::writer::CodeWriter;
use coredts_schema::{Docs, Function};

/// Name of the type predicate re-expressed as a narrowing guard.
pub const IS_A_FUNCTION: &str = "IsA";

/// Generator for the functions of one owner.
#[derive(Debug, Clone, Copy)]
pub struct FunctionGenerator<'a> {
    owner: ContextNode<'a>,
    options: GeneratorOptions,
    is_static: bool,
    declaration_prefix: &'a str,
}

impl<'a> FunctionGenerator<'a> {
    /// Creates a generator for instance functions of `owner`.
    #[must_use]
    pub fn new(owner: ContextNode<'a>, options: GeneratorOptions) -> Self {
        Self {
            owner,
            options,
            is_static: false,
            declaration_prefix: "",
        }
    }

    /// Marks the functions as callable without an instance.
    #[must_use]
    pub fn static_functions(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Sets the keyword placed before each declaration, e.g. `function `.
    #[must_use]
    pub fn declaration_prefix(mut self, prefix: &'a str) -> Self {
        self.declaration_prefix = prefix;
        self
    }

    /// Emits one nameless section per declaration into `section`.
    ///
    /// Returns the number of declarations written.
    pub fn generate_into(&self, functions: &'a [Function], section: &mut CodeWriter) -> usize {
        let declarations = self.declarations(functions);
        for (line, docs) in &declarations {
            section.add_definition_line(line.as_str(), docs);
        }
        declarations.len()
    }

    /// Returns true if at least one declaration would be emitted.
    #[must_use]
    pub fn emits_any(&self, functions: &'a [Function]) -> bool {
        !self.declarations(functions).is_empty()
    }

    fn declarations(&self, functions: &'a [Function]) -> Vec<(String, Docs)> {
        let mut declarations = Vec::new();

        for function in functions {
            if function.name == IS_A_FUNCTION {
                if self.options.skips(function) {
                    continue;
                }
                match self.narrowing_declaration(function) {
                    Some(line) => declarations.push((line, Docs::default())),
                    None => tracing::debug!(
                        "Skipping {} on non-root owner {}",
                        IS_A_FUNCTION,
                        self.owner.name()
                    ),
                }
                continue;
            }

            let context = [self.owner, ContextNode::Function(function)];
            for signature in &function.signatures {
                let docs = signature.effective_docs(function);
                if self.options.skips(&docs) {
                    tracing::debug!(
                        "Skipping deprecated overload of {}.{}",
                        self.owner.name(),
                        function.name
                    );
                    continue;
                }

                declarations.push((
                    format!(
                        "{}{}{};",
                        self.declaration_prefix,
                        function.name,
                        build_signature(signature, &context, self.is_static)
                    ),
                    docs,
                ));
            }
        }

        declarations
    }

    fn narrowing_declaration(&self, function: &'a Function) -> Option<String> {
        if !is_root(&self.owner) {
            return None;
        }

        let stack = [self.owner, ContextNode::Function(function)];
        let bound = map_type_name(
            self.owner.name(),
            &TypeContext::new(&stack, TypeUsage::TypeName),
        );

        Some(format!(
            "{}{}<T extends {}>(): this is T;",
            self.declaration_prefix, function.name, bound.mapped_type
        ))
    }
}

/// Returns true if the owner is the root of the class hierarchy.
///
/// That is the `Object` class, or any class declaring no base type.
#[must_use]
pub fn is_root(owner: &ContextNode<'_>) -> bool {
    match owner {
        ContextNode::Class(class) => {
            class.name == OBJECT_CLASS_NAME || class.base_type.is_none()
        }
        _ => false,
    }
}
