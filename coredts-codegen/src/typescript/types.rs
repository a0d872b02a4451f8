//! Schema type to TypeScript type mapping.

use coredts_schema::{Class, Constant, Enum, Function, Namespace, Parameter, Property, TypeRef};

/// Alias declared for schema integers.
pub const INTEGER_TYPE_NAME: &str = "Integer";
/// Generic alias declared for optional values.
pub const OPTIONAL_TYPE_NAME: &str = "Optional";
/// Suffix marking an array type.
pub const ARRAY_MARKER: &str = "[]";
/// Type rendered for signatures without a return type.
pub const NO_VALUE_TYPE: &str = "void";
/// Root of the class hierarchy.
pub const OBJECT_CLASS_NAME: &str = "Object";

/// How a type reference is used at the mapping site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeUsage {
    /// Property or constant type.
    Field,
    /// Function parameter type.
    Parameter,
    /// Function return type.
    Return,
    /// Bare type name, e.g. an `extends` clause or a generic bound.
    TypeName,
}

/// One enclosing schema node in a mapping context.
#[derive(Debug, Clone, Copy)]
pub enum ContextNode<'a> {
    /// Enclosing class.
    Class(&'a Class),
    /// Enclosing namespace.
    Namespace(&'a Namespace),
    /// Enclosing enum.
    Enum(&'a Enum),
    /// Enclosing function.
    Function(&'a Function),
    /// Property being typed.
    Property(&'a Property),
    /// Constant being typed.
    Constant(&'a Constant),
    /// Parameter being typed.
    Parameter(&'a Parameter),
}

impl<'a> ContextNode<'a> {
    /// Returns the node name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Self::Class(c) => &c.name,
            Self::Namespace(n) => &n.name,
            Self::Enum(e) => &e.name,
            Self::Function(f) => &f.name,
            Self::Property(p) => &p.name,
            Self::Constant(c) => &c.name,
            Self::Parameter(p) => &p.name,
        }
    }
}

/// Where a type is being mapped.
#[derive(Debug, Clone, Copy)]
pub struct TypeContext<'c, 'a> {
    /// Enclosing nodes, outermost first.
    pub stack: &'c [ContextNode<'a>],
    /// How the type is used.
    pub usage: TypeUsage,
}

impl<'c, 'a> TypeContext<'c, 'a> {
    /// Creates a mapping context.
    #[must_use]
    pub fn new(stack: &'c [ContextNode<'a>], usage: TypeUsage) -> Self {
        Self { stack, usage }
    }

    /// Returns the outermost node.
    #[must_use]
    pub fn root(&self) -> Option<&ContextNode<'a>> {
        self.stack.first()
    }
}

/// Result of mapping a schema type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// TypeScript type expression.
    pub mapped_type: String,
    /// Usage the type was mapped for.
    pub usage: TypeUsage,
}

impl MappedType {
    /// Returns true if the type was mapped in a type-name position.
    #[must_use]
    pub fn is_type_name(&self) -> bool {
        self.usage == TypeUsage::TypeName
    }
}

/// Maps a parsed schema type to a TypeScript type expression.
#[must_use]
pub fn map_type(type_ref: &TypeRef, context: &TypeContext<'_, '_>) -> MappedType {
    MappedType {
        mapped_type: render(type_ref),
        usage: context.usage,
    }
}

/// Parses and maps a raw schema type string.
#[must_use]
pub fn map_type_name(raw: &str, context: &TypeContext<'_, '_>) -> MappedType {
    map_type(&TypeRef::parse(raw), context)
}

fn render(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Named(name) => primitive_alias(name).unwrap_or(name).to_string(),
        TypeRef::Optional(inner) => format!("{OPTIONAL_TYPE_NAME}<{}>", render(inner)),
        TypeRef::Array(inner) => format!("{}{ARRAY_MARKER}", render(inner)),
    }
}

fn primitive_alias(name: &str) -> Option<&'static str> {
    match name {
        "integer" => Some(INTEGER_TYPE_NAME),
        "bool" => Some("boolean"),
        "nil" => Some("undefined"),
        "function" => Some("Function"),
        _ => None,
    }
}
