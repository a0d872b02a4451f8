//! Schema type definitions.
//!
//! This module contains the data structures representing the API document:
//! classes, namespaces, enums, and the members they declare. Field names follow
//! the PascalCase keys of the JSON document.

use crate::type_ref::TypeRef;
use serde::{Deserialize, Deserializer, Serialize};

/// Reads an optional field, treating an explicit `null` like a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Complete API document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoreApi {
    /// Class definitions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub classes: Vec<Class>,
    /// Namespace definitions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub namespaces: Vec<Namespace>,
    /// Enum definitions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub enums: Vec<Enum>,
}

impl CoreApi {
    /// Returns true if the document declares no entities at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.namespaces.is_empty() && self.enums.is_empty()
    }

    /// Returns the total number of entities in the document.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.classes.len() + self.namespaces.len() + self.enums.len()
    }
}

/// Description and deprecation metadata shared by every schema node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Docs {
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Deprecation flag. `None` when the node does not say.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deprecated: Option<bool>,
    /// Deprecation message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

impl Docs {
    /// Creates documentation with only a description.
    #[must_use]
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Returns true if the node is marked deprecated.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated.unwrap_or(false)
    }

    /// Returns the description, treating an empty string as absent.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Merges field-wise, preferring values set on `self`.
    #[must_use]
    pub fn or(&self, fallback: &Docs) -> Docs {
        Docs {
            description: self
                .description
                .clone()
                .or_else(|| fallback.description.clone()),
            is_deprecated: self.is_deprecated.or(fallback.is_deprecated),
            deprecation_message: self
                .deprecation_message
                .clone()
                .or_else(|| fallback.deprecation_message.clone()),
        }
    }
}

/// Access to the documentation of a schema node.
pub trait Documented {
    /// Returns the node's documentation.
    fn docs(&self) -> &Docs;

    /// Returns true if the node is marked deprecated.
    fn is_deprecated(&self) -> bool {
        self.docs().is_deprecated()
    }
}

impl Documented for Docs {
    fn docs(&self) -> &Docs {
        self
    }
}

macro_rules! impl_documented {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Documented for $ty {
                fn docs(&self) -> &Docs {
                    &self.docs
                }
            }
        )*
    };
}

impl_documented!(
    Class, Namespace, Enum, EnumValue, Property, Constant, Function, Signature, Parameter,
);

/// Class definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Class {
    /// Class name.
    pub name: String,
    /// Name of the base class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    /// Instance properties.
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Vec<Property>,
    /// Class-level constants.
    #[serde(default, deserialize_with = "null_as_default")]
    pub constants: Vec<Constant>,
    /// Instance functions.
    #[serde(default, alias = "Functions", deserialize_with = "null_as_default")]
    pub member_functions: Vec<Function>,
    /// Static functions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub static_functions: Vec<Function>,
    /// Documentation.
    #[serde(flatten)]
    pub docs: Docs,
}

impl Class {
    /// Creates a new class with no members.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the base class name.
    #[must_use]
    pub fn with_base(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }
}

/// Property tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// The property cannot be assigned.
    ReadOnly,
    /// Any tag the generator does not act on.
    #[serde(other)]
    Other,
}

/// Property definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Raw schema type reference.
    #[serde(rename = "Type")]
    pub type_name: String,
    /// Tags.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    /// Documentation.
    #[serde(flatten)]
    pub docs: Docs,
}

impl Property {
    /// Creates a new property.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            tags: Vec::new(),
            docs: Docs::default(),
        }
    }

    /// Returns true if the property carries the read-only tag.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.tags.contains(&Tag::ReadOnly)
    }

    /// Returns the parsed type reference.
    #[must_use]
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::parse(&self.type_name)
    }
}

/// Constant definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Constant {
    /// Constant name.
    pub name: String,
    /// Raw schema type reference.
    #[serde(rename = "Type")]
    pub type_name: String,
    /// Documentation.
    #[serde(flatten)]
    pub docs: Docs,
}

impl Constant {
    /// Creates a new constant.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            docs: Docs::default(),
        }
    }

    /// Returns the parsed type reference.
    #[must_use]
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::parse(&self.type_name)
    }
}

/// Function definition with one or more overloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Function {
    /// Function name.
    pub name: String,
    /// Overloads in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub signatures: Vec<Signature>,
    /// Documentation.
    #[serde(flatten)]
    pub docs: Docs,
}

impl Function {
    /// Creates a new function with the given overloads.
    #[must_use]
    pub fn new(name: impl Into<String>, signatures: Vec<Signature>) -> Self {
        Self {
            name: name.into(),
            signatures,
            docs: Docs::default(),
        }
    }
}

/// A single function overload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Signature {
    /// Parameters in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<Parameter>,
    /// Raw return type reference. `None` means no value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Documentation. Overrides the owning function's when set.
    #[serde(flatten)]
    pub docs: Docs,
}

impl Signature {
    /// Creates a new signature.
    #[must_use]
    pub fn new(parameters: Vec<Parameter>, return_type: Option<&str>) -> Self {
        Self {
            parameters,
            return_type: return_type.map(str::to_string),
            docs: Docs::default(),
        }
    }

    /// Returns the parsed return type, if any.
    #[must_use]
    pub fn return_type_ref(&self) -> Option<TypeRef> {
        self.return_type.as_deref().map(TypeRef::parse)
    }

    /// Documentation of this overload with the function's as fallback.
    #[must_use]
    pub fn effective_docs(&self, function: &Function) -> Docs {
        self.docs.or(&function.docs)
    }
}

/// Function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Raw schema type reference.
    #[serde(rename = "Type")]
    pub type_name: String,
    /// Whether the argument may be left out.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_optional: bool,
    /// Documentation.
    #[serde(flatten)]
    pub docs: Docs,
}

impl Parameter {
    /// Creates a required parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_optional: false,
            docs: Docs::default(),
        }
    }

    /// Marks the parameter optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Returns the parsed type reference.
    #[must_use]
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::parse(&self.type_name)
    }
}

/// Namespace definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Namespace {
    /// Namespace name.
    pub name: String,
    /// Namespace constants.
    #[serde(default, deserialize_with = "null_as_default")]
    pub constants: Vec<Constant>,
    /// Namespace functions.
    #[serde(default, alias = "Functions", deserialize_with = "null_as_default")]
    pub static_functions: Vec<Function>,
    /// Documentation.
    #[serde(flatten)]
    pub docs: Docs,
}

impl Namespace {
    /// Creates a new empty namespace.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Enum definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Enum {
    /// Enum name.
    pub name: String,
    /// Members in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<EnumValue>,
    /// Documentation.
    #[serde(flatten)]
    pub docs: Docs,
}

impl Enum {
    /// Creates a new enum with the given members.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<EnumValue>) -> Self {
        Self {
            name: name.into(),
            values,
            docs: Docs::default(),
        }
    }
}

/// Enum member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnumValue {
    /// Member name.
    pub name: String,
    /// Numeric value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    /// Documentation.
    #[serde(flatten)]
    pub docs: Docs,
}

impl EnumValue {
    /// Creates a new enum member.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<i64>) -> Self {
        Self {
            name: name.into(),
            value,
            docs: Docs::default(),
        }
    }
}
