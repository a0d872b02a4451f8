//! Schema type references.
//!
//! Types in the API document are plain strings. A small grammar layers two
//! wrappers on top of named types:
//!
//! - `Optional<T>` or `T?` for values that may be absent
//! - `Array<T>` or `T[]` for sequences
//!
//! Wrappers nest, so `Array<Optional<integer>>` and `integer?[]` describe the
//! same type. Parsing never fails: anything that is not a well-formed wrapper is
//! taken as a named type.

use std::fmt;

const OPTIONAL_WRAPPER: &str = "Optional";
const ARRAY_WRAPPER: &str = "Array";

/// Parsed schema type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive or entity name.
    Named(String),
    /// A value that may be absent.
    Optional(Box<TypeRef>),
    /// A sequence of values.
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Parses a raw schema type string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if let Some(inner) = strip_wrapper(raw, OPTIONAL_WRAPPER) {
            return Self::optional(Self::parse(inner));
        }
        if let Some(inner) = strip_wrapper(raw, ARRAY_WRAPPER) {
            return Self::array(Self::parse(inner));
        }
        if let Some(inner) = raw.strip_suffix("[]").filter(|i| !i.trim().is_empty()) {
            return Self::array(Self::parse(inner));
        }
        if let Some(inner) = raw.strip_suffix('?').filter(|i| !i.trim().is_empty()) {
            return Self::optional(Self::parse(inner));
        }

        Self::Named(raw.to_string())
    }

    /// Creates a named type reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps a type as optional.
    #[must_use]
    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Wraps a type as an array.
    #[must_use]
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Optional(inner) => write!(f, "{OPTIONAL_WRAPPER}<{inner}>"),
            Self::Array(inner) => write!(f, "{ARRAY_WRAPPER}<{inner}>"),
        }
    }
}

impl From<&str> for TypeRef {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Returns the inner text of `Wrapper<inner>`.
fn strip_wrapper<'a>(raw: &'a str, wrapper: &str) -> Option<&'a str> {
    raw.strip_prefix(wrapper)?
        .strip_prefix('<')?
        .strip_suffix('>')
        .filter(|inner| !inner.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named() {
        assert_eq!(TypeRef::parse("CoreObject"), TypeRef::named("CoreObject"));
        assert_eq!(TypeRef::parse("  number "), TypeRef::named("number"));
    }

    #[test]
    fn test_parse_generic_wrappers() {
        assert_eq!(
            TypeRef::parse("Array<Optional<integer>>"),
            TypeRef::array(TypeRef::optional(TypeRef::named("integer")))
        );
        assert_eq!(
            TypeRef::parse("Optional<Array<string>>"),
            TypeRef::optional(TypeRef::array(TypeRef::named("string")))
        );
    }

    #[test]
    fn test_parse_suffix_wrappers() {
        assert_eq!(
            TypeRef::parse("integer?[]"),
            TypeRef::array(TypeRef::optional(TypeRef::named("integer")))
        );
        assert_eq!(
            TypeRef::parse("Optional<integer>[]"),
            TypeRef::array(TypeRef::optional(TypeRef::named("integer")))
        );
        assert_eq!(
            TypeRef::parse("Array<Player>?"),
            TypeRef::optional(TypeRef::array(TypeRef::named("Player")))
        );
    }

    #[test]
    fn test_parse_malformed_is_named() {
        assert_eq!(TypeRef::parse("Array<"), TypeRef::named("Array<"));
        assert_eq!(TypeRef::parse("Optional<>"), TypeRef::named("Optional<>"));
        assert_eq!(TypeRef::parse("[]"), TypeRef::named("[]"));
        assert_eq!(TypeRef::parse("?"), TypeRef::named("?"));
    }

    #[test]
    fn test_display_canonical_form() {
        assert_eq!(
            TypeRef::parse("integer?[]").to_string(),
            "Array<Optional<integer>>"
        );
    }
}
