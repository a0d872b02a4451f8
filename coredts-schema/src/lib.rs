//! # coredts Schema
//!
//! Core Lua API schema model and lookup structures.
//!
//! This crate provides:
//! - Serde data model for the API document (classes, namespaces, enums)
//! - Parsing of schema type references (`Optional<T>`, `Array<T>`, `T?`, `T[]`)
//! - Loading helpers for JSON strings, readers, and files
//! - The per-kind name to entity index used during generation

pub mod error;
pub mod index;
pub mod parser;
pub mod type_ref;
pub mod types;

pub use error::SchemaError;
pub use index::{SchemaIndex, unique_names};
pub use parser::{parse_api, parse_api_file, parse_api_reader};
pub use type_ref::TypeRef;
pub use types::{
    Class, Constant, CoreApi, Docs, Documented, Enum, EnumValue, Function, Namespace, Parameter,
    Property, Signature, Tag,
};
