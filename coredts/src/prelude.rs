//! Prelude module for convenient imports.
//!
//! ```ignore
//! use coredts::prelude::*;
//! ```

// Schema types
pub use coredts_schema::{
    Class, Constant, CoreApi, Docs, Documented, Enum, EnumValue, Function, Namespace, Parameter,
    Property, SchemaError, SchemaIndex, Signature, Tag, TypeRef, parse_api, parse_api_file,
    parse_api_reader,
};

// Generation
pub use coredts_codegen::typescript::{TypeContext, TypeUsage, build_signature, map_type};
pub use coredts_codegen::{
    CodeWriter, CodegenError, Generator, GeneratorOptions, generate_from_file,
    generate_from_json,
};
