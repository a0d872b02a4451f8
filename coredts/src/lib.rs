//! # coredts
//!
//! TypeScript declaration generator for the Core Lua API.
//!
//! The API document describes classes, namespaces, and enums with typed
//! properties, overloaded functions, constants, and documentation. coredts
//! turns it into a single `.d.ts` file for TypeScript-to-Lua projects.
//!
//! ## Quick Start
//!
//! ```ignore
//! use coredts::prelude::*;
//!
//! let api = parse_api(&std::fs::read_to_string("CoreLuaAPI.json")?)?;
//! let declarations = Generator::new(&api)
//!     .with_options(GeneratorOptions::new().omit_deprecated(false))
//!     .generate();
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - API document model, type references, and entity index
//! - [`codegen`] - Code writer, type mapping, and declaration generators
//! - [`cli`] - Command-line pipeline used by the `coredts` binary

pub mod cli;
pub mod prelude;

/// API document model and lookup structures.
pub mod schema {
    pub use coredts_schema::*;
}

/// Declaration generation.
pub mod codegen {
    pub use coredts_codegen::*;
}

pub use coredts_codegen::{CodeWriter, CodegenError, Generator, GeneratorOptions};
pub use coredts_schema::{CoreApi, SchemaError, parse_api, parse_api_file};
