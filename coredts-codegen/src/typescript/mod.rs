//! TypeScript declaration generation modules.

pub mod classes;
pub mod enums;
pub mod functions;
pub mod namespaces;
pub mod signatures;
pub mod types;

pub use classes::ClassGenerator;
pub use enums::EnumGenerator;
pub use functions::FunctionGenerator;
pub use namespaces::NamespaceGenerator;
pub use signatures::build_signature;
pub use types::{ContextNode, MappedType, TypeContext, TypeUsage, map_type, map_type_name};
