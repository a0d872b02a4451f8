//! # coredts Codegen
//!
//! TypeScript declaration generation from Core Lua API schemas.
//!
//! This crate provides:
//! - An indentation-aware code writer
//! - Schema type mapping and signature construction
//! - Class, namespace, and enum declaration generators
//! - The top-level generator assembling a complete `.d.ts` document

pub mod error;
pub mod generator;
pub mod options;
pub mod typescript;
pub mod writer;

pub use error::CodegenError;
pub use generator::Generator;
pub use options::GeneratorOptions;
pub use writer::CodeWriter;

/// Generates declarations from an API document string.
///
/// # Arguments
/// * `json` - API document content
///
/// # Returns
/// Generated declaration file content.
///
/// # Errors
/// Returns `CodegenError` if the document cannot be parsed.
pub fn generate_from_json(json: &str) -> Result<String, CodegenError> {
    generate_from_json_with(json, GeneratorOptions::default())
}

/// Generates declarations from an API document string with custom options.
///
/// # Errors
/// Returns `CodegenError` if the document cannot be parsed.
pub fn generate_from_json_with(
    json: &str,
    options: GeneratorOptions,
) -> Result<String, CodegenError> {
    let api = coredts_schema::parse_api(json)?;
    Ok(Generator::new(&api).with_options(options).generate())
}

/// Generates declarations from an API document file.
///
/// # Arguments
/// * `path` - Path to the API document
///
/// # Returns
/// Generated declaration file content.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let api = coredts_schema::parse_api_file(path)?;
    Ok(Generator::new(&api).generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ROOT_API: &str = r#"{
        "Classes": [
            {
                "Name": "Root",
                "Properties": [],
                "Functions": [{"Name": "IsA", "Signatures": [{"Parameters": [], "ReturnType": "boolean"}]}]
            }
        ]
    }"#;

    #[test]
    fn test_generate_from_json() {
        let output = generate_from_json(ROOT_API).expect("Failed to generate");

        assert!(output.contains("declare interface Root {"));
        assert!(output.contains("    IsA<T extends Root>(): this is T;"));
        assert!(!output.contains("RootStatic"));
    }

    #[test]
    fn test_generate_from_invalid_json() {
        let err = generate_from_json("not json").unwrap_err();
        assert!(matches!(err, CodegenError::Schema(_)));
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(ROOT_API.as_bytes())
            .expect("Failed to write temp file");

        let output = generate_from_file(file.path()).expect("Failed to generate");
        assert!(output.starts_with("/* eslint-disable"));
    }

    #[test]
    fn test_generate_with_options() {
        let json = r#"{"Enums": [{"Name": "Old", "IsDeprecated": true, "Values": []}]}"#;

        let omitted = generate_from_json(json).expect("Failed to generate");
        assert!(!omitted.contains("declare enum Old"));

        let kept = generate_from_json_with(json, GeneratorOptions::new().omit_deprecated(false))
            .expect("Failed to generate");
        assert!(kept.contains("declare enum Old {"));
    }
}
