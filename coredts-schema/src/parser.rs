//! API document loading.
//!
//! This module decodes the JSON API document into the schema model.

use crate::error::SchemaError;
use crate::types::CoreApi;
use std::io::Read;
use std::path::Path;

/// Parses an API document from a JSON string.
///
/// # Arguments
/// * `json` - API document content
///
/// # Returns
/// Parsed document or schema error.
///
/// # Errors
/// Returns `SchemaError` if the content is not valid JSON, or if the document
/// root is not an object.
pub fn parse_api(json: &str) -> Result<CoreApi, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    from_value(value)
}

/// Parses an API document from a reader.
///
/// # Errors
/// Returns `SchemaError` if reading or decoding fails.
pub fn parse_api_reader<R: Read>(reader: R) -> Result<CoreApi, SchemaError> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    from_value(value)
}

/// Parses an API document from a file.
///
/// # Errors
/// Returns `SchemaError` if the file cannot be read or decoded.
pub fn parse_api_file(path: &Path) -> Result<CoreApi, SchemaError> {
    let json = std::fs::read_to_string(path)?;
    parse_api(&json)
}

fn from_value(value: serde_json::Value) -> Result<CoreApi, SchemaError> {
    if !value.is_object() {
        return Err(SchemaError::invalid_structure(
            "API document root must be an object",
        ));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_API: &str = r#"{
        "Classes": [
            {
                "Name": "Object",
                "Properties": [{"Name": "id", "Type": "string", "Tags": ["ReadOnly"]}],
                "MemberFunctions": [
                    {"Name": "IsA", "Signatures": [{"Parameters": [{"Name": "typeName", "Type": "string"}], "ReturnType": "bool"}]}
                ]
            },
            {"Name": "CoreObject", "BaseType": "Object"}
        ],
        "Namespaces": [{"Name": "World", "StaticFunctions": []}],
        "Enums": [{"Name": "Color", "Values": [{"Name": "RED", "Value": 0}]}]
    }"#;

    #[test]
    fn test_parse_api() {
        let api = parse_api(TEST_API).expect("Failed to parse");

        assert_eq!(api.classes.len(), 2);
        assert_eq!(api.namespaces.len(), 1);
        assert_eq!(api.enums.len(), 1);
        assert_eq!(api.classes[1].base_type.as_deref(), Some("Object"));
        assert!(api.classes[0].properties[0].is_read_only());
        assert_eq!(
            api.classes[0].member_functions[0].signatures[0]
                .return_type
                .as_deref(),
            Some("bool")
        );
    }

    #[test]
    fn test_parse_missing_collections() {
        let api = parse_api("{}").expect("Failed to parse");
        assert!(api.is_empty());
    }

    #[test]
    fn test_parse_null_collections() {
        let api = parse_api(r#"{"Classes": null, "Namespaces": null, "Enums": null}"#)
            .expect("Failed to parse");
        assert!(api.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = parse_api("[]").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidStructure { .. }));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_api("{\"Classes\": [").unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }

    #[test]
    fn test_parse_reader() {
        let api = parse_api_reader(TEST_API.as_bytes()).expect("Failed to parse");
        assert_eq!(api.entity_count(), 4);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(TEST_API.as_bytes())
            .expect("Failed to write temp file");

        let api = parse_api_file(file.path()).expect("Failed to parse");
        assert_eq!(api.classes[0].name, "Object");
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_api_file(Path::new("/nonexistent/CoreLuaAPI.json")).unwrap_err();
        assert!(matches!(err, SchemaError::Io(_)));
    }
}
