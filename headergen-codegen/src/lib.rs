//! # headergen Codegen
//!
//! C header synthesis from API schemas.
//!
//! This crate provides:
//! - Type, value and naming rules mapping schema entities to C
//! - Emitters for constants, enums, callbacks, structs and object methods
//! - Struct ordering with dependency layers and cycle detection
//! - A header assembler producing one deterministic document

pub mod c;
pub mod config;
pub mod error;
pub mod generator;
pub mod resolver;

pub use config::{GeneratorConfig, StructOrder};
pub use error::CodegenError;
pub use generator::Generator;

/// Generates a C header from a YAML schema string.
///
/// # Arguments
/// * `yaml` - YAML schema content
///
/// # Returns
/// Generated header as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, resolution or generation fails.
pub fn generate_from_yaml(yaml: &str) -> Result<String, CodegenError> {
    generate_from_yaml_with_config(yaml, GeneratorConfig::default())
}

/// Generates a C header from a YAML schema string with an explicit configuration.
///
/// # Errors
/// Returns `CodegenError` if parsing, resolution or generation fails.
pub fn generate_from_yaml_with_config(
    yaml: &str,
    config: GeneratorConfig,
) -> Result<String, CodegenError> {
    let schema = headergen_schema::parse_schema(yaml)?;
    let ir = headergen_schema::SchemaIr::from_schema(&schema)?;
    Generator::with_config(&ir, config).generate()
}

/// Generates a C header from a YAML schema file.
///
/// # Arguments
/// * `path` - Path to the YAML schema file
/// * `config` - Generator configuration
///
/// # Returns
/// Generated header as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: GeneratorConfig,
) -> Result<String, CodegenError> {
    let yaml = std::fs::read_to_string(path)?;
    generate_from_yaml_with_config(&yaml, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SCHEMA: &str = r#"
copyright: Copyright 2024
enums:
  - name: feature_name
    doc: ""
    entries:
      - name: undefined
        doc: ""
objects:
  - name: instance
    doc: ""
"#;

    #[test]
    fn test_generate_from_yaml() {
        let header = generate_from_yaml(SCHEMA).expect("Failed to generate");
        assert!(header.contains("WGPUFeatureName_Undefined = 0x00000000,"));
        assert!(header.contains("WGPU_EXPORT void wgpuInstanceRelease(WGPUInstance instance)"));
    }

    #[test]
    fn test_unknown_type_aborts() {
        let yaml = r#"
objects:
  - name: device
    methods:
      - name: create_thing
        returns:
          type: thing.handle
"#;
        let err = generate_from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::Parse(headergen_schema::ParseError::UnknownType { .. })
        ));
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(SCHEMA.as_bytes())
            .expect("Failed to write schema");

        let config = GeneratorConfig::new().with_docs(false);
        let header = generate_from_file(file.path(), config.clone()).unwrap();
        let expected = generate_from_yaml_with_config(SCHEMA, config).unwrap();
        assert_eq!(header, expected);
    }

    #[test]
    fn test_generate_from_missing_file() {
        let err = generate_from_file(
            std::path::Path::new("/nonexistent/webgpu.yml"),
            GeneratorConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
