//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use headergen::prelude::*;
//! ```

// Schema types
pub use headergen_schema::{
    ParseError, PointerType, PrimitiveType, Schema, SchemaError, SchemaIr, StructKind, TypeRef,
    parse_schema, parse_schema_file,
};

// Generation types
pub use headergen_codegen::{
    CodegenError, Generator, GeneratorConfig, StructOrder, generate_from_file, generate_from_yaml,
    generate_from_yaml_with_config,
};
