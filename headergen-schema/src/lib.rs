//! # headergen Schema
//!
//! API schema loader and entity model.
//!
//! This crate provides:
//! - YAML schema loading with batched diagnostics
//! - Tagged entity types for constants, enums, callbacks, structs and objects
//! - Naming transformations shared by every emitter
//! - Intermediate representation for header generation

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;

pub use error::{ParseError, SchemaError};
pub use ir::SchemaIr;
pub use parser::{parse_schema, parse_schema_file};
pub use types::{
    ConstantDef, EnumDef, EnumEntry, FunctionArg, FunctionDef, FunctionReturns, ObjectDef,
    PointerType, PrimitiveType, Schema, StructDef, StructKind, StructMember, TypeRef,
};
