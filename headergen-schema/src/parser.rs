//! YAML schema loader.
//!
//! The document is first deserialized into a loosely-typed raw form and then
//! lowered into the tagged entity model of [`crate::types`]. Lowering keeps
//! going after a defect so that every unknown type token, bad pointer
//! qualifier and malformed enum literal is reported in a single
//! [`ParseError::Invalid`] batch.

use crate::error::ParseError;
use crate::types::{
    ConstantDef, EnumDef, EnumEntry, FunctionArg, FunctionDef, FunctionReturns, ObjectDef,
    PointerType, PrimitiveType, Schema, StructDef, StructKind, StructMember, TypeRef,
};
use serde::Deserialize;
use std::path::Path;

/// Parses a schema from a YAML string.
///
/// # Arguments
/// * `yaml` - YAML schema content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError::Yaml` if the document is malformed, or
/// `ParseError::Invalid` listing every entity that could not be lowered.
pub fn parse_schema(yaml: &str) -> Result<Schema, ParseError> {
    let raw: RawSchema = serde_yaml::from_str(yaml)?;
    lower_schema(raw)
}

/// Reads and parses a schema file.
///
/// # Errors
/// Returns `ParseError::Io` if the file cannot be read, otherwise the errors
/// of [`parse_schema`].
pub fn parse_schema_file(path: &Path) -> Result<Schema, ParseError> {
    let yaml = std::fs::read_to_string(path)?;
    parse_schema(&yaml)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSchema {
    copyright: String,
    basetypes: Vec<String>,
    global: RawGlobal,
    enums: Vec<RawEnum>,
    callbacks: Vec<RawFunction>,
    structs: Vec<RawStruct>,
    objects: Vec<RawObject>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGlobal {
    constants: Vec<RawConstant>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConstant {
    name: String,
    value: Option<String>,
    doc: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEnum {
    name: String,
    doc: String,
    bitmask: bool,
    entries: Vec<RawEnumEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEnumEntry {
    name: String,
    value: Option<String>,
    doc: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFunction {
    name: String,
    doc: String,
    returns: Option<RawReturns>,
    args: Vec<RawMember>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawReturns {
    doc: String,
    #[serde(rename = "type")]
    ty: String,
    pointer: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStruct {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    doc: String,
    members: Vec<RawMember>,
}

/// Shared raw shape of struct members and function arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMember {
    name: String,
    doc: String,
    #[serde(rename = "type")]
    ty: String,
    pointer: String,
    optional: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawObject {
    name: String,
    doc: String,
    methods: Vec<RawFunction>,
}

/// Lowers a raw document, collecting every defect.
fn lower_schema(raw: RawSchema) -> Result<Schema, ParseError> {
    let mut errors = Vec::new();

    let constants = raw
        .global
        .constants
        .into_iter()
        .map(|c| ConstantDef {
            name: c.name,
            value: c.value.unwrap_or_default(),
            doc: c.doc,
        })
        .collect();

    let enums = raw
        .enums
        .into_iter()
        .map(|e| lower_enum(e, &mut errors))
        .collect();

    let callbacks = raw
        .callbacks
        .into_iter()
        .map(|f| {
            let path = format!("callbacks.{}", f.name);
            lower_function(f, &path, &mut errors)
        })
        .collect();

    let structs = raw
        .structs
        .into_iter()
        .map(|s| lower_struct(s, &mut errors))
        .collect();

    let objects = raw
        .objects
        .into_iter()
        .map(|o| lower_object(o, &mut errors))
        .collect();

    if !errors.is_empty() {
        return Err(if errors.len() == 1 {
            errors.remove(0)
        } else {
            ParseError::Invalid { errors }
        });
    }

    Ok(Schema {
        copyright: raw.copyright,
        basetypes: raw.basetypes,
        constants,
        enums,
        callbacks,
        structs,
        objects,
    })
}

fn lower_enum(raw: RawEnum, errors: &mut Vec<ParseError>) -> EnumDef {
    let entries = raw
        .entries
        .into_iter()
        .map(|entry| {
            let value = match entry.value.as_deref() {
                None | Some("") => None,
                Some(literal) => match literal.parse::<u64>() {
                    Ok(v) => Some(v),
                    Err(_) => {
                        errors.push(ParseError::invalid_enum_value(
                            &raw.name,
                            &entry.name,
                            literal,
                        ));
                        None
                    }
                },
            };
            EnumEntry {
                name: entry.name,
                value,
                doc: entry.doc,
            }
        })
        .collect();

    EnumDef {
        name: raw.name,
        doc: raw.doc,
        bitmask: raw.bitmask,
        entries,
    }
}

fn lower_struct(raw: RawStruct, errors: &mut Vec<ParseError>) -> StructDef {
    let kind = StructKind::parse(&raw.kind).unwrap_or_else(|| {
        errors.push(ParseError::InvalidStructKind {
            name: raw.name.clone(),
            value: raw.kind.clone(),
        });
        StructKind::Standalone
    });

    let members = raw
        .members
        .into_iter()
        .map(|m| {
            let path = format!("structs.{}.members.{}", raw.name, m.name);
            let ty = lower_type(&m.ty, &path, errors);
            let pointer = lower_pointer(&m.pointer, &path, errors);
            StructMember {
                name: m.name,
                ty,
                pointer,
                optional: m.optional,
                doc: m.doc,
            }
        })
        .collect();

    StructDef {
        name: raw.name,
        kind,
        doc: raw.doc,
        members,
    }
}

fn lower_object(raw: RawObject, errors: &mut Vec<ParseError>) -> ObjectDef {
    let methods = raw
        .methods
        .into_iter()
        .map(|f| {
            let path = format!("objects.{}.methods.{}", raw.name, f.name);
            lower_function(f, &path, errors)
        })
        .collect();

    ObjectDef {
        name: raw.name,
        doc: raw.doc,
        methods,
    }
}

fn lower_function(raw: RawFunction, path: &str, errors: &mut Vec<ParseError>) -> FunctionDef {
    let returns = match raw.returns {
        Some(r) => {
            let returns_path = format!("{path}.returns");
            FunctionReturns {
                ty: lower_type(&r.ty, &returns_path, errors),
                pointer: lower_pointer(&r.pointer, &returns_path, errors),
                doc: r.doc,
            }
        }
        None => FunctionReturns::default(),
    };

    let args = raw
        .args
        .into_iter()
        .map(|a| {
            let arg_path = format!("{path}.args.{}", a.name);
            FunctionArg {
                ty: lower_type(&a.ty, &arg_path, errors),
                pointer: lower_pointer(&a.pointer, &arg_path, errors),
                name: a.name,
                doc: a.doc,
                optional: a.optional,
            }
        })
        .collect();

    FunctionDef {
        name: raw.name,
        doc: raw.doc,
        returns,
        args,
    }
}

fn lower_type(token: &str, path: &str, errors: &mut Vec<ParseError>) -> TypeRef {
    TypeRef::parse(token).unwrap_or_else(|| {
        errors.push(ParseError::unknown_type(token, path));
        TypeRef::Primitive(PrimitiveType::Void)
    })
}

fn lower_pointer(token: &str, path: &str, errors: &mut Vec<ParseError>) -> PointerType {
    PointerType::parse(token).unwrap_or_else(|| {
        errors.push(ParseError::invalid_pointer(path, token));
        PointerType::None
    })
}
