//! Intermediate representation for code generation.
//!
//! This module provides a sorted, name-resolved view of the schema that the
//! header emitters consume directly: entity names are already capitalized,
//! enum entries carry their final encoded value and every object carries its
//! synthetic lifecycle methods.

use crate::error::SchemaError;
use crate::types::{
    ConstantDef, EnumDef, FunctionArg, FunctionDef, FunctionReturns, ObjectDef, PointerType,
    Schema, StructDef, StructKind, StructMember, TypeRef,
};

/// Names of the lifecycle methods every object receives, in emission order.
pub const LIFECYCLE_METHODS: [&str; 2] = ["reference", "release"];

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Copyright text.
    pub copyright: String,
    /// Global constants, in authored order.
    pub constants: Vec<ConstantDef>,
    /// Enums sorted by capitalized name.
    pub enums: Vec<ResolvedEnum>,
    /// Callbacks sorted by capitalized name.
    pub callbacks: Vec<ResolvedFunction>,
    /// Structs sorted by capitalized name.
    pub structs: Vec<ResolvedStruct>,
    /// Objects sorted by capitalized name.
    pub objects: Vec<ResolvedObject>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a parsed schema.
    ///
    /// # Errors
    /// Returns `SchemaError::BitmaskOverflow` if a bitmask enum has an
    /// implicitly encoded entry past bit 63.
    pub fn from_schema(schema: &Schema) -> Result<Self, SchemaError> {
        let mut enums = schema
            .enums
            .iter()
            .map(ResolvedEnum::from_enum_def)
            .collect::<Result<Vec<_>, _>>()?;
        enums.sort_by(|a, b| a.name.cmp(&b.name));

        let mut callbacks: Vec<_> = schema
            .callbacks
            .iter()
            .map(ResolvedFunction::from_function_def)
            .collect();
        callbacks.sort_by(|a, b| a.name.cmp(&b.name));

        let mut structs: Vec<_> = schema
            .structs
            .iter()
            .map(ResolvedStruct::from_struct_def)
            .collect();
        structs.sort_by(|a, b| a.name.cmp(&b.name));

        let mut objects: Vec<_> = schema
            .objects
            .iter()
            .map(ResolvedObject::from_object_def)
            .collect();
        objects.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            copyright: schema.copyright.clone(),
            constants: schema.constants.clone(),
            enums,
            callbacks,
            structs,
            objects,
        })
    }
}

/// Resolved enum with final entry values.
#[derive(Debug, Clone)]
pub struct ResolvedEnum {
    /// Capitalized enum name.
    pub name: String,
    /// Documentation.
    pub doc: String,
    /// Whether entries are OR-combinable flags.
    pub bitmask: bool,
    /// Entries in authored order.
    pub entries: Vec<ResolvedEnumEntry>,
}

impl ResolvedEnum {
    /// Resolves an enum, encoding each entry.
    ///
    /// Plain enums number entries from zero by position. Bitmask enums use
    /// `2^(index-1)`, so the leading entry is zero. An explicit value always
    /// wins.
    ///
    /// # Errors
    /// Returns `SchemaError::BitmaskOverflow` if an implicit bitmask value
    /// needs more than 64 bits.
    pub fn from_enum_def(def: &EnumDef) -> Result<Self, SchemaError> {
        let entries = def
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| -> Result<ResolvedEnumEntry, SchemaError> {
                let value = match entry.value {
                    Some(v) => v,
                    None if def.bitmask => {
                        bitmask_value(index).ok_or_else(|| SchemaError::BitmaskOverflow {
                            enum_name: def.name.clone(),
                            entry: entry.name.clone(),
                            index,
                        })?
                    }
                    None => index as u64,
                };
                Ok(ResolvedEnumEntry {
                    name: to_pascal_case(&entry.name),
                    value,
                    doc: entry.doc.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: to_pascal_case(&def.name),
            doc: def.doc.clone(),
            bitmask: def.bitmask,
            entries,
        })
    }
}

/// Positional bitmask value: zero for the first entry, then successive powers of two.
fn bitmask_value(index: usize) -> Option<u64> {
    match index {
        0 => Some(0),
        n => u32::try_from(n - 1).ok().and_then(|shift| 1u64.checked_shl(shift)),
    }
}

/// Resolved enum entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnumEntry {
    /// Capitalized entry name.
    pub name: String,
    /// Encoded value.
    pub value: u64,
    /// Documentation.
    pub doc: String,
}

/// Resolved parameter: a struct member or a function argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParam {
    /// Field-case name.
    pub name: String,
    /// Type reference.
    pub ty: TypeRef,
    /// Pointer qualifier.
    pub pointer: PointerType,
    /// Whether the value may be null.
    pub optional: bool,
    /// Documentation.
    pub doc: String,
}

impl From<&StructMember> for ResolvedParam {
    fn from(member: &StructMember) -> Self {
        Self {
            name: to_camel_case(&member.name),
            ty: member.ty.clone(),
            pointer: member.pointer,
            optional: member.optional,
            doc: member.doc.clone(),
        }
    }
}

impl From<&FunctionArg> for ResolvedParam {
    fn from(arg: &FunctionArg) -> Self {
        Self {
            name: to_camel_case(&arg.name),
            ty: arg.ty.clone(),
            pointer: arg.pointer,
            optional: arg.optional,
            doc: arg.doc.clone(),
        }
    }
}

/// Resolved function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFunction {
    /// Capitalized function name.
    pub name: String,
    /// Documentation.
    pub doc: String,
    /// Return type.
    pub returns: FunctionReturns,
    /// Arguments in authored order.
    pub args: Vec<ResolvedParam>,
}

impl ResolvedFunction {
    /// Creates a resolved function from a function definition.
    #[must_use]
    pub fn from_function_def(def: &FunctionDef) -> Self {
        Self {
            name: to_pascal_case(&def.name),
            doc: def.doc.clone(),
            returns: def.returns.clone(),
            args: def.args.iter().map(ResolvedParam::from).collect(),
        }
    }
}

/// Resolved struct information.
#[derive(Debug, Clone)]
pub struct ResolvedStruct {
    /// Capitalized struct name.
    pub name: String,
    /// Structural kind.
    pub kind: StructKind,
    /// Documentation.
    pub doc: String,
    /// Members in authored order, excluding the implicit chain member.
    pub members: Vec<ResolvedParam>,
    /// Capitalized names of referenced structs, deduplicated, in member order.
    pub dependencies: Vec<String>,
}

impl ResolvedStruct {
    /// Creates a resolved struct from a struct definition.
    #[must_use]
    pub fn from_struct_def(def: &StructDef) -> Self {
        let mut dependencies: Vec<String> = Vec::new();
        for name in def.referenced_structs() {
            let name = to_pascal_case(name);
            if !dependencies.contains(&name) {
                dependencies.push(name);
            }
        }

        Self {
            name: to_pascal_case(&def.name),
            kind: def.kind,
            doc: def.doc.clone(),
            members: def.members.iter().map(ResolvedParam::from).collect(),
            dependencies,
        }
    }

    /// Returns true if any member references another struct.
    #[must_use]
    pub fn has_struct_members(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

/// Resolved object information.
#[derive(Debug, Clone)]
pub struct ResolvedObject {
    /// Capitalized object name.
    pub name: String,
    /// Field-case name, used for the handle parameter.
    pub handle_name: String,
    /// Documentation.
    pub doc: String,
    /// Declared methods sorted by name, followed by the lifecycle methods.
    pub methods: Vec<ResolvedFunction>,
}

impl ResolvedObject {
    /// Creates a resolved object from an object definition.
    #[must_use]
    pub fn from_object_def(def: &ObjectDef) -> Self {
        let mut methods: Vec<_> = def
            .methods
            .iter()
            .map(ResolvedFunction::from_function_def)
            .collect();
        methods.sort_by(|a, b| a.name.cmp(&b.name));
        methods.extend(
            LIFECYCLE_METHODS
                .iter()
                .map(|name| ResolvedFunction::from_function_def(&FunctionDef::void(*name))),
        );

        Self {
            name: to_pascal_case(&def.name),
            handle_name: to_camel_case(&def.name),
            doc: def.doc.clone(),
            methods,
        }
    }
}

/// Converts a snake_case string to CONSTANT_CASE.
///
/// Underscores are kept; every other character is upper-cased.
#[must_use]
pub fn to_constant_case(s: &str) -> String {
    s.to_uppercase()
}

/// Converts a snake_case string to PascalCase.
///
/// Underscores are consumed and the character after each one is
/// upper-cased; all other characters pass through, so `whole_map_SIZE`
/// becomes `WholeMapSIZE`.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    join_words(s, true)
}

/// Converts a snake_case string to camelCase.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    join_words(s, false)
}

fn join_words(s: &str, capitalize_first: bool) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = capitalize_first;

    for c in s.chars() {
        if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else if c == '_' {
            capitalize_next = true;
        } else {
            result.push(c);
        }
    }

    result
}
