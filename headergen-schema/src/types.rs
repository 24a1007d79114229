//! Schema entity definitions.
//!
//! This module contains the data structures describing an API surface:
//! constants, enums, callbacks, structs and objects, together with the
//! tagged type references their members point at.

use std::fmt;

/// Complete API schema definition.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Copyright text placed at the top of the generated header.
    pub copyright: String,
    /// Names of the base types of the API.
    pub basetypes: Vec<String>,
    /// Global constants, in authored order.
    pub constants: Vec<ConstantDef>,
    /// Enum definitions.
    pub enums: Vec<EnumDef>,
    /// Free callback signatures.
    pub callbacks: Vec<FunctionDef>,
    /// Struct definitions.
    pub structs: Vec<StructDef>,
    /// Object definitions.
    pub objects: Vec<ObjectDef>,
}

/// Global constant definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDef {
    /// Constant name (snake case).
    pub name: String,
    /// Literal value, possibly a symbolic token such as `uint32_max`.
    pub value: String,
    /// Documentation.
    pub doc: String,
}

/// Enum definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Enum name (snake case).
    pub name: String,
    /// Documentation.
    pub doc: String,
    /// Whether entries are OR-combinable flags.
    pub bitmask: bool,
    /// Entries in authored order.
    pub entries: Vec<EnumEntry>,
}

/// A single enum entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    /// Entry name (snake case).
    pub name: String,
    /// Explicit value, overriding the positional encoding.
    pub value: Option<u64>,
    /// Documentation.
    pub doc: String,
}

/// Function signature, used for free callbacks and object methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// Function name (snake case).
    pub name: String,
    /// Documentation.
    pub doc: String,
    /// Return type.
    pub returns: FunctionReturns,
    /// Arguments in authored order.
    pub args: Vec<FunctionArg>,
}

impl FunctionDef {
    /// Creates a function that takes no arguments and returns nothing.
    #[must_use]
    pub fn void(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            returns: FunctionReturns::default(),
            args: Vec::new(),
        }
    }
}

/// Function return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionReturns {
    /// Documentation.
    pub doc: String,
    /// Returned type.
    pub ty: TypeRef,
    /// Pointer qualifier of the returned type.
    pub pointer: PointerType,
}

impl Default for FunctionReturns {
    fn default() -> Self {
        Self {
            doc: String::new(),
            ty: TypeRef::Primitive(PrimitiveType::Void),
            pointer: PointerType::None,
        }
    }
}

impl FunctionReturns {
    /// Returns true if the function returns nothing.
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self.ty, TypeRef::Primitive(PrimitiveType::Void))
    }
}

/// Function argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArg {
    /// Argument name (snake case).
    pub name: String,
    /// Documentation.
    pub doc: String,
    /// Argument type.
    pub ty: TypeRef,
    /// Pointer qualifier.
    pub pointer: PointerType,
    /// Whether the argument may be null.
    pub optional: bool,
}

/// Structural kind of a struct, deciding its implicit leading member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StructKind {
    /// Plain struct with no chain link.
    #[default]
    Standalone,
    /// Extendable input struct carrying a `nextInChain` pointer.
    BaseIn,
    /// Input extension embedding a chain link.
    ExtensionIn,
    /// Extendable output struct carrying a `nextInChain` pointer.
    BaseOut,
    /// Output extension embedding a chain link.
    ExtensionOut,
}

impl StructKind {
    /// Parses a struct kind from its schema token.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "standalone" => Some(Self::Standalone),
            "base_in" => Some(Self::BaseIn),
            "extension_in" => Some(Self::ExtensionIn),
            "base_out" => Some(Self::BaseOut),
            "extension_out" => Some(Self::ExtensionOut),
            _ => None,
        }
    }
}

/// Struct definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    /// Struct name (snake case).
    pub name: String,
    /// Structural kind.
    pub kind: StructKind,
    /// Documentation.
    pub doc: String,
    /// Members in authored order.
    pub members: Vec<StructMember>,
}

impl StructDef {
    /// Returns the schema names of every struct referenced by a member,
    /// in member order.
    #[must_use]
    pub fn referenced_structs(&self) -> Vec<&str> {
        self.members
            .iter()
            .filter_map(|m| match &m.ty {
                TypeRef::Struct(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Struct member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructMember {
    /// Member name (snake case).
    pub name: String,
    /// Member type.
    pub ty: TypeRef,
    /// Pointer qualifier.
    pub pointer: PointerType,
    /// Whether the member may be null.
    pub optional: bool,
    /// Documentation.
    pub doc: String,
}

/// Object definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDef {
    /// Object name (snake case).
    pub name: String,
    /// Documentation.
    pub doc: String,
    /// Declared methods in authored order.
    pub methods: Vec<FunctionDef>,
}

/// Pointer qualifier applied to a type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerType {
    /// Plain value.
    #[default]
    None,
    /// Pointer to mutable data.
    Mutable,
    /// Pointer to immutable data.
    Immutable,
}

impl PointerType {
    /// Parses a pointer qualifier from its schema token.
    ///
    /// An empty token means no pointer.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" => Some(Self::None),
            "mutable" => Some(Self::Mutable),
            "immutable" => Some(Self::Immutable),
            _ => None,
        }
    }
}

/// Built-in primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// 32-bit boolean.
    Bool,
    /// Immutable null-terminated string.
    String,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Platform-sized unsigned integer.
    Usize,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// No value.
    Void,
}

impl PrimitiveType {
    /// Parses a primitive type from its schema name.
    #[must_use]
    pub fn from_schema_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(Self::Bool),
            "string" => Some(Self::String),
            "uint16" => Some(Self::Uint16),
            "uint32" => Some(Self::Uint32),
            "uint64" => Some(Self::Uint64),
            "usize" => Some(Self::Usize),
            "int16" => Some(Self::Int16),
            "int32" => Some(Self::Int32),
            "float32" => Some(Self::Float32),
            "float64" => Some(Self::Float64),
            "c_void" => Some(Self::Void),
            _ => None,
        }
    }

    /// Returns the schema name.
    #[must_use]
    pub const fn schema_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::String => "string",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Usize => "usize",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Void => "c_void",
        }
    }
}

/// A resolved type reference: either a primitive or a named schema entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Built-in primitive.
    Primitive(PrimitiveType),
    /// Reference to an enum by schema name.
    Enum(String),
    /// Reference to a struct by schema name.
    Struct(String),
    /// Reference to a callback by schema name.
    Callback(String),
    /// Reference to an object by schema name.
    Object(String),
}

impl TypeRef {
    /// Parses a type token such as `uint32` or `struct.color`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(prim) = PrimitiveType::from_schema_name(token) {
            return Some(Self::Primitive(prim));
        }

        let (kind, name) = token.split_once('.')?;
        if name.is_empty() {
            return None;
        }
        let name = name.to_string();
        match kind {
            "enum" => Some(Self::Enum(name)),
            "struct" => Some(Self::Struct(name)),
            "callback" => Some(Self::Callback(name)),
            "object" => Some(Self::Object(name)),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.schema_name()),
            Self::Enum(n) => write!(f, "enum.{n}"),
            Self::Struct(n) => write!(f, "struct.{n}"),
            Self::Callback(n) => write!(f, "callback.{n}"),
            Self::Object(n) => write!(f, "object.{n}"),
        }
    }
}
