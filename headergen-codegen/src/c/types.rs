//! Mapping of schema types and values to C.

use headergen_schema::ir::{ResolvedParam, to_pascal_case};
use headergen_schema::types::{PointerType, PrimitiveType, TypeRef};

/// Prefix applied to every named entity of the API.
pub const PREFIX: &str = "WGPU";

/// Attribute marking a pointer that may be null.
pub const NULLABLE: &str = "WGPU_NULLABLE";

/// Returns the C spelling of a primitive type.
///
/// Strings are always `char const *`, so their base is `char`.
#[must_use]
pub const fn primitive_c_type(prim: PrimitiveType) -> &'static str {
    match prim {
        PrimitiveType::Bool => "WGPUBool",
        PrimitiveType::String => "char",
        PrimitiveType::Uint16 => "uint16_t",
        PrimitiveType::Uint32 => "uint32_t",
        PrimitiveType::Uint64 => "uint64_t",
        PrimitiveType::Usize => "size_t",
        PrimitiveType::Int16 => "int16_t",
        PrimitiveType::Int32 => "int32_t",
        PrimitiveType::Float32 => "float",
        PrimitiveType::Float64 => "double",
        PrimitiveType::Void => "void",
    }
}

/// Maps a type reference and pointer qualifier to a C type expression.
#[must_use]
pub fn c_type(ty: &TypeRef, pointer: PointerType) -> String {
    let (base, pointer) = match ty {
        TypeRef::Primitive(PrimitiveType::String) => {
            ("char".to_string(), PointerType::Immutable)
        }
        TypeRef::Primitive(prim) => (primitive_c_type(*prim).to_string(), pointer),
        TypeRef::Enum(name)
        | TypeRef::Struct(name)
        | TypeRef::Callback(name)
        | TypeRef::Object(name) => (format!("{PREFIX}{}", to_pascal_case(name)), pointer),
    };

    match pointer {
        PointerType::None => base,
        PointerType::Mutable => format!("{base} *"),
        PointerType::Immutable => format!("{base} const *"),
    }
}

/// Substitutes symbolic constant values with their C literal.
///
/// Any other value is passed through unchanged.
#[must_use]
pub fn c_value(value: &str) -> &str {
    match value {
        "usize_max" => "SIZE_MAX",
        "uint32_max" => "0xffffffffUL",
        "uint64_max" => "0xffffffffffffffffULL",
        other => other,
    }
}

/// Renders a parameter or member declaration, without trailing punctuation.
#[must_use]
pub fn c_param(param: &ResolvedParam) -> String {
    let decl = format!("{} {}", c_type(&param.ty, param.pointer), param.name);
    if param.optional {
        format!("{NULLABLE} {decl}")
    } else {
        decl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(ty: TypeRef, pointer: PointerType, optional: bool) -> ResolvedParam {
        ResolvedParam {
            name: "value".to_string(),
            ty,
            pointer,
            optional,
            doc: String::new(),
        }
    }

    #[test]
    fn test_primitive_types() {
        let cases = [
            ("bool", "WGPUBool"),
            ("uint16", "uint16_t"),
            ("uint32", "uint32_t"),
            ("uint64", "uint64_t"),
            ("usize", "size_t"),
            ("int16", "int16_t"),
            ("int32", "int32_t"),
            ("float32", "float"),
            ("float64", "double"),
            ("c_void", "void"),
        ];
        for (token, expected) in cases {
            let ty = TypeRef::parse(token).unwrap();
            assert_eq!(c_type(&ty, PointerType::None), expected, "{token}");
        }
    }

    #[test]
    fn test_pointer_qualifiers() {
        let ty = TypeRef::parse("uint32").unwrap();
        assert_eq!(c_type(&ty, PointerType::Mutable), "uint32_t *");
        assert_eq!(c_type(&ty, PointerType::Immutable), "uint32_t const *");

        let ty = TypeRef::parse("c_void").unwrap();
        assert_eq!(c_type(&ty, PointerType::Mutable), "void *");
    }

    #[test]
    fn test_string_is_always_const_char_pointer() {
        let ty = TypeRef::Primitive(PrimitiveType::String);
        assert_eq!(c_type(&ty, PointerType::None), "char const *");
        assert_eq!(c_type(&ty, PointerType::Mutable), "char const *");
    }

    #[test]
    fn test_entity_types_are_prefixed() {
        let ty = TypeRef::parse("struct.render_pass_descriptor").unwrap();
        assert_eq!(
            c_type(&ty, PointerType::Immutable),
            "WGPURenderPassDescriptor const *"
        );
        let ty = TypeRef::parse("object.device").unwrap();
        assert_eq!(c_type(&ty, PointerType::None), "WGPUDevice");
        let ty = TypeRef::parse("enum.texture_format").unwrap();
        assert_eq!(c_type(&ty, PointerType::None), "WGPUTextureFormat");
        let ty = TypeRef::parse("callback.buffer_map_callback").unwrap();
        assert_eq!(c_type(&ty, PointerType::None), "WGPUBufferMapCallback");
    }

    #[test]
    fn test_c_value() {
        assert_eq!(c_value("usize_max"), "SIZE_MAX");
        assert_eq!(c_value("uint32_max"), "0xffffffffUL");
        assert_eq!(c_value("uint64_max"), "0xffffffffffffffffULL");
        assert_eq!(c_value("8"), "8");
        assert_eq!(c_value("\"label\""), "\"label\"");
    }

    #[test]
    fn test_nullable_const_pointer() {
        let p = param(
            TypeRef::parse("struct.limits").unwrap(),
            PointerType::Immutable,
            true,
        );
        assert_eq!(c_param(&p), "WGPU_NULLABLE WGPULimits const * value");
    }

    #[test]
    fn test_plain_mutable_pointer() {
        let p = param(
            TypeRef::parse("struct.limits").unwrap(),
            PointerType::Mutable,
            false,
        );
        assert_eq!(c_param(&p), "WGPULimits * value");
    }
}
