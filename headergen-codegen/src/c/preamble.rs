//! Fixed header scaffolding: include guard, export macros, type aliases,
//! chain-link structs and the closing guard.

use super::comments::block_comment;

const GUARD_AND_MACROS: &str = r#"
#ifndef WEBGPU_H_
#define WEBGPU_H_

#if defined(WGPU_SHARED_LIBRARY)
#    if defined(_WIN32)
#        if defined(WGPU_IMPLEMENTATION)
#            define WGPU_EXPORT __declspec(dllexport)
#        else
#            define WGPU_EXPORT __declspec(dllimport)
#        endif
#    else  // defined(_WIN32)
#        if defined(WGPU_IMPLEMENTATION)
#            define WGPU_EXPORT __attribute__((visibility("default")))
#        else
#            define WGPU_EXPORT
#        endif
#    endif  // defined(_WIN32)
#else       // defined(WGPU_SHARED_LIBRARY)
#    define WGPU_EXPORT
#endif  // defined(WGPU_SHARED_LIBRARY)

#if !defined(WGPU_OBJECT_ATTRIBUTE)
#define WGPU_OBJECT_ATTRIBUTE
#endif
#if !defined(WGPU_ENUM_ATTRIBUTE)
#define WGPU_ENUM_ATTRIBUTE
#endif
#if !defined(WGPU_STRUCTURE_ATTRIBUTE)
#define WGPU_STRUCTURE_ATTRIBUTE
#endif
#if !defined(WGPU_FUNCTION_ATTRIBUTE)
#define WGPU_FUNCTION_ATTRIBUTE
#endif
#if !defined(WGPU_NULLABLE)
#define WGPU_NULLABLE
#endif

#include <stdint.h>
#include <stddef.h>

"#;

/// Fixed flags and boolean aliases.
pub const TYPE_ALIASES: &str = "
typedef uint32_t WGPUFlags;
typedef uint32_t WGPUBool;

";

/// Input and output chain links every extendable struct builds on.
pub const CHAINED_STRUCTS: &str = "
typedef struct WGPUChainedStruct {
    struct WGPUChainedStruct const * next;
    WGPUSType sType;
} WGPUChainedStruct WGPU_STRUCTURE_ATTRIBUTE;

typedef struct WGPUChainedStructOut {
    struct WGPUChainedStructOut * next;
    WGPUSType sType;
} WGPUChainedStructOut WGPU_STRUCTURE_ATTRIBUTE;

";

/// Closing include guard.
pub const FOOTER: &str = "#endif // WEBGPU_H_\n";

/// Generates the copyright comment, include guard and attribute macros.
#[must_use]
pub fn preamble(copyright: &str) -> String {
    let mut output = block_comment(copyright, 0);
    output.push('\n');
    output.push_str(GUARD_AND_MACROS);
    output
}
