//! Enum and flags generation.

use super::comments::push_doc;
use super::types::PREFIX;
use crate::config::GeneratorConfig;
use headergen_schema::ir::{ResolvedEnum, SchemaIr};

/// Terminal entry value pinning every enum to 32-bit storage.
pub const FORCE32_VALUE: &str = "0x7FFFFFFF";

/// Generator for enum definitions.
pub struct EnumGenerator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates all enum definitions in name order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for e in &self.ir.enums {
            output.push_str(&self.generate_enum(e));
        }

        output
    }

    /// Generates an enum definition; bitmask enums also get a flags alias.
    fn generate_enum(&self, e: &ResolvedEnum) -> String {
        let mut output = String::new();
        let name = format!("{PREFIX}{}", e.name);

        push_doc(&mut output, self.config.emit_docs, &e.doc, 0);
        output.push_str(&format!("typedef enum {name} {{\n"));
        for entry in &e.entries {
            push_doc(&mut output, self.config.emit_docs, &entry.doc, 4);
            output.push_str(&format!(
                "    {name}_{} = 0x{:08X},\n",
                entry.name, entry.value
            ));
        }
        output.push_str(&format!("    {name}_Force32 = {FORCE32_VALUE}\n"));
        output.push_str(&format!("}} {name} WGPU_ENUM_ATTRIBUTE;\n"));

        if e.bitmask {
            output.push_str(&format!(
                "typedef WGPUFlags {name}Flags WGPU_ENUM_ATTRIBUTE;\n"
            ));
        }
        output.push('\n');

        output
    }
}
