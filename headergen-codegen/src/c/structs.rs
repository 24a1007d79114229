//! Struct generation, including chain links of extendable structs.

use super::comments::push_doc;
use super::preamble::CHAINED_STRUCTS;
use super::types::{PREFIX, c_param};
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::resolver::order_structs;
use headergen_schema::ir::{ResolvedStruct, SchemaIr};
use headergen_schema::types::StructKind;

/// Returns the implicit leading member a struct kind requires.
#[must_use]
pub const fn chain_member(kind: StructKind) -> Option<&'static str> {
    match kind {
        StructKind::Standalone => None,
        StructKind::BaseIn => Some("WGPUChainedStruct const * nextInChain;"),
        StructKind::ExtensionIn => Some("WGPUChainedStruct chain;"),
        StructKind::BaseOut => Some("WGPUChainedStructOut * nextInChain;"),
        StructKind::ExtensionOut => Some("WGPUChainedStructOut chain;"),
    }
}

/// Generator for struct definitions.
pub struct StructGenerator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the chain-link structs followed by every schema struct in
    /// dependency order.
    ///
    /// # Errors
    /// Returns `CodegenError::CircularStruct` if struct references form a cycle.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::from(CHAINED_STRUCTS);

        for s in order_structs(&self.ir.structs, self.config.struct_order)? {
            output.push_str(&self.generate_struct(s));
        }

        Ok(output)
    }

    /// Generates a single struct definition.
    fn generate_struct(&self, s: &ResolvedStruct) -> String {
        let mut output = String::new();
        let name = format!("{PREFIX}{}", s.name);

        push_doc(&mut output, self.config.emit_docs, &s.doc, 0);
        output.push_str(&format!("typedef struct {name} {{\n"));
        if let Some(chain) = chain_member(s.kind) {
            output.push_str(&format!("    {chain}\n"));
        }
        for member in &s.members {
            push_doc(&mut output, self.config.emit_docs, &member.doc, 4);
            output.push_str(&format!("    {};\n", c_param(member)));
        }
        output.push_str(&format!("}} {name} WGPU_STRUCTURE_ATTRIBUTE;\n\n"));

        output
    }
}
