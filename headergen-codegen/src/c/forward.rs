//! Opaque handle and incomplete struct declarations.

use super::types::PREFIX;
use headergen_schema::ir::SchemaIr;

/// Generator for forward declarations.
pub struct ForwardDeclGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> ForwardDeclGenerator<'a> {
    /// Creates a new forward declaration generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates one opaque handle per object, then one incomplete type per
    /// struct, each list in name order and followed by a blank line.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for object in &self.ir.objects {
            output.push_str(&format!(
                "typedef struct {PREFIX}{name}Impl* {PREFIX}{name} WGPU_OBJECT_ATTRIBUTE;\n",
                name = object.name
            ));
        }
        output.push('\n');

        for s in &self.ir.structs {
            output.push_str(&format!("struct {PREFIX}{};\n", s.name));
        }
        output.push('\n');

        output
    }
}
