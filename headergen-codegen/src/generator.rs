//! Header assembly.

use crate::c::preamble::{FOOTER, TYPE_ALIASES, preamble};
use crate::c::{
    CallbackGenerator, ConstantGenerator, EnumGenerator, ForwardDeclGenerator, ProcGenerator,
    StructGenerator,
};
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use headergen_schema::SchemaIr;

/// Assembles a complete header from a resolved schema.
///
/// Sections are emitted in a fixed order: preamble, constants, type
/// aliases, forward declarations, enums, callbacks, structs, procs and
/// footer. Nothing is returned unless every section succeeds.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self::with_config(ir, GeneratorConfig::default())
    }

    /// Creates a generator with an explicit configuration.
    #[must_use]
    pub fn with_config(ir: &'a SchemaIr, config: GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the header text.
    ///
    /// # Errors
    /// Returns `CodegenError` if a callback has an unsupported return type or
    /// struct references form a cycle.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let ir = self.ir;
        let config = &self.config;
        tracing::debug!(
            constants = ir.constants.len(),
            enums = ir.enums.len(),
            callbacks = ir.callbacks.len(),
            structs = ir.structs.len(),
            objects = ir.objects.len(),
            emit_docs = config.emit_docs,
            struct_order = %config.struct_order,
            "generating header"
        );

        let mut output = preamble(&ir.copyright);
        output.push_str(&ConstantGenerator::new(ir, config).generate());
        output.push_str(TYPE_ALIASES);
        output.push_str(&ForwardDeclGenerator::new(ir).generate());
        output.push_str(&EnumGenerator::new(ir, config).generate());
        output.push_str(&CallbackGenerator::new(ir, config).generate()?);
        output.push_str(&StructGenerator::new(ir, config).generate()?);
        output.push_str(&ProcGenerator::new(ir).generate());
        output.push_str(FOOTER);

        tracing::info!(bytes = output.len(), "generated header");
        Ok(output)
    }
}
