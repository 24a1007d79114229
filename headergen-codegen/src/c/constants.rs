//! Constant `#define` generation.

use super::comments::push_doc;
use super::types::c_value;
use crate::config::GeneratorConfig;
use headergen_schema::ir::{SchemaIr, to_constant_case};

/// Generator for global constants.
pub struct ConstantGenerator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> ConstantGenerator<'a> {
    /// Creates a new constant generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates one `#define` per constant, in authored order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for constant in &self.ir.constants {
            push_doc(&mut output, self.config.emit_docs, &constant.doc, 0);
            output.push_str(&format!(
                "#define WGPU_{} ({})\n",
                to_constant_case(&constant.name),
                c_value(&constant.value)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headergen_schema::parser::parse_schema;

    fn create_test_ir() -> SchemaIr {
        let yaml = r#"
global:
  constants:
    - name: whole_size
      value: uint64_max
      doc: Indicates the whole size.
    - name: limit_u32_undefined
      value: uint32_max
      doc: ""
    - name: whole_map_size
      value: usize_max
      doc: ""
"#;
        let schema = parse_schema(yaml).expect("Failed to parse");
        SchemaIr::from_schema(&schema).expect("Failed to resolve")
    }

    #[test]
    fn test_generate_constants() {
        let ir = create_test_ir();
        let config = GeneratorConfig::new().with_docs(false);
        let output = ConstantGenerator::new(&ir, &config).generate();

        assert_eq!(
            output,
            "#define WGPU_WHOLE_SIZE (0xffffffffffffffffULL)\n\
             #define WGPU_LIMIT_U32_UNDEFINED (0xffffffffUL)\n\
             #define WGPU_WHOLE_MAP_SIZE (SIZE_MAX)\n"
        );
    }

    #[test]
    fn test_generate_constants_with_docs() {
        let ir = create_test_ir();
        let config = GeneratorConfig::new();
        let output = ConstantGenerator::new(&ir, &config).generate();

        assert!(output.starts_with(
            "/**\n * Indicates the whole size.\n */\n#define WGPU_WHOLE_SIZE (0xffffffffffffffffULL)\n"
        ));
        assert!(output.contains("/**\n */\n#define WGPU_WHOLE_MAP_SIZE (SIZE_MAX)\n"));
    }

    #[test]
    fn test_literals_pass_through_unchanged() {
        let yaml = r#"
global:
  constants:
    - name: mask
      value: 0xff
    - name: epsilon
      value: 1e-5
"#;
        let schema = parse_schema(yaml).expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema).expect("Failed to resolve");
        let config = GeneratorConfig::new().with_docs(false);
        let output = ConstantGenerator::new(&ir, &config).generate();

        assert_eq!(
            output,
            "#define WGPU_MASK (0xff)\n#define WGPU_EPSILON (1e-5)\n"
        );
    }
}
