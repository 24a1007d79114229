//! Callback function-pointer type generation.

use super::comments::push_doc;
use super::types::{PREFIX, c_param};
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use headergen_schema::ir::{ResolvedFunction, ResolvedParam, SchemaIr};

/// Joins rendered parameters, using `void` for an empty list.
#[must_use]
pub fn param_list<'p>(params: impl IntoIterator<Item = &'p ResolvedParam>) -> String {
    let rendered: Vec<String> = params.into_iter().map(c_param).collect();
    if rendered.is_empty() {
        "void".to_string()
    } else {
        rendered.join(", ")
    }
}

/// Generator for free callback types.
pub struct CallbackGenerator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> CallbackGenerator<'a> {
    /// Creates a new callback generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates one function-pointer typedef per callback, in name order.
    ///
    /// # Errors
    /// Returns `CodegenError::UnhandledReturn` for a callback that returns
    /// anything other than `c_void`.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        for cb in &self.ir.callbacks {
            output.push_str(&self.generate_callback(cb)?);
        }

        Ok(output)
    }

    fn generate_callback(&self, cb: &ResolvedFunction) -> Result<String, CodegenError> {
        if !cb.returns.is_void() {
            return Err(CodegenError::unhandled_return(
                &cb.name,
                cb.returns.ty.to_string(),
            ));
        }

        let mut output = String::new();
        push_doc(&mut output, self.config.emit_docs, &cb.doc, 0);
        output.push_str(&format!(
            "typedef void (*{PREFIX}{})({}) WGPU_FUNCTION_ATTRIBUTE;\n",
            cb.name,
            param_list(&cb.args)
        ));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headergen_schema::parser::parse_schema;

    fn generate(yaml: &str) -> Result<String, CodegenError> {
        let schema = parse_schema(yaml).expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema).expect("Failed to resolve");
        let config = GeneratorConfig::new().with_docs(false);
        CallbackGenerator::new(&ir, &config).generate()
    }

    #[test]
    fn test_generate_callbacks() {
        let yaml = r#"
callbacks:
  - name: request_device_callback
    returns:
      type: c_void
    args:
      - name: status
        type: enum.request_device_status
      - name: device
        type: object.device
      - name: message
        type: string
        optional: true
      - name: userdata
        type: c_void
        pointer: mutable
  - name: proc
"#;
        let output = generate(yaml).expect("Failed to generate");

        assert_eq!(
            output,
            "typedef void (*WGPUProc)(void) WGPU_FUNCTION_ATTRIBUTE;\n\
             typedef void (*WGPURequestDeviceCallback)(WGPURequestDeviceStatus status, \
             WGPUDevice device, WGPU_NULLABLE char const * message, void * userdata) \
             WGPU_FUNCTION_ATTRIBUTE;\n"
        );
    }

    #[test]
    fn test_non_void_return_is_rejected() {
        let yaml = r#"
callbacks:
  - name: get_value
    returns:
      type: uint32
"#;
        let err = generate(yaml).unwrap_err();
        match err {
            CodegenError::UnhandledReturn {
                callback,
                type_name,
            } => {
                assert_eq!(callback, "GetValue");
                assert_eq!(type_name, "uint32");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_param_list_empty() {
        let none: [ResolvedParam; 0] = [];
        assert_eq!(param_list(&none), "void");
    }
}
