//! Object method generation: function-pointer typedefs and exported
//! function declarations.

use super::types::{PREFIX, c_param, c_type};
use headergen_schema::ir::{ResolvedFunction, ResolvedObject, SchemaIr};

/// Generator for object procs and declarations.
pub struct ProcGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> ProcGenerator<'a> {
    /// Creates a new proc generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the `extern "C"` section holding proc typedefs and function
    /// declarations, each behind its own skip macro.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("\n#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");
        output.push_str("#if !defined(WGPU_SKIP_PROCS)\n");
        for object in &self.ir.objects {
            output.push_str(&self.generate_procs(object));
        }
        output.push_str("\n#endif  // !defined(WGPU_SKIP_PROCS)\n\n");

        output.push_str("#if !defined(WGPU_SKIP_DECLARATIONS)\n\n");
        for object in &self.ir.objects {
            output.push_str(&self.generate_declarations(object));
        }
        output.push_str("\n#endif  // !defined(WGPU_SKIP_DECLARATIONS)\n\n");
        output.push_str("#ifdef __cplusplus\n} // extern \"C\"\n#endif\n\n");

        output
    }

    /// Generates one function-pointer typedef per method.
    fn generate_procs(&self, object: &ResolvedObject) -> String {
        let mut output = format!("\n// Procs of {}\n", object.name);

        for method in &object.methods {
            output.push_str(&format!(
                "typedef {} (*{PREFIX}Proc{}{})({}) WGPU_FUNCTION_ATTRIBUTE;\n",
                c_type(&method.returns.ty, method.returns.pointer),
                object.name,
                method.name,
                method_params(object, method)
            ));
        }

        output
    }

    /// Generates one exported declaration per method.
    fn generate_declarations(&self, object: &ResolvedObject) -> String {
        let mut output = format!("\n// Methods of {}\n", object.name);

        for method in &object.methods {
            output.push_str(&format!(
                "WGPU_EXPORT {} wgpu{}{}({}) WGPU_FUNCTION_ATTRIBUTE;\n",
                c_type(&method.returns.ty, method.returns.pointer),
                object.name,
                method.name,
                method_params(object, method)
            ));
        }

        output
    }
}

/// Parameter list of a method: the object handle, then the declared args.
fn method_params(object: &ResolvedObject, method: &ResolvedFunction) -> String {
    let mut params = vec![format!("{PREFIX}{} {}", object.name, object.handle_name)];
    params.extend(method.args.iter().map(c_param));
    params.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use headergen_schema::parser::parse_schema;

    fn create_test_ir() -> SchemaIr {
        let yaml = r#"
objects:
  - name: queue
    methods:
      - name: write_buffer
        args:
          - name: buffer
            type: object.buffer
          - name: buffer_offset
            type: uint64
          - name: data
            type: c_void
            pointer: immutable
          - name: size
            type: usize
      - name: submit
        args:
          - name: command_count
            type: usize
          - name: commands
            type: object.command_buffer
            pointer: immutable
  - name: buffer
    methods:
      - name: get_mapped_range
        returns:
          type: c_void
          pointer: mutable
        args:
          - name: offset
            type: usize
          - name: size
            type: usize
      - name: set_label
        args:
          - name: label
            type: string
            optional: true
"#;
        let schema = parse_schema(yaml).expect("Failed to parse");
        SchemaIr::from_schema(&schema).expect("Failed to resolve")
    }

    #[test]
    fn test_generate_procs() {
        let ir = create_test_ir();
        let output = ProcGenerator::new(&ir).generate();

        assert!(output.contains(
            "\n// Procs of Buffer\n\
             typedef void * (*WGPUProcBufferGetMappedRange)(WGPUBuffer buffer, size_t offset, size_t size) WGPU_FUNCTION_ATTRIBUTE;\n\
             typedef void (*WGPUProcBufferSetLabel)(WGPUBuffer buffer, WGPU_NULLABLE char const * label) WGPU_FUNCTION_ATTRIBUTE;\n\
             typedef void (*WGPUProcBufferReference)(WGPUBuffer buffer) WGPU_FUNCTION_ATTRIBUTE;\n\
             typedef void (*WGPUProcBufferRelease)(WGPUBuffer buffer) WGPU_FUNCTION_ATTRIBUTE;\n"
        ));
    }

    #[test]
    fn test_generate_declarations() {
        let ir = create_test_ir();
        let output = ProcGenerator::new(&ir).generate();

        assert!(output.contains(
            "\n// Methods of Queue\n\
             WGPU_EXPORT void wgpuQueueSubmit(WGPUQueue queue, size_t commandCount, WGPUCommandBuffer const * commands) WGPU_FUNCTION_ATTRIBUTE;\n\
             WGPU_EXPORT void wgpuQueueWriteBuffer(WGPUQueue queue, WGPUBuffer buffer, uint64_t bufferOffset, void const * data, size_t size) WGPU_FUNCTION_ATTRIBUTE;\n\
             WGPU_EXPORT void wgpuQueueReference(WGPUQueue queue) WGPU_FUNCTION_ATTRIBUTE;\n\
             WGPU_EXPORT void wgpuQueueRelease(WGPUQueue queue) WGPU_FUNCTION_ATTRIBUTE;\n"
        ));
    }

    #[test]
    fn test_sections_are_guarded() {
        let ir = create_test_ir();
        let output = ProcGenerator::new(&ir).generate();

        let procs = output.find("#if !defined(WGPU_SKIP_PROCS)").unwrap();
        let procs_end = output.find("#endif  // !defined(WGPU_SKIP_PROCS)").unwrap();
        let decls = output.find("#if !defined(WGPU_SKIP_DECLARATIONS)").unwrap();
        let decls_end = output
            .find("#endif  // !defined(WGPU_SKIP_DECLARATIONS)")
            .unwrap();
        assert!(procs < procs_end && procs_end < decls && decls < decls_end);

        let first_typedef = output.find("typedef").unwrap();
        let first_export = output.find("WGPU_EXPORT").unwrap();
        assert!(procs < first_typedef && first_typedef < procs_end);
        assert!(decls < first_export && first_export < decls_end);
        assert!(output.ends_with("#ifdef __cplusplus\n} // extern \"C\"\n#endif\n\n"));
    }

    #[test]
    fn test_lifecycle_methods_per_object() {
        let ir = create_test_ir();
        let output = ProcGenerator::new(&ir).generate();

        for object in ["Buffer", "Queue"] {
            let handle = object.to_lowercase();
            for method in ["Reference", "Release"] {
                let proc = format!(
                    "typedef void (*WGPUProc{object}{method})(WGPU{object} {handle}) WGPU_FUNCTION_ATTRIBUTE;\n"
                );
                assert_eq!(output.matches(&proc).count(), 1);
                let decl = format!(
                    "WGPU_EXPORT void wgpu{object}{method}(WGPU{object} {handle}) WGPU_FUNCTION_ATTRIBUTE;\n"
                );
                assert_eq!(output.matches(&decl).count(), 1);
            }
        }
        assert_eq!(output.matches("typedef ").count(), 8);
        assert_eq!(output.matches("WGPU_EXPORT ").count(), 8);
    }
}
