//! headergen command-line entry point.
//!
//! Run with: `headergen -i webgpu.yml -o webgpu.h`

mod cli;

use anyhow::{Context, bail};
use clap::Parser;
use cli::Cli;
use headergen_codegen::Generator;
use headergen_schema::{ParseError, SchemaIr, parse_schema_file};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let schema = match parse_schema_file(&cli.input) {
        Ok(schema) => schema,
        Err(e @ ParseError::Invalid { .. }) => {
            let errors = e.errors();
            for err in &errors {
                eprintln!("error: {err}");
            }
            bail!(
                "{} schema error(s) in {}",
                errors.len(),
                cli.input.display()
            );
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to load {}", cli.input.display()));
        }
    };

    let ir = SchemaIr::from_schema(&schema)
        .with_context(|| format!("failed to resolve {}", cli.input.display()))?;
    let header = Generator::with_config(&ir, cli.config())
        .generate()
        .with_context(|| format!("failed to generate header from {}", cli.input.display()))?;

    write_header(cli.output.as_deref(), &header)
}

/// Writes the complete header to `path`, or to standard output.
fn write_header(path: Option<&Path>, header: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            out.write_all(header.as_bytes())?;
            out.flush()
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            out.write_all(header.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
copyright: Copyright 2024
structs:
  - name: extent_3d
    type: standalone
    doc: ""
    members:
      - name: width
        type: uint32
        doc: ""
"#;

    #[test]
    fn test_run_writes_header() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("webgpu.yml");
        let output = dir.path().join("webgpu.h");
        std::fs::write(&input, SCHEMA).expect("Failed to write schema");

        let cli = Cli::try_parse_from([
            "headergen".into(),
            "-i".into(),
            input.clone().into_os_string(),
            "-o".into(),
            output.clone().into_os_string(),
            "--no-docs".into(),
        ])
        .unwrap();
        run(&cli).expect("Failed to run");

        let header = std::fs::read_to_string(&output).expect("Failed to read header");
        assert!(header.starts_with("/**\n * Copyright 2024\n */\n"));
        assert!(header.contains("    uint32_t width;\n"));
        assert!(header.ends_with("#endif // WEBGPU_H_\n"));
    }

    #[test]
    fn test_run_reports_schema_errors_without_output() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("webgpu.yml");
        let output = dir.path().join("webgpu.h");
        std::fs::write(
            &input,
            "structs:\n  - name: a\n    type: standalone\n    members:\n      - name: x\n        type: int8\n      - name: y\n        type: int64\n",
        )
        .expect("Failed to write schema");

        let cli = Cli::try_parse_from([
            "headergen".into(),
            "-i".into(),
            input.clone().into_os_string(),
            "-o".into(),
            output.clone().into_os_string(),
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();

        assert!(err.to_string().starts_with("2 schema error(s)"));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_reports_missing_input_as_load_failure() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("missing.yml");

        let cli = Cli::try_parse_from([
            "headergen".into(),
            "-i".into(),
            input.clone().into_os_string(),
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();

        assert!(err.to_string().starts_with("failed to load"));
        assert!(err.downcast_ref::<ParseError>().is_some());
    }

    #[test]
    fn test_run_reports_single_defect_with_context() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("webgpu.yml");
        std::fs::write(&input, "enums: [").expect("Failed to write schema");

        let cli = Cli::try_parse_from([
            "headergen".into(),
            "-i".into(),
            input.clone().into_os_string(),
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();

        assert!(err.to_string().starts_with("failed to load"));
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::Yaml(_))
        ));
    }
}
