//! Command-line interface definitions.

use clap::Parser;
use headergen_codegen::{GeneratorConfig, StructOrder};
use std::path::PathBuf;

/// Generate a C header from an API schema.
#[derive(Debug, Parser)]
#[command(name = "headergen", version, about)]
pub struct Cli {
    /// YAML schema to read.
    #[arg(short = 'i', long = "input", value_name = "YAML")]
    pub input: PathBuf,

    /// Header to write; standard output when omitted.
    #[arg(short = 'o', long = "output", value_name = "HEADER")]
    pub output: Option<PathBuf>,

    /// Omit documentation comments.
    #[arg(long)]
    pub no_docs: bool,

    /// Struct ordering strategy: `layered` or `two-pass`.
    #[arg(long, value_name = "ORDER", default_value_t = StructOrder::Layered)]
    pub struct_order: StructOrder,
}

impl Cli {
    /// Builds the generator configuration from the parsed flags.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_docs(!self.no_docs)
            .with_struct_order(self.struct_order)
    }
}
