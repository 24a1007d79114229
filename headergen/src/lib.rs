//! # headergen
//!
//! Generates a stable, ABI-compatible C header from a declarative
//! description of a native API surface.
//!
//! ## Features
//!
//! - **Tagged schema model** - Type references are resolved when the schema
//!   is loaded, and every defect is reported in one batch
//! - **Deterministic output** - Entities are emitted in name order regardless
//!   of authoring order, so headers diff cleanly
//! - **Chained structs** - Extendable input/output structs and their
//!   extensions get their chain links automatically
//! - **Dependency-aware struct ordering** - Nested structs are defined before
//!   their users, and reference cycles are reported
//!
//! ## Quick Start
//!
//! ```ignore
//! use headergen::prelude::*;
//!
//! let schema = parse_schema_file(Path::new("webgpu.yml"))?;
//! let ir = SchemaIr::from_schema(&schema)?;
//! let header = Generator::with_config(&ir, GeneratorConfig::new().with_docs(false))
//!     .generate()?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - YAML schema loading, entity model and naming rules
//! - [`codegen`] - C header synthesis

pub mod prelude;

/// Schema loading and entity model.
pub mod schema {
    pub use headergen_schema::*;
}

/// C header generation from schemas.
pub mod codegen {
    pub use headergen_codegen::*;
}
