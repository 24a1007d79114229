//! Generator configuration.

use std::fmt;
use std::str::FromStr;

/// Strategy used to order struct definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructOrder {
    /// Dependency layers: a struct is emitted after every struct it
    /// references, each layer in name order. Cycles are reported.
    #[default]
    Layered,
    /// Two buckets: structs without struct members first, then the rest.
    /// Only correct for one level of nesting.
    TwoPass,
}

impl StructOrder {
    /// Returns the command-line spelling of this strategy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Layered => "layered",
            Self::TwoPass => "two-pass",
        }
    }
}

impl fmt::Display for StructOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StructOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "layered" => Ok(Self::Layered),
            "two-pass" | "two_pass" => Ok(Self::TwoPass),
            other => Err(format!(
                "unknown struct order '{other}', expected 'layered' or 'two-pass'"
            )),
        }
    }
}

/// Configuration threaded through every emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Emit documentation block comments.
    pub emit_docs: bool,
    /// Struct ordering strategy.
    pub struct_order: StructOrder,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            emit_docs: true,
            struct_order: StructOrder::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables documentation comments.
    #[must_use]
    pub fn with_docs(mut self, emit_docs: bool) -> Self {
        self.emit_docs = emit_docs;
        self
    }

    /// Sets the struct ordering strategy.
    #[must_use]
    pub fn with_struct_order(mut self, struct_order: StructOrder) -> Self {
        self.struct_order = struct_order;
        self
    }
}
