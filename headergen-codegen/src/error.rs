//! Error types for header generation.

use thiserror::Error;

/// Error type for header generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] headergen_schema::ParseError),

    /// Schema resolution error.
    #[error("schema error: {0}")]
    Schema(#[from] headergen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Callback whose return type has no emission rule.
    #[error("callback '{callback}' returns '{type_name}'; only c_void is supported")]
    UnhandledReturn {
        /// Callback name.
        callback: String,
        /// Declared return type.
        type_name: String,
    },

    /// Structs whose member references form a cycle.
    #[error("circular struct reference detected: {path}")]
    CircularStruct {
        /// Structs on the cycle, joined by ` -> `.
        path: String,
    },
}

impl CodegenError {
    /// Creates an unhandled return type error.
    pub fn unhandled_return(callback: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnhandledReturn {
            callback: callback.into(),
            type_name: type_name.into(),
        }
    }
}
