//! Error types for schema loading and resolution.

use thiserror::Error;

/// Error type for schema loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML syntax or document shape error.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Type token that is neither a known primitive nor a prefixed entity reference.
    #[error("unknown type '{type_name}' referenced in '{entity}'")]
    UnknownType {
        /// Offending type token.
        type_name: String,
        /// Path of the entity that references it.
        entity: String,
    },

    /// Pointer qualifier that is not `mutable` or `immutable`.
    #[error("invalid pointer qualifier '{value}' in '{entity}'")]
    InvalidPointer {
        /// Path of the offending entity.
        entity: String,
        /// Invalid qualifier.
        value: String,
    },

    /// Struct kind that is not one of the known variants.
    #[error("invalid struct type '{value}' for struct '{name}'")]
    InvalidStructKind {
        /// Struct name.
        name: String,
        /// Invalid kind token.
        value: String,
    },

    /// Explicit enum entry value that is not a decimal unsigned integer.
    #[error("invalid value '{value}' for entry '{entry}' of enum '{enum_name}'")]
    InvalidEnumValue {
        /// Enum name.
        enum_name: String,
        /// Entry name.
        entry: String,
        /// Malformed literal.
        value: String,
    },

    /// Every defect found while lowering one document.
    #[error("{} schema errors:{}", errors.len(), render_list(errors))]
    Invalid {
        /// Collected errors, in document order.
        errors: Vec<ParseError>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema resolution.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Bitmask enum entry whose positional power of two does not fit in 64 bits.
    #[error("entry '{entry}' of bitmask enum '{enum_name}' is at position {index}, past the 64-bit range")]
    BitmaskOverflow {
        /// Enum name.
        enum_name: String,
        /// Entry name.
        entry: String,
        /// Position of the entry.
        index: usize,
    },
}

impl ParseError {
    /// Creates an unknown type error.
    pub fn unknown_type(type_name: impl Into<String>, entity: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            entity: entity.into(),
        }
    }

    /// Creates an invalid pointer qualifier error.
    pub fn invalid_pointer(entity: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidPointer {
            entity: entity.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid enum value error.
    pub fn invalid_enum_value(
        enum_name: impl Into<String>,
        entry: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidEnumValue {
            enum_name: enum_name.into(),
            entry: entry.into(),
            value: value.into(),
        }
    }

    /// Returns the individual errors, flattening an [`ParseError::Invalid`] batch.
    #[must_use]
    pub fn errors(&self) -> Vec<&ParseError> {
        match self {
            Self::Invalid { errors } => errors.iter().collect(),
            other => vec![other],
        }
    }
}

fn render_list(errors: &[ParseError]) -> String {
    errors.iter().map(|e| format!("\n  - {e}")).collect()
}
