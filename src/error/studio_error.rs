//! Studio-level error types.

use crate::dsl::schema::DocumentKind;
use crate::dsl::validation::SchemaViolation;
use thiserror::Error;

/// Studio-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StudioError {
    #[error("YAML parse error: {0}")]
    YamlParse(String),
    #[error("DSL parse error: {0}")]
    DslParseError(String),
    #[error("Unknown document kind: {0}")]
    UnknownKind(String),
    #[error("Schema validation failed for {kind} document: {}", join_violations(.errors))]
    SchemaValidation {
        kind: DocumentKind,
        errors: Vec<SchemaViolation>,
    },
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl StudioError {
    /// The validator's error list, when this is a schema failure.
    pub fn violations(&self) -> &[SchemaViolation] {
        match self {
            StudioError::SchemaValidation { errors, .. } => errors,
            _ => &[],
        }
    }
}

fn join_violations(errors: &[SchemaViolation]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
