//! Schema validation result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dsl::schema::DocumentKind;

/// A single failed constraint, located by field path (e.g. `actions[2].emotion_score`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

impl SchemaViolation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Aggregated result of validating one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Kind the document was validated as, when it could be determined.
    pub kind: Option<DocumentKind>,
    pub valid: bool,
    pub errors: Vec<SchemaViolation>,
}

impl ValidationReport {
    pub fn from_errors(kind: Option<DocumentKind>, errors: Vec<SchemaViolation>) -> Self {
        Self {
            kind,
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Human-readable `path: constraint` lines.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}
