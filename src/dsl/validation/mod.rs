mod known_kinds;
mod shapes;
mod types;

use serde_json::Value;

use crate::config::StudioConfig;
use crate::dsl::schema::DocumentKind;
use crate::error::StudioError;

pub use known_kinds::{fields_for, EMOTION_SCORE_MAX, EMOTION_SCORE_MIN};
pub use shapes::{Field, Shape};
pub use types::{SchemaViolation, ValidationReport};

/// Validates decoded (generic) documents against the per-kind field tables.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    config: StudioConfig,
}

impl SchemaValidator {
    pub fn new(config: StudioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Validate `data` as a document of the given kind.
    pub fn validate(&self, kind: DocumentKind, data: &Value) -> ValidationReport {
        let mut errors = Vec::new();
        shapes::check_object(fields_for(kind), data, "", &mut errors);

        if let Some(version) = data.get("version").and_then(Value::as_str) {
            if !self.config.is_version_supported(version) {
                errors.push(SchemaViolation::new(
                    "version",
                    format!(
                        "unsupported version '{}', supported versions: {}",
                        version,
                        self.config.supported_versions.join(", ")
                    ),
                ));
            }
        }

        ValidationReport::from_errors(Some(kind), errors)
    }

    /// Route `data` to the validator for its `kind` discriminator.
    pub fn validate_document_set(&self, data: &Value) -> ValidationReport {
        match detect_kind(data) {
            Ok(kind) => self.validate(kind, data),
            Err(err) => ValidationReport::from_errors(
                None,
                vec![SchemaViolation::new("kind", err.to_string())],
            ),
        }
    }
}

/// Validate `data` as a document of the given kind with the default configuration.
pub fn validate(kind: DocumentKind, data: &Value) -> ValidationReport {
    SchemaValidator::default().validate(kind, data)
}

/// Validate `data` according to its own `kind` field with the default configuration.
pub fn validate_document_set(data: &Value) -> ValidationReport {
    SchemaValidator::default().validate_document_set(data)
}

/// Read the `kind` discriminator. Absent or unrecognized values yield
/// [`StudioError::UnknownKind`] carrying the offending value.
pub fn detect_kind(data: &Value) -> Result<DocumentKind, StudioError> {
    match data.get("kind") {
        Some(Value::String(s)) => s.parse::<DocumentKind>().map_err(StudioError::UnknownKind),
        Some(other) => Err(StudioError::UnknownKind(other.to_string())),
        None => Err(StudioError::UnknownKind("(missing)".to_string())),
    }
}
