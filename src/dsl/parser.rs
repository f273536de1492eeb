//! DSL parser: converts the raw YAML/JSON/TOML text of one document into a
//! typed [`DslDocument`].
//!
//! Multi-document YAML files go through [`crate::dsl::codec`] instead.

use serde::Deserialize;
use serde_json::Value;

use super::schema::DslDocument;
use super::validation::{detect_kind, SchemaValidator};
use crate::error::StudioError;

/// Supported DSL input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DslFormat {
    /// YAML format (`.yaml` / `.yml`).
    Yaml,
    /// JSON format (`.json`).
    Json,
    /// TOML format (`.toml`).
    Toml,
}

impl DslFormat {
    /// Guess the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(DslFormat::Yaml),
            "json" => Some(DslFormat::Json),
            "toml" => Some(DslFormat::Toml),
            _ => None,
        }
    }
}

/// Parse DSL content into a generic value without any schema checks.
pub fn parse_value(content: &str, format: DslFormat) -> Result<Value, StudioError> {
    match format {
        DslFormat::Yaml => {
            let mut documents = yaml_documents(content);
            let first = match documents.next() {
                Some(doc) => doc.map_err(StudioError::DslParseError)?,
                None => Value::Null,
            };
            if documents.next().is_some() {
                return Err(StudioError::DslParseError(
                    "expected a single YAML document; use decode for document sets".to_string(),
                ));
            }
            Ok(first)
        }
        DslFormat::Json => serde_json::from_str(content)
            .map_err(|e| StudioError::DslParseError(e.to_string())),
        DslFormat::Toml => {
            // toml::Value first so that datetimes survive as strings.
            let toml_val: toml::Value = toml::from_str(content)
                .map_err(|e| StudioError::DslParseError(e.to_string()))?;
            Ok(toml_value_to_json(toml_val))
        }
    }
}

/// Read a `---`-separated YAML stream into generic values, one per document.
///
/// Both the single-document parser and the document-set codec read YAML
/// through here, so scalars such as `yes` or `010` type the same way on
/// either path.
pub(crate) fn yaml_documents(text: &str) -> impl Iterator<Item = Result<Value, String>> + '_ {
    serde_yaml::Deserializer::from_str(text).map(|document| {
        let yaml = serde_yaml::Value::deserialize(document).map_err(|e| e.to_string())?;
        serde_json::to_value(&yaml).map_err(|e| e.to_string())
    })
}

/// Parse and validate a single document with the default configuration.
pub fn parse_document(content: &str, format: DslFormat) -> Result<DslDocument, StudioError> {
    parse_document_with(&SchemaValidator::default(), content, format)
}

/// Parse and validate a single document.
pub fn parse_document_with(
    validator: &SchemaValidator,
    content: &str,
    format: DslFormat,
) -> Result<DslDocument, StudioError> {
    let value = parse_value(content, format)?;
    into_document(validator, value)
}

/// Kind check, schema check, then conversion to the typed document.
pub(crate) fn into_document(
    validator: &SchemaValidator,
    value: Value,
) -> Result<DslDocument, StudioError> {
    let kind = detect_kind(&value)?;
    let report = validator.validate(kind, &value);
    if !report.valid {
        return Err(StudioError::SchemaValidation {
            kind,
            errors: report.errors,
        });
    }
    DslDocument::from_value(value).map_err(|e| StudioError::DslParseError(e.to_string()))
}

/// TOML has no null, and its datetimes have no JSON counterpart: they are
/// carried as their RFC 3339 text.
fn toml_value_to_json(val: toml::Value) -> Value {
    use toml::Value as Toml;

    match val {
        Toml::Datetime(dt) => Value::String(dt.to_string()),
        Toml::Array(items) => items.into_iter().map(toml_value_to_json).collect(),
        Toml::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, item)| (key, toml_value_to_json(item)))
                .collect(),
        ),
        Toml::String(s) => Value::from(s),
        Toml::Integer(i) => Value::from(i),
        Toml::Float(f) => Value::from(f),
        Toml::Boolean(b) => Value::from(b),
    }
}
