//! Multi-document YAML codec.
//!
//! A document-set file is a `---`-separated stream of YAML documents. Decoding
//! is fail-fast: one malformed or invalid document rejects the whole load.
//! When a kind appears twice the later document wins.

use serde::Serialize;

use super::document_set::DocumentSet;
use super::parser::{into_document, yaml_documents};
use super::schema::{CjmDocument, EmDocument, OutcomeDocument, SbpDocument};
use super::validation::SchemaValidator;
use crate::config::StudioConfig;
use crate::error::StudioError;

const DOCUMENT_SEPARATOR: &str = "---\n";

#[derive(Debug, Clone, Default)]
pub struct DocumentCodec {
    validator: SchemaValidator,
}

/// Borrowed, `kind`-tagged form used for emission.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum EncodedDocument<'a> {
    Cjm(&'a CjmDocument),
    Sbp(&'a SbpDocument),
    Outcome(&'a OutcomeDocument),
    Em(&'a EmDocument),
}

impl DocumentCodec {
    pub fn new(config: StudioConfig) -> Self {
        Self {
            validator: SchemaValidator::new(config),
        }
    }

    pub fn decode(&self, text: &str) -> Result<DocumentSet, StudioError> {
        let mut set = DocumentSet::default();
        let mut seen = 0usize;

        for (index, document) in yaml_documents(text).enumerate() {
            let value = document
                .map_err(|e| StudioError::YamlParse(format!("document {}: {}", index, e)))?;

            let has_kind = value.as_object().map(|m| m.contains_key("kind")).unwrap_or(false);
            if !has_kind {
                tracing::debug!(index, "skipping YAML document without a kind");
                continue;
            }

            let doc = into_document(&self.validator, value)?;
            let kind = doc.kind();
            if set.insert(doc).is_some() {
                tracing::debug!(index, %kind, "duplicate document kind, keeping the later one");
            }
            seen += 1;
        }

        tracing::debug!(documents = seen, slots = set.len(), "decoded document set");
        Ok(set)
    }

    pub fn encode(&self, set: &DocumentSet) -> Result<String, StudioError> {
        let mut parts = Vec::with_capacity(4);
        if let Some(doc) = &set.cjm {
            parts.push(emit(&EncodedDocument::Cjm(doc))?);
        }
        if let Some(doc) = &set.sbp {
            parts.push(emit(&EncodedDocument::Sbp(doc))?);
        }
        if let Some(doc) = &set.outcome {
            parts.push(emit(&EncodedDocument::Outcome(doc))?);
        }
        if let Some(doc) = &set.em {
            parts.push(emit(&EncodedDocument::Em(doc))?);
        }
        tracing::debug!(documents = parts.len(), "encoded document set");
        Ok(parts.join(DOCUMENT_SEPARATOR))
    }
}

fn emit(doc: &EncodedDocument<'_>) -> Result<String, StudioError> {
    let mut text =
        serde_yaml::to_string(doc).map_err(|e| StudioError::Serialization(e.to_string()))?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Decode a document-set file with the default configuration.
pub fn decode(text: &str) -> Result<DocumentSet, StudioError> {
    DocumentCodec::default().decode(text)
}

/// Encode a document set in canonical order (cjm, sbp, outcome, em).
pub fn encode(set: &DocumentSet) -> Result<String, StudioError> {
    DocumentCodec::default().encode(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::schema::DocumentKind;

    const CJM_A: &str = r#"kind: cjm
version: "1.0"
id: cjm:doc:a
phases:
  - id: P1
    name: Discover
actions: []
"#;

    const CJM_B: &str = r#"kind: cjm
version: "1.0"
id: cjm:doc:b
phases: []
actions: []
"#;

    const SBP: &str = r#"kind: sbp
version: "1.0"
id: sbp:doc:1
lanes:
  - id: L1
    name: Front
    kind: human
tasks:
  - id: T1
    lane: L1
    name: Greet
    source_id: A1
    link_to: [T2]
    readonly: true
"#;

    #[test]
    fn test_decode_empty_text() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("---\n").unwrap().is_empty());
    }

    #[test]
    fn test_decode_last_kind_wins() {
        let text = format!("{}---\n{}", CJM_A, CJM_B);
        let set = decode(&text).unwrap();
        assert_eq!(set.cjm.as_ref().unwrap().id, "cjm:doc:b");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_decode_skips_stray_documents() {
        let text = format!("just a string\n---\nname: no kind here\n---\n{}---\n- 1\n- 2\n", SBP);
        let set = decode(&text).unwrap();
        assert_eq!(set.len(), 1);
        let task = &set.sbp.as_ref().unwrap().tasks[0];
        assert_eq!(task.link_to, vec!["T2".to_string()]);
        assert!(task.readonly);
    }

    #[test]
    fn test_decode_unknown_kind_fails_whole_load() {
        let text = format!("{}---\nkind: bogus\nversion: \"1\"\n", SBP);
        let err = decode(&text).unwrap_err();
        assert_eq!(err, StudioError::UnknownKind("bogus".into()));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_decode_invalid_document_fails_whole_load() {
        let bad = "kind: em\nversion: \"1.0\"\nid: e\noutcomes: []\n";
        let text = format!("{}---\n{}", SBP, bad);
        match decode(&text).unwrap_err() {
            StudioError::SchemaValidation { kind, errors } => {
                assert_eq!(kind, DocumentKind::Em);
                assert_eq!(errors[0].to_string(), "actions: is required");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_syntax_error() {
        let err = decode("kind: cjm\nphases: [unclosed\n").unwrap_err();
        assert!(matches!(err, StudioError::YamlParse(_)));
    }

    #[test]
    fn test_encode_empty_set() {
        assert_eq!(encode(&DocumentSet::default()).unwrap(), "");
    }

    #[test]
    fn test_encode_canonical_order_and_roundtrip() {
        let text = format!("{}---\n{}", SBP, CJM_A);
        let set = decode(&text).unwrap();
        let encoded = encode(&set).unwrap();
        assert!(encoded.starts_with("kind: cjm"));
        assert!(encoded.contains("\n---\nkind: sbp"));
        assert_eq!(decode(&encoded).unwrap(), set);
    }

    #[test]
    fn test_encode_omits_absent_optionals() {
        let set = decode(CJM_B).unwrap();
        let encoded = encode(&set).unwrap();
        assert!(!encoded.contains("persona"));
        assert!(!encoded.contains("null"));
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let text = format!("{}notes: keep me\n", CJM_B);
        let set = decode(&text).unwrap();
        let encoded = encode(&set).unwrap();
        assert!(encoded.contains("notes: keep me"));
        assert_eq!(decode(&encoded).unwrap(), set);
    }

    #[test]
    fn test_decode_null_optionals_as_absent() {
        let sbp = r#"kind: sbp
version: "1.0"
id: s
lanes: []
tasks:
  - id: T1
    lane: L1
    name: Greet
    source_id: null
    link_to: null
    readonly: null
"#;
        let cjm = r#"kind: cjm
version: "1.0"
id: c
persona: null
phases: []
actions:
  - id: A1
    name: Search
    phase: P1
    touchpoints: null
    thoughts_feelings: null
    emotion_score: 0
"#;
        let em = r#"kind: em
version: "1.0"
id: e
outcomes: []
actions: []
skills:
  - id: S1
    name: Empathy
    action_id: E1
    learnings: null
knowledge: null
tools: null
"#;
        let set = decode(&format!("{}---\n{}---\n{}", sbp, cjm, em)).unwrap();

        let task = &set.sbp.as_ref().unwrap().tasks[0];
        assert!(task.source_id.is_none());
        assert!(task.link_to.is_empty());
        assert!(!task.readonly);
        let cjm = set.cjm.as_ref().unwrap();
        assert!(cjm.persona.is_none());
        assert!(cjm.actions[0].touchpoints.is_empty());
        let em = set.em.as_ref().unwrap();
        assert!(em.skills[0].learnings.is_empty());
        assert!(em.tools.is_empty());

        // Nulls normalize away: the re-encoded text carries none.
        let encoded = encode(&set).unwrap();
        assert!(!encoded.contains("null"));
        assert_eq!(decode(&encoded).unwrap(), set);
    }

    #[test]
    fn test_decode_integral_float_score() {
        let text = r#"kind: cjm
version: "1.0"
id: c
phases: []
actions:
  - id: A1
    name: Search
    phase: P1
    emotion_score: 2.0
"#;
        let set = decode(text).unwrap();
        assert_eq!(set.cjm.as_ref().unwrap().actions[0].emotion_score, 2);
        assert!(encode(&set).unwrap().contains("emotion_score: 2\n"));

        let fractional = text.replace("2.0", "1.5");
        assert!(matches!(
            decode(&fractional).unwrap_err(),
            StudioError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn test_decode_non_string_kind() {
        let err = decode("kind: 7\nversion: \"1.0\"\n").unwrap_err();
        assert_eq!(err, StudioError::UnknownKind("7".into()));
    }

    #[test]
    fn test_single_and_multi_document_readers_agree() {
        let text = format!("{}flag: yes\nswitch: on\nzero_padded: 010\ngrouped: 1_000\n", CJM_B);
        let single = crate::dsl::parse_document(&text, crate::dsl::DslFormat::Yaml).unwrap();
        let set = decode(&text).unwrap();
        let from_set = set.get(DocumentKind::Cjm).unwrap().to_owned_document();
        assert_eq!(single, from_set);

        let crate::dsl::DslDocument::Cjm(cjm) = single else {
            panic!("expected cjm");
        };
        assert_eq!(cjm.extra.get("flag"), Some(&serde_json::json!("yes")));
    }

    #[test]
    fn test_parse_document_rejects_streams() {
        let text = format!("{}---\n{}", CJM_A, CJM_B);
        assert!(matches!(
            crate::dsl::parse_document(&text, crate::dsl::DslFormat::Yaml),
            Err(StudioError::DslParseError(_))
        ));
    }

    #[test]
    fn test_codec_with_version_policy() {
        let codec = DocumentCodec::new(StudioConfig::default().with_supported_versions(["2.0"]));
        let err = codec.decode(CJM_A).unwrap_err();
        assert!(err.to_string().contains("unsupported version"));
    }
}
