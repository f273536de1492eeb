//! Self-describing entity identifiers of the form `{kind}:{entityType}:{uuid}`.
//!
//! Random v4 UUIDs are the only thing guaranteeing that ids stay unique across
//! all four documents.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Components of an identifier produced by [`generate_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedId {
    pub kind: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub uuid: String,
}

/// Generate a fresh `{kind}:{entity_type}:{uuid}` identifier.
pub fn generate_id(kind: &str, entity_type: &str) -> String {
    format!("{}:{}:{}", kind, entity_type, uuid::Uuid::new_v4())
}

/// Split an identifier into its three parts; `None` unless there are exactly three.
pub fn parse_id(id: &str) -> Option<ParsedId> {
    let mut parts = id.split(':');
    let kind = parts.next()?;
    let entity_type = parts.next()?;
    let uuid = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some(ParsedId {
        kind: kind.to_string(),
        entity_type: entity_type.to_string(),
        uuid: uuid.to_string(),
    })
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self, kind: &str, entity_type: &str) -> String;
}

/// Production generator backed by random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self, kind: &str, entity_type: &str) -> String {
        generate_id(kind, entity_type)
    }
}

/// Deterministic generator for tests: `{kind}:{entity_type}:{prefix}-{n}`.
pub struct SequentialIdGenerator {
    pub prefix: String,
    pub counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, kind: &str, entity_type: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}:{}:{}-{}", kind, entity_type, self.prefix, n)
    }
}
