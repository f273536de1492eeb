//! Integrity check result types.

use serde::{Deserialize, Serialize};

pub const CJM_PHASE: &str = "cjm:phase";
pub const CJM_ACTION: &str = "cjm:action";
pub const SBP_LANE: &str = "sbp:lane";
pub const SBP_TASK: &str = "sbp:task";
pub const OUTCOME_KGI: &str = "outcome:kgi";
pub const OUTCOME_CSF: &str = "outcome:csf";
pub const OUTCOME_KPI: &str = "outcome:kpi";
pub const EM_OUTCOME: &str = "em:outcome";
pub const EM_ACTION: &str = "em:action";
pub const EM_SKILL: &str = "em:skill";
pub const EM_KNOWLEDGE: &str = "em:knowledge";
pub const EM_TOOL: &str = "em:tool";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A stored id that matches nothing in its target collection.
    MissingReference,
    /// An id used by more than one entity in the set.
    DuplicateId,
}

/// One reported integrity problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub kind: ViolationKind,
    pub source_collection: String,
    pub source_id: String,
    pub target_collection: String,
    pub target_id: String,
    pub message: String,
}

impl Violation {
    pub fn missing_reference(
        source_collection: &str,
        source_id: &str,
        target_collection: &str,
        target_id: &str,
        message: String,
    ) -> Self {
        Self {
            kind: ViolationKind::MissingReference,
            source_collection: source_collection.to_string(),
            source_id: source_id.to_string(),
            target_collection: target_collection.to_string(),
            target_id: target_id.to_string(),
            message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCheckResult {
    pub valid: bool,
    pub errors: Vec<Violation>,
}

impl ReferenceCheckResult {
    pub fn from_violations(errors: Vec<Violation>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Violations raised by entities of `collection`.
    pub fn by_source<'a>(&'a self, collection: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.errors
            .iter()
            .filter(move |v| v.source_collection == collection)
    }
}
