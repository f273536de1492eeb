//! Field tables for the four document kinds.

use crate::dsl::schema::{DocumentKind, LaneKind};

use super::shapes::{optional, required, Field, Shape};

pub const EMOTION_SCORE_MIN: i64 = -2;
pub const EMOTION_SCORE_MAX: i64 = 2;

const STRING_LIST: Shape = Shape::ArrayOf(&Shape::String);

// --- cjm ---

const PERSONA: &[Field] = &[required("name", Shape::String)];

const PHASE: &[Field] = &[required("id", Shape::String), required("name", Shape::String)];
const PHASE_SHAPE: Shape = Shape::Object(PHASE);

const CJM_ACTION: &[Field] = &[
    required("id", Shape::String),
    required("name", Shape::String),
    required("phase", Shape::String),
    optional("touchpoints", STRING_LIST),
    optional("thoughts_feelings", STRING_LIST),
    required(
        "emotion_score",
        Shape::Integer {
            min: EMOTION_SCORE_MIN,
            max: EMOTION_SCORE_MAX,
        },
    ),
];
const CJM_ACTION_SHAPE: Shape = Shape::Object(CJM_ACTION);

pub const CJM: &[Field] = &[
    required("kind", Shape::Const("cjm")),
    required("version", Shape::String),
    required("id", Shape::String),
    optional("persona", Shape::Object(PERSONA)),
    required("phases", Shape::ArrayOf(&PHASE_SHAPE)),
    required("actions", Shape::ArrayOf(&CJM_ACTION_SHAPE)),
];

// --- sbp ---

const LANE: &[Field] = &[
    required("id", Shape::String),
    required("name", Shape::String),
    required("kind", Shape::OneOf(LaneKind::NAMES)),
];
const LANE_SHAPE: Shape = Shape::Object(LANE);

const SBP_TASK: &[Field] = &[
    required("id", Shape::String),
    required("lane", Shape::String),
    required("name", Shape::String),
    optional("source_id", Shape::String),
    optional("link_to", STRING_LIST),
    optional("readonly", Shape::Boolean),
];
const SBP_TASK_SHAPE: Shape = Shape::Object(SBP_TASK);

pub const SBP: &[Field] = &[
    required("kind", Shape::Const("sbp")),
    required("version", Shape::String),
    required("id", Shape::String),
    required("lanes", Shape::ArrayOf(&LANE_SHAPE)),
    required("tasks", Shape::ArrayOf(&SBP_TASK_SHAPE)),
];

// --- outcome ---

const KGI: &[Field] = &[required("id", Shape::String), required("name", Shape::String)];

const CSF: &[Field] = &[
    required("id", Shape::String),
    required("kgi_id", Shape::String),
    optional("source_id", Shape::String),
    required("rationale", Shape::String),
];

const KPI: &[Field] = &[
    required("id", Shape::String),
    required("csf_id", Shape::String),
    required("name", Shape::String),
    optional("definition", Shape::String),
    optional("unit", Shape::String),
    required("target", Shape::Number),
];

pub const OUTCOME: &[Field] = &[
    required("kind", Shape::Const("outcome")),
    required("version", Shape::String),
    required("id", Shape::String),
    required("kgi", Shape::Object(KGI)),
    required("primary_csf", Shape::Object(CSF)),
    required("primary_kpi", Shape::Object(KPI)),
];

// --- em ---

const EM_OUTCOME: &[Field] = &[
    required("id", Shape::String),
    required("source_id", Shape::String),
];
const EM_OUTCOME_SHAPE: Shape = Shape::Object(EM_OUTCOME);

const EM_ACTION: &[Field] = &[
    required("id", Shape::String),
    required("name", Shape::String),
    required("source_id", Shape::String),
];
const EM_ACTION_SHAPE: Shape = Shape::Object(EM_ACTION);

const LEARNING: &[Field] = &[required("title", Shape::String), required("url", Shape::String)];
const LEARNING_SHAPE: Shape = Shape::Object(LEARNING);

const SKILL: &[Field] = &[
    required("id", Shape::String),
    required("name", Shape::String),
    required("action_id", Shape::String),
    optional("learnings", Shape::ArrayOf(&LEARNING_SHAPE)),
];
const SKILL_SHAPE: Shape = Shape::Object(SKILL);

// Knowledge and tools share one shape.
const RESOURCE: &[Field] = &[
    required("id", Shape::String),
    required("name", Shape::String),
    required("action_id", Shape::String),
    required("url", Shape::String),
];
const RESOURCE_SHAPE: Shape = Shape::Object(RESOURCE);

pub const EM: &[Field] = &[
    required("kind", Shape::Const("em")),
    required("version", Shape::String),
    required("id", Shape::String),
    required("outcomes", Shape::ArrayOf(&EM_OUTCOME_SHAPE)),
    required("actions", Shape::ArrayOf(&EM_ACTION_SHAPE)),
    optional("skills", Shape::ArrayOf(&SKILL_SHAPE)),
    optional("knowledge", Shape::ArrayOf(&RESOURCE_SHAPE)),
    optional("tools", Shape::ArrayOf(&RESOURCE_SHAPE)),
];

/// Top-level field table for a document kind.
pub fn fields_for(kind: DocumentKind) -> &'static [Field] {
    match kind {
        DocumentKind::Cjm => CJM,
        DocumentKind::Sbp => SBP,
        DocumentKind::Outcome => OUTCOME,
        DocumentKind::Em => EM,
    }
}
