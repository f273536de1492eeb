//! # Journey Studio: cross-DSL integrity engine
//!
//! `journey_studio` is the core behind a visual editor for four interlinked
//! YAML DSLs that describe a customer-journey-to-enablement pipeline:
//!
//! - **CJM** (Customer Journey Map): persona, ordered phases, actions with emotion scores.
//! - **SBP** (Service Blueprint): lanes and tasks, tasks sourced from CJM actions.
//! - **Outcome**: one KGI, one primary CSF sourced from an SBP task, one primary KPI.
//! - **EM** (Enablement Map): outcomes tied to the KPI, actions sourced from SBP
//!   tasks, and the skills, knowledge and tools behind those actions.
//!
//! The crate covers:
//!
//! - **Codec**: `---`-separated multi-document YAML into a [`DocumentSet`] and back.
//! - **Schema validation**: per-kind structural checks with field-path diagnostics.
//! - **Reference integrity**: dangling cross-document references as a flat violation list.
//! - **Hierarchy resolution**: KPI → CSF → task → action → phase chains and point queries.
//! - **Identifiers**: `{kind}:{entityType}:{uuid}` ids for newly created entities.
//!
//! Every operation is a pure function over immutable values; the caller owns
//! the current document set and its history.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use journey_studio::{build_chain, check, decode, encode};
//!
//! let text = std::fs::read_to_string("journey.yaml").unwrap();
//! let set = decode(&text).unwrap();
//!
//! let report = check(&set);
//! for violation in &report.errors {
//!     println!("{}", violation.message);
//! }
//!
//! if let Some(kpi) = set.outcome.as_ref().map(|o| o.primary_kpi.id.clone()) {
//!     if let Some(chain) = build_chain(&set, &kpi) {
//!         println!("{} -> {}", chain.kpi.name, chain.cjm_phase.name);
//!     }
//! }
//!
//! let saved = encode(&set).unwrap();
//! # let _ = saved;
//! ```

pub mod config;
pub mod dsl;
pub mod error;
pub mod graph;
pub mod hierarchy;
pub mod id;
pub mod integrity;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::config::StudioConfig;
pub use crate::dsl::{
    decode, encode, parse_document, scaffold, validate, validate_document_set, DocumentCodec,
    DocumentKind, DocumentSet, DslDocument, DslFormat, SchemaValidator, SchemaViolation,
    ValidationReport,
};
pub use crate::error::{StudioError, StudioResult};
pub use crate::graph::TaskGraph;
pub use crate::hierarchy::{build_chain, Chain};
pub use crate::id::{generate_id, parse_id, IdGenerator, ParsedId, RandomIdGenerator};
pub use crate::integrity::{
    check, check_internal, ReferenceCheckResult, Violation, ViolationKind,
};
