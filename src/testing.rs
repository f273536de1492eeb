//! Shared fixtures for unit tests.

use crate::dsl::{decode, DocumentSet};

pub const COMPLETE_CHAIN_YAML: &str = include_str!("../tests/fixtures/complete_chain.yaml");

/// Four consistent documents: KPI K1 -> CSF C1 -> task T1 -> action A1 -> phase P1,
/// with EM actions E1 and E2 attached to T1.
pub fn complete_set() -> DocumentSet {
    decode(COMPLETE_CHAIN_YAML).expect("fixture decodes")
}
