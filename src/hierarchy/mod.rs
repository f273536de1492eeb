//! Hierarchy resolution: Outcome KPI -> CSF -> SBP task -> CJM action -> CJM
//! phase, plus the EM actions hanging off the task.
//!
//! An unresolvable chain is `None`, never an error.

mod queries;

use serde::{Deserialize, Serialize};

use crate::dsl::schema::{reference, CjmAction, EmAction, Kpi, Phase, SbpTask};
use crate::dsl::DocumentSet;

pub use queries::{
    actions_by_phase, actions_by_source_task, emotion_curve, knowledge_by_action,
    outcomes_by_kpi, skills_by_action, task_by_csf_source, tasks_by_source_action,
    tools_by_action, EmotionPoint,
};

/// A resolved lineage. Owns copies of every entity, so later edits to the
/// document set never change a chain already handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    pub kpi: Kpi,
    pub sbp_task: SbpTask,
    pub cjm_action: CjmAction,
    pub cjm_phase: Phase,
    pub em_actions: Vec<EmAction>,
}

/// Resolve the chain for `kpi_id`. Requires all four documents.
pub fn build_chain(set: &DocumentSet, kpi_id: &str) -> Option<Chain> {
    let (Some(cjm), Some(sbp), Some(outcome), Some(em)) =
        (&set.cjm, &set.sbp, &set.outcome, &set.em)
    else {
        tracing::trace!("chain unresolvable: document set incomplete");
        return None;
    };

    let kpi = &outcome.primary_kpi;
    if kpi.id != kpi_id {
        tracing::trace!(requested = kpi_id, loaded = %kpi.id, "chain unresolvable: KPI mismatch");
        return None;
    }

    let Some(task) = task_by_csf_source(sbp, outcome) else {
        tracing::trace!(csf = %outcome.primary_csf.id, "chain unresolvable: CSF source task");
        return None;
    };

    let Some(action_id) = reference(task.source_id.as_deref()) else {
        tracing::trace!(task = %task.id, "chain unresolvable: task has no source action");
        return None;
    };
    let Some(action) = cjm.actions.iter().find(|a| a.id == action_id) else {
        tracing::trace!(task = %task.id, action = action_id, "chain unresolvable: missing CJM action");
        return None;
    };
    let Some(phase) = cjm.phases.iter().find(|p| p.id == action.phase) else {
        tracing::trace!(action = %action.id, phase = %action.phase, "chain unresolvable: missing CJM phase");
        return None;
    };

    let em_actions = actions_by_source_task(em, &task.id)
        .into_iter()
        .cloned()
        .collect();

    Some(Chain {
        kpi: kpi.clone(),
        sbp_task: task.clone(),
        cjm_action: action.clone(),
        cjm_phase: phase.clone(),
        em_actions,
    })
}
