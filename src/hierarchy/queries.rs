//! Point lookups used by the editors. Nothing here fails: no match is an
//! empty result.

use serde::{Deserialize, Serialize};

use crate::dsl::schema::{
    reference, CjmAction, CjmDocument, EmAction, EmDocument, EmOutcome, Knowledge,
    OutcomeDocument, SbpDocument, SbpTask, Skill, Tool,
};

pub fn actions_by_phase<'a>(cjm: &'a CjmDocument, phase_id: &str) -> Vec<&'a CjmAction> {
    cjm.actions.iter().filter(|a| a.phase == phase_id).collect()
}

pub fn tasks_by_source_action<'a>(sbp: &'a SbpDocument, action_id: &str) -> Vec<&'a SbpTask> {
    sbp.tasks
        .iter()
        .filter(|t| t.source_id.as_deref() == Some(action_id))
        .collect()
}

/// The task the primary CSF points at.
pub fn task_by_csf_source<'a>(
    sbp: &'a SbpDocument,
    outcome: &OutcomeDocument,
) -> Option<&'a SbpTask> {
    let source = reference(outcome.primary_csf.source_id.as_deref())?;
    sbp.tasks.iter().find(|t| t.id == source)
}

pub fn actions_by_source_task<'a>(em: &'a EmDocument, task_id: &str) -> Vec<&'a EmAction> {
    em.actions.iter().filter(|a| a.source_id == task_id).collect()
}

pub fn outcomes_by_kpi<'a>(em: &'a EmDocument, kpi_id: &str) -> Vec<&'a EmOutcome> {
    em.outcomes.iter().filter(|o| o.source_id == kpi_id).collect()
}

pub fn skills_by_action<'a>(em: &'a EmDocument, action_id: &str) -> Vec<&'a Skill> {
    em.skills.iter().filter(|s| s.action_id == action_id).collect()
}

pub fn knowledge_by_action<'a>(em: &'a EmDocument, action_id: &str) -> Vec<&'a Knowledge> {
    em.knowledge
        .iter()
        .filter(|k| k.action_id == action_id)
        .collect()
}

pub fn tools_by_action<'a>(em: &'a EmDocument, action_id: &str) -> Vec<&'a Tool> {
    em.tools.iter().filter(|t| t.action_id == action_id).collect()
}

/// One point of the emotion curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionPoint {
    pub phase_id: String,
    pub phase_name: String,
    pub action_count: usize,
    /// Mean emotion score of the phase's actions; `None` for an empty phase.
    pub average: Option<f64>,
}

/// Emotion curve in phase order.
pub fn emotion_curve(cjm: &CjmDocument) -> Vec<EmotionPoint> {
    cjm.phases
        .iter()
        .map(|phase| {
            let actions = actions_by_phase(cjm, &phase.id);
            let average = if actions.is_empty() {
                None
            } else {
                let total: i64 = actions.iter().map(|a| i64::from(a.emotion_score)).sum();
                Some(total as f64 / actions.len() as f64)
            };
            EmotionPoint {
                phase_id: phase.id.clone(),
                phase_name: phase.name.clone(),
                action_count: actions.len(),
                average,
            }
        })
        .collect()
}
