//! Cross-document reference checks.
//!
//! Each check runs only when both documents of the relationship are loaded.

use std::collections::HashSet;

use crate::dsl::schema::{reference, CjmDocument, EmDocument, OutcomeDocument, SbpDocument};
use crate::dsl::DocumentSet;

use super::types::{
    Violation, CJM_ACTION, EM_ACTION, EM_OUTCOME, OUTCOME_CSF, OUTCOME_KPI, SBP_TASK,
};

pub fn validate(set: &DocumentSet) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let (Some(sbp), Some(cjm)) = (&set.sbp, &set.cjm) {
        check_task_sources(sbp, cjm, &mut violations);
    }
    if let (Some(outcome), Some(sbp)) = (&set.outcome, &set.sbp) {
        check_csf_source(outcome, sbp, &mut violations);
    }
    if let (Some(em), Some(sbp)) = (&set.em, &set.sbp) {
        check_em_action_sources(em, sbp, &mut violations);
    }
    if let (Some(em), Some(outcome)) = (&set.em, &set.outcome) {
        check_em_outcome_sources(em, outcome, &mut violations);
    }

    violations
}

fn check_task_sources(sbp: &SbpDocument, cjm: &CjmDocument, out: &mut Vec<Violation>) {
    let action_ids: HashSet<&str> = cjm.actions.iter().map(|a| a.id.as_str()).collect();
    for task in &sbp.tasks {
        let Some(source) = reference(task.source_id.as_deref()) else {
            continue;
        };
        if !action_ids.contains(source) {
            out.push(Violation::missing_reference(
                SBP_TASK,
                &task.id,
                CJM_ACTION,
                source,
                format!(
                    "SBP task \"{}\" ({}) references missing CJM action \"{}\"",
                    task.name, task.id, source
                ),
            ));
        }
    }
}

fn check_csf_source(outcome: &OutcomeDocument, sbp: &SbpDocument, out: &mut Vec<Violation>) {
    let csf = &outcome.primary_csf;
    let Some(source) = reference(csf.source_id.as_deref()) else {
        return;
    };
    if !sbp.tasks.iter().any(|t| t.id == source) {
        out.push(Violation::missing_reference(
            OUTCOME_CSF,
            &csf.id,
            SBP_TASK,
            source,
            format!(
                "Outcome CSF ({}) references missing SBP task \"{}\"",
                csf.id, source
            ),
        ));
    }
}

fn check_em_action_sources(em: &EmDocument, sbp: &SbpDocument, out: &mut Vec<Violation>) {
    let task_ids: HashSet<&str> = sbp.tasks.iter().map(|t| t.id.as_str()).collect();
    for action in &em.actions {
        let Some(source) = reference(Some(action.source_id.as_str())) else {
            continue;
        };
        if !task_ids.contains(source) {
            out.push(Violation::missing_reference(
                EM_ACTION,
                &action.id,
                SBP_TASK,
                source,
                format!(
                    "EM action \"{}\" ({}) references missing SBP task \"{}\"",
                    action.name, action.id, source
                ),
            ));
        }
    }
}

fn check_em_outcome_sources(em: &EmDocument, outcome: &OutcomeDocument, out: &mut Vec<Violation>) {
    let kpi_id = outcome.primary_kpi.id.as_str();
    for em_outcome in &em.outcomes {
        let Some(source) = reference(Some(em_outcome.source_id.as_str())) else {
            continue;
        };
        if source != kpi_id {
            out.push(Violation::missing_reference(
                EM_OUTCOME,
                &em_outcome.id,
                OUTCOME_KPI,
                source,
                format!(
                    "EM outcome ({}) references KPI \"{}\" but the current KPI is \"{}\"",
                    em_outcome.id, source, kpi_id
                ),
            ));
        }
    }
}
