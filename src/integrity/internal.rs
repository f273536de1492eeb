//! Intra-document references and set-wide id uniqueness.

use std::collections::{HashMap, HashSet};

use crate::dsl::schema::{CjmDocument, EmDocument, OutcomeDocument, SbpDocument};
use crate::dsl::DocumentSet;

use super::types::{
    Violation, ViolationKind, CJM_ACTION, CJM_PHASE, EM_ACTION, EM_KNOWLEDGE, EM_OUTCOME,
    EM_SKILL, EM_TOOL, OUTCOME_CSF, OUTCOME_KGI, OUTCOME_KPI, SBP_LANE, SBP_TASK,
};

pub fn validate(set: &DocumentSet) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some(cjm) = &set.cjm {
        check_cjm(cjm, &mut violations);
    }
    if let Some(sbp) = &set.sbp {
        check_sbp(sbp, &mut violations);
    }
    if let Some(outcome) = &set.outcome {
        check_outcome(outcome, &mut violations);
    }
    if let Some(em) = &set.em {
        check_em(em, &mut violations);
    }
    check_unique_ids(set, &mut violations);

    violations
}

fn check_cjm(cjm: &CjmDocument, out: &mut Vec<Violation>) {
    let phase_ids: HashSet<&str> = cjm.phases.iter().map(|p| p.id.as_str()).collect();
    for action in &cjm.actions {
        if !phase_ids.contains(action.phase.as_str()) {
            out.push(Violation::missing_reference(
                CJM_ACTION,
                &action.id,
                CJM_PHASE,
                &action.phase,
                format!(
                    "CJM action \"{}\" ({}) belongs to missing phase \"{}\"",
                    action.name, action.id, action.phase
                ),
            ));
        }
    }
}

fn check_sbp(sbp: &SbpDocument, out: &mut Vec<Violation>) {
    let lane_ids: HashSet<&str> = sbp.lanes.iter().map(|l| l.id.as_str()).collect();
    let task_ids: HashSet<&str> = sbp.tasks.iter().map(|t| t.id.as_str()).collect();

    for task in &sbp.tasks {
        if !lane_ids.contains(task.lane.as_str()) {
            out.push(Violation::missing_reference(
                SBP_TASK,
                &task.id,
                SBP_LANE,
                &task.lane,
                format!(
                    "SBP task \"{}\" ({}) sits in missing lane \"{}\"",
                    task.name, task.id, task.lane
                ),
            ));
        }
        for target in &task.link_to {
            if !task_ids.contains(target.as_str()) {
                out.push(Violation::missing_reference(
                    SBP_TASK,
                    &task.id,
                    SBP_TASK,
                    target,
                    format!(
                        "SBP task \"{}\" ({}) links to missing task \"{}\"",
                        task.name, task.id, target
                    ),
                ));
            }
        }
    }
}

fn check_outcome(outcome: &OutcomeDocument, out: &mut Vec<Violation>) {
    let csf = &outcome.primary_csf;
    if csf.kgi_id != outcome.kgi.id {
        out.push(Violation::missing_reference(
            OUTCOME_CSF,
            &csf.id,
            OUTCOME_KGI,
            &csf.kgi_id,
            format!("Outcome CSF ({}) references missing KGI \"{}\"", csf.id, csf.kgi_id),
        ));
    }
    let kpi = &outcome.primary_kpi;
    if kpi.csf_id != csf.id {
        out.push(Violation::missing_reference(
            OUTCOME_KPI,
            &kpi.id,
            OUTCOME_CSF,
            &kpi.csf_id,
            format!(
                "Outcome KPI \"{}\" ({}) references missing CSF \"{}\"",
                kpi.name, kpi.id, kpi.csf_id
            ),
        ));
    }
}

fn check_em(em: &EmDocument, out: &mut Vec<Violation>) {
    let action_ids: HashSet<&str> = em.actions.iter().map(|a| a.id.as_str()).collect();
    let owned = em
        .skills
        .iter()
        .map(|s| (EM_SKILL, &s.id, &s.name, &s.action_id))
        .chain(em.knowledge.iter().map(|k| (EM_KNOWLEDGE, &k.id, &k.name, &k.action_id)))
        .chain(em.tools.iter().map(|t| (EM_TOOL, &t.id, &t.name, &t.action_id)));

    for (collection, id, name, action_id) in owned {
        if !action_ids.contains(action_id.as_str()) {
            out.push(Violation::missing_reference(
                collection,
                id,
                EM_ACTION,
                action_id,
                format!(
                    "{} \"{}\" ({}) references missing EM action \"{}\"",
                    collection, name, id, action_id
                ),
            ));
        }
    }
}

/// Every entity id in the set, tagged with its collection, in canonical order.
fn all_ids(set: &DocumentSet) -> Vec<(&'static str, &str)> {
    let mut ids: Vec<(&'static str, &str)> = Vec::new();
    if let Some(cjm) = &set.cjm {
        ids.push(("cjm:document", cjm.id.as_str()));
        ids.extend(cjm.phases.iter().map(|p| (CJM_PHASE, p.id.as_str())));
        ids.extend(cjm.actions.iter().map(|a| (CJM_ACTION, a.id.as_str())));
    }
    if let Some(sbp) = &set.sbp {
        ids.push(("sbp:document", sbp.id.as_str()));
        ids.extend(sbp.lanes.iter().map(|l| (SBP_LANE, l.id.as_str())));
        ids.extend(sbp.tasks.iter().map(|t| (SBP_TASK, t.id.as_str())));
    }
    if let Some(outcome) = &set.outcome {
        ids.push(("outcome:document", outcome.id.as_str()));
        ids.push((OUTCOME_KGI, outcome.kgi.id.as_str()));
        ids.push((OUTCOME_CSF, outcome.primary_csf.id.as_str()));
        ids.push((OUTCOME_KPI, outcome.primary_kpi.id.as_str()));
    }
    if let Some(em) = &set.em {
        ids.push(("em:document", em.id.as_str()));
        ids.extend(em.outcomes.iter().map(|o| (EM_OUTCOME, o.id.as_str())));
        ids.extend(em.actions.iter().map(|a| (EM_ACTION, a.id.as_str())));
        ids.extend(em.skills.iter().map(|s| (EM_SKILL, s.id.as_str())));
        ids.extend(em.knowledge.iter().map(|k| (EM_KNOWLEDGE, k.id.as_str())));
        ids.extend(em.tools.iter().map(|t| (EM_TOOL, t.id.as_str())));
    }
    ids
}

fn check_unique_ids(set: &DocumentSet, out: &mut Vec<Violation>) {
    let mut first_seen: HashMap<&str, &'static str> = HashMap::new();
    for (collection, id) in all_ids(set) {
        match first_seen.get(id).copied() {
            Some(first) => out.push(Violation {
                kind: ViolationKind::DuplicateId,
                source_collection: collection.to_string(),
                source_id: id.to_string(),
                target_collection: first.to_string(),
                target_id: id.to_string(),
                message: format!("id \"{}\" in {} is already used in {}", id, collection, first),
            }),
            None => {
                first_seen.insert(id, collection);
            }
        }
    }
}
