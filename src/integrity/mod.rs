//! Reference integrity over a [`DocumentSet`].
//!
//! Dangling references are diagnostics, not failures: both checks are total
//! and always return a result the caller can render.

mod cross;
mod internal;
mod types;

use crate::dsl::DocumentSet;

pub use types::{
    ReferenceCheckResult, Violation, ViolationKind, CJM_ACTION, CJM_PHASE, EM_ACTION,
    EM_KNOWLEDGE, EM_OUTCOME, EM_SKILL, EM_TOOL, OUTCOME_CSF, OUTCOME_KGI, OUTCOME_KPI, SBP_LANE,
    SBP_TASK,
};

/// Cross-document references, in check order:
/// SBP task -> CJM action, CSF -> SBP task, EM action -> SBP task, EM outcome -> KPI.
pub fn check(set: &DocumentSet) -> ReferenceCheckResult {
    let violations = cross::validate(set);
    tracing::debug!(violations = violations.len(), "cross-document reference check");
    ReferenceCheckResult::from_violations(violations)
}

/// References that stay inside one document, plus ids reused anywhere in the set.
pub fn check_internal(set: &DocumentSet) -> ReferenceCheckResult {
    let violations = internal::validate(set);
    tracing::debug!(violations = violations.len(), "internal reference check");
    ReferenceCheckResult::from_violations(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::DocumentKind;
    use crate::testing::complete_set;

    #[test]
    fn test_consistent_set_is_valid() {
        let result = check(&complete_set());
        assert!(result.valid, "{:?}", result.errors);
        assert!(result.errors.is_empty());
        assert!(check_internal(&complete_set()).valid);
    }

    #[test]
    fn test_empty_and_partial_sets_are_valid() {
        assert!(check(&DocumentSet::default()).valid);
        let full = complete_set();
        for kind in DocumentKind::ALL {
            let only = DocumentSet::default()
                .with_document(full.get(kind).unwrap().to_owned_document());
            assert!(check(&only).valid);
        }
    }

    #[test]
    fn test_dangling_task_source() {
        let mut set = complete_set();
        set.sbp.as_mut().unwrap().tasks[1].source_id = Some("A404".into());
        let result = check(&set);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        let v = &result.errors[0];
        assert_eq!(v.kind, ViolationKind::MissingReference);
        assert_eq!(v.source_collection, "sbp:task");
        assert_eq!(v.source_id, "T2");
        assert_eq!(v.target_collection, "cjm:action");
        assert_eq!(v.target_id, "A404");
        assert!(v.message.contains("Charge card"));
        assert!(v.message.contains("A404"));
    }

    #[test]
    fn test_task_source_unchecked_without_cjm() {
        let mut set = complete_set().without(DocumentKind::Cjm);
        set.sbp.as_mut().unwrap().tasks[0].source_id = Some("A404".into());
        assert!(check(&set).valid);
    }

    #[test]
    fn test_empty_reference_counts_as_unset() {
        let mut set = complete_set();
        set.sbp.as_mut().unwrap().tasks[0].source_id = Some(String::new());
        set.outcome.as_mut().unwrap().primary_csf.source_id = None;
        set.em.as_mut().unwrap().actions[0].source_id = String::new();
        assert!(check(&set).valid);
    }

    #[test]
    fn test_violation_order_follows_check_order() {
        let mut set = complete_set();
        set.em.as_mut().unwrap().outcomes[0].source_id = "K404".into();
        set.em.as_mut().unwrap().actions[2].source_id = "T404".into();
        set.outcome.as_mut().unwrap().primary_csf.source_id = Some("T405".into());
        set.sbp.as_mut().unwrap().tasks[2].source_id = Some("A404".into());
        set.sbp.as_mut().unwrap().tasks[0].source_id = Some("A405".into());

        let result = check(&set);
        let sources: Vec<(&str, &str)> = result
            .errors
            .iter()
            .map(|v| (v.source_collection.as_str(), v.source_id.as_str()))
            .collect();
        assert_eq!(
            sources,
            vec![
                ("sbp:task", "T1"),
                ("sbp:task", "T3"),
                ("outcome:csf", "C1"),
                ("em:action", "E3"),
                ("em:outcome", "O1"),
            ]
        );
        assert_eq!(result.errors[4].target_collection, "outcome:kpi");
        assert!(result.errors[4].message.contains("K1"));
    }

    #[test]
    fn test_internal_references() {
        let mut set = complete_set();
        set.cjm.as_mut().unwrap().actions[0].phase = "P9".into();
        set.sbp.as_mut().unwrap().tasks[0].lane = "L9".into();
        set.sbp.as_mut().unwrap().tasks[1].link_to = vec!["T9".into()];
        set.outcome.as_mut().unwrap().primary_kpi.csf_id = "C9".into();
        set.em.as_mut().unwrap().tools[0].action_id = "E9".into();

        let result = check_internal(&set);
        let targets: Vec<(&str, &str)> = result
            .errors
            .iter()
            .map(|v| (v.target_collection.as_str(), v.target_id.as_str()))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("cjm:phase", "P9"),
                ("sbp:lane", "L9"),
                ("sbp:task", "T9"),
                ("outcome:csf", "C9"),
                ("em:action", "E9"),
            ]
        );
        // Cross-document check is unaffected.
        assert!(check(&set).valid);
    }

    #[test]
    fn test_duplicate_ids_across_documents() {
        let mut set = complete_set();
        set.em.as_mut().unwrap().actions[0].id = "T1".into();
        set.em.as_mut().unwrap().skills[0].action_id = "T1".into();
        let result = check_internal(&set);
        assert_eq!(result.errors.len(), 1);
        let v = &result.errors[0];
        assert_eq!(v.kind, ViolationKind::DuplicateId);
        assert_eq!(v.source_collection, "em:action");
        assert_eq!(v.target_collection, "sbp:task");
    }
}
