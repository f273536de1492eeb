use journey_studio::dsl::schema::{CjmAction, Phase};
use journey_studio::hierarchy::{actions_by_phase, emotion_curve};
use journey_studio::id::SequentialIdGenerator;
use journey_studio::{
    build_chain, check, check_internal, decode, encode, generate_id, parse_id, DocumentKind,
    DocumentSet, DslDocument, IdGenerator, StudioConfig, StudioError, TaskGraph, ViolationKind,
};

const COMPLETE_CHAIN: &str = include_str!("fixtures/complete_chain.yaml");
const MINIMAL_CHAIN: &str = include_str!("fixtures/minimal_chain.yaml");

#[test]
fn test_fixture_roundtrip_is_idempotent() {
    for text in [COMPLETE_CHAIN, MINIMAL_CHAIN] {
        let first = decode(text).unwrap();
        let encoded = encode(&first).unwrap();
        let second = decode(&encoded).unwrap();
        assert_eq!(first, second);
        // A second pass is byte-stable.
        assert_eq!(encode(&second).unwrap(), encoded);
    }
}

#[test]
fn test_consistent_set_has_no_violations() {
    let set = decode(COMPLETE_CHAIN).unwrap();
    let result = check(&set);
    assert!(result.valid);
    assert_eq!(result.errors.len(), 0);
}

#[test]
fn test_dangling_task_source_reported_once() {
    let text = COMPLETE_CHAIN.replace("source_id: A2", "source_id: A-missing");
    let set = decode(&text).unwrap();
    let result = check(&set);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ViolationKind::MissingReference);
    assert_eq!(result.errors[0].source_collection, "sbp:task");
    assert_eq!(result.errors[0].target_id, "A-missing");
}

#[test]
fn test_minimal_chain_resolves() {
    let set = decode(MINIMAL_CHAIN).unwrap();
    let chain = build_chain(&set, "K1").unwrap();
    assert_eq!(chain.cjm_phase.id, "P1");
    assert_eq!(chain.cjm_action.id, "A1");
    assert_eq!(chain.sbp_task.id, "T1");
    assert_eq!(chain.em_actions.len(), 2);
}

#[test]
fn test_chain_unresolvable_cases() {
    let set = decode(MINIMAL_CHAIN).unwrap();
    assert!(build_chain(&set, "K2").is_none());
    assert!(build_chain(&set.without(DocumentKind::Em), "K1").is_none());
    assert!(build_chain(&DocumentSet::default(), "K1").is_none());
}

#[test]
fn test_generated_ids_parse_back() {
    let id = generate_id("cjm", "action");
    let parsed = parse_id(&id).unwrap();
    assert_eq!(parsed.kind, "cjm");
    assert_eq!(parsed.entity_type, "action");
    assert_eq!(id, format!("cjm:action:{}", parsed.uuid));
    assert!(parse_id("cjm-action-1").is_none());
    assert!(parse_id("a:b").is_none());
    assert!(parse_id("a:b:c:d").is_none());
}

#[test]
fn test_duplicate_kind_keeps_second() {
    let text = "\
kind: cjm
version: \"1.0\"
id: first
phases: []
actions: []
---
kind: cjm
version: \"1.0\"
id: second
phases: []
actions: []
";
    let set = decode(text).unwrap();
    assert_eq!(set.cjm.unwrap().id, "second");
}

#[test]
fn test_bogus_kind_rejects_load() {
    let text = format!("{}---\nkind: bogus\n", MINIMAL_CHAIN);
    let err = decode(&text).unwrap_err();
    assert!(matches!(err, StudioError::UnknownKind(_)));
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn test_schema_error_names_kind_and_path() {
    let text = MINIMAL_CHAIN.replace("kind: human", "kind: robot");
    let err = decode(&text).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("sbp"));
    assert!(msg.contains("lanes[0].kind"));
}

#[test]
fn test_editor_flow_add_action_and_recheck() {
    let ids = SequentialIdGenerator::new("ed");
    let set = decode(MINIMAL_CHAIN).unwrap();

    // The editor replaces the CJM wholesale with one holding a new phase and action.
    let mut cjm = set.cjm.clone().unwrap();
    let phase_id = ids.next_id("cjm", "phase");
    cjm.phases.push(Phase {
        id: phase_id.clone(),
        name: "Use".into(),
    });
    cjm.actions.push(CjmAction {
        id: ids.next_id("cjm", "action"),
        name: "Invite teammates".into(),
        phase: phase_id.clone(),
        touchpoints: vec!["app".into()],
        thoughts_feelings: vec![],
        emotion_score: 2,
    });
    let edited = set.with_document(DslDocument::Cjm(cjm));

    assert_eq!(set.cjm.as_ref().unwrap().phases.len(), 1);
    let edited_cjm = edited.cjm.as_ref().unwrap();
    assert_eq!(actions_by_phase(edited_cjm, &phase_id).len(), 1);
    assert_eq!(emotion_curve(edited_cjm).last().unwrap().average, Some(2.0));
    assert!(check(&edited).valid);
    assert!(check_internal(&edited).valid);

    let reloaded = decode(&encode(&edited).unwrap()).unwrap();
    assert_eq!(reloaded, edited);
}

#[test]
fn test_default_outcome_for_new_blueprint() {
    let ids = SequentialIdGenerator::new("d");
    let config = StudioConfig::default();
    let set = decode(MINIMAL_CHAIN)
        .unwrap()
        .without(DocumentKind::Outcome);
    let defaulted = set.with_default_outcome(&ids, &config);
    assert!(defaulted.outcome.is_some());
    // No CSF source yet: nothing dangling, nothing resolvable.
    assert!(check(&defaulted).errors.iter().all(|v| v.source_collection != "outcome:csf"));
    let kpi = defaulted.outcome.as_ref().unwrap().primary_kpi.id.clone();
    assert!(build_chain(&defaulted, &kpi).is_none());

    // The defaulted set survives a save/load cycle.
    let reloaded = decode(&encode(&defaulted).unwrap()).unwrap();
    assert_eq!(reloaded, defaulted);
}

#[test]
fn test_task_graph_over_fixture() {
    let set = decode(COMPLETE_CHAIN).unwrap();
    let graph = TaskGraph::build(set.sbp.as_ref().unwrap());
    assert_eq!(graph.downstream("T1"), vec!["T2".to_string()]);
    assert!(graph.topological_order().is_some());
}

#[test]
fn test_empty_references_decode_as_unset() {
    let text = COMPLETE_CHAIN
        .replace("source_id: A2", "source_id: \"\"")
        .replace("source_id: T2", "source_id: ''");
    let set = decode(&text).unwrap();
    assert_eq!(set.sbp.as_ref().unwrap().tasks[1].source_id.as_deref(), Some(""));
    assert!(check(&set).valid);

    let unset_csf = COMPLETE_CHAIN.replace("source_id: T1\n  rationale", "source_id: \"\"\n  rationale");
    let set = decode(&unset_csf).unwrap();
    assert!(check(&set).valid);
    assert!(build_chain(&set, "K1").is_none());
}

#[test]
fn test_null_optionals_load_and_save() {
    let text = MINIMAL_CHAIN
        .replace("    source_id: A1\n", "    source_id: A1\n    link_to: null\n    readonly: null\n")
        .replace("    emotion_score: 0\n", "    emotion_score: 0\n    touchpoints: null\n");
    let set = decode(&text).unwrap();
    assert_eq!(set, decode(MINIMAL_CHAIN).unwrap());
    assert!(build_chain(&set, "K1").is_some());
}
