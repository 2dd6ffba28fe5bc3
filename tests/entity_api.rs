//! End-to-end tests for the run-state entity API.
//!
//! These exercise the public facade the way a client of the tracking
//! system would: construct, cross the wire boundary, rebuild from a
//! loosely-typed dictionary, and consult the capability registry.

use proptest::prelude::*;
use trackstore::prelude::*;

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn run_state_survives_wire_round_trip() {
    let state = RunState::new(some("s1"), some("exp1"), some("my-run")).unwrap();
    let restored = RunState::from_wire(state.to_wire()).unwrap();

    // Distinct instance, equal value.
    assert_eq!(restored, state);
    assert_eq!(restored.state_id(), "s1");
    assert_eq!(restored.experiment_id(), "exp1");
    assert_eq!(restored.name(), "my-run");
}

#[test]
fn construction_failure_produces_no_instance() {
    let result = RunState::new(some("s1"), None, some("my-run"));
    let err: Error = result.unwrap_err().into();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("experiment_id"));
}

#[test]
fn dictionary_with_unknown_keys_builds_equal_entity() {
    let dict = json!({
        "state_id": "r1",
        "experiment_id": "e1",
        "name": "run",
        "unused_key": 123,
    });
    let from_dict = RunState::from_dictionary(dict.as_object().unwrap()).unwrap();
    let direct = RunState::new(some("r1"), some("e1"), some("run")).unwrap();
    assert_eq!(from_dict, direct);
}

#[test]
fn dictionary_missing_required_key_is_invalid_argument() {
    let dict = json!({ "experiment_id": "e1", "name": "run" });
    let err: Error = RunState::from_dictionary(dict.as_object().unwrap())
        .unwrap_err()
        .into();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("state_id"));
}

#[test]
fn capability_registry_exposes_search_metadata() {
    let searchable =
        attributes_with_capability("run_state", AttributeCapability::Searchable).unwrap();
    assert_eq!(searchable.iter().copied().collect::<Vec<_>>(), vec!["name"]);

    let orderable =
        attributes_with_capability("run_state", AttributeCapability::Orderable).unwrap();
    assert!(orderable.is_empty());

    assert!(is_attribute("run_state", AttributeCapability::Searchable, "name"));
    assert!(!is_attribute("run_state", AttributeCapability::Searchable, "state_id"));
}

#[test]
fn mutation_guard_rejects_deleted_run() {
    assert!(check_run_is_active("r-1", LifecycleStage::Active).is_ok());

    let err: Error = check_run_is_active("r-1", LifecycleStage::Deleted)
        .unwrap_err()
        .into();
    assert!(err.is_illegal_state());
}

#[test]
fn wire_message_with_wrong_field_names_fails_to_decode() {
    let json = r#"{"state_id":"s1","experimdent_id":"exp1","name":"my-run"}"#;
    assert!(serde_json::from_str::<RunStateWire>(json).is_err());
}

proptest! {
    #[test]
    fn wire_round_trip_holds_for_arbitrary_strings(
        state_id in ".*",
        experiment_id in ".*",
        name in ".*",
    ) {
        let state = RunState::new(
            Some(state_id.clone()),
            Some(experiment_id.clone()),
            Some(name.clone()),
        ).unwrap();

        let wire = state.to_wire();
        let json = serde_json::to_string(&wire).unwrap();
        let decoded: RunStateWire = serde_json::from_str(&json).unwrap();
        let restored = RunState::from_wire(decoded).unwrap();

        prop_assert_eq!(&restored, &state);
        prop_assert_eq!(restored.experiment_id(), experiment_id.as_str());
    }
}
