use inventory_app_core::{InventoryReducers, InventoryStore};
use inventory_core::{Action, ActionTypes};
use serde_json::json;

fn store() -> InventoryStore {
    InventoryStore::new(
        InventoryReducers::new(&ActionTypes::inventory(), &ActionTypes::inventory_namespace())
            .unwrap(),
    )
}

#[test]
fn dispatch_replaces_state_and_clones_share_it() {
    let store = store();
    let view = store.clone();

    store
        .dispatch(&Action::new(
            "GET_ENTITIES_FULFILLED",
            json!([{"id": 1, "display_name": "A", "x": 1}]),
        ))
        .unwrap();

    let state = view.state();
    assert_eq!(serde_json::to_value(&state.entities.rows).unwrap(), json!([{"id": 1, "x": 1}]));
}

#[test]
fn snapshots_are_not_affected_by_later_dispatches() {
    let store = store();
    let before = store.state();

    store.dispatch(&Action::bare("LOAD_ENTITY_FULFILLED")).unwrap();

    assert!(!before.entity_detail.loaded);
    assert!(store.state().entity_detail.loaded);
}

#[test]
fn failed_dispatch_keeps_previous_state() {
    let store = store();
    store
        .dispatch(&Action::new("GET_TAGS_REJECTED", json!({"message": "first"})))
        .unwrap();
    let before = store.state();

    let err = store
        .dispatch(&Action::new("GET_ENTITY_FULFILLED", json!("oops")))
        .unwrap_err();

    assert_eq!(err.tag, "GET_ENTITY_FULFILLED");
    assert!(store.state().is_same(&before));
}

#[test]
fn dispatch_all_stops_at_first_failure() {
    let store = store();
    let actions = vec![
        Action::new("GET_ENTITIES_REJECTED", json!({"message": "one"})),
        Action::new("GET_ENTITY_FULFILLED", json!("not an object")),
        Action::new("GET_ENTITIES_REJECTED", json!({"message": "three"})),
    ];

    assert!(store.dispatch_all(&actions).is_err());
    assert_eq!(store.state().alerts.alerts.len(), 1);
}

#[test]
fn dispatch_all_counts_applied_actions() {
    let store = store();
    let actions = vec![
        Action::bare("LOAD_ENTITY_FULFILLED"),
        Action::bare("NOT_HANDLED_ANYWHERE"),
    ];

    assert_eq!(store.dispatch_all(&actions).unwrap(), 2);
    assert!(store.state().entity_detail.loaded);
}
