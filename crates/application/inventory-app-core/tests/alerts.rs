use std::sync::Arc;

use inventory_app_core::{alerts_reducer, AlertsState, ReducerHash};
use inventory_core::{Action, ActionTypes};
use serde_json::json;

fn reducer() -> ReducerHash<AlertsState> {
    alerts_reducer(&ActionTypes::inventory()).unwrap()
}

fn run(hash: &ReducerHash<AlertsState>, actions: &[Action]) -> Arc<AlertsState> {
    actions.iter().fold(hash.initial_state(), |state, action| {
        hash.reduce(&state, action).unwrap()
    })
}

#[test]
fn every_rejected_tag_in_the_table_is_registered() {
    let types = ActionTypes::new()
        .async_action("X")
        .action("ALERT_ADD")
        .action("ALERT_DISMISS");
    let hash = alerts_reducer(&types).unwrap();

    assert_eq!(
        hash.tags().collect::<Vec<_>>(),
        vec!["ALERT_ADD", "ALERT_DISMISS", "X_REJECTED"]
    );
    assert!(!hash.handles("X_FULFILLED"));
}

#[test]
fn rejected_actions_raise_warnings_with_increasing_ids() {
    let types = ActionTypes::new()
        .async_action("X")
        .action("ALERT_ADD")
        .action("ALERT_DISMISS");
    let hash = alerts_reducer(&types).unwrap();
    let failed = Action::new("X_REJECTED", json!({"message": "failed"}));

    let state = run(&hash, &[failed.clone(), failed]);

    assert_eq!(state.alerts.len(), 2);
    assert!(state.alerts[0].id < state.alerts[1].id);
    for alert in &state.alerts {
        assert_eq!(alert.title.as_deref(), Some("failed"));
        assert_eq!(alert.variant.as_deref(), Some("warning"));
        assert!(alert.dismissible);
    }
}

#[test]
fn ids_are_never_reused_after_dismissal() {
    let hash = reducer();
    let state = run(
        &hash,
        &[
            Action::new("GET_TAGS_REJECTED", json!({"message": "a"})),
            Action::new("GET_GROUPS_REJECTED", json!({"message": "b"})),
            Action::new("ALERT_DISMISS", json!({"id": 1})),
            Action::new("GET_ENTITY_REJECTED", json!({"message": "c"})),
        ],
    );

    let ids: Vec<u64> = state.alerts.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![0, 2]);
    assert_eq!(state.next_id, 3);
}

#[test]
fn n_rejections_give_n_distinct_ids() {
    let hash = reducer();
    let actions: Vec<Action> = (0..25)
        .map(|n| Action::new("GET_ENTITIES_REJECTED", json!({"message": format!("#{n}")})))
        .collect();

    let state = run(&hash, &actions);

    assert_eq!(state.alerts.len(), 25);
    assert!(state.alerts.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn alert_add_keeps_payload_fields_but_assigns_the_id() {
    let hash = reducer();
    let state = run(
        &hash,
        &[Action::new(
            "ALERT_ADD",
            json!({"id": 99, "title": "Saved", "variant": "success", "description": "Host moved"}),
        )],
    );

    let alert = &state.alerts[0];
    assert_eq!(alert.id, 0);
    assert_eq!(alert.title.as_deref(), Some("Saved"));
    assert_eq!(alert.variant.as_deref(), Some("success"));
    assert!(!alert.dismissible);
    assert_eq!(alert.extra["description"], json!("Host moved"));
}

#[test]
fn dismissing_unknown_id_keeps_alerts() {
    let hash = reducer();
    let state = run(
        &hash,
        &[
            Action::new("ALERT_ADD", json!({"title": "one"})),
            Action::new("ALERT_DISMISS", json!({"id": 42})),
        ],
    );
    assert_eq!(state.alerts.len(), 1);
}

#[test]
fn rejection_without_message_still_raises_an_untitled_warning() {
    let hash = reducer();
    let state = run(
        &hash,
        &[
            Action::bare("GET_TAGS_REJECTED"),
            Action::new("GET_GROUPS_REJECTED", json!({"message": 503})),
            Action::new("GET_ENTITY_REJECTED", json!({"status": 500})),
        ],
    );

    assert_eq!(state.alerts.len(), 3);
    for alert in &state.alerts {
        assert_eq!(alert.title, None);
        assert_eq!(alert.variant.as_deref(), Some("warning"));
        assert!(alert.dismissible);
    }
    assert_eq!(state.next_id, 3);
}
