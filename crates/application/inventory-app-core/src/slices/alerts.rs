use inventory_config::REJECTION_ALERT_VARIANT;
use inventory_core::{Action, ActionTypes, CoreError};
use serde_json::{Map, Value};
use tracing::debug;

use crate::app_core::ReducerHash;
use crate::domain::{Alert, AlertId, AlertsState};

/// Alert reducer. Besides explicit add and dismiss, every rejected async
/// action in `types` raises a dismissible warning carrying its message.
pub fn alerts_reducer(types: &ActionTypes) -> Result<ReducerHash<AlertsState>, CoreError> {
    let rejected = types.rejected_tags();
    debug!(count = rejected.len(), "mapping rejected actions to alerts");

    Ok(ReducerHash::new("alerts", AlertsState::default())
        .on(types.tag("ALERT_ADD")?, alert_added)
        .on(types.tag("ALERT_DISMISS")?, alert_dismissed)
        .on_each(rejected, rejection_alert))
}

/// Appends the alert built for the next id and advances the counter.
fn push_alert(state: &AlertsState, build: impl FnOnce(AlertId) -> Alert) -> AlertsState {
    let mut alerts = state.alerts.clone();
    alerts.push(build(state.next_id));
    AlertsState {
        alerts,
        next_id: state.next_id + 1,
    }
}

fn alert_added(state: &AlertsState, action: &Action) -> Result<AlertsState, CoreError> {
    let mut fields = action.payload_object()?.clone();
    fields.insert("id".to_string(), Value::from(state.next_id));
    let alert: Alert = serde_json::from_value(Value::Object(fields))?;

    Ok(push_alert(state, |id| Alert { id, ..alert }))
}

fn alert_dismissed(state: &AlertsState, action: &Action) -> Result<AlertsState, CoreError> {
    let id = action
        .payload_field("id")?
        .as_u64()
        .ok_or(CoreError::InvalidField {
            field: "id",
            expected: "an alert id",
        })?;

    Ok(AlertsState {
        alerts: state
            .alerts
            .iter()
            .filter(|alert| alert.id != id)
            .cloned()
            .collect(),
        next_id: state.next_id,
    })
}

/// A rejection without a readable message still surfaces, untitled.
fn rejection_alert(state: &AlertsState, action: &Action) -> Result<AlertsState, CoreError> {
    let title = action
        .payload
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(push_alert(state, |id| Alert {
        id,
        title,
        variant: Some(REJECTION_ALERT_VARIANT.to_string()),
        dismissible: true,
        extra: Map::new(),
    }))
}
