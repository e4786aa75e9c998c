use inventory_config::{DISPLAY_NAME_FIELD, GROUPS_FIELD};
use inventory_core::host::{host_id, id_string};
use inventory_core::{merge_entities, Action, ActionTypes, CoreError, Entity, GroupRef};
use serde::Deserialize;
use serde_json::Value;

use crate::app_core::ReducerHash;
use crate::domain::EntitiesState;

/// Reducer for the host table.
pub fn entities_reducer(types: &ActionTypes) -> Result<ReducerHash<EntitiesState>, CoreError> {
    Ok(ReducerHash::new("entities", EntitiesState::default())
        .on(types.tag("GET_ENTITIES_FULFILLED")?, entities_loaded)
        .on(types.tag("ADD_HOST_TO_GROUP_FULFILLED")?, host_added_to_group)
        .on(
            types.tag("REMOVE_HOST_FROM_GROUP_FULFILLED")?,
            host_removed_from_group,
        ))
}

/// The fetched page with display names dropped; the table renders its own.
fn listed_entities(action: &Action) -> Result<Vec<Entity>, CoreError> {
    action
        .payload_array()?
        .iter()
        .map(|value| {
            let mut entity = value.as_object().cloned().ok_or(CoreError::InvalidPayload {
                expected: "an array of objects",
            })?;
            entity.remove(DISPLAY_NAME_FIELD);
            Ok(entity)
        })
        .collect()
}

fn entities_loaded(state: &EntitiesState, action: &Action) -> Result<EntitiesState, CoreError> {
    let fetched = listed_entities(action)?;

    Ok(EntitiesState {
        loaded: state.loaded,
        rows: merge_entities(&[state.rows.as_slice(), fetched.as_slice()])?,
        entities: merge_entities(&[state.entities.as_slice(), fetched.as_slice()])?,
    })
}

fn payload_host_id(action: &Action) -> Result<String, CoreError> {
    id_string(action.payload_field("host_id")?).ok_or(CoreError::InvalidField {
        field: "host_id",
        expected: "a host id",
    })
}

/// Copies `rows`, applying `update` to the row of `host`.
fn update_host(
    rows: &[Entity],
    host: &str,
    update: impl Fn(&mut Entity) -> Result<(), CoreError>,
) -> Result<Vec<Entity>, CoreError> {
    rows.iter()
        .map(|row| {
            let mut row = row.clone();
            if host_id(&row)? == host {
                update(&mut row)?;
            }
            Ok(row)
        })
        .collect()
}

fn host_added_to_group(state: &EntitiesState, action: &Action) -> Result<EntitiesState, CoreError> {
    let host = payload_host_id(action)?;
    let group = action.payload_field("group")?;
    GroupRef::deserialize(group)?;
    let groups = Value::Array(vec![group.clone()]);
    let assign = |row: &mut Entity| -> Result<(), CoreError> {
        row.insert(GROUPS_FIELD.to_string(), groups.clone());
        Ok(())
    };

    Ok(EntitiesState {
        loaded: state.loaded,
        rows: update_host(&state.rows, &host, assign)?,
        entities: update_host(&state.entities, &host, assign)?,
    })
}

fn host_removed_from_group(
    state: &EntitiesState,
    action: &Action,
) -> Result<EntitiesState, CoreError> {
    let host = payload_host_id(action)?;
    let group_id = id_string(action.payload_field("group_id")?).ok_or(CoreError::InvalidField {
        field: "group_id",
        expected: "a group id",
    })?;
    // Groups that stay are carried over untouched, extra fields included.
    let detach = |row: &mut Entity| -> Result<(), CoreError> {
        match row.get_mut(GROUPS_FIELD) {
            None | Some(Value::Null) => {}
            Some(Value::Array(groups)) => groups.retain(|group| {
                group.get("id").and_then(id_string).as_deref() != Some(group_id.as_str())
            }),
            Some(_) => {
                return Err(CoreError::InvalidField {
                    field: GROUPS_FIELD,
                    expected: "an array of groups",
                })
            }
        }
        Ok(())
    };

    Ok(EntitiesState {
        loaded: state.loaded,
        rows: update_host(&state.rows, &host, detach)?,
        entities: update_host(&state.entities, &host, detach)?,
    })
}
