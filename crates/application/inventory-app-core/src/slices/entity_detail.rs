use inventory_core::{Action, ActionTypes, CoreError};

use crate::app_core::ReducerHash;
use crate::domain::{EntityDetailState, ACTIVE_APPS};

/// Reducer for the single-host detail view.
///
/// `namespace` is the table of the embedded inventory component that
/// dispatches `LOAD_ENTITY_FULFILLED`; `types` is the application's own
/// table. Both are required up front so the returned hash is complete.
pub fn entity_detail_reducer(
    namespace: &ActionTypes,
    types: &ActionTypes,
) -> Result<ReducerHash<EntityDetailState>, CoreError> {
    Ok(
        ReducerHash::new("entity_detail", EntityDetailState::default())
            .on(namespace.tag("LOAD_ENTITY_FULFILLED")?, enable_applications)
            .on(types.tag("GET_ENTITY_FULFILLED")?, entity_loaded),
    )
}

/// `health` and `tags` replace their previous values outright, the rest of
/// the payload is merged over the current entity.
fn entity_loaded(
    state: &EntityDetailState,
    action: &Action,
) -> Result<EntityDetailState, CoreError> {
    let mut rest = action.payload_object()?.clone();
    let health = rest.remove("health");
    let tags = rest.remove("tags");

    let mut entity = state.entity.clone();
    entity.extend(rest);

    Ok(EntityDetailState {
        loaded: state.loaded,
        entity,
        health,
        tags,
        active_apps: state.active_apps.clone(),
    })
}

fn enable_applications(
    state: &EntityDetailState,
    _action: &Action,
) -> Result<EntityDetailState, CoreError> {
    Ok(EntityDetailState {
        loaded: true,
        active_apps: ACTIVE_APPS.to_vec(),
        ..state.clone()
    })
}
