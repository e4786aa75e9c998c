use std::sync::Arc;

use inventory_core::{Action, ActionTypes, CoreError};
use serde::Serialize;

use crate::domain::{AlertsState, EntitiesState, EntityDetailState};
use crate::error::ReduceError;
use crate::slices::{alerts_reducer, entities_reducer, entity_detail_reducer};

use super::reducer::ReducerHash;

/// Root state. Slices are shared until a transition replaces them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryState {
    pub alerts: Arc<AlertsState>,
    pub entities: Arc<EntitiesState>,
    pub entity_detail: Arc<EntityDetailState>,
}

impl InventoryState {
    /// True when both states hold the very same slices.
    pub fn is_same(&self, other: &InventoryState) -> bool {
        Arc::ptr_eq(&self.alerts, &other.alerts)
            && Arc::ptr_eq(&self.entities, &other.entities)
            && Arc::ptr_eq(&self.entity_detail, &other.entity_detail)
    }
}

/// Every slice reducer, built once from the action-type tables.
#[derive(Debug)]
pub struct InventoryReducers {
    alerts: ReducerHash<AlertsState>,
    entities: ReducerHash<EntitiesState>,
    entity_detail: ReducerHash<EntityDetailState>,
}

impl InventoryReducers {
    pub fn new(types: &ActionTypes, namespace: &ActionTypes) -> Result<Self, CoreError> {
        Ok(Self {
            alerts: alerts_reducer(types)?,
            entities: entities_reducer(types)?,
            entity_detail: entity_detail_reducer(namespace, types)?,
        })
    }

    pub fn initial_state(&self) -> InventoryState {
        InventoryState {
            alerts: self.alerts.initial_state(),
            entities: self.entities.initial_state(),
            entity_detail: self.entity_detail.initial_state(),
        }
    }

    /// Feeds `action` to every slice. Nothing is replaced unless all slices
    /// succeed.
    pub fn reduce(
        &self,
        state: &InventoryState,
        action: &Action,
    ) -> Result<InventoryState, ReduceError> {
        Ok(InventoryState {
            alerts: self.alerts.reduce(&state.alerts, action)?,
            entities: self.entities.reduce(&state.entities, action)?,
            entity_detail: self.entity_detail.reduce(&state.entity_detail, action)?,
        })
    }

    /// True when at least one slice has a transition for `tag`.
    pub fn handles(&self, tag: &str) -> bool {
        self.alerts.handles(tag) || self.entities.handles(tag) || self.entity_detail.handles(tag)
    }

    pub fn alerts(&self) -> &ReducerHash<AlertsState> {
        &self.alerts
    }

    pub fn entities(&self) -> &ReducerHash<EntitiesState> {
        &self.entities
    }

    pub fn entity_detail(&self) -> &ReducerHash<EntityDetailState> {
        &self.entity_detail
    }
}
