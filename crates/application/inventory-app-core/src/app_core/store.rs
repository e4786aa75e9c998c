use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use inventory_core::Action;
use tracing::{debug, warn};

use crate::error::ReduceError;

use super::root::{InventoryReducers, InventoryState};

#[derive(Clone)]
pub struct InventoryStore {
    reducers: Arc<InventoryReducers>,
    inner: Arc<Mutex<InventoryState>>,
}

impl InventoryStore {
    pub fn new(reducers: InventoryReducers) -> Self {
        let state = reducers.initial_state();
        Self {
            reducers: Arc::new(reducers),
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> InventoryState {
        self.lock().clone()
    }

    pub fn reducers(&self) -> &InventoryReducers {
        &self.reducers
    }

    /// Replaces the state with the result of `action`. A failing transition
    /// leaves the current state in place.
    pub fn dispatch(&self, action: &Action) -> Result<(), ReduceError> {
        let mut guard = self.lock();
        match self.reducers.reduce(&guard, action) {
            Ok(next) => {
                if !next.is_same(&guard) {
                    debug!(tag = %action.tag, "state replaced");
                }
                *guard = next;
                Ok(())
            }
            Err(err) => {
                warn!(tag = %action.tag, error = %err, "dispatch failed, state kept");
                Err(err)
            }
        }
    }

    /// Dispatches in order, stopping at the first failure. Returns how many
    /// actions were applied.
    pub fn dispatch_all<'a>(
        &self,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> Result<usize, ReduceError> {
        let mut applied = 0;
        for action in actions {
            self.dispatch(action)?;
            applied += 1;
        }
        Ok(applied)
    }

    fn lock(&self) -> MutexGuard<'_, InventoryState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
