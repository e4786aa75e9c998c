use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use inventory_core::{Action, CoreError};
use tracing::{debug, trace};

use crate::error::ReduceError;

/// A pure state transition. Plain function pointers cannot capture anything,
/// so a transition only ever sees the state and the action it is given.
pub type Transition<S> = fn(&S, &Action) -> Result<S, CoreError>;

/// Dispatch table for one state slice: tag -> transition.
///
/// Built once, then reused for every dispatch on the slice. Tags without a
/// transition hand back the very same `Arc`, so callers can detect
/// "unchanged" with `Arc::ptr_eq`.
pub struct ReducerHash<S> {
    name: &'static str,
    initial: Arc<S>,
    transitions: BTreeMap<String, Transition<S>>,
}

impl<S> ReducerHash<S> {
    pub fn new(name: &'static str, initial: S) -> Self {
        Self {
            name,
            initial: Arc::new(initial),
            transitions: BTreeMap::new(),
        }
    }

    /// Registers `transition` for `tag`, replacing any earlier registration.
    pub fn on(mut self, tag: &str, transition: Transition<S>) -> Self {
        debug!(slice = self.name, tag, "registering transition");
        self.transitions.insert(tag.to_string(), transition);
        self
    }

    /// Registers the same transition for every tag in `tags`.
    pub fn on_each<'a>(
        self,
        tags: impl IntoIterator<Item = &'a str>,
        transition: Transition<S>,
    ) -> Self {
        tags.into_iter()
            .fold(self, |hash, tag| hash.on(tag, transition))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn initial_state(&self) -> Arc<S> {
        Arc::clone(&self.initial)
    }

    pub fn handles(&self, tag: &str) -> bool {
        self.transitions.contains_key(tag)
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }

    pub fn transition(&self, tag: &str) -> Option<Transition<S>> {
        self.transitions.get(tag).copied()
    }

    pub fn reduce(&self, state: &Arc<S>, action: &Action) -> Result<Arc<S>, ReduceError> {
        let Some(transition) = self.transitions.get(&action.tag) else {
            trace!(slice = self.name, tag = %action.tag, "no transition, state unchanged");
            return Ok(Arc::clone(state));
        };

        trace!(slice = self.name, tag = %action.tag, "applying transition");
        transition(state, action)
            .map(Arc::new)
            .map_err(|source| ReduceError {
                tag: action.tag.clone(),
                source,
            })
    }
}

impl<S> fmt::Debug for ReducerHash<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReducerHash")
            .field("name", &self.name)
            .field("tags", &self.transitions.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bump(state: &u32, _action: &Action) -> Result<u32, CoreError> {
        Ok(state + 1)
    }

    fn fail(_state: &u32, _action: &Action) -> Result<u32, CoreError> {
        Err(CoreError::InvalidPayload {
            expected: "anything else",
        })
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let hash = ReducerHash::new("counter", 0u32).on("X", fail).on("X", bump);
        let next = hash.reduce(&hash.initial_state(), &Action::bare("X")).unwrap();
        assert_eq!(*next, 1);
    }

    #[test]
    fn on_each_registers_every_tag() {
        let hash = ReducerHash::new("counter", 0u32).on_each(["B", "A", "C"], bump);
        assert_eq!(hash.tags().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn failed_transition_names_the_tag() {
        let hash = ReducerHash::new("counter", 0u32).on("BROKEN", fail);
        let err = hash
            .reduce(&hash.initial_state(), &Action::new("BROKEN", json!(null)))
            .unwrap_err();
        assert_eq!(err.tag, "BROKEN");
        assert!(err.to_string().contains("BROKEN"));
    }

    #[test]
    fn debug_lists_registered_tags() {
        let hash = ReducerHash::new("counter", 0u32).on("X", bump);
        let rendered = format!("{hash:?}");
        assert!(rendered.contains("counter"));
        assert!(rendered.contains("\"X\""));
    }
}
