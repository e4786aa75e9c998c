//! The enumeration of action names and the tags they dispatch.

use std::collections::BTreeMap;

use inventory_config::{is_rejected_tag, FULFILLED_SUFFIX, PENDING_SUFFIX, REJECTED_SUFFIX};

use crate::CoreError;

/// Maps symbolic action names to tag strings.
///
/// Async actions expand into three entries, one per lifecycle step, so
/// `async_action("GET_ENTITY")` registers `GET_ENTITY_PENDING`,
/// `GET_ENTITY_FULFILLED` and `GET_ENTITY_REJECTED`. Iteration is ordered by
/// name, which keeps every table derived from it deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTypes {
    entries: BTreeMap<String, String>,
}

impl ActionTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain action whose tag equals its name.
    pub fn action(mut self, name: &str) -> Self {
        self.entries.insert(name.to_string(), name.to_string());
        self
    }

    pub fn async_action(mut self, base: &str) -> Self {
        for suffix in [PENDING_SUFFIX, FULFILLED_SUFFIX, REJECTED_SUFFIX] {
            let name = format!("{base}{suffix}");
            self.entries.insert(name.clone(), name);
        }
        self
    }

    /// Table used by the inventory application.
    pub fn inventory() -> Self {
        [
            "GET_ENTITIES",
            "GET_ENTITY",
            "GET_TAGS",
            "GET_GROUPS",
            "ADD_HOST_TO_GROUP",
            "REMOVE_HOST_FROM_GROUP",
        ]
        .into_iter()
        .fold(Self::new(), |types, base| types.async_action(base))
        .action("ALERT_ADD")
        .action("ALERT_DISMISS")
    }

    /// Table supplied by the embedded inventory component. Detail reducers
    /// take it as an argument instead of importing it.
    pub fn inventory_namespace() -> Self {
        Self::new()
            .async_action("LOAD_ENTITIES")
            .async_action("LOAD_ENTITY")
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn tag(&self, name: &str) -> Result<&str, CoreError> {
        self.get(name)
            .ok_or_else(|| CoreError::UnknownActionName(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, tag)| (name.as_str(), tag.as_str()))
    }

    /// Tags whose name marks a failed async action.
    pub fn rejected_tags(&self) -> Vec<&str> {
        self.iter()
            .filter(|(name, _)| is_rejected_tag(name))
            .map(|(_, tag)| tag)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
