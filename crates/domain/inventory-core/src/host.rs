//! Group actions offered on a host row of the inventory table.

use std::fmt;

use inventory_config::{ENTITY_KEY_FIELD, GROUPS_FIELD, INVENTORY_API_BASE};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{CoreError, Entity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRef {
    /// Numeric ids are kept in their path form, as host ids are.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Value::deserialize(deserializer)?;
    match id {
        Value::String(_) | Value::Number(_) => id_string(&id)
            .ok_or_else(|| serde::de::Error::custom("group id is null")),
        other => Err(serde::de::Error::custom(format!(
            "group id must be a string or number, got {other}"
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Post => f.write_str("POST"),
            HttpMethod::Delete => f.write_str("DELETE"),
        }
    }
}

/// A membership change the UI would send to the inventory API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRequest {
    pub method: HttpMethod,
    pub path: String,
}

impl fmt::Display for GroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAction {
    AddToGroup,
    RemoveFromGroup,
}

impl GroupAction {
    pub fn label(self) -> &'static str {
        match self {
            GroupAction::AddToGroup => "Add to group",
            GroupAction::RemoveFromGroup => "Remove from group",
        }
    }

    /// A host belongs to at most one group: it can only be added when it has
    /// none, and only removed when it has one.
    pub fn is_enabled(self, host: &Entity) -> Result<bool, CoreError> {
        let in_group = !host_groups(host)?.is_empty();
        Ok(match self {
            GroupAction::AddToGroup => !in_group,
            GroupAction::RemoveFromGroup => in_group,
        })
    }

    /// Builds the request for this action. Adding needs the `target` group;
    /// removing always targets the host's current group.
    pub fn request(
        self,
        host: &Entity,
        target: Option<&GroupRef>,
    ) -> Result<GroupRequest, CoreError> {
        let host_id = host_id(host)?;
        if !self.is_enabled(host)? {
            return Err(CoreError::ActionDisabled {
                action: self.label(),
                host_id,
            });
        }

        let (method, group_id) = match self {
            GroupAction::AddToGroup => {
                let group = target.ok_or(CoreError::MissingField { field: "group" })?;
                (HttpMethod::Post, group.id.clone())
            }
            GroupAction::RemoveFromGroup => {
                let groups = host_groups(host)?;
                let group = groups
                    .into_iter()
                    .next()
                    .ok_or(CoreError::MissingField { field: GROUPS_FIELD })?;
                (HttpMethod::Delete, group.id)
            }
        };

        Ok(GroupRequest {
            method,
            path: format!("{INVENTORY_API_BASE}/groups/{group_id}/hosts/{host_id}"),
        })
    }
}

/// The host id as it appears in API paths.
pub fn host_id(host: &Entity) -> Result<String, CoreError> {
    host.get(ENTITY_KEY_FIELD)
        .and_then(id_string)
        .ok_or(CoreError::MissingField {
            field: ENTITY_KEY_FIELD,
        })
}

/// Renders an id value for use in a path. Strings are taken verbatim.
pub fn id_string(id: &Value) -> Option<String> {
    match id {
        Value::Null => None,
        Value::String(id) => Some(id.clone()),
        other => Some(other.to_string()),
    }
}

/// Groups listed on a host. A missing or null `groups` field means none.
pub fn host_groups(host: &Entity) -> Result<Vec<GroupRef>, CoreError> {
    match host.get(GROUPS_FIELD) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(groups) => Ok(Vec::<GroupRef>::deserialize(groups)?),
    }
}
