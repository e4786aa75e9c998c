use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::CoreError;

/// A tagged action as dispatched by the UI or a resolved network request.
///
/// On the wire the tag is spelled `type`, matching what action creators
/// emit; `tag` is accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type", alias = "tag")]
    pub tag: String,
    #[serde(default)]
    pub payload: Value,
}

impl Action {
    pub fn new(tag: impl Into<String>, payload: Value) -> Self {
        Self {
            tag: tag.into(),
            payload,
        }
    }

    /// An action that carries no payload.
    pub fn bare(tag: impl Into<String>) -> Self {
        Self::new(tag, Value::Null)
    }

    pub fn payload_object(&self) -> Result<&Map<String, Value>, CoreError> {
        self.payload.as_object().ok_or(CoreError::InvalidPayload {
            expected: "an object",
        })
    }

    pub fn payload_array(&self) -> Result<&Vec<Value>, CoreError> {
        self.payload.as_array().ok_or(CoreError::InvalidPayload {
            expected: "an array",
        })
    }

    pub fn payload_field(&self, field: &'static str) -> Result<&Value, CoreError> {
        self.payload_object()?
            .get(field)
            .ok_or(CoreError::MissingField { field })
    }

    pub fn payload_str(&self, field: &'static str) -> Result<&str, CoreError> {
        self.payload_field(field)?
            .as_str()
            .ok_or(CoreError::InvalidField {
                field,
                expected: "a string",
            })
    }
}
