#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("action name `{0}` is not in the action-type table")]
    UnknownActionName(String),
    #[error("payload is missing field `{field}`")]
    MissingField { field: &'static str },
    #[error("payload field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    #[error("payload must be {expected}")]
    InvalidPayload { expected: &'static str },
    #[error("host {host_id} is not eligible for `{action}`")]
    ActionDisabled {
        action: &'static str,
        host_id: String,
    },
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
