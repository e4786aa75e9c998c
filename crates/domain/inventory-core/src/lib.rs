use serde_json::{Map, Value};

pub mod action;
pub mod action_types;
pub mod error;
pub mod host;
pub mod merge;

pub use action::Action;
pub use action_types::ActionTypes;
pub use error::CoreError;
pub use host::{GroupAction, GroupRef, GroupRequest, HttpMethod};
pub use merge::{entity_key, merge_by_key, merge_entities, EntityKey};

/// A record fetched from the inventory API. Only the `id` field is
/// interpreted by the core, everything else is carried through untouched.
pub type Entity = Map<String, Value>;
