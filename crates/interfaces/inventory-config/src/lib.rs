//! Central configuration constants for the inventory state core.

/// Suffix of the tag dispatched when an async action starts.
pub const PENDING_SUFFIX: &str = "_PENDING";

/// Suffix of the tag dispatched when an async action resolves.
pub const FULFILLED_SUFFIX: &str = "_FULFILLED";

/// Suffix of the tag dispatched when an async action fails.
/// Every tag carrying it is turned into a user-visible alert.
pub const REJECTED_SUFFIX: &str = "_REJECTED";

/// Field used to deduplicate entity records.
pub const ENTITY_KEY_FIELD: &str = "id";

/// Human-readable name field stripped from listed entities.
pub const DISPLAY_NAME_FIELD: &str = "display_name";

/// Field holding a host's group memberships.
pub const GROUPS_FIELD: &str = "groups";

/// Alert variant used for rejected async actions.
pub const REJECTION_ALERT_VARIANT: &str = "warning";

/// Base path of the inventory REST API.
pub const INVENTORY_API_BASE: &str = "/api/inventory/v1";

/// Returns true when `tag` is the failure tag of an async action.
pub fn is_rejected_tag(tag: &str) -> bool {
    tag.ends_with(REJECTED_SUFFIX)
}
