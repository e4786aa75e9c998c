//! Transition sets for each slice of the inventory state.

pub mod alerts;
pub mod entities;
pub mod entity_detail;

pub use alerts::alerts_reducer;
pub use entities::entities_reducer;
pub use entity_detail::entity_detail_reducer;
