pub mod reducer;
pub mod root;
pub mod store;

pub use reducer::{ReducerHash, Transition};
pub use root::{InventoryReducers, InventoryState};
pub use store::InventoryStore;
