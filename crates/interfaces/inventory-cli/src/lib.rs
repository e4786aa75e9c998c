pub mod commands;
pub mod fixtures;

use clap::ValueEnum;
use inventory_core::ActionTypes;

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum CliTable {
    /// The application's own actions.
    Inventory,
    /// Actions supplied by the embedded inventory component.
    Namespace,
    All,
}

impl CliTable {
    pub fn tables(self) -> Vec<(&'static str, ActionTypes)> {
        match self {
            CliTable::Inventory => vec![("inventory", ActionTypes::inventory())],
            CliTable::Namespace => vec![("namespace", ActionTypes::inventory_namespace())],
            CliTable::All => vec![
                ("inventory", ActionTypes::inventory()),
                ("namespace", ActionTypes::inventory_namespace()),
            ],
        }
    }
}
