pub mod app_core;
pub mod domain;
pub mod error;
pub mod slices;

pub use app_core::*;
pub use domain::{
    Alert, AlertId, AlertsState, AppPanel, EntitiesState, EntityDetailState, PanelComponent,
    ACTIVE_APPS,
};
pub use error::ReduceError;
pub use slices::{alerts_reducer, entities_reducer, entity_detail_reducer};
