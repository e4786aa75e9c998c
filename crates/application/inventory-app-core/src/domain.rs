use inventory_core::Entity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type AlertId = u64;

/// A notification shown above the inventory views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default)]
    pub dismissible: bool,
    /// Anything else the dispatcher put in the payload (description, links).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Alert list plus the id the next alert will receive. Ids are handed out
/// in order and never reused while this state lineage lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsState {
    pub alerts: Vec<Alert>,
    pub next_id: AlertId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntitiesState {
    pub loaded: bool,
    pub rows: Vec<Entity>,
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDetailState {
    pub loaded: bool,
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    pub active_apps: Vec<AppPanel>,
}

/// View rendered inside a detail panel, when the panel ships its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PanelComponent {
    Overview,
    GeneralInformation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppPanel {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<PanelComponent>,
}

impl AppPanel {
    const fn new(name: &'static str, title: &'static str) -> Self {
        Self {
            name,
            title,
            component: None,
        }
    }

    const fn with_component(self, component: PanelComponent) -> Self {
        Self {
            component: Some(component),
            ..self
        }
    }
}

/// Panels enabled once an entity finishes loading, in display order.
pub const ACTIVE_APPS: [AppPanel; 6] = [
    AppPanel::new("overview", "Overview").with_component(PanelComponent::Overview),
    AppPanel::new("vulnerabilities", "Vulnerabilities"),
    AppPanel::new("configuration_assessment", "Configuration Assessment"),
    AppPanel::new("compliance", "Compliance"),
    AppPanel::new("cost_management", "Cost Management"),
    AppPanel::new("general_information", "General Information")
        .with_component(PanelComponent::GeneralInformation),
];
