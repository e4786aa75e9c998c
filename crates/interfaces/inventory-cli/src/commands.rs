use crate::fixtures::{load_actions, load_hosts};
use crate::CliTable;
use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use inventory_app_core::{InventoryReducers, InventoryState, InventoryStore};
use inventory_core::host::{host_groups, host_id};
use inventory_core::{ActionTypes, GroupAction};
use tracing::{debug, info};

pub fn default_store() -> Result<InventoryStore> {
    let reducers =
        InventoryReducers::new(&ActionTypes::inventory(), &ActionTypes::inventory_namespace())
            .context("Failed to build inventory reducers")?;
    Ok(InventoryStore::new(reducers))
}

pub fn cmd_replay(input: Utf8PathBuf, output: Option<Utf8PathBuf>) -> Result<InventoryState> {
    let actions = load_actions(&input)?;
    info!("Replaying {} actions from {}", actions.len(), input);

    let store = default_store()?;
    for (ix, action) in actions.iter().enumerate() {
        if !store.reducers().handles(&action.tag) {
            debug!("Action #{} ({}) has no transition", ix, action.tag);
        }
        store
            .dispatch(action)
            .with_context(|| format!("Action #{} ({}) failed", ix, action.tag))?;
    }

    let state = store.state();
    let json = serde_json::to_string_pretty(&state)?;
    if let Some(out) = output {
        std::fs::write(&out, json).with_context(|| format!("Failed to write {}", out))?;
        println!(":: Saved state to {}", out);
    } else {
        println!("{}", json);
    }

    Ok(state)
}

/// Prints the action-type tables and returns the tags shown. Whether a tag
/// raises an alert is read from the built alerts reducer, so tags from a
/// table it was not built over are never marked.
pub fn cmd_tags(table: CliTable, rejected_only: bool) -> Result<Vec<String>> {
    let store = default_store()?;
    let alerts = store.reducers().alerts();

    let mut shown = Vec::new();
    for (label, types) in table.tables() {
        println!(":: {} ({} actions)", label, types.len());
        for (_, tag) in types.iter() {
            let raises_alert = alerts.handles(tag);
            if rejected_only && !raises_alert {
                continue;
            }
            if raises_alert {
                println!("   {}  -> alert", tag);
            } else {
                println!("   {}", tag);
            }
            shown.push(tag.to_string());
        }
    }
    Ok(shown)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostActionsReport {
    pub host_id: String,
    pub display_name: Option<String>,
    pub can_add: bool,
    pub can_remove: bool,
    pub remove_request: Option<String>,
    pub groups: Vec<String>,
}

pub fn cmd_host_actions(fixture: Utf8PathBuf) -> Result<Vec<HostActionsReport>> {
    let hosts = load_hosts(&fixture)?;
    println!(":: {} hosts in {}", hosts.len(), fixture);

    let mut reports = Vec::with_capacity(hosts.len());
    for host in &hosts {
        let id = host_id(host)?;
        let can_add = GroupAction::AddToGroup.is_enabled(host)?;
        let can_remove = GroupAction::RemoveFromGroup.is_enabled(host)?;
        let remove_request = if can_remove {
            Some(GroupAction::RemoveFromGroup.request(host, None)?.to_string())
        } else {
            None
        };
        let report = HostActionsReport {
            display_name: host
                .get("display_name")
                .and_then(|name| name.as_str())
                .map(str::to_string),
            groups: host_groups(host)?.into_iter().map(|g| g.name).collect(),
            host_id: id,
            can_add,
            can_remove,
            remove_request,
        };

        println!(
            "   {} ({})",
            report.display_name.as_deref().unwrap_or("-"),
            report.host_id
        );
        println!(
            "      {}: {}",
            GroupAction::AddToGroup.label(),
            enabled(report.can_add)
        );
        println!(
            "      {}: {}",
            GroupAction::RemoveFromGroup.label(),
            enabled(report.can_remove)
        );
        if let Some(req) = &report.remove_request {
            println!("      -> {}", req);
        }
        reports.push(report);
    }

    Ok(reports)
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}
