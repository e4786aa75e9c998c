//! Readers for recorded action streams and API fixtures.

use anyhow::{anyhow, Context, Result};
use camino::Utf8Path;
use inventory_core::{Action, Entity};
use serde::Deserialize;

/// Parses either a JSON array of actions or one action per line.
pub fn parse_actions(text: &str) -> Result<Vec<Action>> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).context("Invalid action array");
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ix, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid action on line {}", ix + 1))
        })
        .collect()
}

pub fn load_actions(path: &Utf8Path) -> Result<Vec<Action>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    parse_actions(&text).with_context(|| format!("Failed to parse {}", path))
}

#[derive(Deserialize)]
struct HostsPage {
    results: Vec<serde_json::Value>,
}

/// Reads a `/hosts` response body and returns its host records.
pub fn load_hosts(path: &Utf8Path) -> Result<Vec<Entity>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let page: HostsPage =
        serde_json::from_str(&text).with_context(|| format!("Invalid hosts page in {}", path))?;

    page.results
        .into_iter()
        .enumerate()
        .map(|(ix, host)| match host {
            serde_json::Value::Object(host) => Ok(host),
            _ => Err(anyhow!("Host #{} in {} is not an object", ix, path)),
        })
        .collect()
}
