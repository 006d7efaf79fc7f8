//! Custom assertions over catalog JSON output.
//!
//! These operate on the serialized catalog the CLI emits with
//! `--format json`, keeping integration tests readable.

use anyhow::{Context, Result};
use serde_json::Value;

fn entries(json: &Value) -> Result<&Vec<Value>> {
    json["entries"]
        .as_array()
        .context("Expected 'entries' array in catalog JSON")
}

fn entry_titled<'a>(json: &'a Value, title: &str) -> Result<&'a Value> {
    entries(json)?
        .iter()
        .find(|entry| entry["title"].as_str() == Some(title))
        .with_context(|| format!("No catalog entry titled '{}'", title))
}

/// Assert the catalog holds exactly `expected` entries, summary included.
pub fn assert_entry_count(json: &Value, expected: usize) -> Result<()> {
    let entries = entries(json)?;
    if entries.len() != expected {
        anyhow::bail!("Expected {} entries, got {}", expected, entries.len());
    }
    Ok(())
}

/// Assert one entry's classification label and color.
pub fn assert_entry_status(json: &Value, title: &str, status: &str, color: &str) -> Result<()> {
    let entry = entry_titled(json, title)?;
    let actual_status = entry["status"].as_str().unwrap_or_default();
    let actual_color = entry["status_color"].as_str().unwrap_or_default();
    if actual_status != status || actual_color != color {
        anyhow::bail!(
            "Entry '{}' classified as ({}, {}), expected ({}, {})",
            title,
            actual_status,
            actual_color,
            status,
            color
        );
    }
    Ok(())
}

/// Assert one entry's resolved item count.
pub fn assert_item_count(json: &Value, title: &str, expected: u64) -> Result<()> {
    let entry = entry_titled(json, title)?;
    let actual = entry["item_count"].as_u64().unwrap_or_default();
    if actual != expected {
        anyhow::bail!("Entry '{}' has count {}, expected {}", title, actual, expected);
    }
    Ok(())
}

/// Assert the entry titles, in order.
pub fn assert_titles(json: &Value, expected: &[&str]) -> Result<()> {
    let actual: Vec<&str> = entries(json)?
        .iter()
        .filter_map(|entry| entry["title"].as_str())
        .collect();
    if actual != expected {
        anyhow::bail!("Expected titles {:?}, got {:?}", expected, actual);
    }
    Ok(())
}

/// Assert no personal view leaked into the output.
pub fn assert_no_personal_entries(json: &Value) -> Result<()> {
    for entry in entries(json)? {
        if entry["is_personal"].as_bool() == Some(true) {
            anyhow::bail!(
                "Personal view '{}' leaked into the catalog",
                entry["title"].as_str().unwrap_or("?")
            );
        }
    }
    Ok(())
}
