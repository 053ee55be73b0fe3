//! Assertions over the `{ badge, content, suggestions }` JSON the CLI prints.

use anyhow::{Context, Result};
use serde_json::Value;

/// Ids of `content.records`, in output order.
pub fn record_ids(json: &Value) -> Result<Vec<String>> {
    let records = json["content"]["records"]
        .as_array()
        .context("Expected 'content.records' array in JSON")?;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            record["id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Record {} missing id", i))
        })
        .collect()
}

/// Assert the listed ids, in order.
pub fn assert_record_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = record_ids(json)?;
    if ids != expected {
        anyhow::bail!("Expected records {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

pub fn assert_total_count(json: &Value, expected: u64) -> Result<()> {
    let total = json["content"]["total_count"]
        .as_u64()
        .context("Expected 'content.total_count' in JSON")?;
    if total != expected {
        anyhow::bail!("Expected {} matching records, got {}", expected, total);
    }
    Ok(())
}

/// Assert the badge level (`success`, `info`, `warning`, `error`).
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;
    if level != expected {
        anyhow::bail!(
            "Expected badge level {}, got {} ({})",
            expected,
            level,
            json["badge"]["label"]
        );
    }
    Ok(())
}

/// Fields named in a validation failure, in report order.
pub fn error_fields(json: &Value) -> Result<Vec<String>> {
    let errors = json["content"]["errors"]
        .as_array()
        .context("Expected 'content.errors' array in JSON")?;

    Ok(errors
        .iter()
        .filter_map(|e| e["field"].as_str().map(String::from))
        .collect())
}
