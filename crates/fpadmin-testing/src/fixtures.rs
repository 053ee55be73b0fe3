//! Config files, snapshots and draft payloads for CLI tests.

use anyhow::Result;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

use fpadmin_store::Store;

pub fn write_config(data_dir: &Path, toml: &str) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    fs::write(data_dir.join("config.toml"), toml)?;
    Ok(())
}

/// Write the demo store built from `demo_seed` as a snapshot file.
pub fn write_seeded_snapshot(path: &Path, demo_seed: u64) -> Result<()> {
    let store = Store::seeded(demo_seed)?;
    store.save_snapshot(path)?;
    Ok(())
}

/// Config with small pages, so pagination shows up on the demo data
pub const SMALL_PAGES: &str = r#"
[list]
page_size_options = [5, 10]
default_page_size = 5
"#;

pub fn user_draft(name: &str, email: &str) -> Value {
    json!({ "name": name, "email": email })
}

/// Review posted by the end user after an interview
pub fn review_draft(user_id: &str, fp_id: &str, rating: u8) -> Value {
    json!({
        "reviewer_type": "エンドユーザー",
        "user_id": user_id,
        "fp_id": fp_id,
        "rating": rating,
        "review_content": "丁寧に説明してもらえました",
        "status_at_review": "面談実施"
    })
}

pub fn plan_draft(plan_name: &str, price: u32) -> Value {
    json!({ "plan_name": plan_name, "price": price })
}

pub fn history_draft(fp_id: &str, user_id: &str) -> Value {
    json!({
        "allocated_at": "2024/09/20 10:00",
        "fp_id": fp_id,
        "user_id": user_id,
        "delivery_type": "基本配信",
        "allocation_method": "手動割当"
    })
}
