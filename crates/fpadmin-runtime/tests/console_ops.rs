use chrono::NaiveDate;
use fpadmin_engine::SortDirection;
use fpadmin_runtime::{Config, Console, ConsoleOptions, ListRequest, Result, init_config};
use fpadmin_types::*;
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
}

fn open(dir: &TempDir, data_file: Option<&str>) -> Result<Console> {
    Console::open(ConsoleOptions {
        data_dir: dir.path().to_path_buf(),
        data_file: data_file.map(|name| dir.path().join(name)),
        today: Some(today()),
    })
}

#[test]
fn test_open_without_files_uses_seed() -> Result<()> {
    let dir = TempDir::new()?;
    let console = open(&dir, None)?;

    assert_eq!(console.store().records::<User>().len(), 12);
    assert_eq!(console.config(), &Config::default());
    assert!(console.data_file().is_none());
    Ok(())
}

#[test]
fn test_list_searches_and_sorts() -> Result<()> {
    let dir = TempDir::new()?;
    let console = open(&dir, None)?;

    let page = console.list::<User>(&ListRequest::new().search("田"))?.page;
    let ids: Vec<&str> = page.items.iter().map(|u| u.id.as_ref()).collect();
    assert_eq!(ids, vec!["U008", "U006", "U003"]);

    let listing = console.list::<User>(
        &ListRequest::new()
            .search("田")
            .sort("registration_date", Some(SortDirection::Ascending)),
    )?;
    assert_eq!(listing.sort, "registration_date");
    assert_eq!(listing.direction, SortDirection::Ascending);
    let page = listing.page;
    let ids: Vec<&str> = page.items.iter().map(|u| u.id.as_ref()).collect();
    assert_eq!(ids, vec!["U003", "U006", "U008"]);
    Ok(())
}

#[test]
fn test_status_filter_accepts_key() -> Result<()> {
    let dir = TempDir::new()?;
    let console = open(&dir, None)?;

    let page = console.list::<User>(&ListRequest::new().status("unverified"))?.page;
    assert_eq!(page.total_count, 4);
    assert!(
        page.items
            .iter()
            .all(|u| u.verification_status == VerificationStatus::Unverified)
    );
    Ok(())
}

#[test]
fn test_page_past_end_is_empty_state() -> Result<()> {
    let dir = TempDir::new()?;
    let console = open(&dir, None)?;

    let page = console.list::<User>(&ListRequest::new().page(9))?.page;
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 12);
    Ok(())
}

#[test]
fn test_config_file_drives_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        Config::path_in(dir.path()),
        "[list]\npage_size_options = [5, 10]\ndefault_page_size = 5\ndefault_direction = \"asc\"\n",
    )?;
    let console = open(&dir, None)?;

    let page = console.list::<User>(&ListRequest::new())?.page;
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.page_count, 3);
    assert_eq!(page.items[0].id.as_ref(), "U001");
    Ok(())
}

#[test]
fn test_mutations_persist_to_data_file() -> Result<()> {
    let dir = TempDir::new()?;

    let created = {
        let mut console = open(&dir, Some("store.json"))?;
        let created = console.create::<FaqItem>(FaqItemDraft {
            display_order: Some(6),
            category: Some("その他".to_string()),
            question: Some("退会方法を教えてください".to_string()),
            answer: Some("設定画面から手続きできます。".to_string()),
            ..Default::default()
        })?;
        console.delete::<Partner>("P004")?;
        created
    };
    assert!(dir.path().join("store.json").exists());

    let console = open(&dir, Some("store.json"))?;
    assert_eq!(console.get::<FaqItem>(created.id.as_ref())?.record, created);
    assert!(console.get::<Partner>("P004").is_err());
    Ok(())
}

#[test]
fn test_without_data_file_changes_are_dropped() -> Result<()> {
    let dir = TempDir::new()?;
    {
        let mut console = open(&dir, None)?;
        assert!(console.delete::<User>("U001")?.is_some());
    }

    let console = open(&dir, None)?;
    assert!(console.get::<User>("U001").is_ok());
    Ok(())
}

#[test]
fn test_detail_reports_unresolved_reference() -> Result<()> {
    let dir = TempDir::new()?;
    let mut console = open(&dir, None)?;

    console.delete::<Partner>("P001")?;
    let detail = console.get::<User>("U001")?;

    let missing: Vec<_> = detail.unresolved().collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].key.field, "partner_id");
    Ok(())
}

#[test]
fn test_draft_for_prefills_from_record() -> Result<()> {
    let dir = TempDir::new()?;
    let console = open(&dir, None)?;

    let draft = console.draft_for::<User>("U002")?;
    assert_eq!(draft.name.as_deref(), Some("鈴木 一郎"));
    assert_eq!(draft.registration_date.as_deref(), Some("2024-01-18"));
    Ok(())
}

#[test]
fn test_validation_failure_carries_report() -> Result<()> {
    let dir = TempDir::new()?;
    let mut console = open(&dir, None)?;

    let err = console
        .update::<User>(
            "U001",
            UserDraft {
                email: Some("not-an-email".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();

    let report = err.validation_report().expect("validation report");
    assert!(report.has_error("email"));
    Ok(())
}

#[test]
fn test_init_config_does_not_overwrite() -> Result<()> {
    let dir = TempDir::new()?;

    let (_, written) = init_config(dir.path())?;
    assert!(written);

    let (config, written) = init_config(dir.path())?;
    assert!(!written);
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_allocation_search_matches_fp_name() -> Result<()> {
    let dir = TempDir::new()?;
    let console = open(&dir, None)?;

    let page = console
        .list::<MatchingAllocation>(&ListRequest::new().search("山本 恵子"))?
        .page;
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].fp_id.as_ref(), "FP001");
    Ok(())
}

#[test]
fn test_allocation_selects_on_joined_fp_type() -> Result<()> {
    let dir = TempDir::new()?;
    let console = open(&dir, None)?;

    let page = console
        .list::<MatchingAllocation>(&ListRequest::new().select("fp_type", "法人"))?
        .page;
    let fps: Vec<&str> = page.items.iter().map(|a| a.fp_id.as_ref()).collect();
    assert_eq!(page.total_count, 3);
    for id in ["FP002", "FP005", "FP008"] {
        assert!(fps.contains(&id), "{id} missing from {fps:?}");
    }
    Ok(())
}

#[test]
fn test_allocation_date_range_keeps_completed_only() -> Result<()> {
    let dir = TempDir::new()?;
    let console = open(&dir, None)?;

    let completed = console
        .store()
        .records::<MatchingAllocation>()
        .iter()
        .filter(|a| a.status == AllocationStatus::Completed)
        .count();
    let page = console
        .list::<MatchingAllocation>(&ListRequest::new().since("2025-09-01"))?
        .page;

    assert!(completed > 0);
    assert_eq!(page.total_count, completed);
    assert!(page.items.iter().all(|a| a.completion_date.is_some()));
    Ok(())
}

#[test]
fn test_history_search_matches_user_name() -> Result<()> {
    let dir = TempDir::new()?;
    let console = open(&dir, None)?;

    let page = console
        .list::<MatchingHistory>(&ListRequest::new().search("佐藤 花子"))?
        .page;
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].id.as_ref(), "HIST001");
    Ok(())
}

#[test]
fn test_open_user_persists_seen_marker() -> Result<()> {
    let dir = TempDir::new()?;
    {
        let mut console = open(&dir, Some("store.json"))?;
        assert!(!console.open_user("U011")?.record.is_new);
    }

    let console = open(&dir, Some("store.json"))?;
    assert!(!console.get::<User>("U011")?.record.is_new);
    Ok(())
}
