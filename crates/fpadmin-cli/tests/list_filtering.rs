use assert_cmd::cargo::cargo_bin_cmd;
use fpadmin_testing::{TestWorld, assertions, fixtures};
use predicates::prelude::*;

#[test]
fn test_search_then_sort_then_page() {
    // Given: the demo data (three users with 田 in their name)
    let world = TestWorld::new();

    // When: searching by name with the default sort (registration, newest first)
    let result = world.run_json(&["user", "list", "--search", "田"]).unwrap();

    // Then: all match, newest first
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assertions::assert_record_ids(&json, &["U008", "U006", "U003"]).unwrap();
    assert_eq!(json["content"]["sort"]["key"], "registration_date");
    assert_eq!(json["content"]["sort"]["direction"], "desc");

    // When: the same search, ascending
    let json = world
        .run_json(&["user", "list", "--search", "田", "--asc"])
        .unwrap()
        .json()
        .unwrap();

    // Then: order flips
    assertions::assert_record_ids(&json, &["U003", "U006", "U008"]).unwrap();
}

#[test]
fn test_search_is_case_insensitive_over_email() {
    let world = TestWorld::new();

    let json = world
        .run_json(&["user", "list", "--search", "KO", "--sort", "id", "--asc"])
        .unwrap()
        .json()
        .unwrap();

    assertions::assert_record_ids(&json, &["U001", "U003", "U005"]).unwrap();
}

#[test]
fn test_status_and_selector_filters() {
    let world = TestWorld::new();

    // Status accepts the operator label as well as the key
    let json = world
        .run_json(&["user", "list", "--status", "未認証"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_total_count(&json, 4).unwrap();

    let json = world
        .run_json(&["fp", "list", "--where", "fp_type=法人", "--sort", "id", "--asc"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_record_ids(&json, &["FP002", "FP005", "FP008"]).unwrap();
    assert_eq!(json["content"]["filters"]["where"]["fp_type"], "法人");
}

#[test]
fn test_status_all_is_no_filter() {
    let world = TestWorld::new();

    let json = world
        .run_json(&["user", "list", "--status", "all"])
        .unwrap()
        .json()
        .unwrap();

    assertions::assert_total_count(&json, 12).unwrap();
}

#[test]
fn test_date_range_filters_registration() {
    let world = TestWorld::new();

    let json = world
        .run_json(&[
            "user", "list", "--since", "2024-03-01", "--until", "2024-04-30", "--sort", "id",
            "--asc",
        ])
        .unwrap()
        .json()
        .unwrap();

    assertions::assert_record_ids(&json, &["U005", "U006", "U007", "U008"]).unwrap();
}

#[test]
fn test_pagination_with_configured_sizes() {
    // Given: pages of 5
    let world = TestWorld::new().with_config(fixtures::SMALL_PAGES);

    // When: asking for the last page
    let json = world
        .run_json(&["user", "list", "--page", "3"])
        .unwrap()
        .json()
        .unwrap();

    // Then: the remaining two records, and no further page offered
    assert_eq!(json["content"]["page_count"], 3);
    assert_eq!(json["content"]["records"].as_array().unwrap().len(), 2);
    assertions::assert_badge_level(&json, "success").unwrap();
    assert!(json["suggestions"].as_array().unwrap().is_empty());
}

#[test]
fn test_page_past_end_is_a_warning_not_an_error() {
    let world = TestWorld::new().with_config(fixtures::SMALL_PAGES);

    let result = world.run_json(&["user", "list", "--page", "9"]).unwrap();

    assert!(result.success());
    let json = result.json().unwrap();
    assertions::assert_record_ids(&json, &[]).unwrap();
    assertions::assert_badge_level(&json, "warning").unwrap();
}

#[test]
fn test_page_size_must_be_an_offered_option() {
    let world = TestWorld::new();

    let result = world.run(&["user", "list", "--page-size", "7"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("page size 7 is not one of [30, 50, 100]"));
}

#[test]
fn test_no_match_is_empty_state() {
    let world = TestWorld::new();

    let json = world
        .run_json(&["partner", "list", "--search", "存在しない会社"])
        .unwrap()
        .json()
        .unwrap();

    assertions::assert_total_count(&json, 0).unwrap();
    assertions::assert_badge_level(&json, "info").unwrap();
}

#[test]
fn test_unknown_flag_names_the_alternatives() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("fpadmin");
    world
        .configure_command(&mut cmd, "plain")
        .args(["allocation", "list", "--only", "overdue"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("available: in_progress"));
}

#[test]
fn test_allocation_in_progress_flag() {
    let world = TestWorld::new();

    let json = world
        .run_json(&["allocation", "list", "--only", "in-progress"])
        .unwrap()
        .json()
        .unwrap();

    let records = json["content"]["records"].as_array().unwrap();
    assert!(!records.is_empty());
    for record in records {
        assert!(record["completed_allocations"].as_u64() < record["total_allocations"].as_u64());
        assert_eq!(record["status"], "未完了");
        assert!(record["completion_date"].is_null());
    }
}

#[test]
fn test_allocation_filters_on_fp_columns() {
    let world = TestWorld::new();

    // Search reaches the FP's name
    let json = world
        .run_json(&["allocation", "list", "--search", "山本 恵子"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_total_count(&json, 1).unwrap();
    assert_eq!(json["content"]["records"][0]["fp_id"], "FP001");

    // --where reaches the FP's type
    let json = world
        .run_json(&["allocation", "list", "--where", "fp_type=法人"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_total_count(&json, 3).unwrap();
    for record in json["content"]["records"].as_array().unwrap() {
        let fp = record["fp_id"].as_str().unwrap();
        assert!(["FP002", "FP005", "FP008"].contains(&fp), "unexpected {fp}");
    }
}

#[test]
fn test_fp_incomplete_flag() {
    let world = TestWorld::new();

    let json = world
        .run_json(&["fp", "list", "--only", "incomplete", "--sort", "id", "--asc"])
        .unwrap()
        .json()
        .unwrap();

    assertions::assert_record_ids(&json, &["FP001", "FP002", "FP003", "FP005", "FP006", "FP007"])
        .unwrap();
}

#[test]
fn test_review_search_reaches_reviewer_name() {
    let world = TestWorld::new();

    let json = world
        .run_json(&["review", "list", "--search", "佐藤 花子"])
        .unwrap()
        .json()
        .unwrap();

    assertions::assert_record_ids(&json, &["R001"]).unwrap();
}

#[test]
fn test_quiet_mode_prints_ids_only() {
    let world = TestWorld::new();

    let result = world
        .run(&["fp", "list", "--where", "fp_type=corporate", "--sort", "id", "--asc", "--quiet"])
        .unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), "FP002\nFP005\nFP008\n");
}

#[test]
fn test_plain_table_has_summary_columns() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("fpadmin");
    world
        .configure_command(&mut cmd, "plain")
        .args(["user", "list", "--search", "田"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ID"))
        .stdout(predicate::str::contains("REGISTRATION_DATE"))
        .stdout(predicate::str::contains("森田 拓海"))
        .stdout(predicate::str::contains("sorted by registration_date desc"));
}
