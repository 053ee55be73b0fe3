use assert_cmd::cargo::cargo_bin_cmd;
use fpadmin_testing::{TestWorld, assertions, fixtures};
use predicates::prelude::*;

#[test]
fn test_create_assigns_next_id_and_persists() {
    // Given: a world whose changes survive between runs
    let world = TestWorld::new().persistent();
    let draft = fixtures::user_draft("新規 太郎", "shinki.taro@example.jp").to_string();

    // When: creating a user
    let result = world.run_json(&["user", "create", "--data", &draft]).unwrap();

    // Then: the next id is used and the record is listed first
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["action"], "created");
    assert_eq!(json["content"]["id"], "U013");
    assert_eq!(json["content"]["record"]["verification_status"], "未認証");

    let json = world
        .run_json(&["user", "list", "--sort", "id"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_total_count(&json, 13).unwrap();
    assert_eq!(assertions::record_ids(&json).unwrap()[0], "U013");
}

#[test]
fn test_create_reads_draft_from_file() {
    let world = TestWorld::new().persistent();
    let path = world.temp_dir().join("plan.json");
    std::fs::write(&path, fixtures::plan_draft("スタータープラン", 29800).to_string()).unwrap();
    let data = format!("@{}", path.display());

    let result = world.run_json(&["plan", "create", "--data", &data]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["record"]["plan_name"], "スタータープラン");
    assert_eq!(json["content"]["record"]["price"], 29800);
    assert_eq!(json["content"]["record"]["billing_cycle"], "月間請求");
}

#[test]
fn test_review_create_checks_references() {
    let world = TestWorld::new().persistent();

    let ok = fixtures::review_draft("U001", "FP001", 5).to_string();
    let result = world.run_json(&["review", "create", "--data", &ok]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.json().unwrap()["content"]["id"].as_str().unwrap().starts_with('R'));

    let dangling = fixtures::review_draft("U001", "FP404", 5).to_string();
    let result = world
        .run_json(&["review", "create", "--data", &dangling])
        .unwrap();
    assert_eq!(result.code(), Some(1));
    let json = result.json().unwrap();
    assert_eq!(assertions::error_fields(&json).unwrap(), vec!["fp_id"]);
    assert_eq!(json["content"]["errors"][0]["kind"], "unknown_reference");
}

#[test]
fn test_validation_failure_leaves_store_unchanged() {
    // Given: a persistent world
    let world = TestWorld::new().persistent();
    let draft = fixtures::user_draft("", "not-an-email").to_string();

    // When: submitting an invalid user
    let result = world.run_json(&["user", "create", "--data", &draft]).unwrap();

    // Then: exit 1 with a field-level report
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("create user rejected"));
    let json = result.json().unwrap();
    assertions::assert_badge_level(&json, "error").unwrap();
    let fields = assertions::error_fields(&json).unwrap();
    assert!(fields.contains(&"name".to_string()));
    assert!(fields.contains(&"email".to_string()));

    // And: nothing was added
    let json = world.run_json(&["user", "list"]).unwrap().json().unwrap();
    assertions::assert_total_count(&json, 12).unwrap();
}

#[test]
fn test_out_of_range_rating_is_rejected() {
    let world = TestWorld::new();
    let draft = fixtures::review_draft("U001", "FP001", 9).to_string();

    let result = world.run_json(&["review", "create", "--data", &draft]).unwrap();

    assert_eq!(result.code(), Some(1));
    let json = result.json().unwrap();
    assert_eq!(assertions::error_fields(&json).unwrap(), vec!["rating"]);
    assert_eq!(json["content"]["errors"][0]["kind"], "out_of_range");
}

#[test]
fn test_unknown_draft_field_is_rejected() {
    let world = TestWorld::new();

    let result = world
        .run(&["faq", "create", "--data", r#"{"title": "x"}"#])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Invalid faq draft"));
}

#[test]
fn test_edit_without_data_prints_current_values() {
    let world = TestWorld::new();

    let json = world
        .run_json(&["user", "edit", "U002"])
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(json["content"]["id"], "U002");
    assert_eq!(json["content"]["draft"]["name"], "鈴木 一郎");
    assert_eq!(json["content"]["draft"]["registration_date"], "2024-01-18");
    assertions::assert_badge_level(&json, "info").unwrap();
}

#[test]
fn test_edit_merges_given_fields() {
    let world = TestWorld::new().persistent();

    let result = world
        .run_json(&[
            "user",
            "edit",
            "U002",
            "--data",
            r#"{"verification_status": "unverified"}"#,
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = world
        .run_json(&["user", "show", "U002"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["record"]["verification_status"], "未認証");
    assert_eq!(json["content"]["record"]["name"], "鈴木 一郎");
}

#[test]
fn test_edit_missing_id_fails() {
    let world = TestWorld::new();

    let result = world
        .run(&["user", "edit", "U999", "--data", r#"{"name": "x"}"#])
        .unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("user not found: U999"));
}

#[test]
fn test_dangling_reference_shows_as_warning() {
    // Given: the partner U001 was referred by is deleted
    let world = TestWorld::new().persistent();
    let result = world.run_json(&["partner", "delete", "P001"]).unwrap();
    assert_eq!(result.json().unwrap()["content"]["action"], "deleted");

    // When: opening U001
    let result = world.run_json(&["user", "show", "U001"]).unwrap();

    // Then: the record still opens; the reference has no name
    assert!(result.success());
    let json = result.json().unwrap();
    assertions::assert_badge_level(&json, "warning").unwrap();
    let reference = &json["content"]["references"][0];
    assert_eq!(reference["field"], "partner_id");
    assert!(reference["name"].is_null());
    assert_eq!(reference["error"], "partner not found: P001");

    let mut cmd = cargo_bin_cmd!("fpadmin");
    world
        .configure_command(&mut cmd, "plain")
        .args(["user", "show", "U001"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("warning: partner_id"));
}

#[test]
fn test_delete_missing_id_is_a_no_op() {
    let world = TestWorld::new().persistent();

    let result = world.run_json(&["banner", "delete", "BANNER999"]).unwrap();

    assert!(result.success());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["action"], "unchanged");
    assertions::assert_badge_level(&json, "info").unwrap();
}

#[test]
fn test_without_data_file_changes_do_not_survive() {
    let world = TestWorld::new();

    let result = world.run_json(&["user", "delete", "U001"]).unwrap();
    assert!(result.success());

    let result = world.run_json(&["user", "show", "U001"]).unwrap();
    assert!(result.success());
}

#[test]
fn test_show_missing_id_fails() {
    let world = TestWorld::new();

    let result = world.run(&["legal", "show", "LD999"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().starts_with("Error:"));
}

#[test]
fn test_history_status_change_is_logged() {
    // Given: a new lead handed to FP001
    let world = TestWorld::new().persistent();
    let draft = fixtures::history_draft("FP001", "U011").to_string();
    let result = world.run_json(&["history", "create", "--data", &draft]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["id"], "HIST011");
    assert_eq!(json["content"]["record"]["status_history"][0]["status"], "新規");

    // When: the consultation moves on
    let result = world
        .run_json(&[
            "history",
            "edit",
            "HIST011",
            "--data",
            r#"{"current_status": "日程調整", "updated_by": "山本 恵子", "notes": "初回連絡完了"}"#,
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    // Then: the step is appended and the FP name is joined in
    let json = world
        .run_json(&["history", "show", "HIST011"])
        .unwrap()
        .json()
        .unwrap();
    let steps = json["content"]["record"]["status_history"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1]["updated_by"], "山本 恵子");
    let fields = json["content"]["fields"].as_array().unwrap();
    assert!(fields.iter().any(|f| f[0] == "fp_name" && f[1] == "山本 恵子"));
}

#[test]
fn test_showing_new_user_clears_marker() {
    let world = TestWorld::new().persistent();

    let json = world
        .run_json(&["user", "list", "--only", "new"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_total_count(&json, 3).unwrap();

    world.run_json(&["user", "show", "U010"]).unwrap();

    let json = world
        .run_json(&["user", "list", "--only", "new"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_total_count(&json, 2).unwrap();
}
