use fpadmin_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_config_init_writes_defaults_once() {
    let world = TestWorld::new();
    let path = world.data_dir().join("config.toml");

    let json = world
        .run_json(&["config", "init"])
        .unwrap()
        .json()
        .unwrap();
    assert!(path.exists());
    assert_eq!(json["content"]["config"]["list"]["default_page_size"], 30);
    assertions::assert_badge_level(&json, "success").unwrap();

    // A second init keeps what is there
    std::fs::write(&path, fixtures::SMALL_PAGES).unwrap();
    let json = world
        .run_json(&["config", "init"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["config"]["list"]["default_page_size"], 5);
    assertions::assert_badge_level(&json, "info").unwrap();
}

#[test]
fn test_config_show_prints_toml() {
    let world = TestWorld::new().with_config(fixtures::SMALL_PAGES);

    let result = world.run(&["config", "show"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("default_page_size = 5"));
    assert!(result.stdout().contains("demo_seed = 42"));
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new().with_config("[list]\npage_size_options = []\n");

    let result = world.run(&["user", "list"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("page_size_options must not be empty"));
}

#[test]
fn test_config_show_survives_invalid_config() {
    let broken = "[list]\npage_size_options = []\n";
    let world = TestWorld::new().with_config(broken);

    let result = world.run(&["config", "show"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("page_size_options = []"));
    assert!(result.stdout().contains("page_size_options must not be empty"));

    let json = world
        .run_json(&["config", "show"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_badge_level(&json, "warning").unwrap();
    assert!(json["content"]["config"].is_null());
    assert_eq!(json["content"]["raw"], broken);
}

#[test]
fn test_export_feeds_back_as_data_file() {
    // Given: an edited store
    let world = TestWorld::new().persistent();
    world.run_json(&["fp", "delete", "FP003"]).unwrap();

    // When: exporting it and loading the export in a fresh world
    let result = world.run(&["export"]).unwrap();
    assert!(result.success());
    let exported = world.temp_dir().join("export.json");
    std::fs::write(&exported, result.stdout()).unwrap();

    let other = TestWorld::new();
    let json = other
        .run_json(&[
            "--data-file",
            exported.to_str().unwrap(),
            "fp",
            "list",
        ])
        .unwrap()
        .json()
        .unwrap();

    // Then: the deletion came along
    assertions::assert_total_count(&json, 7).unwrap();
    assert!(!assertions::record_ids(&json).unwrap().contains(&"FP003".to_string()));
}

#[test]
fn test_seeded_snapshot_is_loaded() {
    let world = TestWorld::new().with_seeded_snapshot(7);

    let json = world
        .run_json(&["allocation", "list"])
        .unwrap()
        .json()
        .unwrap();

    assert!(json["content"]["total_count"].as_u64().unwrap() > 0);
    assert!(world.data_file().unwrap().exists());
}

#[test]
fn test_log_level_flag_writes_to_stderr_only() {
    let world = TestWorld::new();

    let result = world
        .run_json(&["--log-level", "debug", "user", "list", "--page-size", "50"])
        .unwrap();

    assert!(result.success());
    assert!(result.json().is_ok());
    assert!(result.stderr().contains("listed records"));
}
