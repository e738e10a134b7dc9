use undoredo_config::{AppConfig, Comparison, FloorMode, FloorValue};

#[test]
fn test_load_creates_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("undoredo.json");
    assert!(!path.exists());

    let config = AppConfig::load_or_create(&path);
    assert!(path.exists());
    assert_eq!(config.log_filter, "info");

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(parsed.is_object());
    assert!(parsed["history"].is_object());
}

#[test]
fn test_save_creates_missing_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("undoredo.json");

    AppConfig::default().save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("undoredo.json");
    let json = r#"{
        "log_filter": "debug",
        "history": {
            "filter_actions": ["SELECT-NODE"],
            "floor_mode": "seeded",
            "floor_value": "incoming",
            "comparison": "pivot_slot"
        }
    }"#;
    std::fs::write(&path, json).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.log_filter, "debug");
    assert!(config.history.is_filtered("SELECT-NODE"));
    assert_eq!(config.history.floor_mode, FloorMode::Seeded);
    assert_eq!(config.history.floor_value, FloorValue::Incoming);
    assert_eq!(config.history.comparison, Comparison::PivotSlot);
}

#[test]
fn test_broken_json_returns_defaults_and_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("undoredo.json");
    std::fs::write(&path, "{ this is not valid json }}}").unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config, AppConfig::default());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{ this is not valid json }}}");
}

#[test]
fn test_strict_load_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("undoredo.json");
    std::fs::write(&path, r#"{"history": {"floor_mode": "sideways"}}"#).unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config"));
}

#[test]
fn test_strict_load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("undoredo.json");
    std::fs::write(&path, r#"{"history": {"filter_actions": ["HOVER", "UNDO"]}}"#).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.log_filter, "info");
    assert!(config.history.is_filtered("HOVER"));
    assert!(!config.history.is_filtered("UNDO"));
    assert_eq!(config.history.floor_mode, FloorMode::Empty);
}
