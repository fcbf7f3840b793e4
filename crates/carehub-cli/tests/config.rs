use carehub_cli::config::{CarehubConfig, load_config, migrate, read_config, save_config};
use serde_json::json;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, CarehubConfig::default());
    assert_eq!(config.recorded_by, "Demo User, RN");
    assert_eq!(config.time_zone, "UTC");
}

#[test]
fn v0_config_gains_time_zone_and_log_filter() {
    let migrated = migrate(json!({ "recorded_by": "Sarah Johnson, RN" }), 0).unwrap();
    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["recorded_by"], "Sarah Johnson, RN");
    assert_eq!(migrated["time_zone"], "UTC");
    assert_eq!(migrated["log_filter"], "info");
}

#[test]
fn newer_config_is_rejected() {
    assert!(migrate(json!({ "config_version": 9 }), 9).is_err());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = CarehubConfig {
        config_version: 0,
        recorded_by: "Night RN".to_string(),
        time_zone: "Australia/Sydney".to_string(),
        log_filter: "carehub=debug".to_string(),
    };

    save_config(&path, &config).unwrap();
    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.recorded_by, "Night RN");
    assert_eq!(loaded.time_zone, "Australia/Sydney");
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn pre_versioned_file_on_disk_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "recorded_by": "Day EN" }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.recorded_by, "Day EN");
    assert_eq!(config.log_filter, "info");
}

#[test]
fn migration_is_reported_to_the_caller() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "recorded_by": "Day EN" }"#).unwrap();
    let (_, migrated_from) = read_config(&path).unwrap();
    assert_eq!(migrated_from, Some(0));

    save_config(&path, &CarehubConfig::default()).unwrap();
    let (_, migrated_from) = read_config(&path).unwrap();
    assert_eq!(migrated_from, None);
}

#[test]
fn out_of_range_version_is_rejected_not_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 4294967297, "recorded_by": "Day EN", "time_zone": "UTC", "log_filter": "info" }"#,
    )
    .unwrap();
    assert!(load_config(&path).is_err());

    std::fs::write(&path, r#"{ "config_version": "one", "recorded_by": "Day EN" }"#).unwrap();
    assert!(load_config(&path).is_err());
}
