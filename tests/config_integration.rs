use clinic_ui::config::{AppConfig, LogFormat};
use clinic_ui::ui::bulk_actions::BulkAction;
use serial_test::serial;
use std::env;
use std::fs;

const PROG: &str = "clinic-ui";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("CLINIC_SERVER__PORT");
        env::remove_var("CLINIC_UI__BRAND_NAME");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("LOG_FORMAT");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([PROG]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.ui.brand_name, "MediFlow");
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(
        config.ui.bulk_actions,
        vec![
            BulkAction::Export,
            BulkAction::Email,
            BulkAction::Tag,
            BulkAction::Delete
        ]
    );
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CLINIC_SERVER__PORT", "9090");
        env::set_var("CLINIC_UI__BRAND_NAME", "CarePoint");
    }

    let config = AppConfig::load_from_args([PROG]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.ui.brand_name, "CarePoint");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("CLINIC_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([PROG, "--port", "7171", "--log-format", "json"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 7171);
    assert_eq!(config.logging.format, LogFormat::Json);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join("clinic.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
ui:
  brand_name: "Northside Health"
  bulk_actions: ["export", "delete"]
"#,
    )
    .expect("Failed to write temp config");

    let path = file_path.to_str().expect("utf-8 path");
    let config = AppConfig::load_from_args([PROG, "--config", path])
        .expect("Failed to load config from file");

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.ui.brand_name, "Northside Health");
    assert_eq!(
        config.ui.bulk_actions,
        vec![BulkAction::Export, BulkAction::Delete]
    );
    // Untouched keys keep their defaults.
    assert_eq!(config.server.request_timeout_secs, 30);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.yaml");

    let result = AppConfig::load_from_args([PROG, "--config", missing.to_str().unwrap()]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_unknown_bulk_action_rejected() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join("clinic.yaml");
    fs::write(&file_path, "ui:\n  bulk_actions: [\"archive\"]\n").unwrap();

    let result = AppConfig::load_from_args([PROG, "--config", file_path.to_str().unwrap()]);
    assert!(result.is_err());
}
