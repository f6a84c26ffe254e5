//! Integration tests for Settings config loading from a local `.meihua.toml`.
//!
//! These tests write only into temp directories. The local file sets every
//! field it asserts on, so a global config on the host does not change the outcome.

use std::fs;

use tempfile::TempDir;

use meihua::application::ApplicationError;
use meihua::config::{local_config_path, ClockSource, OutputFormat, Settings};

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        r#"
clock = "utc"
format = "json"
show_nuclear = false
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.clock, ClockSource::Utc);
    assert_eq!(settings.format, OutputFormat::Json);
    assert!(!settings.show_nuclear);
}

#[test]
fn given_local_config_path_then_hidden_file_in_dir() {
    let dir = TempDir::new().unwrap();
    assert_eq!(local_config_path(dir.path()), dir.path().join(".meihua.toml"));
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "clock = [unterminated").unwrap();

    let err = Settings::load(Some(dir.path())).unwrap_err();

    match err {
        ApplicationError::Config { message } => assert!(message.contains(".meihua.toml")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn given_unknown_clock_value_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), r#"clock = "sundial""#).unwrap();

    let err = Settings::load(Some(dir.path())).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_template_written_as_local_config_when_load_then_loads() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), Settings::template()).unwrap();

    assert!(Settings::load(Some(dir.path())).is_ok());
}
