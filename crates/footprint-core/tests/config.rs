use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use footprint_core::config::{Settings, DEFAULT_ADVICE_URL};
use footprint_core::error::FootprintError;

#[test]
fn settings_default_to_the_local_backend() {
    let settings = Settings::default();

    assert_eq!(settings.advice_url, DEFAULT_ADVICE_URL);
    assert_eq!(settings.history_path, PathBuf::from("footprint_history.json"));
    assert_eq!(settings.advice_timeout().as_secs(), 30);
}

#[test]
fn settings_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("footprint.toml");
    fs::write(
        &path,
        r#"
advice_url = "http://advice.example:9999/advice"
history_path = "/tmp/somewhere/history.json"
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).unwrap();
    assert_eq!(settings.advice_url, "http://advice.example:9999/advice");
    assert_eq!(
        settings.history_path,
        PathBuf::from("/tmp/somewhere/history.json")
    );
    // Unset keys keep their defaults.
    assert_eq!(settings.advice_timeout().as_secs(), 30);
}

#[test]
fn invalid_settings_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("footprint.toml");
    fs::write(&path, "advice_url = [1, 2]").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();
    assert!(matches!(err, FootprintError::Settings(_)));
}

#[test]
fn environment_overrides_apply_last() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("footprint.toml");
    fs::write(&path, r#"advice_url = "http://from-file/advice""#).unwrap();

    std::env::set_var("FOOTPRINT_ADVICE_URL", "http://from-env/advice");
    let settings = Settings::load(Some(&path)).unwrap();
    std::env::remove_var("FOOTPRINT_ADVICE_URL");

    assert_eq!(settings.advice_url, "http://from-env/advice");
}
