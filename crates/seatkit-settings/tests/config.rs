use seatkit_settings::{ConfigError, LayoutConfig, SettingsError, SettingsManager};
use tempfile::tempdir;

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let mut config = LayoutConfig::default();
    config.venue.width = 2000.0;
    config.arrangement.row_tolerance = 15.0;
    config.save_to_file(&path).unwrap();

    let loaded = LayoutConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.toml");

    let mut config = LayoutConfig::default();
    config.paste.max_attempts = 4;
    config.paste.default_cursor = (40.0, 60.0);
    config.save_to_file(&path).unwrap();

    let loaded = LayoutConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_unknown_extension_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.yaml");

    let err = LayoutConfig::default().save_to_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_invalid_file_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.toml");
    std::fs::write(&path, "[seat]\nwidth = -5.0\n").unwrap();

    let err = LayoutConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(_)));
}

#[test]
fn test_manager_defaults_when_missing_then_saves() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("layout.toml");

    let mut manager = SettingsManager::load_or_default(&path).unwrap();
    assert_eq!(manager.config(), &LayoutConfig::default());

    manager.config_mut().history.depth = 12;
    manager.save().unwrap();
    assert!(path.exists());

    let reloaded = SettingsManager::load_or_default(&path).unwrap();
    assert_eq!(reloaded.config().history.depth, 12);
    assert_eq!(reloaded.path(), path.as_path());
}
