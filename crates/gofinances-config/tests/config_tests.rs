use gofinances_config::{Config, ConfigManager};
use std::fs;
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert_eq!(cfg.locale, "pt-BR");
    assert_eq!(cfg.currency, "BRL");
    assert!(!cfg.active_user.is_empty());
    assert!(cfg.ui_color_enabled);
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("home")).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
    assert_eq!(manager.config_path(), dir.path().join("home").join("config.json"));
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.locale = "en-US".to_string();
    cfg.currency = "USD".to_string();
    cfg.active_user = "jackson".to_string();

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.locale, "en-US");
    assert_eq!(loaded.active_user, "jackson");
    assert_eq!(
        loaded.resolve_data_root(manager.base_dir()),
        dir.path().join("data")
    );
}

#[test]
fn partial_config_files_fill_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"active_user":"maria"}"#).expect("write");

    let loaded = ConfigManager::new(path).load().expect("load");
    assert_eq!(loaded.active_user, "maria");
    assert_eq!(loaded.locale, "pt-BR");
}
