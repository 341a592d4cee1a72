//! Integration tests for configuration and on-disk preferences

use folio_core::preferences::{FileStore, PreferenceStore, ThemeMode, ThemePreference, THEME_KEY};
use folio_core::utils::config::{Config, RelayConfig, DEFAULT_RELAY_ENDPOINT};
use serial_test::serial;
use std::env;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
#[serial]
fn test_config_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    env::remove_var("FOLIO_RELAY_SERVICE_ID");
    env::remove_var("FOLIO_RELAY_PUBLIC_KEY");

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.yaml");

    let original = Config {
        relay: RelayConfig {
            endpoint: "https://relay.example.com/send".to_string(),
            service_id: "service_test".to_string(),
            contact_template_id: "template_contact".to_string(),
            visitor_template_id: "template_visitor".to_string(),
            public_key: "pk_test".to_string(),
        },
        visitor_alerts: false,
        ..Config::default()
    };

    original.save_to_file(&config_path)?;
    let content = fs::read_to_string(&config_path)?;
    assert!(content.contains("relay.example.com"));
    assert!(content.contains("visitor_alerts: false"));

    let loaded = Config::load_from_file(&config_path)?;
    assert_eq!(loaded, original);
    assert!(loaded.relay.is_configured());

    Ok(())
}

#[test]
#[serial]
fn test_environment_overrides_file_values() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(
        &config_path,
        "relay:\n  endpoint: https://relay.example.com/send\n  service_id: from_file\n  \
         contact_template_id: c\n  visitor_template_id: v\n  public_key: file_key\n",
    )?;

    env::set_var("FOLIO_RELAY_SERVICE_ID", "from_env");
    let loaded = Config::load_from_file(&config_path);
    env::remove_var("FOLIO_RELAY_SERVICE_ID");

    let loaded = loaded?;
    assert_eq!(loaded.relay.service_id, "from_env");
    assert_eq!(loaded.relay.public_key, "file_key");

    Ok(())
}

#[test]
#[serial]
fn test_invalid_yaml_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "relay: [unclosed")?;

    let err = Config::load_from_file(&config_path).unwrap_err();
    assert!(format!("{err:#}").contains("config.yaml"));

    Ok(())
}

#[test]
#[serial]
fn test_load_or_default_writes_defaults_under_home() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let previous_home = env::var_os("HOME");
    env::set_var("HOME", temp_dir.path());

    let result = Config::load_or_default();
    let path = Config::get_config_path();

    match previous_home {
        Some(home) => env::set_var("HOME", home),
        None => env::remove_var("HOME"),
    }

    let config = result?;
    assert_eq!(config.relay.endpoint, DEFAULT_RELAY_ENDPOINT);
    assert!(config.visitor_alerts);
    assert!(path.starts_with(temp_dir.path()));
    assert!(path.exists());

    Ok(())
}

#[test]
#[serial]
fn test_first_run_keeps_env_credentials_off_disk() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let previous_home = env::var_os("HOME");
    env::set_var("HOME", temp_dir.path());
    env::set_var("FOLIO_RELAY_SERVICE_ID", "svc_secret");
    env::set_var("FOLIO_RELAY_PUBLIC_KEY", "pk_secret");

    let defaults = Config::default();
    let result = Config::load_or_default();
    let path = Config::get_config_path();

    env::remove_var("FOLIO_RELAY_SERVICE_ID");
    env::remove_var("FOLIO_RELAY_PUBLIC_KEY");
    match previous_home {
        Some(home) => env::set_var("HOME", home),
        None => env::remove_var("HOME"),
    }

    assert!(defaults.relay.service_id.is_empty());
    assert!(defaults.relay.public_key.is_empty());

    let config = result?;
    assert_eq!(config.relay.service_id, "svc_secret");
    assert_eq!(config.relay.public_key, "pk_secret");

    let written = fs::read_to_string(&path)?;
    assert!(!written.contains("svc_secret"));
    assert!(!written.contains("pk_secret"));

    Ok(())
}

#[test]
fn test_theme_survives_restart() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let prefs_path = temp_dir.path().join("preferences.json");

    let store = Arc::new(FileStore::open(&prefs_path)?);
    let mut theme = ThemePreference::load(store);
    assert_eq!(theme.mode(), ThemeMode::Dark);
    theme.set(ThemeMode::Light)?;

    let reopened = Arc::new(FileStore::open(&prefs_path)?);
    assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(ThemePreference::load(reopened).mode(), ThemeMode::Light);

    Ok(())
}
