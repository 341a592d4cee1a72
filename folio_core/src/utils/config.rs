use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::error::ResultExt;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co/json/";
pub const DEFAULT_CONTACT_TEMPLATE: &str = "template_contact";
pub const DEFAULT_VISITOR_TEMPLATE: &str = "template_visitor_alert";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub geolocation: GeolocationConfig,

    /// Whether the background visitor notification runs at all
    #[serde(default = "default_true")]
    pub visitor_alerts: bool,

    /// Where the theme preference is persisted; defaults next to the config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences_path: Option<PathBuf>,
}

/// Third-party email relay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    pub contact_template_id: String,
    pub visitor_template_id: String,
    #[serde(default)]
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeolocationConfig {
    pub url: String,
}

fn default_true() -> bool {
    true
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            service_id: String::new(),
            contact_template_id: DEFAULT_CONTACT_TEMPLATE.to_string(),
            visitor_template_id: DEFAULT_VISITOR_TEMPLATE.to_string(),
            public_key: String::new(),
        }
    }
}

impl RelayConfig {
    /// True when both identifiers needed to talk to the relay are present.
    pub fn is_configured(&self) -> bool {
        !self.service_id.trim().is_empty() && !self.public_key.trim().is_empty()
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GEOLOCATION_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relay: RelayConfig::default(),
            geolocation: GeolocationConfig::default(),
            visitor_alerts: true,
            preferences_path: None,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).with_config_context(&path.display().to_string())?;
        let mut config: Config =
            serde_yaml::from_str(&content).with_config_context(&path.display().to_string())?;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Root directory for Folio's files (`~/.folio`).
    pub fn get_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.yaml")
    }

    /// Loads the config file if present, otherwise writes and returns defaults.
    ///
    /// Environment overrides apply to the returned value only; they are never
    /// written to disk.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::get_config_path();

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            let mut config = Self::default();
            if let Err(err) = config.save_to_file(&config_path) {
                tracing::warn!("could not write default config to {}: {err}", config_path.display());
            }
            config.apply_env_overrides();
            Ok(config)
        }
    }

    /// Location of the JSON preference file.
    pub fn preferences_file(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .unwrap_or_else(|| Self::get_config_dir().join("preferences.json"))
    }

    /// Environment variables win over values read from disk.
    fn apply_env_overrides(&mut self) {
        if let Ok(service_id) = std::env::var("FOLIO_RELAY_SERVICE_ID") {
            if !service_id.is_empty() {
                self.relay.service_id = service_id;
            }
        }
        if let Ok(public_key) = std::env::var("FOLIO_RELAY_PUBLIC_KEY") {
            if !public_key.is_empty() {
                self.relay.public_key = public_key;
            }
        }
    }
}
