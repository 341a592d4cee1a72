use super::store::{PreferenceStore, THEME_KEY};
use crate::utils::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Colour scheme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// The active theme, read from the store at startup and written on every change.
pub struct ThemePreference {
    store: Arc<dyn PreferenceStore>,
    mode: ThemeMode,
}

impl ThemePreference {
    /// Reads the stored theme. Missing or unreadable values fall back to dark.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let mode = match store.get(THEME_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!("ignoring stored theme: {err}");
                ThemeMode::default()
            }),
            None => ThemeMode::default(),
        };
        Self { store, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Switches to `mode` and persists it. The in-memory mode changes even if
    /// the write fails.
    pub fn set(&mut self, mode: ThemeMode) -> Result<(), StoreError> {
        self.mode = mode;
        self.store.set(THEME_KEY, mode.as_str())
    }

    pub fn toggle(&mut self) -> Result<ThemeMode, StoreError> {
        let next = self.mode.toggled();
        self.set(next)?;
        Ok(next)
    }
}

impl fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreference")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
