//! Persisted preferences and session flags.

mod store;
mod theme;

pub use store::{FileStore, MemoryStore, PreferenceStore, THEME_KEY, VISITOR_ALERT_KEY};
pub use theme::{ThemeMode, ThemePreference};
