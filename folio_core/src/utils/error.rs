//! Centralized error handling for Folio
//!
//! - `thiserror` for the typed errors each subsystem reports
//! - `anyhow` for application-level paths that only need context
//!
//! # Usage
//!
//! ```rust,ignore
//! use folio_core::utils::error::{FolioResult, ResultExt};
//!
//! fn load() -> FolioResult<String> {
//!     std::fs::read_to_string("config.yaml").with_config_context("config.yaml")
//! }
//! ```

use thiserror::Error;

/// Errors a contact submission can end in
#[derive(Error, Debug)]
pub enum FolioError {
    /// Email relay or geolocation failures
    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),

    /// Contact form input rejected before any network call
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Failures talking to the email relay or the geolocation service
#[derive(Error, Debug)]
pub enum RelayError {
    /// A required relay setting (service id, public key, ...) is missing
    #[error("Relay not configured: missing {0}")]
    NotConfigured(&'static str),

    /// The remote service answered with a non-success status
    #[error("Relay rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Network/HTTP errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Contact form validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

/// Preference store failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read preferences from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write preferences to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("preferences file {path} is not a JSON object: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("preference store lock poisoned")]
    Poisoned,
}

/// Result type alias for Folio application paths
pub type FolioResult<T> = anyhow::Result<T>;

/// Extension trait for adding Folio-specific context to errors
pub trait ResultExt<T> {
    /// Add configuration context to an error
    fn with_config_context(self, setting: &str) -> FolioResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for Result<T, E> {
    fn with_config_context(self, setting: &str) -> FolioResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Configuration error for: {}", setting))
    }
}
