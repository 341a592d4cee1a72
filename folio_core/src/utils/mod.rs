//! Utility modules for Folio
//!
//! Configuration, error types, logging setup and time formatting.

pub mod config;
pub mod error;
pub mod logging;
pub mod time;

// Available exports via submodules:
// error::{FolioError, FolioResult, RelayError, StoreError, ValidationError, ResultExt}
// logging::{init_logging, is_debug_enabled}
