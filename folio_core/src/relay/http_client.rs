//! Shared HTTP client for the relay and geolocation services
//!
//! - Lazily built on first use with `OnceLock`, then reused
//! - Bounded request and connect timeouts
//! - Fixed `folio/<version>` user agent

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

static CLIENT: OnceLock<Client> = OnceLock::new();

/// Timeouts applied to every outbound request
#[derive(Debug, Clone, Copy)]
pub struct ClientConfig {
    /// Overall request timeout (default: 15 seconds)
    pub timeout: Duration,
    /// Connection timeout (default: 5 seconds)
    pub connect_timeout: Duration,
    /// Pool idle timeout (default: 60 seconds)
    pub pool_idle_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(5),
            pool_idle_timeout: Duration::from_secs(60),
        }
    }
}

pub fn user_agent() -> String {
    format!("folio/{}", env!("CARGO_PKG_VERSION"))
}

/// The process-wide client.
///
/// Falls back to reqwest's default client if the configured build fails.
pub fn shared_client() -> &'static Client {
    CLIENT.get_or_init(|| {
        create_client(ClientConfig::default()).unwrap_or_else(|err| {
            tracing::warn!("falling back to default HTTP client: {err}");
            Client::new()
        })
    })
}

pub fn create_client(config: ClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .pool_idle_timeout(config.pool_idle_timeout)
        .user_agent(user_agent())
        .build()
}
