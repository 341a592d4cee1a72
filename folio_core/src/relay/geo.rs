use super::http_client::shared_client;
use crate::utils::config::GeolocationConfig;
use crate::utils::error::RelayError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Approximate location of the current visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoInfo {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default, rename = "country_name")]
    pub country: String,
    /// Network operator
    #[serde(default)]
    pub org: String,
}

#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self) -> Result<GeoInfo, RelayError>;
}

/// IP geolocation over a JSON lookup endpoint.
#[derive(Debug, Clone)]
pub struct IpApiLocator {
    client: Client,
    url: String,
}

impl IpApiLocator {
    pub fn from_config(config: &GeolocationConfig) -> Self {
        Self {
            client: shared_client().clone(),
            url: config.url.clone(),
        }
    }
}

#[async_trait]
impl GeoLocator for IpApiLocator {
    async fn locate(&self) -> Result<GeoInfo, RelayError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|err| RelayError::InvalidResponse(err.to_string()))
    }
}
