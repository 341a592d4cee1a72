use super::http_client::shared_client;
use crate::utils::config::RelayConfig;
use crate::utils::error::RelayError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::collections::BTreeMap;

/// Named values substituted into a relay template.
pub type TemplateParams = BTreeMap<String, String>;

/// Third-party service that turns a template id plus parameters into an email.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, template_id: &str, params: TemplateParams) -> Result<(), RelayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// EmailJS REST relay.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: Client,
    endpoint: String,
    service_id: String,
    public_key: String,
}

impl EmailJsRelay {
    pub fn from_config(config: &RelayConfig) -> Self {
        Self {
            client: shared_client().clone(),
            endpoint: config.endpoint.clone(),
            service_id: config.service_id.trim().to_string(),
            public_key: config.public_key.trim().to_string(),
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn check_configured(&self) -> Result<(), RelayError> {
        if self.service_id.is_empty() {
            return Err(RelayError::NotConfigured("service id"));
        }
        if self.public_key.is_empty() {
            return Err(RelayError::NotConfigured("public key"));
        }
        Ok(())
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, template_id: &str, params: TemplateParams) -> Result<(), RelayError> {
        self.check_configured()?;

        let body = SendRequest {
            service_id: &self.service_id,
            template_id,
            user_id: &self.public_key,
            template_params: &params,
        };

        tracing::info!(template_id, "dispatching email relay request");
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn unconfigured() -> RelayConfig {
        RelayConfig {
            endpoint: "http://127.0.0.1:9/unused".to_string(),
            service_id: String::new(),
            contact_template_id: "contact".to_string(),
            visitor_template_id: "visitor".to_string(),
            public_key: String::new(),
        }
    }

    #[tokio::test]
    async fn test_missing_service_id_never_hits_network() {
        let relay = EmailJsRelay::from_config(&unconfigured());
        let result = relay.send("contact", TemplateParams::new()).await;
        assert_matches!(result, Err(RelayError::NotConfigured("service id")));
    }

    #[tokio::test]
    async fn test_missing_public_key() {
        let config = RelayConfig {
            service_id: "svc".to_string(),
            public_key: "  ".to_string(),
            ..unconfigured()
        };
        let result = EmailJsRelay::from_config(&config)
            .send("contact", TemplateParams::new())
            .await;
        assert_matches!(result, Err(RelayError::NotConfigured("public key")));
    }

    #[test]
    fn test_request_body_shape() {
        let mut params = TemplateParams::new();
        params.insert("user_name".to_string(), "Ada".to_string());
        let body = SendRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "pk",
            template_params: &params,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pk",
                "template_params": { "user_name": "Ada" }
            })
        );
    }
}
