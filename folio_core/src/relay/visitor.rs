use super::email::{EmailRelay, TemplateParams};
use super::geo::{GeoInfo, GeoLocator};
use crate::preferences::{PreferenceStore, VISITOR_ALERT_KEY};
use crate::utils::time::now_display;
use std::sync::Arc;

/// What the host knows about the client it runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDetails {
    pub user_agent: String,
    pub platform: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Where the visitor came from, if known
    pub referrer: Option<String>,
}

impl ClientDetails {
    /// Details for the running desktop process.
    pub fn current(screen_width: u32, screen_height: u32) -> Self {
        Self {
            user_agent: super::http_client::user_agent(),
            platform: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
            screen_width,
            screen_height,
            referrer: None,
        }
    }

    pub fn screen(&self) -> String {
        format!("{}x{}", self.screen_width, self.screen_height)
    }

    pub fn referrer_or_direct(&self) -> &str {
        match self.referrer.as_deref() {
            Some(referrer) if !referrer.trim().is_empty() => referrer,
            _ => "Direct",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The session flag was already set
    AlreadySent,
    /// Visitor alerts are switched off in config
    Disabled,
    Sent,
    /// The attempt was made and failed; the session will not retry
    Failed(String),
}

/// Sends one "new visitor" email per session.
pub struct VisitorNotifier {
    geo: Arc<dyn GeoLocator>,
    relay: Arc<dyn EmailRelay>,
    session: Arc<dyn PreferenceStore>,
    template_id: String,
    enabled: bool,
}

impl VisitorNotifier {
    pub fn new(
        geo: Arc<dyn GeoLocator>,
        relay: Arc<dyn EmailRelay>,
        session: Arc<dyn PreferenceStore>,
        template_id: impl Into<String>,
    ) -> Self {
        Self {
            geo,
            relay,
            session,
            template_id: template_id.into(),
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Claims the session flag, then looks up the visitor and sends the alert.
    ///
    /// The flag is claimed before any network activity, so a session makes at
    /// most one attempt even if it fails. Failures are logged, never raised.
    pub async fn notify_once(&self, client: &ClientDetails) -> NotifyOutcome {
        if !self.enabled {
            return NotifyOutcome::Disabled;
        }

        match self.session.set_if_absent(VISITOR_ALERT_KEY, "true") {
            Ok(true) => {}
            Ok(false) => return NotifyOutcome::AlreadySent,
            Err(err) => {
                tracing::warn!("visitor alert skipped, session flag unavailable: {err}");
                return NotifyOutcome::Failed(err.to_string());
            }
        }

        let geo = match self.geo.locate().await {
            Ok(geo) => geo,
            Err(err) => {
                tracing::warn!("visitor geolocation failed: {err}");
                return NotifyOutcome::Failed(err.to_string());
            }
        };

        let params = visitor_params(&geo, client, &now_display());
        match self.relay.send(&self.template_id, params).await {
            Ok(()) => {
                tracing::info!(city = %geo.city, country = %geo.country, "visitor alert sent");
                NotifyOutcome::Sent
            }
            Err(err) => {
                tracing::warn!("visitor alert failed: {err}");
                NotifyOutcome::Failed(err.to_string())
            }
        }
    }
}

/// Template parameters for the visitor alert.
pub fn visitor_params(geo: &GeoInfo, client: &ClientDetails, timestamp: &str) -> TemplateParams {
    let screen = client.screen();
    let referrer = client.referrer_or_direct();

    let message = format!(
        "New visitor\n\n\
         Location: {}, {}, {}\n\
         IP: {}\n\
         ISP: {}\n\n\
         OS: {}\n\
         Screen: {}\n\
         Browser: {}\n\n\
         Time: {}\n\
         Referrer: {}",
        geo.city,
        geo.region,
        geo.country,
        geo.ip,
        geo.org,
        client.platform,
        screen,
        client.user_agent,
        timestamp,
        referrer,
    );

    [
        ("message", message),
        ("subject", format!("New Visitor from {}, {}", geo.city, geo.country)),
        ("ip", geo.ip.clone()),
        ("city", geo.city.clone()),
        ("region", geo.region.clone()),
        ("country", geo.country.clone()),
        ("isp", geo.org.clone()),
        ("browser", client.user_agent.clone()),
        ("platform", client.platform.clone()),
        ("screen", screen),
        ("referrer", referrer.to_string()),
        ("timestamp", timestamp.to_string()),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}
