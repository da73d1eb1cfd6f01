use crate::core::constants::SPLASH_WATCHDOG_MS;
use crate::core::inquiry::{Channels, ChatTarget, RequiredField, SubmitPolicy};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailRelayConfig {
    pub service_id: String,
    pub template_id: String,
}

impl Default for EmailRelayConfig {
    fn default() -> Self {
        Self {
            service_id: "service_default".to_string(),
            template_id: "template_default".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormRelayConfig {
    pub endpoint: String,
}

impl Default for FormRelayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.web3forms.com/submit".to_string(),
        }
    }
}

/// Page configuration, optionally embedded in the markup as JSON.
///
/// Every field has a default, so an absent script element or a partial object
/// both yield a working page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub chat: ChatTarget,
    pub email_relay: EmailRelayConfig,
    pub form_relay: FormRelayConfig,
    pub channels: Channels,
    pub required_fields: Vec<RequiredField>,
    pub watchdog_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let policy = SubmitPolicy::default();
        Self {
            log_level: "info".to_string(),
            chat: policy.chat,
            email_relay: EmailRelayConfig::default(),
            form_relay: FormRelayConfig::default(),
            channels: policy.channels,
            required_fields: policy.required,
            watchdog_ms: SPLASH_WATCHDOG_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(raw)?;
        cfg.level()?;
        Ok(cfg)
    }

    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn submit_policy(&self) -> SubmitPolicy {
        SubmitPolicy {
            channels: self.channels,
            required: self.required_fields.clone(),
            chat: self.chat.clone(),
        }
    }
}
