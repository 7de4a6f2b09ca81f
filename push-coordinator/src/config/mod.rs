use crate::error::{CoordinatorError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Minimum wait between handing the device token to the gateway and the
    /// first registration-token fetch, in milliseconds. The messaging
    /// backend needs time to propagate the device token before it can mint
    /// a registration token, so this must be nonzero.
    pub token_propagation_delay_ms: u64,
    /// Payload key carrying a survey identifier.
    pub survey_payload_key: String,
    /// Payload key carrying a mail-package identifier.
    pub mail_package_payload_key: String,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            token_propagation_delay_ms: 1000,
            survey_payload_key: "survey_id".to_string(),
            mail_package_payload_key: "mail_package_id".to_string(),
        }
    }
}

impl CoordinatorConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            token_propagation_delay_ms: std::env::var("TOKEN_PROPAGATION_DELAY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .context("TOKEN_PROPAGATION_DELAY_MS must be an integer")?,
            survey_payload_key: std::env::var("SURVEY_PAYLOAD_KEY")
                .unwrap_or_else(|_| "survey_id".to_string()),
            mail_package_payload_key: std::env::var("MAIL_PACKAGE_PAYLOAD_KEY")
                .unwrap_or_else(|_| "mail_package_id".to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.token_propagation_delay_ms == 0 {
            return Err(CoordinatorError::Config(
                "token_propagation_delay_ms must be nonzero".to_string(),
            ));
        }
        if self.survey_payload_key.is_empty() || self.mail_package_payload_key.is_empty() {
            return Err(CoordinatorError::Config(
                "payload keys must be non-empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn propagation_delay(&self) -> Duration {
        Duration::from_millis(self.token_propagation_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CoordinatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.propagation_delay(), Duration::from_millis(1000));
        assert_eq!(config.survey_payload_key, "survey_id");
        assert_eq!(config.mail_package_payload_key, "mail_package_id");
    }

    #[test]
    fn test_zero_delay_rejected() {
        let config = CoordinatorConfig {
            token_propagation_delay_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoordinatorError::Config(_))
        ));
    }

    #[test]
    fn test_empty_payload_key_rejected() {
        let config = CoordinatorConfig {
            survey_payload_key: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
