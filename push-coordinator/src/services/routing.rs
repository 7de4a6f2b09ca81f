use crate::config::CoordinatorConfig;
use crate::models::{NotificationEvent, RoutingIntent};

/// Resolves a notification payload into a navigation target.
///
/// Derivation is a total function over the payload: the survey key is
/// checked first, then the mail-package key, and anything else falls through
/// to home. A payload that pathologically carries both keys resolves to the
/// survey. Non-string values are treated as missing.
#[derive(Debug, Clone)]
pub struct IntentResolver {
    survey_key: String,
    mail_package_key: String,
}

impl IntentResolver {
    pub fn new(survey_key: impl Into<String>, mail_package_key: impl Into<String>) -> Self {
        Self {
            survey_key: survey_key.into(),
            mail_package_key: mail_package_key.into(),
        }
    }

    pub fn from_config(config: &CoordinatorConfig) -> Self {
        Self::new(
            config.survey_payload_key.clone(),
            config.mail_package_payload_key.clone(),
        )
    }

    pub fn resolve(&self, event: &NotificationEvent) -> RoutingIntent {
        if let Some(id) = event.payload_str(&self.survey_key) {
            return RoutingIntent::OpenSurvey(id.to_string());
        }
        if let Some(id) = event.payload_str(&self.mail_package_key) {
            return RoutingIntent::OpenMailPackage(id.to_string());
        }
        RoutingIntent::OpenHome
    }
}

impl Default for IntentResolver {
    fn default() -> Self {
        Self::from_config(&CoordinatorConfig::default())
    }
}
