use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Delivery context of a received notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryContext {
    /// Delivered while the app was in the foreground
    Foreground,
    /// The user tapped the notification
    Tapped,
}

impl DeliveryContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryContext::Foreground => "foreground",
            DeliveryContext::Tapped => "tapped",
        }
    }
}

/// A received push payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub id: Uuid,
    pub title: String,
    /// The user-info bag carried by the push
    pub payload: Map<String, Value>,
    pub context: DeliveryContext,
    pub received_at: DateTime<Utc>,
}

impl NotificationEvent {
    pub fn new(title: impl Into<String>, payload: Map<String, Value>, context: DeliveryContext) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            payload,
            context,
            received_at: Utc::now(),
        }
    }

    /// String value for a payload key, if present and a string.
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }
}

/// Navigation target inferred from a notification payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "id", rename_all = "snake_case")]
pub enum RoutingIntent {
    OpenSurvey(String),
    OpenMailPackage(String),
    OpenHome,
}

impl RoutingIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingIntent::OpenSurvey(_) => "open_survey",
            RoutingIntent::OpenMailPackage(_) => "open_mail_package",
            RoutingIntent::OpenHome => "open_home",
        }
    }
}

/// How a foreground notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationDecision {
    pub alert: bool,
    pub badge: bool,
    pub sound: bool,
}

impl PresentationDecision {
    /// Alert, badge and sound all permitted.
    pub const fn all() -> Self {
        Self {
            alert: true,
            badge: true,
            sound: true,
        }
    }
}

/// Token handshake phase
///
/// `Unregistered → DeviceTokenKnown → ServiceTokenKnown → Synced`, in that
/// order only. Re-entrant: a new device token restarts the sequence, and the
/// process may cycle through it indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandshakePhase {
    #[default]
    Unregistered,
    DeviceTokenKnown,
    ServiceTokenKnown,
    Synced,
}

impl HandshakePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandshakePhase::Unregistered => "unregistered",
            HandshakePhase::DeviceTokenKnown => "device_token_known",
            HandshakePhase::ServiceTokenKnown => "service_token_known",
            HandshakePhase::Synced => "synced",
        }
    }
}
