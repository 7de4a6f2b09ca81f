use crate::errors::GatewayError;
use crate::models::{DeviceToken, RegistrationToken};
use async_trait::async_trait;

/// Boundary to the push messaging provider.
///
/// The provider exchanges an OS device token for a provider-level
/// registration token. The device token must be handed over via
/// `set_device_token` before the first `fetch_registration_token` call;
/// fetching without a registered device token yields `Ok(None)` or
/// `Err(DeviceTokenMissing)` depending on the provider.
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    /// Hand the OS device token to the provider's token slot.
    async fn set_device_token(&self, token: &DeviceToken) -> Result<(), GatewayError>;

    /// Ask the provider for the current registration token.
    ///
    /// `Ok(None)` is a valid outcome: the provider may not have minted a
    /// token yet.
    async fn fetch_registration_token(&self) -> Result<Option<RegistrationToken>, GatewayError>;
}

/// Callback surface for provider-initiated events.
///
/// The provider may rotate the registration token at any time (credential
/// rotation on its side); the delegate receives the new value, or `None`
/// when the provider has invalidated the token without a replacement.
#[async_trait]
pub trait GatewayDelegate: Send + Sync {
    async fn registration_token_refreshed(&self, token: Option<RegistrationToken>);
}
