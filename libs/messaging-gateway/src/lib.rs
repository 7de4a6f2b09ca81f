/// Courier Messaging Gateway Shared Library
///
/// This library defines the boundary between the application and the push
/// messaging provider (the service that exchanges an OS device token for a
/// provider-level registration token and delivers pushes addressed to it).
///
/// It provides:
/// - Opaque token types for the two halves of the token handshake
/// - The `MessagingGateway` trait consumed by the coordinator
/// - The `GatewayDelegate` trait for provider-initiated token rotation
/// - The gateway error taxonomy

pub mod errors;
pub mod gateway;
pub mod models;

pub use errors::GatewayError;
pub use gateway::{GatewayDelegate, MessagingGateway};
pub use models::{DeviceToken, RegistrationToken};
