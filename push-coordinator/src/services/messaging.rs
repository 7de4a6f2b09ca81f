/// Messaging gateway boundary - Re-export from shared library
///
/// This module re-exports the gateway traits and token types from the
/// messaging-gateway library so coordinator code can import them from one
/// place. The actual definitions live in the shared library because other
/// components of the app (session handling, diagnostics) consume the same
/// boundary.

pub use messaging_gateway::{
    DeviceToken, GatewayDelegate, GatewayError, MessagingGateway, RegistrationToken,
};
