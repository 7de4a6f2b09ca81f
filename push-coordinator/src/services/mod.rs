pub mod coordinator;
pub mod messaging;
pub mod routing;
pub mod sign_in;
pub mod token_sync;

pub use coordinator::NotificationCoordinator;
pub use messaging::{DeviceToken, GatewayDelegate, GatewayError, MessagingGateway, RegistrationToken};
pub use routing::IntentResolver;
pub use sign_in::SignInRedirect;
pub use token_sync::{SyncError, TokenSyncBackend};
