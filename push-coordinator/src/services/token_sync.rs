use async_trait::async_trait;
use messaging_gateway::RegistrationToken;
use thiserror::Error;

/// Token sync error types
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Backend rejected token update: {0}")]
    Rejected(String),

    #[error("Backend unreachable: {0}")]
    Unreachable(String),
}

/// Backend boundary for registration-token sync.
///
/// Injected into the coordinator so the transport can live elsewhere (and be
/// mocked in tests). The backend owns timeout and cancellation; this
/// component only observes the final result.
#[async_trait]
pub trait TokenSyncBackend: Send + Sync {
    /// Report the current registration token to the application backend so
    /// it can address pushes to this install.
    async fn update_registration_token(&self, token: &RegistrationToken) -> Result<(), SyncError>;
}
