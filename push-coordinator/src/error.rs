use crate::services::token_sync::SyncError;
use messaging_gateway::GatewayError;
use thiserror::Error;

/// Coordinator Error Types
///
/// Every variant is terminal at the point of occurrence: failures on the
/// token path are logged for diagnostics and swallowed, never re-thrown to
/// the embedding application. Push registration is not on the critical path
/// of any user-facing feature, so it degrades silently.
#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error("Push registration failed: {0}")]
    Registration(String),

    #[error("Registration token fetch failed: {0}")]
    TokenFetch(String),

    #[error("Registration token sync failed: {0}")]
    Sync(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoordinatorError>;

impl From<GatewayError> for CoordinatorError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::RegistrationFailed(reason) => CoordinatorError::Registration(reason),
            other => CoordinatorError::TokenFetch(other.to_string()),
        }
    }
}

impl From<SyncError> for CoordinatorError {
    fn from(err: SyncError) -> Self {
        CoordinatorError::Sync(err.to_string())
    }
}
