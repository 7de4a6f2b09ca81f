use thiserror::Error;

/// Messaging Gateway Error Types
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Push registration failed: {0}")]
    RegistrationFailed(String),

    #[error("Registration token request failed: {0}")]
    TokenRequestFailed(String),

    #[error("Device token not yet registered with the gateway")]
    DeviceTokenMissing,

    #[error("Invalid device token")]
    InvalidToken,

    #[error("Internal error")]
    Internal,
}

impl From<GatewayError> for String {
    fn from(err: GatewayError) -> Self {
        err.to_string()
    }
}
