use crate::modules::registration::core::registration::UserRegistration;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SinkError {
    #[error("registration sink is unavailable")]
    Unavailable,

    #[error("failed to render registration: {0}")]
    Render(String),
}

/// Receives registrations that passed validation.
#[async_trait]
pub trait RegistrationSink {
    async fn publish(&self, registration: &UserRegistration) -> Result<(), SinkError>;
}
