use crate::modules::registration::core::registration::UserRegistration;
use crate::modules::registration::use_cases::register_user::sink_port::{
    RegistrationSink, SinkError,
};
use tokio::sync::Mutex;

/// Renders accepted registrations as pretty JSON and keeps the latest one.
#[derive(Default)]
pub struct RenderedOutput {
    latest: Mutex<Option<String>>,
    is_offline: bool,
}

impl RenderedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn latest(&self) -> Option<String> {
        self.latest.lock().await.clone()
    }
}

pub fn render(registration: &UserRegistration) -> Result<String, SinkError> {
    serde_json::to_string_pretty(registration).map_err(|e| SinkError::Render(e.to_string()))
}

#[async_trait::async_trait]
impl RegistrationSink for RenderedOutput {
    async fn publish(&self, registration: &UserRegistration) -> Result<(), SinkError> {
        if self.is_offline {
            return Err(SinkError::Unavailable);
        }
        let rendered = render(registration)?;
        *self.latest.lock().await = Some(rendered);
        Ok(())
    }
}
