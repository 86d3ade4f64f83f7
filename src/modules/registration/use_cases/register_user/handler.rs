use crate::modules::registration::core::draft::FieldValue;
use crate::modules::registration::core::errors::{FieldErrors, FormError};
use crate::modules::registration::core::field::FieldName;
use crate::modules::registration::core::registration::UserRegistration;
use crate::modules::registration::use_cases::register_user::form_controller::{
    FormController, FormSnapshot,
};
use crate::modules::registration::use_cases::register_user::sink_port::{
    RegistrationSink, SinkError,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("registration rejected: {0}")]
    Rejected(FieldErrors),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Drives one shared form and hands accepted registrations to the sink.
pub struct RegisterUserHandler<TSink>
where
    TSink: RegistrationSink + Send + Sync + 'static,
{
    form: Mutex<FormController>,
    sink: Arc<TSink>,
}

impl<TSink> RegisterUserHandler<TSink>
where
    TSink: RegistrationSink + Send + Sync + 'static,
{
    pub fn new(sink: Arc<TSink>) -> Self {
        Self {
            form: Mutex::new(FormController::new()),
            sink,
        }
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        self.form.lock().await.snapshot()
    }

    pub async fn set_field(
        &self,
        field: FieldName,
        value: FieldValue,
    ) -> Result<(), ApplicationError> {
        self.form.lock().await.set_field(field, value)?;
        Ok(())
    }

    pub async fn append_tech(&self) -> Uuid {
        self.form.lock().await.append_tech()
    }

    /// Returns whether a row was removed.
    pub async fn remove_tech(&self, index: usize) -> bool {
        self.form.lock().await.remove_tech(index).is_some()
    }

    pub async fn reset(&self) {
        self.form.lock().await.reset();
    }

    pub async fn handle_submit(&self) -> Result<UserRegistration, ApplicationError> {
        let mut form = self.form.lock().await;
        let registration = form.submit().map_err(ApplicationError::Rejected)?;
        if let Err(e) = self.sink.publish(&registration).await {
            form.mark_unvalidated();
            return Err(e.into());
        }
        Ok(registration)
    }
}
