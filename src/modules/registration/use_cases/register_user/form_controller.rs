// Form controller for the registration form.
//
// Purpose
// - Own the draft, the per-field errors and the submit count.
//
// Responsibilities
// - Apply explicit updates: set a field, append a technology row, remove a row.
// - Validate on submit and hand back either the normalized registration or the errors.
// - After the first submit attempt, re-validate on every change so shown errors stay current.
// - Never clear entered values on a failed submit.

use serde::Serialize;
use uuid::Uuid;

use crate::modules::registration::core::draft::{FieldValue, RegistrationDraft, TechEntryDraft};
use crate::modules::registration::core::errors::{FieldErrors, FormError};
use crate::modules::registration::core::field::FieldName;
use crate::modules::registration::core::registration::UserRegistration;
use crate::modules::registration::use_cases::register_user::decide::decide_submit;
use crate::modules::registration::use_cases::register_user::decision::Decision;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    /// No failures are known for the current draft, and it has not been
    /// accepted by a submit.
    #[default]
    Unvalidated,
    /// The last validation of the current draft found failures.
    Invalid,
    /// The current draft was accepted by the last submit.
    Validated,
}

/// Serializable view of the controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub draft: RegistrationDraft,
    pub errors: FieldErrors,
    pub submit_count: u32,
    pub status: FormStatus,
}

#[derive(Debug, Default)]
pub struct FormController {
    draft: RegistrationDraft,
    errors: FieldErrors,
    submit_count: u32,
    status: FormStatus,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: RegistrationDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            submit_count: self.submit_count,
            status: self.status,
        }
    }

    pub fn set_field(
        &mut self,
        field: FieldName,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        let value = value.into();
        match field {
            FieldName::Name => self.draft.name = value.into_text(),
            FieldName::Email => self.draft.email = value.into_text(),
            FieldName::Password => self.draft.password = value.into_text(),
            FieldName::TechTitle(index) => self.tech_mut(index)?.title = value.into_text(),
            FieldName::TechKnowledge(index) => {
                self.tech_mut(index)?.knowledge = value.into_number()
            }
        }
        tracing::debug!(%field, "draft field updated");
        self.after_change();
        Ok(())
    }

    /// Appends a blank row and returns its key.
    pub fn append_tech(&mut self) -> Uuid {
        let row = TechEntryDraft::blank();
        let key = row.key;
        self.draft.techs.push(row);
        tracing::debug!(%key, len = self.draft.techs.len(), "technology row appended");
        self.after_change();
        key
    }

    /// Removes the row at `index`. Out-of-range indices are ignored.
    pub fn remove_tech(&mut self, index: usize) -> Option<TechEntryDraft> {
        if index >= self.draft.techs.len() {
            tracing::debug!(index, len = self.draft.techs.len(), "ignoring removal past the end");
            return None;
        }
        let removed = self.draft.techs.remove(index);
        tracing::debug!(index, key = %removed.key, "technology row removed");
        self.after_change();
        Some(removed)
    }

    pub fn submit(&mut self) -> Result<UserRegistration, FieldErrors> {
        self.submit_count += 1;
        match decide_submit(&self.draft) {
            Decision::Accepted { registration } => {
                self.errors.clear();
                self.status = FormStatus::Validated;
                tracing::info!(submit_count = self.submit_count, "registration accepted");
                Ok(registration)
            }
            Decision::Rejected { errors } => {
                self.errors = errors.clone();
                self.status = FormStatus::Invalid;
                tracing::info!(
                    submit_count = self.submit_count,
                    failing_fields = errors.len(),
                    "registration rejected"
                );
                Err(errors)
            }
        }
    }

    /// Withdraws a `Validated` status when the accepted registration could
    /// not be handed off. Errors and values are kept.
    pub fn mark_unvalidated(&mut self) {
        if self.status == FormStatus::Validated {
            self.status = FormStatus::Unvalidated;
        }
    }

    /// Back to the freshly mounted state.
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::debug!("form reset");
    }

    fn tech_mut(&mut self, index: usize) -> Result<&mut TechEntryDraft, FormError> {
        let len = self.draft.techs.len();
        self.draft
            .techs
            .get_mut(index)
            .ok_or(FormError::NoSuchTech { index, len })
    }

    fn after_change(&mut self) {
        if self.submit_count > 0 {
            self.errors = match decide_submit(&self.draft) {
                Decision::Accepted { .. } => FieldErrors::new(),
                Decision::Rejected { errors } => errors,
            };
        }
        self.status = if self.errors.is_empty() {
            FormStatus::Unvalidated
        } else {
            FormStatus::Invalid
        };
    }
}
