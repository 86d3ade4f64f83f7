// Shared test fixture for registration drafts.
// Loaded from JSON so the happy-path draft lives in one place.

use crate::modules::registration::core::draft::{RegistrationDraft, TechEntryDraft};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct TechEntryDto {
    pub title: String,
    pub knowledge: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationDraftDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub techs: Vec<TechEntryDto>,
}

pub struct RegistrationDraftBuilder {
    inner: RegistrationDraft,
}

impl Default for RegistrationDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegistrationDraftBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/drafts/json/registration_draft.json")
                .unwrap();
        let dto: RegistrationDraftDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegistrationDraft {
                name: dto.name,
                email: dto.email,
                password: dto.password,
                techs: dto
                    .techs
                    .into_iter()
                    .map(|tech| TechEntryDraft::new(tech.title, tech.knowledge))
                    .collect(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn techs(mut self, v: Vec<(&str, f64)>) -> Self {
        self.inner.techs = v
            .into_iter()
            .map(|(title, knowledge)| TechEntryDraft::new(title, knowledge))
            .collect();
        self
    }

    pub fn build(self) -> RegistrationDraft {
        self.inner
    }
}

#[cfg(test)]
mod registration_draft_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegistrationDraftBuilder::default().build();
        assert_eq!(built.name, " john   doe ");
        assert_eq!(built.email, "JOHN@EXAMPLE.COM");
        assert_eq!(built.password, "secret1");
        assert_eq!(built.techs.len(), 2);
        assert_eq!(built.techs[0].title, "Go");
        assert_eq!(built.techs[0].knowledge, 80.0);
        assert_eq!(built.techs[1].title, "Rust");
        assert_eq!(built.techs[1].knowledge, 60.0);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegistrationDraftBuilder::new()
            .name("Ada")
            .email("ada@example.org")
            .password("hunter22")
            .techs(vec![("C", 5.0)])
            .build();

        assert_eq!(custom.name, "Ada");
        assert_eq!(custom.email, "ada@example.org");
        assert_eq!(custom.password, "hunter22");
        assert_eq!(custom.techs.len(), 1);
        assert_eq!(custom.techs[0].title, "C");
        assert_eq!(custom.techs[0].knowledge, 5.0);
    }
}
