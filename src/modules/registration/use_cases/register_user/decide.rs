// Pure decision function for a submit attempt.
//
// Purpose
// - Validate the whole draft and produce a normalized registration on success.
//
// Responsibilities
// - Collect every failing field, one message per path, so all problems are shown at once.
// - Report the list-length rule together with per-entry failures.
// - Normalize only after everything passed. Never perform input or output.

use crate::modules::registration::core::draft::RegistrationDraft;
use crate::modules::registration::core::errors::FieldErrors;
use crate::modules::registration::core::field::FieldName;
use crate::modules::registration::core::normalize::{normalize_email, normalize_name};
use crate::modules::registration::core::registration::{TechEntry, UserRegistration};
use crate::modules::registration::core::rules;
use crate::modules::registration::use_cases::register_user::decision::Decision;

pub fn decide_submit(draft: &RegistrationDraft) -> Decision {
    let mut errors = FieldErrors::new();

    if let Some(message) = rules::check_name(&draft.name) {
        errors.insert(FieldName::Name.to_string(), message);
    }
    if let Some(message) = rules::check_email(&draft.email) {
        errors.insert(FieldName::Email.to_string(), message);
    }
    if let Some(message) = rules::check_password(&draft.password) {
        errors.insert(FieldName::Password.to_string(), message);
    }
    if let Some(message) = rules::check_techs_len(draft.techs.len()) {
        errors.insert("techs", message);
    }
    for (index, tech) in draft.techs.iter().enumerate() {
        if let Some(message) = rules::check_title(&tech.title) {
            errors.insert(FieldName::TechTitle(index).to_string(), message);
        }
        if let Some(message) = rules::check_knowledge(tech.knowledge) {
            errors.insert(FieldName::TechKnowledge(index).to_string(), message);
        }
    }

    if !errors.is_empty() {
        return Decision::Rejected { errors };
    }

    Decision::Accepted {
        registration: UserRegistration {
            name: normalize_name(&draft.name),
            email: normalize_email(&draft.email),
            password: draft.password.clone(),
            techs: draft
                .techs
                .iter()
                .map(|tech| TechEntry {
                    title: tech.title.trim().to_string(),
                    knowledge: tech.knowledge,
                })
                .collect(),
        },
    }
}

#[cfg(test)]
mod register_user_decide_tests {
    use super::*;
    use crate::modules::registration::core::rules::{
        EMAIL_INVALID, KNOWLEDGE_NOT_A_NUMBER, KNOWLEDGE_OUT_OF_RANGE, NAME_REQUIRED,
        PASSWORD_TOO_SHORT, TECHS_TOO_FEW, TITLE_REQUIRED,
    };
    use crate::tests::fixtures::drafts::registration_draft::RegistrationDraftBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn valid_draft() -> RegistrationDraft {
        RegistrationDraftBuilder::new().build()
    }

    fn rejected(draft: &RegistrationDraft) -> FieldErrors {
        match decide_submit(draft) {
            Decision::Rejected { errors } => errors,
            Decision::Accepted { .. } => panic!("expected the draft to be rejected"),
        }
    }

    #[rstest]
    fn it_should_accept_and_normalize_the_registration(valid_draft: RegistrationDraft) {
        let decision = decide_submit(&valid_draft);
        assert_eq!(
            decision,
            Decision::Accepted {
                registration: UserRegistration {
                    name: "John Doe".into(),
                    email: "john@example.com".into(),
                    password: "secret1".into(),
                    techs: vec![
                        TechEntry {
                            title: "Go".into(),
                            knowledge: 80.0,
                        },
                        TechEntry {
                            title: "Rust".into(),
                            knowledge: 60.0,
                        },
                    ],
                },
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("    ")]
    fn it_should_require_a_name(#[case] name: &str) {
        let draft = RegistrationDraftBuilder::new().name(name).build();
        let errors = rejected(&draft);
        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("john@localhost")]
    fn it_should_reject_a_malformed_email(#[case] email: &str) {
        let draft = RegistrationDraftBuilder::new().email(email).build();
        assert_eq!(rejected(&draft).get("email"), Some(EMAIL_INVALID));
    }

    #[rstest]
    fn it_should_reject_a_short_password() {
        let draft = RegistrationDraftBuilder::new().password("12345").build();
        assert_eq!(rejected(&draft).get("password"), Some(PASSWORD_TOO_SHORT));
    }

    #[rstest]
    fn it_should_reject_an_empty_tech_list() {
        let draft = RegistrationDraftBuilder::new().techs(vec![]).build();
        let errors = rejected(&draft);
        assert_eq!(errors.get("techs"), Some(TECHS_TOO_FEW));
        assert_eq!(errors.len(), 1);
    }

    #[rstest]
    fn it_should_reject_a_single_valid_tech() {
        let draft = RegistrationDraftBuilder::new()
            .techs(vec![("Rust", 90.0)])
            .build();
        let errors = rejected(&draft);
        assert_eq!(errors.get("techs"), Some(TECHS_TOO_FEW));
        assert_eq!(errors.get("techs.0.title"), None);
        assert_eq!(errors.get("techs.0.knowledge"), None);
    }

    #[rstest]
    fn it_should_report_the_list_rule_together_with_entry_failures() {
        let draft = RegistrationDraftBuilder::new()
            .techs(vec![("  ", 0.0)])
            .build();
        let errors = rejected(&draft);
        assert_eq!(errors.get("techs"), Some(TECHS_TOO_FEW));
        assert_eq!(errors.get("techs.0.title"), Some(TITLE_REQUIRED));
        assert_eq!(errors.get("techs.0.knowledge"), Some(KNOWLEDGE_OUT_OF_RANGE));
    }

    #[rstest]
    #[case(0.0)]
    #[case(101.0)]
    #[case(-1.0)]
    fn it_should_scope_knowledge_errors_to_the_index(#[case] knowledge: f64) {
        let draft = RegistrationDraftBuilder::new()
            .techs(vec![("Go", 50.0), ("Rust", knowledge), ("Zig", 10.0)])
            .build();
        let errors = rejected(&draft);
        assert_eq!(errors.get("techs.1.knowledge"), Some(KNOWLEDGE_OUT_OF_RANGE));
        assert_eq!(errors.get("techs.0.knowledge"), None);
        assert_eq!(errors.get("techs.2.knowledge"), None);
        assert_eq!(errors.len(), 1);
    }

    #[rstest]
    fn it_should_reject_knowledge_that_is_not_a_number() {
        let draft = RegistrationDraftBuilder::new()
            .techs(vec![("Go", f64::NAN), ("Rust", 60.0)])
            .build();
        assert_eq!(
            rejected(&draft).get("techs.0.knowledge"),
            Some(KNOWLEDGE_NOT_A_NUMBER)
        );
    }

    #[rstest]
    fn it_should_report_every_failing_field_at_once() {
        let draft = RegistrationDraftBuilder::new()
            .name("")
            .email("nope")
            .password("123")
            .techs(vec![])
            .build();
        let errors = rejected(&draft);
        let paths: Vec<&str> = errors.iter().map(|error| error.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "email", "password", "techs"]);
    }

    #[rstest]
    fn it_should_trim_tech_titles_on_success() {
        let draft = RegistrationDraftBuilder::new()
            .techs(vec![("  Go ", 80.0), ("Rust", 1.0)])
            .build();
        let registration = decide_submit(&draft).into_result().unwrap();
        assert_eq!(registration.techs[0].title, "Go");
        assert_eq!(registration.techs[1].knowledge, 1.0);
    }

    #[rstest]
    fn it_should_keep_the_password_untouched(valid_draft: RegistrationDraft) {
        let draft = RegistrationDraft {
            password: " Secret 1 ".into(),
            ..valid_draft
        };
        let registration = decide_submit(&draft).into_result().unwrap();
        assert_eq!(registration.password, " Secret 1 ");
    }
}
