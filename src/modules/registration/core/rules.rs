//! Field rules for the registration form.
//!
//! Each check returns the user-visible message of the first rule the value
//! breaks, or `None` when the value is acceptable.

use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "The name is required!";
pub const EMAIL_INVALID: &str = "Invalid email!!";
pub const PASSWORD_TOO_SHORT: &str = "The password must be at least 6 characters long.";
pub const TECHS_TOO_FEW: &str = "Enter at least 2 technologies";
pub const TITLE_REQUIRED: &str = "The title is required!";
pub const KNOWLEDGE_OUT_OF_RANGE: &str = "The knowledge level must be between 1 and 100.";
pub const KNOWLEDGE_NOT_A_NUMBER: &str = "The knowledge level must be a number.";

pub const MIN_PASSWORD_UTF16_UNITS: usize = 6;
pub const MIN_TECHS: usize = 2;
pub const KNOWLEDGE_MIN: f64 = 1.0;
pub const KNOWLEDGE_MAX: f64 = 100.0;

// A leading dot and consecutive dots are rejected separately.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

pub fn check_name(name: &str) -> Option<&'static str> {
    name.trim().is_empty().then_some(NAME_REQUIRED)
}

pub fn check_email(email: &str) -> Option<&'static str> {
    (!is_valid_email(email)).then_some(EMAIL_INVALID)
}

/// Length is measured in UTF-16 code units, so a character outside the
/// basic multilingual plane counts twice.
pub fn check_password(password: &str) -> Option<&'static str> {
    (password.encode_utf16().count() < MIN_PASSWORD_UTF16_UNITS).then_some(PASSWORD_TOO_SHORT)
}

pub fn check_techs_len(len: usize) -> Option<&'static str> {
    (len < MIN_TECHS).then_some(TECHS_TOO_FEW)
}

pub fn check_title(title: &str) -> Option<&'static str> {
    title.trim().is_empty().then_some(TITLE_REQUIRED)
}

pub fn check_knowledge(knowledge: f64) -> Option<&'static str> {
    if knowledge.is_nan() {
        Some(KNOWLEDGE_NOT_A_NUMBER)
    } else if !(KNOWLEDGE_MIN..=KNOWLEDGE_MAX).contains(&knowledge) {
        Some(KNOWLEDGE_OUT_OF_RANGE)
    } else {
        None
    }
}
