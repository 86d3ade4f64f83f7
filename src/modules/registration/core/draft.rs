// Draft state held by the form before validation.
//
// Purpose
// - Mirror the registration shape with raw, possibly invalid input.
//
// Responsibilities
// - Start empty when the form mounts (no technologies).
// - Give every technology row a stable key so callers can track rows across removals.
// - Never validate or normalize. That happens on submit.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::registration::core::registration::serialize_knowledge;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub techs: Vec<TechEntryDraft>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechEntryDraft {
    #[serde(default = "Uuid::now_v7")]
    pub key: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default, serialize_with = "serialize_knowledge")]
    pub knowledge: f64,
}

impl TechEntryDraft {
    /// The row appended by the "add" control: empty title, knowledge 0.
    pub fn blank() -> Self {
        Self::new("", 0.0)
    }

    pub fn new(title: impl Into<String>, knowledge: f64) -> Self {
        Self {
            key: Uuid::now_v7(),
            title: title.into(),
            knowledge,
        }
    }
}

/// A value typed into a form input.
///
/// Text inputs and numeric inputs both reach the draft through this type.
/// Numbers written into text fields keep their textual form, and text written
/// into a numeric field is parsed, becoming NaN when it is not a finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Number(number) => number.to_string(),
        }
    }

    pub fn into_number(self) -> f64 {
        match self {
            FieldValue::Number(number) => number,
            FieldValue::Text(text) => match text.trim().parse::<f64>() {
                Ok(number) if number.is_finite() => number,
                _ => f64::NAN,
            },
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}
