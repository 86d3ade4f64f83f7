use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Misuse of the form's input surface. The draft is left untouched.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("no technology at index {index} (the list has {len} entries)")]
    NoSuchTech { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: &'static str,
}

/// Validation failures keyed by field path, in the order they were found.
///
/// Only the first message per path is kept. Serializes as a JSON object of
/// `path -> message`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, message: &'static str) {
        let path = path.into();
        if self.get(&path).is_none() {
            self.0.push(FieldError { path, message });
        }
    }

    pub fn get(&self, path: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.path == path)
            .map(|error| error.message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.path, error.message)?;
        }
        Ok(())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for error in &self.0 {
            map.serialize_entry(&error.path, error.message)?;
        }
        map.end()
    }
}
