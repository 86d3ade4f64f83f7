use serde::{Deserialize, Serialize, Serializer};

/// A registration that passed validation and normalization.
///
/// Field order is significant: the rendered preview lists `name`, `email`,
/// `password` and `techs` in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub techs: Vec<TechEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechEntry {
    pub title: String,
    #[serde(serialize_with = "serialize_knowledge")]
    pub knowledge: f64,
}

/// Whole numbers are written without a fractional part (`80`, not `80.0`).
pub(crate) fn serialize_knowledge<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
