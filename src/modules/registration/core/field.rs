use std::fmt;
use std::str::FromStr;

use crate::modules::registration::core::errors::FormError;

/// Path to one editable input, written as `name`, `email`, `password`,
/// `techs.<index>.title` or `techs.<index>.knowledge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Password,
    TechTitle(usize),
    TechKnowledge(usize),
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || FormError::UnknownField(s.to_string());
        match s {
            "name" => Ok(FieldName::Name),
            "email" => Ok(FieldName::Email),
            "password" => Ok(FieldName::Password),
            _ => {
                let rest = s.strip_prefix("techs.").ok_or_else(unknown)?;
                let (index, leaf) = rest.split_once('.').ok_or_else(unknown)?;
                let index = index.parse::<usize>().map_err(|_| unknown())?;
                match leaf {
                    "title" => Ok(FieldName::TechTitle(index)),
                    "knowledge" => Ok(FieldName::TechKnowledge(index)),
                    _ => Err(unknown()),
                }
            }
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldName::Name => f.write_str("name"),
            FieldName::Email => f.write_str("email"),
            FieldName::Password => f.write_str("password"),
            FieldName::TechTitle(index) => write!(f, "techs.{index}.title"),
            FieldName::TechKnowledge(index) => write!(f, "techs.{index}.knowledge"),
        }
    }
}
