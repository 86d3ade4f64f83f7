use crate::modules::registration::core::errors::FieldErrors;
use crate::modules::registration::core::registration::UserRegistration;

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Accepted { registration: UserRegistration },
    Rejected { errors: FieldErrors },
}

impl Decision {
    pub fn into_result(self) -> Result<UserRegistration, FieldErrors> {
        match self {
            Decision::Accepted { registration } => Ok(registration),
            Decision::Rejected { errors } => Err(errors),
        }
    }
}
